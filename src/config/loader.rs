//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CompileError, KilnResult};

use super::types::Config;

/// File name of the project configuration, looked up in the project root.
pub const PROJECT_CONFIG_FILE: &str = "kiln.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    /// The unrecognised key, last path segment only.
    pub key: String,
    pub file: PathBuf,
    /// 1-based.
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> KilnResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| CompileError::io(path, e))?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| CompileError::Config {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// User configuration file, `<config dir>/kiln/config.toml`.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("kiln").join("config.toml"))
}

/// Load the project config if there is one, else the user config, else
/// the defaults. Environment overrides are applied on top.
pub fn load_or_default(project_root: Option<&Path>) -> KilnResult<(Config, Vec<ConfigWarning>)> {
    let project = project_root.map(|root| root.join(PROJECT_CONFIG_FILE));
    let (config, warnings) =
        load_first(project.into_iter().chain(user_config_path()))?.unwrap_or_default();
    Ok((with_env_overrides(config), warnings))
}

/// Load the first of `candidates` that exists.
pub(super) fn load_first(
    candidates: impl IntoIterator<Item = PathBuf>,
) -> KilnResult<Option<(Config, Vec<ConfigWarning>)>> {
    for path in candidates {
        if path.is_file() {
            tracing::debug!(path = %path.display(), "loading configuration");
            return load_with_warnings(&path).map(Some);
        }
    }
    Ok(None)
}

/// Apply environment variable overrides (KILN_* prefix)
///
/// Values that do not parse are ignored with a warning.
pub fn with_env_overrides(mut config: Config) -> Config {
    // KILN_OUTPUT_DIR
    if let Ok(dir) = std::env::var("KILN_OUTPUT_DIR") {
        config.output.dir = (!dir.is_empty()).then(|| PathBuf::from(dir));
    }

    // KILN_ENCODING
    if let Ok(encoding) = std::env::var("KILN_ENCODING") {
        match encoding.parse() {
            Ok(parsed) => config.source.encoding = parsed,
            Err(e) => tracing::warn!(value = %encoding, "ignoring KILN_ENCODING: {}", e),
        }
    }

    // KILN_REBUILD
    if let Ok(val) = std::env::var("KILN_REBUILD") {
        config.build.rebuild = val.to_lowercase() != "false" && val != "0";
    }

    // KILN_ERROR_LIMIT
    if let Ok(limit) = std::env::var("KILN_ERROR_LIMIT") {
        match limit.trim().parse() {
            Ok(parsed) => config.build.error_limit = parsed,
            Err(e) => tracing::warn!(value = %limit, "ignoring KILN_ERROR_LIMIT: {}", e),
        }
    }

    // KILN_DEBUG
    if let Ok(level) = std::env::var("KILN_DEBUG") {
        match level.parse() {
            Ok(parsed) => config.build.debug = parsed,
            Err(e) => tracing::warn!(value = %level, "ignoring KILN_DEBUG: {}", e),
        }
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "output",
        "dir",
        "store",
        "source",
        "encoding",
        "path",
        "classpath",
        "paths",
        "ext_dirs",
        "boot",
        "build",
        "rebuild",
        "debug",
        "error_limit",
        "warnings",
        "reserved",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (*candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
