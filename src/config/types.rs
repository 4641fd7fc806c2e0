//! Configuration type definitions

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::application::{SessionOptions, DEFAULT_ERROR_LIMIT};
use crate::domain::value_objects::{DebugInfo, SourceEncoding, WarningFilter};
use crate::error::KilnResult;

use super::loader::{self, ConfigWarning};

/// Where and whether artifacts are written
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Output root; artifacts go next to their sources when unset.
    #[serde(default)]
    pub dir: Option<PathBuf>,

    #[serde(default = "default_true")]
    pub store: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: None,
            store: true,
        }
    }
}

/// Source file settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default)]
    pub encoding: SourceEncoding,

    /// Roots searched for sources; the class path when unset.
    #[serde(default)]
    pub path: Option<Vec<PathBuf>>,
}

/// Search paths for already-compiled classes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassPathConfig {
    #[serde(default = "default_class_path")]
    pub paths: Vec<PathBuf>,

    /// Each sub-directory of these is searched as a root.
    #[serde(default)]
    pub ext_dirs: Vec<PathBuf>,

    #[serde(default)]
    pub boot: Vec<PathBuf>,
}

impl Default for ClassPathConfig {
    fn default() -> Self {
        Self {
            paths: default_class_path(),
            ext_dirs: Vec::new(),
            boot: Vec::new(),
        }
    }
}

/// Build behaviour
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildConfig {
    /// Recompile sources even when their artifacts are up to date.
    #[serde(default)]
    pub rebuild: bool,

    #[serde(default)]
    pub debug: DebugInfo,

    /// 0 means no limit.
    #[serde(default = "default_error_limit")]
    pub error_limit: usize,

    /// Warning handle patterns, e.g. `"*-UNUSED_*"`. No warnings when unset.
    #[serde(default)]
    pub warnings: Option<String>,

    #[serde(default = "default_reserved")]
    pub reserved: Vec<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            rebuild: false,
            debug: DebugInfo::default(),
            error_limit: default_error_limit(),
            warnings: None,
            reserved: default_reserved(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_class_path() -> Vec<PathBuf> {
    vec![PathBuf::from(".")]
}

fn default_error_limit() -> usize {
    DEFAULT_ERROR_LIMIT
}

fn default_reserved() -> Vec<String> {
    vec!["std.".to_string()]
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub classpath: ClassPathConfig,

    #[serde(default)]
    pub build: BuildConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> KilnResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> KilnResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults
    pub fn load_or_default(project_root: Option<&Path>) -> KilnResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (KILN_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }

    pub fn session_options(&self) -> SessionOptions {
        SessionOptions {
            output_dir: self.output.dir.clone(),
            encoding: self.source.encoding,
            rebuild: self.build.rebuild,
            debug_info: self.build.debug,
            reserved: self.build.reserved.clone(),
        }
    }

    pub fn warning_filter(&self) -> WarningFilter {
        match &self.build.warnings {
            Some(patterns) => patterns.parse().unwrap_or_else(|e| {
                tracing::warn!(error = %e, "ignoring warning patterns");
                WarningFilter::default()
            }),
            None => WarningFilter::default(),
        }
    }
}
