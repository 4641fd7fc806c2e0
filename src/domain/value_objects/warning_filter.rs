//! Warning Filter Value Object
//!
//! Selects which warning handles get reported. Written as a combined
//! pattern list such as `*-IA*+IASF`: the first pattern includes, every
//! following pattern is prefixed with `+` (include) or `-` (exclude). The
//! right-most pattern that matches a handle decides.
//!
//! Matching is delegated to the `ignore` crate: an include becomes an
//! ignore line, an exclude a `!` whitelist line, and gitignore's own
//! last-match-wins rule does the rest.

use std::str::FromStr;

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use ignore::Match;

/// Compiled warning-handle patterns.
///
/// The default filter has no patterns and therefore reports nothing.
#[derive(Debug, Clone, Default)]
pub struct WarningFilter {
    matcher: Option<Gitignore>,
}

impl WarningFilter {
    /// A filter that reports every warning.
    pub fn all() -> Self {
        match "*".parse() {
            Ok(filter) => filter,
            Err(_) => Self::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.matcher.as_ref().map_or(true, |m| m.is_empty())
    }

    /// Whether a warning with this handle should be reported.
    pub fn matches(&self, handle: &str) -> bool {
        if handle.is_empty() {
            return false;
        }
        match &self.matcher {
            Some(matcher) => matches!(matcher.matched(handle, false), Match::Ignore(_)),
            None => false,
        }
    }
}

impl FromStr for WarningFilter {
    type Err = WarningFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut builder = GitignoreBuilder::new("");
        let mut include = true;
        let mut count = 0;

        for glob in split_patterns(s) {
            match glob {
                Segment::Mode(mode) => include = mode,
                Segment::Glob(glob) => {
                    let line = gitignore_line(glob, include);
                    builder
                        .add_line(None, &line)
                        .map_err(|e| WarningFilterError {
                            pattern: glob.to_string(),
                            message: e.to_string(),
                        })?;
                    count += 1;
                }
            }
        }

        if count == 0 {
            return Ok(Self::default());
        }
        let matcher = builder.build().map_err(|e| WarningFilterError {
            pattern: s.to_string(),
            message: e.to_string(),
        })?;
        Ok(Self {
            matcher: Some(matcher),
        })
    }
}

enum Segment<'a> {
    /// `true` for `+`, `false` for `-`
    Mode(bool),
    Glob(&'a str),
}

fn split_patterns(s: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut start = 0;
    for (i, c) in s.char_indices() {
        if c == '+' || c == '-' {
            if start < i {
                segments.push(Segment::Glob(&s[start..i]));
            }
            segments.push(Segment::Mode(c == '+'));
            start = i + c.len_utf8();
        }
    }
    if start < s.len() {
        segments.push(Segment::Glob(&s[start..]));
    }
    segments
}

/// Handles are plain identifiers, so gitignore's comment and negation
/// markers are escaped when they lead a glob.
fn gitignore_line(glob: &str, include: bool) -> String {
    let escaped = if glob.starts_with('#') || glob.starts_with('!') {
        format!("\\{}", glob)
    } else {
        glob.to_string()
    };
    if include {
        escaped
    } else {
        format!("!{}", escaped)
    }
}

/// A pattern the glob engine refused.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid warning pattern '{pattern}': {message}")]
pub struct WarningFilterError {
    pub pattern: String,
    pub message: String,
}
