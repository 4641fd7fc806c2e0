//! Debug Info Value Object
//!
//! Which debugging information a compile step should emit. The driver does
//! not interpret it; it is handed through to every compilation unit.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Debugging information level.
///
/// Written as `none`, `all`, or a comma separated subset of
/// `lines,vars,source`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DebugInfo {
    pub lines: bool,
    pub vars: bool,
    pub source: bool,
}

impl DebugInfo {
    pub const NONE: DebugInfo = DebugInfo {
        lines: false,
        vars: false,
        source: false,
    };

    pub const ALL: DebugInfo = DebugInfo {
        lines: true,
        vars: true,
        source: true,
    };
}

impl Default for DebugInfo {
    /// Line numbers and source file name.
    fn default() -> Self {
        DebugInfo {
            lines: true,
            vars: false,
            source: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid debugging option '{0}' (expected none, all, or a list of lines,vars,source)")]
pub struct ParseDebugInfoError(pub String);

impl FromStr for DebugInfo {
    type Err = ParseDebugInfoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().to_lowercase();
        match trimmed.as_str() {
            "none" => return Ok(DebugInfo::NONE),
            "all" => return Ok(DebugInfo::ALL),
            _ => {}
        }

        let mut info = DebugInfo::NONE;
        for part in trimmed.split(',').map(str::trim) {
            match part {
                "lines" => info.lines = true,
                "vars" => info.vars = true,
                "source" => info.source = true,
                _ => return Err(ParseDebugInfoError(s.to_string())),
            }
        }
        Ok(info)
    }
}

impl TryFrom<String> for DebugInfo {
    type Error = ParseDebugInfoError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DebugInfo> for String {
    fn from(value: DebugInfo) -> Self {
        value.to_string()
    }
}

impl fmt::Display for DebugInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if *self == DebugInfo::NONE {
            return f.write_str("none");
        }
        if *self == DebugInfo::ALL {
            return f.write_str("all");
        }
        let parts: Vec<&str> = [
            (self.lines, "lines"),
            (self.vars, "vars"),
            (self.source, "source"),
        ]
        .into_iter()
        .filter_map(|(on, name)| on.then_some(name))
        .collect();
        f.write_str(&parts.join(","))
    }
}
