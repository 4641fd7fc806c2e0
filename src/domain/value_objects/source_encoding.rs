//! Source Encoding Value Object
//!
//! Character encoding used to decode source files before parsing.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CompileError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SourceEncoding {
    #[default]
    Utf8,
    /// ISO-8859-1: every byte is the code point of the same value.
    Latin1,
}

impl SourceEncoding {
    /// Decode raw file content.
    pub fn decode(self, bytes: Vec<u8>) -> std::io::Result<String> {
        match self {
            SourceEncoding::Utf8 => String::from_utf8(bytes)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e)),
            SourceEncoding::Latin1 => Ok(bytes.into_iter().map(char::from).collect()),
        }
    }
}

impl FromStr for SourceEncoding {
    type Err = CompileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "utf-8" | "utf8" => Ok(SourceEncoding::Utf8),
            "iso-8859-1" | "latin1" | "latin-1" => Ok(SourceEncoding::Latin1),
            _ => Err(CompileError::UnsupportedEncoding {
                name: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for SourceEncoding {
    type Error = CompileError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SourceEncoding> for String {
    fn from(value: SourceEncoding) -> Self {
        value.to_string()
    }
}

impl fmt::Display for SourceEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceEncoding::Utf8 => f.write_str("UTF-8"),
            SourceEncoding::Latin1 => f.write_str("ISO-8859-1"),
        }
    }
}
