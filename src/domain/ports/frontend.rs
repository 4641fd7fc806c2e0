//! Frontend port - the language-specific collaborators
//!
//! Turns source text into compilation units and reads the metadata back out
//! of artifacts it produced earlier. Everything about the source language
//! and the artifact layout stays behind this trait.

use std::path::Path;

use crate::domain::ports::compilation_unit::CompilationUnit;
use crate::error::SyntaxError;

/// What the core needs to know about a stored artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactMetadata {
    pub class_name: String,
    /// Classes the artifact refers to, fully qualified.
    pub references: Vec<String>,
}

impl ArtifactMetadata {
    /// `InvalidData` unless the artifact holds `expected`.
    pub fn ensure_class(&self, expected: &str) -> std::io::Result<()> {
        if self.class_name == expected {
            return Ok(());
        }
        Err(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!(
                "artifact holds class '{}', expected '{}'",
                self.class_name, expected
            ),
        ))
    }
}

pub trait Frontend {
    /// Parse the decoded text of `path`.
    fn parse(&self, path: &Path, text: &str) -> Result<Box<dyn CompilationUnit>, SyntaxError>;

    /// Read an artifact's metadata. Malformed input is `InvalidData`.
    fn read_artifact(&self, path: &Path, bytes: &[u8]) -> std::io::Result<ArtifactMetadata>;
}
