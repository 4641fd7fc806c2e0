//! Artifact encoding for the declaration frontend
//!
//! One JSON document per class. Debug info decides whether the source file
//! name and declaration line are recorded.

use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::ports::{Artifact, ArtifactMetadata};

pub const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassArtifact {
    pub format: u32,
    pub class: String,
    pub references: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<u32>,
}

impl ClassArtifact {
    pub fn new(class: impl Into<String>, references: Vec<String>) -> Self {
        Self {
            format: FORMAT_VERSION,
            class: class.into(),
            references,
            source: None,
            line: None,
        }
    }

    pub fn with_source(mut self, source: Option<String>) -> Self {
        self.source = source;
        self
    }

    pub fn with_line(mut self, line: Option<u32>) -> Self {
        self.line = line;
        self
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl Artifact for ClassArtifact {
    fn class_name(&self) -> &str {
        &self.class
    }

    fn write_to(&self, out: &mut dyn Write) -> std::io::Result<()> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        out.write_all(b"\n")
    }
}

/// Decode an artifact written by [`ClassArtifact::write_to`].
pub fn read_metadata(path: &Path, bytes: &[u8]) -> std::io::Result<ArtifactMetadata> {
    let artifact: ClassArtifact = serde_json::from_slice(bytes).map_err(|e| {
        std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("malformed artifact {}: {}", path.display(), e),
        )
    })?;
    if artifact.format != FORMAT_VERSION {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!(
                "artifact {} has format {}, expected {}",
                path.display(),
                artifact.format,
                FORMAT_VERSION
            ),
        ));
    }
    Ok(ArtifactMetadata {
        class_name: artifact.class,
        references: artifact.references,
    })
}
