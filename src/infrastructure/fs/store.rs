//! Artifact Store
//!
//! Computes where a class's artifact lives and writes it there. A write
//! that fails part way never leaves a truncated artifact behind.

use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::domain::entities::{simple_name, ARTIFACT_SUFFIX};
use crate::domain::ports::Artifact;
use crate::error::{CompileError, KilnResult};

/// Canonical artifact path for `class_name`.
///
/// With an output root: `root/pkg1/pkg2/Outer$Inner.out`.
/// Without one: next to the source file, `srcdir/Outer$Inner.out`.
pub fn artifact_path(class_name: &str, source_file: &Path, output_dir: Option<&Path>) -> PathBuf {
    match output_dir {
        Some(root) => root.join(format!(
            "{}{}",
            class_name.replace('.', std::path::MAIN_SEPARATOR_STR),
            ARTIFACT_SUFFIX
        )),
        None => source_file
            .parent()
            .unwrap_or_else(|| Path::new(""))
            .join(format!("{}{}", simple_name(class_name), ARTIFACT_SUFFIX)),
    }
}

/// Persists artifacts under an optional output root.
#[derive(Debug, Clone, Default)]
pub struct ArtifactStore {
    output_dir: Option<PathBuf>,
}

impl ArtifactStore {
    pub fn new(output_dir: Option<PathBuf>) -> Self {
        Self { output_dir }
    }

    pub fn output_dir(&self) -> Option<&Path> {
        self.output_dir.as_deref()
    }

    pub fn locate(&self, class_name: &str, source_file: &Path) -> PathBuf {
        artifact_path(class_name, source_file, self.output_dir.as_deref())
    }

    /// Write `artifact` to its canonical path and return that path.
    ///
    /// Missing parent directories are created. If serialization fails, the
    /// partial file is deleted before the error is returned; failing to
    /// delete it is reported as [`CompileError::IncompleteArtifact`].
    pub fn persist(&self, artifact: &dyn Artifact, source_file: &Path) -> KilnResult<PathBuf> {
        let path = self.locate(artifact.class_name(), source_file);

        if let Some(dir) = path.parent() {
            if !dir.as_os_str().is_empty() && !dir.is_dir() {
                std::fs::create_dir_all(dir).map_err(|e| CompileError::io(dir, e))?;
            }
        }

        let file = std::fs::File::create(&path).map_err(|e| CompileError::io(&path, e))?;
        let mut writer = BufWriter::new(file);
        let written = artifact
            .write_to(&mut writer)
            .and_then(|()| writer.flush());

        if let Err(source) = written {
            drop(writer);
            if let Err(delete_err) = std::fs::remove_file(&path) {
                return Err(CompileError::IncompleteArtifact {
                    path,
                    source: delete_err,
                });
            }
            return Err(CompileError::Io { path, source });
        }

        tracing::debug!(class = artifact.class_name(), path = %path.display(), "stored artifact");
        Ok(path)
    }

    /// Remove a stored artifact. Returns whether a file was there.
    pub fn delete(&self, class_name: &str, source_file: &Path) -> KilnResult<bool> {
        let path = self.locate(class_name, source_file);
        match std::fs::remove_file(&path) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
            Err(e) => Err(CompileError::io(&path, e)),
        }
    }
}
