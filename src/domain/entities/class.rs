//! Class entity - names and resolved class representations
//!
//! Class names are fully qualified and dot separated (`pkg1.pkg2.Outer$Inner`).
//! This module owns the arithmetic that maps such a name onto the relative
//! resource names searched on the source and class paths.

use std::path::{Path, PathBuf};
use std::rc::Rc;

/// File suffix of source files.
pub const SOURCE_SUFFIX: &str = ".src";

/// File suffix of binary class artifacts.
pub const ARTIFACT_SUFFIX: &str = ".out";

/// Package part of a class name, `None` for the default package.
pub fn package_of(class_name: &str) -> Option<&str> {
    class_name.rfind('.').map(|idx| &class_name[..idx])
}

/// Name without its package (`a.b.Outer$Inner` → `Outer$Inner`).
pub fn simple_name(class_name: &str) -> &str {
    match class_name.rfind('.') {
        Some(idx) => &class_name[idx + 1..],
        None => class_name,
    }
}

/// Relative path of the source file that declares `class_name`.
///
/// Nested classes live in their outermost class's file, so everything from
/// the first `$` of the simple name on is dropped.
pub fn source_resource_name(class_name: &str) -> String {
    let top_level = match class_name.rfind('.') {
        Some(dot) => match class_name[dot..].find('$') {
            Some(dollar) => &class_name[..dot + dollar],
            None => class_name,
        },
        None => class_name.split('$').next().unwrap_or(class_name),
    };
    format!("{}{}", top_level.replace('.', "/"), SOURCE_SUFFIX)
}

/// Relative path of the packaged artifact for `class_name`.
pub fn artifact_resource_name(class_name: &str) -> String {
    format!("{}{}", class_name.replace('.', "/"), ARTIFACT_SUFFIX)
}

/// Whether `class_name` lies in one of the reserved namespaces.
///
/// Reserved prefixes are given with their trailing dot (`"std."`).
pub fn is_reserved(class_name: &str, reserved: &[String]) -> bool {
    reserved
        .iter()
        .any(|prefix| !prefix.is_empty() && class_name.starts_with(prefix.as_str()))
}

/// Where a resolved class came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassOrigin {
    /// Declared by a parsed compilation unit.
    Unit { source: PathBuf },
    /// Loaded from a reusable artifact next to (or derived from) its source.
    Artifact { path: PathBuf },
    /// Supplied by one of the parent-chain providers.
    Provider { provider: String, path: PathBuf },
}

/// A resolved class.
///
/// `references` lists the fully qualified names the class depends on as far
/// as its origin records them; for artifacts this is the metadata that gets
/// resolved eagerly on reuse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDescriptor {
    name: String,
    references: Vec<String>,
    origin: ClassOrigin,
}

/// Shared handle to a resolved class; the resolver hands out clones of the
/// same `Rc` for every lookup of one name.
pub type ClassRef = Rc<ClassDescriptor>;

impl ClassDescriptor {
    pub fn new(name: impl Into<String>, references: Vec<String>, origin: ClassOrigin) -> Self {
        Self {
            name: name.into(),
            references,
            origin,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn references(&self) -> &[String] {
        &self.references
    }

    pub fn origin(&self) -> &ClassOrigin {
        &self.origin
    }

    /// Source file for classes declared by a compilation unit.
    pub fn source_path(&self) -> Option<&Path> {
        match &self.origin {
            ClassOrigin::Unit { source } => Some(source),
            _ => None,
        }
    }

    pub fn is_from_artifact(&self) -> bool {
        matches!(self.origin, ClassOrigin::Artifact { .. })
    }
}
