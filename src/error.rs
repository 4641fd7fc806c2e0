//! Error types for Kiln
//!
//! Uses `thiserror` for library errors. The resolver and a unit's compile
//! step each have their own narrow error type; both fold back into
//! [`CompileError`] at the driver so callers see one taxonomy no matter how
//! deep on-demand discovery went.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for Kiln operations
pub type KilnResult<T> = Result<T, CompileError>;

/// A position inside a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub file: PathBuf,
    pub line: u32,
    pub column: u32,
}

impl Location {
    pub fn new(file: impl Into<PathBuf>, line: u32, column: u32) -> Self {
        Self {
            file: file.into(),
            line,
            column,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file.display(), self.line, self.column)
    }
}

/// Scanning or parsing failure.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{location}: {message}")]
pub struct SyntaxError {
    pub location: Location,
    pub message: String,
}

impl SyntaxError {
    pub fn new(location: Location, message: impl Into<String>) -> Self {
        Self {
            location,
            message: message.into(),
        }
    }
}

/// Failure raised by a compile step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticError {
    pub message: String,
    pub location: Option<Location>,
}

impl SemanticError {
    pub fn new(message: impl Into<String>, location: Option<Location>) -> Self {
        Self {
            message: message.into(),
            location,
        }
    }
}

impl fmt::Display for SemanticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some(location) => write!(f, "{}: {}", location, self.message),
            None => f.write_str(&self.message),
        }
    }
}

impl std::error::Error for SemanticError {}

/// Errors that travel out of the class resolver.
///
/// Compilation units call back into the resolver while they compile; this
/// is what comes back through that call when parsing or loading a
/// dependency fails.
#[derive(Error, Debug)]
pub enum ResolveError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A reused artifact names a dependency that no longer resolves.
    #[error("could not resolve class '{dependency}' referenced by artifact of '{class}'")]
    Fault { class: String, dependency: String },
}

impl ResolveError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        ResolveError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Errors returned by a compilation unit's compile step.
#[derive(Error, Debug)]
pub enum UnitError {
    #[error(transparent)]
    Semantic(#[from] SemanticError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    /// The diagnostic handler asked to stop.
    #[error("compilation aborted after {count} error(s)")]
    Aborted { count: usize },

    /// The configured error threshold was reached.
    #[error("too many compile errors ({count})")]
    TooManyErrors { count: usize },
}

/// Main error type for Kiln operations
#[derive(Error, Debug)]
pub enum CompileError {
    #[error("syntax error: {0}")]
    Syntax(SyntaxError),

    #[error("error: {0}")]
    Semantic(SemanticError),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Writing failed and the partial file could not be removed either.
    #[error("could not delete incompletely written artifact {}: {source}", path.display())]
    IncompleteArtifact {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("could not resolve class '{dependency}' referenced by artifact of '{class}'")]
    ResolutionFault { class: String, dependency: String },

    #[error("too many compile errors ({count})")]
    TooManyErrors { count: usize },

    #[error("compilation aborted after {count} error(s)")]
    Aborted { count: usize },

    #[error("invalid configuration in {}: {message}", file.display())]
    Config { file: PathBuf, message: String },

    #[error("unsupported character encoding '{name}'")]
    UnsupportedEncoding { name: String },
}

impl CompileError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        CompileError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

impl From<SyntaxError> for CompileError {
    fn from(err: SyntaxError) -> Self {
        CompileError::Syntax(err)
    }
}

impl From<ResolveError> for CompileError {
    fn from(err: ResolveError) -> Self {
        match err {
            ResolveError::Syntax(e) => CompileError::Syntax(e),
            ResolveError::Io { path, source } => CompileError::Io { path, source },
            ResolveError::Fault { class, dependency } => {
                CompileError::ResolutionFault { class, dependency }
            }
        }
    }
}

impl From<UnitError> for CompileError {
    fn from(err: UnitError) -> Self {
        match err {
            UnitError::Semantic(e) => CompileError::Semantic(e),
            UnitError::Resolve(e) => e.into(),
            UnitError::Aborted { count } => CompileError::Aborted { count },
            UnitError::TooManyErrors { count } => CompileError::TooManyErrors { count },
        }
    }
}
