//! Kiln - incremental compilation driver
//!
//! Kiln compiles a set of source files together with everything they
//! transitively reference. Referenced classes are found on demand: from
//! units already in the session, from up-to-date artifacts, or by parsing
//! further sources from the source path and compiling them in the same
//! session. Artifacts are written to an output root or next to their
//! sources.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{CompileOutcome, Compiler, SessionOptions, SourceClassResolver};
pub use config::{Config, ConfigWarning};
pub use domain::entities::{ClassDescriptor, ClassOrigin, ClassRef};
pub use domain::ports::{CollectingHandler, Diagnostic, DiagnosticHandler, Severity, Verdict};
pub use domain::value_objects::{DebugInfo, SourceEncoding, WarningFilter};
pub use error::{CompileError, KilnResult};
pub use infrastructure::{ArtifactStore, ConsoleDiagnostics, DeclFrontend};
