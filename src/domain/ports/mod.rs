//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the core.
//! The infrastructure layer provides concrete implementations.

pub mod class_provider;
pub mod compilation_unit;
pub mod diagnostics;
pub mod frontend;
pub mod resource_finder;

pub use class_provider::ClassProvider;
pub use compilation_unit::{Artifact, ClassResolver, CompilationUnit, CompileContext};
pub use diagnostics::{
    CollectingHandler, Diagnostic, DiagnosticHandler, Reporting, Severity, Verdict,
};
pub use frontend::{ArtifactMetadata, Frontend};
pub use resource_finder::{Resource, ResourceFinder};
