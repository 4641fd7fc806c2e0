//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `fs/` - Resource finders and the artifact store
//! - `providers` - Parent-chain class providers
//! - `frontend/` - Declaration-language frontend
//! - `diagnostics` - Console diagnostic handler

pub mod diagnostics;
pub mod frontend;
pub mod fs;
pub mod providers;

// Re-export for convenience
pub use diagnostics::ConsoleDiagnostics;
pub use frontend::DeclFrontend;
pub use fs::{artifact_path, parse_path, ArtifactStore, DirectoriesResourceFinder, PathResourceFinder};
pub use providers::{ArtifactPathProvider, ParentChain};
