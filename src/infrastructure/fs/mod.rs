//! File System Implementations
//!
//! - `finder` - search-path resource finders
//! - `store` - artifact location and persistence

mod finder;
mod store;

pub use finder::{parse_path, DirectoriesResourceFinder, PathResourceFinder};
pub use store::{artifact_path, ArtifactStore};
