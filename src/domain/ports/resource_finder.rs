//! ResourceFinder port - search-path lookup
//!
//! Maps a logical resource name (`com/acme/Main.src`) to a file somewhere
//! on a search path.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// A located resource: a file with a readable byte stream and a
/// modification time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resource {
    path: PathBuf,
}

impl Resource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn last_modified(&self) -> std::io::Result<SystemTime> {
        std::fs::metadata(&self.path)?.modified()
    }

    pub fn read(&self) -> std::io::Result<Vec<u8>> {
        std::fs::read(&self.path)
    }
}

/// Abstract search path
///
/// Implementations:
/// - `PathResourceFinder` - ordered list of root directories
/// - `DirectoriesResourceFinder` - every sub-directory of some directories
pub trait ResourceFinder {
    /// Locate `name`, or `None` when no root holds it.
    fn find_resource(&self, name: &str) -> Option<Resource>;
}

impl<F: ResourceFinder + ?Sized> ResourceFinder for Box<F> {
    fn find_resource(&self, name: &str) -> Option<Resource> {
        (**self).find_resource(name)
    }
}
