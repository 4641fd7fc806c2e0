//! Search-path resource finders

use std::path::{Path, PathBuf};

use crate::domain::ports::{Resource, ResourceFinder};

/// Split a platform path list (`a:b:c`, or `a;b;c` on Windows).
pub fn parse_path(list: &str) -> Vec<PathBuf> {
    std::env::split_paths(list)
        .filter(|p| !p.as_os_str().is_empty())
        .collect()
}

/// Looks a resource up under each root directory in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathResourceFinder {
    roots: Vec<PathBuf>,
}

impl PathResourceFinder {
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self { roots }
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }
}

impl ResourceFinder for PathResourceFinder {
    fn find_resource(&self, name: &str) -> Option<Resource> {
        self.roots
            .iter()
            .map(|root| root.join(name))
            .find(|candidate| candidate.is_file())
            .map(Resource::new)
    }
}

/// Treats every sub-directory of the given directories as a root, in name
/// order within each directory. Used for extension directories, where each
/// installed package is unpacked into its own folder.
#[derive(Debug, Clone, Default)]
pub struct DirectoriesResourceFinder {
    inner: PathResourceFinder,
}

impl DirectoriesResourceFinder {
    pub fn new(directories: &[PathBuf]) -> Self {
        let roots = directories
            .iter()
            .flat_map(|dir| sub_directories(dir))
            .collect();
        Self {
            inner: PathResourceFinder::new(roots),
        }
    }

    pub fn roots(&self) -> &[PathBuf] {
        self.inner.roots()
    }
}

impl ResourceFinder for DirectoriesResourceFinder {
    fn find_resource(&self, name: &str) -> Option<Resource> {
        self.inner.find_resource(name)
    }
}

fn sub_directories(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        tracing::debug!(dir = %dir.display(), "extension directory not readable, skipping");
        return Vec::new();
    };
    let mut dirs: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    dirs.sort();
    dirs
}
