//! Compile session state
//!
//! The worklist and the resolution cache are shared between the driver and
//! the resolver for the duration of one `compile` call. Both are written
//! only from the single call stack that runs the session, so interior
//! mutability through `RefCell` is enough; no borrow is ever held across a
//! call back into a compilation unit or the resolver.

use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::domain::entities::{ClassDescriptor, ClassRef};
use crate::domain::ports::CompilationUnit;
use crate::domain::value_objects::{DebugInfo, SourceEncoding};

/// Session settings the resolver and driver read.
#[derive(Debug, Clone)]
pub struct SessionOptions {
    pub output_dir: Option<PathBuf>,
    pub encoding: SourceEncoding,
    pub rebuild: bool,
    pub debug_info: DebugInfo,
    /// Namespace prefixes never resolved locally, e.g. `"std."`.
    pub reserved: Vec<String>,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            output_dir: None,
            encoding: SourceEncoding::default(),
            rebuild: false,
            debug_info: DebugInfo::default(),
            reserved: vec!["std.".to_string()],
        }
    }
}

pub struct Session {
    options: SessionOptions,
    worklist: RefCell<Vec<Rc<dyn CompilationUnit>>>,
    /// `None` entries record classes that were looked for and not found.
    cache: RefCell<HashMap<String, Option<ClassRef>>>,
}

impl Session {
    pub fn new(options: SessionOptions) -> Self {
        Self {
            options,
            worklist: RefCell::new(Vec::new()),
            cache: RefCell::new(HashMap::new()),
        }
    }

    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Forget all units and outcomes from a previous session.
    pub fn reset(&self) {
        self.worklist.borrow_mut().clear();
        self.cache.borrow_mut().clear();
    }

    /// Append a unit; returns its index.
    pub fn push_unit(&self, unit: Rc<dyn CompilationUnit>) -> usize {
        let mut worklist = self.worklist.borrow_mut();
        worklist.push(unit);
        worklist.len() - 1
    }

    pub fn unit(&self, index: usize) -> Option<Rc<dyn CompilationUnit>> {
        self.worklist.borrow().get(index).cloned()
    }

    pub fn unit_count(&self) -> usize {
        self.worklist.borrow().len()
    }

    pub fn unit_paths(&self) -> Vec<PathBuf> {
        self.worklist
            .borrow()
            .iter()
            .map(|u| u.source_path().to_path_buf())
            .collect()
    }

    /// The unit already parsed from `path`, if any.
    pub fn unit_for_source(&self, path: &Path) -> Option<Rc<dyn CompilationUnit>> {
        self.worklist
            .borrow()
            .iter()
            .find(|unit| unit.source_path() == path)
            .cloned()
    }

    /// First unit, in append order, that declares `name`.
    pub fn find_in_units(&self, name: &str) -> Option<ClassDescriptor> {
        self.worklist
            .borrow()
            .iter()
            .find_map(|unit| unit.find_declared_class(name))
    }

    /// The recorded outcome for `name`, if it was resolved before.
    pub fn cached(&self, name: &str) -> Option<Option<ClassRef>> {
        self.cache.borrow().get(name).cloned()
    }

    /// Record the outcome for `name`. The first outcome sticks.
    pub fn register(&self, name: &str, outcome: Option<ClassRef>) -> Option<ClassRef> {
        self.cache
            .borrow_mut()
            .entry(name.to_string())
            .or_insert(outcome)
            .clone()
    }

    pub fn resolved_count(&self) -> usize {
        self.cache.borrow().values().filter(|o| o.is_some()).count()
    }

    /// Read and decode a source file with the session's encoding.
    pub fn read_source(&self, path: &Path) -> std::io::Result<String> {
        self.options.encoding.decode(std::fs::read(path)?)
    }
}
