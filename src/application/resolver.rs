//! Source-aware class resolver
//!
//! Resolves a class name in this order, first hit wins:
//!
//! 1. reserved namespace → straight to the parent chain
//! 2. a unit already in the worklist that declares the class
//! 3. a source file on the source path, then either
//!    - its artifact, when that is at least as new as the source (and no
//!      rebuild is forced), or
//!    - the source itself, parsed and appended to the worklist
//! 4. the parent chain
//!
//! Every outcome is registered in the session cache before any follow-up
//! resolution runs, which is what makes circular references terminate.

use std::rc::Rc;
use std::time::SystemTime;

use crate::domain::entities::{
    is_reserved, source_resource_name, ClassDescriptor, ClassOrigin, ClassRef,
};
use crate::domain::ports::{
    ClassProvider, ClassResolver, CompilationUnit, Frontend, Resource, ResourceFinder,
};
use crate::error::ResolveError;
use crate::infrastructure::fs::artifact_path;

use super::session::Session;

/// Whether a source needs recompiling given its artifact's mtime.
///
/// A missing artifact counts as older than any source; equal timestamps
/// keep the artifact.
pub fn is_stale(source: SystemTime, artifact: Option<SystemTime>) -> bool {
    match artifact {
        Some(artifact) => source > artifact,
        None => true,
    }
}

pub struct SourceClassResolver {
    session: Rc<Session>,
    frontend: Rc<dyn Frontend>,
    source_finder: Box<dyn ResourceFinder>,
    parent: Box<dyn ClassProvider>,
}

impl SourceClassResolver {
    pub fn new(
        session: Rc<Session>,
        frontend: Rc<dyn Frontend>,
        source_finder: Box<dyn ResourceFinder>,
        parent: Box<dyn ClassProvider>,
    ) -> Self {
        Self {
            session,
            frontend,
            source_finder,
            parent,
        }
    }

    pub fn session(&self) -> &Rc<Session> {
        &self.session
    }

    /// Local lookup: worklist, then source path. `Ok(None)` hands over to
    /// the parent chain.
    fn find_locally(&self, name: &str) -> Result<Option<ClassRef>, ResolveError> {
        if let Some(class) = self.session.find_in_units(name) {
            tracing::debug!(class = name, "found in parsed compilation unit");
            return Ok(self.session.register(name, Some(Rc::new(class))));
        }

        let Some(source) = self.source_finder.find_resource(&source_resource_name(name)) else {
            return Ok(None);
        };

        if self.session.options().rebuild {
            tracing::debug!(class = name, source = %source.path().display(), "rebuild forced");
            return self.define_from_source(&source, name);
        }

        let source_modified = source
            .last_modified()
            .map_err(|e| ResolveError::io(source.path(), e))?;
        let artifact = artifact_path(
            name,
            source.path(),
            self.session.options().output_dir.as_deref(),
        );
        let artifact_modified = std::fs::metadata(&artifact)
            .and_then(|m| m.modified())
            .ok();

        if is_stale(source_modified, artifact_modified) {
            tracing::debug!(class = name, source = %source.path().display(), "artifact missing or out of date");
            self.define_from_source(&source, name)
        } else {
            tracing::debug!(class = name, artifact = %artifact.display(), "reusing artifact");
            self.define_from_artifact(name, &artifact).map(Some)
        }
    }

    /// Parse `source`, queue it for compilation, and look the class up in it.
    ///
    /// The unit is not compiled here; the driver visits it later. A file
    /// that is already on the worklist is not parsed a second time.
    fn define_from_source(
        &self,
        source: &Resource,
        name: &str,
    ) -> Result<Option<ClassRef>, ResolveError> {
        let path = source.path();
        let declared = match self.session.unit_for_source(path) {
            Some(unit) => {
                tracing::trace!(class = name, source = %path.display(), "source already parsed");
                unit.find_declared_class(name)
            }
            None => {
                let text = self
                    .session
                    .read_source(path)
                    .map_err(|e| ResolveError::io(path, e))?;
                let unit: Rc<dyn CompilationUnit> =
                    Rc::from(self.frontend.parse(path, &text)?);
                let declared = unit.find_declared_class(name);
                self.session.push_unit(unit);
                declared
            }
        };

        match declared {
            Some(class) => Ok(self.session.register(name, Some(Rc::new(class)))),
            None => {
                tracing::warn!(
                    class = name,
                    source = %path.display(),
                    "source file does not declare the class it was found for"
                );
                Ok(None)
            }
        }
    }

    /// Load the class from its artifact, then resolve everything the
    /// artifact references. A reference that does not resolve means the
    /// artifact cache is inconsistent.
    fn define_from_artifact(
        &self,
        name: &str,
        artifact: &std::path::Path,
    ) -> Result<ClassRef, ResolveError> {
        let bytes = std::fs::read(artifact).map_err(|e| ResolveError::io(artifact, e))?;
        let metadata = self
            .frontend
            .read_artifact(artifact, &bytes)
            .map_err(|e| ResolveError::io(artifact, e))?;
        metadata
            .ensure_class(name)
            .map_err(|e| ResolveError::io(artifact, e))?;

        let class = Rc::new(ClassDescriptor::new(
            metadata.class_name,
            metadata.references,
            ClassOrigin::Artifact {
                path: artifact.to_path_buf(),
            },
        ));
        // Registered before the references are walked so a cycle back to
        // this class sees it instead of loading the artifact again.
        let class = self
            .session
            .register(name, Some(class.clone()))
            .unwrap_or(class);

        for dependency in class.references() {
            if self.resolve(dependency)?.is_none() {
                return Err(ResolveError::Fault {
                    class: name.to_string(),
                    dependency: dependency.clone(),
                });
            }
        }
        Ok(class)
    }
}

impl ClassResolver for SourceClassResolver {
    fn resolve(&self, name: &str) -> Result<Option<ClassRef>, ResolveError> {
        if let Some(outcome) = self.session.cached(name) {
            tracing::trace!(class = name, found = outcome.is_some(), "cached");
            return Ok(outcome);
        }

        if is_reserved(name, &self.session.options().reserved) {
            tracing::trace!(class = name, "reserved namespace, deferring to parent chain");
        } else if let Some(class) = self.find_locally(name)? {
            return Ok(Some(class));
        }

        let provided = self.parent.find_class(name)?.map(Rc::new);
        if provided.is_none() {
            tracing::debug!(class = name, "class not found");
        }
        Ok(self.session.register(name, provided))
    }
}
