//! Parent-chain class providers
//!
//! The chain consulted after local resolution finds nothing: packaged
//! artifacts on the boot path, then in the extension directories, then on
//! the user class path.

use std::rc::Rc;

use crate::domain::entities::{artifact_resource_name, ClassDescriptor, ClassOrigin};
use crate::domain::ports::{ClassProvider, Frontend, ResourceFinder};
use crate::error::ResolveError;

/// Resolves classes from artifacts found through a [`ResourceFinder`].
pub struct ArtifactPathProvider {
    label: String,
    finder: Box<dyn ResourceFinder>,
    frontend: Rc<dyn Frontend>,
}

impl ArtifactPathProvider {
    pub fn new(
        label: impl Into<String>,
        finder: Box<dyn ResourceFinder>,
        frontend: Rc<dyn Frontend>,
    ) -> Self {
        Self {
            label: label.into(),
            finder,
            frontend,
        }
    }
}

impl ClassProvider for ArtifactPathProvider {
    fn name(&self) -> &str {
        &self.label
    }

    fn find_class(&self, name: &str) -> Result<Option<ClassDescriptor>, ResolveError> {
        let Some(resource) = self.finder.find_resource(&artifact_resource_name(name)) else {
            return Ok(None);
        };
        let bytes = resource
            .read()
            .map_err(|e| ResolveError::io(resource.path(), e))?;
        let metadata = self
            .frontend
            .read_artifact(resource.path(), &bytes)
            .map_err(|e| ResolveError::io(resource.path(), e))?;
        metadata
            .ensure_class(name)
            .map_err(|e| ResolveError::io(resource.path(), e))?;

        tracing::trace!(provider = %self.label, class = name, path = %resource.path().display(), "provided");
        Ok(Some(ClassDescriptor::new(
            metadata.class_name,
            metadata.references,
            ClassOrigin::Provider {
                provider: self.label.clone(),
                path: resource.path().to_path_buf(),
            },
        )))
    }
}

/// Ordered providers; the first one that knows a class wins.
#[derive(Default)]
pub struct ParentChain {
    providers: Vec<Box<dyn ClassProvider>>,
}

impl ParentChain {
    pub fn new(providers: Vec<Box<dyn ClassProvider>>) -> Self {
        Self { providers }
    }

    pub fn push(&mut self, provider: Box<dyn ClassProvider>) {
        self.providers.push(provider);
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    pub fn provider_names(&self) -> Vec<&str> {
        self.providers.iter().map(|p| p.name()).collect()
    }
}

impl ClassProvider for ParentChain {
    fn name(&self) -> &str {
        "parent"
    }

    fn find_class(&self, name: &str) -> Result<Option<ClassDescriptor>, ResolveError> {
        for provider in &self.providers {
            if let Some(class) = provider.find_class(name)? {
                return Ok(Some(class));
            }
        }
        Ok(None)
    }
}
