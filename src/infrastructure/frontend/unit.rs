//! Compilation units of the declaration frontend

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::domain::entities::{simple_name, ClassDescriptor, ClassOrigin, ClassRef};
use crate::domain::ports::{Artifact, ClassResolver, CompilationUnit, CompileContext};
use crate::error::{Location, ResolveError, UnitError};

use super::artifact::ClassArtifact;

/// A dotted name as written, with where it was written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameRef {
    pub name: String,
    pub location: Location,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDecl {
    /// Fully qualified.
    pub name: String,
    pub uses: Vec<NameRef>,
    /// Position of the `class` keyword.
    pub location: Location,
}

/// One parsed declaration file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclUnit {
    path: PathBuf,
    package: Option<String>,
    imports: Vec<NameRef>,
    classes: Vec<ClassDecl>,
}

impl DeclUnit {
    pub fn new(
        path: PathBuf,
        package: Option<String>,
        imports: Vec<NameRef>,
        classes: Vec<ClassDecl>,
    ) -> Self {
        Self {
            path,
            package,
            imports,
            classes,
        }
    }

    pub fn package(&self) -> Option<&str> {
        self.package.as_deref()
    }

    pub fn imports(&self) -> &[NameRef] {
        &self.imports
    }

    pub fn classes(&self) -> &[ClassDecl] {
        &self.classes
    }

    /// Resolve a name as written inside this unit: qualified names as they
    /// are, simple names through the imports, then the unit's own package,
    /// then the default package.
    fn qualify(
        &self,
        written: &str,
        resolver: &dyn ClassResolver,
        used_imports: &mut HashSet<usize>,
    ) -> Result<Option<ClassRef>, ResolveError> {
        if written.contains('.') {
            return resolver.resolve(written);
        }

        if let Some((idx, import)) = self
            .imports
            .iter()
            .enumerate()
            .find(|(_, import)| simple_name(&import.name) == written)
        {
            used_imports.insert(idx);
            return resolver.resolve(&import.name);
        }

        if let Some(pkg) = &self.package {
            if let Some(class) = resolver.resolve(&format!("{}.{}", pkg, written))? {
                return Ok(Some(class));
            }
        }

        resolver.resolve(written)
    }
}

impl CompilationUnit for DeclUnit {
    fn source_path(&self) -> &Path {
        &self.path
    }

    fn find_declared_class(&self, name: &str) -> Option<ClassDescriptor> {
        self.classes.iter().find(|c| c.name == name).map(|c| {
            ClassDescriptor::new(
                c.name.clone(),
                c.uses.iter().map(|u| u.name.clone()).collect(),
                ClassOrigin::Unit {
                    source: self.path.clone(),
                },
            )
        })
    }

    fn compile(&self, ctx: &CompileContext<'_>) -> Result<Vec<Box<dyn Artifact>>, UnitError> {
        let mut used_imports = HashSet::new();

        for import in &self.imports {
            if ctx.resolver.resolve(&import.name)?.is_none() {
                ctx.reporting.error(
                    &format!("cannot resolve import '{}'", import.name),
                    Some(import.location.clone()),
                )?;
            }
        }

        let mut seen = HashSet::new();
        let mut artifacts: Vec<Box<dyn Artifact>> = Vec::with_capacity(self.classes.len());
        for class in &self.classes {
            if !seen.insert(class.name.as_str()) {
                ctx.reporting.error(
                    &format!("duplicate class '{}'", class.name),
                    Some(class.location.clone()),
                )?;
                continue;
            }

            let mut references = Vec::with_capacity(class.uses.len());
            for used in &class.uses {
                match self.qualify(&used.name, ctx.resolver, &mut used_imports)? {
                    Some(resolved) => references.push(resolved.name().to_string()),
                    None => ctx.reporting.error(
                        &format!("cannot resolve class '{}'", used.name),
                        Some(used.location.clone()),
                    )?,
                }
            }

            let source = ctx
                .debug_info
                .source
                .then(|| self.path.file_name().map(|f| f.to_string_lossy().into_owned()))
                .flatten();
            let line = ctx.debug_info.lines.then_some(class.location.line);
            artifacts.push(Box::new(
                ClassArtifact::new(class.name.clone(), references)
                    .with_source(source)
                    .with_line(line),
            ));
        }

        for (idx, import) in self.imports.iter().enumerate() {
            if !used_imports.contains(&idx) {
                ctx.reporting.warning(
                    "UNUSED_IMPORT",
                    &format!("import '{}' is never used", import.name),
                    Some(import.location.clone()),
                );
            }
        }

        Ok(artifacts)
    }
}
