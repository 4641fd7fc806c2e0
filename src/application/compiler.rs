//! Compilation driver
//!
//! Parses the entry files, then walks the worklist in append order and
//! compiles each unit exactly once. Units discovered through the source
//! path while compiling are appended to the same worklist and picked up by
//! the same loop, so circular references between discovered sources are as
//! legal as circular references between entry files.

use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::config::Config;
use crate::domain::ports::{
    ClassProvider, CompilationUnit, CompileContext, DiagnosticHandler, Frontend, ResourceFinder,
};
use crate::domain::value_objects::WarningFilter;
use crate::error::{CompileError, KilnResult};
use crate::infrastructure::fs::{ArtifactStore, DirectoriesResourceFinder, PathResourceFinder};
use crate::infrastructure::providers::{ArtifactPathProvider, ParentChain};

use super::reporter::Reporter;
use super::resolver::SourceClassResolver;
use super::session::{Session, SessionOptions};

/// Default number of reported errors after which a session aborts.
pub const DEFAULT_ERROR_LIMIT: usize = 20;

/// Result of one compile session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompileOutcome {
    /// Units whose compile step ran, entry files and discovered ones.
    pub units_compiled: usize,
    /// Artifacts written, in the order they were stored.
    pub artifacts: Vec<PathBuf>,
    pub errors: usize,
    pub warnings: usize,
}

impl CompileOutcome {
    /// No errors were reported.
    pub fn succeeded(&self) -> bool {
        self.errors == 0
    }
}

pub struct Compiler {
    session: Rc<Session>,
    resolver: SourceClassResolver,
    frontend: Rc<dyn Frontend>,
    store: ArtifactStore,
    error_limit: usize,
    warnings: WarningFilter,
    storing: bool,
}

impl Compiler {
    pub fn new(
        options: SessionOptions,
        frontend: Rc<dyn Frontend>,
        source_finder: Box<dyn ResourceFinder>,
        parent: Box<dyn ClassProvider>,
    ) -> Self {
        let store = ArtifactStore::new(options.output_dir.clone());
        let session = Rc::new(Session::new(options));
        let resolver =
            SourceClassResolver::new(session.clone(), frontend.clone(), source_finder, parent);
        Self {
            session,
            resolver,
            frontend,
            store,
            error_limit: DEFAULT_ERROR_LIMIT,
            warnings: WarningFilter::default(),
            storing: true,
        }
    }

    /// Wire a compiler from configuration.
    ///
    /// Sources are searched on the source path, or on the class path when
    /// no source path is set. The parent chain is boot path, then every
    /// package folder in the extension directories, then the class path.
    pub fn from_config(config: &Config, frontend: Rc<dyn Frontend>) -> Self {
        let source_roots = config
            .source
            .path
            .clone()
            .unwrap_or_else(|| config.classpath.paths.clone());
        let parent = parent_chain(config, frontend.clone());

        tracing::debug!(
            source_path = ?source_roots,
            parent = ?parent.provider_names(),
            output_dir = ?config.output.dir,
            "search paths"
        );

        let mut compiler = Compiler::new(
            config.session_options(),
            frontend,
            Box::new(PathResourceFinder::new(source_roots)),
            Box::new(parent),
        )
        .with_error_limit(config.build.error_limit)
        .with_warnings(config.warning_filter());
        compiler.set_storing_artifacts(config.output.store);
        compiler
    }

    pub fn with_error_limit(mut self, error_limit: usize) -> Self {
        self.error_limit = error_limit;
        self
    }

    pub fn with_warnings(mut self, warnings: WarningFilter) -> Self {
        self.warnings = warnings;
        self
    }

    /// When off, units are still compiled but no artifacts are written.
    pub fn set_storing_artifacts(&mut self, storing: bool) {
        self.storing = storing;
    }

    pub fn resolver(&self) -> &SourceClassResolver {
        &self.resolver
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn store(&self) -> &ArtifactStore {
        &self.store
    }

    /// Compile `files` and everything they transitively need.
    ///
    /// Entry files are all parsed before anything is compiled, so they may
    /// reference each other freely. A parse failure aborts at once. Errors
    /// reported while compiling turn artifact storing off for the rest of
    /// the session; reaching the error limit aborts it.
    pub fn compile(
        &self,
        files: &[PathBuf],
        handler: &mut dyn DiagnosticHandler,
    ) -> KilnResult<CompileOutcome> {
        let _session_span = tracing::info_span!("compile", files = files.len()).entered();
        self.session.reset();

        for file in files {
            let unit = self.parse_file(file)?;
            self.session.push_unit(unit);
        }

        let reporter = Reporter::new(handler, &self.warnings, self.error_limit);
        let mut outcome = CompileOutcome::default();

        // The worklist may grow while units compile; re-read its length on
        // every step.
        let mut index = 0;
        while let Some(unit) = self.session.unit(index) {
            index += 1;
            let source = unit.source_path().to_path_buf();
            let _unit_span =
                tracing::info_span!("unit", source = %source.display()).entered();

            let ctx = CompileContext {
                resolver: &self.resolver,
                debug_info: self.session.options().debug_info,
                reporting: &reporter,
            };
            let artifacts = unit.compile(&ctx).map_err(CompileError::from)?;
            outcome.units_compiled += 1;

            if self.storing && reporter.error_count() == 0 {
                for artifact in &artifacts {
                    let path = self.store.persist(artifact.as_ref(), &source)?;
                    outcome.artifacts.push(path);
                }
                tracing::info!(count = artifacts.len(), "stored artifacts");
            } else {
                tracing::info!(count = artifacts.len(), "not storing artifacts");
            }
        }

        outcome.errors = reporter.error_count();
        outcome.warnings = reporter.warning_count();
        tracing::info!(
            units = outcome.units_compiled,
            errors = outcome.errors,
            "compiled {} unit(s)",
            outcome.units_compiled
        );
        Ok(outcome)
    }

    fn parse_file(&self, file: &Path) -> KilnResult<Rc<dyn CompilationUnit>> {
        let _span = tracing::debug_span!("parse", file = %file.display()).entered();
        let text = self
            .session
            .read_source(file)
            .map_err(|e| CompileError::io(file, e))?;
        let unit = self.frontend.parse(file, &text)?;
        Ok(Rc::from(unit))
    }
}

/// Boot path → extension directories → class path.
pub fn parent_chain(config: &Config, frontend: Rc<dyn Frontend>) -> ParentChain {
    ParentChain::new(vec![
        Box::new(ArtifactPathProvider::new(
            "boot",
            Box::new(PathResourceFinder::new(config.classpath.boot.clone())),
            frontend.clone(),
        )),
        Box::new(ArtifactPathProvider::new(
            "ext",
            Box::new(DirectoriesResourceFinder::new(&config.classpath.ext_dirs)),
            frontend.clone(),
        )),
        Box::new(ArtifactPathProvider::new(
            "classpath",
            Box::new(PathResourceFinder::new(config.classpath.paths.clone())),
            frontend,
        )),
    ])
}
