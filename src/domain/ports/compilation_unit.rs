//! CompilationUnit port - what the parser produces and the driver compiles
//!
//! A compilation unit is one parsed source file. While compiling, it asks a
//! [`ClassResolver`] for every class it references; that resolver may in
//! turn discover and parse further units.

use std::io::Write;
use std::path::Path;

use crate::domain::entities::{ClassDescriptor, ClassRef};
use crate::domain::ports::diagnostics::Reporting;
use crate::domain::value_objects::DebugInfo;
use crate::error::{ResolveError, UnitError};

/// Resolves fully qualified class names during compilation.
pub trait ClassResolver {
    /// `Ok(None)` means the class does not exist anywhere the resolver looks.
    fn resolve(&self, name: &str) -> Result<Option<ClassRef>, ResolveError>;
}

/// Binary form of one compiled class.
pub trait Artifact {
    /// Fully qualified name of the class this artifact holds.
    fn class_name(&self) -> &str;

    /// Serialize into `out`. May fail part way through.
    fn write_to(&self, out: &mut dyn Write) -> std::io::Result<()>;
}

/// Everything a compile step gets from the session.
pub struct CompileContext<'a> {
    pub resolver: &'a dyn ClassResolver,
    pub debug_info: DebugInfo,
    pub reporting: &'a dyn Reporting,
}

/// One parsed source file.
pub trait CompilationUnit {
    /// File the unit was parsed from; its identity.
    fn source_path(&self) -> &Path;

    /// The class named `name` if this unit declares it.
    fn find_declared_class(&self, name: &str) -> Option<ClassDescriptor>;

    /// Compile into zero or more artifacts.
    ///
    /// Recoverable problems go through `ctx.reporting`; an `Err` return ends
    /// the session.
    fn compile(&self, ctx: &CompileContext<'_>) -> Result<Vec<Box<dyn Artifact>>, UnitError>;
}
