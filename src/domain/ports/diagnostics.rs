//! Diagnostics port - error and warning callbacks
//!
//! The caller supplies a [`DiagnosticHandler`] for one compile session.
//! Compile steps report through [`Reporting`], which the session implements
//! on top of that handler.

use crate::error::{Location, UnitError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// One reported problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Warning handle (e.g. `UNUSED_IMPORT`); `None` for errors.
    pub handle: Option<String>,
    pub message: String,
    pub location: Option<Location>,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>, location: Option<Location>) -> Self {
        Self {
            severity: Severity::Error,
            handle: None,
            message: message.into(),
            location,
        }
    }

    pub fn warning(
        handle: impl Into<String>,
        message: impl Into<String>,
        location: Option<Location>,
    ) -> Self {
        Self {
            severity: Severity::Warning,
            handle: Some(handle.into()),
            message: message.into(),
            location,
        }
    }
}

/// The handler's decision after an error was reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verdict {
    /// Keep compiling; artifact persistence stays off for the session.
    #[default]
    Continue,
    /// Stop the session now.
    Abort,
}

/// Receives every recoverable error and every enabled warning.
pub trait DiagnosticHandler {
    fn handle_error(&mut self, diagnostic: &Diagnostic) -> Verdict;

    fn handle_warning(&mut self, diagnostic: &Diagnostic);
}

/// What a compile step sees of the session's error reporting.
pub trait Reporting {
    /// Report a recoverable error. `Err` means the session is aborting and
    /// the compile step should return it unchanged.
    fn error(&self, message: &str, location: Option<Location>) -> Result<(), UnitError>;

    /// Report a warning; filtered by handle, never affects control flow.
    fn warning(&self, handle: &str, message: &str, location: Option<Location>);
}

/// Handler that keeps everything it is given.
#[derive(Debug, Default, Clone)]
pub struct CollectingHandler {
    pub diagnostics: Vec<Diagnostic>,
    pub verdict: Verdict,
}

impl CollectingHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
    }
}

impl DiagnosticHandler for CollectingHandler {
    fn handle_error(&mut self, diagnostic: &Diagnostic) -> Verdict {
        self.diagnostics.push(diagnostic.clone());
        self.verdict
    }

    fn handle_warning(&mut self, diagnostic: &Diagnostic) {
        self.diagnostics.push(diagnostic.clone());
    }
}
