//! Session error reporting
//!
//! Wraps the caller's [`DiagnosticHandler`] for one session: counts errors,
//! drops warnings the filter does not select, and turns the handler's
//! verdict or the error threshold into an abort.

use std::cell::{Cell, RefCell};

use crate::domain::ports::{Diagnostic, DiagnosticHandler, Reporting, Verdict};
use crate::domain::value_objects::WarningFilter;
use crate::error::{Location, UnitError};

pub struct Reporter<'h> {
    handler: RefCell<&'h mut dyn DiagnosticHandler>,
    warnings: &'h WarningFilter,
    /// 0 disables the threshold.
    error_limit: usize,
    error_count: Cell<usize>,
    warning_count: Cell<usize>,
}

impl<'h> Reporter<'h> {
    pub fn new(
        handler: &'h mut dyn DiagnosticHandler,
        warnings: &'h WarningFilter,
        error_limit: usize,
    ) -> Self {
        Self {
            handler: RefCell::new(handler),
            warnings,
            error_limit,
            error_count: Cell::new(0),
            warning_count: Cell::new(0),
        }
    }

    pub fn error_count(&self) -> usize {
        self.error_count.get()
    }

    pub fn warning_count(&self) -> usize {
        self.warning_count.get()
    }
}

impl Reporting for Reporter<'_> {
    fn error(&self, message: &str, location: Option<Location>) -> Result<(), UnitError> {
        let count = self.error_count.get() + 1;
        self.error_count.set(count);

        let verdict = self
            .handler
            .borrow_mut()
            .handle_error(&Diagnostic::error(message, location));

        if verdict == Verdict::Abort {
            return Err(UnitError::Aborted { count });
        }
        if self.error_limit > 0 && count >= self.error_limit {
            return Err(UnitError::TooManyErrors { count });
        }
        Ok(())
    }

    fn warning(&self, handle: &str, message: &str, location: Option<Location>) {
        if !self.warnings.matches(handle) {
            tracing::trace!(handle, "warning suppressed");
            return;
        }
        self.warning_count.set(self.warning_count.get() + 1);
        self.handler
            .borrow_mut()
            .handle_warning(&Diagnostic::warning(handle, message, location));
    }
}
