//! Console diagnostic handler
//!
//! Prints errors and warnings to stderr in `location: Error: message` form.

use std::io::Write;

use crate::domain::ports::{Diagnostic, DiagnosticHandler, Verdict};

pub struct ConsoleDiagnostics<W: Write = std::io::Stderr> {
    out: W,
}

impl ConsoleDiagnostics {
    pub fn stderr() -> Self {
        Self {
            out: std::io::stderr(),
        }
    }
}

impl<W: Write> ConsoleDiagnostics<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn print(&mut self, label: &str, diagnostic: &Diagnostic) {
        let mut line = String::new();
        if let Some(location) = &diagnostic.location {
            line.push_str(&format!("{}: ", location));
        }
        line.push_str(label);
        line.push_str(": ");
        line.push_str(&diagnostic.message);
        // Nothing sensible to do if stderr itself is gone.
        let _ = writeln!(self.out, "{}", line);
    }
}

impl<W: Write> DiagnosticHandler for ConsoleDiagnostics<W> {
    fn handle_error(&mut self, diagnostic: &Diagnostic) -> Verdict {
        self.print("Error", diagnostic);
        Verdict::Continue
    }

    fn handle_warning(&mut self, diagnostic: &Diagnostic) {
        let label = match &diagnostic.handle {
            Some(handle) => format!("Warning {}", handle),
            None => "Warning".to_string(),
        };
        self.print(&label, diagnostic);
    }
}
