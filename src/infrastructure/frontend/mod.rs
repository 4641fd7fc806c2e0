//! Declaration frontend
//!
//! A minimal source language that only declares classes and the classes
//! they use. It implements the [`Frontend`] port so the driver can be run
//! and tested end to end:
//!
//! ```text
//! package com.acme;
//! import com.util.Strings;
//! class Main uses Lib, Strings;
//! ```

mod artifact;
mod parser;
mod unit;

use std::path::Path;

use crate::domain::ports::{ArtifactMetadata, CompilationUnit, Frontend};
use crate::error::SyntaxError;

pub use artifact::{read_metadata, ClassArtifact, FORMAT_VERSION};
pub use parser::parse;
pub use unit::{ClassDecl, DeclUnit, NameRef};

#[derive(Debug, Clone, Copy, Default)]
pub struct DeclFrontend;

impl DeclFrontend {
    pub fn new() -> Self {
        Self
    }
}

impl Frontend for DeclFrontend {
    fn parse(&self, path: &Path, text: &str) -> Result<Box<dyn CompilationUnit>, SyntaxError> {
        Ok(Box::new(parser::parse(path, text)?))
    }

    fn read_artifact(&self, path: &Path, bytes: &[u8]) -> std::io::Result<ArtifactMetadata> {
        read_metadata(path, bytes)
    }
}
