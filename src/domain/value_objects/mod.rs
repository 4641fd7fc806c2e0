//! Domain Value Objects
//!
//! Immutable value types handed through the compile session.

mod debug_info;
mod source_encoding;
mod warning_filter;

pub use debug_info::{DebugInfo, ParseDebugInfoError};
pub use source_encoding::SourceEncoding;
pub use warning_filter::{WarningFilter, WarningFilterError};
