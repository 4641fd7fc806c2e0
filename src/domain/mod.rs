//! Domain Layer
//!
//! Class names, resolved classes and the ports the compile session talks
//! through.
//!
//! ## Structure
//!
//! - `entities/` - Class names and resolved class representations
//! - `value_objects/` - Debug info level, warning filter
//! - `ports/` - Interface definitions for infrastructure and frontends

pub mod entities;
pub mod ports;
pub mod value_objects;
