//! Domain Entities
//!
//! - `ClassDescriptor` - a resolved class and where it came from
//! - class-name helpers mapping names onto source and artifact resources

pub mod class;

pub use class::{
    artifact_resource_name, is_reserved, package_of, simple_name, source_resource_name,
    ClassDescriptor, ClassOrigin, ClassRef, ARTIFACT_SUFFIX, SOURCE_SUFFIX,
};
