//! ClassProvider port - one layer of the parent resolution chain
//!
//! Providers resolve straight against packaged artifacts: no sources, no
//! staleness checks.

use crate::domain::entities::ClassDescriptor;
use crate::error::ResolveError;

pub trait ClassProvider {
    /// Short label used in logs and in `ClassOrigin::Provider`.
    fn name(&self) -> &str;

    fn find_class(&self, name: &str) -> Result<Option<ClassDescriptor>, ResolveError>;
}
