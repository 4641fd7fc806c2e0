//! Application Layer
//!
//! One compile session end to end. This layer:
//! - Depends on the Domain layer (entities, ports)
//! - Owns the per-session state (worklist and resolution cache)
//! - Coordinates frontend, search paths, and artifact store
//!
//! ## Components
//!
//! - `Compiler` - Parses entry files and drains the worklist
//! - `SourceClassResolver` - Lazy resolution with staleness checks
//! - `Reporter` - Error counting, thresholds, and warning filtering
//! - `Session` - Worklist and resolution cache

pub mod compiler;
pub mod reporter;
pub mod resolver;
pub mod session;

pub use compiler::{parent_chain, CompileOutcome, Compiler, DEFAULT_ERROR_LIMIT};
pub use reporter::Reporter;
pub use resolver::{is_stale, SourceClassResolver};
pub use session::{Session, SessionOptions};
