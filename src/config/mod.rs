//! Configuration module for Kiln
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (KILN_*)
//! 3. Project config (kiln.toml)
//! 4. User config (~/.config/kiln/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{user_config_path, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{BuildConfig, ClassPathConfig, Config, OutputConfig, SourceConfig};
