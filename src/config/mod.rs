//! Configuration file discovery and resolution.
//!
//! Precedence: CLI flags, then `.docprops.toml`, then built-in defaults.

mod core;
mod loader;

pub use self::core::{
    DefaultsConfig, DocpropsConfig, ScanConfig, CONFIG_FILE_NAME, DEFAULT_CODEC,
};
pub use loader::{directory_ancestors, load_config, load_config_from, parse_and_validate_config};
