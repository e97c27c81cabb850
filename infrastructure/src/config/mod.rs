//! Configuration file loading for tri-health
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `--config <path>` specified file
//! 2. Project root: `./tri-health.toml` or `./.tri-health.toml`
//! 3. Global: `$XDG_CONFIG_HOME/tri-health/config.toml`
//! 4. Default values

mod file_config;
mod loader;

pub use file_config::{FileConfig, FileModelsConfig, FileOutputConfig, FileTuiConfig};
pub use loader::ConfigLoader;
