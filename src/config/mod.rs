//! Configuration module.

pub mod keybindings;
pub mod loader;

pub use keybindings::KeyBindings;
pub use loader::{
    default_config_path, default_log_path, load_config, load_config_file, merge_config,
    ConfigError, ConfigFile, ResolvedConfig, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_USER_AGENT,
};
