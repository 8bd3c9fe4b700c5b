//! Configuration module.
//!
//! [`loader`] resolves settings from the config file, environment and CLI.
//! [`keybindings`] maps keys to browse-mode actions.

pub mod keybindings;
pub mod loader;

pub use keybindings::KeyBindings;
pub use loader::{
    ConfigError, ConfigFile, ResolvedConfig, apply_cli_overrides, apply_env_overrides,
    default_log_path, load_config_with_precedence, merge_config,
};
