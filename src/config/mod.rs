//! Configuration module for gitship
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (GITSHIP_*)
//! 3. Project config (./gitship.toml) or an explicit `--config` file
//! 4. User config (~/.config/gitship/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    load_explicit, user_config_path, ConfigWarning, PROJECT_CONFIG_FILE, USER_CONFIG_PATH_VAR,
};
pub use types::{
    Config, GitConfig, GitignoreConfig, InstallConfig, RunConfig, SecretsConfig, VenvConfig,
};
