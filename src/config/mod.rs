// Configuration module for tankwars
// Handles loading tuning constants from TOML and bot metadata from JSON

pub mod bot_info;
pub mod loader;
pub mod types;

pub use bot_info::BotInfo;
pub use loader::{create_default_config, get_config_path, load_config, load_config_from};
pub use types::{ArenaConfig, Config, MovementConfig, TargetingConfig};
