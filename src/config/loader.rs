// Configuration file loading and creation

use super::types::Config;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Get the path to the default configuration file
pub fn get_config_path() -> PathBuf {
    let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("tankwars");
    path.push("config.toml");
    path
}

/// Load configuration from the default location, creating it if missing
pub fn load_config() -> Result<Config> {
    let path = get_config_path();
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating config directory {}", dir.display()))?;
    }
    if path.exists() {
        load_config_from(&path)
    } else {
        create_default_config(&path)?;
        Ok(Config::default())
    }
}

/// Load configuration from an explicit path.
///
/// A file that exists but fails to parse falls back to defaults with a warning.
pub fn load_config_from(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("reading config file {}", path.display()))?;
    match toml::from_str(&contents) {
        Ok(config) => Ok(config),
        Err(e) => {
            warn!("Failed to parse config file {}: {}", path.display(), e);
            warn!("Using default configuration");
            Ok(Config::default())
        }
    }
}

/// Create a default configuration file with helpful comments
pub fn create_default_config(path: &Path) -> Result<()> {
    let config = Config::default();
    let toml_string = toml::to_string_pretty(&config).context("serializing default config")?;

    let commented_toml = format!(
        "# tankwars configuration file\n\
         # Targeting constants drive hit probability, shot simulation and the fire gate.\n\
         # Movement constants drive wall avoidance and pattern cycling.\n\
         # Distances are arena units, rates are degrees per tick.\n\n\
         {}",
        toml_string
    );

    fs::write(path, commented_toml)
        .with_context(|| format!("writing config file {}", path.display()))?;
    info!("Created default config file at: {}", path.display());
    Ok(())
}
