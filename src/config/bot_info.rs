// Per-bot metadata file (name, colors, authors)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BotInfo {
    pub name: String,
    #[serde(default = "default_version")]
    pub version: String,
    #[serde(default)]
    pub authors: Vec<String>,
    #[serde(default)]
    pub description: String,

    // Colors: RGB values from 0-255
    #[serde(default = "default_color")]
    pub body_color: [u8; 3],
    #[serde(default = "default_color")]
    pub turret_color: [u8; 3],
    #[serde(default = "default_color")]
    pub radar_color: [u8; 3],
}

fn default_version() -> String {
    "1.0".to_string()
}

fn default_color() -> [u8; 3] {
    [255, 255, 255]
}

impl BotInfo {
    pub fn new(name: &str, description: &str) -> Self {
        Self {
            name: name.to_string(),
            version: default_version(),
            authors: Vec::new(),
            description: description.to_string(),
            body_color: default_color(),
            turret_color: default_color(),
            radar_color: default_color(),
        }
    }

    pub fn with_colors(mut self, body: [u8; 3], turret: [u8; 3], radar: [u8; 3]) -> Self {
        self.body_color = body;
        self.turret_color = turret;
        self.radar_color = radar;
        self
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("reading bot info {}", path.display()))?;
        serde_json::from_str(&contents)
            .with_context(|| format!("parsing bot info {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_info_fills_defaults() {
        let info: BotInfo = serde_json::from_str(r#"{ "name": "Rambo" }"#).unwrap();
        assert_eq!(info.name, "Rambo");
        assert_eq!(info.version, "1.0");
        assert!(info.authors.is_empty());
        assert_eq!(info.body_color, [255, 255, 255]);
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("champion_bot.json");
        fs::write(
            &path,
            r#"{
                "name": "ChampionBot",
                "version": "2.1",
                "authors": ["Course Staff"],
                "description": "Master tank",
                "body_color": [156, 39, 176],
                "turret_color": [233, 30, 99],
                "radar_color": [255, 235, 59]
            }"#,
        )
        .unwrap();

        let info = BotInfo::from_file(&path).unwrap();
        assert_eq!(info.name, "ChampionBot");
        assert_eq!(info.authors, vec!["Course Staff".to_string()]);
        assert_eq!(info.radar_color, [255, 235, 59]);
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        fs::write(&path, "{ name: }").unwrap();
        assert!(BotInfo::from_file(&path).is_err());
    }
}
