// AI module for tank bots

mod bot;
mod champion_bot;
mod history;
mod movement;
mod patterns;
mod sitting_duck;
mod spin_bot;
mod stalker_bot;
mod tracker_bot;
mod walls_bot;

pub use bot::Bot;
pub use champion_bot::ChampionBot;
pub use history::ScanHistory;
pub use movement::{avoid_walls, emergency_dodge, head_to_center, Maneuver};
pub use patterns::MovementPattern;
pub use sitting_duck::SittingDuck;
pub use spin_bot::SpinBot;
pub use stalker_bot::StalkerBot;
pub use tracker_bot::TrackerBot;
pub use walls_bot::WallsBot;

use std::fmt;
use std::str::FromStr;

use crate::config::Config;

/// Bot type selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotType {
    /// Stationary, shoots without aiming
    SittingDuck,
    /// Spins in place and fires constantly
    Spin,
    /// Perimeter patrol
    Walls,
    /// Chases at a fixed range with lead aiming
    Tracker,
    /// Kiting sniper gated on linear movement
    Stalker,
    /// Pattern cycling plus the full targeting pipeline
    Champion,
}

impl BotType {
    /// Command-line name for the bot type
    pub fn id(&self) -> &'static str {
        match self {
            BotType::SittingDuck => "sitting-duck",
            BotType::Spin => "spin",
            BotType::Walls => "walls",
            BotType::Tracker => "tracker",
            BotType::Stalker => "stalker",
            BotType::Champion => "champion",
        }
    }

    /// Get display name for bot type
    pub fn display_name(&self) -> &'static str {
        match self {
            BotType::SittingDuck => "Sitting Duck",
            BotType::Spin => "Spin Bot",
            BotType::Walls => "Walls Bot",
            BotType::Tracker => "Tracker Bot",
            BotType::Stalker => "Stalker Bot",
            BotType::Champion => "Champion Bot",
        }
    }

    /// Get description for bot type
    pub fn description(&self) -> &'static str {
        match self {
            BotType::SittingDuck => "Never moves - target practice",
            BotType::Spin => "Spins in place, fires every tick",
            BotType::Walls => "Patrols the perimeter, aims at current position",
            BotType::Tracker => "Hunts at 200 units, circle strafes, leads shots",
            BotType::Stalker => "Kites at sniping range, fires only at predictable targets",
            BotType::Champion => "Adaptive patterns, dodges shots, simulates every shot",
        }
    }

    /// Get all available bot types
    pub fn all() -> Vec<BotType> {
        vec![
            BotType::SittingDuck,
            BotType::Spin,
            BotType::Walls,
            BotType::Tracker,
            BotType::Stalker,
            BotType::Champion,
        ]
    }
}

impl fmt::Display for BotType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for BotType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('_', "-");
        BotType::all()
            .into_iter()
            .find(|t| t.id() == wanted)
            .ok_or_else(|| {
                let known: Vec<&str> = BotType::all().iter().map(|t| t.id()).collect();
                format!("unknown bot '{}' (expected one of: {})", s, known.join(", "))
            })
    }
}

/// Create a bot instance from a bot type
///
/// `seed` drives every random choice the bot makes, so equal seeds replay
/// identically.
pub fn create_bot(bot_type: BotType, config: &Config, seed: u64) -> Box<dyn Bot> {
    match bot_type {
        BotType::SittingDuck => Box::new(SittingDuck::new(&config.movement)),
        BotType::Spin => Box::new(SpinBot::new(&config.movement)),
        BotType::Walls => Box::new(WallsBot::new(&config.movement)),
        BotType::Tracker => Box::new(TrackerBot::new(&config.movement, &config.targeting)),
        BotType::Stalker => Box::new(StalkerBot::new(&config.movement, &config.targeting)),
        BotType::Champion => Box::new(ChampionBot::new(&config.movement, &config.targeting, seed)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bot_names() {
        assert_eq!("champion".parse::<BotType>().unwrap(), BotType::Champion);
        assert_eq!("Sitting_Duck".parse::<BotType>().unwrap(), BotType::SittingDuck);
        let err = "rambo".parse::<BotType>().unwrap_err();
        assert!(err.contains("sitting-duck"));
    }

    #[test]
    fn test_every_type_builds_with_matching_name() {
        let config = Config::default();
        for bot_type in BotType::all() {
            let bot = create_bot(bot_type, &config, 0);
            assert!(!bot.name().is_empty());
            assert_eq!(bot_type.id().parse::<BotType>().unwrap(), bot_type);
        }
    }
}
