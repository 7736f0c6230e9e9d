// Events the engine delivers to a bot

use serde::{Deserialize, Serialize};

use crate::tactics::Point;

/// Snapshot of an opponent at the instant our radar swept it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScanEvent {
    pub scanned_bot_id: u32,
    pub x: f64,
    pub y: f64,
    pub speed: f64,
    /// Heading of the scanned bot, degrees
    pub direction: f64,
    pub energy: f64,
}

impl ScanEvent {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EngineEvent {
    /// An opponent was detected by radar
    ScannedBot(ScanEvent),

    /// One of the opponent's bullets hit us
    HitByBullet { bullet_power: f64 },

    /// We drove into a wall
    HitWall,

    /// Another bot was destroyed
    BotDeath { bot_id: u32 },

    /// We were destroyed
    Death,

    /// We are the last bot standing
    Won,
}

impl EngineEvent {
    /// Events after which the engine stops scheduling the bot
    pub fn ends_battle(&self) -> bool {
        matches!(self, EngineEvent::Death | EngineEvent::Won)
    }
}
