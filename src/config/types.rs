// tankwars configuration types
// Every value defaults to the constants the sample bots were tuned with

use serde::{Deserialize, Serialize};

use crate::tactics::Arena;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub targeting: TargetingConfig,
    #[serde(default)]
    pub movement: MovementConfig,
    #[serde(default)]
    pub arena: ArenaConfig,
}

/// Constants for the hit-probability heuristic, the shot simulator and the
/// fire gate. Hand tuned; nothing here is derived statistically.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TargetingConfig {
    // Lateral movement (units) below which a shot is a sure hit (~ hitbox width)
    pub hitbox_movement: f64,

    // Lateral movement at which probability bottoms out
    pub max_movement: f64,

    // Probability floor once movement exceeds max_movement
    pub floor_probability: f64,

    // Distance past which probability is multiplied by long_range_factor
    pub long_range: f64,
    pub long_range_factor: f64,

    // Distance past which probability is further multiplied by extreme_range_factor
    pub extreme_range: f64,
    pub extreme_range_factor: f64,

    // Bullet within this distance of the aim point counts as a hit
    pub hit_radius: f64,

    // Upper bound on simulated bullet steps
    pub max_simulation_ticks: u32,

    // Fire when estimated probability exceeds this
    pub fire_threshold: f64,

    // Always fire inside this distance
    pub point_blank: f64,

    // Predicted positions closer than this to a wall are rejected
    pub validity_margin: f64,
}

impl Default for TargetingConfig {
    fn default() -> Self {
        Self {
            hitbox_movement: 36.0,
            max_movement: 200.0,
            floor_probability: 0.1,
            long_range: 400.0,
            long_range_factor: 0.7,
            extreme_range: 600.0,
            extreme_range_factor: 0.5,
            hit_radius: 25.0,
            max_simulation_ticks: 100,
            fire_threshold: 0.4,
            point_blank: 100.0,
            validity_margin: 20.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementConfig {
    // Distance from a wall that triggers avoidance
    pub wall_margin: f64,

    // Distance from a wall at which the bot reverses instead of turning
    pub wall_panic_margin: f64,

    // Speed used while steering back toward the arena center
    pub avoidance_speed: f64,

    // Ticks a movement pattern stays active (inclusive range)
    pub pattern_ticks_min: u32,
    pub pattern_ticks_max: u32,

    // Radar spin per tick for bots that sweep continuously
    pub radar_turn_rate: f64,
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            wall_margin: 50.0,
            wall_panic_margin: 20.0,
            avoidance_speed: 70.0,
            pattern_ticks_min: 40,
            pattern_ticks_max: 80,
            radar_turn_rate: 45.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ArenaConfig {
    // Used when a session recording does not carry its own arena size
    pub width: f64,
    pub height: f64,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        let arena = Arena::default();
        Self {
            width: arena.width,
            height: arena.height,
        }
    }
}

impl ArenaConfig {
    pub fn arena(&self) -> Arena {
        Arena::new(self.width, self.height)
    }
}
