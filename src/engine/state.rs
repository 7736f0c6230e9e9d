// Per-tick bot state and the actuator intents a bot queues

use serde::{Deserialize, Serialize};

use crate::tactics::{turn_toward, Arena, Point, MAX_POWER, MIN_POWER};

/// Our own bot as the engine reports it at the start of a tick
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct BotState {
    #[serde(default)]
    pub turn_number: u64,
    pub x: f64,
    pub y: f64,
    /// Body heading, degrees
    #[serde(default)]
    pub direction: f64,
    #[serde(default)]
    pub gun_direction: f64,
    #[serde(default)]
    pub radar_direction: f64,
    #[serde(default)]
    pub speed: f64,
    #[serde(default = "full_energy")]
    pub energy: f64,
    #[serde(default)]
    pub arena: Arena,
}

fn full_energy() -> f64 {
    100.0
}

impl BotState {
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Actuator intents submitted to the engine at the end of a tick.
///
/// Rates and speed persist from tick to tick until a bot changes them, the
/// way the engine treats them. `fire` is consumed by the submit. The engine
/// clamps rates and speed to its own limits.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Intents {
    pub turn_rate: f64,
    pub target_speed: f64,
    pub gun_turn_rate: f64,
    pub radar_turn_rate: f64,
    pub fire: Option<f64>,
}

impl Intents {
    /// Queue a shot; power is clamped to the engine's legal range
    pub fn fire(&mut self, power: f64) {
        self.fire = Some(power.clamp(MIN_POWER, MAX_POWER));
    }

    /// Turn the body toward an absolute heading by the shortest way
    pub fn turn_to(&mut self, state: &BotState, heading: f64) {
        self.turn_rate = turn_toward(state.direction, heading);
    }

    /// Turn the gun toward an absolute bearing by the shortest way
    pub fn turn_gun_to(&mut self, state: &BotState, bearing: f64) {
        self.gun_turn_rate = turn_toward(state.gun_direction, bearing);
    }
}
