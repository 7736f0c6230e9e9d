// Sitting duck - stationary target practice

use tracing::debug;

use super::Bot;
use crate::config::{BotInfo, MovementConfig};
use crate::engine::{BotState, Intents, ScanEvent};

/// Never moves. Sweeps the radar and fires medium-power shots at whatever it
/// sees, without aiming.
pub struct SittingDuck {
    info: BotInfo,
    radar_turn_rate: f64,
}

impl SittingDuck {
    pub fn new(movement: &MovementConfig) -> Self {
        Self {
            info: BotInfo::new("SittingDuck", "Stationary target practice")
                .with_colors([244, 67, 54], [233, 30, 99], [156, 39, 176]),
            radar_turn_rate: movement.radar_turn_rate,
        }
    }
}

impl Bot for SittingDuck {
    fn on_tick(&mut self, _state: &BotState, intents: &mut Intents) {
        intents.radar_turn_rate = self.radar_turn_rate;
    }

    fn on_scanned_bot(&mut self, _state: &BotState, _scan: &ScanEvent, intents: &mut Intents) {
        intents.fire(2.0);
    }

    fn on_hit_by_bullet(&mut self, state: &BotState, bullet_power: f64, _intents: &mut Intents) {
        debug!(energy = state.energy, bullet_power, "sitting duck hit");
    }

    fn reset(&mut self) {}

    fn info(&self) -> &BotInfo {
        &self.info
    }
}
