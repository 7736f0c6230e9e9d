// Spin bot - turns in place and fires constantly

use super::movement::{Maneuver, REACTION_TICKS};
use super::Bot;
use crate::config::{BotInfo, MovementConfig};
use crate::engine::{BotState, Intents, ScanEvent};
use crate::tactics::calculate_distance;

const SPIN_RATE: f64 = 20.0;
const CLOSE_RANGE: f64 = 200.0;

/// Spins its body while the radar sweeps, firing a light shot every tick and
/// a heavy one when something is close.
pub struct SpinBot {
    info: BotInfo,
    radar_turn_rate: f64,
    evasion: Maneuver,
}

impl SpinBot {
    pub fn new(movement: &MovementConfig) -> Self {
        Self {
            info: BotInfo::new("SpinBot", "Spins in place and fires constantly"),
            radar_turn_rate: movement.radar_turn_rate,
            evasion: Maneuver::default(),
        }
    }
}

impl Bot for SpinBot {
    fn on_tick(&mut self, _state: &BotState, intents: &mut Intents) {
        intents.turn_rate = SPIN_RATE;
        self.evasion.drive(intents);
        intents.radar_turn_rate = self.radar_turn_rate;
        if intents.fire.is_none() {
            intents.fire(1.0);
        }
    }

    fn on_scanned_bot(&mut self, state: &BotState, scan: &ScanEvent, intents: &mut Intents) {
        let distance = calculate_distance(state.position(), scan.position());
        intents.fire(if distance < CLOSE_RANGE { 3.0 } else { 1.0 });
    }

    fn on_hit_by_bullet(&mut self, _state: &BotState, _bullet_power: f64, _intents: &mut Intents) {
        // Spin harder for a while
        self.evasion = Maneuver::new(REACTION_TICKS).turn(90.0);
    }

    fn reset(&mut self) {
        self.evasion.cancel();
    }

    fn info(&self) -> &BotInfo {
        &self.info
    }
}
