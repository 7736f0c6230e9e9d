// Walls bot - perimeter patrol

use tracing::debug;

use super::movement::{Maneuver, REACTION_TICKS};
use super::Bot;
use crate::config::{BotInfo, MovementConfig};
use crate::engine::{BotState, Intents, ScanEvent};
use crate::tactics::{calculate_angle, calculate_distance};

// Preferred distance from the wall while patrolling
const WALL_DISTANCE: f64 = 50.0;
// Slack before the bot heads back to a wall
const WALL_SLACK: f64 = 30.0;
// How far ahead a wall counts as "in front"
const CORNER_MARGIN: f64 = 60.0;

/// Drives to the nearest wall, then follows the perimeter, turning at each
/// corner. Aims straight at scanned bots with distance-banded power.
pub struct WallsBot {
    info: BotInfo,
    radar_turn_rate: f64,
    reaction: Maneuver,
}

impl WallsBot {
    pub fn new(movement: &MovementConfig) -> Self {
        Self {
            info: BotInfo::new("WallsBot", "Patrols the arena perimeter"),
            radar_turn_rate: movement.radar_turn_rate,
            reaction: Maneuver::default(),
        }
    }

    fn too_far_from_walls(state: &BotState) -> bool {
        state.arena.wall_distance(state.position()) > WALL_DISTANCE + WALL_SLACK
    }

    fn move_to_wall(state: &BotState, intents: &mut Intents) {
        let wall = state.arena.nearest_wall(state.position());
        intents.turn_to(state, wall.heading());
        intents.target_speed = 30.0;
    }

    fn follow_wall(state: &BotState, intents: &mut Intents) {
        intents.target_speed = 50.0;
        intents.turn_rate = if state
            .arena
            .wall_ahead(state.position(), state.direction, CORNER_MARGIN)
        {
            90.0
        } else {
            0.0
        };
    }
}

impl Bot for WallsBot {
    fn on_tick(&mut self, state: &BotState, intents: &mut Intents) {
        intents.radar_turn_rate = self.radar_turn_rate;
        if Self::too_far_from_walls(state) {
            Self::move_to_wall(state, intents);
        } else {
            Self::follow_wall(state, intents);
        }
        self.reaction.drive(intents);
    }

    fn on_scanned_bot(&mut self, state: &BotState, scan: &ScanEvent, intents: &mut Intents) {
        let bearing = calculate_angle(state.position(), scan.position());
        intents.turn_gun_to(state, bearing);

        let distance = calculate_distance(state.position(), scan.position());
        let power = if distance < 200.0 {
            3.0
        } else if distance < 400.0 {
            2.0
        } else {
            1.0
        };
        intents.fire(power);
    }

    fn on_hit_wall(&mut self, _state: &BotState, _intents: &mut Intents) {
        debug!("walls bot bumped into a wall");
        self.reaction = Maneuver::new(REACTION_TICKS).turn(90.0).speed(-20.0);
    }

    fn on_hit_by_bullet(&mut self, _state: &BotState, _bullet_power: f64, _intents: &mut Intents) {
        // Keep following the wall, just faster
        self.reaction = Maneuver::new(REACTION_TICKS).speed(100.0);
    }

    fn reset(&mut self) {
        self.reaction.cancel();
    }

    fn info(&self) -> &BotInfo {
        &self.info
    }
}
