// Stalker bot - patient sniper that only fires at predictable targets

use tracing::debug;

use super::history::ScanHistory;
use super::movement::{avoid_walls, Maneuver, REACTION_TICKS};
use super::Bot;
use crate::config::{BotInfo, MovementConfig, TargetingConfig};
use crate::engine::{BotState, Intents, ScanEvent};
use crate::tactics::{calculate_angle, calculate_distance, lead_target, turn_toward};

const HISTORY_LEN: usize = 5;
const LINEAR_TOLERANCE: f64 = 20.0;
const LINEAR_SCANS_TO_FIRE: u32 = 3;
// Gun must be this close to the aim bearing before firing
const AIM_TOLERANCE: f64 = 15.0;

const MIN_DISTANCE: f64 = 250.0;
const MAX_DISTANCE: f64 = 500.0;
const WALL_MARGIN: f64 = 30.0;
const RADAR_TURN_RATE: f64 = 30.0;

pub struct StalkerBot {
    info: BotInfo,
    movement: MovementConfig,
    targeting: TargetingConfig,
    target_id: Option<u32>,
    target: Option<ScanEvent>,
    history: ScanHistory,
    consecutive_linear_scans: u32,
    evasion: Maneuver,
}

impl StalkerBot {
    pub fn new(movement: &MovementConfig, targeting: &TargetingConfig) -> Self {
        Self {
            info: BotInfo::new("StalkerBot", "Kites and waits for predictable targets")
                .with_colors([63, 81, 181], [48, 63, 159], [92, 107, 192]),
            movement: MovementConfig {
                wall_margin: WALL_MARGIN,
                ..movement.clone()
            },
            targeting: targeting.clone(),
            target_id: None,
            target: None,
            history: ScanHistory::new(HISTORY_LEN),
            consecutive_linear_scans: 0,
            evasion: Maneuver::default(),
        }
    }

    /// Sniper power: accuracy over damage
    fn fire_power(distance: f64, energy: f64) -> f64 {
        if energy < 20.0 || distance >= 400.0 {
            1.0
        } else {
            2.0
        }
    }

    fn kite(state: &BotState, target: &ScanEvent, intents: &mut Intents) {
        let bearing = calculate_angle(state.position(), target.position());
        let distance = calculate_distance(state.position(), target.position());

        if distance < MIN_DISTANCE {
            intents.turn_to(state, bearing + 180.0);
            intents.target_speed = 60.0;
        } else if distance > MAX_DISTANCE {
            intents.turn_to(state, bearing);
            intents.target_speed = 50.0;
        } else {
            intents.turn_to(state, bearing + 90.0);
            intents.target_speed = 40.0;
        }
    }

    fn release_target(&mut self) {
        self.target_id = None;
        self.target = None;
        self.history.clear();
        self.consecutive_linear_scans = 0;
    }
}

impl Bot for StalkerBot {
    fn on_tick(&mut self, state: &BotState, intents: &mut Intents) {
        intents.radar_turn_rate = RADAR_TURN_RATE;

        if state.arena.is_near_wall(state.position(), self.movement.wall_margin) {
            self.evasion.cancel();
            avoid_walls(state, &self.movement, intents);
        } else if self.evasion.drive(intents) {
            // Kiting resumes once the evasion has run out
        } else if let Some(target) = self.target {
            Self::kite(state, &target, intents);
        } else {
            intents.target_speed = 30.0;
            intents.turn_rate = 15.0;
        }
    }

    fn on_scanned_bot(&mut self, state: &BotState, scan: &ScanEvent, intents: &mut Intents) {
        let locked = *self.target_id.get_or_insert(scan.scanned_bot_id);
        if scan.scanned_bot_id != locked {
            return;
        }
        self.target = Some(*scan);

        self.history.push(scan);
        if self.history.is_linear(LINEAR_TOLERANCE) {
            self.consecutive_linear_scans += 1;
        } else {
            self.consecutive_linear_scans = 0;
        }

        let distance = calculate_distance(state.position(), scan.position());
        let power = Self::fire_power(distance, state.energy);
        let aim = lead_target(
            state.position(),
            scan.position(),
            scan.speed,
            scan.direction,
            power,
            &state.arena,
            self.targeting.validity_margin,
        );
        let gun_turn = turn_toward(state.gun_direction, calculate_angle(state.position(), aim));
        intents.gun_turn_rate = gun_turn;

        if self.consecutive_linear_scans >= LINEAR_SCANS_TO_FIRE && gun_turn.abs() < AIM_TOLERANCE {
            intents.fire(power);
            debug!(
                target = locked,
                linear_scans = self.consecutive_linear_scans,
                "stalker firing"
            );
        }
    }

    fn on_hit_by_bullet(&mut self, _state: &BotState, _bullet_power: f64, _intents: &mut Intents) {
        self.evasion = Maneuver::new(REACTION_TICKS).turn(90.0).speed(70.0);
    }

    fn on_bot_death(&mut self, bot_id: u32) {
        if self.target_id == Some(bot_id) {
            self.release_target();
        }
    }

    fn reset(&mut self) {
        self.release_target();
        self.evasion.cancel();
    }

    fn info(&self) -> &BotInfo {
        &self.info
    }
}
