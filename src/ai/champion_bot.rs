// Champion bot - adaptive movement plus the full targeting pipeline

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::history::ScanHistory;
use super::movement::{emergency_dodge, head_to_center, Maneuver};
use super::patterns::MovementPattern;
use super::Bot;
use crate::config::{BotInfo, MovementConfig, TargetingConfig};
use crate::engine::{BotState, Intents, ScanEvent};
use crate::tactics::decide_fire;

const HISTORY_LEN: usize = 10;
const RADAR_TURN_RATE: f64 = 40.0;

/// Cycles movement patterns chosen by its own energy, dodges when the enemy's
/// energy drop gives away a shot, and fires only when the targeting pass
/// says the shot is worth it.
pub struct ChampionBot {
    info: BotInfo,
    movement: MovementConfig,
    targeting: TargetingConfig,
    seed: u64,
    rng: StdRng,
    history: ScanHistory,
    pattern: MovementPattern,
    pattern_timer: u32,
    dodge: Maneuver,
    time: u64,
    shots_fired: u32,
    hits_taken: u32,
}

impl ChampionBot {
    pub fn new(movement: &MovementConfig, targeting: &TargetingConfig, seed: u64) -> Self {
        Self {
            info: BotInfo::new("ChampionBot", "Adaptive movement with full targeting")
                .with_colors([156, 39, 176], [233, 30, 99], [255, 235, 59]),
            movement: movement.clone(),
            targeting: targeting.clone(),
            seed,
            rng: StdRng::seed_from_u64(seed),
            history: ScanHistory::new(HISTORY_LEN),
            pattern: MovementPattern::Circle,
            pattern_timer: 0,
            dodge: Maneuver::default(),
            time: 0,
            shots_fired: 0,
            hits_taken: 0,
        }
    }

    pub fn pattern(&self) -> MovementPattern {
        self.pattern
    }

    pub fn shots_fired(&self) -> u32 {
        self.shots_fired
    }

    pub fn hits_taken(&self) -> u32 {
        self.hits_taken
    }

    fn pattern_duration(&mut self) -> u32 {
        let min = self.movement.pattern_ticks_min;
        let max = self.movement.pattern_ticks_max.max(min);
        self.rng.gen_range(min..=max)
    }
}

impl Bot for ChampionBot {
    fn on_tick(&mut self, state: &BotState, intents: &mut Intents) {
        self.time += 1;

        if state.arena.is_near_wall(state.position(), self.movement.wall_margin) {
            // Always forward here; a dodge must not carry the bot into the wall
            self.dodge.cancel();
            head_to_center(state, self.movement.avoidance_speed, intents);
        } else if !self.dodge.drive(intents) {
            if self.pattern_timer == 0 {
                self.pattern = MovementPattern::choose(&mut self.rng, state.energy, self.pattern);
                self.pattern_timer = self.pattern_duration();
                debug!(pattern = self.pattern.name(), ticks = self.pattern_timer, "pattern change");
            }
            self.pattern.apply(&mut self.rng, self.time, intents);
            self.pattern_timer = self.pattern_timer.saturating_sub(1);
        }

        intents.radar_turn_rate = RADAR_TURN_RATE;
    }

    fn on_scanned_bot(&mut self, state: &BotState, scan: &ScanEvent, intents: &mut Intents) {
        self.history.push(scan);

        if let Some(drop) = self.history.energy_drop(scan.energy) {
            debug!(power = drop, "enemy fired");
            self.dodge = emergency_dodge(&mut self.rng);
        }

        match decide_fire(state, scan, &self.targeting) {
            Some(decision) => {
                intents.turn_gun_to(state, decision.angle);
                intents.fire(decision.power);
                self.shots_fired += 1;
                debug!(shot = self.shots_fired, power = decision.power, "champion firing");
            }
            None => debug!(target = scan.scanned_bot_id, "champion holding fire"),
        }
    }

    fn on_hit_by_bullet(&mut self, state: &BotState, _bullet_power: f64, _intents: &mut Intents) {
        self.hits_taken += 1;
        debug!(energy = state.energy, "champion hit");
        // Fresh pattern once the dodge has played out
        self.pattern_timer = 0;
        self.dodge = emergency_dodge(&mut self.rng);
    }

    fn on_won(&mut self) {
        debug!(shots = self.shots_fired, "champion wins");
    }

    fn reset(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed);
        self.history.clear();
        self.pattern = MovementPattern::Circle;
        self.pattern_timer = 0;
        self.dodge.cancel();
        self.time = 0;
        self.shots_fired = 0;
        self.hits_taken = 0;
    }

    fn info(&self) -> &BotInfo {
        &self.info
    }
}
