// Tracker bot - hunts the last scanned enemy at a fixed range

use tracing::debug;

use super::movement::{avoid_walls, Maneuver, REACTION_TICKS};
use super::Bot;
use crate::config::{BotInfo, MovementConfig, TargetingConfig};
use crate::engine::{BotState, Intents, ScanEvent};
use crate::tactics::{calculate_angle, calculate_distance, distance_power, lead_target};

const OPTIMAL_DISTANCE: f64 = 200.0;
const DISTANCE_BAND: f64 = 50.0;
// Larger than the avoidance margin so pursuit gives up before the wall check fires
const PURSUIT_WALL_MARGIN: f64 = 70.0;
const SAFETY_LOOKAHEAD: f64 = 100.0;
// Power assumed when estimating the lead
const LEAD_POWER: f64 = 2.0;

/// Locks onto whatever it scanned last, closes to its preferred range and
/// circle-strafes there, checking that retreat and strafe directions do not
/// run it into a wall.
pub struct TrackerBot {
    info: BotInfo,
    movement: MovementConfig,
    targeting: TargetingConfig,
    target: Option<ScanEvent>,
    evasion: Maneuver,
}

impl TrackerBot {
    pub fn new(movement: &MovementConfig, targeting: &TargetingConfig) -> Self {
        Self {
            info: BotInfo::new("TrackerBot", "Hunts enemies with predictive aiming")
                .with_colors([76, 175, 80], [139, 195, 74], [205, 220, 57]),
            movement: movement.clone(),
            targeting: targeting.clone(),
            target: None,
            evasion: Maneuver::default(),
        }
    }

    fn is_direction_safe(&self, state: &BotState, angle: f64) -> bool {
        state.arena.is_direction_safe(
            state.position(),
            angle,
            SAFETY_LOOKAHEAD,
            self.movement.wall_margin,
        )
    }

    fn pursue(&self, state: &BotState, target: &ScanEvent, intents: &mut Intents) {
        if state.arena.is_near_wall(state.position(), PURSUIT_WALL_MARGIN) {
            let to_center = calculate_angle(state.position(), state.arena.center());
            intents.turn_to(state, to_center);
            intents.target_speed = 60.0;
            return;
        }

        let bearing = calculate_angle(state.position(), target.position());
        let distance = calculate_distance(state.position(), target.position());

        if distance > OPTIMAL_DISTANCE + DISTANCE_BAND {
            intents.turn_to(state, bearing);
            intents.target_speed = 50.0;
        } else if distance < OPTIMAL_DISTANCE - DISTANCE_BAND {
            let mut retreat = bearing + 180.0;
            if !self.is_direction_safe(state, retreat) {
                retreat = bearing + 90.0;
                if !self.is_direction_safe(state, retreat) {
                    retreat = bearing - 90.0;
                }
            }
            intents.turn_to(state, retreat);
            intents.target_speed = 40.0;
        } else {
            let mut strafe = bearing + 90.0;
            if !self.is_direction_safe(state, strafe) {
                strafe = bearing - 90.0;
            }
            intents.turn_to(state, strafe);
            intents.target_speed = 30.0;
        }
    }
}

impl Bot for TrackerBot {
    fn on_tick(&mut self, state: &BotState, intents: &mut Intents) {
        intents.radar_turn_rate = self.movement.radar_turn_rate;

        if state.arena.is_near_wall(state.position(), self.movement.wall_margin + 10.0) {
            self.evasion.cancel();
            avoid_walls(state, &self.movement, intents);
        } else if self.evasion.drive(intents) {
            // Pursuit resumes once the evasion has run out
        } else if let Some(target) = self.target {
            self.pursue(state, &target, intents);
        } else {
            intents.target_speed = 20.0;
            intents.turn_rate = 10.0;
        }
    }

    fn on_scanned_bot(&mut self, state: &BotState, scan: &ScanEvent, intents: &mut Intents) {
        self.target = Some(*scan);

        let distance = calculate_distance(state.position(), scan.position());
        let aim = lead_target(
            state.position(),
            scan.position(),
            scan.speed,
            scan.direction,
            LEAD_POWER,
            &state.arena,
            self.targeting.validity_margin,
        );
        intents.turn_gun_to(state, calculate_angle(state.position(), aim));
        intents.fire(distance_power(distance, state.energy));
        debug!(target = scan.scanned_bot_id, distance, "tracker locked");
    }

    fn on_hit_by_bullet(&mut self, state: &BotState, _bullet_power: f64, _intents: &mut Intents) {
        self.evasion = if state.energy > 30.0 {
            Maneuver::new(REACTION_TICKS).turn(90.0).speed(100.0)
        } else {
            // Low on energy: back out hard
            Maneuver::new(REACTION_TICKS).turn(135.0).speed(-80.0)
        };
    }

    fn on_bot_death(&mut self, bot_id: u32) {
        if self.target.map(|t| t.scanned_bot_id) == Some(bot_id) {
            self.target = None;
        }
    }

    fn reset(&mut self) {
        self.target = None;
        self.evasion.cancel();
    }

    fn info(&self) -> &BotInfo {
        &self.info
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tactics::Arena;

    fn bot() -> TrackerBot {
        TrackerBot::new(&MovementConfig::default(), &TargetingConfig::default())
    }

    fn state_at(x: f64, y: f64, direction: f64, energy: f64) -> BotState {
        BotState {
            x,
            y,
            direction,
            energy,
            arena: Arena::default(),
            ..BotState::default()
        }
    }

    fn scan_at(id: u32, x: f64, y: f64) -> ScanEvent {
        ScanEvent {
            scanned_bot_id: id,
            x,
            y,
            speed: 0.0,
            direction: 0.0,
            energy: 100.0,
        }
    }

    #[test]
    fn test_searches_without_target() {
        let mut bot = bot();
        let mut intents = Intents::default();
        bot.on_tick(&state_at(400.0, 300.0, 0.0, 100.0), &mut intents);
        assert_eq!(intents.target_speed, 20.0);
        assert_eq!(intents.turn_rate, 10.0);
    }

    #[test]
    fn test_closes_distance_to_far_target() {
        let mut bot = bot();
        let state = state_at(200.0, 300.0, 0.0, 100.0);
        let mut intents = Intents::default();
        bot.on_scanned_bot(&state, &scan_at(1, 600.0, 300.0), &mut intents);
        assert_eq!(intents.fire, Some(1.0));

        bot.on_tick(&state, &mut intents);
        assert_eq!(intents.turn_rate, 90.0);
        assert_eq!(intents.target_speed, 50.0);
    }

    #[test]
    fn test_strafes_at_optimal_range() {
        let mut bot = bot();
        let state = state_at(300.0, 300.0, 0.0, 100.0);
        let mut intents = Intents::default();
        bot.on_scanned_bot(&state, &scan_at(1, 500.0, 300.0), &mut intents);
        assert_eq!(intents.fire, Some(2.0));

        bot.on_tick(&state, &mut intents);
        // Target due east; strafing heads south (bearing + 90)
        assert_eq!(intents.turn_rate, 180.0);
        assert_eq!(intents.target_speed, 30.0);
    }

    #[test]
    fn test_retreat_avoids_walls() {
        let mut bot = bot();
        // Target close to the south; straight retreat (north, +y) is clear
        let state = state_at(400.0, 300.0, 0.0, 100.0);
        let mut intents = Intents::default();
        bot.on_scanned_bot(&state, &scan_at(1, 400.0, 220.0), &mut intents);
        bot.on_tick(&state, &mut intents);
        assert_eq!(intents.turn_rate, 0.0);
        assert_eq!(intents.target_speed, 40.0);

        // Same geometry near the +y wall: retreat is unsafe, so it sidesteps
        let state = state_at(400.0, 470.0, 0.0, 100.0);
        let mut intents = Intents::default();
        bot.on_scanned_bot(&state, &scan_at(1, 400.0, 390.0), &mut intents);
        bot.on_tick(&state, &mut intents);
        assert_eq!(intents.target_speed, 40.0);
        assert_eq!(intents.turn_rate.abs(), 90.0);
    }

    #[test]
    fn test_hit_reaction_depends_on_energy() {
        let mut bot = bot();
        let healthy = state_at(400.0, 300.0, 0.0, 80.0);
        let mut intents = Intents::default();
        bot.on_scanned_bot(&healthy, &scan_at(1, 600.0, 300.0), &mut intents);
        bot.on_hit_by_bullet(&healthy, 2.0, &mut intents);
        bot.on_tick(&healthy, &mut intents);
        assert_eq!(intents.target_speed, 100.0);
        assert_eq!(intents.turn_rate, 90.0);

        let weak = state_at(400.0, 300.0, 0.0, 20.0);
        bot.on_hit_by_bullet(&weak, 2.0, &mut intents);
        bot.on_tick(&weak, &mut intents);
        assert_eq!(intents.target_speed, -80.0);
        assert_eq!(intents.turn_rate, 135.0);
    }

    #[test]
    fn test_pursuit_resumes_after_evasion() {
        let mut bot = bot();
        let state = state_at(200.0, 300.0, 0.0, 100.0);
        let mut intents = Intents::default();
        bot.on_scanned_bot(&state, &scan_at(1, 600.0, 300.0), &mut intents);
        bot.on_hit_by_bullet(&state, 2.0, &mut intents);
        for _ in 0..REACTION_TICKS {
            bot.on_tick(&state, &mut intents);
        }
        bot.on_tick(&state, &mut intents);
        assert_eq!(intents.target_speed, 50.0);
    }

    #[test]
    fn test_forgets_dead_target() {
        let mut bot = bot();
        let state = state_at(400.0, 300.0, 0.0, 100.0);
        let mut intents = Intents::default();
        bot.on_scanned_bot(&state, &scan_at(9, 600.0, 300.0), &mut intents);
        bot.on_bot_death(9);

        let mut intents = Intents::default();
        bot.on_tick(&state, &mut intents);
        assert_eq!(intents.target_speed, 20.0);
    }
}
