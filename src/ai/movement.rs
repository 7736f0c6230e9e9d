// Movement helpers shared by several bots

use rand::Rng;
use tracing::debug;

use crate::config::MovementConfig;
use crate::engine::{BotState, Intents};
use crate::tactics::{angle_difference, calculate_angle};

/// Ticks an event reaction (dodge, wall bounce) keeps control of the body
pub const REACTION_TICKS: u32 = 10;

/// A movement override that outlives the event that triggered it.
///
/// Event handlers run before the tick body, so anything they write straight
/// into the intents would be overwritten by the bot's regular movement.
/// Handlers arm a maneuver instead and the tick body drives it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Maneuver {
    turn_rate: Option<f64>,
    target_speed: Option<f64>,
    ticks_left: u32,
}

impl Maneuver {
    pub fn new(ticks: u32) -> Self {
        Self {
            ticks_left: ticks,
            ..Self::default()
        }
    }

    pub fn turn(mut self, rate: f64) -> Self {
        self.turn_rate = Some(rate);
        self
    }

    pub fn speed(mut self, speed: f64) -> Self {
        self.target_speed = Some(speed);
        self
    }

    pub fn is_active(&self) -> bool {
        self.ticks_left > 0
    }

    /// Write the override into `intents` and count down one tick.
    ///
    /// Returns false, leaving `intents` untouched, when nothing is active.
    /// Fields the maneuver does not set keep whatever the intents hold.
    pub fn drive(&mut self, intents: &mut Intents) -> bool {
        if !self.is_active() {
            return false;
        }
        if let Some(rate) = self.turn_rate {
            intents.turn_rate = rate;
        }
        if let Some(speed) = self.target_speed {
            intents.target_speed = speed;
        }
        self.ticks_left -= 1;
        true
    }

    pub fn cancel(&mut self) {
        self.ticks_left = 0;
    }
}

/// Turn toward the arena center and drive forward at `speed`
pub fn head_to_center(state: &BotState, speed: f64, intents: &mut Intents) {
    let to_center = calculate_angle(state.position(), state.arena.center());
    intents.turn_to(state, to_center);
    intents.target_speed = speed;
}

/// Steer back toward the arena center.
///
/// Inside the panic margin a bot still facing the wall backs away while it
/// turns; once its nose is within 90 degrees of the center it drives forward.
pub fn avoid_walls(state: &BotState, config: &MovementConfig, intents: &mut Intents) {
    head_to_center(state, config.avoidance_speed, intents);

    let to_center = calculate_angle(state.position(), state.arena.center());
    let facing_wall = angle_difference(state.direction, to_center) > 90.0;
    if facing_wall && state.arena.is_near_wall(state.position(), config.wall_panic_margin) {
        intents.target_speed = -50.0;
    }
}

/// Hard break in one of three directions when an incoming shot is suspected
pub fn emergency_dodge<R: Rng + ?Sized>(rng: &mut R) -> Maneuver {
    let maneuver = match rng.gen_range(1..=3) {
        1 => Maneuver::new(REACTION_TICKS).turn(90.0).speed(70.0),
        2 => Maneuver::new(REACTION_TICKS).turn(-90.0).speed(70.0),
        _ => Maneuver::new(REACTION_TICKS).speed(-60.0),
    };
    debug!(
        turn_rate = ?maneuver.turn_rate,
        target_speed = ?maneuver.target_speed,
        "emergency dodge"
    );
    maneuver
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tactics::{Arena, Point};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn state_at(x: f64, y: f64, direction: f64) -> BotState {
        BotState {
            x,
            y,
            direction,
            arena: Arena::default(),
            energy: 100.0,
            ..BotState::default()
        }
    }

    #[test]
    fn test_avoid_walls_turns_toward_center() {
        let config = MovementConfig::default();
        let mut intents = Intents::default();
        // Near the left wall facing west; center is due east
        avoid_walls(&state_at(40.0, 300.0, 270.0), &config, &mut intents);
        assert_eq!(intents.turn_rate.abs(), 180.0);
        assert_eq!(intents.target_speed, 70.0);
    }

    #[test]
    fn test_avoid_walls_backs_off_when_facing_the_wall() {
        let config = MovementConfig::default();
        let mut intents = Intents::default();
        // 10 units from the left wall, nose pointing into it
        let state = state_at(10.0, 300.0, 270.0);
        avoid_walls(&state, &config, &mut intents);
        assert_eq!(intents.target_speed, -50.0);

        // Reversing while facing west moves east, away from the wall
        let next = Point::new(state.x, state.y).project(state.direction, intents.target_speed);
        assert!(next.x > state.x);
    }

    #[test]
    fn test_avoid_walls_drives_out_when_facing_center() {
        let config = MovementConfig::default();
        let mut intents = Intents::default();
        let state = state_at(10.0, 300.0, 90.0);
        avoid_walls(&state, &config, &mut intents);
        assert_eq!(intents.turn_rate, 0.0);
        assert_eq!(intents.target_speed, 70.0);

        let next = Point::new(state.x, state.y).project(state.direction, intents.target_speed);
        assert!(next.x > state.x);
    }

    #[test]
    fn test_dodge_always_changes_speed() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..30 {
            let mut dodge = emergency_dodge(&mut rng);
            let mut intents = Intents::default();
            assert!(dodge.drive(&mut intents));
            assert!(intents.target_speed == 70.0 || intents.target_speed == -60.0);
        }
    }

    #[test]
    fn test_maneuver_lasts_its_ticks() {
        let mut maneuver = Maneuver::new(2).turn(90.0);
        let mut intents = Intents {
            target_speed: 30.0,
            ..Intents::default()
        };

        assert!(maneuver.drive(&mut intents));
        assert_eq!(intents.turn_rate, 90.0);
        // Speed was not part of the maneuver
        assert_eq!(intents.target_speed, 30.0);

        assert!(maneuver.drive(&mut intents));
        assert!(!maneuver.is_active());

        intents.turn_rate = 5.0;
        assert!(!maneuver.drive(&mut intents));
        assert_eq!(intents.turn_rate, 5.0);
    }

    #[test]
    fn test_cancel_stops_a_maneuver() {
        let mut maneuver = Maneuver::new(REACTION_TICKS).speed(-20.0);
        maneuver.cancel();
        let mut intents = Intents::default();
        assert!(!maneuver.drive(&mut intents));
        assert_eq!(intents.target_speed, 0.0);
    }
}
