// Fire decision pipeline run on every scan

use tracing::debug;

use super::geometry::{bullet_speed, calculate_angle, calculate_distance, turn_toward, Point};
use super::prediction::{predict_position, time_to_impact};
use super::probability::{calculate_hit_probability, choose_optimal_power};
use super::shot::{simulate_shot, ShotOutcome};
use crate::config::TargetingConfig;
use crate::engine::{BotState, ScanEvent};

/// Where to point the gun and how hard to shoot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FireDecision {
    /// Absolute bearing to aim at, degrees
    pub angle: f64,
    pub power: f64,
}

/// Every intermediate value of one targeting pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetingReport {
    pub distance: f64,
    pub power: f64,
    pub bullet_speed: f64,
    pub predicted: Point,
    pub prediction_valid: bool,
    pub aim_point: Point,
    pub aim_angle: f64,
    pub gun_turn: f64,
    pub shot: ShotOutcome,
    pub hit_probability: f64,
    pub fire: bool,
}

impl TargetingReport {
    pub fn decision(&self) -> Option<FireDecision> {
        self.fire.then_some(FireDecision {
            angle: self.aim_angle,
            power: self.power,
        })
    }
}

/// Run the full targeting pass for one scan.
///
/// Distance, power, lead, validation, shot simulation and hit probability are
/// computed in that order; the shot is taken if the simulation hits, the
/// probability clears the threshold, or the target is point blank.
pub fn analyze(state: &BotState, scan: &ScanEvent, config: &TargetingConfig) -> TargetingReport {
    let origin = state.position();
    let target = scan.position();

    let distance = calculate_distance(origin, target);
    let power = choose_optimal_power(distance, scan.speed, state.energy, config);

    let predicted = predict_position(
        target,
        scan.speed,
        scan.direction,
        time_to_impact(distance, power),
    );
    let prediction_valid = state.arena.is_valid_target(predicted, config.validity_margin);
    let aim_point = if prediction_valid { predicted } else { target };

    let shot = simulate_shot(origin, aim_point, power, &state.arena, config);
    let hit_probability = calculate_hit_probability(distance, scan.speed, power, config);

    let fire = shot.will_hit || hit_probability > config.fire_threshold || distance < config.point_blank;
    let aim_angle = calculate_angle(origin, aim_point);

    let report = TargetingReport {
        distance,
        power,
        bullet_speed: bullet_speed(power),
        predicted,
        prediction_valid,
        aim_point,
        aim_angle,
        gun_turn: turn_toward(state.gun_direction, aim_angle),
        shot,
        hit_probability,
        fire,
    };
    debug!(
        target = scan.scanned_bot_id,
        distance = report.distance,
        power = report.power,
        probability = report.hit_probability,
        will_hit = report.shot.will_hit,
        fire = report.fire,
        "targeting pass"
    );
    report
}

pub fn decide_fire(
    state: &BotState,
    scan: &ScanEvent,
    config: &TargetingConfig,
) -> Option<FireDecision> {
    analyze(state, scan, config).decision()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tactics::Arena;

    fn state_at(x: f64, y: f64, energy: f64) -> BotState {
        BotState {
            x,
            y,
            energy,
            arena: Arena::default(),
            ..BotState::default()
        }
    }

    fn scan_at(x: f64, y: f64, speed: f64, direction: f64) -> ScanEvent {
        ScanEvent {
            scanned_bot_id: 2,
            x,
            y,
            speed,
            direction,
            energy: 100.0,
        }
    }

    #[test]
    fn test_stationary_target_straight_ahead() {
        let config = TargetingConfig::default();
        let state = state_at(400.0, 300.0, 30.0);
        let scan = scan_at(400.0, 200.0, 0.0, 0.0);

        let report = analyze(&state, &scan, &config);
        assert_eq!(report.distance, 100.0);
        assert_eq!(report.power, 2.0);
        assert_eq!(report.bullet_speed, 14.0);
        assert_eq!(report.hit_probability, 1.0);
        assert!(report.shot.will_hit);
        assert!(report.fire);

        let decision = report.decision().unwrap();
        assert!((decision.angle.abs() - 180.0).abs() < 1e-9);
        assert_eq!(decision.power, 2.0);
    }

    #[test]
    fn test_gun_turn_is_normalized() {
        let config = TargetingConfig::default();
        let mut state = state_at(400.0, 300.0, 100.0);
        state.gun_direction = 350.0;
        let scan = scan_at(500.0, 400.0, 0.0, 0.0);

        let report = analyze(&state, &scan, &config);
        assert!((report.aim_angle - 45.0).abs() < 1e-9);
        assert!((report.gun_turn - 55.0).abs() < 1e-9);
    }

    #[test]
    fn test_prediction_out_of_bounds_aims_at_current_position() {
        let config = TargetingConfig::default();
        let state = state_at(100.0, 300.0, 100.0);
        let scan = scan_at(700.0, 300.0, 8.0, 90.0);

        let report = analyze(&state, &scan, &config);
        assert!(!report.prediction_valid);
        assert_eq!(report.aim_point, scan.position());
    }

    #[test]
    fn test_holds_fire_on_distant_fast_target() {
        let config = TargetingConfig {
            max_simulation_ticks: 20,
            ..TargetingConfig::default()
        };
        let state = state_at(50.0, 50.0, 100.0);
        let scan = scan_at(760.0, 560.0, 8.0, 0.0);

        let report = analyze(&state, &scan, &config);
        assert!(report.hit_probability < config.fire_threshold);
        assert!(!report.shot.will_hit);
        assert!(!report.fire);
        assert!(report.decision().is_none());
        assert_eq!(decide_fire(&state, &scan, &config), None);
    }

    #[test]
    fn test_decide_fire_on_sitting_target() {
        let config = TargetingConfig::default();
        let state = state_at(400.0, 300.0, 30.0);
        let scan = scan_at(400.0, 200.0, 0.0, 0.0);

        let decision = decide_fire(&state, &scan, &config).unwrap();
        assert_eq!(decision.power, 2.0);
        assert!((decision.angle.abs() - 180.0).abs() < 1e-9);
    }

    #[test]
    fn test_decide_fire_point_blank_overrides_probability() {
        let config = TargetingConfig {
            fire_threshold: 1.1,
            max_simulation_ticks: 0,
            ..TargetingConfig::default()
        };
        let state = state_at(400.0, 300.0, 100.0);
        let scan = scan_at(400.0, 360.0, 8.0, 90.0);

        let decision = decide_fire(&state, &scan, &config).unwrap();
        assert_eq!(decision.power, 3.0);
    }
}
