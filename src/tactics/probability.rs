// Hit probability heuristic and fire-power selection

use super::geometry::bullet_speed;
use crate::config::TargetingConfig;

/// Estimate the chance a bullet of `power` hits a target `distance` away
/// moving at `target_speed`.
///
/// The lateral distance the target can cover during the bullet's flight is
/// compared against the configured hitbox width, decaying linearly to the
/// floor probability, then discounted at long and extreme range.
pub fn calculate_hit_probability(
    distance: f64,
    target_speed: f64,
    power: f64,
    config: &TargetingConfig,
) -> f64 {
    let time = distance.max(0.0) / bullet_speed(power);
    let movement = target_speed.abs() * time;

    let span = config.max_movement - config.hitbox_movement;
    let mut probability = if movement < config.hitbox_movement {
        1.0
    } else if movement >= config.max_movement || span <= 0.0 {
        config.floor_probability
    } else {
        let decay = (movement - config.hitbox_movement) / span;
        1.0 - (1.0 - config.floor_probability) * decay
    };

    if distance > config.long_range {
        probability *= config.long_range_factor;
    }
    if distance > config.extreme_range {
        probability *= config.extreme_range_factor;
    }

    if probability.is_nan() {
        return 0.0;
    }
    probability.clamp(0.0, 1.0)
}

/// Pick the power with the best expected damage (`probability * 4 * power`).
///
/// Low energy caps the choice: power 1 below 15 energy, at most 2 up to 40.
pub fn choose_optimal_power(
    distance: f64,
    target_speed: f64,
    energy: f64,
    config: &TargetingConfig,
) -> f64 {
    if energy < 15.0 {
        return 1.0;
    }
    let max_power = if energy > 40.0 { 3 } else { 2 };

    let mut best_power = 1.0;
    let mut best_expected = 0.0;
    for power in 1..=max_power {
        let power = power as f64;
        let expected = calculate_hit_probability(distance, target_speed, power, config) * 4.0 * power;
        if expected > best_expected {
            best_expected = expected;
            best_power = power;
        }
    }
    best_power
}

/// Distance-banded power used by the simpler bots
pub fn distance_power(distance: f64, energy: f64) -> f64 {
    if energy < 20.0 {
        1.0
    } else if distance < 150.0 {
        3.0
    } else if distance < 350.0 {
        2.0
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> TargetingConfig {
        TargetingConfig::default()
    }

    #[test]
    fn test_stationary_target_is_certain_up_close() {
        assert_eq!(calculate_hit_probability(100.0, 0.0, 2.0, &config()), 1.0);
    }

    #[test]
    fn test_long_range_discounts() {
        let c = config();
        assert!((calculate_hit_probability(500.0, 0.0, 2.0, &c) - 0.7).abs() < 1e-9);
        assert!((calculate_hit_probability(700.0, 0.0, 2.0, &c) - 0.35).abs() < 1e-9);
    }

    #[test]
    fn test_decay_reaches_floor() {
        let c = config();
        // 8 speed * (350 / 14) ticks = 200 units of movement
        assert!((calculate_hit_probability(350.0, 8.0, 2.0, &c) - 0.1).abs() < 1e-9);
        // Halfway through the decay band: movement 118
        let mid = calculate_hit_probability(118.0 * 14.0 / 8.0, 8.0, 2.0, &c);
        assert!((mid - 0.55).abs() < 1e-9);
        assert_eq!(calculate_hit_probability(300.0, 100.0, 2.0, &c), 0.1);
    }

    #[test]
    fn test_non_increasing_in_distance() {
        let c = config();
        for speed in [0.0, 2.0, 5.0, 8.0] {
            let mut last = f64::INFINITY;
            let mut distance = 0.0;
            while distance <= 1200.0 {
                let p = calculate_hit_probability(distance, speed, 2.0, &c);
                assert!((0.0..=1.0).contains(&p));
                assert!(p <= last + 1e-12, "rose at d={} v={}", distance, speed);
                last = p;
                distance += 5.0;
            }
        }
    }

    #[test]
    fn test_non_increasing_in_speed() {
        let c = config();
        for distance in [50.0, 250.0, 450.0, 650.0] {
            let mut last = f64::INFINITY;
            let mut speed = 0.0;
            while speed <= 12.0 {
                let p = calculate_hit_probability(distance, speed, 1.0, &c);
                assert!((0.0..=1.0).contains(&p));
                assert!(p <= last + 1e-12, "rose at d={} v={}", distance, speed);
                // Direction of travel does not matter
                assert_eq!(p, calculate_hit_probability(distance, -speed, 1.0, &c));
                last = p;
                speed += 0.25;
            }
        }
    }

    #[test]
    fn test_clamps_with_odd_constants() {
        let c = TargetingConfig {
            floor_probability: 3.0,
            long_range_factor: 2.0,
            ..TargetingConfig::default()
        };
        let p = calculate_hit_probability(500.0, 8.0, 2.0, &c);
        assert!((0.0..=1.0).contains(&p));
    }

    #[test]
    fn test_optimal_power_prefers_heavy_shots_on_sitting_targets() {
        assert_eq!(choose_optimal_power(200.0, 0.0, 100.0, &config()), 3.0);
        assert_eq!(choose_optimal_power(200.0, 0.0, 30.0, &config()), 2.0);
        assert_eq!(choose_optimal_power(200.0, 0.0, 10.0, &config()), 1.0);
    }

    #[test]
    fn test_distance_power_bands() {
        assert_eq!(distance_power(100.0, 100.0), 3.0);
        assert_eq!(distance_power(300.0, 100.0), 2.0);
        assert_eq!(distance_power(500.0, 100.0), 1.0);
        assert_eq!(distance_power(100.0, 10.0), 1.0);
    }
}
