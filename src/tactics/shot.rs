// Straight-line bullet simulation against the arena walls

use super::arena::Arena;
use super::geometry::{bullet_speed, calculate_angle, calculate_distance, Point};
use crate::config::TargetingConfig;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShotOutcome {
    pub will_hit: bool,
    /// Where the simulated bullet was when the simulation stopped
    pub final_position: Point,
}

/// Step a bullet from `origin` toward `target` one tick at a time.
///
/// Stops with a miss as soon as the bullet leaves the arena, with a hit once
/// it is within `hit_radius` of the target, and with a miss after
/// `max_simulation_ticks` steps. Only the walls are obstacles.
pub fn simulate_shot(
    origin: Point,
    target: Point,
    power: f64,
    arena: &Arena,
    config: &TargetingConfig,
) -> ShotOutcome {
    let angle = calculate_angle(origin, target);
    let speed = bullet_speed(power);

    let mut bullet = origin;
    for _ in 0..config.max_simulation_ticks {
        bullet = bullet.project(angle, speed);

        if !arena.contains(bullet) {
            return ShotOutcome {
                will_hit: false,
                final_position: bullet,
            };
        }

        if calculate_distance(bullet, target) < config.hit_radius {
            return ShotOutcome {
                will_hit: true,
                final_position: bullet,
            };
        }
    }

    ShotOutcome {
        will_hit: false,
        final_position: bullet,
    }
}
