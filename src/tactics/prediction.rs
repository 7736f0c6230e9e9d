// Constant-velocity position prediction

use super::arena::Arena;
use super::geometry::{bullet_speed, calculate_distance, Point};

/// Extrapolate a position `dt` ticks ahead assuming constant velocity.
///
/// Heading follows the x-first convention: x moves with `sin`, y with `cos`.
/// Acceleration and turning are ignored, which is why erratic movers beat it.
pub fn predict_position(position: Point, speed: f64, heading: f64, dt: f64) -> Point {
    let rad = heading.to_radians();
    Point::new(
        position.x + speed * dt * rad.sin(),
        position.y + speed * dt * rad.cos(),
    )
}

/// Ticks a bullet fired with `power` needs to cover `distance`
pub fn time_to_impact(distance: f64, power: f64) -> f64 {
    distance / bullet_speed(power)
}

/// Where to aim so a bullet of `power` fired from `origin` meets a target
/// currently at `target` moving with `speed` along `heading`.
///
/// Predictions that leave the arena's valid-target zone (or are not finite)
/// fall back to the target's current position.
pub fn lead_target(
    origin: Point,
    target: Point,
    speed: f64,
    heading: f64,
    power: f64,
    arena: &Arena,
    margin: f64,
) -> Point {
    let time = time_to_impact(calculate_distance(origin, target), power);
    let future = predict_position(target, speed, heading, time);
    if arena.is_valid_target(future, margin) {
        future
    } else {
        target
    }
}
