// Angle and distance helpers shared by every bot

use serde::{Deserialize, Serialize};

/// Lowest bullet power the engine accepts
pub const MIN_POWER: f64 = 0.1;
/// Highest bullet power the engine accepts
pub const MAX_POWER: f64 = 3.0;

/// A position in arena space
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Move `distance` units along `heading` (degrees, x-first convention)
    pub fn project(&self, heading: f64, distance: f64) -> Point {
        let rad = heading.to_radians();
        Point::new(self.x + distance * rad.sin(), self.y + distance * rad.cos())
    }
}

/// Absolute bearing from `from` to `to` in degrees.
///
/// Uses `atan2(dx, dy)` so 0° points along +y ("north") and 90° along +x.
pub fn calculate_angle(from: Point, to: Point) -> f64 {
    (to.x - from.x).atan2(to.y - from.y).to_degrees()
}

pub fn calculate_distance(from: Point, to: Point) -> f64 {
    (to.x - from.x).hypot(to.y - from.y)
}

/// Wrap an angle into (-180, 180].
pub fn normalize_angle(angle: f64) -> f64 {
    if angle > -180.0 && angle <= 180.0 {
        return angle;
    }
    let wrapped = angle.rem_euclid(360.0);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// Signed turn needed to go from `current` to `target`
pub fn turn_toward(current: f64, target: f64) -> f64 {
    normalize_angle(target - current)
}

/// Unsigned difference between two bearings, in [0, 180]
pub fn angle_difference(a: f64, b: f64) -> f64 {
    normalize_angle(a - b).abs()
}

/// Bullet speed for a given power: `20 - 3 * power`.
///
/// Power is clamped to the engine's legal range first, so the result is
/// always in [11, 19.7] and never zero.
pub fn bullet_speed(power: f64) -> f64 {
    20.0 - 3.0 * power.clamp(MIN_POWER, MAX_POWER)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_distance_three_four_five() {
        let d = calculate_distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
        assert_eq!(d, 5.0);
    }

    #[test]
    fn test_angle_uses_x_first_convention() {
        let origin = Point::new(0.0, 0.0);
        assert_eq!(calculate_angle(origin, Point::new(1.0, 0.0)), 90.0);
        assert_eq!(calculate_angle(origin, Point::new(0.0, 1.0)), 0.0);
        assert!((calculate_angle(origin, Point::new(0.0, -1.0)).abs() - 180.0).abs() < EPS);
        assert!((calculate_angle(origin, Point::new(-1.0, 0.0)) + 90.0).abs() < EPS);
    }

    #[test]
    fn test_normalize_angle_examples() {
        assert_eq!(normalize_angle(450.0), 90.0);
        assert_eq!(normalize_angle(-270.0), 90.0);
        assert_eq!(normalize_angle(180.0), 180.0);
        assert_eq!(normalize_angle(-180.0), 180.0);
        assert_eq!(normalize_angle(0.0), 0.0);
        assert_eq!(normalize_angle(190.0), -170.0);
    }

    #[test]
    fn test_normalize_angle_range_and_idempotence() {
        let samples = [
            -1.0e6, -72_000.0, -720.5, -361.0, -181.0, -179.0, -0.5, 0.25, 179.9, 180.1, 359.0,
            360.0, 721.0, 36_000.0, 1.0e6 + 0.3,
        ];
        for angle in samples {
            let once = normalize_angle(angle);
            assert!(once > -180.0 && once <= 180.0, "{} -> {}", angle, once);
            assert_eq!(normalize_angle(once), once, "not idempotent for {}", angle);
        }
    }

    #[test]
    fn test_large_multiples_of_360_wrap_to_zero() {
        for k in [-100.0, -3.0, 1.0, 7.0, 1000.0] {
            assert!(normalize_angle(360.0 * k).abs() < EPS);
        }
    }

    #[test]
    fn test_turn_toward_takes_short_way_round() {
        assert_eq!(turn_toward(350.0, 10.0), 20.0);
        assert_eq!(turn_toward(10.0, 350.0), -20.0);
        assert_eq!(angle_difference(350.0, 10.0), 20.0);
    }

    #[test]
    fn test_bullet_speed_formula_and_clamp() {
        assert_eq!(bullet_speed(1.0), 17.0);
        assert_eq!(bullet_speed(2.0), 14.0);
        assert_eq!(bullet_speed(3.0), 11.0);
        assert_eq!(bullet_speed(10.0), 11.0);
        assert!(bullet_speed(-5.0) > 0.0);
    }

    #[test]
    fn test_project_north_and_east() {
        let p = Point::new(100.0, 100.0).project(0.0, 50.0);
        assert!((p.x - 100.0).abs() < EPS && (p.y - 150.0).abs() < EPS);
        let p = Point::new(100.0, 100.0).project(90.0, 50.0);
        assert!((p.x - 150.0).abs() < EPS && (p.y - 100.0).abs() < EPS);
    }
}
