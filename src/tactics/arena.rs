// Arena bounds and wall queries

use serde::{Deserialize, Serialize};

use super::geometry::Point;

/// One of the four arena walls. `Top` is the y = 0 edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wall {
    Left,
    Right,
    Top,
    Bottom,
}

impl Wall {
    /// Heading that drives straight at this wall
    pub fn heading(&self) -> f64 {
        match self {
            Wall::Left => 270.0,
            Wall::Right => 90.0,
            Wall::Top => 180.0,
            Wall::Bottom => 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f64,
    pub height: f64,
}

impl Default for Arena {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
        }
    }
}

impl Arena {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= 0.0 && point.x <= self.width && point.y >= 0.0 && point.y <= self.height
    }

    /// True if `position` is within `margin` of any wall
    pub fn is_near_wall(&self, position: Point, margin: f64) -> bool {
        position.x < margin
            || position.x > self.width - margin
            || position.y < margin
            || position.y > self.height - margin
    }

    /// Smallest distance from `position` to any wall
    pub fn wall_distance(&self, position: Point) -> f64 {
        position
            .x
            .min(self.width - position.x)
            .min(position.y)
            .min(self.height - position.y)
    }

    pub fn nearest_wall(&self, position: Point) -> Wall {
        let candidates = [
            (Wall::Left, position.x),
            (Wall::Right, self.width - position.x),
            (Wall::Top, position.y),
            (Wall::Bottom, self.height - position.y),
        ];
        candidates
            .iter()
            .fold(candidates[0], |best, &c| if c.1 < best.1 { c } else { best })
            .0
    }

    /// True if `point` lies strictly inside the arena shrunk by `margin`.
    ///
    /// Predicted positions that fail this check are replaced by the target's
    /// last known position before aiming.
    pub fn is_valid_target(&self, point: Point, margin: f64) -> bool {
        point.is_finite()
            && margin < point.x
            && point.x < self.width - margin
            && margin < point.y
            && point.y < self.height - margin
    }

    /// Whether the wall the bot is facing is within `margin`.
    ///
    /// Headings are bucketed into quadrants; 0° travels toward +y.
    pub fn wall_ahead(&self, position: Point, heading: f64, margin: f64) -> bool {
        let heading = heading.rem_euclid(360.0);
        if !(45.0..315.0).contains(&heading) {
            position.y > self.height - margin
        } else if heading < 135.0 {
            position.x > self.width - margin
        } else if heading < 225.0 {
            position.y < margin
        } else {
            position.x < margin
        }
    }

    /// Project `lookahead` units along `angle` and check the result stays
    /// clear of the walls.
    pub fn is_direction_safe(&self, position: Point, angle: f64, lookahead: f64, margin: f64) -> bool {
        !self.is_near_wall(position.project(angle, lookahead), margin)
    }
}
