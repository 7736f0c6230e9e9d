// Targeting and movement math shared by every bot

pub mod aim;
pub mod arena;
pub mod geometry;
pub mod prediction;
pub mod probability;
pub mod shot;

pub use aim::{analyze, decide_fire, FireDecision, TargetingReport};
pub use arena::{Arena, Wall};
pub use geometry::{
    angle_difference, bullet_speed, calculate_angle, calculate_distance, normalize_angle,
    turn_toward, Point, MAX_POWER, MIN_POWER,
};
pub use prediction::{lead_target, predict_position, time_to_impact};
pub use probability::{calculate_hit_probability, choose_optimal_power, distance_power};
pub use shot::{simulate_shot, ShotOutcome};
