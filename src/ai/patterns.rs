// Movement patterns cycled by the adaptive bots

use rand::seq::SliceRandom;
use rand::Rng;

use crate::engine::Intents;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementPattern {
    Circle,
    Zigzag,
    Spiral,
    RandomWalk,
    Aggressive,
    Evasive,
    Defensive,
}

const HIGH_ENERGY: &[MovementPattern] = &[
    MovementPattern::Circle,
    MovementPattern::Zigzag,
    MovementPattern::Aggressive,
];
const MEDIUM_ENERGY: &[MovementPattern] = &[
    MovementPattern::RandomWalk,
    MovementPattern::Spiral,
    MovementPattern::Circle,
];
const LOW_ENERGY: &[MovementPattern] = &[
    MovementPattern::Evasive,
    MovementPattern::Defensive,
    MovementPattern::RandomWalk,
];

impl MovementPattern {
    pub fn name(&self) -> &'static str {
        match self {
            MovementPattern::Circle => "circle",
            MovementPattern::Zigzag => "zigzag",
            MovementPattern::Spiral => "spiral",
            MovementPattern::RandomWalk => "random_walk",
            MovementPattern::Aggressive => "aggressive",
            MovementPattern::Evasive => "evasive",
            MovementPattern::Defensive => "defensive",
        }
    }

    /// Patterns available at a given energy: aggressive when healthy,
    /// balanced in the middle, defensive when low
    pub fn pool_for_energy(energy: f64) -> &'static [MovementPattern] {
        if energy > 70.0 {
            HIGH_ENERGY
        } else if energy > 30.0 {
            MEDIUM_ENERGY
        } else {
            LOW_ENERGY
        }
    }

    /// Pick a new pattern for `energy`, never repeating `current` when the
    /// pool offers an alternative
    pub fn choose<R: Rng + ?Sized>(rng: &mut R, energy: f64, current: MovementPattern) -> Self {
        let pool = Self::pool_for_energy(energy);
        let fresh: Vec<MovementPattern> = pool.iter().copied().filter(|p| *p != current).collect();
        let candidates = if fresh.is_empty() { pool } else { &fresh[..] };
        candidates.choose(rng).copied().unwrap_or(current)
    }

    /// Set speed and turn rate for one tick of this pattern
    pub fn apply<R: Rng + ?Sized>(&self, rng: &mut R, tick: u64, intents: &mut Intents) {
        match self {
            MovementPattern::Circle => {
                intents.target_speed = 50.0;
                intents.turn_rate = 18.0;
            }
            MovementPattern::Zigzag => {
                intents.target_speed = 60.0;
                intents.turn_rate = if rng.gen_bool(0.5) { 30.0 } else { -30.0 };
            }
            MovementPattern::Spiral => {
                intents.target_speed = 30.0 + (tick % 60) as f64;
                intents.turn_rate = 25.0;
            }
            MovementPattern::RandomWalk => {
                intents.target_speed = rng.gen_range(30..=80) as f64;
                intents.turn_rate = rng.gen_range(-20..=20) as f64;
            }
            MovementPattern::Aggressive => {
                intents.target_speed = 70.0;
                intents.turn_rate = rng.gen_range(5..=25) as f64;
            }
            MovementPattern::Evasive => {
                intents.target_speed = if rng.gen_bool(0.3) { -40.0 } else { 50.0 };
                intents.turn_rate = rng.gen_range(20..=70) as f64;
            }
            MovementPattern::Defensive => {
                intents.target_speed = 30.0;
                intents.turn_rate = rng.gen_range(30..=90) as f64;
            }
        }
    }
}
