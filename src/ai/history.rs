// Bounded scan history for one opponent

use std::collections::VecDeque;

use crate::engine::ScanEvent;
use crate::tactics::{angle_difference, calculate_angle, Point};

/// Last `capacity` positions of a tracked opponent plus its last known energy
#[derive(Debug, Clone)]
pub struct ScanHistory {
    samples: VecDeque<Point>,
    capacity: usize,
    last_energy: Option<f64>,
}

impl ScanHistory {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            samples: VecDeque::with_capacity(capacity),
            capacity,
            last_energy: None,
        }
    }

    pub fn push(&mut self, scan: &ScanEvent) {
        if self.samples.len() == self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(scan.position());
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn clear(&mut self) {
        self.samples.clear();
        self.last_energy = None;
    }

    /// True when the recorded positions form a rough straight line.
    ///
    /// Needs at least three samples and two non-zero moves; every move's
    /// bearing must be within `tolerance` degrees of the first.
    pub fn is_linear(&self, tolerance: f64) -> bool {
        if self.samples.len() < 3 {
            return false;
        }

        let bearings: Vec<f64> = self
            .samples
            .iter()
            .zip(self.samples.iter().skip(1))
            .filter(|(a, b)| a != b)
            .map(|(a, b)| calculate_angle(*a, *b))
            .collect();

        match bearings.split_first() {
            Some((first, rest)) if !rest.is_empty() => rest
                .iter()
                .all(|bearing| angle_difference(*bearing, *first) <= tolerance),
            _ => false,
        }
    }

    /// Record the opponent's energy and report a drop that looks like a shot.
    ///
    /// Firing costs the shooter the bullet's power (at most 3), so a drop in
    /// (0, 3] is returned as the likely power.
    pub fn energy_drop(&mut self, energy: f64) -> Option<f64> {
        let previous = self.last_energy.replace(energy)?;
        let drop = previous - energy;
        (drop > 0.0 && drop <= 3.0).then_some(drop)
    }
}
