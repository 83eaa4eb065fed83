//! Interference task generation.
//!
//! Builds the shape pair shown between two flashes. Half of the pairs are
//! identical; the other half always differ in kind or color.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::types::{DistractionPair, ShapeColor, ShapeDescriptor, ShapeKind};

/// Source of distraction pairs.
pub trait InterferenceSource {
    fn generate(&mut self) -> DistractionPair;
}

pub struct InterferenceTaskGenerator<R = StdRng> {
    rng: R,
}

impl InterferenceTaskGenerator {
    pub fn new() -> Self {
        Self { rng: StdRng::from_os_rng() }
    }
}

impl Default for InterferenceTaskGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl<R: Rng> InterferenceTaskGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> InterferenceSource for InterferenceTaskGenerator<R> {
    fn generate(&mut self) -> DistractionPair {
        draw_pair(&mut self.rng).0
    }
}

fn draw_descriptor<R: Rng + ?Sized>(rng: &mut R) -> ShapeDescriptor {
    ShapeDescriptor {
        kind: ShapeKind::ALL[rng.random_range(0..ShapeKind::ALL.len())],
        color: ShapeColor::DRAWABLE[rng.random_range(0..ShapeColor::DRAWABLE.len())],
    }
}

/// Draw a pair, also returning whether the "identical" branch was taken.
pub fn draw_pair<R: Rng + ?Sized>(rng: &mut R) -> (DistractionPair, bool) {
    let identical = rng.random_bool(0.5);
    let left = draw_descriptor(rng);

    let right = if identical {
        left
    } else {
        let mut right = draw_descriptor(rng);
        if right == left {
            // Black is never drawn, so the pair stays visibly different.
            right.color = ShapeColor::Black;
        }
        right
    };

    (DistractionPair { left, right }, identical)
}
