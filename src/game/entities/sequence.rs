//! Flashed sequence generation.
//!
//! Draws grid coordinates that are not already part of the sequence.
//! Callers rely on `CELL_COUNT >= MAX_LEVEL` (checked in `config::game`), so a
//! level never runs out of free cells.

use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::{Rng, SeedableRng};

use crate::config::game::{CELL_COUNT, GRID_SIZE, MAX_DRAW_ATTEMPTS};
use crate::game::grid::free_cells;
use crate::game::types::GridCoordinate;

/// Source of the next coordinate to flash.
pub trait CoordinateSource {
    /// Return a coordinate absent from `existing`, or `None` if the grid is full.
    fn next_coordinate(&mut self, existing: &[GridCoordinate]) -> Option<GridCoordinate>;
}

pub struct RandomSequenceGenerator<R = StdRng> {
    rng: R,
}

impl RandomSequenceGenerator {
    pub fn new() -> Self {
        Self { rng: StdRng::from_os_rng() }
    }
}

impl Default for RandomSequenceGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
impl<R: Rng> RandomSequenceGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> CoordinateSource for RandomSequenceGenerator<R> {
    fn next_coordinate(&mut self, existing: &[GridCoordinate]) -> Option<GridCoordinate> {
        draw_coordinate(&mut self.rng, existing)
    }
}

/// Uniformly draw a coordinate not in `existing`.
///
/// Redraws on collision up to `MAX_DRAW_ATTEMPTS` times, then picks among the
/// remaining free cells directly.
pub fn draw_coordinate<R: Rng + ?Sized>(
    rng: &mut R,
    existing: &[GridCoordinate],
) -> Option<GridCoordinate> {
    if existing.len() >= CELL_COUNT {
        return None;
    }

    for _ in 0..MAX_DRAW_ATTEMPTS {
        let coord = GridCoordinate {
            row: rng.random_range(0..GRID_SIZE),
            col: rng.random_range(0..GRID_SIZE),
        };
        if !existing.contains(&coord) {
            return Some(coord);
        }
    }

    free_cells(existing).into_iter().choose(rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::game::MAX_LEVEL;
    use crate::game::grid::all_cells;

    #[test]
    fn test_sequence_has_no_duplicates() {
        let mut generator = RandomSequenceGenerator::with_rng(StdRng::seed_from_u64(7));
        for level in 1..=MAX_LEVEL as usize {
            let mut sequence = Vec::new();
            for _ in 0..level {
                let coord = generator.next_coordinate(&sequence).expect("grid has room");
                assert!(!sequence.contains(&coord));
                sequence.push(coord);
            }
            assert_eq!(sequence.len(), level);
        }
    }

    #[test]
    fn test_draw_fills_whole_grid() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut taken = Vec::new();
        while let Some(coord) = draw_coordinate(&mut rng, &taken) {
            assert!(coord.row < GRID_SIZE && coord.col < GRID_SIZE);
            assert!(!taken.contains(&coord));
            taken.push(coord);
        }
        assert_eq!(taken.len(), CELL_COUNT);
    }

    #[test]
    fn test_single_free_cell_is_found() {
        let mut rng = StdRng::seed_from_u64(3);
        let last = GridCoordinate { row: 2, col: 3 };
        let taken: Vec<_> = all_cells().filter(|c| *c != last).collect();
        assert_eq!(draw_coordinate(&mut rng, &taken), Some(last));
    }

    #[test]
    fn test_full_grid_yields_none() {
        let mut rng = StdRng::seed_from_u64(3);
        let taken: Vec<_> = all_cells().collect();
        assert_eq!(draw_coordinate(&mut rng, &taken), None);
    }
}
