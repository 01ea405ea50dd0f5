//! Food placement.

use super::types::Cell;
use crate::constants::MAX_FOOD_ATTEMPTS;
use rand::seq::IteratorRandom;
use rand::Rng;
use std::collections::{HashSet, VecDeque};

/// Pick a uniformly random cell not covered by `occupied`.
///
/// Tries a bounded number of random probes first (cheap while the snake is
/// short), then scans every free cell. Returns `None` only when the grid is
/// full.
pub fn place_food<R: Rng>(occupied: &VecDeque<Cell>, grid_size: i16, rng: &mut R) -> Option<Cell> {
    if grid_size <= 0 {
        return None;
    }

    for _ in 0..MAX_FOOD_ATTEMPTS {
        let cell = Cell::new(
            rng.gen_range(0..grid_size),
            rng.gen_range(0..grid_size),
        );
        if !occupied.contains(&cell) {
            return Some(cell);
        }
    }

    let taken: HashSet<Cell> = occupied.iter().copied().collect();
    (0..grid_size)
        .flat_map(|y| (0..grid_size).map(move |x| Cell::new(x, y)))
        .filter(|cell| !taken.contains(cell))
        .choose(rng)
}
