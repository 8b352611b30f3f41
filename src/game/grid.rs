use std::collections::HashSet;

use rand::Rng;

use crate::models::{Grid, Position};

/// Side length of the square letter grid
pub const GRID_SIZE: usize = 5;
/// Number of unselectable cells per grid
pub const BLOCKED_CELLS: usize = 4;

pub struct GridGenerator;

impl GridGenerator {
    /// Generate a new 5x5 grid of independently uniform random letters A-Z
    pub fn generate() -> Grid {
        let mut rng = rand::rng();

        (0..GRID_SIZE)
            .map(|_| {
                (0..GRID_SIZE)
                    .map(|_| Self::random_letter(&mut rng))
                    .collect()
            })
            .collect()
    }

    /// Draw in-bounds coordinates, retrying on duplicates, until exactly
    /// BLOCKED_CELLS distinct ones are collected
    pub fn generate_blocked() -> HashSet<Position> {
        let mut rng = rand::rng();
        let mut blocked = HashSet::new();

        while blocked.len() < BLOCKED_CELLS {
            blocked.insert(Position {
                row: rng.random_range(0..GRID_SIZE),
                col: rng.random_range(0..GRID_SIZE),
            });
        }

        blocked
    }

    fn random_letter(rng: &mut impl Rng) -> char {
        (b'A' + rng.random_range(0..26)) as char
    }
}
