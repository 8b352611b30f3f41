use serde::{Deserialize, Serialize};

/// A cell coordinate on the letter grid
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

/// The letter grid: a square matrix of uppercase letters,
/// immutable once generated for a round
pub type Grid = Vec<Vec<char>>;
