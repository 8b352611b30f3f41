use std::collections::HashSet;

use crate::models::{Grid, Position};

/// The ordered path of currently selected cells.
///
/// Invariants held after every `select` call: no duplicate cells, and every
/// consecutive pair is orthogonally adjacent (same row or column, one step
/// apart).
#[derive(Debug, Clone, Default)]
pub struct SelectionPath {
    cells: Vec<Position>,
}

impl SelectionPath {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one cell click to the path:
    /// - blocked cells are ignored
    /// - an empty path starts at the clicked cell
    /// - clicking a cell already on the path backtracks to just before it
    /// - a cell adjacent to the path's end extends the path
    /// - anything else starts a fresh path at the clicked cell
    pub fn select(&mut self, pos: Position, blocked: &HashSet<Position>) {
        if blocked.contains(&pos) {
            return;
        }

        if self.cells.is_empty() {
            self.cells.push(pos);
            return;
        }

        if let Some(idx) = self.cells.iter().position(|cell| *cell == pos) {
            self.cells.truncate(idx);
            return;
        }

        // cells is non-empty here
        let last = self.cells[self.cells.len() - 1];
        if are_adjacent(last, pos) {
            self.cells.push(pos);
        } else {
            self.cells = vec![pos];
        }
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    pub fn positions(&self) -> &[Position] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// The word spelled by the path, read in selection order
    pub fn word(&self, grid: &Grid) -> String {
        self.cells.iter().map(|pos| grid[pos.row][pos.col]).collect()
    }
}

/// Orthogonal adjacency: Manhattan distance 1, same row or column
pub fn are_adjacent(a: Position, b: Position) -> bool {
    let row_diff = (a.row as i32 - b.row as i32).abs();
    let col_diff = (a.col as i32 - b.col as i32).abs();

    (row_diff == 1 && col_diff == 0) || (col_diff == 1 && row_diff == 0)
}
