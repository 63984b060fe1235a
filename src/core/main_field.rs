//! The central square field where thrown squares come to rest.
//!
//! Throw geometry: a queue slot projects onto an entry cell on the adjacent
//! edge of the field (Top/Bottom slots map to columns, Left/Right slots map
//! to rows). A thrown square enters at that cell and slides inward until it
//! rests on the last empty cell before the first occupied one, or on the far
//! edge. Exactly one cell becomes occupied per throw.
//!
//! A combination is any fully occupied row or column; the scan reports rows
//! before columns, ascending, so event ordering is deterministic.

use crate::core::error::GameError;
use crate::core::matrix::Matrix;
use crate::types::{Cell, Side, SquareKind};

/// One completed line reported by the combination scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Row(usize),
    Column(usize),
}

/// A fully occupied line and the coordinates of its cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Combination {
    pub line: Line,
    pub cells: Vec<(usize, usize)>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MainField {
    cells: Matrix<Cell>,
    dimension: usize,
}

impl MainField {
    pub fn new(dimension: usize) -> Self {
        Self {
            cells: Matrix::new(dimension, dimension, None),
            dimension,
        }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Read-only view of the cell grid.
    pub fn matrix(&self) -> &Matrix<Cell> {
        &self.cells
    }

    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, GameError> {
        self.cells.get(row, col).copied()
    }

    /// Edge cell where a square thrown from `(side, pos_idx)` enters.
    pub fn entry_cell(&self, side: Side, pos_idx: usize) -> Result<(usize, usize), GameError> {
        if pos_idx >= self.dimension {
            return Err(GameError::SlotOutOfRange {
                side,
                index: pos_idx,
                len: self.dimension,
            });
        }
        let last = self.dimension - 1;
        Ok(match side {
            Side::Top => (0, pos_idx),
            Side::Bottom => (last, pos_idx),
            Side::Left => (pos_idx, 0),
            Side::Right => (pos_idx, last),
        })
    }

    /// Cell where a square thrown from `(side, pos_idx)` would come to rest,
    /// or `None` if the lane entry is blocked.
    pub fn target_cell(
        &self,
        side: Side,
        pos_idx: usize,
    ) -> Result<Option<(usize, usize)>, GameError> {
        let (mut row, mut col) = self.entry_cell(side, pos_idx)?;
        if self.cells[(row, col)].is_some() {
            return Ok(None);
        }

        let (dr, dc) = inward_step(side);
        loop {
            let next_row = row as isize + dr;
            let next_col = col as isize + dc;
            if next_row < 0
                || next_col < 0
                || next_row as usize >= self.dimension
                || next_col as usize >= self.dimension
            {
                break;
            }
            let (nr, nc) = (next_row as usize, next_col as usize);
            if self.cells[(nr, nc)].is_some() {
                break;
            }
            row = nr;
            col = nc;
        }
        Ok(Some((row, col)))
    }

    /// Whether a throw from `(side, pos_idx)` has somewhere to land.
    /// Legality depends only on occupancy, never on the square's kind.
    pub fn can_place(&self, side: Side, pos_idx: usize) -> Result<bool, GameError> {
        Ok(self.target_cell(side, pos_idx)?.is_some())
    }

    /// Occupy the computed target cell with `kind` and return its position.
    /// Throwing into a blocked lane is a contract violation; the orchestrator
    /// must check `can_place` first.
    pub fn place(
        &mut self,
        side: Side,
        pos_idx: usize,
        kind: SquareKind,
    ) -> Result<(usize, usize), GameError> {
        match self.target_cell(side, pos_idx)? {
            Some((row, col)) => {
                self.cells.set(row, col, Some(kind))?;
                Ok((row, col))
            }
            None => {
                let (row, col) = self.entry_cell(side, pos_idx)?;
                Err(GameError::CellOccupied { row, col })
            }
        }
    }

    /// Scan for all fully occupied rows and columns in one pass.
    /// Rows come first, then columns, each in ascending index order.
    pub fn find_combinations(&self) -> Vec<Combination> {
        let d = self.dimension;
        let mut found = Vec::new();

        for row in 0..d {
            if (0..d).all(|col| self.cells[(row, col)].is_some()) {
                found.push(Combination {
                    line: Line::Row(row),
                    cells: (0..d).map(|col| (row, col)).collect(),
                });
            }
        }
        for col in 0..d {
            if (0..d).all(|row| self.cells[(row, col)].is_some()) {
                found.push(Combination {
                    line: Line::Column(col),
                    cells: (0..d).map(|row| (row, col)).collect(),
                });
            }
        }

        found
    }

    /// Set every given cell back to empty.
    pub fn clear(&mut self, cells: &[(usize, usize)]) -> Result<(), GameError> {
        for &(row, col) in cells {
            self.cells.set(row, col, None)?;
        }
        Ok(())
    }

    /// Whether at least one `(side, pos_idx)` with `pos_idx < side_len` can
    /// still receive a throw.
    pub fn has_legal_move(&self, side_len: usize) -> bool {
        let len = side_len.min(self.dimension);
        for side in Side::ALL {
            for pos_idx in 0..len {
                // Entry cells are always in bounds here.
                if let Ok(Some(_)) = self.target_cell(side, pos_idx) {
                    return true;
                }
            }
        }
        false
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|(_, _, c)| c.is_some()).count()
    }

    pub fn is_full(&self) -> bool {
        self.occupied_count() == self.dimension * self.dimension
    }

    /// Empty the whole field.
    pub fn reset(&mut self) {
        self.cells.fill(None);
    }

    #[cfg(test)]
    pub fn set_cell(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells.set(row, col, cell).unwrap();
    }
}

fn inward_step(side: Side) -> (isize, isize) {
    match side {
        Side::Top => (1, 0),
        Side::Bottom => (-1, 0),
        Side::Left => (0, 1),
        Side::Right => (0, -1),
    }
}
