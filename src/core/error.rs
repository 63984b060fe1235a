//! Engine error taxonomy.
//!
//! Only contract violations surface as errors: out-of-range indices, placing
//! into a blocked lane, or invalid construction settings. Expected gameplay
//! negatives (illegal target, nothing to undo) are boolean results instead.

use thiserror::Error;

use crate::types::Side;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("matrix index ({row}, {col}) out of bounds for {rows}x{cols}")]
    IndexOutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("slot {index} out of range for {side:?} queue of length {len}")]
    SlotOutOfRange { side: Side, index: usize, len: usize },

    #[error("lane entered at ({row}, {col}) is blocked; check can_place first")]
    CellOccupied { row: usize, col: usize },

    #[error("main field must be square, got {horz}x{vert}")]
    NonSquareField { horz: usize, vert: usize },

    #[error("main field dimension must be at least 1")]
    EmptyField,

    #[error("side dimension {side} must be between 1 and the field dimension {field}")]
    BadSideDimension { side: usize, field: usize },
}
