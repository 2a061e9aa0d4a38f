use candid::{CandidType, Deserialize};
use serde::Serialize;
use thiserror::Error;

/// Recoverable engine failures. The state an operation was called on is
/// never modified when one of these is returned.
#[derive(CandidType, Deserialize, Serialize, Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("invalid grid size {rows}x{columns}: both dimensions must be between 1 and {max}")]
    InvalidDimension { rows: u32, columns: u32, max: u32 },

    #[error("cell ({row}, {column}) is outside the {rows}x{columns} grid")]
    OutOfBounds {
        row: u32,
        column: u32,
        rows: u32,
        columns: u32,
    },

    #[error("row {row} has {found} cells, expected {expected}")]
    ShapeMismatch { row: u32, expected: u32, found: u32 },
}
