use candid::{CandidType, Deserialize};
use serde::Serialize;

use crate::boundary::Boundary;

// =============================================================================
// CONSTANTS
// =============================================================================

pub const DEFAULT_ROWS: u32 = 10;
pub const DEFAULT_COLUMNS: u32 = 10;
pub const DEFAULT_BOUNDARY: Boundary = Boundary::Hard;

/// Upper bound on either grid dimension (512x512 = 262,144 cells, same as the
/// persistent world canisters).
pub const MAX_GRID_DIMENSION: u32 = 512;

/// Generations computed by a single `step` call. A 512x512 generation costs
/// roughly 90M instructions, so 200 stays well inside the 40B message limit.
pub const MAX_STEPS_PER_CALL: u32 = 200;

// =============================================================================
// COMMANDS
// =============================================================================

/// One message of the command interface. Each variant carries only the
/// payload its effect needs.
#[derive(CandidType, Deserialize, Serialize, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    NextGeneration,
    UpdateCell {
        row: u32,
        column: u32,
        cell_state: bool,
    },
    ToggleCell { row: u32, column: u32 },
    UpdateGrid { new_grid: Vec<Vec<bool>> },
    UpdateGridSize {
        num_of_rows: u32,
        num_of_columns: u32,
    },
    ClearGrid,
    UpdateGridBoundary { new_boundary: Boundary },
}

// =============================================================================
// CANISTER TYPES
// =============================================================================

/// Init / upgrade argument
#[derive(CandidType, Deserialize, Serialize, Clone, Debug)]
pub struct LifeConfig {
    pub num_of_rows: u32,
    pub num_of_columns: u32,
    pub boundary: Option<Boundary>,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            num_of_rows: DEFAULT_ROWS,
            num_of_columns: DEFAULT_COLUMNS,
            boundary: Some(DEFAULT_BOUNDARY),
        }
    }
}

/// Full state returned to the frontend (nested rows, row-major)
#[derive(CandidType, Deserialize, Serialize, Clone, Debug)]
pub struct GameState {
    pub grid: Vec<Vec<bool>>,
    pub rows: u32,
    pub columns: u32,
    pub boundary: Boundary,
    pub generation: u64,
    pub population: u64,
}

/// Lightweight metadata for sync checks (no cells)
#[derive(CandidType, Deserialize, Serialize, Clone, Debug)]
pub struct GameMetadata {
    pub rows: u32,
    pub columns: u32,
    pub boundary: Boundary,
    pub generation: u64,
    pub population: u64,
}
