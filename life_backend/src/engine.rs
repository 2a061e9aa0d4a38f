//! Transition engine and state transforms.
//!
//! Every operation takes the current state by reference and returns a new
//! one, so a failed operation leaves the caller's state exactly as it was.

use crate::boundary::Boundary;
use crate::error::EngineError;
use crate::grid::{Grid, ALIVE, DEAD};
use crate::types::Command;

/// A simulation session's full state: the cells plus the topology they live on
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationState {
    pub grid: Grid,
    pub boundary: Boundary,
}

impl SimulationState {
    /// All-dead grid of the given size
    pub fn new(rows: usize, columns: usize, boundary: Boundary) -> Result<Self, EngineError> {
        Ok(Self {
            grid: Grid::new(rows, columns)?,
            boundary,
        })
    }
}

// ============================================================================
// TRANSITION
// ============================================================================

/// Conway's rules for one cell given its live-neighbor count
#[inline]
fn next_cell(current: u8, alive_neighbors: u8) -> u8 {
    match (current, alive_neighbors) {
        (ALIVE, n) if n < 2 => DEAD, // underpopulation
        (ALIVE, n) if n > 3 => DEAD, // overpopulation
        (DEAD, 3) => ALIVE,          // birth
        (c, _) => c,
    }
}

/// Compute the next generation. Reads only from `state.grid` and writes
/// only to a fresh buffer, so every cell sees the previous generation.
pub fn next_generation(state: &SimulationState) -> SimulationState {
    let grid = &state.grid;
    let dims = (grid.rows(), grid.columns());
    let resolve = state.boundary.resolver();

    let mut cells = Vec::with_capacity(dims.0 * dims.1);
    for row in 0..dims.0 {
        for column in 0..dims.1 {
            // The 3x3 window includes the cell itself; it's subtracted below.
            // An outward offset only lands back on the cell when the grid is
            // too narrow to hold a distinct neighbor there, as on a 1x1 torus.
            let mut alive_neighbors = 0u8;
            for dr in -1..=1 {
                for dc in -1..=1 {
                    if let Some((r, c)) = resolve(dims, (row, column), (dr, dc)) {
                        alive_neighbors += grid.value(r, c);
                    }
                }
            }

            let current = grid.value(row, column);
            alive_neighbors -= current;

            cells.push(next_cell(current, alive_neighbors));
        }
    }

    SimulationState {
        grid: Grid::from_cells(dims.0, dims.1, cells),
        boundary: state.boundary,
    }
}

/// Run `generations` steps back to back
pub fn advance(state: &SimulationState, generations: u32) -> SimulationState {
    let mut current = state.clone();
    for _ in 0..generations {
        current = next_generation(&current);
    }
    current
}

// ============================================================================
// MUTATIONS
// ============================================================================

pub fn update_cell(
    state: &SimulationState,
    row: usize,
    column: usize,
    alive: bool,
) -> Result<SimulationState, EngineError> {
    let mut grid = state.grid.clone();
    grid.set(row, column, alive)?;
    Ok(SimulationState {
        grid,
        boundary: state.boundary,
    })
}

pub fn toggle_cell(
    state: &SimulationState,
    row: usize,
    column: usize,
) -> Result<SimulationState, EngineError> {
    state.grid.check_bounds(row, column)?;
    let alive = state.grid.get(row, column).unwrap_or(false);
    update_cell(state, row, column, !alive)
}

/// Wholesale replacement; rejects empty or jagged input
pub fn update_grid(
    state: &SimulationState,
    new_grid: &[Vec<bool>],
) -> Result<SimulationState, EngineError> {
    Ok(SimulationState {
        grid: Grid::from_rows(new_grid)?,
        boundary: state.boundary,
    })
}

/// Resize, keeping the overlapping top-left region
pub fn update_grid_size(
    state: &SimulationState,
    rows: usize,
    columns: usize,
) -> Result<SimulationState, EngineError> {
    Ok(SimulationState {
        grid: state.grid.resized(rows, columns)?,
        boundary: state.boundary,
    })
}

pub fn clear_grid(state: &SimulationState) -> SimulationState {
    SimulationState {
        grid: state.grid.cleared(),
        boundary: state.boundary,
    }
}

pub fn update_grid_boundary(state: &SimulationState, boundary: Boundary) -> SimulationState {
    SimulationState {
        grid: state.grid.clone(),
        boundary,
    }
}

// ============================================================================
// REDUCER
// ============================================================================

/// Dispatch one command against `state`
pub fn apply(state: &SimulationState, command: &Command) -> Result<SimulationState, EngineError> {
    match command {
        Command::NextGeneration => Ok(next_generation(state)),
        Command::UpdateCell {
            row,
            column,
            cell_state,
        } => update_cell(state, *row as usize, *column as usize, *cell_state),
        Command::ToggleCell { row, column } => toggle_cell(state, *row as usize, *column as usize),
        Command::UpdateGrid { new_grid } => update_grid(state, new_grid),
        Command::UpdateGridSize {
            num_of_rows,
            num_of_columns,
        } => update_grid_size(state, *num_of_rows as usize, *num_of_columns as usize),
        Command::ClearGrid => Ok(clear_grid(state)),
        Command::UpdateGridBoundary { new_boundary } => {
            Ok(update_grid_boundary(state, *new_boundary))
        }
    }
}
