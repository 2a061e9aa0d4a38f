//! Life Backend - Conway's Game of Life on selectable topologies
//!
//! One in-memory session whose grid can be bounded, a torus, a Klein bottle
//! or a projective plane. The engine itself is pure: every command takes the
//! current state and produces a new one. This canister only holds the
//! current value and a generation counter.

pub mod boundary;
pub mod engine;
pub mod error;
pub mod grid;
pub mod types;


// =============================================================================
// RE-EXPORTS
// =============================================================================

pub use boundary::Boundary;
pub use engine::SimulationState;
pub use error::EngineError;
pub use grid::Grid;
pub use types::{Command, GameMetadata, GameState, LifeConfig};

use ic_cdk::{init, post_upgrade, query, update};
use std::cell::RefCell;
use types::{DEFAULT_BOUNDARY, MAX_STEPS_PER_CALL};

// =============================================================================
// SESSION
// =============================================================================

/// The live simulation plus how many generations it has run
#[derive(Clone, Debug)]
pub struct Session {
    pub state: SimulationState,
    pub generation: u64,
}

impl Session {
    pub fn from_config(config: &LifeConfig) -> Result<Self, EngineError> {
        let state = SimulationState::new(
            config.num_of_rows as usize,
            config.num_of_columns as usize,
            config.boundary.unwrap_or(DEFAULT_BOUNDARY),
        )?;
        Ok(Self {
            state,
            generation: 0,
        })
    }

    /// Apply a command. On error the session is left untouched.
    pub fn dispatch(&mut self, command: &Command) -> Result<(), EngineError> {
        let next = engine::apply(&self.state, command)?;
        self.state = next;
        match command {
            Command::NextGeneration => self.generation += 1,
            Command::ClearGrid | Command::UpdateGrid { .. } => self.generation = 0,
            _ => {}
        }
        Ok(())
    }

    /// Run up to `MAX_STEPS_PER_CALL` generations, returning how many ran
    pub fn step(&mut self, generations: u32) -> u32 {
        let generations = generations.min(MAX_STEPS_PER_CALL);
        self.state = engine::advance(&self.state, generations);
        self.generation += generations as u64;
        generations
    }

    pub fn metadata(&self) -> GameMetadata {
        GameMetadata {
            rows: self.state.grid.rows() as u32,
            columns: self.state.grid.columns() as u32,
            boundary: self.state.boundary,
            generation: self.generation,
            population: self.state.grid.population(),
        }
    }

    pub fn game_state(&self) -> GameState {
        let meta = self.metadata();
        GameState {
            grid: self.state.grid.to_rows(),
            rows: meta.rows,
            columns: meta.columns,
            boundary: meta.boundary,
            generation: meta.generation,
            population: meta.population,
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        match Session::from_config(&LifeConfig::default()) {
            Ok(session) => session,
            Err(e) => ic_cdk::trap(&format!("Invalid default LifeConfig: {}", e)),
        }
    }
}

thread_local! {
    static SESSION: RefCell<Session> = RefCell::new(Session::default());
}

fn with_session<R>(f: impl FnOnce(&Session) -> R) -> R {
    SESSION.with(|s| f(&s.borrow()))
}

fn with_session_mut<R>(f: impl FnOnce(&mut Session) -> R) -> R {
    SESSION.with(|s| f(&mut s.borrow_mut()))
}

/// Dispatch and return the resulting state
fn run_command(command: Command) -> Result<GameState, EngineError> {
    with_session_mut(|s| {
        s.dispatch(&command)?;
        Ok(s.game_state())
    })
}

/// Same as `run_command` for commands that cannot fail
fn run_infallible(command: Command) -> GameState {
    with_session_mut(|s| {
        if let Err(e) = s.dispatch(&command) {
            ic_cdk::trap(&format!("{:?} failed unexpectedly: {}", command, e));
        }
        s.game_state()
    })
}

fn start_session(config: Option<LifeConfig>) {
    let config = config.unwrap_or_default();
    match Session::from_config(&config) {
        Ok(session) => {
            ic_cdk::println!(
                "Life Backend session started - {}x{} grid, {} boundary",
                config.num_of_rows,
                config.num_of_columns,
                session.state.boundary
            );
            with_session_mut(|s| *s = session);
        }
        Err(e) => ic_cdk::trap(&format!("Invalid LifeConfig: {}", e)),
    }
}

// =============================================================================
// LIFECYCLE HOOKS
// =============================================================================

#[init]
fn init(config: Option<LifeConfig>) {
    start_session(config);
}

#[post_upgrade]
fn post_upgrade(config: Option<LifeConfig>) {
    // Heap only: an upgrade starts a fresh session
    start_session(config);
}

// =============================================================================
// COMMAND ENDPOINTS
// =============================================================================

#[update]
fn dispatch(command: Command) -> Result<GameState, EngineError> {
    run_command(command)
}

#[update]
fn next_generation() -> GameState {
    run_infallible(Command::NextGeneration)
}

/// Advance several generations in one call (capped at MAX_STEPS_PER_CALL)
#[update]
fn step(generations: u32) -> GameState {
    with_session_mut(|s| {
        let ran = s.step(generations);
        if ran < generations {
            ic_cdk::println!(
                "step: requested {} generations, capped at {}",
                generations,
                ran
            );
        }
        s.game_state()
    })
}

#[update]
fn update_cell(row: u32, column: u32, cell_state: bool) -> Result<GameState, EngineError> {
    run_command(Command::UpdateCell {
        row,
        column,
        cell_state,
    })
}

#[update]
fn toggle_cell(row: u32, column: u32) -> Result<GameState, EngineError> {
    run_command(Command::ToggleCell { row, column })
}

#[update]
fn update_grid(new_grid: Vec<Vec<bool>>) -> Result<GameState, EngineError> {
    let rows = new_grid.len();
    let result = run_command(Command::UpdateGrid { new_grid });
    if result.is_ok() {
        ic_cdk::println!("Grid replaced ({} rows), generation reset", rows);
    }
    result
}

#[update]
fn update_grid_size(num_of_rows: u32, num_of_columns: u32) -> Result<GameState, EngineError> {
    let result = run_command(Command::UpdateGridSize {
        num_of_rows,
        num_of_columns,
    });
    if result.is_ok() {
        ic_cdk::println!("Grid resized to {}x{}", num_of_rows, num_of_columns);
    }
    result
}

#[update]
fn clear_grid() -> GameState {
    ic_cdk::println!("Grid cleared");
    run_infallible(Command::ClearGrid)
}

#[update]
fn update_grid_boundary(new_boundary: Boundary) -> GameState {
    ic_cdk::println!("Boundary set to {}", new_boundary);
    run_infallible(Command::UpdateGridBoundary { new_boundary })
}

// =============================================================================
// QUERY METHODS
// =============================================================================

#[query]
fn get_state() -> GameState {
    with_session(Session::game_state)
}

/// Dimensions, topology and counters without the cells
#[query]
fn get_metadata() -> GameMetadata {
    with_session(Session::metadata)
}

#[query]
fn greet(name: String) -> String {
    let meta = with_session(Session::metadata);
    format!(
        "Hello, {}! Welcome to a {}x{} Game of Life on a {} boundary.",
        name, meta.rows, meta.columns, meta.boundary
    )
}

ic_cdk::export_candid!();
