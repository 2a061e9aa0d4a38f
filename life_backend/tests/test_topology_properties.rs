use life_backend::engine::{clear_grid, next_generation, update_cell, update_grid, update_grid_size};
use life_backend::{Boundary, Grid, SimulationState};
use proptest::prelude::*;

// Boundary strategies
fn boundary() -> impl Strategy<Value = Boundary> {
    prop::sample::select(Boundary::ALL.to_vec())
}

// Random rectangular pattern, 3-12 on each side
fn pattern() -> impl Strategy<Value = Vec<Vec<bool>>> {
    (3usize..=12, 3usize..=12).prop_flat_map(|(rows, columns)| {
        prop::collection::vec(prop::collection::vec(any::<bool>(), columns), rows)
    })
}

fn state_with(rows: &[Vec<bool>], boundary: Boundary) -> SimulationState {
    SimulationState {
        grid: Grid::from_rows(rows).unwrap(),
        boundary,
    }
}

/// Shift every row down by `dr` and every column right by `dc`, wrapping
fn rotate(rows: &[Vec<bool>], dr: usize, dc: usize) -> Vec<Vec<bool>> {
    let (height, width) = (rows.len(), rows[0].len());
    (0..height)
        .map(|r| {
            (0..width)
                .map(|c| {
                    let source_row = (r + height - dr % height) % height;
                    let source_column = (c + width - dc % width) % width;
                    rows[source_row][source_column]
                })
                .collect()
        })
        .collect()
}

proptest! {
    #[test]
    fn prop_empty_grid_stays_empty(rows in 1usize..=16, columns in 1usize..=16, b in boundary()) {
        let state = SimulationState::new(rows, columns, b).unwrap();
        let next = next_generation(&state);
        prop_assert_eq!(next.grid.population(), 0);
        prop_assert_eq!(next, state);
    }

    #[test]
    fn prop_lone_cell_dies(
        (rows, columns, row, column) in (3usize..=16, 3usize..=16)
            .prop_flat_map(|(r, c)| (Just(r), Just(c), 0..r, 0..c)),
        b in boundary(),
    ) {
        let state = SimulationState::new(rows, columns, b).unwrap();
        let state = update_cell(&state, row, column, true).unwrap();
        prop_assert_eq!(next_generation(&state).grid.population(), 0);
    }

    #[test]
    fn prop_block_is_still_life(
        (rows, columns, row, column) in (4usize..=16, 4usize..=16)
            .prop_flat_map(|(r, c)| (Just(r), Just(c), 1..=r - 3, 1..=c - 3)),
        b in boundary(),
    ) {
        let mut state = SimulationState::new(rows, columns, b).unwrap();
        for (dr, dc) in [(0, 0), (0, 1), (1, 0), (1, 1)] {
            state = update_cell(&state, row + dr, column + dc, true).unwrap();
        }
        prop_assert_eq!(next_generation(&state), state);
    }

    #[test]
    fn prop_generation_preserves_shape_and_boundary(cells in pattern(), b in boundary()) {
        let state = state_with(&cells, b);
        let next = next_generation(&state);
        prop_assert_eq!(next.grid.rows(), cells.len());
        prop_assert_eq!(next.grid.columns(), cells[0].len());
        prop_assert_eq!(next.boundary, b);
    }

    #[test]
    fn prop_torus_is_translation_invariant(cells in pattern(), dr in 0usize..12, dc in 0usize..12) {
        let stepped = next_generation(&state_with(&cells, Boundary::Torus));
        let stepped_then_shifted = rotate(&stepped.grid.to_rows(), dr, dc);
        let shifted = state_with(&rotate(&cells, dr, dc), Boundary::Torus);
        let shifted_then_stepped = next_generation(&shifted).grid.to_rows();
        prop_assert_eq!(stepped_then_shifted, shifted_then_stepped);
    }

    #[test]
    fn prop_grow_then_shrink_restores(
        cells in pattern(),
        extra_rows in 0usize..8,
        extra_columns in 0usize..8,
        b in boundary(),
    ) {
        let state = state_with(&cells, b);
        let (rows, columns) = (cells.len(), cells[0].len());
        let grown = update_grid_size(&state, rows + extra_rows, columns + extra_columns).unwrap();
        prop_assert_eq!(grown.grid.population(), state.grid.population());
        let restored = update_grid_size(&grown, rows, columns).unwrap();
        prop_assert_eq!(restored, state);
    }

    #[test]
    fn prop_clear_is_idempotent(cells in pattern(), b in boundary()) {
        let once = clear_grid(&state_with(&cells, b));
        prop_assert_eq!(once.grid.population(), 0);
        prop_assert_eq!(clear_grid(&once), once.clone());
        prop_assert_eq!(once.boundary, b);
    }

    #[test]
    fn prop_update_grid_round_trips(cells in pattern(), b in boundary()) {
        let state = SimulationState::new(1, 1, b).unwrap();
        let replaced = update_grid(&state, &cells).unwrap();
        prop_assert_eq!(replaced.grid.to_rows(), cells);
    }
}

#[test]
fn test_hard_matches_torus_away_from_edges() {
    // A blinker well inside the grid never touches a boundary
    let mut cells = vec![vec![false; 9]; 9];
    for column in 3..6 {
        cells[4][column] = true;
    }
    for b in [Boundary::Torus, Boundary::KleinBottle, Boundary::ProjectivePlane] {
        assert_eq!(
            next_generation(&state_with(&cells, b)).grid,
            next_generation(&state_with(&cells, Boundary::Hard)).grid,
            "{} differs from hard",
            b
        );
    }
}
