//! Rectangular grid of binary cells.
//!
//! Cells live in one contiguous row-major buffer of 0/1 bytes, so the
//! "every row has the same length" invariant holds by construction.

use crate::error::EngineError;
use crate::types::MAX_GRID_DIMENSION;

pub const DEAD: u8 = 0;
pub const ALIVE: u8 = 1;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<u8>,
}

#[inline]
fn to_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

fn validate_dimensions(rows: usize, columns: usize) -> Result<(), EngineError> {
    let max = MAX_GRID_DIMENSION as usize;
    if rows == 0 || columns == 0 || rows > max || columns > max {
        return Err(EngineError::InvalidDimension {
            rows: to_u32(rows),
            columns: to_u32(columns),
            max: MAX_GRID_DIMENSION,
        });
    }
    Ok(())
}

impl Grid {
    /// All-dead grid of the given size
    pub fn new(rows: usize, columns: usize) -> Result<Self, EngineError> {
        validate_dimensions(rows, columns)?;
        Ok(Self {
            rows,
            columns,
            cells: vec![DEAD; rows * columns],
        })
    }

    /// Build a grid from nested rows, rejecting empty or jagged input
    pub fn from_rows(rows: &[Vec<bool>]) -> Result<Self, EngineError> {
        let columns = rows.first().map_or(0, Vec::len);
        validate_dimensions(rows.len(), columns)?;

        let mut cells = Vec::with_capacity(rows.len() * columns);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != columns {
                return Err(EngineError::ShapeMismatch {
                    row: to_u32(i),
                    expected: to_u32(columns),
                    found: to_u32(row.len()),
                });
            }
            cells.extend(row.iter().map(|&alive| if alive { ALIVE } else { DEAD }));
        }

        Ok(Self {
            rows: rows.len(),
            columns,
            cells,
        })
    }

    /// Used by the transition engine, which builds the buffer itself
    pub(crate) fn from_cells(rows: usize, columns: usize, cells: Vec<u8>) -> Self {
        debug_assert_eq!(cells.len(), rows * columns);
        Self {
            rows,
            columns,
            cells,
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[inline]
    fn idx(&self, row: usize, column: usize) -> usize {
        row * self.columns + column
    }

    /// Raw 0/1 value. Caller guarantees the position is in range.
    #[inline]
    pub(crate) fn value(&self, row: usize, column: usize) -> u8 {
        self.cells[self.idx(row, column)]
    }

    pub fn get(&self, row: usize, column: usize) -> Option<bool> {
        (row < self.rows && column < self.columns).then(|| self.value(row, column) == ALIVE)
    }

    pub fn set(&mut self, row: usize, column: usize, alive: bool) -> Result<(), EngineError> {
        self.check_bounds(row, column)?;
        let i = self.idx(row, column);
        self.cells[i] = if alive { ALIVE } else { DEAD };
        Ok(())
    }

    pub fn check_bounds(&self, row: usize, column: usize) -> Result<(), EngineError> {
        if row >= self.rows || column >= self.columns {
            return Err(EngineError::OutOfBounds {
                row: to_u32(row),
                column: to_u32(column),
                rows: to_u32(self.rows),
                columns: to_u32(self.columns),
            });
        }
        Ok(())
    }

    /// New grid of the requested size with the overlapping top-left region
    /// copied over. Added rows/columns start dead; removed ones are dropped.
    pub fn resized(&self, rows: usize, columns: usize) -> Result<Self, EngineError> {
        let mut resized = Self::new(rows, columns)?;
        let keep_rows = rows.min(self.rows);
        let keep_columns = columns.min(self.columns);

        for row in 0..keep_rows {
            let src = self.idx(row, 0);
            let dst = resized.idx(row, 0);
            resized.cells[dst..dst + keep_columns]
                .copy_from_slice(&self.cells[src..src + keep_columns]);
        }

        Ok(resized)
    }

    /// Same shape, every cell dead
    pub fn cleared(&self) -> Self {
        Self {
            rows: self.rows,
            columns: self.columns,
            cells: vec![DEAD; self.cells.len()],
        }
    }

    /// Number of live cells
    pub fn population(&self) -> u64 {
        self.cells.iter().filter(|&&c| c == ALIVE).count() as u64
    }

    /// Nested wire form, one `Vec` per row
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.cells
            .chunks(self.columns)
            .map(|row| row.iter().map(|&c| c == ALIVE).collect())
            .collect()
    }
}
