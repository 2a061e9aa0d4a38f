//! Boundary topologies and their neighbor mappings.
//!
//! Every mapping takes a cell `(row, column)` plus an offset in `-1..=1` on
//! each axis and returns where that neighbor actually lives on the grid, or
//! `None` if it does not exist.

use candid::{CandidType, Deserialize};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(CandidType, Deserialize, Serialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Boundary {
    /// No wraparound: cells past the edge don't exist
    Hard,
    /// Both axes wrap independently
    Torus,
    /// Columns wrap; crossing the top/bottom edge mirrors the column
    KleinBottle,
    /// Both axes wrap with a mirror on the other axis
    ProjectivePlane,
}

/// `(rows, columns)`, `(row, column)`, `(row_offset, column_offset)` -> neighbor position
pub type Resolver = fn((usize, usize), (usize, usize), (isize, isize)) -> Option<(usize, usize)>;

impl Boundary {
    pub const ALL: [Boundary; 4] = [
        Boundary::Hard,
        Boundary::Torus,
        Boundary::KleinBottle,
        Boundary::ProjectivePlane,
    ];

    /// Neighbor mapping for this topology. Looked up once per generation.
    pub fn resolver(self) -> Resolver {
        match self {
            Boundary::Hard => resolve_hard,
            Boundary::Torus => resolve_torus,
            Boundary::KleinBottle => resolve_klein_bottle,
            Boundary::ProjectivePlane => resolve_projective_plane,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Boundary::Hard => "hard",
            Boundary::Torus => "torus",
            Boundary::KleinBottle => "kleinBottle",
            Boundary::ProjectivePlane => "projectivePlane",
        }
    }
}

impl fmt::Display for Boundary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Boundary {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Boundary::ALL
            .into_iter()
            .find(|b| b.as_str() == s)
            .ok_or_else(|| {
                format!(
                    "Unknown boundary '{}'. Expected hard, torus, kleinBottle or projectivePlane",
                    s
                )
            })
    }
}

// ============================================================================
// INDEX HELPERS
// ============================================================================

/// Euclidean remainder, never negative
#[inline(always)]
fn wrap(n: isize, m: usize) -> usize {
    n.rem_euclid(m as isize) as usize
}

#[inline(always)]
fn in_range(n: isize, m: usize) -> bool {
    n >= 0 && (n as usize) < m
}

/// Reflect an in-range index: 0 <-> m-1
#[inline(always)]
fn mirror(n: usize, m: usize) -> usize {
    m - 1 - n
}

// ============================================================================
// RESOLVERS
// ============================================================================

fn resolve_hard(
    (rows, columns): (usize, usize),
    (row, column): (usize, usize),
    (dr, dc): (isize, isize),
) -> Option<(usize, usize)> {
    let r = row as isize + dr;
    let c = column as isize + dc;
    if in_range(r, rows) && in_range(c, columns) {
        Some((r as usize, c as usize))
    } else {
        None
    }
}

fn resolve_torus(
    (rows, columns): (usize, usize),
    (row, column): (usize, usize),
    (dr, dc): (isize, isize),
) -> Option<(usize, usize)> {
    let r = wrap(row as isize + dr, rows);
    let c = wrap(column as isize + dc, columns);
    Some((r, c))
}

fn resolve_klein_bottle(
    (rows, columns): (usize, usize),
    (row, column): (usize, usize),
    (dr, dc): (isize, isize),
) -> Option<(usize, usize)> {
    let r = row as isize + dr;
    let c = wrap(column as isize + dc, columns);
    if in_range(r, rows) {
        Some((r as usize, c))
    } else {
        Some((wrap(r, rows), mirror(c, columns)))
    }
}

fn resolve_projective_plane(
    (rows, columns): (usize, usize),
    (row, column): (usize, usize),
    (dr, dc): (isize, isize),
) -> Option<(usize, usize)> {
    let r = row as isize + dr;
    let c = column as isize + dc;

    match (in_range(r, rows), in_range(c, columns)) {
        // interior
        (true, true) => Some((r as usize, c as usize)),
        // crossed a left/right edge: wrap the column, mirror the row
        (true, false) => Some((mirror(r as usize, rows), wrap(c, columns))),
        // crossed a top/bottom edge: wrap the row, mirror the column
        (false, true) => Some((wrap(r, rows), mirror(c as usize, columns))),
        // Both out only happens on a corner cell's outward diagonal, which
        // is identified with the cell itself. The engine already counts the
        // cell through the (0,0) offset and subtracts it once, so the
        // identified copy contributes nothing.
        (false, false) => None,
    }
}
