//! 2D grid transforms: transpose and quarter-turn rotation.
//!
//! A grid is a plain `Vec<Vec<T>>` of rows. Every operation here assumes a
//! rectangular grid with at least one row and one column; ragged input is a
//! caller error and yields unspecified (but memory-safe) results. Grids are
//! never silently reshaped or repaired.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A rotation request: a named quarter or half turn, or a raw degree count.
///
/// Degree counts are normalized into `[0, 360)` before dispatch, so `-270`,
/// `90`, and `450` all resolve to a left turn. Normalized degrees that do
/// not land on a supported turn leave the grid unchanged; see [`rotate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rotation {
    /// Quarter turn counter-clockwise (90°).
    Left,
    /// Quarter turn clockwise (resolves to 270°).
    Right,
    /// Half turn (180°).
    Half,
    /// Arbitrary signed degree count, normalized before dispatch.
    Degrees(i32),
}

impl Rotation {
    /// The degree value this rotation dispatches on, in `[0, 360)`.
    pub fn normalized_degrees(&self) -> i32 {
        match self {
            Rotation::Left => 90,
            Rotation::Right => 270,
            Rotation::Half => 180,
            Rotation::Degrees(degrees) => degrees.rem_euclid(360),
        }
    }
}

impl FromStr for Rotation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "left" => Ok(Rotation::Left),
            "right" => Ok(Rotation::Right),
            "half" => Ok(Rotation::Half),
            other => other
                .parse::<i32>()
                .map(Rotation::Degrees)
                .map_err(|_| format!("Unknown rotation: {}", s)),
        }
    }
}

/// Transpose a rectangular grid, returning a new grid and leaving the input
/// untouched.
///
/// An R×C input yields a C×R output with `out[i][j] == grid[j][i]`.
pub fn transpose<T: Clone>(grid: &[Vec<T>]) -> Vec<Vec<T>> {
    let rows = grid.len();
    let cols = grid.first().map_or(0, Vec::len);

    let mut out = Vec::with_capacity(cols);
    for i in 0..cols {
        let mut row = Vec::with_capacity(rows);
        for j in 0..rows {
            row.push(grid[j][i].clone());
        }
        out.push(row);
    }
    out
}

/// Rotate a rectangular grid.
///
/// Quarter turns build on [`transpose`]:
///
/// * left (90°): transpose, then reverse the row order;
/// * right (270°): reverse the row order, then transpose;
/// * half (180°): reverse every row, then reverse the row order, all in
///   place.
///
/// Any other normalized degree value is a no-op that hands the grid back
/// unchanged. That fallback is defined behavior, not an error; a debug log
/// line is the only trace of it.
///
/// The two quarter turns allocate a fresh grid while the half turn and the
/// no-op fallback reuse the argument's storage, so callers must not assume
/// the result is always a new allocation.
pub fn rotate<T: Clone>(mut grid: Vec<Vec<T>>, rotation: Rotation) -> Vec<Vec<T>> {
    match rotation.normalized_degrees() {
        90 => {
            let mut turned = transpose(&grid);
            turned.reverse();
            turned
        }
        270 => {
            grid.reverse();
            transpose(&grid)
        }
        180 => {
            for row in grid.iter_mut() {
                row.reverse();
            }
            grid.reverse();
            grid
        }
        degrees => {
            log::debug!(
                "No grid rotation for {} degrees, returning the grid unchanged.",
                degrees
            );
            grid
        }
    }
}
