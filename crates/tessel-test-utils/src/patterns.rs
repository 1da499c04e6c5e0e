//! 2-D life patterns and helpers to place and read them.
//!
//! Pattern cells are `(x, y)` pairs where `x` is dimension 0.

use tessel_core::{Coord, GridError};
use tessel_engine::Grid;

/// 2×2 still life.
pub const BLOCK: &[(usize, usize)] = &[(0, 0), (1, 0), (0, 1), (1, 1)];

/// Period-2 oscillator, horizontal phase.
pub const BLINKER: &[(usize, usize)] = &[(0, 0), (1, 0), (2, 0)];

/// The glider, heading towards increasing `x` and `y`.
///
/// ```text
/// . # .
/// . . #
/// # # #
/// ```
pub const GLIDER: &[(usize, usize)] = &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];

/// Set every cell of `pattern`, shifted by `origin`, to live.
pub fn place_2d(
    grid: &mut Grid<bool>,
    origin: (usize, usize),
    pattern: &[(usize, usize)],
) -> Result<(), GridError> {
    for &(x, y) in pattern {
        grid.set_value(&[origin.0 + x, origin.1 + y], true)?;
    }
    Ok(())
}

/// Coordinates of every live cell, dimension 0 fastest.
pub fn live_cells(grid: &Grid<bool>) -> Vec<Coord> {
    let mut live = Vec::new();
    grid.for_each_interior(|coord, alive| {
        if *alive {
            live.push(coord.iter().copied().collect());
        }
    });
    live
}
