//! Benchmark profiles for the Tessel lattice engine.
//!
//! - [`reference_life_2d`]: 256x256 bounded life (65K cells, 8 neighbours)
//! - [`reference_life_3d`]: 32x32x32 bounded life (32K cells, 26 neighbours)
//! - [`wide_parity_2d`]: 128x128 neighbour parity over a 5x5 custom block (24 neighbours)

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::Rng;
use tessel_core::{GridError, Offset};
use tessel_engine::{Grid, GridConfig};
use tessel_space::NeighborhoodSpec;
use tessel_test_utils::{conway_life, random_bools, random_fill};

/// Initial live-cell density of the life profiles.
pub const LIFE_DENSITY: f64 = 0.3;

/// 256x256 bounded Conway's life, seeded at [`LIFE_DENSITY`].
pub fn reference_life_2d(seed: u64) -> Result<Grid<bool>, GridError> {
    let mut grid = Grid::new(GridConfig::new([256, 256], false), conway_life)?;
    random_bools(&mut grid, seed, LIFE_DENSITY)?;
    Ok(grid)
}

/// 32x32x32 bounded Conway's life, seeded at [`LIFE_DENSITY`].
///
/// B3/S23 dies out quickly in 3-D; the profile measures stepping cost,
/// not interesting dynamics.
pub fn reference_life_3d(seed: u64) -> Result<Grid<bool>, GridError> {
    let mut grid = Grid::new(GridConfig::new([32, 32, 32], false), conway_life)?;
    random_bools(&mut grid, seed, LIFE_DENSITY)?;
    Ok(grid)
}

/// Each cell becomes the parity of its neighbours' sum.
pub fn neighbour_parity(future: &mut u32, neighbours: &[&u32]) {
    *future = neighbours.iter().map(|n| **n).sum::<u32>() & 1;
}

/// Every offset within Chebyshev distance `reach` in 2-D, centre excluded.
pub fn block_offsets_2d(reach: i32) -> Vec<Offset> {
    let mut offsets = Vec::new();
    for d0 in -reach..=reach {
        for d1 in -reach..=reach {
            if (d0, d1) != (0, 0) {
                offsets.push(Offset::from_slice(&[d0, d1]));
            }
        }
    }
    offsets
}

/// 128x128 [`neighbour_parity`] over the 24 cells of a 5x5 block, read
/// through a two-deep halo.
pub fn wide_parity_2d(seed: u64) -> Result<Grid<u32>, GridError> {
    let config = GridConfig::new([128, 128], 0u32)
        .with_neighborhood(NeighborhoodSpec::custom(block_offsets_2d(2), 2));
    let mut grid = Grid::new(config, neighbour_parity)?;
    random_fill(&mut grid, seed, |rng| rng.random_range(0..2))?;
    Ok(grid)
}
