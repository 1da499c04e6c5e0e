//! Update-rule fixtures and pattern helpers for Tessel development.
//!
//! [`fixtures`] holds the standard rules integration tests and benches
//! run against; [`patterns`] places and reads back 2-D life patterns;
//! [`random_fill`] seeds a grid deterministically.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;
pub mod patterns;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tessel_core::GridError;
use tessel_engine::Grid;

pub use fixtures::{
    conway_life, identity, life_3d, neighbour_sum, sand, water, SandCell, WaterCell,
    WATER_MAX,
};
pub use patterns::{live_cells, place_2d, BLINKER, BLOCK, GLIDER};

/// Overwrite every interior cell with a value drawn from `sample`.
///
/// Cells are visited dimension 0 fastest with one ChaCha8 stream seeded
/// from `seed`, so the same seed always produces the same grid.
pub fn random_fill<T, F>(grid: &mut Grid<T>, seed: u64, mut sample: F) -> Result<(), GridError>
where
    T: Clone,
    F: FnMut(&mut ChaCha8Rng) -> T,
{
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let coords: Vec<_> = grid.shape().coords().collect();
    for coord in coords {
        let value = sample(&mut rng);
        grid.set_value(&coord, value)?;
    }
    Ok(())
}

/// Fill a boolean grid so that each cell is live with probability
/// `density`.
pub fn random_bools(grid: &mut Grid<bool>, seed: u64, density: f64) -> Result<(), GridError> {
    random_fill(grid, seed, |rng| rng.random::<f64>() < density)
}
