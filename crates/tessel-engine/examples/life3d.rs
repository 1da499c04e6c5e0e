//! Life in three dimensions, printed one z-slice at a time.
//!
//! A 3-D Moore neighbourhood has 26 neighbours, so this uses the
//! B6/S57 variant to keep the population from exploding.
//!
//! Run with:
//!   cargo run --example life3d

use std::error::Error;

use tessel_engine::{Grid, GridConfig};
use tessel_test_utils::{life_3d, random_bools};

const SIDE: usize = 12;
const DENSITY: f64 = 0.2;
const SEED: u64 = 7;
const FRAMES: u64 = 4;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut grid = Grid::new(GridConfig::new([SIDE, SIDE, SIDE], false), life_3d)?;
    println!(
        "{}-d lattice, {} cells, {} neighbours each",
        grid.ndim(),
        grid.size(),
        grid.topology().len()
    );
    random_bools(&mut grid, SEED, DENSITY)?;

    for frame in 0..FRAMES {
        println!("frame {frame}");
        for z in [SIDE / 4, SIDE / 2] {
            println!("  z = {z}");
            for y in 0..SIDE {
                let row: String = (0..SIDE)
                    .map(|x| grid.get_value(&[x, y, z]).map(|v| if *v { '#' } else { '.' }))
                    .collect::<Result<_, _>>()?;
                println!("  {row}");
            }
        }
        grid.update();
    }
    Ok(())
}
