//! Falling sand: grains drop towards increasing row until they land on
//! the floor or on other sand.
//!
//! Rows are dimension 0, so the [`sand`] rule sees the row above as
//! neighbours 0..3 and the row below as neighbours 5..8. The halo is
//! solid floor.
//!
//! Run with:
//!   cargo run --example sandpile

use std::error::Error;

use rand::Rng;
use tessel_engine::{Grid, GridConfig};
use tessel_test_utils::{random_fill, sand, SandCell};

const ROWS: usize = 16;
const COLS: usize = 24;
const SEED: u64 = 11;
const FRAMES: u64 = 20;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut grid = Grid::new(GridConfig::new([ROWS, COLS], SandCell::default()), sand)?;
    // Sand only in the top third.
    random_fill(&mut grid, SEED, |rng| SandCell::open(rng.random_ratio(1, 4)))?;
    for row in ROWS / 3..ROWS {
        for col in 0..COLS {
            grid.set_value(&[row, col], SandCell::open(false))?;
        }
    }

    for frame in 0..FRAMES {
        println!("frame {frame}");
        for row in 0..ROWS {
            let line: String = (0..COLS)
                .map(|col| grid.get_value(&[row, col]).map(|c| if c.sand { 'o' } else { ' ' }))
                .collect::<Result<_, _>>()?;
            println!("|{line}|");
        }
        println!("+{}+", "-".repeat(COLS));
        grid.update();
    }
    Ok(())
}
