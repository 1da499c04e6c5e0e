//! Water levelling around random walls.
//!
//! Each open cell rises towards its deepest open neighbour and drains
//! otherwise, so pools spread out and flatten over time. Levels print as
//! digits `0..=7`, walls as `#`.
//!
//! Run with:
//!   RUST_LOG=debug cargo run --example fluid

use std::error::Error;

use rand::Rng;
use tessel_engine::{Grid, GridConfig};
use tessel_test_utils::{random_fill, water, WaterCell, WATER_MAX};

const ROWS: usize = 12;
const COLS: usize = 32;
const SEED: u64 = 5;
const FRAMES: u64 = 12;

fn glyph(cell: &WaterCell) -> char {
    if !cell.passable {
        '#'
    } else {
        char::from_digit(u32::from(cell.water), 10).unwrap_or('?')
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut grid = Grid::new(GridConfig::new([ROWS, COLS], WaterCell::wall()), water)?;
    random_fill(&mut grid, SEED, |rng| {
        if rng.random_ratio(1, 8) {
            WaterCell::wall()
        } else if rng.random_ratio(1, 6) {
            WaterCell::open(rng.random_range(1..=WATER_MAX))
        } else {
            WaterCell::open(0)
        }
    })?;

    for frame in 0..FRAMES {
        let mut total = 0u32;
        grid.for_each_interior(|_, c| total += u32::from(c.water));
        println!("frame {frame} (total water {total})");
        for row in 0..ROWS {
            let line: String = (0..COLS)
                .map(|col| grid.get_value(&[row, col]).map(glyph))
                .collect::<Result<_, _>>()?;
            println!("  {line}");
        }
        grid.update();
    }
    Ok(())
}
