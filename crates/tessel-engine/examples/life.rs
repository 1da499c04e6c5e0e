//! Conway's life on a bounded 2-D lattice, printed as ASCII frames.
//!
//! Demonstrates:
//!   1. Building a GridConfig and a Grid with an inline rule
//!   2. Seeding the grid deterministically
//!   3. Stepping and reading values between generations
//!
//! Run with:
//!   RUST_LOG=tessel_engine=debug cargo run --example life

use std::error::Error;

use tessel_engine::{Grid, GridConfig};
use tessel_test_utils::random_bools;

// ─── Lattice parameters ─────────────────────────────────────────

const WIDTH: usize = 40;
const HEIGHT: usize = 20;
const DENSITY: f64 = 0.3;
const SEED: u64 = 2024;
const FRAMES: u64 = 8;

// ─── Rule ───────────────────────────────────────────────────────
//
// B3/S23. The future slot starts out holding the cell's current value.

fn life(future: &mut bool, neighbours: &[&bool]) {
    let live = neighbours.iter().filter(|n| ***n).count();
    *future = matches!((*future, live), (true, 2) | (_, 3));
}

fn render(grid: &Grid<bool>) -> Result<String, Box<dyn Error>> {
    let mut out = String::with_capacity((WIDTH + 1) * HEIGHT);
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            out.push(if *grid.get_value(&[x, y])? { '#' } else { '.' });
        }
        out.push('\n');
    }
    Ok(out)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let config = GridConfig::new([WIDTH, HEIGHT], false);
    let mut grid = Grid::new(config, life)?;
    random_bools(&mut grid, SEED, DENSITY)?;

    for frame in 0..FRAMES {
        let mut alive = 0usize;
        grid.for_each_interior(|_, v| alive += usize::from(*v));
        println!("frame {frame}: {alive} live cells");
        print!("{}", render(&grid)?);
        println!();
        grid.update();
    }

    let m = grid.last_metrics();
    println!(
        "generation {}: {} cells in {}us",
        grid.generation(),
        m.cells_updated,
        m.total_us
    );
    Ok(())
}
