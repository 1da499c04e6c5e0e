//! Integration test: Conway's life on bounded lattices.
//!
//! `update()` commits the previous generation's results and then computes
//! the next one, so after `k` updates `get_value` shows generation `k − 1`.
//! The helper [`show`] hides that offset: `show(grid, g)` advances until
//! generation `g` is readable.

use tessel_core::Generation;
use tessel_engine::{Grid, GridConfig};
use tessel_test_utils::{conway_life, live_cells, place_2d, BLINKER, BLOCK, GLIDER};

fn life(extents: &[usize]) -> Grid<bool> {
    Grid::new(GridConfig::new(extents, false), conway_life).unwrap()
}

/// Run updates until generation `g` is what `get_value` returns.
fn show(grid: &mut Grid<bool>, g: u64) {
    let target = g + 1;
    let done = grid.generation().0;
    assert!(done <= target, "generation {g} already passed");
    grid.step_n(target - done);
}

fn live(grid: &Grid<bool>) -> Vec<Vec<usize>> {
    live_cells(grid).into_iter().map(|c| c.to_vec()).collect()
}

#[test]
fn block_is_a_still_life() {
    let mut g = life(&[4, 4]);
    place_2d(&mut g, (1, 1), BLOCK).unwrap();
    let before = live(&g);
    for generation in 1..=5 {
        show(&mut g, generation);
        assert_eq!(live(&g), before, "block changed at generation {generation}");
    }
}

#[test]
fn block_in_corner_survives_bounded_edges() {
    let mut g = life(&[4, 4]);
    place_2d(&mut g, (0, 0), BLOCK).unwrap();
    show(&mut g, 3);
    assert_eq!(live(&g), vec![vec![0, 0], vec![1, 0], vec![0, 1], vec![1, 1]]);
}

#[test]
fn blinker_has_period_two() {
    let mut g = life(&[5, 5]);
    place_2d(&mut g, (1, 2), BLINKER).unwrap();
    let horizontal = vec![vec![1, 2], vec![2, 2], vec![3, 2]];
    let vertical = vec![vec![2, 1], vec![2, 2], vec![2, 3]];
    assert_eq!(live(&g), horizontal);

    show(&mut g, 1);
    assert_eq!(live(&g), vertical);
    show(&mut g, 2);
    assert_eq!(live(&g), horizontal);
    show(&mut g, 3);
    assert_eq!(live(&g), vertical);
}

#[test]
fn glider_translates_diagonally_every_four_generations() {
    let mut g = life(&[10, 10]);
    place_2d(&mut g, (1, 1), GLIDER).unwrap();
    let start = live(&g);

    show(&mut g, 4);
    let moved: Vec<Vec<usize>> = start.iter().map(|c| vec![c[0] + 1, c[1] + 1]).collect();
    let mut got = live(&g);
    let mut want = moved;
    got.sort();
    want.sort();
    assert_eq!(got, want);

    show(&mut g, 8);
    assert_eq!(live(&g).len(), 5);
}

#[test]
fn glider_dies_into_a_block_at_the_wall() {
    // A glider running into a bounded corner settles into a still life
    // instead of wrapping around.
    let mut g = life(&[6, 6]);
    place_2d(&mut g, (0, 0), GLIDER).unwrap();
    show(&mut g, 40);
    let block = vec![vec![4, 4], vec![5, 4], vec![4, 5], vec![5, 5]];
    assert_eq!(live(&g), block);
    show(&mut g, 41);
    assert_eq!(live(&g), block);
}

#[test]
fn lonely_cell_dies() {
    let mut g = life(&[3, 3]);
    g.set_value(&[1, 1], true).unwrap();
    show(&mut g, 1);
    assert!(live(&g).is_empty());
    assert_eq!(g.generation(), Generation(2));
}

#[test]
fn three_dimensional_life_uses_26_neighbours() {
    let mut g = life(&[4, 4, 4]);
    assert_eq!(g.topology().len(), 26);

    // Born with exactly 3 live neighbours in 3-D too.
    g.set_value(&[0, 0, 0], true).unwrap();
    g.set_value(&[2, 0, 0], true).unwrap();
    g.set_value(&[1, 2, 0], true).unwrap();
    show(&mut g, 1);
    assert!(*g.get_value(&[1, 1, 0]).unwrap());
    assert!(*g.get_value(&[1, 1, 1]).unwrap());
    assert!(!*g.get_value(&[0, 0, 0]).unwrap());
    assert_eq!(g.last_metrics().cells_updated, 64);
}

#[test]
fn one_dimensional_lattice_steps() {
    // 1-D Moore has two neighbours, so nothing is ever born under B3.
    let mut g = life(&[8]);
    for x in [2, 3, 4] {
        g.set_value(&[x], true).unwrap();
    }
    show(&mut g, 1);
    assert_eq!(live(&g), vec![vec![3]]);
    show(&mut g, 2);
    assert!(live(&g).is_empty());
}
