//! Integration test: the prelude is enough to drive a grid end to end.

use smallvec::smallvec;
use tessel::prelude::*;

fn spread(future: &mut u32, neighbours: &[&u32]) {
    *future = neighbours.iter().map(|n| **n).fold(*future, u32::max);
}

#[test]
fn custom_neighbourhood_through_the_facade() {
    let offsets: Vec<Offset> = vec![smallvec![-1, 0], smallvec![0, -1]];
    let config = GridConfig::new([4, 4], 0u32)
        .with_neighborhood(NeighborhoodSpec::custom(offsets, 1));
    config.validate().unwrap();

    let mut grid = Grid::new(config, spread).unwrap();
    assert_eq!(grid.neighborhood(), Neighborhood::Custom);
    grid.set_value(&[0, 0], 5).unwrap();

    // The maximum spreads towards increasing x and y one cell per
    // generation; four updates make generation 3 readable.
    grid.step_n(4);
    let mut reached = Vec::new();
    grid.for_each_interior(|c, v| {
        if *v == 5 {
            reached.push(c.to_vec());
        }
    });
    assert!(reached.contains(&vec![3, 0]));
    assert!(reached.contains(&vec![1, 2]));
    assert!(!reached.contains(&vec![3, 3]));
    assert_eq!(grid.generation(), Generation(4));
}

#[test]
fn shape_and_boundary_accessors() {
    let grid = Grid::new(GridConfig::new([2, 3, 4], 'x'), |_: &mut char, _: &[&char]| {})
        .unwrap();
    let shape: &Shape = grid.shape();
    assert_eq!(shape.extents(), &[2, 3, 4]);
    assert_eq!(grid.boundary(), BoundaryPolicy::Bounded);
    let _: &StepMetrics = grid.last_metrics();
    let _: &Topology = grid.topology();
}
