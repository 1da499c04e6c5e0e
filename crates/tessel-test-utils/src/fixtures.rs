//! Reusable update-rule fixtures.
//!
//! - [`conway_life`]: B3/S23 on `bool` cells, any dimensionality.
//! - [`life_3d`]: B6/S57, a life variant tuned for 26 neighbours.
//! - [`identity`]: leaves every cell unchanged.
//! - [`neighbour_sum`]: each cell becomes the sum of its neighbours.
//! - [`sand`]: falling sand on [`SandCell`]s under a 2-D Moore topology.
//! - [`water`]: levelling water on [`WaterCell`]s under a 2-D Moore
//!   topology.

/// Conway's rule: a dead cell with exactly three live neighbours is born,
/// a live cell with two or three survives, every other cell is dead.
pub fn conway_life(future: &mut bool, neighbours: &[&bool]) {
    let live = neighbours.iter().filter(|n| ***n).count();
    *future = matches!((*future, live), (true, 2) | (_, 3));
}

/// Three-dimensional life: born with exactly six live neighbours,
/// survives with five or seven.
pub fn life_3d(future: &mut bool, neighbours: &[&bool]) {
    let live = neighbours.iter().filter(|n| ***n).count();
    *future = if *future {
        matches!(live, 5 | 7)
    } else {
        live == 6
    };
}

/// Leaves the future slot untouched, so every cell keeps its value.
pub fn identity<T>(_future: &mut T, _neighbours: &[&T]) {}

/// Each cell becomes the sum of its neighbours' current values.
pub fn neighbour_sum(future: &mut u32, neighbours: &[&u32]) {
    *future = neighbours.iter().map(|n| **n).sum();
}

/// A cell of the falling-sand automaton.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SandCell {
    pub sand: bool,
    /// Whether sand may fall into this cell. Halo cells built from
    /// `SandCell::default()` are solid floor.
    pub passable: bool,
}

impl SandCell {
    /// An open cell, with or without sand.
    pub fn open(sand: bool) -> Self {
        Self {
            sand,
            passable: true,
        }
    }
}

/// Falling sand: sand moves towards increasing dimension 0.
///
/// Expects the 2-D Moore order, where neighbours 0..3 sit at dimension-0
/// offset −1 ("above") and neighbours 5..8 at +1 ("below"). An empty cell
/// fills if anything above holds sand; a full cell empties if anything
/// below is open and empty.
pub fn sand(future: &mut SandCell, neighbours: &[&SandCell]) {
    let above = &neighbours[0..3];
    let below = &neighbours[5..8];
    if !future.sand && above.iter().any(|n| n.sand) {
        future.sand = true;
    } else if future.sand && below.iter().any(|n| !n.sand && n.passable) {
        future.sand = false;
    }
}

/// Deepest water level a [`WaterCell`] can hold.
pub const WATER_MAX: u8 = 7;

/// A cell of the water-levelling automaton.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WaterCell {
    pub water: u8,
    /// Walls are impassable and never hold water.
    pub passable: bool,
}

impl WaterCell {
    /// An open cell holding `water` units.
    pub fn open(water: u8) -> Self {
        Self {
            water,
            passable: true,
        }
    }

    /// An impassable wall.
    pub fn wall() -> Self {
        Self::default()
    }
}

/// Water levelling: an open cell rises by one if any open neighbour is
/// deeper, and drains by one otherwise.
pub fn water(future: &mut WaterCell, neighbours: &[&WaterCell]) {
    if !future.passable {
        return;
    }
    let deeper = neighbours
        .iter()
        .any(|n| n.passable && n.water > future.water);
    if deeper && future.water < WATER_MAX {
        future.water += 1;
    } else if !deeper && future.water > 0 {
        future.water -= 1;
    }
}
