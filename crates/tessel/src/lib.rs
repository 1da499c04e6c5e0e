//! Tessel: N-dimensional cellular lattices with synchronous local update
//! rules.
//!
//! This is the facade crate that re-exports the public API of every Tessel
//! sub-crate. For most users, adding `tessel` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use tessel::prelude::*;
//!
//! // Conway's life: B3/S23.
//! fn life(future: &mut bool, neighbours: &[&bool]) {
//!     let live = neighbours.iter().filter(|n| ***n).count();
//!     *future = matches!((*future, live), (true, 2) | (_, 3));
//! }
//!
//! let mut grid = Grid::new(GridConfig::new([5, 5], false), life).unwrap();
//! for x in 1..4 {
//!     grid.set_value(&[x, 2], true).unwrap();
//! }
//!
//! // `update()` commits the previous generation, then computes the next
//! // one; the second call makes generation 1 readable.
//! grid.update();
//! grid.update();
//! assert!(*grid.get_value(&[2, 1]).unwrap());
//! assert!(!*grid.get_value(&[1, 2]).unwrap());
//! assert_eq!(grid.generation(), Generation(2));
//!
//! // Unsupported features fail cleanly and leave the grid as it was.
//! assert!(matches!(
//!     grid.set_neighborhood(Neighborhood::VonNeumann),
//!     Err(GridError::Unsupported { .. })
//! ));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `tessel-core` | `GridError`, `Generation`, `Coord`, `Offset` |
//! | [`space`] | `tessel-space` | Shapes, padded layouts, neighbourhoods, boundary policy |
//! | [`arena`] | `tessel-arena` | Double-buffered cells and padded storage |
//! | [`engine`] | `tessel-engine` | `Grid`, `GridConfig`, generation stepping |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Errors, counters, and coordinate types (`tessel-core`).
pub use tessel_core as types;

/// Lattice geometry (`tessel-space`).
///
/// [`space::Shape`] and [`space::PaddedLayout`] for index arithmetic,
/// [`space::Topology`] for compiled neighbourhoods, and
/// [`space::BoundaryPolicy`] for what halo reads observe.
pub use tessel_space as space;

/// Cell storage (`tessel-arena`).
///
/// Most users never touch this directly; [`engine::Grid::storage`] exposes
/// it read-only.
pub use tessel_arena as arena;

/// Generation stepping and the grid API (`tessel-engine`).
pub use tessel_engine as engine;

/// Common imports for typical Tessel usage.
///
/// ```rust
/// use tessel::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use tessel_core::{Coord, Generation, GridError, Offset};

    // Space
    pub use tessel_space::{BoundaryPolicy, Neighborhood, NeighborhoodSpec, Shape, Topology};

    // Engine
    pub use tessel_engine::{Grid, GridConfig, StepMetrics, UpdateRule};
}
