//! Generation stepping and the [`Grid`] API for Tessel lattices.
//!
//! A [`Grid`] is built from a [`GridConfig`] and an update rule. Each
//! [`update()`](Grid::update) runs one synchronous generation through the
//! [`UpdateEngine`]:
//!
//! 1. **Commit**: every cell's future value becomes its current value.
//! 2. **Compute**: for every interior cell, the rule receives that cell's
//!    future slot and its neighbours' current values in topology order.
//!
//! Because neighbours are only ever read from `current` and the rule only
//! ever writes the centre cell's `future`, the result of a generation does
//! not depend on the order cells are visited in.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod engine;
pub mod grid;
pub mod metrics;

pub use config::GridConfig;
pub use engine::{EnginePhase, UpdateEngine, UpdateRule};
pub use grid::Grid;
pub use metrics::StepMetrics;
