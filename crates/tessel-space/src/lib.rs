//! Lattice geometry for Tessel grids.
//!
//! This crate owns everything about *where* cells are: the interior
//! [`Shape`], the halo-padded flat [`PaddedLayout`], neighbourhood schemes
//! compiled to flat index deltas ([`Topology`]), and the
//! [`BoundaryPolicy`] that decides what halo reads observe.
//!
//! # Index layout
//!
//! Dimension 0 is the fastest-varying axis. A compiled topology offset is
//! a plain signed delta: adding it to any interior slot's padded index
//! lands inside the buffer without a bounds check, because the halo is
//! at least as wide as the topology's reach.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod boundary;
pub mod layout;
pub mod neighborhood;
pub mod shape;

#[cfg(test)]
pub(crate) mod compliance;

pub use boundary::BoundaryPolicy;
pub use layout::{PaddedLayout, SlotKind};
pub use neighborhood::{moore_offsets, Neighborhood, NeighborhoodSpec, Topology};
pub use shape::{Coords, Shape};
