//! Core types for the Tessel cellular-automaton engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the coordinate aliases, the generation counter, and the single error
//! taxonomy shared by every other Tessel crate.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;

pub use error::GridError;
pub use id::{Coord, Generation, Offset};
