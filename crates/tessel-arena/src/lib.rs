//! Double-buffered cell storage for Tessel grids.
//!
//! # Architecture
//!
//! ```text
//! PaddedStorage<T>
//! ├── PaddedLayout (index arithmetic, from tessel-space)
//! ├── Vec<Cell<T>> (one slot per padded index)
//! │   ├── Live { current, future }   interior slots
//! │   └── Sentinel { Arc<T> }        halo slots
//! └── Arc<T> shared default          aliased by every bounded halo slot
//! ```
//!
//! Neighbours always read `current`; the update rule only ever writes the
//! centre cell's `future`. A generation commits futures before computing,
//! so results never depend on visiting order.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod storage;

pub use cell::Cell;
pub use storage::{CellWindow, PaddedStorage};
