//! Strongly-typed counters and the [`Coord`] / [`Offset`] type aliases.

use smallvec::SmallVec;
use std::fmt;

/// Number of completed generations of a grid.
///
/// Starts at zero when the grid is built and is incremented once per
/// successful `update()`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Generation(pub u64);

impl Generation {
    /// The generation that follows this one.
    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for Generation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Generation {
    fn from(v: u64) -> Self {
        Self(v)
    }
}

/// An interior cell coordinate, one non-negative component per dimension.
///
/// Uses `SmallVec<[usize; 4]>` so lattices up to four dimensions never
/// touch the heap. Higher-dimensional lattices spill transparently.
pub type Coord = SmallVec<[usize; 4]>;

/// A relative neighbour offset, one signed component per dimension.
pub type Offset = SmallVec<[i32; 4]>;
