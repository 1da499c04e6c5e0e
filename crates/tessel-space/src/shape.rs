//! Per-dimension lattice extents.

use smallvec::SmallVec;
use tessel_core::{Coord, GridError};

/// Ordered per-dimension extents of an N-dimensional lattice.
///
/// Immutable after construction. Dimension 0 is the fastest-varying axis
/// in every flat ordering Tessel produces, so for a 2-D grid a coordinate
/// reads `[x, y]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Shape {
    extents: SmallVec<[usize; 4]>,
    size: usize,
}

impl Shape {
    /// Build a shape from its extents.
    ///
    /// Returns `Err(GridError::Configuration)` if `extents` is empty, any
    /// extent is zero, or the cell count overflows `usize`.
    pub fn new(extents: &[usize]) -> Result<Self, GridError> {
        if extents.is_empty() {
            return Err(GridError::config("shape must have at least one dimension"));
        }
        if let Some(axis) = extents.iter().position(|&e| e == 0) {
            return Err(GridError::config(format!(
                "extent of dimension {axis} must be positive"
            )));
        }
        let size = extents
            .iter()
            .try_fold(1usize, |acc, &e| acc.checked_mul(e))
            .ok_or_else(|| GridError::config("cell count overflows usize"))?;
        Ok(Self {
            extents: SmallVec::from_slice(extents),
            size,
        })
    }

    /// Number of dimensions.
    pub fn ndim(&self) -> usize {
        self.extents.len()
    }

    /// All extents, dimension 0 first.
    pub fn extents(&self) -> &[usize] {
        &self.extents
    }

    /// Extent of one dimension.
    ///
    /// # Panics
    ///
    /// Panics if `axis >= self.ndim()`.
    pub fn extent(&self, axis: usize) -> usize {
        self.extents[axis]
    }

    /// Number of interior cells (product of all extents).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Always returns `false`; construction rejects empty shapes.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Whether `coord` names an interior cell of this shape.
    pub fn contains(&self, coord: &[usize]) -> bool {
        coord.len() == self.ndim() && coord.iter().zip(&self.extents).all(|(&c, &e)| c < e)
    }

    /// Validate `coord` against this shape.
    ///
    /// A dimensionality mismatch is a configuration error; a component
    /// beyond its extent is a range error.
    pub fn check(&self, coord: &[usize]) -> Result<(), GridError> {
        if coord.len() != self.ndim() {
            return Err(GridError::config(format!(
                "coordinate has {} components, grid has {} dimensions",
                coord.len(),
                self.ndim()
            )));
        }
        if !self.contains(coord) {
            return Err(GridError::OutOfRange {
                coord: SmallVec::from_slice(coord),
                bounds: format!("extents {:?}", self.extents()),
            });
        }
        Ok(())
    }

    /// Iterate every interior coordinate, dimension 0 fastest.
    pub fn coords(&self) -> Coords<'_> {
        Coords {
            shape: self,
            next: Some(SmallVec::from_elem(0, self.ndim())),
        }
    }
}

/// Iterator over the interior coordinates of a [`Shape`].
///
/// Created by [`Shape::coords`].
#[derive(Debug)]
pub struct Coords<'a> {
    shape: &'a Shape,
    next: Option<Coord>,
}

impl Iterator for Coords<'_> {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        let current = self.next.take()?;
        let mut advanced = current.clone();
        for (axis, c) in advanced.iter_mut().enumerate() {
            *c += 1;
            if *c < self.shape.extent(axis) {
                self.next = Some(advanced);
                return Some(current);
            }
            *c = 0;
        }
        // Every axis rolled over: `current` was the last coordinate.
        Some(current)
    }
}
