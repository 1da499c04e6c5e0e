//! Flat index arithmetic for a halo-padded lattice.
//!
//! A [`PaddedLayout`] surrounds a [`Shape`] with `halo` extra slots on
//! both sides of every dimension and linearises the padded box with
//! dimension 0 fastest. Interior coordinates, signed neighbour offsets,
//! and flat padded indices all convert through the same stride table, so
//! an offset computed once is valid from every interior slot.
//!
//! ```text
//! extents [3, 2], halo 1 → padded extents [5, 4], strides [1, 5]
//!
//!   h  h  h  h  h
//!   h  .  .  .  h      interior (0, 0) → (0+1)·1 + (0+1)·5 = 6
//!   h  .  .  .  h      offset (-1, -1) → -1·1 + -1·5      = -6
//!   h  h  h  h  h
//! ```

use crate::shape::Shape;
use smallvec::SmallVec;
use tessel_core::{Coord, GridError};

/// Whether a padded slot lies inside the lattice or in its halo.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SlotKind {
    /// An addressable lattice cell.
    Interior,
    /// A padding slot outside the declared extents.
    Halo,
}

/// Index arithmetic over a [`Shape`] padded by `halo` slots per side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaddedLayout {
    shape: Shape,
    halo: usize,
    padded_extents: SmallVec<[usize; 4]>,
    strides: SmallVec<[usize; 4]>,
    len: usize,
}

impl PaddedLayout {
    /// Build the layout for `shape` with a halo of `halo` slots per side.
    ///
    /// Returns `Err(GridError::Configuration)` if the padded slot count
    /// does not fit in `isize` (signed offsets must be able to span it).
    pub fn new(shape: Shape, halo: usize) -> Result<Self, GridError> {
        let overflow = || GridError::config("padded slot count overflows isize");
        let pad = halo.checked_mul(2).ok_or_else(overflow)?;

        let mut padded_extents = SmallVec::with_capacity(shape.ndim());
        let mut strides = SmallVec::with_capacity(shape.ndim());
        let mut len = 1usize;
        for &extent in shape.extents() {
            let padded = extent.checked_add(pad).ok_or_else(overflow)?;
            strides.push(len);
            padded_extents.push(padded);
            len = len.checked_mul(padded).ok_or_else(overflow)?;
        }
        if isize::try_from(len).is_err() {
            return Err(overflow());
        }

        Ok(Self {
            shape,
            halo,
            padded_extents,
            strides,
            len,
        })
    }

    /// The interior shape.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Halo width on each side of every dimension.
    pub fn halo(&self) -> usize {
        self.halo
    }

    /// Number of dimensions.
    pub fn ndim(&self) -> usize {
        self.shape.ndim()
    }

    /// Total number of padded slots (interior plus halo).
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always returns `false`; every layout has at least one interior slot.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of halo slots.
    pub fn halo_len(&self) -> usize {
        self.len - self.shape.size()
    }

    /// Padded extent (`extent + 2·halo`) of every dimension.
    pub fn padded_extents(&self) -> &[usize] {
        &self.padded_extents
    }

    /// Stride of dimension `axis`: product of the padded extents below it.
    ///
    /// # Panics
    ///
    /// Panics if `axis >= self.ndim()`.
    pub fn stride(&self, axis: usize) -> usize {
        self.strides[axis]
    }

    /// Map an interior coordinate to its padded index.
    ///
    /// Fails with `Configuration` on a dimensionality mismatch and with
    /// `OutOfRange` when a component exceeds its extent.
    pub fn to_padded_index(&self, coord: &[usize]) -> Result<usize, GridError> {
        self.shape.check(coord)?;
        Ok(coord
            .iter()
            .zip(&self.strides)
            .map(|(&c, &stride)| (c + self.halo) * stride)
            .sum())
    }

    /// Convert a relative per-dimension offset into a flat index delta.
    pub fn offset_index(&self, offset: &[i32]) -> Result<isize, GridError> {
        if offset.len() != self.ndim() {
            return Err(GridError::config(format!(
                "offset has {} components, grid has {} dimensions",
                offset.len(),
                self.ndim()
            )));
        }
        // `new` guarantees every stride fits in isize.
        Ok(offset
            .iter()
            .zip(&self.strides)
            .map(|(&o, &stride)| o as isize * stride as isize)
            .sum())
    }

    /// Decompose a padded index into its padded-space coordinate
    /// (each component in `[0, extent + 2·halo)`).
    ///
    /// # Panics
    ///
    /// Panics in debug builds if `index >= self.len()`.
    pub fn padded_coord(&self, index: usize) -> Coord {
        debug_assert!(index < self.len, "padded index {index} >= {}", self.len);
        let mut rest = index;
        self.padded_extents
            .iter()
            .map(|&extent| {
                let c = rest % extent;
                rest /= extent;
                c
            })
            .collect()
    }

    /// Interior coordinate of a padded index, or `None` for a halo slot.
    pub fn interior_coord(&self, index: usize) -> Option<Coord> {
        let mut coord = self.padded_coord(index);
        for (axis, c) in coord.iter_mut().enumerate() {
            if self.out_of_bounds(axis, *c) {
                return None;
            }
            *c -= self.halo;
        }
        Some(coord)
    }

    /// Whether a padded-space component lies in the halo of `axis`.
    fn out_of_bounds(&self, axis: usize, padded: usize) -> bool {
        padded < self.halo || padded >= self.shape.extent(axis) + self.halo
    }

    /// Whether the padded slot `index` is a halo slot.
    pub fn is_halo(&self, index: usize) -> bool {
        self.padded_coord(index)
            .iter()
            .enumerate()
            .any(|(axis, &c)| self.out_of_bounds(axis, c))
    }

    /// Classify every padded slot, in padded index order.
    ///
    /// Walks the padded box with an odometer instead of decomposing each
    /// index, so the pass is O(len) amortised.
    pub fn classify(&self) -> Vec<SlotKind> {
        let ndim = self.ndim();
        let mut kinds = Vec::with_capacity(self.len);
        let mut coord: SmallVec<[usize; 4]> = SmallVec::from_elem(0, ndim);
        for _ in 0..self.len {
            let halo = coord
                .iter()
                .enumerate()
                .any(|(axis, &c)| self.out_of_bounds(axis, c));
            kinds.push(if halo { SlotKind::Halo } else { SlotKind::Interior });

            for (axis, c) in coord.iter_mut().enumerate() {
                *c += 1;
                if *c < self.padded_extents[axis] {
                    break;
                }
                *c = 0;
            }
        }
        kinds
    }

    /// Padded indices of every interior slot, in padded order.
    pub fn interior_indices(&self) -> Vec<usize> {
        self.classify()
            .iter()
            .enumerate()
            .filter(|(_, kind)| **kind == SlotKind::Interior)
            .map(|(i, _)| i)
            .collect()
    }
}
