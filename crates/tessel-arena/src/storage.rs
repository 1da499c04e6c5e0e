//! Dense padded cell buffer.
//!
//! [`PaddedStorage`] owns one [`Cell`] per padded slot of a
//! [`PaddedLayout`]. Interior slots are live double-buffered cells; halo
//! slots are sentinels bound according to the grid's [`BoundaryPolicy`].
//!
//! The per-generation lifecycle is:
//! 1. [`commit()`](PaddedStorage::commit): every slot copies future → current
//! 2. [`for_each_window()`](PaddedStorage::for_each_window): each interior
//!    slot's future is written while every slot's current is readable

use std::cmp::Ordering;
use std::sync::Arc;

use tessel_core::GridError;
use tessel_space::{BoundaryPolicy, PaddedLayout, SlotKind};

use crate::cell::Cell;

/// Dense, flat cell buffer over a halo-padded lattice.
#[derive(Clone, Debug)]
pub struct PaddedStorage<T> {
    layout: PaddedLayout,
    cells: Vec<Cell<T>>,
    interior: Vec<usize>,
    shared_default: Arc<T>,
}

impl<T: Clone> PaddedStorage<T> {
    /// Allocate storage for `layout` with every interior cell set to
    /// `default`.
    ///
    /// The boundary policy is checked first, so an unsupported policy
    /// fails before anything is allocated. Construction then makes two
    /// passes: classify every padded slot, then materialise cells with
    /// halo slots bound per the policy.
    pub fn new(
        layout: PaddedLayout,
        boundary: BoundaryPolicy,
        default: T,
    ) -> Result<Self, GridError> {
        boundary.ensure_supported()?;

        let kinds = layout.classify();
        let shared_default = Arc::new(default);
        let mut cells = Vec::with_capacity(layout.len());
        let mut interior = Vec::with_capacity(layout.shape().size());
        for (index, kind) in kinds.into_iter().enumerate() {
            match kind {
                SlotKind::Interior => {
                    interior.push(index);
                    cells.push(Cell::new(T::clone(&shared_default)));
                }
                // Bounded is the only policy that gets this far: every
                // halo slot aliases the one shared default.
                SlotKind::Halo => cells.push(Cell::sentinel(Arc::clone(&shared_default))),
            }
        }

        Ok(Self {
            layout,
            cells,
            interior,
            shared_default,
        })
    }

    /// Read the current value at an interior coordinate.
    pub fn get(&self, coord: &[usize]) -> Result<&T, GridError> {
        let index = self.layout.to_padded_index(coord)?;
        Ok(self.cells[index].get())
    }

    /// Write current and future at an interior coordinate.
    pub fn set(&mut self, coord: &[usize], value: T) -> Result<(), GridError> {
        let index = self.layout.to_padded_index(coord)?;
        let cell = &mut self.cells[index];
        if cell.is_sentinel() {
            return Err(GridError::OutOfRange {
                coord: coord.iter().copied().collect(),
                bounds: "halo cells cannot be written".into(),
            });
        }
        cell.set(value)
    }

    /// Write `value` into every interior cell.
    pub fn fill(&mut self, value: &T) {
        for &index in &self.interior {
            let buffers = self.cells[index].buffers_mut();
            debug_assert!(buffers.is_some(), "interior slot {index} is a sentinel");
            if let Some((current, future)) = buffers {
                current.clone_from(value);
                future.clone_from(value);
            }
        }
    }

    /// Commit phase: every slot copies its future into its current value.
    /// Sentinels are untouched.
    pub fn commit(&mut self) {
        for cell in &mut self.cells {
            cell.increment_time();
        }
    }
}

impl<T> PaddedStorage<T> {
    /// The layout this storage was built for.
    pub fn layout(&self) -> &PaddedLayout {
        &self.layout
    }

    /// Number of padded slots.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always returns `false`; every layout has at least one interior slot.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Padded indices of all interior slots, in padded order.
    pub fn interior_indices(&self) -> &[usize] {
        &self.interior
    }

    /// The cell at a padded index (interior or halo).
    ///
    /// # Panics
    ///
    /// Panics if `index >= self.len()`.
    pub fn cell(&self, index: usize) -> &Cell<T> {
        &self.cells[index]
    }

    /// The value every bounded halo slot aliases.
    pub fn shared_default(&self) -> &Arc<T> {
        &self.shared_default
    }

    /// Visit every interior slot with a [`CellWindow`]: write access to
    /// that slot's future value, read access to every slot's current
    /// value.
    ///
    /// The window's borrows are disjoint, so a rule running inside `f`
    /// cannot observe a future value written for another cell.
    pub fn for_each_window<F>(&mut self, mut f: F)
    where
        F: FnMut(CellWindow<'_, T>),
    {
        let Self {
            cells, interior, ..
        } = self;
        for &index in interior.iter() {
            let (before, rest) = cells.split_at_mut(index);
            let Some((cell, after)) = rest.split_first_mut() else {
                continue;
            };
            let Some((current, future)) = cell.live_parts() else {
                continue;
            };
            f(CellWindow {
                index,
                before,
                current,
                future,
                after,
            });
        }
    }
}

/// A view of the whole buffer centred on one interior slot.
///
/// Created by [`PaddedStorage::for_each_window`].
#[derive(Debug)]
pub struct CellWindow<'a, T> {
    index: usize,
    before: &'a [Cell<T>],
    current: &'a T,
    future: &'a mut T,
    after: &'a [Cell<T>],
}

impl<'a, T> CellWindow<'a, T> {
    /// Padded index of the centre slot.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Current value of the centre slot.
    pub fn current(&self) -> &'a T {
        self.current
    }

    /// Current value of the slot `offset` away from the centre.
    ///
    /// # Panics
    ///
    /// Panics if the offset leaves the padded buffer; compiled topologies
    /// never do.
    pub fn neighbour(&self, offset: isize) -> &'a T {
        let before = self.before;
        let after = self.after;
        let target = self.index.wrapping_add_signed(offset);
        match target.cmp(&self.index) {
            Ordering::Less => before[target].get(),
            Ordering::Equal => self.current,
            Ordering::Greater => after[target - self.index - 1].get(),
        }
    }

    /// The centre slot's future value.
    pub fn future_mut(&mut self) -> &mut T {
        self.future
    }
}
