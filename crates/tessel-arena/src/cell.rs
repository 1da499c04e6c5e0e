//! Double-buffered value slot.

use std::sync::Arc;

use tessel_core::GridError;

/// One padded storage slot.
///
/// A live cell holds the value neighbours read during a generation
/// (`current`) separately from the value the update rule is computing for
/// the next generation (`future`). A sentinel cell sits in the halo: it
/// forwards reads to a shared default value and has no future slot.
#[derive(Clone, Debug)]
pub struct Cell<T> {
    state: CellState<T>,
}

#[derive(Clone, Debug)]
enum CellState<T> {
    Live { current: T, future: T },
    Sentinel { shared: Arc<T> },
}

impl<T: Clone> Cell<T> {
    /// A live cell whose current and future values are both `value`.
    pub fn new(value: T) -> Self {
        Self {
            state: CellState::Live {
                current: value.clone(),
                future: value,
            },
        }
    }

    /// Overwrite both buffers, so the value is visible immediately and
    /// stays put across the next generation unless the rule changes it.
    ///
    /// Fails with [`GridError::InvalidOperation`] on a sentinel.
    pub fn set(&mut self, value: T) -> Result<(), GridError> {
        match &mut self.state {
            CellState::Live { current, future } => {
                current.clone_from(&value);
                *future = value;
                Ok(())
            }
            CellState::Sentinel { .. } => Err(GridError::InvalidOperation {
                reason: "sentinel cells cannot be written",
            }),
        }
    }

    /// Commit the future value as the new current value.
    ///
    /// No-op on a sentinel.
    pub fn increment_time(&mut self) {
        if let CellState::Live { current, future } = &mut self.state {
            current.clone_from(future);
        }
    }
}

impl<T> Cell<T> {
    /// A halo sentinel reading through to `shared`.
    pub fn sentinel(shared: Arc<T>) -> Self {
        Self {
            state: CellState::Sentinel { shared },
        }
    }

    /// Whether this is a halo sentinel.
    pub fn is_sentinel(&self) -> bool {
        matches!(self.state, CellState::Sentinel { .. })
    }

    /// The value visible to neighbours this generation.
    pub fn get(&self) -> &T {
        match &self.state {
            CellState::Live { current, .. } => current,
            CellState::Sentinel { shared } => &**shared,
        }
    }

    /// The value being computed for the next generation.
    ///
    /// Fails with [`GridError::InvalidOperation`] on a sentinel.
    pub fn future(&self) -> Result<&T, GridError> {
        match &self.state {
            CellState::Live { future, .. } => Ok(future),
            CellState::Sentinel { .. } => Err(no_future()),
        }
    }

    /// Mutable access to the value being computed for the next generation.
    ///
    /// Fails with [`GridError::InvalidOperation`] on a sentinel.
    pub fn future_mut(&mut self) -> Result<&mut T, GridError> {
        match &mut self.state {
            CellState::Live { future, .. } => Ok(future),
            CellState::Sentinel { .. } => Err(no_future()),
        }
    }

    /// Both buffers of a live cell, writable.
    pub(crate) fn buffers_mut(&mut self) -> Option<(&mut T, &mut T)> {
        match &mut self.state {
            CellState::Live { current, future } => Some((current, future)),
            CellState::Sentinel { .. } => None,
        }
    }

    /// Split a live cell into its current value and its future slot.
    pub(crate) fn live_parts(&mut self) -> Option<(&T, &mut T)> {
        match &mut self.state {
            CellState::Live { current, future } => Some((current, future)),
            CellState::Sentinel { .. } => None,
        }
    }
}

fn no_future() -> GridError {
    GridError::InvalidOperation {
        reason: "sentinel cells have no future slot",
    }
}
