//! Grid configuration and validation.
//!
//! [`GridConfig`] is the constructor input for a [`Grid`](crate::Grid).
//! [`validate()`](GridConfig::validate) checks every structural invariant
//! up front; the grid constructor resolves the same layout and topology
//! and keeps them.

use tessel_core::GridError;
use tessel_space::{BoundaryPolicy, NeighborhoodSpec, PaddedLayout, Shape, Topology};

/// Complete configuration for constructing a grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridConfig<T> {
    /// Per-dimension extents, dimension 0 first.
    pub shape: Vec<usize>,
    /// What halo reads observe. Default: [`BoundaryPolicy::Bounded`].
    pub boundary: BoundaryPolicy,
    /// Neighbourhood scheme and maximum neighbour distance.
    /// Default: Moore at distance 1.
    pub neighborhood: NeighborhoodSpec,
    /// Initial value of every interior cell, and the value bounded halo
    /// reads observe.
    pub default_value: T,
}

impl<T> GridConfig<T> {
    /// A bounded Moore grid of the given shape.
    pub fn new(shape: impl Into<Vec<usize>>, default_value: T) -> Self {
        Self {
            shape: shape.into(),
            boundary: BoundaryPolicy::default(),
            neighborhood: NeighborhoodSpec::default(),
            default_value,
        }
    }

    /// Replace the boundary policy.
    pub fn with_boundary(mut self, boundary: BoundaryPolicy) -> Self {
        self.boundary = boundary;
        self
    }

    /// Replace the neighbourhood specification.
    pub fn with_neighborhood(mut self, neighborhood: NeighborhoodSpec) -> Self {
        self.neighborhood = neighborhood;
        self
    }

    /// Validate all structural invariants without allocating cells.
    pub fn validate(&self) -> Result<(), GridError> {
        let _ = self.resolve()?;
        Ok(())
    }

    /// Check the boundary policy, then derive the padded layout and the
    /// compiled topology.
    pub(crate) fn resolve(&self) -> Result<(PaddedLayout, Topology), GridError> {
        // 1. Unsupported policies fail before anything else is derived.
        self.boundary.ensure_supported()?;
        // 2. Shape: non-empty, positive extents, no overflow.
        let shape = Shape::new(&self.shape)?;
        // 3. The halo is as wide as the furthest neighbour may reach.
        let halo = self.neighborhood.max_distance();
        if halo == 0 {
            return Err(GridError::config("neighbour distance must be at least 1"));
        }
        let layout = PaddedLayout::new(shape, halo)?;
        // 4. Topology: offsets must fit the layout.
        let topology = Topology::from_spec(&self.neighborhood, &layout)?;
        Ok((layout, topology))
    }
}
