//! Boundary policy for the lattice halo.

use tessel_core::GridError;

/// What a neighbour read that lands in the halo observes.
///
/// # Examples
///
/// ```
/// use tessel_space::BoundaryPolicy;
///
/// assert!(BoundaryPolicy::Bounded.ensure_supported().is_ok());
/// assert!(BoundaryPolicy::Toroidal.ensure_supported().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BoundaryPolicy {
    /// Every halo slot aliases one shared, read-only default-valued cell.
    #[default]
    Bounded,
    /// Out-of-range reads wrap to the opposite side. Declared but not
    /// implemented; selecting it fails with [`GridError::Unsupported`].
    Toroidal,
}

impl BoundaryPolicy {
    /// Fail with [`GridError::Unsupported`] for policies this engine
    /// cannot build.
    pub fn ensure_supported(self) -> Result<(), GridError> {
        match self {
            Self::Bounded => Ok(()),
            Self::Toroidal => Err(GridError::Unsupported {
                feature: "toroidal wrapping",
            }),
        }
    }
}
