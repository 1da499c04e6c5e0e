//! Neighbourhood schemes and their compiled flat-offset topologies.

use crate::layout::PaddedLayout;
use smallvec::SmallVec;
use tessel_core::{GridError, Offset};

/// Named neighbourhood schemes.
///
/// # Examples
///
/// ```
/// use tessel_space::{Neighborhood, PaddedLayout, Shape, Topology};
///
/// let layout = PaddedLayout::new(Shape::new(&[8, 8]).unwrap(), 1).unwrap();
/// let moore = Topology::preset(Neighborhood::Moore, &layout).unwrap();
/// assert_eq!(moore.len(), 8);
///
/// // Custom schemes must be supplied as explicit offsets.
/// assert!(Topology::preset(Neighborhood::Custom, &layout).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Neighborhood {
    /// Every lattice point one step away along any combination of axes,
    /// excluding the cell itself: `3^N − 1` neighbours in N dimensions.
    Moore,
    /// Points reachable along a single axis. Declared but not implemented;
    /// selecting it fails with [`GridError::Unsupported`].
    VonNeumann,
    /// An explicit list of relative offsets.
    Custom,
}

/// How a grid's neighbourhood is specified at construction time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NeighborhoodSpec {
    /// A named scheme generated from the lattice's dimensionality.
    Preset {
        /// The scheme. `Custom` is rejected here.
        kind: Neighborhood,
        /// Halo width per side. Presets always reach one cell; a wider
        /// halo only matters to a later switch to custom offsets.
        max_distance: usize,
    },
    /// Explicit relative offsets, one signed component per dimension.
    Custom {
        /// Offsets in the order their values reach the update rule.
        offsets: Vec<Offset>,
        /// Largest per-axis offset allowed; also the halo width.
        max_distance: usize,
    },
}

impl NeighborhoodSpec {
    /// The 3^N − 1 Moore neighbourhood with a one-cell halo.
    pub fn moore() -> Self {
        Self::Preset {
            kind: Neighborhood::Moore,
            max_distance: 1,
        }
    }

    /// Explicit offsets with the given maximum per-axis distance.
    pub fn custom(offsets: Vec<Offset>, max_distance: usize) -> Self {
        Self::Custom {
            offsets,
            max_distance,
        }
    }

    /// The halo width this neighbourhood asks for.
    pub fn max_distance(&self) -> usize {
        match self {
            Self::Preset { max_distance, .. } | Self::Custom { max_distance, .. } => *max_distance,
        }
    }

    /// The scheme this specification selects.
    pub fn kind(&self) -> Neighborhood {
        match self {
            Self::Preset { kind, .. } => *kind,
            Self::Custom { .. } => Neighborhood::Custom,
        }
    }
}

impl Default for NeighborhoodSpec {
    fn default() -> Self {
        Self::moore()
    }
}

/// Enumerate the Moore offsets of an `ndim`-dimensional lattice.
///
/// Produces every vector in `{-1, 0, 1}^ndim` except the zero vector,
/// lexicographically with dimension 0 outermost: `3^ndim − 1` offsets.
///
/// Returns `Err(GridError::Configuration)` if the offset count overflows
/// `usize`.
pub fn moore_offsets(ndim: usize) -> Result<Vec<Offset>, GridError> {
    if ndim == 0 {
        return Ok(Vec::new());
    }
    let total = u32::try_from(ndim)
        .ok()
        .and_then(|n| 3usize.checked_pow(n))
        .ok_or_else(|| GridError::config("moore neighbourhood size overflows usize"))?;

    // Odometer over {-1, 0, 1}^ndim; the last dimension turns fastest so
    // the first dimension's choice is outermost.
    let mut offsets = Vec::with_capacity(total - 1);
    let mut current: Offset = SmallVec::from_elem(-1, ndim);
    for _ in 0..total {
        if current.iter().any(|&c| c != 0) {
            offsets.push(current.clone());
        }
        for c in current.iter_mut().rev() {
            *c += 1;
            if *c <= 1 {
                break;
            }
            *c = -1;
        }
    }
    Ok(offsets)
}

/// A compiled neighbourhood: relative offsets plus the flat index deltas
/// they map to under one [`PaddedLayout`].
///
/// Position *k* of [`offsets`](Self::offsets) is always the same direction,
/// and is the position at which that neighbour's value reaches the update
/// rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Topology {
    kind: Neighborhood,
    relative: Vec<Offset>,
    offsets: Vec<isize>,
}

impl Topology {
    /// Compile a named scheme against `layout`.
    ///
    /// The layout's halo must be at least one cell wide. `Custom` is a
    /// configuration error here (offsets must be supplied through
    /// [`Topology::custom`]); `VonNeumann` is unsupported.
    pub fn preset(kind: Neighborhood, layout: &PaddedLayout) -> Result<Self, GridError> {
        match kind {
            Neighborhood::Moore => {
                if layout.halo() == 0 {
                    return Err(GridError::config(
                        "moore neighbourhood needs a halo of at least 1",
                    ));
                }
                let relative = moore_offsets(layout.ndim())?;
                Self::compile(kind, relative, layout)
            }
            Neighborhood::VonNeumann => Err(GridError::Unsupported {
                feature: "von neumann neighbourhood",
            }),
            Neighborhood::Custom => Err(GridError::config(
                "custom neighbourhoods must be supplied as explicit offsets",
            )),
        }
    }

    /// Compile explicit relative offsets against `layout`.
    ///
    /// Every offset must have one component per dimension and a Chebyshev
    /// norm no larger than the layout's halo, so that no interior cell can
    /// reach past the padding.
    pub fn custom(offsets: Vec<Offset>, layout: &PaddedLayout) -> Result<Self, GridError> {
        for offset in &offsets {
            if offset.len() != layout.ndim() {
                return Err(GridError::config(format!(
                    "offset {offset:?} has {} components, grid has {} dimensions",
                    offset.len(),
                    layout.ndim()
                )));
            }
            let reach = chebyshev(offset);
            if reach > layout.halo() {
                return Err(GridError::config(format!(
                    "offset {offset:?} reaches {reach} cells, halo is {}",
                    layout.halo()
                )));
            }
        }
        Self::compile(Neighborhood::Custom, offsets, layout)
    }

    /// Compile a [`NeighborhoodSpec`] against `layout`.
    pub fn from_spec(spec: &NeighborhoodSpec, layout: &PaddedLayout) -> Result<Self, GridError> {
        match spec {
            NeighborhoodSpec::Preset { kind, .. } => Self::preset(*kind, layout),
            NeighborhoodSpec::Custom { offsets, .. } => Self::custom(offsets.clone(), layout),
        }
    }

    fn compile(
        kind: Neighborhood,
        relative: Vec<Offset>,
        layout: &PaddedLayout,
    ) -> Result<Self, GridError> {
        let offsets = relative
            .iter()
            .map(|o| layout.offset_index(o))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            kind,
            relative,
            offsets,
        })
    }

    /// The scheme this topology was compiled from.
    pub fn kind(&self) -> Neighborhood {
        self.kind
    }

    /// Number of neighbours of every interior cell.
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    /// Whether the topology has no neighbours at all.
    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// Flat padded-index deltas, in neighbour order.
    pub fn offsets(&self) -> &[isize] {
        &self.offsets
    }

    /// Relative per-dimension offsets, in neighbour order.
    pub fn relative(&self) -> &[Offset] {
        &self.relative
    }

    /// Largest Chebyshev norm among the offsets (0 when empty).
    pub fn reach(&self) -> usize {
        self.relative.iter().map(|o| chebyshev(o)).max().unwrap_or(0)
    }
}

fn chebyshev(offset: &[i32]) -> usize {
    offset
        .iter()
        .map(|c| c.unsigned_abs() as usize)
        .max()
        .unwrap_or(0)
}
