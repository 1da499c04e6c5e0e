//! The user-facing lattice: storage, topology, and update rule in one owner.

use std::fmt;

use tessel_arena::PaddedStorage;
use tessel_core::{Generation, GridError, Offset};
use tessel_space::{BoundaryPolicy, Neighborhood, Shape, Topology};

use crate::config::GridConfig;
use crate::engine::{UpdateEngine, UpdateRule};
use crate::metrics::StepMetrics;

/// An N-dimensional cellular lattice with a local update rule.
///
/// All mutation goes through `&mut self`, so one owner drives the grid and
/// reads between generations never race a step.
///
/// # Examples
///
/// ```
/// use tessel_engine::{Grid, GridConfig};
///
/// // Each cell becomes the number of live neighbours it had.
/// let config = GridConfig::new([3, 3], 0u8);
/// let mut grid = Grid::new(config, |future: &mut u8, neighbours: &[&u8]| {
///     *future = neighbours.iter().map(|n| **n).sum();
/// })
/// .unwrap();
///
/// grid.set_value(&[1, 1], 1).unwrap();
/// grid.update();
/// grid.update();
/// assert_eq!(*grid.get_value(&[0, 0]).unwrap(), 1);
/// assert_eq!(*grid.get_value(&[1, 1]).unwrap(), 0);
/// ```
pub struct Grid<T> {
    storage: PaddedStorage<T>,
    topology: Topology,
    boundary: BoundaryPolicy,
    engine: UpdateEngine,
    rule: UpdateRule<T>,
}

// Compile-time assertion: Grid must be Send for any Send + Sync cell type.
const _: () = {
    #[allow(dead_code)]
    fn assert_send<T: Send>() {}
    #[allow(dead_code)]
    fn check() {
        assert_send::<Grid<u8>>();
        assert_send::<Grid<String>>();
    }
};

impl<T: Clone> Grid<T> {
    /// Build a grid from `config`, with every interior cell set to the
    /// configured default.
    ///
    /// The configuration is validated before any storage is allocated.
    /// Unsupported boundary policies and neighbourhood schemes fail with
    /// [`GridError::Unsupported`]; every other invalid setting fails with
    /// [`GridError::Configuration`].
    pub fn new<R>(config: GridConfig<T>, rule: R) -> Result<Self, GridError>
    where
        R: Fn(&mut T, &[&T]) + Send + Sync + 'static,
    {
        let (layout, topology) = config.resolve()?;
        log::debug!(
            "building {}-d grid {:?}: halo {}, {} padded slots, {:?} neighbourhood of {}",
            layout.ndim(),
            layout.shape().extents(),
            layout.halo(),
            layout.len(),
            topology.kind(),
            topology.len()
        );
        let storage = PaddedStorage::new(layout, config.boundary, config.default_value)?;
        Ok(Self {
            storage,
            topology,
            boundary: config.boundary,
            engine: UpdateEngine::new(),
            rule: Box::new(rule),
        })
    }

    /// Write `value` into the cell at `coord`.
    ///
    /// The value is visible to [`get_value`](Self::get_value) immediately
    /// and to neighbours from the next generation on.
    pub fn set_value(&mut self, coord: &[usize], value: T) -> Result<(), GridError> {
        self.storage.set(coord, value)
    }

    /// Write `value` into every interior cell.
    pub fn fill(&mut self, value: T) {
        self.storage.fill(&value);
    }

    /// Advance one generation and return its number.
    ///
    /// The call commits the futures computed by the previous call and then
    /// computes new ones, so after `k` updates [`get_value`](Self::get_value)
    /// reads generation `k − 1`.
    pub fn update(&mut self) -> Generation {
        self.engine
            .step(&mut self.storage, &self.topology, &*self.rule)
    }

    /// Advance `n` generations and return the last generation number.
    pub fn step_n(&mut self, n: u64) -> Generation {
        for _ in 0..n {
            self.update();
        }
        self.engine.generation()
    }
}

impl<T> Grid<T> {
    /// Read the current value of the cell at `coord`.
    ///
    /// Fails with [`GridError::Configuration`] if `coord` has the wrong
    /// number of components and with [`GridError::OutOfRange`] if any
    /// component is outside its extent.
    pub fn get_value(&self, coord: &[usize]) -> Result<&T, GridError> {
        let index = self.storage.layout().to_padded_index(coord)?;
        Ok(self.storage.cell(index).get())
    }

    /// The interior shape.
    pub fn shape(&self) -> &Shape {
        self.storage.layout().shape()
    }

    /// Number of interior cells.
    pub fn size(&self) -> usize {
        self.shape().size()
    }

    /// Number of dimensions.
    pub fn ndim(&self) -> usize {
        self.shape().ndim()
    }

    /// Halo width on each side of every dimension.
    pub fn halo(&self) -> usize {
        self.storage.layout().halo()
    }

    /// The boundary policy the grid was built with.
    pub fn boundary(&self) -> BoundaryPolicy {
        self.boundary
    }

    /// The active neighbourhood scheme.
    pub fn neighborhood(&self) -> Neighborhood {
        self.topology.kind()
    }

    /// The active compiled topology.
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// The value every halo read observes.
    pub fn default_value(&self) -> &T {
        self.storage.shared_default()
    }

    /// Number of completed generations.
    pub fn generation(&self) -> Generation {
        self.engine.generation()
    }

    /// Metrics from the most recent generation.
    pub fn last_metrics(&self) -> &StepMetrics {
        self.engine.last_metrics()
    }

    /// Read-only access to the underlying padded storage.
    pub fn storage(&self) -> &PaddedStorage<T> {
        &self.storage
    }

    /// Visit every interior cell's coordinate and current value, dimension
    /// 0 fastest.
    pub fn for_each_interior<F>(&self, mut f: F)
    where
        F: FnMut(&[usize], &T),
    {
        let layout = self.storage.layout();
        for &index in self.storage.interior_indices() {
            if let Some(coord) = layout.interior_coord(index) {
                f(&coord, self.storage.cell(index).get());
            }
        }
    }

    /// Switch to a named neighbourhood scheme.
    ///
    /// Presets always reach one cell, whatever the halo width.
    ///
    /// `Custom` fails with [`GridError::Configuration`] (use
    /// [`set_custom_neighborhood`](Self::set_custom_neighborhood));
    /// `VonNeumann` fails with [`GridError::Unsupported`]. On failure the
    /// active topology is unchanged.
    pub fn set_neighborhood(&mut self, kind: Neighborhood) -> Result<(), GridError> {
        let topology = Topology::preset(kind, self.storage.layout())?;
        self.install(topology);
        Ok(())
    }

    /// Switch to explicit relative offsets.
    ///
    /// Each offset needs one component per dimension and must stay within
    /// the halo. On failure the active topology is unchanged.
    pub fn set_custom_neighborhood(&mut self, offsets: Vec<Offset>) -> Result<(), GridError> {
        let topology = Topology::custom(offsets, self.storage.layout())?;
        self.install(topology);
        Ok(())
    }

    fn install(&mut self, topology: Topology) {
        log::debug!(
            "neighbourhood {:?} ({}) -> {:?} ({})",
            self.topology.kind(),
            self.topology.len(),
            topology.kind(),
            topology.len()
        );
        self.topology = topology;
    }
}

impl<T: fmt::Debug> fmt::Debug for Grid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("shape", &self.shape().extents())
            .field("halo", &self.halo())
            .field("boundary", &self.boundary)
            .field("neighborhood", &self.topology.kind())
            .field("neighbours", &self.topology.len())
            .field("default_value", self.default_value())
            .field("generation", &self.engine.generation())
            .field("rule", &"<fn>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;
    use tessel_space::NeighborhoodSpec;

    fn count_grid(extents: &[usize]) -> Grid<u32> {
        Grid::new(GridConfig::new(extents, 0u32), |f: &mut u32, n: &[&u32]| {
            *f = n.iter().map(|v| **v).sum();
        })
        .unwrap()
    }

    #[test]
    fn accessors_reflect_config() {
        let g = count_grid(&[4, 3, 2]);
        assert_eq!(g.ndim(), 3);
        assert_eq!(g.size(), 24);
        assert_eq!(g.halo(), 1);
        assert_eq!(g.boundary(), BoundaryPolicy::Bounded);
        assert_eq!(g.neighborhood(), Neighborhood::Moore);
        assert_eq!(g.topology().len(), 26);
        assert_eq!(*g.default_value(), 0);
        assert_eq!(g.generation(), Generation(0));
    }

    #[test]
    fn get_value_errors() {
        let g = count_grid(&[4, 4]);
        assert!(matches!(g.get_value(&[4, 0]), Err(GridError::OutOfRange { .. })));
        assert!(matches!(
            g.get_value(&[1, 1, 1]),
            Err(GridError::Configuration { .. })
        ));
    }

    #[test]
    fn set_value_is_immediately_visible() {
        let mut g = count_grid(&[4, 4]);
        g.set_value(&[3, 2], 5).unwrap();
        assert_eq!(*g.get_value(&[3, 2]).unwrap(), 5);
    }

    #[test]
    fn step_n_counts_generations() {
        let mut g = count_grid(&[2, 2]);
        assert_eq!(g.step_n(5), Generation(5));
        assert_eq!(g.generation(), Generation(5));
        assert_eq!(g.last_metrics().cells_updated, 4);
    }

    #[test]
    fn for_each_interior_visits_in_order() {
        let mut g = count_grid(&[2, 2]);
        g.set_value(&[1, 0], 1).unwrap();
        g.set_value(&[0, 1], 2).unwrap();
        let mut seen = Vec::new();
        g.for_each_interior(|c, v| seen.push((c.to_vec(), *v)));
        assert_eq!(
            seen,
            vec![
                (vec![0, 0], 0),
                (vec![1, 0], 1),
                (vec![0, 1], 2),
                (vec![1, 1], 0),
            ]
        );
    }

    #[test]
    fn set_neighborhood_failure_keeps_topology() {
        let mut g = count_grid(&[4, 4]);
        let before = g.topology().clone();
        assert!(matches!(
            g.set_neighborhood(Neighborhood::VonNeumann),
            Err(GridError::Unsupported { .. })
        ));
        assert!(matches!(
            g.set_neighborhood(Neighborhood::Custom),
            Err(GridError::Configuration { .. })
        ));
        assert!(g.set_custom_neighborhood(vec![smallvec![2, 0]]).is_err());
        assert_eq!(g.topology(), &before);
    }

    #[test]
    fn custom_neighbourhood_then_back_to_moore() {
        let mut g = count_grid(&[4, 4]);
        g.set_custom_neighborhood(vec![smallvec![1, 0]]).unwrap();
        assert_eq!(g.neighborhood(), Neighborhood::Custom);
        assert_eq!(g.topology().len(), 1);
        g.set_neighborhood(Neighborhood::Moore).unwrap();
        assert_eq!(g.topology().len(), 8);
    }

    #[test]
    fn set_neighborhood_ignores_halo_width() {
        let config = GridConfig::new([5, 5], 0u32).with_neighborhood(NeighborhoodSpec::custom(
            vec![smallvec![0, 2]],
            2,
        ));
        let mut g = Grid::new(config, |_: &mut u32, _: &[&u32]| {}).unwrap();
        assert_eq!(g.halo(), 2);
        g.set_neighborhood(Neighborhood::Moore).unwrap();
        assert_eq!(g.topology().len(), 8);
        assert_eq!(g.topology().reach(), 1);
        assert_eq!(g.halo(), 2);
    }

    #[test]
    fn debug_omits_rule() {
        let g = count_grid(&[2]);
        let s = format!("{g:?}");
        assert!(s.contains("Grid"));
        assert!(s.contains("<fn>"));
    }
}
