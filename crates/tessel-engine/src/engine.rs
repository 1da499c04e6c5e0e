//! Synchronous generation stepping.
//!
//! [`UpdateEngine`] runs one generation as two phases over a
//! [`PaddedStorage`]: commit every future value, then compute every
//! interior cell's next future from its neighbours' current values.

use std::time::Instant;

use smallvec::SmallVec;
use tessel_arena::PaddedStorage;
use tessel_core::Generation;
use tessel_space::Topology;

use crate::metrics::StepMetrics;

/// A local update rule.
///
/// Called once per interior cell per generation with that cell's future
/// slot and the current values of its neighbours, in topology order.
/// The future slot already holds the cell's current value when the rule
/// runs, so a rule that writes nothing keeps the cell unchanged.
pub type UpdateRule<T> = Box<dyn Fn(&mut T, &[&T]) + Send + Sync>;

/// Where the engine is within a generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EnginePhase {
    /// Between generations.
    #[default]
    Idle,
    /// Copying every future value into its current value.
    Committing,
    /// Running the update rule for every interior cell.
    Computing,
}

/// Drives a [`PaddedStorage`] forward one generation at a time.
///
/// The engine owns no cells; it owns the generation counter, the phase
/// marker and the metrics of the last generation.
#[derive(Clone, Debug, Default)]
pub struct UpdateEngine {
    phase: EnginePhase,
    generation: Generation,
    last_metrics: StepMetrics,
}

impl UpdateEngine {
    /// A fresh engine at generation 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// The phase the engine is in.
    ///
    /// Always [`EnginePhase::Idle`] between calls to [`step`](Self::step)
    /// unless a rule panicked mid-generation.
    pub fn phase(&self) -> EnginePhase {
        self.phase
    }

    /// Number of completed generations.
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Metrics from the most recent generation.
    pub fn last_metrics(&self) -> &StepMetrics {
        &self.last_metrics
    }

    /// Run one full generation and return the new generation number.
    ///
    /// Commit happens before compute: values written with `set_value`
    /// since the last generation are already in both buffers, and rule
    /// output from the last generation becomes visible to neighbours here.
    pub fn step<T, R>(
        &mut self,
        storage: &mut PaddedStorage<T>,
        topology: &Topology,
        rule: &R,
    ) -> Generation
    where
        T: Clone,
        R: Fn(&mut T, &[&T]) + ?Sized,
    {
        if self.phase != EnginePhase::Idle {
            log::warn!(
                "generation {} did not finish (stopped while {:?}); restarting from commit",
                self.generation.next(),
                self.phase
            );
        }
        let start = Instant::now();

        // 1. Commit.
        self.phase = EnginePhase::Committing;
        let commit_start = Instant::now();
        storage.commit();
        let commit_us = commit_start.elapsed().as_micros() as u64;

        // 2. Compute.
        self.phase = EnginePhase::Computing;
        let compute_start = Instant::now();
        let offsets = topology.offsets();
        let mut cells_updated = 0usize;
        storage.for_each_window(|mut window| {
            let neighbours: SmallVec<[&T; 26]> =
                offsets.iter().map(|&o| window.neighbour(o)).collect();
            rule(window.future_mut(), &neighbours);
            cells_updated += 1;
        });
        let compute_us = compute_start.elapsed().as_micros() as u64;

        self.phase = EnginePhase::Idle;
        self.generation = self.generation.next();
        self.last_metrics = StepMetrics {
            total_us: start.elapsed().as_micros() as u64,
            commit_us,
            compute_us,
            cells_updated,
            neighbours_per_cell: offsets.len(),
        };
        log::trace!(
            "generation {}: {} cells in {}us (commit {}us, compute {}us)",
            self.generation,
            cells_updated,
            self.last_metrics.total_us,
            commit_us,
            compute_us
        );
        self.generation
    }
}
