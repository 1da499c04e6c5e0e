//! Per-generation timing metrics.

/// Timing and size data collected during a single `update()`.
///
/// All durations are in microseconds. The engine overwrites these after
/// every generation; read them from [`Grid::last_metrics`](crate::Grid::last_metrics).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepMetrics {
    /// Wall-clock time for the whole generation, in microseconds.
    pub total_us: u64,
    /// Time spent in the commit phase, in microseconds.
    pub commit_us: u64,
    /// Time spent in the compute phase, in microseconds.
    pub compute_us: u64,
    /// Number of interior cells the update rule ran for.
    pub cells_updated: usize,
    /// Number of neighbour values handed to the rule per cell.
    pub neighbours_per_cell: usize,
}
