//! Planning graph configuration.

/// Construction options for a [`PlanningGraph`](crate::graph::PlanningGraph).
///
/// # Example
///
/// ```
/// use graphplan_graph::PlanningGraphConfig;
///
/// let config = PlanningGraphConfig::new()
///     .with_serialize(true)
///     .with_ignore_mutexes(false);
/// assert!(config.serialize);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PlanningGraphConfig {
    /// Makes every pair of ordinary actions in a layer mutex, so at most one
    /// non-persistence action happens per level. Leave disabled when the
    /// graph is only used for heuristic estimates.
    pub serialize: bool,
    /// Skips all mutex computation. Set-level then degrades to max-level.
    pub ignore_mutexes: bool,
}

impl PlanningGraphConfig {
    /// Creates the default configuration (no serialization, mutexes on).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether ordinary actions are serialized.
    #[must_use]
    pub fn with_serialize(mut self, serialize: bool) -> Self {
        self.serialize = serialize;
        self
    }

    /// Sets whether mutex computation is skipped.
    #[must_use]
    pub fn with_ignore_mutexes(mut self, ignore_mutexes: bool) -> Self {
        self.ignore_mutexes = ignore_mutexes;
        self
    }
}
