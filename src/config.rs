/// Default upper bound on DP table cells (about 400 MB of `u64`).
pub const DEFAULT_MAX_TABLE_CELLS: usize = 50_000_000;

/// Runtime configuration for a planning run.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Largest `(items + 1) * (capacity + 1)` the table builder will allocate.
    pub max_table_cells: usize,
    /// Draw a progress bar on stderr while filling the table.
    pub progress: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_table_cells: DEFAULT_MAX_TABLE_CELLS,
            progress: false,
        }
    }
}

impl PlannerConfig {
    /// Configuration with a custom cell limit and no progress output.
    pub fn with_max_cells(max_table_cells: usize) -> Self {
        Self {
            max_table_cells,
            ..Self::default()
        }
    }
}
