//! Dynamic-programming table for the 0/1 knapsack.
//!
//! Cell `[i][c]` holds the best total value reachable with the first `i`
//! items and a cost budget of `c`. Row 0 and column 0 are always zero and
//! every row only depends on the one above it, so a single forward pass in
//! row-major order fills the table.

use indicatif::{ProgressBar, ProgressStyle};
use sysinfo::{System, SystemExt};
use tracing::{debug, warn};

use crate::config::PlannerConfig;
use crate::error::{PlannerError, Result};
use crate::types::Item;

/// Completed best-value table stored as a dense row-major buffer of
/// `(items + 1) * (capacity + 1)` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DpTable {
    rows: usize,
    cols: usize,
    cells: Vec<u64>,
}

impl DpTable {
    /// Build the table for `items` under `capacity`.
    ///
    /// Fails with [`PlannerError::TableTooLarge`] before allocating when the
    /// cell count exceeds `config.max_table_cells`, and with
    /// [`PlannerError::ValueOverflow`] if a running total leaves `u64`.
    pub fn build(items: &[Item], capacity: u64, config: &PlannerConfig) -> Result<Self> {
        let total = cell_count(items.len(), capacity, config.max_table_cells)?;
        let rows = items.len() + 1;
        let cols = total / rows;
        warn_if_exceeds_memory(total);

        let bar = progress_bar(config.progress, items.len() as u64);
        let mut cells = vec![0u64; total];
        for (i, item) in items.iter().enumerate() {
            let (done, rest) = cells.split_at_mut((i + 1) * cols);
            let prev = &done[i * cols..];
            let cur = &mut rest[..cols];
            let cost = usize::try_from(item.cost).ok();
            for c in 1..cols {
                let skip = prev[c];
                cur[c] = match cost {
                    Some(cost) if cost <= c => {
                        let take = item
                            .value
                            .checked_add(prev[c - cost])
                            .ok_or(PlannerError::ValueOverflow)?;
                        skip.max(take)
                    }
                    _ => skip,
                };
            }
            bar.inc(1);
        }
        bar.finish_and_clear();

        let table = Self { rows, cols, cells };
        debug!(
            event = "table_built",
            items = items.len(),
            capacity,
            cells = total,
            best_value = table.best_value(),
        );
        Ok(table)
    }

    /// Number of items the table was built from (`n`).
    pub fn item_count(&self) -> usize {
        self.rows - 1
    }

    /// Capacity the table was built for (`m`).
    pub fn capacity(&self) -> u64 {
        (self.cols - 1) as u64
    }

    /// Value of cell `[i][c]`.
    ///
    /// # Panics
    /// Panics if `i > n` or `c > m`.
    pub fn get(&self, i: usize, c: usize) -> u64 {
        assert!(i < self.rows && c < self.cols, "cell [{i}][{c}] out of range");
        self.cells[i * self.cols + c]
    }

    /// Row `i` as a slice of `m + 1` values.
    pub fn row(&self, i: usize) -> &[u64] {
        &self.cells[i * self.cols..(i + 1) * self.cols]
    }

    /// Optimal total value, `T[n][m]`.
    pub fn best_value(&self) -> u64 {
        self.cells[self.cells.len() - 1]
    }
}

/// Number of cells needed for `items` rows under `capacity`, checked against
/// `limit`.
pub fn cell_count(items: usize, capacity: u64, limit: usize) -> Result<usize> {
    let rows = items as u128 + 1;
    let cols = capacity as u128 + 1;
    let cells = rows.checked_mul(cols).unwrap_or(u128::MAX);
    if cells > limit as u128 {
        return Err(PlannerError::TableTooLarge { cells, limit });
    }
    Ok(cells as usize)
}

fn warn_if_exceeds_memory(cells: usize) {
    let bytes = (cells as u64).saturating_mul(std::mem::size_of::<u64>() as u64);
    let mut sys = System::new();
    sys.refresh_memory();
    let available = sys.available_memory();
    if available > 0 && bytes > available {
        warn!(
            event = "table_memory_risk",
            table_bytes = bytes,
            available_bytes = available,
            "DP table is larger than currently available memory"
        );
    }
}

fn progress_bar(enabled: bool, len: u64) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(len);
    if let Ok(style) = ProgressStyle::with_template("{bar:40} {pos}/{len} rows ({eta})") {
        bar.set_style(style);
    }
    bar
}
