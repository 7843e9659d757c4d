use serde::Serialize;
use tracing::info;

use crate::config::PlannerConfig;
use crate::error::{PlannerError, Result};
use crate::select::select;
use crate::table::DpTable;
use crate::types::Item;

/// Outcome of one planning run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Plan {
    pub capacity: u64,
    /// Selected positions in the backlog, ascending.
    pub selected: Vec<usize>,
    /// `task_id`s of the selected items, in the same order as `selected`.
    pub task_ids: Vec<i64>,
    pub total_cost: u64,
    pub total_value: u64,
}

/// Build the table, back-trace it and summarise the chosen tasks.
pub fn plan(items: &[Item], capacity: u64, config: &PlannerConfig) -> Result<Plan> {
    info!(event = "plan_start", items = items.len(), capacity);

    let table = DpTable::build(items, capacity, config)?;
    let mut selected = select(&table, items)?;
    selected.sort_unstable();

    let task_ids: Vec<i64> = selected.iter().map(|&i| items[i].id).collect();
    let total_cost: u64 = selected.iter().map(|&i| items[i].cost).sum();
    let total_value = selected
        .iter()
        .try_fold(0u64, |acc, &i| acc.checked_add(items[i].value))
        .ok_or(PlannerError::ValueOverflow)?;

    info!(
        event = "plan_end",
        selected = selected.len(),
        total_cost,
        total_value,
    );
    Ok(Plan {
        capacity,
        selected,
        task_ids,
        total_cost,
        total_value,
    })
}
