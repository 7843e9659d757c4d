//! Back-trace over a completed [`DpTable`].

use crate::error::{PlannerError, Result};
use crate::table::DpTable;
use crate::types::{Item, Selection};

/// Recover one optimal selection from `table`.
///
/// Walks from `[n][m]` back to row 0. Whenever the remaining target value is
/// already reachable without item `i - 1` the item is treated as excluded, so
/// among several optimal sets the one that skips later items wins. Indices are
/// returned in the order visited, highest first.
///
/// `items` must be the collection the table was built from.
pub fn select(table: &DpTable, items: &[Item]) -> Result<Selection> {
    if items.len() != table.item_count() {
        return Err(PlannerError::InvalidInput(format!(
            "table was built for {} items but {} were given",
            table.item_count(),
            items.len()
        )));
    }

    let mut target = table.best_value();
    // capacity() + 1 columns were allocated, so this fits in usize
    let mut budget = table.capacity() as usize;
    let mut chosen = Vec::new();

    for i in (1..=items.len()).rev() {
        if target == 0 {
            break;
        }
        if target == table.get(i - 1, budget) {
            continue;
        }
        // T[i][budget] > T[i-1][budget]: the item was taken, so its cost fits
        // and the remainder is T[i-1][budget - cost].
        let item = &items[i - 1];
        let rest = usize::try_from(item.cost)
            .ok()
            .and_then(|cost| budget.checked_sub(cost))
            .zip(target.checked_sub(item.value));
        let Some((b, t)) = rest else {
            return Err(mismatch());
        };
        chosen.push(i - 1);
        budget = b;
        target = t;
    }

    if target != 0 {
        return Err(mismatch());
    }
    Ok(chosen)
}

fn mismatch() -> PlannerError {
    PlannerError::InvalidInput("items do not match the table".to_string())
}
