//! Sprint backlog CSV reader.
//!
//! The file carries a header row with at least the `task_id`, `story_points`
//! and `KSP` columns, in any order. Every other column is ignored.

use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::debug;

use crate::error::{PlannerError, Result};
use crate::types::Item;

pub const TASK_ID_COLUMN: &str = "task_id";
pub const COST_COLUMN: &str = "story_points";
pub const VALUE_COLUMN: &str = "KSP";

/// Load the backlog stored at `path`.
pub fn load_items<P: AsRef<Path>>(path: P) -> Result<Vec<Item>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| PlannerError::NotFound {
        path: path.to_path_buf(),
        source,
    })?;
    let items = read_items(file)?;
    debug!(event = "backlog_loaded", path = %path.display(), items = items.len());
    Ok(items)
}

/// Parse a backlog from any reader, keeping row order.
pub fn read_items<R: Read>(reader: R) -> Result<Vec<Item>> {
    let mut rdr = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let headers = rdr.headers().map_err(row_error)?.clone();
    let id_col = column(&headers, TASK_ID_COLUMN)?;
    let cost_col = column(&headers, COST_COLUMN)?;
    let value_col = column(&headers, VALUE_COLUMN)?;

    let mut seen = HashSet::new();
    let mut items = Vec::new();
    for record in rdr.records() {
        let record = record.map_err(row_error)?;
        let line = record.position().map_or(0, |p| p.line());

        let id = field(&record, id_col, TASK_ID_COLUMN, line)?;
        let cost = non_negative(field(&record, cost_col, COST_COLUMN, line)?, COST_COLUMN, line)?;
        let value = non_negative(field(&record, value_col, VALUE_COLUMN, line)?, VALUE_COLUMN, line)?;

        if !seen.insert(id) {
            return Err(PlannerError::DuplicateId { id, line });
        }
        items.push(Item::new(id, cost, value));
    }
    Ok(items)
}

fn column(headers: &StringRecord, name: &str) -> Result<usize> {
    headers
        .iter()
        .position(|h| h == name)
        .ok_or_else(|| PlannerError::Malformed(format!("missing column '{name}'")))
}

fn field(record: &StringRecord, idx: usize, name: &str, line: u64) -> Result<i64> {
    let raw = record
        .get(idx)
        .ok_or_else(|| PlannerError::Malformed(format!("line {line}: missing field '{name}'")))?;
    raw.parse().map_err(|_| {
        PlannerError::Malformed(format!("line {line}: '{name}' value '{raw}' is not an integer"))
    })
}

fn non_negative(v: i64, name: &str, line: u64) -> Result<u64> {
    u64::try_from(v).map_err(|_| {
        PlannerError::InvalidInput(format!("line {line}: '{name}' must not be negative, got {v}"))
    })
}

fn row_error(err: csv::Error) -> PlannerError {
    if err.is_io_error() {
        return PlannerError::Csv(err);
    }
    PlannerError::Malformed(err.to_string())
}
