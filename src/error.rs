use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlannerError {
    /// Negative cost, value or capacity, or a table/item mismatch.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The same `task_id` appears on more than one row.
    #[error("line {line}: duplicate task_id {id}")]
    DuplicateId { id: i64, line: u64 },

    /// Backlog file missing or unreadable.
    #[error("cannot open '{}': {source}", .path.display())]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A required column or field could not be parsed as an integer.
    #[error("malformed input: {0}")]
    Malformed(String),

    /// The DP table would exceed the configured cell budget.
    #[error("table of {cells} cells exceeds the limit of {limit}")]
    TableTooLarge { cells: u128, limit: usize },

    /// Total value does not fit in a `u64`.
    #[error("total value overflows u64")]
    ValueOverflow,

    /// Propagated CSV reader error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, PlannerError>;
