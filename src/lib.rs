//! Sprint task selection as a 0/1 knapsack problem.
//!
//! A backlog of tasks, each with a story-point cost and a KSP value, is
//! loaded from CSV. [`DpTable::build`] fills the best-value table for every
//! item prefix and budget, [`select`] walks it back to recover the chosen
//! tasks, and [`format_selection`] renders them.

pub mod config;
pub mod error;
pub mod format;
pub mod io_utils;
pub mod loader;
pub mod plan;
pub mod select;
pub mod table;
pub mod types;

pub use config::{PlannerConfig, DEFAULT_MAX_TABLE_CELLS};
pub use error::PlannerError;
pub use format::format_selection;
pub use loader::{load_items, read_items};
pub use plan::{plan, Plan};
pub use select::select;
pub use table::DpTable;
pub use types::{Item, Selection};
