/// A backlog task considered for the sprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    /// Task identifier from the `task_id` column.
    pub id: i64,
    /// Effort in story points.
    pub cost: u64,
    /// Value score (KSP).
    pub value: u64,
}

impl Item {
    pub fn new(id: i64, cost: u64, value: u64) -> Self {
        Self { id, cost, value }
    }
}

/// Indices (0-based positions in the item collection) chosen by the selector,
/// in the order the back-trace produced them.
pub type Selection = Vec<usize>;

pub use crate::error::PlannerError;
