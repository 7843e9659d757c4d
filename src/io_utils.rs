//! User-facing error messages for the command line front end.

use std::fmt;
use std::io;
use std::path::Path;

use crate::PlannerError;

#[derive(Debug)]
pub struct CliError {
    pub msg: String,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.msg.fmt(f)
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Format a user friendly I/O error message with suggestions.
pub fn format_io_error(operation: &str, path: &Path, err: &io::Error) -> String {
    use io::ErrorKind::*;
    let suggestion = match err.kind() {
        NotFound => "Check that the file exists and the path is correct.",
        PermissionDenied => "Check permissions or run as a different user.",
        InvalidData => "The file does not look like UTF-8 CSV.",
        _ => "Check that the file is readable.",
    };
    format!(
        "Error {} '{}': {}. {}",
        operation,
        path.display(),
        err,
        suggestion
    )
}

/// Simple CLI error from string.
pub fn simple_cli_error(msg: &str) -> CliError {
    CliError {
        msg: msg.to_string(),
        source: None,
    }
}

/// Convert a planner error into a CLI error with a hint.
pub fn planner_cli_error(context: &str, err: PlannerError) -> CliError {
    CliError {
        msg: format!("{}: {}", context, cli_hint(&err)),
        source: Some(Box::new(err)),
    }
}

/// Return an actionable hint for a planner error variant.
pub fn cli_hint(err: &PlannerError) -> String {
    use crate::PlannerError::*;
    match err {
        InvalidInput(msg) => format!("{msg}. Check the backlog values and capacity."),
        DuplicateId { .. } => format!("{err}. Each task_id must appear on one row only."),
        NotFound { path, source } => format_io_error("reading backlog", path, source),
        Malformed(msg) => format!(
            "{msg}. Expected a header with task_id, story_points and KSP and integer cells."
        ),
        TableTooLarge { cells, limit } => format!(
            "planning needs {cells} table cells but the limit is {limit}. \
             Lower the capacity or raise --max-cells."
        ),
        ValueOverflow => "KSP totals overflow a 64-bit integer. Use smaller scores.".to_string(),
        Csv(e) => format!("{e}"),
    }
}
