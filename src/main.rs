use std::io::{self, Write};
use std::path::PathBuf;

use clap::Parser;
use sprintpack::{
    format_selection,
    io_utils::{planner_cli_error, simple_cli_error},
    load_items, plan, PlannerConfig, PlannerError, DEFAULT_MAX_TABLE_CELLS,
};
use tracing_subscriber::EnvFilter;

/// Pick the sprint tasks that maximise total KSP within a story-point budget.
#[derive(Parser)]
#[command(name = "sprintpack", version)]
struct Args {
    /// Backlog CSV with task_id, story_points and KSP columns
    file: PathBuf,
    /// Sprint capacity (velocity) in story points
    #[arg(allow_negative_numbers = true)]
    capacity: i64,
    /// Print selected task_id values instead of backlog positions
    #[arg(long)]
    ids: bool,
    /// Print a JSON summary of the plan
    #[arg(long)]
    json: bool,
    /// Refuse to build tables with more cells than this
    #[arg(long, default_value_t = DEFAULT_MAX_TABLE_CELLS)]
    max_cells: usize,
    /// Show a progress bar while building the table
    #[arg(long)]
    progress: bool,
    /// Log debug events to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(args.verbose);

    let capacity = u64::try_from(args.capacity).map_err(|_| {
        planner_cli_error(
            "checking capacity",
            PlannerError::InvalidInput(format!(
                "capacity must not be negative, got {}",
                args.capacity
            )),
        )
    })?;
    let config = PlannerConfig {
        max_table_cells: args.max_cells,
        progress: args.progress,
    };

    let items = load_items(&args.file).map_err(|e| planner_cli_error("loading backlog", e))?;
    let plan = plan(&items, capacity, &config).map_err(|e| planner_cli_error("planning sprint", e))?;

    let mut out = io::stdout().lock();
    if args.json {
        serde_json::to_writer_pretty(&mut out, &plan)
            .map_err(|e| simple_cli_error(&format!("writing JSON summary: {e}")))?;
        writeln!(out)?;
    } else if args.ids {
        write!(out, "{}", format_selection(&plan.task_ids))?;
    } else {
        write!(out, "{}", format_selection(&plan.selected))?;
    }
    out.flush()?;
    Ok(())
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
