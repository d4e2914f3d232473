pub mod grid;
pub mod report;

use serde::Deserialize;

pub use grid::{CellKind, classify_cell, render_grid};
pub use report::{PlanReport, render_text, write_report, write_report_file};

/// How a plan is written out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    /// Pretty-printed JSON report
    Json,
}
