use std::path::PathBuf;

use chrono::NaiveDate;
use thiserror::Error;

/// Everything that can stop the dashboard from rendering a session.
///
/// None of these are fatal to the process: the user fixes the input
/// (re-uploads, picks another range) and a fresh computation runs.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DashboardError {
    #[error("Unsupported file `{name}`: {reason}")]
    UnsupportedFormat { name: String, reason: String },

    #[error("Dataset not found at {}: {reason}", .path.display())]
    FileNotFound { path: PathBuf, reason: String },

    /// Absent required columns, sorted by name.
    #[error("Your dataset is missing columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("Start date {start} is after end date {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
}

pub type Result<T> = std::result::Result<T, DashboardError>;
