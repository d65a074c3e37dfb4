use std::fmt::Display;
use std::path::PathBuf;

use anyhow::{Context, Result};

use superstore_dashboard::data::aggregate::Aggregation;
use superstore_dashboard::data::export::{aggregation_csv, records_csv};
use superstore_dashboard::data::model::Dataset;

// ---------------------------------------------------------------------------
// "Download Data" – save a view as CSV through a native dialog
// ---------------------------------------------------------------------------

/// Ask where to save `bytes`. `Ok(None)` when the dialog is cancelled.
pub fn save_csv(file_name: &str, bytes: &[u8]) -> Result<Option<PathBuf>> {
    let Some(path) = rfd::FileDialog::new()
        .set_title("Download Data")
        .set_file_name(file_name)
        .add_filter("CSV", &["csv"])
        .save_file()
    else {
        return Ok(None);
    };

    std::fs::write(&path, bytes).with_context(|| format!("writing {}", path.display()))?;
    log::info!("Exported {} bytes to {}", bytes.len(), path.display());
    Ok(Some(path))
}

pub fn download_aggregation<K: Display>(
    agg: &Aggregation<K>,
    file_name: &str,
) -> Result<Option<PathBuf>> {
    let bytes = aggregation_csv(agg).context("serializing view to CSV")?;
    save_csv(file_name, &bytes)
}

pub fn download_records(dataset: &Dataset, file_name: &str) -> Result<Option<PathBuf>> {
    let bytes = records_csv(dataset).context("serializing rows to CSV")?;
    save_csv(file_name, &bytes)
}

/// Message for the notice line; nothing when the user cancelled.
pub fn describe(result: Result<Option<PathBuf>>) -> Option<String> {
    match result {
        Ok(Some(path)) => Some(format!("Saved {}", path.display())),
        Ok(None) => None,
        Err(e) => {
            log::error!("Export failed: {e:#}");
            Some(format!("Export failed: {e:#}"))
        }
    }
}
