use crate::model::{CareerData, OutputError};
use std::fs;
use std::path::Path;

const OUTPUT_COLUMNS: [&str; 5] = ["Career", "COS URL", "Description", "Video URL", "Transcript"];

/// Serializes the full batch to a CSV file, overwriting anything already
/// there. The parent directory is created if missing. The header row is
/// written even when the batch is empty.
pub fn write_results(path: &Path, results: &[CareerData]) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut writer = csv::WriterBuilder::new().has_headers(false).from_path(path)?;
    writer.write_record(OUTPUT_COLUMNS)?;
    for record in results {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}
