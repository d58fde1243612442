//! CLI command for CSV export
//!
//! Writes the selected month's expenses to `expenses-<Month>.csv`.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use chrono::Month;
use log::debug;

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{export_filename, CsvExport};
use crate::models::month_name;
use crate::services::Tracker;
use crate::storage::KeyValueStore;

/// Where the export lands: the given file, the default name inside a given
/// directory, or the default name in the working directory
pub fn resolve_output(output: Option<PathBuf>, month: Month) -> PathBuf {
    let filename = export_filename(month);
    match output {
        Some(path) if path.is_dir() => path.join(filename),
        Some(path) => path,
        None => PathBuf::from(filename),
    }
}

/// Handle `export`
pub fn handle_export<S: KeyValueStore>(
    tracker: &mut Tracker<S>,
    month: Option<Month>,
    output: Option<PathBuf>,
) -> ExpenseResult<()> {
    if let Some(month) = month {
        tracker.select_month(month);
    }

    let state = tracker.state();
    let export = state.export();
    let path = resolve_output(output, state.selected_month());

    write_export(&path, &export)?;

    println!(
        "Exported {} expenses for {} to: {}",
        export.row_count(),
        month_name(state.selected_month()),
        path.display()
    );
    Ok(())
}

fn write_export(path: &Path, export: &CsvExport) -> ExpenseResult<()> {
    let file = File::create(path).map_err(|e| {
        ExpenseError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    export.write_to(&mut writer)?;
    debug!(
        "Wrote {} rows ({}) to {}",
        export.row_count(),
        export.mime_type,
        path.display()
    );
    Ok(())
}
