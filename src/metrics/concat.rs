use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::error::ChunkError;
use crate::models::SummaryRow;
use crate::tables::{read_summary_table, write_summary_table};

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

use crate::log_info;

/// Stack run-level summary tables into one, in sorted path order.
///
/// When `expect` is given the number of tables must match it exactly.
pub fn concat_runs(tables: &[PathBuf], expect: Option<usize>, out: &Path) -> Result<usize> {
    if let Some(expected) = expect {
        if tables.len() != expected {
            return Err(ChunkError::RunCount {
                expected,
                found: tables.len(),
            }
            .into());
        }
    }

    let mut sorted = tables.to_vec();
    sorted.sort();

    let mut rows: Vec<SummaryRow> = Vec::new();
    for table in &sorted {
        log_info!("appending {}", table.display());
        rows.extend(read_summary_table(table)?);
    }

    write_summary_table(out, &rows)?;
    Ok(rows.len())
}
