use crate::error::ChunkError;

/// Split a tab-delimited line, ignoring a trailing carriage return.
pub fn split_row(line: &str) -> Vec<&str> {
    line.trim_end_matches('\r').split('\t').collect()
}

/// Data lines of a table paired with their 1-based line numbers.
pub fn numbered_lines(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line))
        .filter(|(_, line)| !line.trim().is_empty())
}

pub fn parse_f64(value: &str, field: &str, table: &str, line: usize) -> Result<f64, ChunkError> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| ChunkError::InvalidField {
            table: table.to_string(),
            line,
            field: field.to_string(),
            value: value.to_string(),
        })
}

pub fn looks_numeric(value: &str) -> bool {
    value.trim().parse::<f64>().is_ok()
}

/// Position of a named column in a header row.
pub fn column_index(
    header: &[&str],
    column: &'static str,
    table: &str,
) -> Result<usize, ChunkError> {
    header
        .iter()
        .position(|name| name.trim() == column)
        .ok_or_else(|| ChunkError::MissingColumn {
            table: table.to_string(),
            column,
        })
}

/// Fixed-precision rendering; non-finite values use the lowercase spellings
/// the comparator expects.
pub fn format_fixed(value: f64, decimals: usize) -> String {
    if value.is_nan() {
        "nan".to_string()
    } else if value == f64::INFINITY {
        "inf".to_string()
    } else if value == f64::NEG_INFINITY {
        "-inf".to_string()
    } else {
        format!("{value:.decimals$}")
    }
}
