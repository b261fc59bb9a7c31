use std::{fs, path::Path};

use anyhow::{Context, Result};

use crate::error::ChunkError;
use crate::models::{
    AnnotationInterval, GazeEvent, SimilarityScores, SummaryRow, GAZE_FIELDS, SIMILARITY_FIELDS,
};

use super::helpers::{column_index, looks_numeric, numbered_lines, parse_f64, split_row};

fn read_table(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read table {}", path.display()))
}

fn table_name(path: &Path) -> String {
    path.display().to_string()
}

/// Read a gaze-event table from disk.
pub fn read_gaze_events(path: &Path) -> Result<Vec<GazeEvent>> {
    let content = read_table(path)?;
    Ok(parse_gaze_events(&content, &table_name(path))?)
}

/// Parse the 11-column event table. A leading header row is recognised by a
/// non-numeric first field and skipped.
pub fn parse_gaze_events(content: &str, table: &str) -> Result<Vec<GazeEvent>, ChunkError> {
    let mut events = Vec::new();

    for (position, (line_no, line)) in numbered_lines(content).enumerate() {
        let fields = split_row(line);
        if fields.len() != GAZE_FIELDS.len() {
            return Err(ChunkError::ColumnCount {
                table: table.to_string(),
                line: line_no,
                found: fields.len(),
                expected: GAZE_FIELDS.len(),
            });
        }

        if position == 0 && !looks_numeric(fields[0]) {
            continue;
        }

        let num = |idx: usize| parse_f64(fields[idx], GAZE_FIELDS[idx], table, line_no);
        events.push(GazeEvent {
            onset: num(0)?,
            duration: num(1)?,
            label: fields[2].trim().to_string(),
            start_x: num(3)?,
            start_y: num(4)?,
            end_x: num(5)?,
            end_y: num(6)?,
            amp: num(7)?,
            peak_vel: num(8)?,
            med_vel: num(9)?,
            avg_vel: num(10)?,
        });
    }

    if events.is_empty() {
        return Err(ChunkError::EmptyTable(table.to_string()));
    }

    Ok(events)
}

/// Read a location annotation from disk.
pub fn read_annotation(path: &Path) -> Result<Vec<AnnotationInterval>> {
    let content = read_table(path)?;
    Ok(parse_annotation(&content, &table_name(path))?)
}

/// Parse an annotation with a header naming at least `onset`, `duration`
/// and `locale`. Other columns are ignored.
pub fn parse_annotation(
    content: &str,
    table: &str,
) -> Result<Vec<AnnotationInterval>, ChunkError> {
    let mut lines = numbered_lines(content);
    let (_, header_line) = lines
        .next()
        .ok_or_else(|| ChunkError::EmptyTable(table.to_string()))?;
    let header = split_row(header_line);

    let onset_col = column_index(&header, "onset", table)?;
    let duration_col = column_index(&header, "duration", table)?;
    let locale_col = column_index(&header, "locale", table)?;

    let mut shots = Vec::new();
    for (line_no, line) in lines {
        let fields = split_row(line);
        if fields.len() != header.len() {
            return Err(ChunkError::ColumnCount {
                table: table.to_string(),
                line: line_no,
                found: fields.len(),
                expected: header.len(),
            });
        }

        shots.push(AnnotationInterval {
            onset: parse_f64(fields[onset_col], "onset", table, line_no)?,
            duration: parse_f64(fields[duration_col], "duration", table, line_no)?,
            locale: fields[locale_col].trim().to_string(),
        });
    }

    if shots.is_empty() {
        return Err(ChunkError::EmptyTable(table.to_string()));
    }

    Ok(shots)
}

/// Read a headerless comparator output table.
pub fn read_score_rows(path: &Path) -> Result<Vec<SimilarityScores>> {
    let content = read_table(path)?;
    Ok(parse_score_rows(&content, &table_name(path))?)
}

/// Parse headerless rows whose first five columns are the similarity
/// measures. Trailing columns are ignored.
pub fn parse_score_rows(content: &str, table: &str) -> Result<Vec<SimilarityScores>, ChunkError> {
    numbered_lines(content)
        .map(|(line_no, line)| parse_score_fields(&split_row(line), table, line_no))
        .collect()
}

pub(crate) fn parse_score_fields(
    fields: &[&str],
    table: &str,
    line: usize,
) -> Result<SimilarityScores, ChunkError> {
    if fields.len() < SIMILARITY_FIELDS.len() {
        return Err(ChunkError::ColumnCount {
            table: table.to_string(),
            line,
            found: fields.len(),
            expected: SIMILARITY_FIELDS.len(),
        });
    }

    let mut values = [0.0; 5];
    for (idx, value) in values.iter_mut().enumerate() {
        *value = parse_f64(fields[idx], SIMILARITY_FIELDS[idx], table, line)?;
    }
    Ok(SimilarityScores::from_array(values))
}

/// Read a run-level summary table (onset, duration and the five measures,
/// located by header name).
pub fn read_summary_table(path: &Path) -> Result<Vec<SummaryRow>> {
    let content = read_table(path)?;
    Ok(parse_summary_table(&content, &table_name(path))?)
}

pub fn parse_summary_table(content: &str, table: &str) -> Result<Vec<SummaryRow>, ChunkError> {
    let mut lines = numbered_lines(content);
    let (_, header_line) = lines
        .next()
        .ok_or_else(|| ChunkError::EmptyTable(table.to_string()))?;
    let header = split_row(header_line);

    let onset_col = column_index(&header, "onset", table)?;
    let duration_col = column_index(&header, "duration", table)?;
    let mut score_cols = [0usize; 5];
    for (slot, name) in score_cols.iter_mut().zip(SIMILARITY_FIELDS) {
        *slot = column_index(&header, name, table)?;
    }

    lines
        .map(|(line_no, line)| {
            let fields = split_row(line);
            if fields.len() != header.len() {
                return Err(ChunkError::ColumnCount {
                    table: table.to_string(),
                    line: line_no,
                    found: fields.len(),
                    expected: header.len(),
                });
            }

            let mut values = [0.0; 5];
            for (idx, value) in values.iter_mut().enumerate() {
                *value = parse_f64(fields[score_cols[idx]], SIMILARITY_FIELDS[idx], table, line_no)?;
            }

            Ok(SummaryRow {
                onset: parse_f64(fields[onset_col], "onset", table, line_no)?,
                duration: parse_f64(fields[duration_col], "duration", table, line_no)?,
                scores: SimilarityScores::from_array(values),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EVENTS: &str = "onset\tduration\tlabel\tstart_x\tstart_y\tend_x\tend_y\tamp\tpeak_vel\tmed_vel\tavg_vel\n\
        0.0\t0.25\tFIXA\t640.1\t360.2\t641.0\t361.0\t0.05\t12.5\t8.1\t9.3\n\
        0.25\t0.04\tSACC\t641.0\t361.0\t700.4\t380.9\t2.1\t310.0\tnan\t150.2\n";

    #[test]
    fn parses_events_with_header() {
        let events = parse_gaze_events(EVENTS, "events").unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[1].label, "SACC");
        assert_eq!(events[1].end_x, 700.4);
        assert!(events[1].med_vel.is_nan());
    }

    #[test]
    fn parses_events_without_header() {
        let body: String = EVENTS.lines().skip(1).map(|l| format!("{l}\n")).collect();
        assert_eq!(parse_gaze_events(&body, "events").unwrap().len(), 2);
    }

    #[test]
    fn rejects_wrong_column_count() {
        let content = "0.0\t0.25\tFIXA\t1\t2\n";
        let err = parse_gaze_events(content, "events").unwrap_err();
        assert!(matches!(
            err,
            ChunkError::ColumnCount {
                line: 1,
                found: 5,
                expected: 11,
                ..
            }
        ));
    }

    #[test]
    fn rejects_non_numeric_field() {
        let content = "0.0\t0.25\tFIXA\tx\t2\t3\t4\t5\t6\t7\t8\n";
        let err = parse_gaze_events(content, "events").unwrap_err();
        assert!(matches!(err, ChunkError::InvalidField { ref field, .. } if field == "start_x"));
    }

    #[test]
    fn header_only_event_table_is_rejected() {
        let header: String = EVENTS.lines().take(1).map(|l| format!("{l}\n")).collect();
        let err = parse_gaze_events(&header, "events").unwrap_err();
        assert!(matches!(err, ChunkError::EmptyTable(ref name) if name == "events"));
        assert!(matches!(
            parse_gaze_events("\n\n", "events"),
            Err(ChunkError::EmptyTable(_))
        ));
    }

    #[test]
    fn parses_annotation_by_column_name() {
        let content = "onset\tduration\tlocale\tnight\n0\t3\tA\tfalse\n3\t2\tA\ttrue\n";
        let shots = parse_annotation(content, "locations").unwrap();
        assert_eq!(
            shots,
            vec![
                AnnotationInterval::new(0.0, 3.0, "A"),
                AnnotationInterval::new(3.0, 2.0, "A"),
            ]
        );
    }

    #[test]
    fn annotation_without_locale_is_rejected() {
        let content = "onset\tduration\n0\t3\n";
        let err = parse_annotation(content, "locations").unwrap_err();
        assert!(matches!(
            err,
            ChunkError::MissingColumn {
                column: "locale",
                ..
            }
        ));
    }

    #[test]
    fn annotation_without_rows_is_rejected() {
        let err = parse_annotation("onset\tduration\tlocale\n", "locations").unwrap_err();
        assert!(matches!(err, ChunkError::EmptyTable(_)));
    }

    #[test]
    fn score_rows_ignore_trailing_columns() {
        let rows = parse_score_rows("0.9\t0.8\t0.7\t0.6\t0.5\textra\n", "cmp").unwrap();
        assert_eq!(rows[0].to_array(), [0.9, 0.8, 0.7, 0.6, 0.5]);
    }

    #[test]
    fn summary_table_columns_found_by_name() {
        let content = "\tonset\tduration\tvector_sim\tdirection_sim\tlength_sim\tposition_sim\tduration_sim\n\
            0\t4.97\t4.92\t0.9\t0.8\t0.7\t0.6\t0.5\n";
        let rows = parse_summary_table(content, "run").unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].onset, 4.97);
        assert_eq!(rows[0].scores.duration, 0.5);
    }
}
