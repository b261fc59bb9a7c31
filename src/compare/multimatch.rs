use std::{path::Path, process::Command};

use anyhow::{Context, Result};

use crate::error::ChunkError;
use crate::models::SimilarityScores;
use crate::settings::{ComparatorSettings, ScreenSize};

use super::SimilarityComparator;

/// Runs the MultiMatch command-line tool once per pair.
pub struct MultiMatch {
    program: String,
    flags: Vec<String>,
}

impl MultiMatch {
    pub fn new(settings: &ComparatorSettings) -> Self {
        Self {
            program: settings.program.clone(),
            flags: settings.flags.clone(),
        }
    }
}

impl SimilarityComparator for MultiMatch {
    fn compare(&self, first: &Path, second: &Path, screen: ScreenSize) -> Result<SimilarityScores> {
        let output = Command::new(&self.program)
            .arg(first)
            .arg(second)
            .arg(screen.width.to_string())
            .arg(screen.height.to_string())
            .args(&self.flags)
            .output()
            .with_context(|| format!("failed to spawn {}", self.program))?;

        if !output.status.success() {
            return Err(ChunkError::Comparator(format!(
                "{} exited with {} comparing {} and {}: {}",
                self.program,
                output.status,
                first.display(),
                second.display(),
                String::from_utf8_lossy(&output.stderr).trim()
            ))
            .into());
        }

        Ok(parse_single_row(&String::from_utf8_lossy(&output.stdout))?)
    }
}

/// Parse the first non-empty line of comparator output as five scores.
pub fn parse_single_row(stdout: &str) -> Result<SimilarityScores, ChunkError> {
    let line = stdout
        .lines()
        .find(|line| !line.trim().is_empty())
        .ok_or_else(|| ChunkError::Comparator("empty comparator output".into()))?;

    let values: Vec<f64> = line
        .split_whitespace()
        .map(|field| field.parse::<f64>())
        .collect::<Result<_, _>>()
        .map_err(|_| ChunkError::Comparator(format!("non-numeric comparator output '{line}'")))?;

    match values.as_slice() {
        [vector, direction, length, position, duration] => Ok(SimilarityScores {
            vector: *vector,
            direction: *direction,
            length: *length,
            position: *position,
            duration: *duration,
        }),
        _ => Err(ChunkError::Comparator(format!(
            "expected 5 scores, got {} in '{line}'",
            values.len()
        ))),
    }
}
