//! Pairwise scanpath comparison through an external similarity tool.

pub mod multimatch;
pub mod pairs;

use std::path::Path;

use anyhow::Result;

use crate::models::SimilarityScores;
use crate::settings::ScreenSize;

pub use multimatch::MultiMatch;
pub use pairs::{compare_run, compare_scanpath_dir, discover_subjects};

/// Scores two chunked scanpath files against each other.
pub trait SimilarityComparator {
    fn compare(&self, first: &Path, second: &Path, screen: ScreenSize) -> Result<SimilarityScores>;
}
