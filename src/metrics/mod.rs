//! Reductions over pairwise comparison results: per-scanpath means, per-run
//! means across pairwise tables, and concatenation of run summaries.

pub mod concat;
pub mod means;

pub use concat::concat_runs;
pub use means::{collect_scene_means, find_pairwise_tables, mean_scores, nanmean, run_means, scene_means};
