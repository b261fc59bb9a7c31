pub mod algorithm;
pub mod config;
pub mod merge;
pub mod onsets;
pub mod search;
pub mod windows;

pub use algorithm::{plan_windows, WindowPlan};
pub use config::ChunkingConfig;
