use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::error::ChunkError;
use crate::segmentation::ChunkingConfig;
use crate::subject::SubjectConfig;

/// Stimulus display size in pixels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScreenSize {
    pub width: u32,
    pub height: u32,
}

impl Default for ScreenSize {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

impl ScreenSize {
    /// Build from a raw `[width, height]` list as given on the command line.
    pub fn from_values(values: &[u32]) -> Result<Self, ChunkError> {
        match values {
            [width, height] if *width > 0 && *height > 0 => Ok(Self {
                width: *width,
                height: *height,
            }),
            _ => Err(ChunkError::InvalidScreenSize(values.to_vec())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct ComparatorSettings {
    pub program: String,
    pub flags: Vec<String>,
    pub output_name: String,
}

impl Default for ComparatorSettings {
    fn default() -> Self {
        Self {
            program: "multimatch".into(),
            flags: ["--remodnav", "--pursuit", "keep", "-o", "single-row"]
                .into_iter()
                .map(String::from)
                .collect(),
            output_name: "comparisons.tsv".into(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub chunking: ChunkingConfig,
    pub screen: ScreenSize,
    pub comparator: ComparatorSettings,
    pub subject: SubjectConfig,
}

pub struct SettingsStore {
    path: PathBuf,
    data: Settings,
}

impl SettingsStore {
    /// Load settings from `path`, or defaults if the file does not exist yet.
    pub fn new(path: PathBuf) -> Result<Self> {
        let data = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read settings from {}", path.display()))?;
            serde_json::from_str(&contents)
                .with_context(|| format!("Failed to parse settings in {}", path.display()))?
        } else {
            Settings::default()
        };

        Ok(Self { path, data })
    }

    pub fn settings(&self) -> &Settings {
        &self.data
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the held settings and write them to the store's file.
    pub fn save(&mut self, settings: Settings) -> Result<()> {
        self.data = settings;
        self.persist()
    }

    fn persist(&self) -> Result<()> {
        let serialized = serde_json::to_string_pretty(&self.data)?;
        fs::write(&self.path, serialized)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))
    }
}
