use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ChunkError;

/// How a subject identifier is recovered from a recording's path.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct SubjectConfig {
    /// The first path component containing this marker names the subject
    pub marker: String,
}

impl Default for SubjectConfig {
    fn default() -> Self {
        Self {
            marker: "sub".into(),
        }
    }
}

impl SubjectConfig {
    pub fn subject_from_path(&self, path: &Path) -> Result<String, ChunkError> {
        path.components()
            .map(|component| component.as_os_str().to_string_lossy())
            .find(|component| component.contains(self.marker.as_str()))
            .map(|component| component.into_owned())
            .ok_or_else(|| ChunkError::MissingSubject {
                marker: self.marker.clone(),
                path: path.to_path_buf(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_matching_component_wins() {
        let config = SubjectConfig::default();
        let path = Path::new("data/sub-03/beh/sub-03_task-movie_run-2_events.tsv");
        assert_eq!(config.subject_from_path(path).unwrap(), "sub-03");
    }

    #[test]
    fn custom_marker() {
        let config = SubjectConfig {
            marker: "participant".into(),
        };
        let path = Path::new("/srv/participant_12/gaze.tsv");
        assert_eq!(config.subject_from_path(path).unwrap(), "participant_12");
    }

    #[test]
    fn missing_subject_is_an_error() {
        let err = SubjectConfig::default()
            .subject_from_path(Path::new("data/gaze.tsv"))
            .unwrap_err();
        assert!(matches!(err, ChunkError::MissingSubject { .. }));
    }
}
