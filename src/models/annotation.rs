use serde::{Deserialize, Serialize};

/// One contiguous shot of the stimulus, as given by the location annotation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnnotationInterval {
    pub onset: f64,
    pub duration: f64,
    pub locale: String,
}

impl AnnotationInterval {
    pub fn new(onset: f64, duration: f64, locale: impl Into<String>) -> Self {
        Self {
            onset,
            duration,
            locale: locale.into(),
        }
    }

    pub fn end(&self) -> f64 {
        self.onset + self.duration
    }

    pub fn is_short(&self, min_duration: f64) -> bool {
        self.duration < min_duration
    }
}
