use serde::{Deserialize, Serialize};

/// Column names of the five similarity measures, in comparator output order.
pub const SIMILARITY_FIELDS: [&str; 5] = [
    "vector_sim",
    "direction_sim",
    "length_sim",
    "position_sim",
    "duration_sim",
];

/// The five similarity measures returned for one pair of scanpaths.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SimilarityScores {
    pub vector: f64,
    pub direction: f64,
    pub length: f64,
    pub position: f64,
    pub duration: f64,
}

impl SimilarityScores {
    pub fn from_array(values: [f64; 5]) -> Self {
        Self {
            vector: values[0],
            direction: values[1],
            length: values[2],
            position: values[3],
            duration: values[4],
        }
    }

    pub fn to_array(&self) -> [f64; 5] {
        [
            self.vector,
            self.direction,
            self.length,
            self.position,
            self.duration,
        ]
    }
}

/// One row of a run-level summary: a scanpath's timing plus its mean scores.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SummaryRow {
    pub onset: f64,
    pub duration: f64,
    pub scores: SimilarityScores,
}
