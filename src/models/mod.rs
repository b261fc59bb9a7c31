pub mod annotation;
pub mod gaze;
pub mod manifest;
pub mod scores;
pub mod window;

pub use annotation::AnnotationInterval;
pub use gaze::{GazeEvent, GAZE_FIELDS};
pub use manifest::{ChunkManifest, ManifestWindow};
pub use scores::{SimilarityScores, SummaryRow, SIMILARITY_FIELDS};
pub use window::Window;
