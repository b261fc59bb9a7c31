pub mod helpers;
pub mod layout;
pub mod reader;
pub mod writer;

pub use layout::{list_scanpath_dirs, run_dir, scanpath_dir, scanpath_file_name};
pub use reader::{read_annotation, read_gaze_events, read_score_rows, read_summary_table};
pub use writer::{chunk_and_save, write_manifest, write_summary_table};
