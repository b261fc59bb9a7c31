//! Command-Line Interface

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Scene-aware scanpath chunking and comparison for movie eye-tracking data
#[derive(Parser, Debug)]
#[command(name = "scanchunk")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Settings file path (JSON)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Chunk one subject's eye-movement events into scene-bounded scanpaths
    Chunk {
        /// Event file of one movie segment
        infile: PathBuf,

        /// Location annotation (onset, duration, locale)
        annotation: PathBuf,

        /// Output root; scanpaths land in scanpath-<n>/ below it
        outpath: PathBuf,

        /// Stimulus screen size as width and height
        #[arg(short, long, num_args = 1..)]
        screensize: Option<Vec<u32>>,

        /// Retrieve input files with `datalad get` first
        #[arg(long)]
        fetch: bool,
    },

    /// Print the merged annotation
    Merge {
        /// Location annotation (onset, duration, locale)
        annotation: PathBuf,

        /// Shots shorter than this are fused with same-locale neighbours
        #[arg(short, long)]
        min_duration: Option<f64>,
    },

    /// Compare all subject pairs in every scanpath directory of a run
    Compare {
        /// Run directory holding scanpath-<n>/ directories
        run_dir: PathBuf,

        /// Name of the per-scanpath comparison file
        #[arg(long)]
        output_name: Option<String>,
    },

    /// Average pairwise similarity per scanpath across runs
    SceneMeans {
        /// Directory holding run-<r>/ directories
        root: PathBuf,

        /// Runs to include
        #[arg(short, long, num_args = 1.., default_values_t = [1, 2, 3, 4, 5, 6, 7, 8])]
        runs: Vec<u32>,

        /// Output table
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Average pairwise result tables of one run row by row
    RunMeans {
        /// Directory holding the pairwise tables
        dir: PathBuf,

        /// Output table
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Concatenate run summaries into one table
    Concat {
        /// Run summary tables
        #[arg(required = true)]
        tables: Vec<PathBuf>,

        /// Output table
        #[arg(short, long)]
        output: PathBuf,

        /// Fail unless exactly this many tables are given
        #[arg(long)]
        expect: Option<usize>,
    },

    /// Write the settings file
    Init {
        /// Overwrite with defaults instead of the currently loaded settings
        #[arg(short, long)]
        force: bool,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunk_arguments() {
        let cli = Cli::parse_from([
            "scanchunk",
            "chunk",
            "sub-01/events.tsv",
            "locations.tsv",
            "out",
            "--screensize",
            "1920",
            "1080",
        ]);
        match cli.command {
            Commands::Chunk {
                screensize, fetch, ..
            } => {
                assert_eq!(screensize, Some(vec![1920, 1080]));
                assert!(!fetch);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn scene_means_default_runs() {
        let cli = Cli::parse_from(["scanchunk", "scene-means", "scanpaths", "-o", "allruns.tsv"]);
        match cli.command {
            Commands::SceneMeans { runs, .. } => assert_eq!(runs, (1..=8).collect::<Vec<u32>>()),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn init_force_flag() {
        let cli = Cli::parse_from(["scanchunk", "--config", "s.json", "init", "--force"]);
        assert_eq!(cli.config, Some(PathBuf::from("s.json")));
        assert!(matches!(cli.command, Commands::Init { force: true }));
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
