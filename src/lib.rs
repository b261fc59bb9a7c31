pub mod chunker;
pub mod cli;
pub mod compare;
pub mod error;
pub mod fetch;
pub mod metrics;
pub mod models;
pub mod segmentation;
pub mod settings;
pub mod subject;
pub mod tables;
mod utils;

use std::path::PathBuf;

use anyhow::Result;
use log::LevelFilter;

use chunker::chunk_recording;
use cli::{Cli, Commands};
use compare::{compare_run, MultiMatch};
use fetch::{DataladGet, LocalFiles};
use metrics::{collect_scene_means, concat_runs, find_pairwise_tables, run_means};
use segmentation::merge::merge_short_shots;
use settings::{ScreenSize, Settings, SettingsStore};
use tables::{read_annotation, read_summary_table, write_summary_table};

const DEFAULT_SETTINGS_FILE: &str = "scanchunk.json";

pub fn run() -> Result<()> {
    let cli = Cli::parse_args();

    // Initialize logging (RUST_LOG overrides the default level)
    let default_level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    env_logger::Builder::new()
        .filter_level(default_level)
        .parse_default_env()
        .init();

    let settings_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE));
    let mut store = SettingsStore::new(settings_path)?;
    let mut settings = store.settings().clone();

    match cli.command {
        Commands::Chunk {
            infile,
            annotation,
            outpath,
            screensize,
            fetch,
        } => {
            if let Some(values) = screensize {
                settings.screen = ScreenSize::from_values(&values)?;
            }
            log::info!(
                "chunking for a {}x{} stimulus display",
                settings.screen.width,
                settings.screen.height
            );

            let report = if fetch {
                chunk_recording(&DataladGet::default(), &settings, &infile, &annotation, &outpath)?
            } else {
                chunk_recording(&LocalFiles, &settings, &infile, &annotation, &outpath)?
            };
            log::info!(
                "{}: {} scanpaths, manifest at {}",
                report.subject,
                report.chunk_paths.len(),
                report.manifest_path.display()
            );
        }
        Commands::Merge {
            annotation,
            min_duration,
        } => {
            let min_duration =
                min_duration.unwrap_or(settings.chunking.min_shot_duration_secs);
            let shots = read_annotation(&annotation)?;
            println!("onset\tduration\tlocale");
            for shot in merge_short_shots(&shots, min_duration) {
                println!("{}\t{}\t{}", shot.onset, shot.duration, shot.locale);
            }
        }
        Commands::Compare {
            run_dir,
            output_name,
        } => {
            let output_name = output_name.unwrap_or(settings.comparator.output_name.clone());
            let comparator = MultiMatch::new(&settings.comparator);
            let total = compare_run(&comparator, &run_dir, settings.screen, &output_name)?;
            log::info!("{total} comparisons in {}", run_dir.display());
        }
        Commands::SceneMeans {
            root,
            runs,
            output,
        } => {
            let means =
                collect_scene_means(&root, &runs, &settings.comparator.output_name)?;
            tables::writer::write_scores_table(&output, &means)?;
        }
        Commands::RunMeans { dir, output } => {
            let mut loaded = Vec::new();
            for path in find_pairwise_tables(&dir)? {
                loaded.push((path.display().to_string(), read_summary_table(&path)?));
            }
            log::info!("averaging {} pairwise tables", loaded.len());
            write_summary_table(&output, &run_means(&loaded)?)?;
        }
        Commands::Concat {
            tables,
            output,
            expect,
        } => {
            let rows = concat_runs(&tables, expect, &output)?;
            log::info!("wrote {rows} rows to {}", output.display());
        }
        Commands::Init { force } => {
            let settings = if force { Settings::default() } else { settings };
            store.save(settings)?;
            log::info!("wrote settings to {}", store.path().display());
        }
    }

    Ok(())
}
