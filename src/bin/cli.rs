// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! diredge CLI

use anyhow::Result;
use clap::{Parser, Subcommand};
use diredge::cli::runner::RAW_EXTENSION;
use diredge::cli::{BatchReport, DirectedEdgeRun, FaceIndexRun, Reporter, RunSummary, Runner};
use diredge::logging::init_logging;
use diredge::{MatchStrategy, PipelineConfig};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Parser)]
#[command(name = "diredge")]
#[command(about = "Triangle soup to directed-edge mesh conversion with manifold and genus checks", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Matching strategy (brute_force, hashed, parallel)
    #[arg(short, long, global = true)]
    strategy: Option<MatchStrategy>,

    /// Config file (defaults to ./diredge.toml when present)
    #[arg(short, long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Print a JSON summary instead of the colored report
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a raw .tri file into face-index form
    FaceIndex {
        /// Input .tri file
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Convert a .face file into directed-edge form
    DirectedEdge {
        /// Input .face file
        input: PathBuf,

        /// Output directory
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },

    /// Run both stages on a raw .tri file
    Run {
        /// Input .tri file
        input: PathBuf,
    },

    /// Run both stages on every .tri file under a directory
    Batch {
        /// Directory to search
        dir: PathBuf,
    },

    /// Re-check an existing .diredge file
    Check {
        /// Input .diredge file
        input: PathBuf,
    },

    /// Show version information
    Version,
}

fn main() {
    let cli = Cli::parse();

    if let Err(err) = run(cli) {
        Reporter::report_error(&format!("{:#}", err));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = match &cli.config {
        Some(path) => PipelineConfig::load_from(path)?,
        None => PipelineConfig::load()?,
    };
    if let Some(strategy) = cli.strategy {
        config.strategy = strategy;
    }

    let level = if cli.verbose {
        Some("debug")
    } else {
        config.log_level.as_deref()
    };
    init_logging(level);

    if cli.verbose && !cli.json {
        Reporter::report_info(&format!("Strategy: {}", config.strategy));
    }

    let runner = Runner::from_config(&config);

    match &cli.command {
        Commands::FaceIndex { input, output } => {
            let out_dir = output.as_deref().unwrap_or(&config.face_output_dir);
            let run = runner.face_index(input, out_dir)?;
            show_face_index(&run, config.strategy, cli.json)?;
        }
        Commands::DirectedEdge { input, output } => {
            let out_dir = output.as_deref().unwrap_or(&config.diredge_output_dir);
            let run = runner.directed_edge(input, out_dir)?;
            show_directed_edge(&run, config.strategy, cli.json)?;
        }
        Commands::Run { input } => {
            run_command(&runner, input, &config, cli.json)?;
        }
        Commands::Batch { dir } => {
            batch_command(&runner, dir, &config, cli.json)?;
        }
        Commands::Check { input } => {
            let run = runner.check(input)?;
            show_directed_edge(&run, config.strategy, cli.json)?;
        }
        Commands::Version => {
            println!("diredge v{}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}

fn show_face_index(run: &FaceIndexRun, strategy: MatchStrategy, json: bool) -> Result<()> {
    if json {
        let summary = RunSummary::from_face_index(run, strategy);
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    Reporter::report_face_index(run, strategy);
    if run.outcome.genus.is_none() {
        Reporter::report_warning("Mesh is not manifold, genus not computed");
    }
    Ok(())
}

fn show_directed_edge(run: &DirectedEdgeRun, strategy: MatchStrategy, json: bool) -> Result<()> {
    if json {
        let summary = RunSummary::from_directed_edge(run, strategy);
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    Reporter::report_directed_edge(run);
    if run.outcome.genus.is_none() {
        Reporter::report_warning("Mesh is not manifold, genus not computed");
    }
    Ok(())
}

fn run_command(runner: &Runner, input: &Path, config: &PipelineConfig, json: bool) -> Result<()> {
    let stage1 = runner.face_index(input, &config.face_output_dir)?;
    if !json {
        show_face_index(&stage1, config.strategy, false)?;
    }
    let stage2 = runner.directed_edge(&stage1.output, &config.diredge_output_dir);

    if json {
        // Both stages go out as a single document
        let mut report = BatchReport::new();
        report.add_pipeline(&stage1, &stage2, config.strategy);
        println!("{}", serde_json::to_string_pretty(&report)?);
        return stage2.map(|_| ());
    }

    show_directed_edge(&stage2?, config.strategy, false)
}

fn batch_command(runner: &Runner, dir: &Path, config: &PipelineConfig, json: bool) -> Result<()> {
    let inputs: Vec<PathBuf> = WalkDir::new(dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().is_some_and(|ext| ext == RAW_EXTENSION))
        .collect();

    if inputs.is_empty() {
        anyhow::bail!("No .{} files found in {}", RAW_EXTENSION, dir.display());
    }

    let progress = (!json).then(|| {
        let pb = ProgressBar::new(inputs.len() as u64);
        if let Ok(style) = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
        {
            pb.set_style(style.progress_chars("#>-"));
        }
        pb
    });

    let mut report = BatchReport::new();
    for input in &inputs {
        if let Some(ref pb) = progress {
            pb.set_message(input.display().to_string());
        }

        match runner.face_index(input, &config.face_output_dir) {
            Ok(stage1) => {
                let stage2 = runner.directed_edge(&stage1.output, &config.diredge_output_dir);
                report.add_pipeline(&stage1, &stage2, config.strategy);
            }
            Err(err) => report.add_error(input.clone(), format!("{:#}", err)),
        }

        if let Some(ref pb) = progress {
            pb.inc(1);
        }
    }

    if let Some(pb) = progress {
        pb.finish_with_message("done");
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        Reporter::report_batch(&report);
        if report.errors.is_empty() {
            Reporter::success(&format!("Converted {} files", inputs.len()));
        }
    }

    if !report.errors.is_empty() {
        anyhow::bail!("{} of {} files failed", report.errors.len(), inputs.len());
    }
    Ok(())
}
