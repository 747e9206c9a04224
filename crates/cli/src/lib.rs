//! CLI for arraybench.
//!
//! This crate provides the `arraybench` command: `run` times the ndarray
//! scenario catalog and writes the harness JSON and summary, `compare` joins
//! a harness file with BenchmarkDotNet artifacts and writes the comparison
//! reports, and `status` describes the configuration.

#![warn(missing_docs, rust_2018_idioms)]
#![deny(unsafe_code)]

mod console;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use arraybench_compare::aliases::{METHOD_ALIASES, NAME_ALIASES};
use arraybench_compare::{compare, write_reports, ArtifactSource, CanonicalOp, HarnessFile, ReportFormat};
use arraybench_core::{DType, LogFormat, Settings, SizeTier, TypeSet};
use arraybench_harness::catalog::{self, thresholds};
use arraybench_harness::{io, run_scenarios, CatalogConfig, Suite, Timing};
use clap::{Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;

/// Default BenchmarkDotNet results directory.
pub const DEFAULT_CANDIDATE_DIR: &str = "BenchmarkDotNet.Artifacts/results";

/// Default comparison report base path.
pub const DEFAULT_REPORT_BASE: &str = "benchmark-report";

/// Arraybench CLI.
#[derive(Parser, Debug)]
#[command(name = "arraybench")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Settings file (defaults to `arraybench.toml` when present).
    #[arg(long, global = true, env = "ARRAYBENCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level; `RUST_LOG` takes precedence.
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format: pretty, compact or json.
    #[arg(long, global = true)]
    pub log_format: Option<LogFormat>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Time the scenario catalog and write the results JSON and summary.
    ///
    /// Results are written to `<output_dir>/benchmark-results.json` with a
    /// `summary.md` next to it unless `--output` is given.
    Run(RunArgs),

    /// Join harness results with BenchmarkDotNet artifacts.
    ///
    /// Writes `<output>.json`, `<output>.csv` and `<output>.md`, or only the
    /// format selected by `--format`.
    Compare(CompareArgs),

    /// Show version, size tiers, type sets and alias tables.
    Status {
        /// Also list every suite and canonical operation.
        #[arg(short, long)]
        detailed: bool,
    },
}

/// Options for `arraybench run`.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Suites to run: `all` or keys such as `arithmetic,reduction`.
    #[arg(short, long, value_delimiter = ',', default_value = "all")]
    pub suite: Vec<String>,

    /// Fewer repetitions, common types and the reduced size sweep.
    #[arg(short, long)]
    pub quick: bool,

    /// Element count for size-parameterized suites.
    #[arg(long, conflicts_with = "size")]
    pub n: Option<usize>,

    /// Named size tier: scalar, tiny, small, medium or large.
    #[arg(long)]
    pub size: Option<SizeTier>,

    /// Type set (`all`, `arithmetic`, `common`, `transcendental`) or dtype names.
    #[arg(short = 't', long = "type", value_delimiter = ',')]
    pub types: Vec<String>,

    /// Measured iterations per scenario.
    #[arg(long)]
    pub iterations: Option<usize>,

    /// Untimed warmup runs per scenario.
    #[arg(long)]
    pub warmup: Option<usize>,

    /// Seed for generated inputs.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the result records as JSON on stdout.
    #[arg(long)]
    pub json: bool,

    /// Results JSON path.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Options for `arraybench compare`.
#[derive(Args, Debug)]
pub struct CompareArgs {
    /// Harness results JSON (defaults to the run output).
    #[arg(short, long)]
    pub baseline: Option<PathBuf>,

    /// BenchmarkDotNet report file or results directory.
    #[arg(short, long, default_value = DEFAULT_CANDIDATE_DIR)]
    pub candidate: PathBuf,

    /// Report base path, without extension.
    #[arg(short, long, default_value = DEFAULT_REPORT_BASE)]
    pub output: PathBuf,

    /// Reports to write: all, json, csv or md.
    #[arg(short, long, default_value = "all")]
    pub format: ReportFormat,

    /// Element count of the external records to compare against.
    #[arg(long)]
    pub comparison_n: Option<usize>,
}

fn setup_logging(settings: &Settings, level: Option<&str>, format: Option<LogFormat>) {
    let level = level.unwrap_or(&settings.log_level);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    match format.unwrap_or(settings.log_format) {
        LogFormat::Json => subscriber.json().init(),
        LogFormat::Compact => subscriber.compact().init(),
        LogFormat::Pretty => subscriber.pretty().init(),
    }
}

/// Parse suite names, `all` selecting every suite. Order follows the
/// catalog regardless of argument order.
pub fn resolve_suites(names: &[String]) -> Result<Vec<Suite>> {
    if names.is_empty() || names.iter().any(|n| n.trim().eq_ignore_ascii_case("all")) {
        return Ok(Suite::ALL.to_vec());
    }
    let selected = names
        .iter()
        .map(|name| name.parse::<Suite>())
        .collect::<arraybench_core::Result<Vec<_>>>()?;
    Ok(Suite::ALL.iter().copied().filter(|s| selected.contains(s)).collect())
}

/// Expand `--type` values into dtypes. Each value is a type-set name or a
/// dtype alias; nothing given means common types in quick mode and all
/// types otherwise.
pub fn resolve_dtypes(values: &[String], quick: bool) -> Result<Vec<DType>> {
    if values.is_empty() {
        let set = if quick { TypeSet::Common } else { TypeSet::All };
        return Ok(set.dtypes().to_vec());
    }

    let mut dtypes: Vec<DType> = Vec::new();
    for value in values {
        let expanded = match value.parse::<TypeSet>() {
            Ok(set) => set.dtypes().to_vec(),
            Err(_) => vec![value.parse::<DType>()?],
        };
        for dtype in expanded {
            if !dtypes.contains(&dtype) {
                dtypes.push(dtype);
            }
        }
    }
    Ok(dtypes)
}

/// Repetition counts from settings, quick mode and flag overrides.
pub fn resolve_timing(args: &RunArgs, settings: &Settings) -> Result<Timing> {
    let (warmup, iterations) = if args.quick {
        (settings.quick_warmup, settings.quick_iterations)
    } else {
        (settings.warmup, settings.iterations)
    };
    let timing = Timing::new(args.warmup.unwrap_or(warmup), args.iterations.unwrap_or(iterations))?;
    Ok(timing)
}

fn progress_bar(len: usize) -> Result<ProgressBar> {
    let pb = ProgressBar::new(len as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("#>-"),
    );
    Ok(pb)
}

fn run_benchmarks(args: RunArgs, settings: &Settings) -> Result<()> {
    let suites = resolve_suites(&args.suite)?;
    let dtypes = resolve_dtypes(&args.types, args.quick)?;
    let n = args.size.map(SizeTier::elements).or(args.n).unwrap_or(settings.n);
    if n == 0 {
        bail!("--n must be at least 1");
    }
    let timing = resolve_timing(&args, settings)?;
    let seed = args.seed.unwrap_or(settings.seed);
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| settings.output_dir.join(io::RESULTS_FILE));

    let config = CatalogConfig::new(n)
        .with_suites(suites)
        .with_dtypes(dtypes)
        .quick(args.quick);
    let scenarios = catalog::build(&config);
    if scenarios.is_empty() {
        bail!("no scenarios match the selected suites and types");
    }
    info!(scenarios = scenarios.len(), n, seed, quick = args.quick, "starting run");

    let progress = progress_bar(scenarios.len())?;
    let results = run_scenarios(&scenarios, &timing, seed, |result| {
        progress.set_message(result.operation.clone());
        progress.inc(1);
    })
    .context("benchmark run failed")?;
    progress.finish_and_clear();

    let summary = io::write_all_outputs(&results, &output)
        .with_context(|| format!("failed to write results to {}", output.display()))?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    console::print_results(&results);
    console::print_crossovers(&thresholds::crossover_points(&results));
    println!("Completed {} benchmarks", results.len());
    println!("Results written to {}", output.display());
    println!("Summary written to {}", summary.display());
    Ok(())
}

fn run_compare(args: CompareArgs, settings: &Settings) -> Result<()> {
    let baseline = args
        .baseline
        .unwrap_or_else(|| settings.output_dir.join(io::RESULTS_FILE));
    let comparison_n = args.comparison_n.unwrap_or(settings.comparison_n);

    let unified = compare(
        &HarnessFile::new(&baseline),
        &ArtifactSource::new(&args.candidate, comparison_n),
    );
    if unified.is_empty() {
        tracing::warn!(baseline = %baseline.display(), "no baseline results to compare");
    }

    let written = write_reports(&unified, &args.output, args.format)
        .with_context(|| format!("failed to write reports to {}", args.output.display()))?;

    console::print_comparison(&unified);
    for path in written {
        println!("Report written to {}", path.display());
    }
    Ok(())
}

fn show_status(settings: &Settings, detailed: bool) {
    println!("Arraybench");
    println!("Version: {}", env!("CARGO_PKG_VERSION"));

    println!("\nSize tiers:");
    for tier in SizeTier::ALL {
        println!("  - {:<8} {}", tier.name(), tier.elements());
    }

    println!("\nType sets:");
    for set in TypeSet::ALL {
        let names: Vec<&str> = set.dtypes().iter().map(|d| d.name()).collect();
        println!("  - {:<15} {}", set.name(), names.join(", "));
    }

    println!("\nAlias tables:");
    println!("  - canonical operations: {}", CanonicalOp::ALL.len());
    println!("  - method aliases: {}", METHOD_ALIASES.len());
    println!("  - name aliases: {}", NAME_ALIASES.len());

    println!("\nSettings:");
    println!("  - warmup/iterations: {}/{}", settings.warmup, settings.iterations);
    println!("  - quick warmup/iterations: {}/{}", settings.quick_warmup, settings.quick_iterations);
    println!("  - seed: {}", settings.seed);
    println!("  - n: {}", settings.n);
    println!("  - comparison n: {}", settings.comparison_n);
    println!("  - output: {}", settings.output_dir.display());

    if detailed {
        println!("\nSuites:");
        for suite in Suite::ALL {
            println!("  - {:<12} {}", suite.key(), suite.name());
        }
        println!("\nCanonical operations:");
        for op in CanonicalOp::ALL {
            println!("  - {op}");
        }
    }
}

/// Run the CLI with the given arguments.
///
/// # Returns
///
/// Returns `Ok(())` on success, or an error if the command fails.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref()).context("failed to load settings")?;
    setup_logging(&settings, cli.log_level.as_deref(), cli.log_format);

    match cli.command {
        Commands::Run(args) => run_benchmarks(args, &settings),
        Commands::Compare(args) => run_compare(args, &settings),
        Commands::Status { detailed } => {
            show_status(&settings, detailed);
            Ok(())
        }
    }
}
