//! `vieta`: resolvent terms and Galois census from the command line.
//!
//! ```text
//! vieta classify [RANGE] [DEGREE] [--parallel] [--workers N] [--out DIR]
//! vieta resolvent <DEGREE> [--variant canonical|halved|unnormalized] [--view VIEW]
//! vieta analyze <FOLDER> <DEGREE> [--out DIR] [--original] [--json]
//! vieta verify <FOLDER>
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use vieta::census::{
    analyze_folder, verify_buckets, AnalyzeOptions, Census, CensusConfig, FileBuckets,
};
use vieta::resolvent::{
    calc_fixed, calc_rootis, calc_roots_of_unity, calc_vieta_sum,
    calc_vieta_sum_intermediates, calc_vieta_sum_original, FormulaVariant, ReducedTerms,
};

/// Resolvent reduction and Galois census for small-degree polynomials.
#[derive(Parser, Debug)]
#[command(name = "vieta", version, about)]
struct Args {
    /// More output (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Only errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// TOML file with census defaults.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Bucket every monic polynomial of a coefficient box by Galois group.
    Classify {
        /// Coefficients range over [-RANGE, RANGE].
        range: Option<u32>,
        /// Polynomial degree (1 to 5).
        degree: Option<usize>,
        /// Use a worker pool.
        #[arg(long)]
        parallel: bool,
        /// Worker threads for --parallel.
        #[arg(long)]
        workers: Option<usize>,
        /// Bucket directory.
        #[arg(long)]
        out: Option<PathBuf>,
        /// Only polynomials with constant term 1.
        #[arg(long)]
        constant_one: bool,
        /// Show a progress bar.
        #[arg(long)]
        progress: bool,
    },
    /// Derive and print the reduced resolvent terms.
    Resolvent {
        /// Degree of the generic polynomial.
        degree: usize,
        /// Formula variant.
        #[arg(long, default_value = "canonical")]
        variant: FormulaVariant,
        /// Which view of the terms to print.
        #[arg(long, value_enum, default_value = "fixed")]
        view: View,
    },
    /// Cross-reference bucket files with the Vieta terms.
    Analyze {
        /// Bucket directory written by `classify`.
        folder: PathBuf,
        /// Degree of the bucket polynomials.
        degree: usize,
        /// Output directory (defaults to FOLDER).
        #[arg(long)]
        out: Option<PathBuf>,
        /// Use the unreduced terms.
        #[arg(long)]
        original: bool,
        /// Also write JSON lines.
        #[arg(long)]
        json: bool,
        /// Formula variant.
        #[arg(long, default_value = "canonical")]
        variant: FormulaVariant,
    },
    /// Re-classify every line of a bucket directory.
    Verify {
        /// Bucket directory.
        folder: PathBuf,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
enum View {
    /// Terms in e1, e2, …
    Fixed,
    /// Terms in the coefficients a, b, c, …
    Vieta,
    /// Terms expanded in the roots and factored.
    Roots,
    /// The split before reduction, in coefficients.
    Original,
    /// Every reduction state, in coefficients.
    Intermediates,
    /// Terms at the roots of unity.
    Unity,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(&args);
    match run(args) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(args: &Args) {
    let level = if args.quiet {
        Level::ERROR
    } else {
        match args.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("failed to set tracing subscriber: {e}");
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let base = match &args.config {
        Some(path) => CensusConfig::load(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => CensusConfig::default(),
    };

    match args.command {
        Command::Classify {
            range,
            degree,
            parallel,
            workers,
            out,
            constant_one,
            progress,
        } => {
            let config = CensusConfig {
                range: range.unwrap_or(base.range),
                degree: degree.unwrap_or(base.degree),
                workers: workers.unwrap_or(base.workers),
                output_dir: out.or(base.output_dir),
                constant_one: constant_one || base.constant_one,
            };
            classify(config, parallel, progress)
        }
        Command::Resolvent {
            degree,
            variant,
            view,
        } => {
            print_view(degree, variant, view)?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Analyze {
            folder,
            degree,
            out,
            original,
            json,
            variant,
        } => {
            let options = AnalyzeOptions {
                degree,
                original,
                json,
                variant,
                out_dir: out,
            };
            let report = analyze_folder(&folder, &options)
                .with_context(|| format!("analysing {}", folder.display()))?;
            for path in &report.written {
                println!("{}", path.display());
            }
            println!("{} records, {} lines skipped", report.records, report.skipped);
            Ok(ExitCode::SUCCESS)
        }
        Command::Verify { folder } => {
            let report = verify_buckets(&folder)
                .with_context(|| format!("verifying {}", folder.display()))?;
            for m in &report.mismatches {
                println!(
                    "{}:{}: {} filed under {} but classifies as {}",
                    m.path.display(),
                    m.line,
                    m.polynomial,
                    m.expected,
                    m.found
                );
            }
            println!(
                "{} checked, {} skipped, {} mismatches",
                report.checked,
                report.skipped,
                report.mismatches.len()
            );
            Ok(if report.is_clean() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}

fn classify(config: CensusConfig, parallel: bool, progress: bool) -> Result<ExitCode> {
    let dir = config.output_dir();
    let census = Census::new(config).context("invalid census configuration")?;
    let sink = FileBuckets::create(&dir)
        .with_context(|| format!("creating bucket directory {}", dir.display()))?;

    let bar = progress.then(|| {
        let pb = ProgressBar::new(census.coefficient_box().len());
        pb.set_style(
            ProgressStyle::default_bar()
                .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} [ETA: {eta_precise}]")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("=>-"),
        );
        pb
    });
    let tick = |n: u64| {
        if let Some(pb) = &bar {
            pb.set_position(n);
        }
    };
    let census = census.with_progress(&tick);

    let report = if parallel {
        census.run_parallel(&sink)
    } else {
        census.run_serial(&sink)
    }
    .context("census failed")?;

    if let Some(pb) = &bar {
        pb.finish_and_clear();
    }

    info!(dir = %dir.display(), "buckets written");
    for (label, count) in &report.buckets {
        println!("{label}: {count}");
    }
    println!(
        "{} examined, {} classified, {} reducible, {} failed in {:.2}s",
        report.examined,
        report.classified,
        report.reducible,
        report.failed,
        report.elapsed.as_secs_f64()
    );
    Ok(ExitCode::SUCCESS)
}

fn print_view(degree: usize, variant: FormulaVariant, view: View) -> Result<()> {
    match view {
        View::Fixed => print_terms(&calc_fixed(degree, variant)?),
        View::Vieta => print_terms(&calc_vieta_sum(degree, variant)?),
        View::Original => print_terms(&calc_vieta_sum_original(degree, variant)?),
        View::Intermediates => {
            for (step, state) in calc_vieta_sum_intermediates(degree, variant)?
                .iter()
                .enumerate()
            {
                println!("# state {step}");
                print_terms(state);
            }
        }
        View::Roots => {
            for (i, f) in calc_rootis(degree, variant)?.iter().enumerate() {
                println!("term_{i} = {f}");
            }
        }
        View::Unity => {
            for (i, v) in calc_roots_of_unity(degree, variant)?.iter().enumerate() {
                println!("term_{i} = {v}");
            }
        }
    }
    Ok(())
}

fn print_terms(terms: &ReducedTerms) {
    for (i, (term, power)) in terms.terms.iter().zip(&terms.powers).enumerate() {
        println!("term_{i} (x0^{power}) = {term}");
    }
}
