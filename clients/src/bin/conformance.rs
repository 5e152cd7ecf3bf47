//! `ttl-conformance` renders each input document canonically and checks the
//! result: determinism, round trip, namespace minimality and blank node
//! folding.
//!
//! **Usage:**
//! ```
//! ttl-conformance <PATH>... [--config <file>] [--no-fold] [--json]
//! ```
//!
//! Directories are walked for `.ttl` and `.nt` files. Exits non-zero if any
//! check fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, warn};
use tracing_subscriber::EnvFilter;
use ttl_canon::RenderConfig;
use ttl_canon_conformance::{run_all, ConformanceReport, Format, Severity, TestResult};
use walkdir::WalkDir;

/// Run the canonical Turtle conformance suite.
#[derive(Parser)]
#[command(
    name = "ttl-conformance",
    about = "Check canonical Turtle renderings of RDF documents"
)]
struct Args {
    /// Files or directories to check.
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// TOML file with rendering options.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Check renderings made without blank node folding.
    #[arg(long)]
    no_fold: bool,

    /// Print the reports as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Log at debug level.
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Every checkable file under `paths`, in a stable order.
fn collect_inputs(paths: &[PathBuf]) -> Result<Vec<(PathBuf, Format)>> {
    let mut inputs = Vec::new();
    for root in paths {
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry =
                entry.with_context(|| format!("Failed to walk {}", root.display()))?;
            if !entry.file_type().is_file() {
                continue;
            }
            match Format::from_path(entry.path()) {
                Some(format) => inputs.push((entry.into_path(), format)),
                None => debug!(path = %entry.path().display(), "skipping non-RDF file"),
            }
        }
    }
    Ok(inputs)
}

fn check(path: &Path, format: Format, config: &RenderConfig) -> Result<ConformanceReport> {
    let source = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let mut report = ConformanceReport::for_source(path.display().to_string());
    match run_all(&source, format, config) {
        Ok(results) => report.extend(results),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "input rejected");
            report.push(TestResult::fail("input/parse", format!("{e:#}")));
        }
    }
    Ok(report)
}

fn print_text(reports: &[ConformanceReport]) -> (usize, usize, usize) {
    println!("Canonical Turtle Conformance Report");
    println!("===================================");

    let mut passed = 0usize;
    let mut warned = 0usize;
    let mut failed = 0usize;
    for report in reports {
        println!();
        println!("{}", report.source.as_deref().unwrap_or("<input>"));
        for result in &report.results {
            let status = match result.severity {
                Severity::Pass => {
                    passed += 1;
                    "PASS"
                }
                Severity::Warning => {
                    warned += 1;
                    "WARN"
                }
                Severity::Failure => {
                    failed += 1;
                    "FAIL"
                }
            };
            println!("[{}] {}: {}", status, result.validator, result.message);
            for detail in &result.details {
                println!("       {}", detail);
            }
        }
    }
    (passed, warned, failed)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            toml::from_str::<RenderConfig>(&text)
                .with_context(|| format!("Failed to parse {}", path.display()))?
        }
        None => RenderConfig::default(),
    };
    if args.no_fold {
        config.enable_folding = false;
    }

    let inputs = collect_inputs(&args.paths)?;
    let reports = inputs
        .iter()
        .map(|(path, format)| check(path, *format, &config))
        .collect::<Result<Vec<_>>>()?;
    let failed_files = reports.iter().filter(|r| !r.all_passed()).count();

    if args.json {
        let json =
            serde_json::to_string_pretty(&reports).context("Failed to serialize reports")?;
        println!("{json}");
    } else {
        let (passed, warned, failed) = print_text(&reports);
        println!();
        println!(
            "Summary: {} files, {} passed, {} warnings, {} failed",
            reports.len(),
            passed,
            warned,
            failed
        );
    }

    if failed_files > 0 {
        eprintln!("Conformance FAILED: {failed_files} file(s) did not pass.");
        process::exit(1);
    }
    Ok(())
}
