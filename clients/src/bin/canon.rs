//! `ttl-canon` reads a Turtle or N-Triples document and writes its canonical
//! Turtle rendering.
//!
//! Options come from an optional TOML file (see `RenderConfig`), overridden
//! by command-line flags. Logs go to stderr; set `RUST_LOG` or pass
//! `--verbose` to see them.
//!
//! **Usage:**
//! ```
//! ttl-canon [INPUT] [--out <path>] [--config <file>] [--no-fold]
//!           [--base <uri>] [--prefix <p>=<namespace>]... [--format turtle|ntriples]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;
use ttl_canon::RenderConfig;
use ttl_canon_conformance::{canonicalize_str, Format};

/// Render RDF as canonical Turtle.
#[derive(Parser)]
#[command(name = "ttl-canon", about = "Render RDF as canonical Turtle")]
struct Args {
    /// Input document; standard input when omitted.
    input: Option<PathBuf>,

    /// Input syntax. Guessed from the file extension when omitted.
    #[arg(long, value_enum)]
    format: Option<InputFormat>,

    /// Output file; standard output when omitted.
    #[arg(long)]
    out: Option<PathBuf>,

    /// TOML file with rendering options.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write every blank node as its own block.
    #[arg(long)]
    no_fold: bool,

    /// Base URI for relative references in the output.
    #[arg(long)]
    base: Option<String>,

    /// Prefix declaration, repeatable.
    #[arg(long = "prefix", value_name = "PREFIX=NAMESPACE", value_parser = parse_prefix)]
    prefixes: Vec<(String, String)>,

    /// Log at debug level.
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum InputFormat {
    Turtle,
    Ntriples,
}

impl From<InputFormat> for Format {
    fn from(format: InputFormat) -> Self {
        match format {
            InputFormat::Turtle => Format::Turtle,
            InputFormat::Ntriples => Format::NTriples,
        }
    }
}

fn parse_prefix(arg: &str) -> Result<(String, String), String> {
    arg.split_once('=')
        .map(|(prefix, namespace)| (prefix.to_owned(), namespace.to_owned()))
        .ok_or_else(|| format!("expected PREFIX=NAMESPACE, got `{arg}`"))
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(args: &Args) -> Result<RenderConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            toml::from_str(&text)
                .with_context(|| format!("Failed to parse {}", path.display()))?
        }
        None => RenderConfig::default(),
    };
    if args.no_fold {
        config.enable_folding = false;
    }
    if let Some(base) = &args.base {
        config.base_uri = Some(base.clone());
    }
    for (prefix, namespace) in &args.prefixes {
        config.prefixes.insert(prefix.clone(), namespace.clone());
    }
    config.validate().context("Invalid rendering options")?;
    Ok(config)
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => io::read_to_string(io::stdin()).context("Failed to read standard input"),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);
    let config = load_config(&args)?;

    let format = args
        .format
        .map(Format::from)
        .or_else(|| args.input.as_deref().and_then(Format::from_path))
        .unwrap_or(Format::Turtle);
    let source = read_input(args.input.as_deref())?;
    let rendered = canonicalize_str(&source, format, &config)?;

    match &args.out {
        Some(path) => {
            fs::write(path, &rendered)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            info!(path = %path.display(), bytes = rendered.len(), "wrote canonical document");
        }
        None => io::stdout()
            .write_all(rendered.as_bytes())
            .context("Failed to write standard output")?,
    }
    Ok(())
}
