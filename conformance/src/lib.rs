//! Conformance suite for canonical Turtle output.
//!
//! Parses a Turtle or N-Triples document, renders it with `ttl-canon`, and
//! checks the rendering against the properties a canonical document must
//! have.
//!
//! # Conformance Scope
//!
//! | Validator | Property |
//! |-----------|----------|
//! | `render/determinism` | Output depends on the graph, not on statement order |
//! | `render/roundtrip` | Output re-parses to the same statements |
//! | `render/namespaces` | Exactly the used prefixes are declared, no `xsd:string` suffix |
//! | `render/folding` | Blank nodes are inlined or given blocks as the folding rule says |
//!
//! # Entry Point
//!
//! ```no_run
//! use ttl_canon::RenderConfig;
//! use ttl_canon_conformance::{run_all, Format};
//!
//! let source = std::fs::read_to_string("data.ttl")?;
//! let report = run_all(&source, Format::Turtle, &RenderConfig::default())?;
//! assert!(report.all_passed());
//! # Ok::<(), anyhow::Error>(())
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod reader;
pub mod report;
pub mod tests;
pub mod validators;

pub use reader::{canonicalize_str, load_str, parse_triples, read_document, Document, Format};
pub use report::{ConformanceReport, Severity, TestResult};
pub use validators::Rendered;

use tracing::info;
use ttl_canon::RenderConfig;

/// Renders `source` and runs all validators over the result.
///
/// Validators are run in this order:
/// 1. Determinism (repeat and reordered renders)
/// 2. Round trip (re-parse and compare statements)
/// 3. Namespaces (prefix minimality, datatype omission)
/// 4. Folding (blank node placement)
///
/// # Errors
///
/// Returns an error if the configuration is invalid or `source` does not
/// parse. Properties the rendering violates are reported, not returned.
pub fn run_all(
    source: &str,
    format: Format,
    config: &RenderConfig,
) -> anyhow::Result<ConformanceReport> {
    let rendered = Rendered::new(source, format, config)?;
    let mut report = ConformanceReport::new();

    report.extend(validators::determinism::validate(&rendered));
    report.extend(validators::roundtrip::validate(&rendered));
    report.extend(validators::namespaces::validate(&rendered)?);
    report.extend(validators::folding::validate(&rendered)?);

    info!(
        triples = rendered.document.triples.len(),
        results = report.results.len(),
        failures = report.failure_count(),
        "conformance run finished"
    );
    Ok(report)
}
