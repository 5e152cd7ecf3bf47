//! Folding validator.
//!
//! Checks the blank nodes of the output against the graph:
//! - a foldable blank node never appears by label; heading a block is only
//!   allowed for the entry point of a fold cycle and is reported as a warning
//! - every other blank node with assertions heads exactly one block
//! - a blank node without assertions heads no block

use std::collections::{BTreeMap, BTreeSet};

use anyhow::{Context, Result};
use regex::Regex;
use ttl_canon::fold::is_foldable;
use ttl_canon::Resource;

use crate::report::{ConformanceReport, TestResult};
use crate::validators::namespaces::strip_comment;
use crate::validators::Rendered;

const VALIDATOR: &str = "render/folding";

/// Compares where each blank node shows up with where it should.
///
/// # Errors
///
/// Returns an error only if the label pattern fails to compile.
pub fn validate(rendered: &Rendered) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();
    let label_re = Regex::new(r"_:([A-Za-z0-9_](?:[A-Za-z0-9_.\-]*[A-Za-z0-9_\-])?)")
        .context("invalid blank label pattern")?;

    let mut heads: BTreeMap<&str, usize> = BTreeMap::new();
    let mut mentions: BTreeSet<&str> = BTreeSet::new();
    for line in rendered.output.lines() {
        let terms = strip_comment(line);
        let mut labels = label_re
            .captures_iter(terms)
            .filter_map(|caps| caps.get(1).map(|m| m.as_str()));
        if line.starts_with("_:") {
            if let Some(head) = labels.next() {
                *heads.entry(head).or_default() += 1;
            }
        }
        mentions.extend(labels);
    }

    let mut folded = 0usize;
    let mut cycle_roots = Vec::new();
    let mut failures = Vec::new();
    for ind in rendered.graph.individuals() {
        let Resource::Blank(blank) = ind.subject() else {
            continue;
        };
        let label = blank.as_str();
        let head_count = heads.get(label).copied().unwrap_or(0);
        if rendered.folding && is_foldable(ind) {
            if head_count > 0 {
                cycle_roots.push(format!("_:{label}"));
            } else if mentions.contains(label) {
                failures.push(format!("_:{label} is foldable but written by label"));
            } else {
                folded += 1;
            }
        } else if ind.has_assertions() && head_count != 1 {
            failures.push(format!("_:{label} heads {head_count} blocks, expected 1"));
        } else if !ind.has_assertions() && head_count != 0 {
            failures.push(format!("_:{label} has no assertions but heads a block"));
        }
    }

    if failures.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("blank nodes are placed correctly ({folded} folded inline)"),
        ));
    } else {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            "blank nodes are misplaced",
            failures,
        ));
    }
    if !cycle_roots.is_empty() {
        report.push(TestResult {
            details: cycle_roots,
            ..TestResult::warn(VALIDATOR, "fold cycles were broken at these blank nodes")
        });
    }

    Ok(report)
}
