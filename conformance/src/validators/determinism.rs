//! Determinism validator.
//!
//! The rendered bytes must depend on the graph only:
//! - rendering twice gives the same text
//! - feeding the statements in reverse or rotated order gives the same text

use crate::report::{ConformanceReport, TestResult};
use crate::validators::Rendered;

const VALIDATOR: &str = "render/determinism";

/// Re-renders the input in several statement orders and compares the bytes.
pub fn validate(rendered: &Rendered) -> ConformanceReport {
    let mut report = ConformanceReport::new();
    let triples = &rendered.document.triples;

    let again = rendered.render_triples(triples.iter().cloned());
    compare(&mut report, "rendering twice", &rendered.output, &again);

    let reversed = rendered.render_triples(triples.iter().rev().cloned());
    compare(
        &mut report,
        "reversing the statement order",
        &rendered.output,
        &reversed,
    );

    let mut rotated = triples.clone();
    rotated.rotate_left(triples.len() / 2);
    let rotated = rendered.render_triples(rotated);
    compare(
        &mut report,
        "rotating the statement order",
        &rendered.output,
        &rotated,
    );

    report
}

fn compare(report: &mut ConformanceReport, what: &str, expected: &str, actual: &str) {
    match first_difference(expected, actual) {
        None => report.push(TestResult::pass(
            VALIDATOR,
            format!("{what} leaves the output unchanged ({} bytes)", expected.len()),
        )),
        Some((line, left, right)) => report.push(TestResult::fail_with_details(
            VALIDATOR,
            format!("{what} changes the output"),
            vec![
                format!("line {line}, expected: {left}"),
                format!("line {line}, found:    {right}"),
            ],
        )),
    }
}

/// First differing line, 1-based, with both sides.
fn first_difference(left: &str, right: &str) -> Option<(usize, String, String)> {
    let mut left_lines = left.lines();
    let mut right_lines = right.lines();
    let mut line = 1;
    loop {
        match (left_lines.next(), right_lines.next()) {
            (None, None) => return None,
            (l, r) if l == r => line += 1,
            (l, r) => {
                return Some((
                    line,
                    l.unwrap_or("<end of document>").to_owned(),
                    r.unwrap_or("<end of document>").to_owned(),
                ))
            }
        }
    }
}
