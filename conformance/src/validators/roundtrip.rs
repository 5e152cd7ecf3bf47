//! Round-trip validator.
//!
//! The rendered document is parsed back with the Turtle reader:
//! - it must parse
//! - its ground triples (no blank nodes) must equal the input's
//! - it must carry as many distinct blank-node triples as the input

use std::collections::HashSet;

use ttl_canon::{Node, Resource, Triple};

use crate::reader::{parse_triples, Format};
use crate::report::{ConformanceReport, TestResult};
use crate::validators::Rendered;

const VALIDATOR: &str = "render/roundtrip";

/// Longest list of offending triples reported per check.
const MAX_DETAILS: usize = 10;

/// Parses the rendering back and compares its statements with the input.
pub fn validate(rendered: &Rendered) -> ConformanceReport {
    let mut report = ConformanceReport::new();

    let reparsed = match parse_triples(&rendered.output, Format::Turtle) {
        Ok(triples) => {
            report.push(TestResult::pass(
                VALIDATOR,
                format!("rendered document parses ({} triples)", triples.len()),
            ));
            triples
        }
        Err(e) => {
            report.push(TestResult::fail_with_details(
                VALIDATOR,
                "rendered document does not parse as Turtle",
                vec![format!("{e:#}")],
            ));
            return report;
        }
    };

    let (input_ground, input_blank) = partition(&rendered.document.triples);
    let (output_ground, output_blank) = partition(&reparsed);

    let mut details: Vec<String> = input_ground
        .difference(&output_ground)
        .map(|t| format!("missing: {t}"))
        .chain(
            output_ground
                .difference(&input_ground)
                .map(|t| format!("unexpected: {t}")),
        )
        .collect();
    if details.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("{} ground triples survive the round trip", input_ground.len()),
        ));
    } else {
        details.sort();
        details.truncate(MAX_DETAILS);
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            "ground triples differ after the round trip",
            details,
        ));
    }

    if input_blank == output_blank {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("{input_blank} blank-node triples survive the round trip"),
        ));
    } else {
        report.push(TestResult::fail(
            VALIDATOR,
            format!("input has {input_blank} distinct blank-node triples, output has {output_blank}"),
        ));
    }

    report
}

/// Distinct ground triples, and the number of distinct triples touching a
/// blank node.
fn partition(triples: &[Triple]) -> (HashSet<&Triple>, usize) {
    let mut ground = HashSet::new();
    let mut blank = HashSet::new();
    for triple in triples {
        if touches_blank(triple) {
            blank.insert(triple);
        } else {
            ground.insert(triple);
        }
    }
    (ground, blank.len())
}

fn touches_blank(triple: &Triple) -> bool {
    matches!(triple.subject, Resource::Blank(_)) || matches!(triple.object, Node::Blank(_))
}
