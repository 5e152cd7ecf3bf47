//! Namespace validator.
//!
//! Checks the directive section against the body:
//! - every emitted `@prefix` is used by at least one term
//! - every declared namespace the graph uses is emitted
//! - no literal carries an `xsd:string` datatype suffix

use anyhow::{Context, Result};
use regex::Regex;
use ttl_canon::vocab;

use crate::report::{ConformanceReport, TestResult};
use crate::validators::Rendered;

const VALIDATOR: &str = "render/namespaces";

/// Compares the emitted prefixes with the terms of the body.
///
/// # Errors
///
/// Returns an error only if a pattern fails to compile.
pub fn validate(rendered: &Rendered) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();
    let directive_re =
        Regex::new(r"^@prefix ([^:\s]*): <([^>]*)> \.$").context("invalid directive pattern")?;

    let mut emitted = Vec::new();
    let mut body = String::new();
    for line in rendered.output.lines() {
        if let Some(caps) = directive_re.captures(line) {
            let prefix = caps.get(1).map_or("", |m| m.as_str());
            let namespace = caps.get(2).map_or("", |m| m.as_str());
            emitted.push((prefix.to_owned(), namespace.to_owned()));
        } else if !line.starts_with('@') {
            body.push_str(strip_comment(line));
            body.push('\n');
        }
    }

    let mut unused = Vec::new();
    for (prefix, _) in &emitted {
        let usage = Regex::new(&format!(r"(?m)(?:^|[\s\[(]){}:", regex::escape(prefix)))
            .context("invalid prefix usage pattern")?;
        if !usage.is_match(&body) {
            unused.push(format!("{prefix}:"));
        }
    }
    if unused.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("all {} emitted prefixes are used", emitted.len()),
        ));
    } else {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            "emitted prefixes are never used",
            unused,
        ));
    }

    let missing: Vec<String> = rendered
        .graph
        .namespaces()
        .iter()
        .filter(|(namespace, _)| rendered.graph.is_namespace_used(namespace))
        .filter(|(namespace, prefix)| {
            !emitted
                .iter()
                .any(|(p, ns)| p.as_str() == *prefix && ns.as_str() == *namespace)
        })
        .map(|(namespace, prefix)| format!("{prefix}: <{namespace}>"))
        .collect();
    if missing.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            "every used declared namespace is emitted",
        ));
    } else {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            "used namespaces are missing their @prefix",
            missing,
        ));
    }

    let long_form = format!("^^<{}>", vocab::XSD_STRING);
    if body.contains("^^xsd:string") || body.contains(&long_form) {
        report.push(TestResult::fail(
            VALIDATOR,
            "a literal carries an explicit xsd:string datatype",
        ));
    } else {
        report.push(TestResult::pass(
            VALIDATOR,
            "no literal carries an explicit xsd:string datatype",
        ));
    }

    Ok(report)
}

/// Drops the `# referenced ...` comment from a blank node block head.
pub(crate) fn strip_comment(line: &str) -> &str {
    if line.starts_with("_:") {
        line.split(" # ").next().unwrap_or(line)
    } else {
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_block_heads_lose_comments() {
        assert_eq!(strip_comment("_:b # referenced 2 times by ex:a"), "_:b");
        assert_eq!(
            strip_comment("    ex:p \"a # b\" ."),
            "    ex:p \"a # b\" ."
        );
    }
}
