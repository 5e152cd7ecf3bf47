//! Canonical Turtle rendering of a completed [`Graph`].
//!
//! Output layout:
//!
//! ```text
//! @prefix ex: <http://example.org/> .
//!
//! ex:a
//!     ex:knows [ ex:name "Bob" ] ;
//!     ex:name "Ann" .
//!
//! _:b2 # referenced 2 times by ex:a, ex:c
//!     ex:name "Carol" .
//! ```
//!
//! Predicates go one per line under their subject. A predicate with more than
//! three values puts each value on its own line, one level deeper.

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::config::RenderConfig;
use crate::fold::{can_be_folded_by, is_top_level};
use crate::graph::Graph;
use crate::individual::Individual;
use crate::namespace::NamespacePriority;
use crate::node::{Resource, UriRef};
use crate::order::{predicate_key, sort_subjects, sorted_values, Value};
use crate::term::{escape_iri, TermWriter};

const INDENT: &str = "    ";
const MAX_INLINE_VALUES: usize = 3;

/// Renders graphs under one configuration.
///
/// A renderer holds no per-graph state and can be shared between threads.
#[derive(Debug, Clone)]
pub struct Renderer {
    folding: bool,
    base: Option<String>,
    priority: NamespacePriority,
}

impl Renderer {
    /// A renderer for `config`.
    ///
    /// The configured base URI, when present, replaces any base the graph
    /// carries.
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            folding: config.enable_folding,
            base: config.base_uri.clone(),
            priority: config.priority(),
        }
    }

    /// Renders `graph` as a Turtle document.
    pub fn render(&self, graph: &Graph) -> String {
        let base = self
            .base
            .as_deref()
            .or_else(|| graph.base().map(UriRef::as_str));
        let writer = TermWriter::new(graph, base);
        let mut out = String::new();
        write_directives(graph, base, &mut out);

        let mut pass = Pass {
            graph,
            writer,
            folding: self.folding,
            priority: &self.priority,
            written: HashSet::new(),
            recovering: false,
            folded: 0,
        };

        let mut top_level: Vec<&Individual> = graph
            .individuals()
            .filter(|ind| is_top_level(ind, self.folding))
            .collect();
        sort_subjects(&writer, &mut top_level);
        for ind in &top_level {
            pass.write_block(ind, &mut out);
        }

        // Foldable blank nodes that only reference each other in a cycle have
        // no top-level ancestor; give each cycle a block of its own.
        let mut orphans: Vec<&Individual> = graph
            .individuals()
            .filter(|ind| ind.has_assertions() && !pass.written.contains(ind.subject()))
            .collect();
        sort_subjects(&writer, &mut orphans);
        pass.recovering = true;
        let mut orphan_blocks = 0usize;
        for ind in orphans {
            if !pass.written.contains(ind.subject()) {
                pass.write_block(ind, &mut out);
                orphan_blocks += 1;
            }
        }

        debug!(
            top_level = top_level.len(),
            folded = pass.folded,
            orphan_blocks,
            bytes = out.len(),
            "rendered graph"
        );
        out
    }
}

/// `@prefix` lines for namespaces both declared and used, then `@base`.
fn write_directives(graph: &Graph, base: Option<&str>, out: &mut String) {
    let mut directives: Vec<String> = graph
        .namespaces()
        .iter()
        .filter(|(namespace, _)| graph.is_namespace_used(namespace))
        .map(|(namespace, prefix)| format!("@prefix {prefix}: <{}> .", escape_iri(namespace)))
        .collect();
    directives.sort();
    if let Some(base) = base {
        directives.push(format!("@base <{}> .", escape_iri(base)));
    }
    if directives.is_empty() {
        return;
    }
    for directive in directives {
        out.push_str(&directive);
        out.push('\n');
    }
    out.push('\n');
}

/// State of one rendering walk.
struct Pass<'a> {
    graph: &'a Graph,
    writer: TermWriter<'a>,
    folding: bool,
    priority: &'a NamespacePriority,
    /// Subjects already written, as a block or inline.
    written: HashSet<Resource>,
    /// Set while writing orphaned fold cycles, where meeting an already
    /// written foldable node is expected.
    recovering: bool,
    folded: usize,
}

impl<'a> Pass<'a> {
    fn write_block(&mut self, ind: &'a Individual, out: &mut String) {
        self.written.insert(ind.subject().clone());
        out.push_str(&self.writer.resource(ind.subject()));
        if ind.is_anonymous() {
            out.push_str(&self.reference_comment(ind));
        }
        out.push('\n');

        let entries = self.predicate_entries(ind, 1);
        let last = entries.len().saturating_sub(1);
        for (i, entry) in entries.iter().enumerate() {
            out.push_str(INDENT);
            out.push_str(entry);
            out.push_str(if i == last { " .\n" } else { " ;\n" });
        }
        out.push('\n');
    }

    fn reference_comment(&self, ind: &Individual) -> String {
        let count = ind.reference_count();
        if count == 0 {
            return " # unreferenced blank node".to_owned();
        }
        let mut referrers: Vec<String> = ind
            .referrers()
            .iter()
            .map(|referrer| self.writer.resource(referrer))
            .collect();
        referrers.sort();
        let times = if count == 1 { "time" } else { "times" };
        format!(" # referenced {count} {times} by {}", referrers.join(", "))
    }

    /// One string per predicate: the predicate term followed by its values.
    ///
    /// The first line carries no indentation (the caller adds it); any
    /// following lines are indented absolutely for `depth`.
    fn predicate_entries(&mut self, ind: &'a Individual, depth: usize) -> Vec<String> {
        let graph = self.graph;
        let mut predicates: Vec<_> = ind.assertions().collect();
        predicates.sort_by(|a, b| {
            predicate_key(self.priority, a.predicate())
                .cmp(&predicate_key(self.priority, b.predicate()))
        });

        let mut entries = Vec::with_capacity(predicates.len());
        for assertions in predicates {
            let values = sorted_values(graph, &self.writer, assertions.literals(), assertions.links());
            let mut entry = self.writer.uri(assertions.predicate());
            if values.len() > MAX_INLINE_VALUES {
                let value_indent = INDENT.repeat(depth + 1);
                let last = values.len() - 1;
                for (i, value) in values.into_iter().enumerate() {
                    entry.push('\n');
                    entry.push_str(&value_indent);
                    entry.push_str(&self.value(ind.subject(), value, depth + 1));
                    if i != last {
                        entry.push(',');
                    }
                }
            } else {
                let rendered: Vec<String> = values
                    .into_iter()
                    .map(|value| self.value(ind.subject(), value, depth))
                    .collect();
                entry.push(' ');
                entry.push_str(&rendered.join(", "));
            }
            entries.push(entry);
        }
        entries
    }

    fn value(&mut self, owner: &Resource, value: Value<'a>, depth: usize) -> String {
        let target = match value {
            Value::Literal(literal) => return self.writer.literal(literal),
            Value::Link(target) => target,
        };
        let graph = self.graph;
        match graph.individual(target) {
            Some(ind) if self.folding && can_be_folded_by(ind, owner) => {
                if self.written.contains(target) {
                    if !self.recovering {
                        warn!(%target, "foldable node reached twice, writing a reference");
                    }
                    debug_assert!(
                        self.recovering,
                        "foldable node {target} reached twice outside a fold cycle"
                    );
                    return self.writer.resource(target);
                }
                self.nested_block(ind, depth)
            }
            _ => self.writer.resource(target),
        }
    }

    /// `[ ... ]` for a folded individual whose opening bracket sits at `depth`.
    fn nested_block(&mut self, ind: &'a Individual, depth: usize) -> String {
        self.written.insert(ind.subject().clone());
        self.folded += 1;
        let entries = self.predicate_entries(ind, depth + 1);
        if let [entry] = entries.as_slice() {
            if !entry.contains('\n') {
                return format!("[ {entry} ]");
            }
        }

        let inner = INDENT.repeat(depth + 1);
        let last = entries.len().saturating_sub(1);
        let mut out = String::from("[");
        for (i, entry) in entries.iter().enumerate() {
            out.push('\n');
            out.push_str(&inner);
            out.push_str(entry);
            if i != last {
                out.push_str(" ;");
            }
        }
        out.push('\n');
        out.push_str(&INDENT.repeat(depth));
        out.push(']');
        out
    }
}
