//! Canonical ordering of subjects, predicates and values.
//!
//! Every comparator here is total and depends only on the graph content and
//! the output term forms, never on ingestion order.

use std::cmp::Reverse;

use crate::graph::Graph;
use crate::individual::Individual;
use crate::namespace::NamespacePriority;
use crate::node::{Literal, Resource, UriRef};
use crate::term::TermWriter;
use crate::vocab;

/// One value of a predicate: a literal leaf or a link to another individual.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value<'g> {
    /// A literal leaf.
    Literal(&'g Literal),
    /// A link by identifier.
    Link(&'g Resource),
}

/// Sort key of a subject: URIs before blank nodes, then by term text.
pub fn subject_key(writer: &TermWriter<'_>, subject: &Resource) -> (bool, String, Resource) {
    (subject.is_blank(), writer.resource(subject), subject.clone())
}

/// Sorts top-level individuals into subject order.
pub fn sort_subjects(writer: &TermWriter<'_>, subjects: &mut [&Individual]) {
    subjects.sort_by_cached_key(|ind| subject_key(writer, ind.subject()));
}

/// Sort key of a predicate: `rdf:type` first, then namespace rank, then URI.
pub fn predicate_key<'p>(
    priority: &NamespacePriority,
    predicate: &'p UriRef,
) -> (Reverse<bool>, usize, &'p str) {
    let uri = predicate.as_str();
    (Reverse(uri == vocab::RDF_TYPE), priority.rank(uri), uri)
}

/// Rank of a value within one predicate's value list.
///
/// Literals and links to named individuals share rank 0, links to anonymous
/// pure references rank 1, links to anonymous individuals with their own
/// assertions rank 2.
pub fn value_rank(graph: &Graph, value: Value<'_>) -> u8 {
    match value {
        Value::Literal(_) => 0,
        Value::Link(target) => match graph.individual(target) {
            Some(ind) if ind.is_anonymous() && ind.has_assertions() => 2,
            Some(ind) if ind.is_anonymous() => 1,
            Some(_) => 0,
            None if target.is_blank() => 1,
            None => 0,
        },
    }
}

/// Collects the values of one predicate in canonical order.
pub fn sorted_values<'g>(
    graph: &Graph,
    writer: &TermWriter<'_>,
    literals: impl Iterator<Item = &'g Literal>,
    links: &'g [Resource],
) -> Vec<Value<'g>> {
    let mut values: Vec<Value<'g>> = literals
        .map(Value::Literal)
        .chain(links.iter().map(Value::Link))
        .collect();
    values.sort_by_cached_key(|value| {
        let (text, kind) = match value {
            Value::Literal(literal) => (writer.literal(literal), 0u8),
            Value::Link(target) => (writer.resource(target), 1u8),
        };
        (value_rank(graph, *value), text, kind)
    });
    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Triple;

    const EX: &str = "http://example.org/";

    fn ex(local: &str) -> UriRef {
        UriRef::new(format!("{EX}{local}"))
    }

    #[test]
    fn rdf_type_always_first() {
        let priority = NamespacePriority::default();
        let mut predicates = vec![
            ex("age"),
            UriRef::new("http://www.w3.org/2000/01/rdf-schema#label"),
            UriRef::new(vocab::RDF_TYPE),
            UriRef::new("http://www.w3.org/1999/02/22-rdf-syntax-ns#first"),
        ];
        predicates.sort_by(|a, b| predicate_key(&priority, a).cmp(&predicate_key(&priority, b)));
        assert_eq!(predicates[0].as_str(), vocab::RDF_TYPE);
        assert_eq!(
            predicates[1].as_str(),
            "http://www.w3.org/1999/02/22-rdf-syntax-ns#first"
        );
        assert_eq!(
            predicates[2].as_str(),
            "http://www.w3.org/2000/01/rdf-schema#label"
        );
        assert_eq!(predicates[3], ex("age"));
    }

    #[test]
    fn named_subjects_before_blank_subjects() {
        let graph = Graph::new();
        let writer = TermWriter::new(&graph, None);
        let blank = subject_key(&writer, &Resource::blank("a"));
        let named = subject_key(&writer, &Resource::Uri(ex("z")));
        assert!(named < blank);
    }

    #[test]
    fn value_ranks_follow_anonymity() {
        let mut graph = Graph::new();
        let s = Resource::Uri(ex("s"));
        let p = ex("p");
        graph.add_triple(Triple::new(s.clone(), p.clone(), Resource::blank("pure")));
        graph.add_triple(Triple::new(s.clone(), p.clone(), Resource::blank("rich")));
        graph.add_triple(Triple::new(s.clone(), p.clone(), Resource::Uri(ex("named"))));
        graph.add_triple(Triple::new(s.clone(), p.clone(), Literal::plain("zzz")));
        graph.add_triple(Triple::new(Resource::blank("rich"), p.clone(), Literal::plain("x")));

        let writer = TermWriter::new(&graph, None);
        let values = graph
            .individual(&s)
            .and_then(|ind| ind.assertions_for(&p))
            .map(|a| sorted_values(&graph, &writer, a.literals(), a.links()))
            .unwrap_or_default();
        let rendered: Vec<String> = values
            .iter()
            .map(|v| match v {
                Value::Literal(l) => writer.literal(l),
                Value::Link(r) => writer.resource(r),
            })
            .collect();
        assert_eq!(
            rendered,
            vec![
                "\"zzz\"".to_owned(),
                "<http://example.org/named>".to_owned(),
                "_:pure".to_owned(),
                "_:rich".to_owned(),
            ]
        );
    }
}
