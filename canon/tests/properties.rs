//! Property-based tests for canonical rendering.
//!
//! Graphs are generated over a small vocabulary so subjects, predicates and
//! blank nodes collide often. Blank-to-blank links only point from lower to
//! higher labels, which keeps the generated graphs free of fold cycles.

use proptest::prelude::*;
use ttl_canon::fold::is_foldable;
use ttl_canon::{
    canonicalize, vocab, Graph, Literal, Node, RenderConfig, Resource, Triple, UriRef,
};

const EX: &str = "http://example.org/";

fn config() -> RenderConfig {
    RenderConfig::default()
        .with_prefix("ex", EX)
        .with_prefix("rdf", vocab::RDF)
        .with_prefix("xsd", vocab::XSD)
        .with_prefix("foaf", "http://xmlns.com/foaf/0.1/")
}

fn resource() -> impl Strategy<Value = Resource> {
    prop_oneof![
        (0..4u8).prop_map(|i| Resource::uri(format!("{EX}s{i}"))),
        (0..4u8).prop_map(|i| Resource::blank(format!("b{i}"))),
    ]
}

fn predicate() -> impl Strategy<Value = UriRef> {
    prop_oneof![
        (0..3u8).prop_map(|i| UriRef::new(format!("{EX}p{i}"))),
        Just(UriRef::new(vocab::RDF_TYPE)),
    ]
}

fn literal() -> impl Strategy<Value = Literal> {
    prop_oneof![
        "[a-z \"\n\t]{0,6}".prop_map(Literal::plain),
        (0..100i32).prop_map(|n| Literal::typed(n.to_string(), vocab::XSD_INTEGER)),
        "[a-z]{1,4}".prop_map(|s| Literal::typed(s, vocab::XSD_STRING)),
        "[a-z]{1,4}".prop_map(|s| Literal::lang(s, "en")),
    ]
}

fn object() -> impl Strategy<Value = Node> {
    prop_oneof![resource().prop_map(Node::from), literal().prop_map(Node::from)]
}

fn triple() -> impl Strategy<Value = Triple> {
    (resource(), predicate(), object())
        .prop_filter("blank links point forward", |(s, _, o)| match (s, o) {
            (Resource::Blank(a), Node::Blank(b)) => a.as_str() < b.as_str(),
            _ => true,
        })
        .prop_map(|(s, p, o)| Triple::new(s, p, o))
}

fn triples() -> impl Strategy<Value = Vec<Triple>> {
    prop::collection::vec(triple(), 0..24)
}

/// The document with `# ...` comments removed.
fn without_comments(out: &str) -> String {
    out.lines()
        .map(|line| line.split(" # ").next().unwrap_or(line))
        .collect::<Vec<_>>()
        .join("\n")
}

fn blank_block_count(out: &str, label: &str) -> usize {
    let head = format!("_:{label} #");
    out.lines().filter(|line| line.starts_with(&head)).count()
}

proptest! {
    /// Rendering the same graph twice gives identical bytes.
    #[test]
    fn prop_deterministic(triples in triples()) {
        let first = canonicalize(triples.clone(), &config()).unwrap();
        let second = canonicalize(triples, &config()).unwrap();
        prop_assert_eq!(first, second);
    }

    /// Input order never shows in the output.
    #[test]
    fn prop_order_independent(
        (triples, shuffled) in triples().prop_flat_map(|t| (Just(t.clone()), Just(t).prop_shuffle()))
    ) {
        prop_assert_eq!(
            canonicalize(triples, &config()).unwrap(),
            canonicalize(shuffled, &config()).unwrap()
        );
    }

    /// Foldable blank nodes are inlined exactly once and never labelled;
    /// every other described blank node gets exactly one block.
    #[test]
    fn prop_fold_forest(triples in triples()) {
        let graph: Graph = triples.iter().cloned().collect();
        let out = canonicalize(triples, &config()).unwrap();
        let terms = without_comments(&out);
        // Generated literals and URIs never contain brackets, so each one
        // opens exactly one inlined node.
        let foldable = graph.individuals().filter(|ind| is_foldable(ind)).count();
        prop_assert_eq!(terms.matches('[').count(), foldable, "inlined nodes:\n{}", out);
        prop_assert_eq!(terms.matches(']').count(), foldable, "inlined nodes:\n{}", out);
        for ind in graph.individuals() {
            let Resource::Blank(blank) = ind.subject() else { continue };
            let label = blank.as_str();
            if is_foldable(ind) {
                prop_assert!(!terms.contains(&format!("_:{label}")), "{} should be folded:\n{}", label, out);
            } else if ind.has_assertions() {
                prop_assert_eq!(blank_block_count(&out, label), 1, "{} block count:\n{}", label, out);
            }
        }
    }

    /// With folding off, every described blank node has its own block.
    #[test]
    fn prop_no_folding_when_disabled(triples in triples()) {
        let graph: Graph = triples.iter().cloned().collect();
        let out = canonicalize(triples, &config().with_folding(false)).unwrap();
        prop_assert!(!out.contains('['));
        for ind in graph.individuals() {
            if let Resource::Blank(blank) = ind.subject() {
                let expected = usize::from(ind.has_assertions());
                prop_assert_eq!(blank_block_count(&out, blank.as_str()), expected);
            }
        }
    }

    /// A prefix is declared exactly when its namespace is used.
    #[test]
    fn prop_namespace_minimality(triples in triples()) {
        let graph: Graph = triples.iter().cloned().collect();
        let out = canonicalize(triples, &config()).unwrap();
        let table = config().namespace_table().unwrap();
        for (namespace, prefix) in table.iter() {
            let directive = format!("@prefix {prefix}: <{namespace}> .");
            prop_assert_eq!(out.contains(&directive), graph.is_namespace_used(namespace));
        }
        let body = out.lines().filter(|l| !l.starts_with('@')).collect::<Vec<_>>().join("\n");
        for line in out.lines().filter(|l| l.starts_with("@prefix ")) {
            let prefix = line["@prefix ".len()..].split(':').next().unwrap_or_default();
            prop_assert!(body.contains(&format!("{prefix}:")), "unused prefix {}:\n{}", prefix, out);
        }
    }

    /// `xsd:string` never appears as a datatype suffix.
    #[test]
    fn prop_string_datatype_omitted(triples in triples()) {
        let out = canonicalize(triples, &config()).unwrap();
        prop_assert!(!out.contains("^^xsd:string"));
        prop_assert!(!out.contains(vocab::XSD_STRING));
    }
}
