//! The whole-document structure and the individual index built from triples.

use std::collections::{BTreeMap, BTreeSet};

use crate::individual::Individual;
use crate::namespace::NamespaceTable;
use crate::node::{Node, Resource, Triple, UriRef};
use crate::vocab;

/// A graph assembled from one triple stream.
///
/// Built once per serialization request, rendered once, then dropped.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    base: Option<UriRef>,
    index: BTreeMap<Resource, Individual>,
    namespaces: NamespaceTable,
    used_namespaces: BTreeSet<String>,
    triple_count: usize,
}

impl Graph {
    /// An empty graph with no declared prefixes.
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty graph seeded with caller-supplied prefix declarations.
    pub fn with_namespaces(namespaces: NamespaceTable) -> Self {
        Self {
            namespaces,
            ..Self::default()
        }
    }

    /// Ingests one triple.
    ///
    /// Literal objects become leaves of the subject's assertions. Resource
    /// objects become links, and the target records the subject as a referrer
    /// once per call, even for a repeated triple. Blank node labels are taken
    /// as given; [`crate::GraphBuilder`] is the checked way in.
    pub fn add_triple(&mut self, triple: Triple) {
        let Triple {
            subject,
            predicate,
            object,
        } = triple;
        self.triple_count += 1;

        self.mark_resource(&subject);
        self.mark_uri(&predicate);

        match object {
            Node::Literal(literal) => {
                if let Some(datatype) = literal.required_datatype() {
                    self.mark_uri(datatype);
                }
                self.locate_or_create(&subject)
                    .add_literal(&predicate, literal);
            }
            Node::Uri(uri) => self.add_link(subject, &predicate, Resource::Uri(uri)),
            Node::Blank(blank) => self.add_link(subject, &predicate, Resource::Blank(blank)),
        }
    }

    fn add_link(&mut self, subject: Resource, predicate: &UriRef, target: Resource) {
        self.mark_resource(&target);
        self.locate_or_create(&target).add_referrer(subject.clone());
        self.locate_or_create(&subject).add_link(predicate, target);
    }

    fn locate_or_create(&mut self, subject: &Resource) -> &mut Individual {
        self.index
            .entry(subject.clone())
            .or_insert_with(|| Individual::new(subject.clone()))
    }

    fn mark_resource(&mut self, resource: &Resource) {
        if let Resource::Uri(uri) = resource {
            self.mark_uri(uri);
        }
    }

    fn mark_uri(&mut self, uri: &UriRef) {
        if let Some(namespace) = vocab::namespace_of(uri.as_str()) {
            if !self.used_namespaces.contains(namespace) {
                self.used_namespaces.insert(namespace.to_owned());
            }
        }
    }

    /// Declares a prefix. See [`NamespaceTable::declare`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::CanonError::InvalidPrefix`] for an unusable declaration.
    pub fn declare_namespace(&mut self, prefix: &str, namespace: &str) -> crate::Result<()> {
        self.namespaces.declare(prefix, namespace)
    }

    /// Sets the base resource used to relativize URIs on output.
    pub fn set_base(&mut self, base: UriRef) {
        self.base = Some(base);
    }

    /// The base resource, if any.
    pub fn base(&self) -> Option<&UriRef> {
        self.base.as_ref()
    }

    /// The declared prefixes.
    pub fn namespaces(&self) -> &NamespaceTable {
        &self.namespaces
    }

    /// True if some term of the graph lives in `namespace`.
    pub fn is_namespace_used(&self, namespace: &str) -> bool {
        self.used_namespaces.contains(namespace)
    }

    /// The prefix to write for `namespace`: declared and used, or nothing.
    pub fn active_prefix(&self, namespace: &str) -> Option<&str> {
        if self.is_namespace_used(namespace) {
            self.namespaces.prefix_for(namespace)
        } else {
            None
        }
    }

    /// Looks up the individual for `subject`.
    pub fn individual(&self, subject: &Resource) -> Option<&Individual> {
        self.index.get(subject)
    }

    /// All individuals, in resource order.
    pub fn individuals(&self) -> impl Iterator<Item = &Individual> {
        self.index.values()
    }

    /// Number of distinct subjects and link targets.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// True if no triple was ingested.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Number of `add_triple` calls, duplicates included.
    pub fn triple_count(&self) -> usize {
        self.triple_count
    }
}

impl Extend<Triple> for Graph {
    fn extend<I: IntoIterator<Item = Triple>>(&mut self, triples: I) {
        for triple in triples {
            self.add_triple(triple);
        }
    }
}

impl FromIterator<Triple> for Graph {
    fn from_iter<I: IntoIterator<Item = Triple>>(triples: I) -> Self {
        let mut graph = Self::new();
        graph.extend(triples);
        graph
    }
}
