//! Prefix declarations and namespace ordering.

use std::collections::BTreeMap;

use crate::error::{CanonError, Result};
use crate::vocab;

/// Mapping from namespace URI to its declared prefix.
///
/// Built once per serialization request and read-only while rendering. A
/// prefix names at most one namespace and a namespace has at most one prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamespaceTable {
    by_namespace: BTreeMap<String, String>,
}

impl NamespaceTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// A table declaring `rdf`, `rdfs`, `owl` and `xsd`.
    pub fn well_known() -> Self {
        let mut by_namespace = BTreeMap::new();
        for (prefix, namespace) in [
            ("rdf", vocab::RDF),
            ("rdfs", vocab::RDFS),
            ("owl", vocab::OWL),
            ("xsd", vocab::XSD),
        ] {
            by_namespace.insert(namespace.to_owned(), prefix.to_owned());
        }
        Self { by_namespace }
    }

    /// Declares `prefix` for `namespace`.
    ///
    /// A later declaration for the same namespace replaces the earlier prefix.
    /// Re-binding a prefix to a different namespace drops the old binding.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError::InvalidPrefix`] when the prefix is not a Turtle
    /// prefix name or the namespace is empty.
    pub fn declare(&mut self, prefix: &str, namespace: &str) -> Result<()> {
        if !vocab::is_prefix_name(prefix) {
            return Err(CanonError::InvalidPrefix {
                prefix: prefix.to_owned(),
                reason: "not a valid Turtle prefix name",
            });
        }
        if namespace.is_empty() {
            return Err(CanonError::InvalidPrefix {
                prefix: prefix.to_owned(),
                reason: "namespace URI is empty",
            });
        }
        self.by_namespace.retain(|_, p| p != prefix);
        self.by_namespace
            .insert(namespace.to_owned(), prefix.to_owned());
        Ok(())
    }

    /// The prefix declared for `namespace`, if any.
    pub fn prefix_for(&self, namespace: &str) -> Option<&str> {
        self.by_namespace.get(namespace).map(String::as_str)
    }

    /// True only for `xsd:string`, whose `^^` suffix Turtle lets us drop.
    pub fn is_omittable_datatype(&self, uri: &str) -> bool {
        uri == vocab::XSD_STRING
    }

    /// `(namespace, prefix)` pairs in namespace order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.by_namespace
            .iter()
            .map(|(namespace, prefix)| (namespace.as_str(), prefix.as_str()))
    }

    /// Number of declared namespaces.
    pub fn len(&self) -> usize {
        self.by_namespace.len()
    }

    /// True if nothing is declared.
    pub fn is_empty(&self) -> bool {
        self.by_namespace.is_empty()
    }
}

/// Namespace ranking used when ordering predicates.
///
/// Namespaces listed earlier sort first; any namespace not listed ranks after
/// all listed ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamespacePriority {
    order: Vec<String>,
}

impl NamespacePriority {
    /// A priority table from an explicit list of namespace URIs.
    pub fn new<I, S>(namespaces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            order: namespaces.into_iter().map(Into::into).collect(),
        }
    }

    /// Rank of the namespace of `uri`. Lower ranks sort first.
    pub fn rank(&self, uri: &str) -> usize {
        self.order
            .iter()
            .position(|namespace| uri.starts_with(namespace.as_str()))
            .unwrap_or(self.order.len())
    }
}

impl Default for NamespacePriority {
    /// RDF, RDFS, OWL, XSD.
    fn default() -> Self {
        Self::new([vocab::RDF, vocab::RDFS, vocab::OWL, vocab::XSD])
    }
}
