//! Values asserted for one (subject, predicate) pair.

use std::collections::{BTreeSet, HashSet};

use crate::node::{Literal, Resource, UriRef};

/// The resolved values of one predicate on one subject.
///
/// Literal leaves are kept sorted and deduplicated; links to other individuals
/// keep their first-seen order and are deduplicated by target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assertions {
    predicate: UriRef,
    literals: BTreeSet<Literal>,
    links: Vec<Resource>,
    linked: HashSet<Resource>,
}

impl Assertions {
    pub(crate) fn new(predicate: UriRef) -> Self {
        Self {
            predicate,
            literals: BTreeSet::new(),
            links: Vec::new(),
            linked: HashSet::new(),
        }
    }

    /// The predicate these values answer for.
    pub fn predicate(&self) -> &UriRef {
        &self.predicate
    }

    /// Literal values in literal order.
    pub fn literals(&self) -> impl Iterator<Item = &Literal> {
        self.literals.iter()
    }

    /// Linked subjects in first-seen order.
    pub fn links(&self) -> &[Resource] {
        &self.links
    }

    /// Number of distinct values.
    pub fn len(&self) -> usize {
        self.literals.len() + self.links.len()
    }

    /// True if no value has been asserted.
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty() && self.links.is_empty()
    }

    /// Returns false if the literal was already present.
    pub(crate) fn add_literal(&mut self, literal: Literal) -> bool {
        self.literals.insert(literal)
    }

    /// Returns false if the link was already present.
    pub(crate) fn add_link(&mut self, target: Resource) -> bool {
        if !self.linked.insert(target.clone()) {
            return false;
        }
        self.links.push(target);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicates_collapse() {
        let mut values = Assertions::new(UriRef::new("http://example.org/p"));
        assert!(values.add_literal(Literal::plain("x")));
        assert!(!values.add_literal(Literal::plain("x")));
        assert!(values.add_link(Resource::blank("b")));
        assert!(!values.add_link(Resource::blank("b")));
        assert_eq!(values.len(), 2);
    }

    #[test]
    fn links_keep_insertion_order() {
        let mut values = Assertions::new(UriRef::new("http://example.org/p"));
        values.add_link(Resource::uri("http://example.org/z"));
        values.add_link(Resource::uri("http://example.org/a"));
        assert_eq!(
            values.links(),
            &[
                Resource::uri("http://example.org/z"),
                Resource::uri("http://example.org/a")
            ]
        );
    }

    #[test]
    fn wide_fan_out_stays_deduplicated() {
        let mut values = Assertions::new(UriRef::new("http://example.org/p"));
        for i in 0..20_000 {
            assert!(values.add_link(Resource::uri(format!("http://example.org/n{i}"))));
        }
        assert_eq!(values.len(), 20_000);
        assert!(!values.add_link(Resource::uri("http://example.org/n19999")));
        assert_eq!(values.links()[0], Resource::uri("http://example.org/n0"));
    }
}
