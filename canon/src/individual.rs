//! Per-subject aggregation of assertions and incoming references.

use std::collections::{BTreeMap, BTreeSet};

use crate::assertions::Assertions;
use crate::node::{Literal, Resource, UriRef};

/// Everything the graph knows about one subject.
///
/// Individuals never point at each other directly: links hold the target's
/// [`Resource`] and are resolved through the owning graph's index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Individual {
    subject: Resource,
    assertions: BTreeMap<UriRef, Assertions>,
    referrers: BTreeSet<Resource>,
    reference_count: u64,
}

impl Individual {
    pub(crate) fn new(subject: Resource) -> Self {
        Self {
            subject,
            assertions: BTreeMap::new(),
            referrers: BTreeSet::new(),
            reference_count: 0,
        }
    }

    /// The subject this individual describes.
    pub fn subject(&self) -> &Resource {
        &self.subject
    }

    /// True when the subject is a blank node.
    pub fn is_anonymous(&self) -> bool {
        self.subject.is_blank()
    }

    /// True when the subject carries at least one outgoing assertion.
    pub fn has_assertions(&self) -> bool {
        !self.assertions.is_empty()
    }

    /// Outgoing assertions keyed by predicate.
    pub fn assertions(&self) -> impl Iterator<Item = &Assertions> {
        self.assertions.values()
    }

    /// Values asserted for `predicate`.
    pub fn assertions_for(&self, predicate: &UriRef) -> Option<&Assertions> {
        self.assertions.get(predicate)
    }

    /// Distinct subjects that link to this one.
    pub fn referrers(&self) -> &BTreeSet<Resource> {
        &self.referrers
    }

    /// Incoming links, counted once per ingested triple.
    pub fn reference_count(&self) -> u64 {
        self.reference_count
    }

    pub(crate) fn add_literal(&mut self, predicate: &UriRef, literal: Literal) {
        self.values_mut(predicate).add_literal(literal);
    }

    pub(crate) fn add_link(&mut self, predicate: &UriRef, target: Resource) {
        self.values_mut(predicate).add_link(target);
    }

    /// Records one incoming link from `referrer`.
    ///
    /// The only place the referrer set and the reference count change, which
    /// keeps `referrers.len() <= reference_count`.
    pub(crate) fn add_referrer(&mut self, referrer: Resource) {
        self.referrers.insert(referrer);
        self.reference_count += 1;
        debug_assert!(self.referrers.len() as u64 <= self.reference_count);
    }

    fn values_mut(&mut self, predicate: &UriRef) -> &mut Assertions {
        self.assertions
            .entry(predicate.clone())
            .or_insert_with(|| Assertions::new(predicate.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_referrer_counts_twice() {
        let mut target = Individual::new(Resource::blank("b"));
        target.add_referrer(Resource::uri("http://example.org/a"));
        target.add_referrer(Resource::uri("http://example.org/a"));
        assert_eq!(target.referrers().len(), 1);
        assert_eq!(target.reference_count(), 2);
    }

    #[test]
    fn assertions_group_by_predicate() {
        let p = UriRef::new("http://example.org/p");
        let mut ind = Individual::new(Resource::uri("http://example.org/s"));
        assert!(!ind.has_assertions());
        ind.add_literal(&p, Literal::plain("x"));
        ind.add_link(&p, Resource::blank("b"));
        assert!(ind.has_assertions());
        assert_eq!(ind.assertions().count(), 1);
        assert_eq!(ind.assertions_for(&p).map(Assertions::len), Some(2));
        assert!(!ind.is_anonymous());
    }
}
