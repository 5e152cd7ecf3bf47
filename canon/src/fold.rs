//! Decides which anonymous individuals are written inline.
//!
//! A blank node folds into its referrer when it has exactly one distinct
//! referrer and exactly one incoming link. Every foldable node then has a
//! single incoming edge, so folding consumes that edge and the fold relation
//! is a forest: no node is inlined twice and no node is its own ancestor.

use crate::individual::Individual;
use crate::node::Resource;

/// True when `individual` can be inlined at its only point of reference.
pub fn is_foldable(individual: &Individual) -> bool {
    individual.has_assertions()
        && individual.is_anonymous()
        && individual.referrers().len() == 1
        && individual.reference_count() == 1
}

/// True when `individual` is foldable and `referrer` is the one referring to it.
pub fn can_be_folded_by(individual: &Individual, referrer: &Resource) -> bool {
    is_foldable(individual) && individual.referrers().contains(referrer)
}

/// True when `individual` gets its own top-level block.
///
/// Pure reference nodes (no outgoing assertions) are never top-level; they
/// only appear as link targets.
pub fn is_top_level(individual: &Individual, folding_enabled: bool) -> bool {
    individual.has_assertions() && (!folding_enabled || !is_foldable(individual))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::{Literal, UriRef};

    fn blank_with_value() -> Individual {
        let mut ind = Individual::new(Resource::blank("b1"));
        ind.add_literal(&UriRef::new("http://example.org/name"), Literal::plain("Bob"));
        ind
    }

    #[test]
    fn single_referrer_single_reference_folds() {
        let mut ind = blank_with_value();
        let a = Resource::uri("http://example.org/a");
        ind.add_referrer(a.clone());
        assert!(is_foldable(&ind));
        assert!(can_be_folded_by(&ind, &a));
        assert!(!can_be_folded_by(&ind, &Resource::uri("http://example.org/c")));
        assert!(!is_top_level(&ind, true));
        assert!(is_top_level(&ind, false));
    }

    #[test]
    fn second_reference_from_same_referrer_blocks_folding() {
        let mut ind = blank_with_value();
        let a = Resource::uri("http://example.org/a");
        ind.add_referrer(a.clone());
        ind.add_referrer(a);
        assert!(!is_foldable(&ind));
        assert!(is_top_level(&ind, true));
    }

    #[test]
    fn second_referrer_blocks_folding() {
        let mut ind = blank_with_value();
        ind.add_referrer(Resource::uri("http://example.org/a"));
        ind.add_referrer(Resource::uri("http://example.org/c"));
        assert!(!is_foldable(&ind));
    }

    #[test]
    fn unreferenced_and_named_nodes_do_not_fold() {
        let ind = blank_with_value();
        assert!(!is_foldable(&ind));
        assert!(is_top_level(&ind, true));

        let mut named = Individual::new(Resource::uri("http://example.org/n"));
        named.add_literal(&UriRef::new("http://example.org/p"), Literal::plain("x"));
        named.add_referrer(Resource::uri("http://example.org/a"));
        assert!(!is_foldable(&named));
    }

    #[test]
    fn pure_references_are_never_top_level() {
        let mut ind = Individual::new(Resource::blank("b2"));
        ind.add_referrer(Resource::uri("http://example.org/a"));
        assert!(!is_foldable(&ind));
        assert!(!is_top_level(&ind, true));
        assert!(!is_top_level(&ind, false));
    }
}
