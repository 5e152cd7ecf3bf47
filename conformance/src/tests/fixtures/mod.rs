//! Input documents for the conformance validators.
//!
//! Each constant holds a Turtle 1.1 document that stresses one part of the
//! canonical layout: folding, shared blank nodes, fold cycles, relative
//! references, collections and long value lists.

mod base;
mod collection;
mod cycle;
mod people;
mod values;

pub use base::RELATIVE_BASE;
pub use collection::COLLECTION;
pub use cycle::{FOLD_CYCLE, SHARED_BLANK};
pub use people::PEOPLE;
pub use values::MANY_VALUES;

/// Every fixture with a short name.
pub const ALL: &[(&str, &str)] = &[
    ("people", PEOPLE),
    ("shared_blank", SHARED_BLANK),
    ("fold_cycle", FOLD_CYCLE),
    ("relative_base", RELATIVE_BASE),
    ("collection", COLLECTION),
    ("many_values", MANY_VALUES),
];
