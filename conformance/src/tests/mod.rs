//! Turtle documents exercised by the validators.

pub mod fixtures;
