//! Blank nodes that cannot be folded, or can only be folded partway.

/// One blank node referenced from two subjects, one unreferenced blank node.
pub const SHARED_BLANK: &str = r#"
@prefix ex: <http://example.org/> .

ex:a ex:office _:hq .
ex:c ex:office _:hq .
_:hq ex:city "Lyon" .
_:note ex:text "nobody points here" .
"#;

/// Two blank nodes referencing only each other.
pub const FOLD_CYCLE: &str = r#"
@prefix ex: <http://example.org/> .

_:left ex:next _:right .
_:right ex:next _:left .
ex:anchor ex:label "outside the cycle" .
"#;
