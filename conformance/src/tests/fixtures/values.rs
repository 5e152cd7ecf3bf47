//! Predicates with more values than fit on one line.

/// Five links and four literals under single predicates.
pub const MANY_VALUES: &str = r#"
@prefix ex: <http://example.org/> .

ex:hub ex:spoke ex:e, ex:d, ex:c, ex:b, ex:a ;
    ex:tag "w", "z", "y", "x" ;
    ex:pair ex:one, [ ex:name "anon" ] .
"#;
