//! RDF collections, which parse into chains of anonymous list cells.

/// A three-element list and an empty one.
pub const COLLECTION: &str = r#"
@prefix rdf: <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
@prefix ex:  <http://example.org/> .

ex:playlist ex:tracks ( "intro" "verse" "outro" ) ;
    ex:bonus () .
"#;
