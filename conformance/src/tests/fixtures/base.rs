//! Relative references resolved against a document base.

/// A document whose terms mostly sit under its base.
pub const RELATIVE_BASE: &str = r#"
@base <http://example.org/data/> .
@prefix ex: <http://example.org/vocab#> .

<alice> ex:knows <bob>, <carol#me>, <../elsewhere> ;
    ex:seeAlso <http://other.example/x> .
<bob> ex:name "Bob" .
"#;
