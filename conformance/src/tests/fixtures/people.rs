//! Named people with nested anonymous addresses and literals of every shape.

/// People, addresses and typed, tagged and multi-line literals.
pub const PEOPLE: &str = r#"
@prefix rdf:  <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .
@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix xsd:  <http://www.w3.org/2001/XMLSchema#> .
@prefix foaf: <http://xmlns.com/foaf/0.1/> .
@prefix ex:   <http://example.org/people/> .

ex:ann a foaf:Person ;
    foaf:name "Ann" ;
    foaf:age 34 ;
    rdfs:comment "Likes \"quoted\" words"@en ;
    ex:address [
        ex:street "1 Main St" ;
        ex:city "Springfield" ;
        ex:geo [ ex:lat "39.78"^^xsd:decimal ; ex:long "-89.65"^^xsd:decimal ]
    ] ;
    ex:bio """First line.
Second line with a tab	here.""" ;
    foaf:knows ex:bob .

ex:bob a foaf:Person ;
    foaf:name "Bob"^^xsd:string ;
    foaf:nick "bobby"@en, "bobo"@fr ;
    ex:homepage <http://example.org/~bob/index.html> .
"#;
