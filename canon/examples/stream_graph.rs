//! Drives a `GraphBuilder` the way a streaming parser would and prints the
//! canonical rendering along with a summary of the index.
//!
//! Run with: `cargo run --example stream_graph -p ttl-canon`

use ttl_canon::{
    vocab, GraphBuilder, Literal, RenderConfig, Renderer, Resource, Triple, TripleSink, UriRef,
};

const EX: &str = "http://example.org/";

fn ex(local: &str) -> UriRef {
    UriRef::new(format!("{EX}{local}"))
}

fn main() -> ttl_canon::Result<()> {
    let mut builder = GraphBuilder::new();
    builder.start()?;

    // Statements may arrive before the prefix that shortens them.
    builder.add_triple(Triple::new(
        Resource::uri(format!("{EX}ann")),
        UriRef::new(vocab::RDF_TYPE),
        Resource::uri(format!("{EX}Person")),
    ))?;
    builder.declare_namespace("ex", EX)?;
    builder.declare_namespace("rdf", vocab::RDF)?;
    builder.add_triple(Triple::new(
        Resource::uri(format!("{EX}ann")),
        ex("address"),
        Resource::blank("addr"),
    ))?;
    builder.add_triple(Triple::new(
        Resource::blank("addr"),
        ex("city"),
        Literal::plain("Springfield"),
    ))?;
    builder.add_triple(Triple::new(
        Resource::blank("addr"),
        ex("zip"),
        Literal::typed("62701", vocab::XSD_INTEGER),
    ))?;
    builder.end()?;
    let graph = builder.finish()?;

    println!("Graph: {} triples, {} individuals", graph.triple_count(), graph.len());
    for ind in graph.individuals() {
        println!(
            "  {:32} assertions: {}  referenced: {}",
            ind.subject().to_string(),
            ind.assertions().count(),
            ind.reference_count()
        );
    }
    println!();

    print!("{}", Renderer::new(&RenderConfig::default()).render(&graph));
    Ok(())
}
