//! Canonical Turtle serialization for RDF triple streams.
//!
//! The `ttl-canon` crate assembles an unordered stream of triples into a
//! [`Graph`] and renders it as a deterministic, readable Turtle document:
//! subjects, predicates and values come out in a fixed order regardless of
//! input order, only the prefixes actually needed are declared, and blank
//! nodes referenced exactly once are written inline as `[ ... ]`.
//!
//! # Entry Point
//!
//! ```
//! use ttl_canon::{canonicalize, Literal, RenderConfig, Resource, Triple, UriRef};
//!
//! let triples = vec![
//!     Triple::new(
//!         Resource::uri("http://example.org/a"),
//!         UriRef::new("http://example.org/knows"),
//!         Resource::blank("b1"),
//!     ),
//!     Triple::new(
//!         Resource::blank("b1"),
//!         UriRef::new("http://example.org/name"),
//!         Literal::plain("Bob"),
//!     ),
//! ];
//! let config = RenderConfig::default().with_prefix("ex", "http://example.org/");
//! let turtle = canonicalize(triples, &config)?;
//! assert!(turtle.contains("ex:knows [ ex:name \"Bob\" ] ."));
//! # Ok::<(), ttl_canon::CanonError>(())
//! ```
//!
//! # Streaming
//!
//! Parsers push events into a [`TripleSink`]; [`GraphBuilder`] is the sink
//! that assembles the graph, and [`Renderer`] turns it into text.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod assertions;
pub mod config;
pub mod error;
pub mod fold;
pub mod graph;
pub mod individual;
pub mod namespace;
pub mod node;
pub mod order;
pub mod render;
pub mod sink;
pub mod term;
pub mod vocab;

pub use assertions::Assertions;
pub use config::RenderConfig;
pub use error::{CanonError, Result};
pub use graph::Graph;
pub use individual::Individual;
pub use namespace::{NamespacePriority, NamespaceTable};
pub use node::{BlankNode, Literal, Node, Resource, Triple, UriRef};
pub use render::Renderer;
pub use sink::{GraphBuilder, TripleSink};

/// Runs the whole pipeline over an in-memory triple sequence.
///
/// Prefixes come from `config.prefixes`; the base from `config.base_uri`.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or a blank node label
/// cannot be written in Turtle. Nothing is rendered in either case.
pub fn canonicalize<I>(triples: I, config: &RenderConfig) -> Result<String>
where
    I: IntoIterator<Item = Triple>,
{
    config.validate()?;
    let mut builder = GraphBuilder::with_namespaces(config.namespace_table()?);
    builder.start()?;
    for triple in triples {
        builder.add_triple(triple)?;
    }
    builder.end()?;
    let graph = builder.finish()?;
    Ok(Renderer::new(config).render(&graph))
}
