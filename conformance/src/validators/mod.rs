//! Validators over one rendered document.
//!
//! Each validator inspects a [`Rendered`] input and reports what it found;
//! none of them change the rendering.

pub mod determinism;
pub mod folding;
pub mod namespaces;
pub mod roundtrip;

use anyhow::Result;
use ttl_canon::{Graph, RenderConfig, Renderer, Triple};

use crate::reader::{read_document, Document, Format};

/// A parsed input document together with its canonical rendering.
#[derive(Debug)]
pub struct Rendered {
    /// The parsed input.
    pub document: Document,
    /// The graph assembled from the input.
    pub graph: Graph,
    /// The canonical Turtle text.
    pub output: String,
    /// Whether blank nodes were folded.
    pub folding: bool,
    renderer: Renderer,
}

impl Rendered {
    /// Parses `source` and renders it under `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the document does
    /// not parse.
    pub fn new(source: &str, format: Format, config: &RenderConfig) -> Result<Self> {
        config.validate()?;
        let document = read_document(source, format, config.namespace_table()?)?;
        let graph = document.to_graph();
        let renderer = Renderer::new(config);
        let output = renderer.render(&graph);
        Ok(Self {
            document,
            graph,
            output,
            folding: config.enable_folding,
            renderer,
        })
    }

    /// Renders `triples` with the same declarations and configuration.
    pub fn render_triples<I: IntoIterator<Item = Triple>>(&self, triples: I) -> String {
        self.renderer.render(&self.document.graph_from(triples))
    }
}
