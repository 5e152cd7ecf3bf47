//! Push-style ingestion boundary.
//!
//! A triple source (typically a streaming parser) drives a [`TripleSink`]:
//! `start`, then any interleaving of prefix, base and triple events, then
//! `end`. Declarations do not have to precede the statements that use them.

use tracing::debug;

use crate::error::{CanonError, Result};
use crate::graph::Graph;
use crate::namespace::NamespaceTable;
use crate::node::{Resource, Triple, UriRef};
use crate::term;
use crate::vocab;

/// Receiver of parser events.
pub trait TripleSink {
    /// Opens the stream.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError::Lifecycle`] if the stream was already opened.
    fn start(&mut self) -> Result<()>;

    /// A `@prefix` declaration.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError::Lifecycle`] outside the stream and
    /// [`CanonError::InvalidPrefix`] for an unusable declaration.
    fn declare_namespace(&mut self, prefix: &str, namespace: &str) -> Result<()>;

    /// A `@base` declaration.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError::Lifecycle`] outside the stream and
    /// [`CanonError::InvalidBase`] for a relative URI.
    fn set_base(&mut self, base: &str) -> Result<()>;

    /// One statement.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError::Lifecycle`] outside the stream and
    /// [`CanonError::InvalidBlankLabel`] for a blank node label Turtle cannot
    /// express.
    fn add_triple(&mut self, triple: Triple) -> Result<()>;

    /// Closes the stream.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError::Lifecycle`] if the stream is not open.
    fn end(&mut self) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Idle,
    Open,
    Closed,
}

/// A sink that assembles a [`Graph`].
#[derive(Debug)]
pub struct GraphBuilder {
    graph: Graph,
    state: State,
}

impl GraphBuilder {
    /// A builder with no prefix declarations.
    pub fn new() -> Self {
        Self::with_namespaces(NamespaceTable::new())
    }

    /// A builder seeded with caller-supplied prefixes. Declarations coming
    /// from the stream are added on top of them.
    pub fn with_namespaces(namespaces: NamespaceTable) -> Self {
        Self {
            graph: Graph::with_namespaces(namespaces),
            state: State::Idle,
        }
    }

    /// Returns the graph of a closed stream.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError::Lifecycle`] if `end` has not been called.
    pub fn finish(self) -> Result<Graph> {
        match self.state {
            State::Closed => Ok(self.graph),
            State::Idle | State::Open => Err(CanonError::Lifecycle("stream was not ended")),
        }
    }

    fn require_open(&self) -> Result<()> {
        match self.state {
            State::Open => Ok(()),
            State::Idle => Err(CanonError::Lifecycle("stream was not started")),
            State::Closed => Err(CanonError::Lifecycle("stream already ended")),
        }
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TripleSink for GraphBuilder {
    fn start(&mut self) -> Result<()> {
        match self.state {
            State::Idle => {
                self.state = State::Open;
                Ok(())
            }
            State::Open | State::Closed => Err(CanonError::Lifecycle("stream already started")),
        }
    }

    fn declare_namespace(&mut self, prefix: &str, namespace: &str) -> Result<()> {
        self.require_open()?;
        self.graph.declare_namespace(prefix, namespace)
    }

    fn set_base(&mut self, base: &str) -> Result<()> {
        self.require_open()?;
        if !term::is_absolute(base) {
            return Err(CanonError::InvalidBase(base.to_owned()));
        }
        self.graph.set_base(UriRef::new(base));
        Ok(())
    }

    fn add_triple(&mut self, triple: Triple) -> Result<()> {
        self.require_open()?;
        check_blank_label(&triple.subject)?;
        if let Some(object) = triple.object.as_resource() {
            check_blank_label(&object)?;
        }
        self.graph.add_triple(triple);
        Ok(())
    }

    fn end(&mut self) -> Result<()> {
        self.require_open()?;
        self.state = State::Closed;
        debug!(
            triples = self.graph.triple_count(),
            individuals = self.graph.len(),
            prefixes = self.graph.namespaces().len(),
            "triple stream closed"
        );
        Ok(())
    }
}

fn check_blank_label(resource: &Resource) -> Result<()> {
    match resource {
        Resource::Blank(blank) if !vocab::is_blank_label(blank.as_str()) => {
            Err(CanonError::InvalidBlankLabel(blank.as_str().to_owned()))
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Literal;

    fn triple() -> Triple {
        Triple::new(
            Resource::uri("http://example.org/a"),
            UriRef::new("http://example.org/p"),
            Literal::plain("x"),
        )
    }

    #[test]
    fn full_lifecycle() -> Result<()> {
        let mut builder = GraphBuilder::new();
        builder.start()?;
        builder.add_triple(triple())?;
        builder.declare_namespace("ex", "http://example.org/")?;
        builder.set_base("http://example.org/")?;
        builder.end()?;
        let graph = builder.finish()?;
        assert_eq!(graph.triple_count(), 1);
        assert_eq!(graph.active_prefix("http://example.org/"), Some("ex"));
        assert_eq!(graph.base().map(UriRef::as_str), Some("http://example.org/"));
        Ok(())
    }

    #[test]
    fn calls_outside_the_stream_fail() {
        let mut builder = GraphBuilder::new();
        assert!(matches!(
            builder.add_triple(triple()),
            Err(CanonError::Lifecycle(_))
        ));
        assert!(builder.start().is_ok());
        assert!(matches!(builder.start(), Err(CanonError::Lifecycle(_))));
        assert!(builder.end().is_ok());
        assert!(matches!(
            builder.declare_namespace("ex", "http://example.org/"),
            Err(CanonError::Lifecycle(_))
        ));
        assert!(matches!(builder.end(), Err(CanonError::Lifecycle(_))));
    }

    #[test]
    fn unfinished_stream_has_no_graph() {
        let mut builder = GraphBuilder::new();
        assert!(builder.start().is_ok());
        assert!(matches!(builder.finish(), Err(CanonError::Lifecycle(_))));
    }

    #[test]
    fn unwritable_blank_labels_are_rejected() {
        let mut builder = GraphBuilder::new();
        assert!(builder.start().is_ok());
        let spaced = Triple::new(
            Resource::blank("a b"),
            UriRef::new("http://example.org/p"),
            Literal::plain("v"),
        );
        assert_eq!(
            builder.add_triple(spaced),
            Err(CanonError::InvalidBlankLabel("a b".to_owned()))
        );
        let dotted = Triple::new(
            Resource::uri("http://example.org/s"),
            UriRef::new("http://example.org/p"),
            Resource::blank("x."),
        );
        assert!(matches!(
            builder.add_triple(dotted),
            Err(CanonError::InvalidBlankLabel(_))
        ));
        assert!(builder.end().is_ok());
        assert!(matches!(builder.finish(), Ok(graph) if graph.is_empty()));
    }

    #[test]
    fn relative_base_is_rejected() {
        let mut builder = GraphBuilder::new();
        assert!(builder.start().is_ok());
        assert!(matches!(
            builder.set_base("relative/"),
            Err(CanonError::InvalidBase(_))
        ));
    }
}
