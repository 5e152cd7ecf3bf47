//! Turtle and N-Triples input, parsed by `sophia_turtle` and pushed into a
//! [`TripleSink`].
//!
//! The parser resolves every IRI against the document base, so the engine
//! only ever sees absolute URIs. Prefix and base directives are recovered by
//! scanning the source token by token and forwarded to the sink as
//! declarations.

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use regex::Regex;
use sophia_api::source::TripleSource;
use sophia_api::term::{Term, TermKind};
use sophia_api::triple::Triple as SophiaTriple;
use sophia_turtle::parser::{nt, turtle};
use thiserror::Error;
use tracing::debug;
use ttl_canon::term::is_absolute;
use ttl_canon::{
    vocab, BlankNode, CanonError, Graph, GraphBuilder, Literal, NamespaceTable, Node,
    RenderConfig, Renderer, Triple, TripleSink, UriRef,
};

/// Input syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Turtle 1.1.
    Turtle,
    /// N-Triples.
    NTriples,
}

impl Format {
    /// Guesses the format from a file extension (`.ttl`, `.nt`).
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "ttl" | "turtle" => Some(Self::Turtle),
            "nt" | "ntriples" => Some(Self::NTriples),
            _ => None,
        }
    }
}

/// Failure while converting one parsed statement.
#[derive(Error, Debug)]
pub enum ReadError {
    /// A term kind the engine does not model (quoted triples, variables).
    #[error("unsupported term in input: {0:?}")]
    UnsupportedTerm(TermKind),
    /// The sink refused the statement.
    #[error(transparent)]
    Canon(#[from] CanonError),
}

/// Parses `src` and drives `sink` through a full `start` .. `end` cycle.
///
/// # Errors
///
/// Returns an error if the document does not parse or the sink rejects an
/// event.
pub fn load_str<S: TripleSink>(src: &str, format: Format, sink: &mut S) -> Result<()> {
    sink.start()?;
    if format == Format::Turtle {
        forward_directives(src, sink)?;
    }
    match format {
        Format::Turtle => turtle::parse_str(src)
            .try_for_each_triple(|t| push(sink, &t))
            .map_err(|e| anyhow!("{e}"))
            .context("failed to parse Turtle input")?,
        Format::NTriples => nt::parse_str(src)
            .try_for_each_triple(|t| push(sink, &t))
            .map_err(|e| anyhow!("{e}"))
            .context("failed to parse N-Triples input")?,
    }
    sink.end()?;
    Ok(())
}

/// Parses `src` into a graph seeded with `namespaces`.
///
/// # Errors
///
/// Returns an error if the document does not parse.
pub fn read_graph(src: &str, format: Format, namespaces: NamespaceTable) -> Result<Graph> {
    let mut builder = GraphBuilder::with_namespaces(namespaces);
    load_str(src, format, &mut builder)?;
    Ok(builder.finish()?)
}

/// Parses `src` into its statements and declarations, seeding the
/// declarations with `namespaces`.
///
/// # Errors
///
/// Returns an error if the document does not parse.
pub fn read_document(src: &str, format: Format, namespaces: NamespaceTable) -> Result<Document> {
    let mut document = Document {
        namespaces,
        ..Document::default()
    };
    load_str(src, format, &mut document)?;
    Ok(document)
}

/// Parses `src` into a flat list of triples, duplicates included.
///
/// # Errors
///
/// Returns an error if the document does not parse.
pub fn parse_triples(src: &str, format: Format) -> Result<Vec<Triple>> {
    Ok(read_document(src, format, NamespaceTable::new())?.triples)
}

/// Parses `src` and renders it canonically under `config`.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the document does not
/// parse.
pub fn canonicalize_str(src: &str, format: Format, config: &RenderConfig) -> Result<String> {
    config.validate()?;
    let graph = read_graph(src, format, config.namespace_table()?)?;
    Ok(Renderer::new(config).render(&graph))
}

fn push<S: TripleSink, T: SophiaTriple>(sink: &mut S, triple: &T) -> Result<(), ReadError> {
    let triple = Triple::try_from_nodes(
        to_node(triple.s())?,
        to_node(triple.p())?,
        to_node(triple.o())?,
    )?;
    sink.add_triple(triple)?;
    Ok(())
}

fn to_node<T: Term>(term: T) -> Result<Node, ReadError> {
    let kind = term.kind();
    let node = match kind {
        TermKind::Iri => term.iri().map(|iri| Node::Uri(UriRef::new(iri.as_str()))),
        TermKind::BlankNode => term
            .bnode_id()
            .map(|id| Node::Blank(BlankNode::new(id.as_str()))),
        TermKind::Literal => term.lexical_form().map(|lex| {
            let label = lex.to_string();
            if let Some(tag) = term.language_tag() {
                return Node::Literal(Literal::lang(label, tag.as_str()));
            }
            match term.datatype() {
                Some(dt) if dt.as_str() != vocab::XSD_STRING => {
                    Node::Literal(Literal::typed(label, dt.as_str()))
                }
                _ => Node::Literal(Literal::plain(label)),
            }
        }),
        _ => None,
    };
    node.ok_or(ReadError::UnsupportedTerm(kind))
}

/// Directives, plus the tokens that may hide directive-shaped text: long and
/// short strings, comments, IRIs and other bare words. Only the first two
/// alternatives capture.
const DIRECTIVE_SCAN: &str = r##"(?s)(?:@prefix|(?i:prefix))\s+(\p{L}[\w.\-]*)?:\s*<([^>]*)>|(?:@base|(?i:base))\s+<([^>]*)>|"""(?:[^\\]|\\.)*?"""|'''(?:[^\\]|\\.)*?'''|"(?:[^"\\\n]|\\.)*"|'(?:[^'\\\n]|\\.)*'|#[^\n]*|<[^>\s]*>|[^\s"'#<@]+"##;

/// Forwards `@prefix` / `PREFIX` and `@base` / `BASE` directives to `sink` in
/// document order.
///
/// Text inside string literals, comments and IRIs is stepped over, and any
/// number of directives may share a line. Relative namespaces are skipped:
/// the parser resolves terms to absolute URIs, which never fall under them.
fn forward_directives<S: TripleSink>(src: &str, sink: &mut S) -> Result<()> {
    let scan = Regex::new(DIRECTIVE_SCAN).context("invalid directive pattern")?;
    for caps in scan.captures_iter(src) {
        if let Some(namespace) = caps.get(2) {
            let prefix = caps.get(1).map_or("", |m| m.as_str());
            let namespace = namespace.as_str();
            if is_absolute(namespace) {
                sink.declare_namespace(prefix, namespace)?;
            } else {
                debug!(prefix, namespace, "skipping relative prefix declaration");
            }
        } else if let Some(base) = caps.get(3) {
            if is_absolute(base.as_str()) {
                sink.set_base(base.as_str())?;
            }
        }
    }
    Ok(())
}

/// Everything a document says: its statements and its declarations.
///
/// As a [`TripleSink`] it accepts events in any state, so it can be reused to
/// collect several documents into one.
#[derive(Debug, Clone, Default)]
pub struct Document {
    /// Statements in document order, duplicates included.
    pub triples: Vec<Triple>,
    /// Prefixes seeded by the caller plus those the document declares.
    pub namespaces: NamespaceTable,
    /// The last base the document declares.
    pub base: Option<UriRef>,
}

impl Document {
    /// Assembles the statements into a graph carrying the declarations.
    pub fn to_graph(&self) -> Graph {
        self.graph_from(self.triples.iter().cloned())
    }

    /// A graph with this document's declarations over `triples`.
    pub fn graph_from<I: IntoIterator<Item = Triple>>(&self, triples: I) -> Graph {
        let mut graph = Graph::with_namespaces(self.namespaces.clone());
        if let Some(base) = &self.base {
            graph.set_base(base.clone());
        }
        graph.extend(triples);
        graph
    }
}

impl TripleSink for Document {
    fn start(&mut self) -> ttl_canon::Result<()> {
        Ok(())
    }

    fn declare_namespace(&mut self, prefix: &str, namespace: &str) -> ttl_canon::Result<()> {
        self.namespaces.declare(prefix, namespace)
    }

    fn set_base(&mut self, base: &str) -> ttl_canon::Result<()> {
        if !is_absolute(base) {
            return Err(CanonError::InvalidBase(base.to_owned()));
        }
        self.base = Some(UriRef::new(base));
        Ok(())
    }

    fn add_triple(&mut self, triple: Triple) -> ttl_canon::Result<()> {
        self.triples.push(triple);
        Ok(())
    }

    fn end(&mut self) -> ttl_canon::Result<()> {
        Ok(())
    }
}
