//! RDF terms and triples.
//!
//! The term model is a closed set of sum types. Every consumer matches on it
//! exhaustively, so a new variant cannot slip through unhandled.
//!
//! Identifiers are reference counted strings: an individual's subject is
//! cloned into the index, into referrer sets, and into link lists, and all of
//! those clones share one allocation.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use crate::error::{CanonError, Result};
use crate::vocab;

/// An absolute (or at least caller-resolved) URI reference.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UriRef(Arc<str>);

impl UriRef {
    /// Creates a URI reference from its full string form.
    pub fn new(uri: impl AsRef<str>) -> Self {
        Self(Arc::from(uri.as_ref()))
    }

    /// The full URI string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UriRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}>", self.0)
    }
}

/// A blank node label, without the `_:` prefix.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlankNode(Arc<str>);

impl BlankNode {
    /// Creates a blank node from its document-local label.
    ///
    /// The label is not checked here and is written out verbatim, so it must
    /// be a Turtle `BLANK_NODE_LABEL` body. [`crate::GraphBuilder`] rejects
    /// anything else; use [`BlankNode::try_new`] to check up front.
    pub fn new(label: impl AsRef<str>) -> Self {
        Self(Arc::from(label.as_ref()))
    }

    /// Creates a blank node, rejecting labels Turtle cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError::InvalidBlankLabel`] for a label that is not a
    /// `BLANK_NODE_LABEL` body.
    pub fn try_new(label: impl AsRef<str>) -> Result<Self> {
        let label = label.as_ref();
        if !vocab::is_blank_label(label) {
            return Err(CanonError::InvalidBlankLabel(label.to_owned()));
        }
        Ok(Self::new(label))
    }

    /// The label, without `_:`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BlankNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "_:{}", self.0)
    }
}

/// A term that can be a triple subject or a link target.
///
/// URI references order before blank nodes.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Resource {
    /// A named resource.
    Uri(UriRef),
    /// An anonymous resource.
    Blank(BlankNode),
}

impl Resource {
    /// Shorthand for `Resource::Uri(UriRef::new(uri))`.
    pub fn uri(uri: impl AsRef<str>) -> Self {
        Self::Uri(UriRef::new(uri))
    }

    /// Shorthand for `Resource::Blank(BlankNode::new(label))`.
    pub fn blank(label: impl AsRef<str>) -> Self {
        Self::Blank(BlankNode::new(label))
    }

    /// True for blank nodes.
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Blank(_))
    }

    /// The URI, if this is a named resource.
    pub fn as_uri(&self) -> Option<&UriRef> {
        match self {
            Self::Uri(uri) => Some(uri),
            Self::Blank(_) => None,
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uri(uri) => uri.fmt(f),
            Self::Blank(blank) => blank.fmt(f),
        }
    }
}

impl From<UriRef> for Resource {
    fn from(uri: UriRef) -> Self {
        Self::Uri(uri)
    }
}

impl From<BlankNode> for Resource {
    fn from(blank: BlankNode) -> Self {
        Self::Blank(blank)
    }
}

/// A literal value, kept in lexical form.
///
/// The engine never interprets typed values; it re-serializes the lexical
/// label and the datatype URI exactly as received.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Literal {
    /// A simple string literal.
    Plain(String),
    /// A string with a language tag.
    LanguageTagged {
        /// Lexical form.
        label: String,
        /// Language tag, without `@`.
        lang: String,
    },
    /// A literal with an explicit datatype.
    Typed {
        /// Lexical form.
        label: String,
        /// Datatype URI.
        datatype: UriRef,
    },
}

impl Literal {
    /// A plain literal.
    pub fn plain(label: impl Into<String>) -> Self {
        Self::Plain(label.into())
    }

    /// A language-tagged literal.
    pub fn lang(label: impl Into<String>, lang: impl Into<String>) -> Self {
        Self::LanguageTagged {
            label: label.into(),
            lang: lang.into(),
        }
    }

    /// A typed literal.
    pub fn typed(label: impl Into<String>, datatype: impl AsRef<str>) -> Self {
        Self::Typed {
            label: label.into(),
            datatype: UriRef::new(datatype),
        }
    }

    /// The lexical form.
    pub fn label(&self) -> &str {
        match self {
            Self::Plain(label)
            | Self::LanguageTagged { label, .. }
            | Self::Typed { label, .. } => label,
        }
    }

    /// The datatype URI of a typed literal whose datatype must be written out.
    ///
    /// `xsd:string` is the Turtle default and is never reported here.
    pub fn required_datatype(&self) -> Option<&UriRef> {
        match self {
            Self::Typed { datatype, .. } if datatype.as_str() != vocab::XSD_STRING => {
                Some(datatype)
            }
            _ => None,
        }
    }

    fn variant_rank(&self) -> u8 {
        match self {
            Self::Plain(_) => 0,
            Self::LanguageTagged { .. } => 1,
            Self::Typed { .. } => 2,
        }
    }
}

impl Ord for Literal {
    fn cmp(&self, other: &Self) -> Ordering {
        self.label()
            .cmp(other.label())
            .then_with(|| self.variant_rank().cmp(&other.variant_rank()))
            .then_with(|| match (self, other) {
                (Self::LanguageTagged { lang: a, .. }, Self::LanguageTagged { lang: b, .. }) => {
                    a.cmp(b)
                }
                (Self::Typed { datatype: a, .. }, Self::Typed { datatype: b, .. }) => a.cmp(b),
                _ => Ordering::Equal,
            })
    }
}

impl PartialOrd for Literal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain(label) => write!(f, "{label:?}"),
            Self::LanguageTagged { label, lang } => write!(f, "{label:?}@{lang}"),
            Self::Typed { label, datatype } => write!(f, "{label:?}^^{datatype}"),
        }
    }
}

/// Any RDF term.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Node {
    /// A URI reference.
    Uri(UriRef),
    /// A blank node.
    Blank(BlankNode),
    /// A literal.
    Literal(Literal),
}

impl Node {
    /// The resource view of this node, if it is one.
    pub fn as_resource(&self) -> Option<Resource> {
        match self {
            Self::Uri(uri) => Some(Resource::Uri(uri.clone())),
            Self::Blank(blank) => Some(Resource::Blank(blank.clone())),
            Self::Literal(_) => None,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uri(uri) => uri.fmt(f),
            Self::Blank(blank) => blank.fmt(f),
            Self::Literal(literal) => literal.fmt(f),
        }
    }
}

impl From<Resource> for Node {
    fn from(resource: Resource) -> Self {
        match resource {
            Resource::Uri(uri) => Self::Uri(uri),
            Resource::Blank(blank) => Self::Blank(blank),
        }
    }
}

impl From<UriRef> for Node {
    fn from(uri: UriRef) -> Self {
        Self::Uri(uri)
    }
}

impl From<BlankNode> for Node {
    fn from(blank: BlankNode) -> Self {
        Self::Blank(blank)
    }
}

impl From<Literal> for Node {
    fn from(literal: Literal) -> Self {
        Self::Literal(literal)
    }
}

/// An immutable RDF statement.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Triple {
    /// Who the statement is about.
    pub subject: Resource,
    /// The property.
    pub predicate: UriRef,
    /// The value.
    pub object: Node,
}

impl Triple {
    /// Builds a triple from already well-shaped parts.
    pub fn new(
        subject: impl Into<Resource>,
        predicate: UriRef,
        object: impl Into<Node>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate,
            object: object.into(),
        }
    }

    /// Builds a triple from arbitrary terms, checking their positions.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError::InvalidSubject`] for a literal subject and
    /// [`CanonError::InvalidPredicate`] for a predicate that is not a URI.
    pub fn try_from_nodes(subject: Node, predicate: Node, object: Node) -> Result<Self> {
        let subject = subject
            .as_resource()
            .ok_or_else(|| CanonError::InvalidSubject(subject.to_string()))?;
        let Node::Uri(predicate) = predicate else {
            return Err(CanonError::InvalidPredicate(predicate.to_string()));
        };
        Ok(Self {
            subject,
            predicate,
            object,
        })
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_order_is_label_first() {
        let mut literals = vec![
            Literal::typed("b", vocab::XSD_INTEGER),
            Literal::lang("a", "en"),
            Literal::plain("b"),
            Literal::plain("a"),
        ];
        literals.sort();
        assert_eq!(
            literals,
            vec![
                Literal::plain("a"),
                Literal::lang("a", "en"),
                Literal::plain("b"),
                Literal::typed("b", vocab::XSD_INTEGER),
            ]
        );
    }

    #[test]
    fn xsd_string_is_not_a_required_datatype() {
        assert_eq!(
            Literal::typed("x", vocab::XSD_STRING).required_datatype(),
            None
        );
        assert_eq!(
            Literal::typed("1", vocab::XSD_INTEGER).required_datatype(),
            Some(&UriRef::new(vocab::XSD_INTEGER))
        );
    }

    #[test]
    fn checked_blank_labels() {
        assert!(BlankNode::try_new("b1").is_ok());
        assert_eq!(
            BlankNode::try_new("a b"),
            Err(CanonError::InvalidBlankLabel("a b".to_owned()))
        );
        assert!(BlankNode::try_new("x.").is_err());
    }

    #[test]
    fn uris_order_before_blank_nodes() {
        assert!(Resource::uri("z:z") < Resource::blank("a"));
    }

    #[test]
    fn checked_constructor_rejects_bad_positions() {
        let lit = Node::Literal(Literal::plain("x"));
        let p = Node::Uri(UriRef::new("http://example.org/p"));
        assert!(matches!(
            Triple::try_from_nodes(lit.clone(), p.clone(), lit.clone()),
            Err(CanonError::InvalidSubject(_))
        ));
        assert!(matches!(
            Triple::try_from_nodes(Node::Blank(BlankNode::new("b")), lit.clone(), lit.clone()),
            Err(CanonError::InvalidPredicate(_))
        ));
        assert!(Triple::try_from_nodes(Node::Blank(BlankNode::new("b")), p, lit).is_ok());
    }
}
