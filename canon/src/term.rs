//! Turtle surface forms of individual terms.

use std::fmt::Write as _;

use crate::graph::Graph;
use crate::node::{Literal, Resource, UriRef};
use crate::vocab;

/// Writes terms the way they appear in the output document.
///
/// A URI becomes `prefix:local` when its namespace is declared and used,
/// otherwise `<relative>` when it sits safely under the base, otherwise
/// `<absolute>`.
#[derive(Debug, Clone, Copy)]
pub struct TermWriter<'g> {
    graph: &'g Graph,
    base: Option<&'g str>,
}

impl<'g> TermWriter<'g> {
    /// A writer for terms of `graph`, relativizing against `base`.
    pub fn new(graph: &'g Graph, base: Option<&'g str>) -> Self {
        Self { graph, base }
    }

    /// Subject or link target form.
    pub fn resource(&self, resource: &Resource) -> String {
        match resource {
            Resource::Uri(uri) => self.uri(uri),
            Resource::Blank(blank) => blank.to_string(),
        }
    }

    /// URI form.
    pub fn uri(&self, uri: &UriRef) -> String {
        let uri = uri.as_str();
        if let Some((namespace, local)) = vocab::split_uri(uri) {
            if let Some(prefix) = self.graph.active_prefix(namespace) {
                return format!("{prefix}:{local}");
            }
        }
        let target = self
            .base
            .and_then(|base| relativize(uri, base))
            .unwrap_or(uri);
        format!("<{}>", escape_iri(target))
    }

    /// Literal form, including the language tag or datatype suffix.
    pub fn literal(&self, literal: &Literal) -> String {
        let mut out = quote(literal.label());
        match literal {
            Literal::Plain(_) => {}
            Literal::LanguageTagged { lang, .. } => {
                out.push('@');
                out.push_str(lang);
            }
            Literal::Typed { datatype, .. } => {
                if !self.graph.namespaces().is_omittable_datatype(datatype.as_str()) {
                    out.push_str("^^");
                    out.push_str(&self.uri(datatype));
                }
            }
        }
        out
    }
}

/// Quotes a literal label, choosing the long form for multi-line text.
pub fn quote(label: &str) -> String {
    let long = label.contains(['\n', '\r', '\t']);
    let escaped = label.replace('\\', "\\\\").replace('"', "\\\"");
    if long {
        format!("\"\"\"{escaped}\"\"\"")
    } else {
        format!("\"{escaped}\"")
    }
}

/// Escapes characters that may not appear raw inside `<...>`.
pub fn escape_iri(iri: &str) -> String {
    let mut out = String::with_capacity(iri.len());
    for c in iri.chars() {
        if c <= ' ' || matches!(c, '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\') {
            let _ = write!(out, "\\u{:04X}", u32::from(c));
        } else {
            out.push(c);
        }
    }
    out
}

/// Returns the shortest reference to `uri` that resolves back to it against
/// `base`, or `None` when only the absolute form is safe.
///
/// Only same-document, fragment, and descendant-path references are produced.
/// Anything needing dot segments or a leading `/` stays absolute.
pub fn relativize<'u>(uri: &'u str, base: &str) -> Option<&'u str> {
    let base = base.split('#').next().unwrap_or(base);
    if uri == base {
        return Some("");
    }
    if let Some(fragment) = uri.strip_prefix(base) {
        if fragment.starts_with('#') {
            return Some(fragment);
        }
    }

    let path_start = authority_end(base)?;
    let without_query = base.split('?').next().unwrap_or(base);
    let dir_end = without_query.rfind('/').filter(|&i| i >= path_start)? + 1;
    let rest = uri.strip_prefix(&base[..dir_end])?;

    let first_segment = rest.split(['/', '?', '#']).next().unwrap_or(rest);
    let safe = !rest.is_empty()
        && !rest.starts_with(['/', '?', '#'])
        && !first_segment.contains(':')
        && !rest
            .split(['?', '#'])
            .next()
            .unwrap_or(rest)
            .split('/')
            .any(|segment| segment == "." || segment == "..");
    safe.then_some(rest)
}

/// Byte offset where the path of a hierarchical URI begins.
fn authority_end(uri: &str) -> Option<usize> {
    let scheme_end = uri.find("://")? + 3;
    let path = uri[scheme_end..].find('/').map(|i| scheme_end + i)?;
    Some(path)
}

/// True for URIs with a scheme, which is all a base needs.
pub fn is_absolute(uri: &str) -> bool {
    let Some((scheme, _)) = uri.split_once(':') else {
        return false;
    };
    let mut chars = scheme.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
