//! Well-known vocabulary URIs and URI splitting helpers.

/// The RDF namespace.
pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
/// The RDFS namespace.
pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
/// The OWL namespace.
pub const OWL: &str = "http://www.w3.org/2002/07/owl#";
/// The XML Schema datatypes namespace.
pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";

/// `rdf:type`.
pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
/// `xsd:string`, the Turtle default datatype.
pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
/// `xsd:integer`.
pub const XSD_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";

/// Splits `uri` into `(namespace, local)` at the last `#` or `/`.
///
/// Returns `None` when there is no such separator or when the remainder is not
/// a local name Turtle accepts unescaped. Such URIs have no usable namespace
/// and are always written in `<...>` form.
pub fn split_uri(uri: &str) -> Option<(&str, &str)> {
    let cut = uri.rfind(['#', '/'])? + 1;
    let (namespace, local) = uri.split_at(cut);
    is_local_name(local).then_some((namespace, local))
}

/// Returns the namespace part of `uri`, see [`split_uri`].
pub fn namespace_of(uri: &str) -> Option<&str> {
    split_uri(uri).map(|(namespace, _)| namespace)
}

/// Conservative `PN_LOCAL` check: no escapes, no percent-encoding, no colons.
pub fn is_local_name(local: &str) -> bool {
    let mut chars = local.chars();
    let Some(first) = chars.next() else {
        return true;
    };
    (is_pn_chars_u(first) || first.is_ascii_digit()) && is_name_tail(local)
}

/// `PN_PREFIX` check. The empty prefix is valid.
pub fn is_prefix_name(prefix: &str) -> bool {
    let mut chars = prefix.chars();
    let Some(first) = chars.next() else {
        return true;
    };
    is_pn_chars_base(first) && is_name_tail(prefix)
}

/// `BLANK_NODE_LABEL` check on the label without its `_:`.
pub fn is_blank_label(label: &str) -> bool {
    let mut chars = label.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    (is_pn_chars_u(first) || first.is_ascii_digit()) && is_name_tail(label)
}

/// Everything after the first character is `PN_CHARS` or `.`, and the name
/// does not end with `.`.
fn is_name_tail(name: &str) -> bool {
    !name.ends_with('.') && name.chars().skip(1).all(|c| c == '.' || is_pn_chars(c))
}

fn is_pn_chars_base(c: char) -> bool {
    matches!(c,
        'A'..='Z'
        | 'a'..='z'
        | '\u{C0}'..='\u{D6}'
        | '\u{D8}'..='\u{F6}'
        | '\u{F8}'..='\u{2FF}'
        | '\u{370}'..='\u{37D}'
        | '\u{37F}'..='\u{1FFF}'
        | '\u{200C}'..='\u{200D}'
        | '\u{2070}'..='\u{218F}'
        | '\u{2C00}'..='\u{2FEF}'
        | '\u{3001}'..='\u{D7FF}'
        | '\u{F900}'..='\u{FDCF}'
        | '\u{FDF0}'..='\u{FFFD}'
        | '\u{10000}'..='\u{EFFFF}')
}

fn is_pn_chars_u(c: char) -> bool {
    c == '_' || is_pn_chars_base(c)
}

fn is_pn_chars(c: char) -> bool {
    is_pn_chars_u(c)
        || c.is_ascii_digit()
        || matches!(c, '-' | '\u{B7}' | '\u{300}'..='\u{36F}' | '\u{203F}'..='\u{2040}')
}
