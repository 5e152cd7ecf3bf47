//! Caller-supplied rendering options.

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::Deserialize;

use crate::error::{CanonError, Result};
use crate::namespace::{NamespacePriority, NamespaceTable};
use crate::term;
use crate::vocab;

/// Options recognized by the renderer.
///
/// With the `serde` feature this deserializes from any serde format; the
/// `ttl-canon` binary reads it from TOML:
///
/// ```toml
/// enable_folding = true
/// base_uri = "http://example.org/data/"
/// namespace_priority = ["http://www.w3.org/1999/02/22-rdf-syntax-ns#"]
///
/// [prefixes]
/// ex = "http://example.org/"
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct RenderConfig {
    /// Inline anonymous nodes referenced exactly once.
    pub enable_folding: bool,
    /// Absolute URI used to relativize URI terms on output. Takes precedence
    /// over a base declared by the input.
    pub base_uri: Option<String>,
    /// Prefix declarations, prefix to namespace URI.
    pub prefixes: BTreeMap<String, String>,
    /// Namespace URIs whose predicates sort first, in order.
    pub namespace_priority: Vec<String>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            enable_folding: true,
            base_uri: None,
            prefixes: BTreeMap::new(),
            namespace_priority: [vocab::RDF, vocab::RDFS, vocab::OWL, vocab::XSD]
                .into_iter()
                .map(str::to_owned)
                .collect(),
        }
    }
}

impl RenderConfig {
    /// Checks values that cannot be expressed in the type.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError::InvalidBase`] for a relative base URI,
    /// [`CanonError::InvalidPrefix`] for an unusable prefix declaration and
    /// [`CanonError::Config`] for an empty priority namespace.
    pub fn validate(&self) -> Result<()> {
        if let Some(base) = &self.base_uri {
            if !term::is_absolute(base) {
                return Err(CanonError::InvalidBase(base.clone()));
            }
        }
        if self.namespace_priority.iter().any(String::is_empty) {
            return Err(CanonError::Config(
                "namespace_priority entries must not be empty".to_owned(),
            ));
        }
        self.namespace_table().map(|_| ())
    }

    /// The configured prefixes as a namespace table.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError::InvalidPrefix`] for an unusable declaration.
    pub fn namespace_table(&self) -> Result<NamespaceTable> {
        let mut table = NamespaceTable::new();
        for (prefix, namespace) in &self.prefixes {
            table.declare(prefix, namespace)?;
        }
        Ok(table)
    }

    /// The predicate ordering table.
    pub fn priority(&self) -> NamespacePriority {
        NamespacePriority::new(self.namespace_priority.iter().cloned())
    }

    /// Overrides folding.
    #[must_use]
    pub fn with_folding(mut self, enabled: bool) -> Self {
        self.enable_folding = enabled;
        self
    }

    /// Overrides the base URI.
    #[must_use]
    pub fn with_base(mut self, base: impl Into<String>) -> Self {
        self.base_uri = Some(base.into());
        self
    }

    /// Adds one prefix declaration.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>, namespace: impl Into<String>) -> Self {
        self.prefixes.insert(prefix.into(), namespace.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = RenderConfig::default();
        assert!(config.enable_folding);
        assert_eq!(config.base_uri, None);
        assert_eq!(config.priority(), NamespacePriority::default());
    }

    #[test]
    fn rejects_relative_base() {
        let config = RenderConfig::default().with_base("data/");
        assert_eq!(
            config.validate(),
            Err(CanonError::InvalidBase("data/".to_owned()))
        );
        assert!(RenderConfig::default()
            .with_base("http://example.org/")
            .validate()
            .is_ok());
    }

    #[test]
    fn rejects_bad_prefix() {
        let config = RenderConfig::default().with_prefix("9", "http://example.org/");
        assert!(matches!(
            config.validate(),
            Err(CanonError::InvalidPrefix { .. })
        ));
    }

    #[test]
    fn rejects_empty_priority_namespace() {
        let config = RenderConfig {
            namespace_priority: vec![String::new()],
            ..RenderConfig::default()
        };
        assert!(matches!(config.validate(), Err(CanonError::Config(_))));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn reads_toml() -> std::result::Result<(), toml::de::Error> {
        let config: RenderConfig = toml::from_str(
            r#"
            enable_folding = false
            base_uri = "http://example.org/data/"

            [prefixes]
            ex = "http://example.org/"
            "#,
        )?;
        assert!(!config.enable_folding);
        assert_eq!(config.base_uri.as_deref(), Some("http://example.org/data/"));
        assert_eq!(config.prefixes.get("ex").map(String::as_str), Some("http://example.org/"));
        assert_eq!(config.priority(), NamespacePriority::default());
        Ok(())
    }

    #[cfg(feature = "serde")]
    #[test]
    fn unknown_keys_are_rejected() {
        let config: std::result::Result<RenderConfig, _> = toml::from_str("folding = true");
        assert!(config.is_err());
    }
}
