//! Namespace prefix bindings for serialization.

use oxrdf::NamedNode;
use serde::{Deserialize, Serialize};

use crate::dcat::error::{DcatError, Result};
use crate::dcat::vocab::{dcat, dcatno, dct, foaf, geosparql, locn, odrl, owl, prov, vcard};

/// Ordered table of `prefix -> namespace IRI` bindings.
///
/// The table is built once per conversion and handed to the graph, so
/// independent conversions never share prefix state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixTable {
    bindings: Vec<(String, String)>,
}

impl Default for PrefixTable {
    /// The bindings used for DCAT output.
    fn default() -> Self {
        let bindings = [
            ("dcat", dcat::NAMESPACE),
            ("dct", dct::NAMESPACE),
            ("foaf", foaf::NAMESPACE),
            ("vcard", vcard::NAMESPACE),
            ("locn", locn::NAMESPACE),
            ("geosparql", geosparql::NAMESPACE),
            ("odrl", odrl::NAMESPACE),
            ("prov", prov::NAMESPACE),
            ("owl", owl::NAMESPACE),
            ("dcatno", dcatno::NAMESPACE),
            ("xsd", "http://www.w3.org/2001/XMLSchema#"),
        ];
        Self {
            bindings: bindings
                .iter()
                .map(|(prefix, ns)| (prefix.to_string(), ns.to_string()))
                .collect(),
        }
    }
}

impl PrefixTable {
    /// Creates a table with no bindings.
    pub fn empty() -> Self {
        Self { bindings: Vec::new() }
    }

    /// Binds `prefix` to `namespace`, replacing an earlier binding of the same prefix.
    ///
    /// # Errors
    ///
    /// Returns `DcatError::InvalidIdentifier` if `prefix` is not a Turtle
    /// prefix name or `namespace` is not an absolute IRI.
    pub fn with_prefix(mut self, prefix: &str, namespace: &str) -> Result<Self> {
        if !is_prefix_name(prefix) {
            return Err(DcatError::InvalidIdentifier {
                value: prefix.to_string(),
                reason: "not a valid prefix name".to_string(),
            });
        }
        NamedNode::new(namespace).map_err(|e| DcatError::InvalidIdentifier {
            value: namespace.to_string(),
            reason: e.to_string(),
        })?;
        match self.bindings.iter_mut().find(|(p, _)| p == prefix) {
            Some(binding) => binding.1 = namespace.to_string(),
            None => self.bindings.push((prefix.to_string(), namespace.to_string())),
        }
        Ok(self)
    }

    /// Looks up the namespace bound to `prefix`.
    pub fn namespace(&self, prefix: &str) -> Option<&str> {
        self.bindings
            .iter()
            .find(|(p, _)| p == prefix)
            .map(|(_, ns)| ns.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.bindings.iter().map(|(p, ns)| (p.as_str(), ns.as_str()))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

/// Checks `name` against Turtle's `PN_PREFIX`: empty, or a letter followed by
/// letters, digits, `_`, `-` or `.`, not ending in `.`.
fn is_prefix_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        None => true,
        Some(first) => {
            first.is_alphabetic()
                && chars.all(|c| c.is_alphanumeric() || matches!(c, '_' | '-' | '.'))
                && !name.ends_with('.')
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let table = PrefixTable::default();
        assert_eq!(table.namespace("dcat"), Some("http://www.w3.org/ns/dcat#"));
        assert_eq!(table.namespace("dct"), Some("http://purl.org/dc/terms/"));
        assert_eq!(table.namespace("foaf"), Some("http://xmlns.com/foaf/0.1/"));
        assert_eq!(table.namespace("vcard"), Some("http://www.w3.org/2006/vcard/ns#"));
        assert_eq!(table.namespace("unknown"), None);
    }

    #[test]
    fn test_with_prefix_adds_and_replaces() {
        let table = PrefixTable::empty()
            .with_prefix("ex", "http://example.org/")
            .unwrap()
            .with_prefix("ex", "http://example.com/")
            .unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.namespace("ex"), Some("http://example.com/"));
    }

    #[test]
    fn test_with_prefix_rejects_relative_namespace() {
        let result = PrefixTable::empty().with_prefix("ex", "relative/ns#");
        assert!(matches!(result, Err(DcatError::InvalidIdentifier { .. })));
    }

    #[test]
    fn test_with_prefix_rejects_invalid_names() {
        for name in ["bad prefix", "1x", "ex:", "_x", "ex."] {
            let result = PrefixTable::empty().with_prefix(name, "http://example.org/x#");
            assert!(
                matches!(
                    result,
                    Err(DcatError::InvalidIdentifier { ref value, .. }) if value == name
                ),
                "accepted prefix name {:?}",
                name
            );
        }
    }

    #[test]
    fn test_with_prefix_accepts_turtle_names() {
        let table = PrefixTable::empty()
            .with_prefix("", "http://example.org/")
            .unwrap()
            .with_prefix("ex-1.v_2", "http://example.org/v2#")
            .unwrap();
        assert_eq!(table.namespace(""), Some("http://example.org/"));
        assert_eq!(table.namespace("ex-1.v_2"), Some("http://example.org/v2#"));
    }
}
