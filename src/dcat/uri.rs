//! Validated absolute URIs.

use std::fmt;
use std::str::FromStr;

use oxrdf::{NamedNode, NamedNodeRef};

use super::error::{DcatError, Result};

/// An absolute IRI, checked when it is created.
///
/// Every URI-valued property of the model holds a `Uri`, so malformed input is
/// rejected at assignment rather than when the graph is serialized.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Uri(NamedNode);

impl Uri {
    /// Parses and validates an absolute IRI.
    ///
    /// # Errors
    ///
    /// Returns `DcatError::InvalidIdentifier` if `value` is relative or not a
    /// syntactically valid IRI.
    pub fn parse(value: &str) -> Result<Self> {
        NamedNode::new(value).map(Uri).map_err(|e| DcatError::InvalidIdentifier {
            value: value.to_string(),
            reason: e.to_string(),
        })
    }

    /// Parses every value of a list, failing on the first invalid one.
    pub fn parse_all<I, S>(values: I) -> Result<Vec<Uri>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        values.into_iter().map(|v| Uri::parse(v.as_ref())).collect()
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn as_named_node(&self) -> NamedNodeRef<'_> {
        self.0.as_ref()
    }

    pub fn into_named_node(self) -> NamedNode {
        self.0
    }
}

impl fmt::Display for Uri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Uri {
    type Err = DcatError;

    fn from_str(s: &str) -> Result<Self> {
        Uri::parse(s)
    }
}

impl TryFrom<&str> for Uri {
    type Error = DcatError;

    fn try_from(value: &str) -> Result<Self> {
        Uri::parse(value)
    }
}

impl TryFrom<String> for Uri {
    type Error = DcatError;

    fn try_from(value: String) -> Result<Self> {
        Uri::parse(&value)
    }
}

impl AsRef<str> for Uri {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<NamedNode> for Uri {
    fn from(node: NamedNode) -> Self {
        Uri(node)
    }
}

impl From<Uri> for NamedNode {
    fn from(uri: Uri) -> Self {
        uri.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_absolute_uri() {
        let uri = Uri::parse("http://example.com/datasets/1").unwrap();
        assert_eq!(uri.as_str(), "http://example.com/datasets/1");
        assert_eq!(uri.to_string(), "http://example.com/datasets/1");
    }

    #[test]
    fn test_parse_non_http_schemes() {
        assert!(Uri::parse("mailto:someone@example.com").is_ok());
        assert!(Uri::parse("urn:uuid:123-456").is_ok());
        assert!(Uri::parse("tel:+4712345678").is_ok());
    }

    #[test]
    fn test_parse_rejects_relative_reference() {
        let result = Uri::parse("datasets/1");
        assert!(matches!(result, Err(DcatError::InvalidIdentifier { .. })));
    }

    #[test]
    fn test_parse_rejects_invalid_characters() {
        for bad in [
            "http://example.com/a b",
            "http://example.com/<x>",
            "http://example.com/\"q\"",
            "",
        ] {
            assert!(Uri::parse(bad).is_err(), "expected `{}` to be rejected", bad);
        }
    }

    #[test]
    fn test_parse_all_stops_on_first_error() {
        let ok = Uri::parse_all(["http://example.com/1", "http://example.com/2"]).unwrap();
        assert_eq!(ok.len(), 2);

        let err = Uri::parse_all(["http://example.com/1", "not a uri"]).unwrap_err();
        match err {
            DcatError::InvalidIdentifier { value, .. } => assert_eq!(value, "not a uri"),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_from_str_and_try_from() {
        let a: Uri = "http://example.com/x".parse().unwrap();
        let b = Uri::try_from("http://example.com/x").unwrap();
        let c = Uri::try_from("http://example.com/x".to_string()).unwrap();
        assert_eq!(a, b);
        assert_eq!(b, c);
    }
}
