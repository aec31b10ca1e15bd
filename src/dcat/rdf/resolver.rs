//! Identifier resolution for resources.
//!
//! A resource with an explicit identifier keeps it. One without gets a
//! skolem IRI minted under the configured base URL, cached on the instance so
//! it keeps the same URI for the rest of the conversion (and any later one).
//!
//! # Example
//!
//! ```ignore
//! let resolver = IdentifierResolver::new(Skolemizer::new("https://data.example.org/")?);
//! let subject = resolver.resolve(&dataset);
//! ```

use oxrdf::NamedNode;
use uuid::Uuid;

use crate::dcat::error::{DcatError, Result};
use crate::dcat::resource::{Identity, Resource};
use crate::dcat::uri::Uri;

/// Base URL used for minted identifiers when none is configured.
pub const DEFAULT_SKOLEM_BASE_URL: &str = "http://example.com/";

/// Well-known path segment reserved for skolem IRIs (RDF 1.1, section 3.5).
pub const SKOLEM_PATH: &str = ".well-known/skolem/";

/// Mints fresh skolem IRIs of the form `{base}/.well-known/skolem/{uuid}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skolemizer {
    namespace: String,
}

impl Default for Skolemizer {
    fn default() -> Self {
        Self {
            namespace: format!("{}{}", DEFAULT_SKOLEM_BASE_URL, SKOLEM_PATH),
        }
    }
}

impl Skolemizer {
    /// Creates a skolemizer minting under `base_url`.
    ///
    /// A missing trailing `/` is added.
    ///
    /// # Errors
    ///
    /// Returns `DcatError::InvalidIdentifier` if `base_url` is not an absolute IRI.
    pub fn new(base_url: &str) -> Result<Self> {
        let mut base = base_url.to_string();
        if !base.ends_with('/') {
            base.push('/');
        }
        let namespace = format!("{}{}", base, SKOLEM_PATH);
        NamedNode::new(namespace.as_str()).map_err(|e| DcatError::InvalidIdentifier {
            value: base_url.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self { namespace })
    }

    /// The IRI prefix every minted identifier starts with.
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Mints a new, globally unique IRI.
    pub fn mint(&self) -> Uri {
        let iri = format!("{}{}", self.namespace, Uuid::new_v4());
        log::trace!("Minted skolem IRI {}", iri);
        Uri::from(NamedNode::new_unchecked(iri))
    }

    /// Returns true if `uri` has the shape of an IRI minted by this skolemizer.
    pub fn is_skolemized(&self, uri: &str) -> bool {
        uri.strip_prefix(self.namespace.as_str())
            .is_some_and(|rest| Uuid::parse_str(rest).is_ok())
    }
}

/// Assigns each resource the URI it is serialized under.
#[derive(Debug, Clone, Default)]
pub struct IdentifierResolver {
    skolemizer: Skolemizer,
}

impl IdentifierResolver {
    pub fn new(skolemizer: Skolemizer) -> Self {
        Self { skolemizer }
    }

    pub fn skolemizer(&self) -> &Skolemizer {
        &self.skolemizer
    }

    /// Returns the resource's URI, minting and caching one if it has none.
    ///
    /// Idempotent: repeated calls on the same instance return the same URI.
    pub fn resolve(&self, resource: &dyn Resource) -> NamedNode {
        self.resolve_identity(resource.identity())
    }

    pub fn resolve_identity(&self, identity: &Identity) -> NamedNode {
        identity
            .get_or_mint(|| self.skolemizer.mint())
            .as_named_node()
            .into_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dcat::{Catalog, Dataset, Distribution};
    use std::collections::HashSet;

    #[test]
    fn test_skolemizer_default_namespace() {
        let skolemizer = Skolemizer::default();
        assert_eq!(skolemizer.namespace(), "http://example.com/.well-known/skolem/");
    }

    #[test]
    fn test_skolemizer_appends_slash() {
        let skolemizer = Skolemizer::new("https://data.example.org").unwrap();
        assert_eq!(skolemizer.namespace(), "https://data.example.org/.well-known/skolem/");
    }

    #[test]
    fn test_skolemizer_rejects_invalid_base() {
        let result = Skolemizer::new("not a base url");
        assert!(matches!(result, Err(DcatError::InvalidIdentifier { .. })));
    }

    #[test]
    fn test_minted_uris_are_skolemized_and_unique() {
        let skolemizer = Skolemizer::default();
        let minted: HashSet<_> = (0..100).map(|_| skolemizer.mint()).collect();
        assert_eq!(minted.len(), 100);
        assert!(minted.iter().all(|uri| skolemizer.is_skolemized(uri.as_str())));
    }

    #[test]
    fn test_is_skolemized_rejects_other_uris() {
        let skolemizer = Skolemizer::default();
        assert!(!skolemizer.is_skolemized("http://example.com/datasets/1"));
        assert!(!skolemizer.is_skolemized("http://example.com/.well-known/skolem/not-a-uuid"));
    }

    #[test]
    fn test_resolve_explicit_identifier_unchanged() {
        let resolver = IdentifierResolver::default();
        let catalog = Catalog::with_identifier("http://example.com/catalogs/1").unwrap();

        let first = resolver.resolve(&catalog);
        let second = resolver.resolve(&catalog);
        assert_eq!(first.as_str(), "http://example.com/catalogs/1");
        assert_eq!(first, second);
        assert!(catalog.identity().minted().is_none());
    }

    #[test]
    fn test_resolve_mints_and_caches() {
        let resolver = IdentifierResolver::default();
        let dataset = Dataset::new();

        let first = resolver.resolve(&dataset);
        let second = resolver.resolve(&dataset);
        assert_eq!(first, second);
        assert!(resolver.skolemizer().is_skolemized(first.as_str()));
    }

    #[test]
    fn test_distinct_instances_get_distinct_uris() {
        let resolver = IdentifierResolver::default();
        let a = Distribution::new();
        let b = Distribution::new();
        assert_ne!(resolver.resolve(&a), resolver.resolve(&b));
    }
}
