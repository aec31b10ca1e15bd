//! Language-tagged text values.

use oxrdf::{Literal, NamedNodeRef, Triple};

use super::error::{DcatError, Result};
use super::rdf::RdfGraph;

/// A set of language-tagged alternatives for one logical text property.
///
/// Keys are unique: inserting a tag that is already present replaces its text.
/// Entries keep insertion order so output is deterministic, but consumers
/// should treat the emitted literals as a set.
///
/// # Example
///
/// ```ignore
/// let title = LanguageMap::from_pairs([("en", "incomeAPI"), ("nb", "inntektsAPI")])?;
/// assert_eq!(title.get("nb"), Some("inntektsAPI"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LanguageMap {
    entries: Vec<Literal>,
}

impl LanguageMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a map from `(tag, text)` pairs, validating every tag.
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut map = Self::new();
        for (tag, text) in pairs {
            map.insert(tag.as_ref(), text)?;
        }
        Ok(map)
    }

    /// Adds or replaces the text for `tag`.
    ///
    /// # Errors
    ///
    /// Returns `DcatError::InvalidLanguageTag` if `tag` is empty or not a
    /// well-formed BCP-47 language tag. The map is left unchanged.
    pub fn insert(&mut self, tag: &str, text: impl Into<String>) -> Result<()> {
        if tag.is_empty() {
            return Err(DcatError::InvalidLanguageTag {
                tag: tag.to_string(),
                reason: "language tag is empty".to_string(),
            });
        }
        let literal = Literal::new_language_tagged_literal(text, tag).map_err(|e| {
            DcatError::InvalidLanguageTag {
                tag: tag.to_string(),
                reason: e.to_string(),
            }
        })?;

        match self.entries.iter_mut().find(|l| l.language() == literal.language()) {
            Some(existing) => *existing = literal,
            None => self.entries.push(literal),
        }
        Ok(())
    }

    /// Returns the text for `tag`, compared case-insensitively.
    pub fn get(&self, tag: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|l| l.language().is_some_and(|lang| lang.eq_ignore_ascii_case(tag)))
            .map(|l| l.value())
    }

    /// Removes the entry for `tag`, returning its text.
    pub fn remove(&mut self, tag: &str) -> Option<String> {
        let pos = self
            .entries
            .iter()
            .position(|l| l.language().is_some_and(|lang| lang.eq_ignore_ascii_case(tag)))?;
        Some(self.entries.remove(pos).value().to_string())
    }

    /// Iterates over `(tag, text)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|l| (l.language().unwrap_or_default(), l.value()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Emits one language-tagged literal triple per entry.
    pub fn contribute(
        &self,
        subject: NamedNodeRef<'_>,
        predicate: NamedNodeRef<'_>,
        graph: &mut RdfGraph,
    ) {
        for literal in &self.entries {
            graph.insert(Triple::new(
                subject.into_owned(),
                predicate.into_owned(),
                literal.clone(),
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxrdf::{NamedNode, Term};

    fn subject() -> NamedNode {
        NamedNode::new_unchecked("http://example.com/datasets/1")
    }

    fn title() -> NamedNode {
        NamedNode::new_unchecked("http://purl.org/dc/terms/title")
    }

    #[test]
    fn test_contribute_emits_one_triple_per_entry() {
        let map = LanguageMap::from_pairs([("en", "A"), ("nb", "B")]).unwrap();
        let mut graph = RdfGraph::default();
        map.contribute(subject().as_ref(), title().as_ref(), &mut graph);

        assert_eq!(graph.len(), 2);
        let languages: Vec<_> = graph
            .iter()
            .filter_map(|t| match &t.object {
                Term::Literal(l) => l.language().map(str::to_string),
                _ => None,
            })
            .collect();
        assert!(languages.contains(&"en".to_string()));
        assert!(languages.contains(&"nb".to_string()));
    }

    #[test]
    fn test_empty_map_contributes_nothing() {
        let map = LanguageMap::new();
        let mut graph = RdfGraph::default();
        map.contribute(subject().as_ref(), title().as_ref(), &mut graph);
        assert!(graph.is_empty());
    }

    #[test]
    fn test_insert_replaces_existing_tag() {
        let mut map = LanguageMap::new();
        map.insert("en", "first").unwrap();
        map.insert("EN", "second").unwrap();
        assert_eq!(map.len(), 1);
        assert_eq!(map.get("en"), Some("second"));
    }

    #[test]
    fn test_region_subtag_is_accepted() {
        let map = LanguageMap::from_pairs([("en-GB", "colour"), ("en-US", "color")]).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("en-us"), Some("color"));
    }

    #[test]
    fn test_invalid_tags_are_rejected() {
        for bad in ["", "e n", "en_GB", "123", "en-"] {
            let result = LanguageMap::from_pairs([(bad, "text")]);
            assert!(
                matches!(result, Err(DcatError::InvalidLanguageTag { .. })),
                "expected `{}` to be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_failed_insert_leaves_map_unchanged() {
        let mut map = LanguageMap::from_pairs([("en", "A")]).unwrap();
        assert!(map.insert("not a tag", "B").is_err());
        assert_eq!(map.len(), 1);
    }

    #[test]
    fn test_iter_preserves_insertion_order() {
        let map = LanguageMap::from_pairs([("nb", "B"), ("en", "A"), ("de", "C")]).unwrap();
        let tags: Vec<_> = map.iter().map(|(tag, _)| tag).collect();
        assert_eq!(tags, vec!["nb", "en", "de"]);
    }

    #[test]
    fn test_remove() {
        let mut map = LanguageMap::from_pairs([("en", "A"), ("nb", "B")]).unwrap();
        assert_eq!(map.remove("en"), Some("A".to_string()));
        assert_eq!(map.remove("en"), None);
        assert_eq!(map.len(), 1);
    }
}
