//! RDF graph assembled from a catalog's object graph.

use std::collections::HashSet;

use oxrdf::{NamedOrBlankNode, Term, Triple};

use super::prefixes::PrefixTable;

/// Result of walking a resource tree.
///
/// Holds the de-duplicated triples in first-insertion order together with the
/// prefix table the serializers use for short names. Rendering never mutates
/// the graph, so one graph can be written in several formats.
#[derive(Debug, Clone, Default)]
pub struct RdfGraph {
    triples: Vec<Triple>,
    seen: HashSet<Triple>,
    /// Namespace bindings for serialization.
    pub prefixes: PrefixTable,
}

impl RdfGraph {
    /// Creates an empty graph bound to the given prefixes.
    pub fn new(prefixes: PrefixTable) -> Self {
        Self {
            triples: Vec::new(),
            seen: HashSet::new(),
            prefixes,
        }
    }

    /// Adds a triple to the graph. Returns false if it was already present.
    pub fn insert(&mut self, triple: Triple) -> bool {
        if self.seen.contains(&triple) {
            return false;
        }
        self.seen.insert(triple.clone());
        self.triples.push(triple);
        true
    }

    pub fn contains(&self, triple: &Triple) -> bool {
        self.seen.contains(triple)
    }

    /// Returns the number of triples in the graph.
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Returns true if the graph contains no triples.
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Returns an iterator over the triples in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Triples whose subject is the IRI `subject`.
    pub fn triples_for_subject<'a>(
        &'a self,
        subject: &'a str,
    ) -> impl Iterator<Item = &'a Triple> + 'a {
        self.triples.iter().filter(move |t| match &t.subject {
            NamedOrBlankNode::NamedNode(node) => node.as_str() == subject,
            NamedOrBlankNode::BlankNode(_) => false,
        })
    }

    /// Objects of all `(subject, predicate, ?)` triples.
    pub fn objects<'a>(
        &'a self,
        subject: &'a str,
        predicate: &'a str,
    ) -> impl Iterator<Item = &'a Term> + 'a {
        self.triples_for_subject(subject)
            .filter(move |t| t.predicate.as_str() == predicate)
            .map(|t| &t.object)
    }
}

impl IntoIterator for RdfGraph {
    type Item = Triple;
    type IntoIter = std::vec::IntoIter<Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.into_iter()
    }
}
