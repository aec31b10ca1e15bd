//! Catalog to RDF conversion.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;
use oxrdf::vocab::{rdf, xsd};
use oxrdf::{Literal, NamedNode, NamedNodeRef, Term, Triple};
use serde::{Deserialize, Serialize};

use crate::dcat::error::Result;
use crate::dcat::language::LanguageMap;
use crate::dcat::resource::Resource;
use crate::dcat::uri::Uri;

use super::graph::RdfGraph;
use super::prefixes::PrefixTable;
use super::rdf_io::RdfFormat;
use super::resolver::{IdentifierResolver, Skolemizer, DEFAULT_SKOLEM_BASE_URL};

/// Environment variable holding the base URL for minted identifiers.
pub const SKOLEM_BASE_URL_ENV: &str = "DCAT_SKOLEM_BASEURL";

/// Settings for one conversion.
///
/// # Example
/// ```ignore
/// let options = ConversionOptions::default()
///     .with_skolem_base_url("https://data.example.org/")
///     .with_prefix("ex", "https://data.example.org/vocab#");
/// let ttl = catalog.to_rdf_with_options("turtle", &options)?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConversionOptions {
    /// Base URL under which identifiers are minted for resources without one.
    pub skolem_base_url: String,
    /// Emit the triples of each dataset, not just the `dcat:dataset` edge.
    pub include_datasets: bool,
    pub include_services: bool,
    pub include_catalogs: bool,
    pub include_distributions: bool,
    /// Namespace bindings added to the default prefix table.
    pub prefixes: BTreeMap<String, String>,
}

impl Default for ConversionOptions {
    fn default() -> Self {
        Self {
            skolem_base_url: DEFAULT_SKOLEM_BASE_URL.to_string(),
            include_datasets: true,
            include_services: true,
            include_catalogs: true,
            include_distributions: true,
            prefixes: BTreeMap::new(),
        }
    }
}

impl ConversionOptions {
    /// Default options, with the skolemization base URL taken from
    /// `DCAT_SKOLEM_BASEURL` when it is set to a valid absolute URL.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Parses options from a JSON object; omitted fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns `DcatError::Json` on malformed JSON or an unknown field.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut options = Self::default();
        if let Some(base_url) = lookup(SKOLEM_BASE_URL_ENV) {
            match Skolemizer::new(&base_url) {
                Ok(_) => options.skolem_base_url = base_url,
                Err(e) => log::warn!("Ignoring {}: {}", SKOLEM_BASE_URL_ENV, e),
            }
        }
        options
    }

    pub fn with_skolem_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.skolem_base_url = base_url.into();
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>, namespace: impl Into<String>) -> Self {
        self.prefixes.insert(prefix.into(), namespace.into());
        self
    }

    /// Builds the identifier resolver for these options.
    ///
    /// # Errors
    ///
    /// Returns `DcatError::InvalidIdentifier` if the base URL is not absolute.
    pub fn resolver(&self) -> Result<IdentifierResolver> {
        Ok(IdentifierResolver::new(Skolemizer::new(&self.skolem_base_url)?))
    }

    /// The default prefix table extended with the configured bindings.
    pub fn prefix_table(&self) -> Result<PrefixTable> {
        self.prefixes
            .iter()
            .try_fold(PrefixTable::default(), |table, (prefix, ns)| table.with_prefix(prefix, ns))
    }
}

/// Identity of a visited resource: its address plus its RDF class.
///
/// The class is part of the key because an inline field can share its
/// parent's address.
type VisitKey = (usize, &'static str);

fn visit_key(resource: &dyn Resource) -> VisitKey {
    let address = std::ptr::from_ref(resource).cast::<()>() as usize;
    (address, resource.resource_type().as_str())
}

/// Accumulates the triples of one resource tree.
///
/// Each resource instance is contributed at most once per build, so shared
/// and cyclic references terminate. Edges to an already visited resource are
/// still emitted.
pub struct GraphBuilder<'a> {
    graph: RdfGraph,
    resolver: &'a IdentifierResolver,
    options: &'a ConversionOptions,
    visited: HashMap<VisitKey, NamedNode>,
}

impl<'a> GraphBuilder<'a> {
    pub fn new(
        resolver: &'a IdentifierResolver,
        options: &'a ConversionOptions,
        prefixes: PrefixTable,
    ) -> Self {
        Self {
            graph: RdfGraph::new(prefixes),
            resolver,
            options,
            visited: HashMap::new(),
        }
    }

    pub fn options(&self) -> &ConversionOptions {
        self.options
    }

    /// Contributes `resource` unless it was already visited, and returns its node.
    pub fn visit(&mut self, resource: &dyn Resource) -> NamedNode {
        let key = visit_key(resource);
        if let Some(node) = self.visited.get(&key) {
            log::trace!("Skipping already visited resource {}", node);
            return node.clone();
        }

        let subject = self.resolver.resolve(resource);
        self.visited.insert(key, subject.clone());
        self.add(&subject, rdf::TYPE, resource.resource_type().into_owned());
        resource.contribute(&subject, self);
        subject
    }

    /// The node of a resource already visited in this build, looked up by
    /// address and class.
    pub fn visited_node(
        &self,
        address: usize,
        resource_type: NamedNodeRef<'static>,
    ) -> Option<&NamedNode> {
        self.visited.get(&(address, resource_type.as_str()))
    }

    /// Emits `subject predicate child` and contributes `child`.
    pub fn add_resource(
        &mut self,
        subject: &NamedNode,
        predicate: NamedNodeRef<'_>,
        child: &dyn Resource,
    ) {
        let object = self.visit(child);
        self.add(subject, predicate, object);
    }

    /// Emits `subject predicate child` without contributing `child`.
    pub fn add_reference(
        &mut self,
        subject: &NamedNode,
        predicate: NamedNodeRef<'_>,
        child: &dyn Resource,
    ) {
        let object = match self.visited.get(&visit_key(child)) {
            Some(node) => node.clone(),
            None => self.resolver.resolve(child),
        };
        self.add(subject, predicate, object);
    }

    /// [`add_resource`](Self::add_resource) when `include` is set, otherwise
    /// [`add_reference`](Self::add_reference).
    pub fn add_nested(
        &mut self,
        subject: &NamedNode,
        predicate: NamedNodeRef<'_>,
        child: &dyn Resource,
        include: bool,
    ) {
        if include {
            self.add_resource(subject, predicate, child);
        } else {
            self.add_reference(subject, predicate, child);
        }
    }

    pub fn add(
        &mut self,
        subject: &NamedNode,
        predicate: NamedNodeRef<'_>,
        object: impl Into<Term>,
    ) {
        self.graph.insert(Triple::new(
            subject.clone(),
            predicate.into_owned(),
            object.into(),
        ));
    }

    pub fn add_uri(&mut self, subject: &NamedNode, predicate: NamedNodeRef<'_>, uri: Option<&Uri>) {
        if let Some(uri) = uri {
            self.add(subject, predicate, uri.as_named_node().into_owned());
        }
    }

    pub fn add_uris(&mut self, subject: &NamedNode, predicate: NamedNodeRef<'_>, uris: &[Uri]) {
        for uri in uris {
            self.add_uri(subject, predicate, Some(uri));
        }
    }

    /// Adds a plain string literal.
    pub fn add_literal(
        &mut self,
        subject: &NamedNode,
        predicate: NamedNodeRef<'_>,
        value: Option<&str>,
    ) {
        if let Some(value) = value {
            self.add(subject, predicate, Literal::new_simple_literal(value));
        }
    }

    pub fn add_typed(
        &mut self,
        subject: &NamedNode,
        predicate: NamedNodeRef<'_>,
        value: &str,
        datatype: NamedNodeRef<'_>,
    ) {
        self.add(
            subject,
            predicate,
            Literal::new_typed_literal(value, datatype.into_owned()),
        );
    }

    /// Adds an `xsd:date` literal in `YYYY-MM-DD` form.
    pub fn add_date(
        &mut self,
        subject: &NamedNode,
        predicate: NamedNodeRef<'_>,
        date: Option<NaiveDate>,
    ) {
        if let Some(date) = date {
            let value = date.format("%Y-%m-%d").to_string();
            self.add_typed(subject, predicate, &value, xsd::DATE);
        }
    }

    /// Adds an `xsd:decimal` literal. Non-finite values have no decimal form
    /// and are dropped.
    pub fn add_decimal(
        &mut self,
        subject: &NamedNode,
        predicate: NamedNodeRef<'_>,
        value: Option<f64>,
    ) {
        match value {
            Some(v) if v.is_finite() => {
                self.add_typed(subject, predicate, &v.to_string(), xsd::DECIMAL)
            }
            Some(v) => log::warn!("Dropping non-finite {} value {} on {}", predicate, v, subject),
            None => {}
        }
    }

    pub fn add_language_map(
        &mut self,
        subject: &NamedNode,
        predicate: NamedNodeRef<'_>,
        map: &LanguageMap,
    ) {
        map.contribute(subject.as_ref(), predicate, &mut self.graph);
    }

    pub fn finish(self) -> RdfGraph {
        self.graph
    }
}

/// Walks `root` and everything it owns into an [`RdfGraph`].
///
/// # Errors
///
/// Returns `DcatError::InvalidIdentifier` if `options` holds an invalid base
/// URL, prefix name or prefix namespace.
pub fn build_graph(root: &dyn Resource, options: &ConversionOptions) -> Result<RdfGraph> {
    let resolver = options.resolver()?;
    let prefixes = options.prefix_table()?;

    log::debug!("Building graph from {}", root.resource_type());
    let mut builder = GraphBuilder::new(&resolver, options, prefixes);
    builder.visit(root);
    let graph = builder.finish();
    log::debug!("Built graph with {} triples", graph.len());

    Ok(graph)
}

/// Converts `root` to RDF in the named format with default options.
///
/// # Example
/// ```ignore
/// use dcatrs::dcat::rdf::to_rdf;
///
/// let bytes = to_rdf(&catalog, "turtle")?;
/// println!("{}", String::from_utf8_lossy(&bytes));
/// ```
pub fn to_rdf(root: &dyn Resource, format: &str) -> Result<Vec<u8>> {
    to_rdf_with_options(root, format, &ConversionOptions::default())
}

/// Converts `root` to RDF in the named format.
///
/// # Errors
///
/// Returns `DcatError::UnsupportedFormat` for an unknown format name, before
/// the object graph is touched.
pub fn to_rdf_with_options(
    root: &dyn Resource,
    format: &str,
    options: &ConversionOptions,
) -> Result<Vec<u8>> {
    let format: RdfFormat = format.parse()?;
    let graph = build_graph(root, options)?;
    graph.to_bytes(format)
}
