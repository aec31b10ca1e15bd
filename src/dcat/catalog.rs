//! Catalogs, the usual root of a conversion.

use std::cell::RefCell;
use std::rc::Rc;

use oxrdf::{NamedNode, NamedNodeRef};

use super::catalog_record::CatalogRecord;
use super::data_service::DataService;
use super::dataset::Dataset;
use super::error::Result;
use super::rdf::GraphBuilder;
use super::resource::{Identity, Resource, ResourceCore};
use super::uri::Uri;
use super::vocab::{dcat, dct, foaf};

/// A catalog that can be listed under several parent catalogs.
///
/// A catalog that ends up among its own descendants forms an `Rc` cycle and
/// is not freed until one of the `catalogs` lists is cleared.
pub type SharedCatalog = Rc<RefCell<Catalog>>;

/// A `dcat:Catalog`.
///
/// # Example
///
/// ```ignore
/// let mut catalog = Catalog::with_identifier("http://example.com/catalogs/1")?;
/// catalog.core.title.insert("en", "A dataset catalog")?;
/// catalog.core.publisher = Some(Publisher::parse("https://example.com/publishers/1")?);
/// catalog.datasets.push(Dataset::with_identifier("http://example.com/datasets/1")?);
/// let turtle = catalog.to_rdf("turtle")?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub identity: Identity,
    pub core: ResourceCore,
    pub dct_identifier: Option<String>,
    pub homepage: Option<Uri>,
    /// Theme taxonomies used to classify the catalog's entries.
    pub themes: Vec<Uri>,
    /// Links to catalogs this one is part of a collection with (`dct:hasPart`).
    pub has_parts: Vec<Uri>,
    pub datasets: Vec<Dataset>,
    pub services: Vec<DataService>,
    pub catalogs: Vec<SharedCatalog>,
    pub catalog_records: Vec<CatalogRecord>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_identifier(identifier: &str) -> Result<Self> {
        Ok(Self {
            identity: Identity::parse(identifier)?,
            ..Default::default()
        })
    }

    /// Moves the catalog behind an `Rc<RefCell<_>>` so it can be listed as a
    /// sub-catalog.
    pub fn into_shared(self) -> SharedCatalog {
        Rc::new(RefCell::new(self))
    }

    fn contribute_sub_catalog(
        &self,
        subject: &NamedNode,
        child: &SharedCatalog,
        builder: &mut GraphBuilder<'_>,
    ) {
        let include = builder.options().include_catalogs;
        match child.try_borrow() {
            Ok(catalog) => builder.add_nested(subject, dcat::CATALOG, &*catalog, include),
            Err(_) => {
                // Mutably borrowed by the caller; usable only if already visited.
                let address = child.as_ptr() as *const () as usize;
                match builder.visited_node(address, dcat::CATALOG_CLASS).cloned() {
                    Some(node) => builder.add(subject, dcat::CATALOG, node),
                    None => {
                        log::warn!("Skipping sub-catalog of {}: it is mutably borrowed", subject)
                    }
                }
            }
        }
    }
}

impl Resource for Catalog {
    fn resource_type(&self) -> NamedNodeRef<'static> {
        dcat::CATALOG_CLASS
    }

    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn identity_mut(&mut self) -> &mut Identity {
        &mut self.identity
    }

    fn contribute(&self, subject: &NamedNode, builder: &mut GraphBuilder<'_>) {
        self.core.contribute(subject, builder);
        builder.add_literal(subject, dct::IDENTIFIER, self.dct_identifier.as_deref());
        builder.add_uri(subject, foaf::HOMEPAGE, self.homepage.as_ref());
        builder.add_uris(subject, dcat::THEME_TAXONOMY, &self.themes);
        builder.add_uris(subject, dct::HAS_PART, &self.has_parts);

        let include = builder.options().include_datasets;
        for dataset in &self.datasets {
            builder.add_nested(subject, dcat::DATASET, dataset, include);
        }

        let include = builder.options().include_services;
        for service in &self.services {
            builder.add_nested(subject, dcat::SERVICE, service, include);
        }

        for catalog in &self.catalogs {
            self.contribute_sub_catalog(subject, catalog, builder);
        }

        for record in &self.catalog_records {
            builder.add_resource(subject, dcat::RECORD, record);
        }
    }
}
