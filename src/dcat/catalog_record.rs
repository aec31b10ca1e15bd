//! Catalog records.

use chrono::NaiveDate;
use oxrdf::{NamedNode, NamedNodeRef};

use super::error::Result;
use super::language::LanguageMap;
use super::rdf::GraphBuilder;
use super::resource::{Identity, Resource};
use super::uri::Uri;
use super::vocab::{dcat, dct, foaf};

/// A `dcat:CatalogRecord` describing the registration of an entry in a catalog.
#[derive(Debug, Clone, Default)]
pub struct CatalogRecord {
    pub identity: Identity,
    pub title: LanguageMap,
    pub description: LanguageMap,
    /// When the entry was listed in the catalog (`dct:issued`).
    pub listing_date: Option<NaiveDate>,
    pub modification_date: Option<NaiveDate>,
    /// The dataset or service the record describes.
    pub primary_topic: Option<Uri>,
    pub conforms_to: Vec<Uri>,
}

impl CatalogRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_identifier(identifier: &str) -> Result<Self> {
        Ok(Self {
            identity: Identity::parse(identifier)?,
            ..Default::default()
        })
    }
}

impl Resource for CatalogRecord {
    fn resource_type(&self) -> NamedNodeRef<'static> {
        dcat::CATALOG_RECORD_CLASS
    }

    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn identity_mut(&mut self) -> &mut Identity {
        &mut self.identity
    }

    fn contribute(&self, subject: &NamedNode, builder: &mut GraphBuilder<'_>) {
        builder.add_language_map(subject, dct::TITLE, &self.title);
        builder.add_language_map(subject, dct::DESCRIPTION, &self.description);
        builder.add_date(subject, dct::ISSUED, self.listing_date);
        builder.add_date(subject, dct::MODIFIED, self.modification_date);
        builder.add_uri(subject, foaf::PRIMARY_TOPIC, self.primary_topic.as_ref());
        builder.add_uris(subject, dct::CONFORMS_TO, &self.conforms_to);
    }
}
