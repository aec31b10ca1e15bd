//! Distributions: accessible forms of a dataset.

use chrono::NaiveDate;
use oxrdf::vocab::xsd;
use oxrdf::{NamedNode, NamedNodeRef};

use super::error::Result;
use super::language::LanguageMap;
use super::rdf::GraphBuilder;
use super::resource::{Identity, Resource};
use super::uri::Uri;
use super::vocab::{dcat, dct, odrl};

/// A `dcat:Distribution`.
///
/// `access_service` only links to a data service described elsewhere.
#[derive(Debug, Clone, Default)]
pub struct Distribution {
    pub identity: Identity,
    pub title: LanguageMap,
    pub description: LanguageMap,
    pub release_date: Option<NaiveDate>,
    pub modification_date: Option<NaiveDate>,
    pub license: Option<Uri>,
    pub access_rights: Option<Uri>,
    pub rights: Option<Uri>,
    pub has_policy: Option<Uri>,
    pub access_url: Option<Uri>,
    pub access_service: Option<Uri>,
    pub download_url: Option<Uri>,
    /// Size in bytes.
    pub byte_size: Option<u64>,
    pub spatial_resolution_in_meters: Vec<f64>,
    /// `xsd:duration` values, e.g. `PT15M`.
    pub temporal_resolution: Vec<String>,
    pub conforms_to: Vec<Uri>,
    pub media_types: Vec<Uri>,
    pub formats: Vec<Uri>,
    pub compression_format: Option<Uri>,
    pub package_format: Option<Uri>,
}

impl Distribution {
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

impl Resource for Distribution {
    fn resource_type(&self) -> NamedNodeRef<'static> {
        dcat::DISTRIBUTION_CLASS
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
        builder.add_date(subject, dct::ISSUED, self.release_date);
        builder.add_date(subject, dct::MODIFIED, self.modification_date);
        builder.add_uri(subject, dct::LICENSE, self.license.as_ref());
        builder.add_uri(subject, dct::ACCESS_RIGHTS, self.access_rights.as_ref());
        builder.add_uri(subject, dct::RIGHTS, self.rights.as_ref());
        builder.add_uri(subject, odrl::HAS_POLICY, self.has_policy.as_ref());
        builder.add_uri(subject, dcat::ACCESS_URL, self.access_url.as_ref());
        builder.add_uri(subject, dcat::ACCESS_SERVICE, self.access_service.as_ref());
        builder.add_uri(subject, dcat::DOWNLOAD_URL, self.download_url.as_ref());
        if let Some(size) = self.byte_size {
            builder.add_typed(subject, dcat::BYTE_SIZE, &size.to_string(), xsd::DECIMAL);
        }
        for resolution in &self.spatial_resolution_in_meters {
            builder.add_decimal(subject, dcat::SPATIAL_RESOLUTION_IN_METERS, Some(*resolution));
        }
        for duration in &self.temporal_resolution {
            builder.add_typed(subject, dcat::TEMPORAL_RESOLUTION, duration, xsd::DURATION);
        }
        builder.add_uris(subject, dct::CONFORMS_TO, &self.conforms_to);
        builder.add_uris(subject, dcat::MEDIA_TYPE, &self.media_types);
        builder.add_uris(subject, dct::FORMAT, &self.formats);
        builder.add_uri(subject, dcat::COMPRESS_FORMAT, self.compression_format.as_ref());
        builder.add_uri(subject, dcat::PACKAGE_FORMAT, self.package_format.as_ref());
    }
}
