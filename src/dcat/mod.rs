//! DCAT object model and its RDF mapping.
//!
//! Catalog entities are plain structs with public, validated fields. Each
//! implements [`Resource`], so any of them can be the root of a conversion.

pub mod agent;
pub mod catalog;
pub mod catalog_record;
pub mod contact;
pub mod data_service;
pub mod dataset;
pub mod distribution;
pub mod error;
pub mod language;
pub mod location;
pub mod period_of_time;
pub mod rdf;
pub mod relationship;
pub mod resource;
pub mod uri;
pub mod vocab;

pub use agent::{Agent, Attribution};
pub use catalog::{Catalog, SharedCatalog};
pub use catalog_record::CatalogRecord;
pub use contact::Contact;
pub use data_service::DataService;
pub use dataset::{Dataset, Spatial};
pub use distribution::Distribution;
pub use error::{DcatError, Result};
pub use language::LanguageMap;
pub use location::Location;
pub use period_of_time::{parse_date, PeriodOfTime};
pub use rdf::{ConversionOptions, RdfFormat};
pub use relationship::Relationship;
pub use resource::{Identity, Publisher, Resource, ResourceCore};
pub use uri::Uri;
