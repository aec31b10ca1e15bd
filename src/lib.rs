//! Map DCAT catalogs and their datasets, distributions and data services to RDF.
//!
//! The object model lives in [`dcat`]; every entity implements
//! [`dcat::Resource`] and can be rendered with [`dcat::Resource::to_rdf`].
//!
//! ```ignore
//! use dcatrs::dcat::{Catalog, Dataset, LanguageMap, Resource};
//!
//! let mut catalog = Catalog::with_identifier("http://example.com/catalogs/1")?;
//! catalog.core.title = LanguageMap::from_pairs([("en", "A dataset catalog")])?;
//!
//! let mut dataset = Dataset::with_identifier("http://example.com/datasets/1")?;
//! dataset.core.title = LanguageMap::from_pairs([("en", "incomeAPI"), ("nb", "inntektsAPI")])?;
//! catalog.datasets.push(dataset);
//!
//! let turtle = catalog.to_rdf("turtle")?;
//! ```

pub mod dcat;
