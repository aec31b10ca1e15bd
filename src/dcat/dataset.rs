//! Datasets.

use oxrdf::vocab::xsd;
use oxrdf::{NamedNode, NamedNodeRef};

use super::distribution::Distribution;
use super::error::Result;
use super::location::Location;
use super::period_of_time::PeriodOfTime;
use super::rdf::GraphBuilder;
use super::resource::{Identity, Resource, ResourceCore};
use super::uri::Uri;
use super::vocab::{dcat, dcatno, dct, prov};

/// Spatial coverage: a link to a named place, or an inline location.
#[derive(Debug, Clone)]
pub enum Spatial {
    Uri(Uri),
    Location(Location),
}

impl From<Uri> for Spatial {
    fn from(uri: Uri) -> Self {
        Spatial::Uri(uri)
    }
}

impl From<Location> for Spatial {
    fn from(location: Location) -> Self {
        Spatial::Location(location)
    }
}

/// A `dcat:Dataset`.
///
/// # Example
///
/// ```ignore
/// let mut dataset = Dataset::with_identifier("http://example.com/datasets/1")?;
/// dataset.core.title = LanguageMap::from_pairs([("en", "incomeAPI"), ("nb", "inntektsAPI")])?;
/// dataset.distributions.push(Distribution::new());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub identity: Identity,
    pub core: ResourceCore,
    /// Literal identifier (`dct:identifier`), separate from the node URI.
    pub dct_identifier: Option<String>,
    pub distributions: Vec<Distribution>,
    /// `dct:accrualPeriodicity`
    pub frequency: Option<Uri>,
    pub spatial: Vec<Spatial>,
    pub spatial_resolution_in_meters: Vec<f64>,
    pub temporal: Vec<PeriodOfTime>,
    /// `xsd:duration` values, e.g. `P1D`.
    pub temporal_resolution: Vec<String>,
    pub was_generated_by: Option<Uri>,
    pub access_rights_comments: Vec<Uri>,
    /// Link to the dataset series this dataset belongs to.
    pub in_series: Option<Uri>,
}

impl Dataset {
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

impl Resource for Dataset {
    fn resource_type(&self) -> NamedNodeRef<'static> {
        dcat::DATASET_CLASS
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

        let include = builder.options().include_distributions;
        for distribution in &self.distributions {
            builder.add_nested(subject, dcat::DISTRIBUTION, distribution, include);
        }

        builder.add_uri(subject, dct::ACCRUAL_PERIODICITY, self.frequency.as_ref());
        for spatial in &self.spatial {
            match spatial {
                Spatial::Uri(uri) => builder.add_uri(subject, dct::SPATIAL, Some(uri)),
                Spatial::Location(location) => {
                    builder.add_resource(subject, dct::SPATIAL, location)
                }
            }
        }
        for resolution in &self.spatial_resolution_in_meters {
            builder.add_decimal(subject, dcat::SPATIAL_RESOLUTION_IN_METERS, Some(*resolution));
        }
        for period in &self.temporal {
            builder.add_resource(subject, dct::TEMPORAL, period);
        }
        for duration in &self.temporal_resolution {
            builder.add_typed(subject, dcat::TEMPORAL_RESOLUTION, duration, xsd::DURATION);
        }
        builder.add_uri(subject, prov::WAS_GENERATED_BY, self.was_generated_by.as_ref());
        builder.add_uris(subject, dcatno::ACCESS_RIGHTS_COMMENT, &self.access_rights_comments);
        builder.add_uri(subject, dcat::IN_SERIES, self.in_series.as_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dcat::rdf::{build_graph, ConversionOptions};
    use crate::dcat::LanguageMap;
    use oxrdf::{Literal, Term};

    #[test]
    fn test_dataset_titles() {
        let mut dataset = Dataset::with_identifier("http://example.com/datasets/1").unwrap();
        dataset.core.title =
            LanguageMap::from_pairs([("en", "incomeAPI"), ("nb", "inntektsAPI")]).unwrap();

        let graph = build_graph(&dataset, &ConversionOptions::default()).unwrap();
        let titles: Vec<_> = graph
            .objects("http://example.com/datasets/1", dct::TITLE.as_str())
            .collect();
        assert_eq!(titles.len(), 2);
        let nb = Literal::new_language_tagged_literal_unchecked("inntektsAPI", "nb");
        assert!(titles.contains(&&Term::from(nb)));
    }

    #[test]
    fn test_dataset_nested_resources() {
        let mut dataset = Dataset::with_identifier("http://example.com/datasets/1").unwrap();
        dataset
            .distributions
            .push(Distribution::with_identifier("http://example.com/distributions/1").unwrap());
        dataset.distributions.push(Distribution::new());

        let mut location = Location::new();
        location.centroid = Some("POINT(10.75 59.91)".to_string());
        dataset.spatial.push(Spatial::Location(location));
        let norway =
            Uri::parse("https://data.geonorge.no/administrativeEnheter/nasjon/id/173163").unwrap();
        dataset.spatial.push(Spatial::Uri(norway));

        let mut period = PeriodOfTime::new();
        period.set_start_date("2019-01-01").unwrap();
        dataset.temporal.push(period);

        let graph = build_graph(&dataset, &ConversionOptions::default()).unwrap();
        let s = "http://example.com/datasets/1";

        assert_eq!(graph.objects(s, dcat::DISTRIBUTION.as_str()).count(), 2);
        assert_eq!(graph.objects(s, dct::SPATIAL.as_str()).count(), 2);
        assert_eq!(graph.objects(s, dct::TEMPORAL.as_str()).count(), 1);
        assert_eq!(graph.triples_for_subject("http://example.com/distributions/1").count(), 1);

        // Every object of an edge to a nested resource is a URI node
        let minted = dataset.distributions[1].identifier().unwrap();
        assert!(minted.as_str().contains("/.well-known/skolem/"));
        assert!(dataset.spatial.iter().all(|s| match s {
            Spatial::Location(l) => l.identifier().is_some(),
            Spatial::Uri(_) => true,
        }));
    }

    #[test]
    fn test_dataset_literals() {
        let mut dataset = Dataset::with_identifier("http://example.com/datasets/1").unwrap();
        dataset.dct_identifier = Some("adb4cf00-31c8-460c-9563-55f204cf8221".to_string());
        dataset.spatial_resolution_in_meters = vec![30.0, 0.5];
        dataset.temporal_resolution = vec!["P1D".to_string()];

        let graph = build_graph(&dataset, &ConversionOptions::default()).unwrap();
        let s = "http://example.com/datasets/1";

        let resolutions: Vec<_> = graph
            .objects(s, dcat::SPATIAL_RESOLUTION_IN_METERS.as_str())
            .collect();
        assert_eq!(resolutions.len(), 2);
        for value in ["30", "0.5"] {
            let decimal = Term::from(Literal::new_typed_literal(value, xsd::DECIMAL));
            assert!(resolutions.contains(&&decimal));
        }
        assert_eq!(graph.objects(s, dct::IDENTIFIER.as_str()).count(), 1);
    }
}
