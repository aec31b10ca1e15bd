//! Data services.

use oxrdf::{NamedNode, NamedNodeRef};

use super::error::Result;
use super::rdf::GraphBuilder;
use super::resource::{Identity, Resource, ResourceCore};
use super::uri::Uri;
use super::vocab::dcat;

/// A `dcat:DataService`: an API or endpoint giving access to data.
#[derive(Debug, Clone, Default)]
pub struct DataService {
    pub identity: Identity,
    pub core: ResourceCore,
    pub endpoint_url: Option<Uri>,
    pub endpoint_description: Option<Uri>,
    /// Links to the datasets this service serves.
    pub serves_datasets: Vec<Uri>,
    pub media_types: Vec<Uri>,
}

impl DataService {
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

impl Resource for DataService {
    fn resource_type(&self) -> NamedNodeRef<'static> {
        dcat::DATA_SERVICE_CLASS
    }

    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn identity_mut(&mut self) -> &mut Identity {
        &mut self.identity
    }

    fn contribute(&self, subject: &NamedNode, builder: &mut GraphBuilder<'_>) {
        self.core.contribute(subject, builder);
        builder.add_uri(subject, dcat::ENDPOINT_URL, self.endpoint_url.as_ref());
        builder.add_uri(subject, dcat::ENDPOINT_DESCRIPTION, self.endpoint_description.as_ref());
        builder.add_uris(subject, dcat::SERVES_DATASET, &self.serves_datasets);
        builder.add_uris(subject, dcat::MEDIA_TYPE, &self.media_types);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dcat::rdf::{build_graph, ConversionOptions};
    use crate::dcat::vocab::dct;

    #[test]
    fn test_data_service_triples() {
        let mut service = DataService::with_identifier("http://example.com/services/1").unwrap();
        service.core.title.insert("en", "incomeAPI").unwrap();
        service.core.title.insert("nb", "inntektsAPI").unwrap();
        service.endpoint_url = Some(Uri::parse("https://api.example.com/income").unwrap());
        service.endpoint_description =
            Some(Uri::parse("https://api.example.com/income/openapi.json").unwrap());
        service.serves_datasets =
            Uri::parse_all(["http://example.com/datasets/1", "http://example.com/datasets/2"])
                .unwrap();

        let graph = build_graph(&service, &ConversionOptions::default()).unwrap();
        let s = "http://example.com/services/1";

        assert_eq!(graph.objects(s, dct::TITLE.as_str()).count(), 2);
        assert_eq!(graph.objects(s, dcat::SERVES_DATASET.as_str()).count(), 2);
        assert_eq!(graph.objects(s, dcat::ENDPOINT_URL.as_str()).count(), 1);
        assert_eq!(graph.triples_for_subject(s).count(), 7);
    }
}
