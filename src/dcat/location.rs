//! Spatial coverage.

use oxrdf::{NamedNode, NamedNodeRef};

use super::error::Result;
use super::rdf::GraphBuilder;
use super::resource::{Identity, Resource};
use super::vocab::{dcat, dct, geosparql, locn};

/// A `dct:Location` described by WKT geometries.
///
/// Geometry strings are emitted as `geosparql:wktLiteral` values as given.
#[derive(Debug, Clone, Default)]
pub struct Location {
    pub identity: Identity,
    pub geometry: Option<String>,
    pub bounding_box: Option<String>,
    pub centroid: Option<String>,
}

impl Location {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_identifier(identifier: &str) -> Result<Self> {
        Ok(Self {
            identity: Identity::parse(identifier)?,
            ..Default::default()
        })
    }

    fn add_wkt(
        builder: &mut GraphBuilder<'_>,
        subject: &NamedNode,
        predicate: NamedNodeRef<'_>,
        wkt: Option<&str>,
    ) {
        if let Some(wkt) = wkt {
            builder.add_typed(subject, predicate, wkt, geosparql::WKT_LITERAL);
        }
    }
}

impl Resource for Location {
    fn resource_type(&self) -> NamedNodeRef<'static> {
        dct::LOCATION_CLASS
    }

    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn identity_mut(&mut self) -> &mut Identity {
        &mut self.identity
    }

    fn contribute(&self, subject: &NamedNode, builder: &mut GraphBuilder<'_>) {
        Self::add_wkt(builder, subject, locn::GEOMETRY, self.geometry.as_deref());
        Self::add_wkt(builder, subject, dcat::BBOX, self.bounding_box.as_deref());
        Self::add_wkt(builder, subject, dcat::CENTROID, self.centroid.as_deref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dcat::rdf::{build_graph, ConversionOptions};
    use oxrdf::{Literal, Term};

    #[test]
    fn test_location_wkt_literals() {
        let mut location = Location::with_identifier("http://example.com/locations/1").unwrap();
        location.centroid = Some("POINT(4.88412 52.37509)".to_string());
        location.bounding_box = Some(
            "POLYGON((3.05 51.28, 7.24 51.28, 7.24 53.65, 3.05 53.65, 3.05 51.28))".to_string(),
        );

        let graph = build_graph(&location, &ConversionOptions::default()).unwrap();
        let s = "http://example.com/locations/1";

        assert_eq!(graph.triples_for_subject(s).count(), 3);
        assert_eq!(graph.objects(s, locn::GEOMETRY.as_str()).count(), 0);
        let centroid: Vec<_> = graph.objects(s, dcat::CENTROID.as_str()).collect();
        assert_eq!(
            centroid,
            vec![&Term::from(Literal::new_typed_literal(
                "POINT(4.88412 52.37509)",
                geosparql::WKT_LITERAL
            ))]
        );
    }
}
