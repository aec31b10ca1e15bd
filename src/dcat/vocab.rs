//! Vocabulary IRIs used by the DCAT mapping.
//!
//! Laid out like `oxrdf::vocab`: one module per namespace, one constant per
//! class or property. `rdf` and `xsd` terms come from `oxrdf::vocab` directly.

/// [DCAT](https://www.w3.org/TR/vocab-dcat-2/) vocabulary.
pub mod dcat {
    use oxrdf::NamedNodeRef;

    pub const NAMESPACE: &str = "http://www.w3.org/ns/dcat#";

    pub const CATALOG_CLASS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dcat#Catalog");
    pub const CATALOG_RECORD_CLASS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dcat#CatalogRecord");
    pub const DATASET_CLASS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dcat#Dataset");
    pub const DATA_SERVICE_CLASS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dcat#DataService");
    pub const DISTRIBUTION_CLASS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dcat#Distribution");
    pub const RELATIONSHIP_CLASS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dcat#Relationship");

    pub const ACCESS_SERVICE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dcat#accessService");
    pub const ACCESS_URL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dcat#accessURL");
    pub const BBOX: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dcat#bbox");
    pub const BYTE_SIZE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dcat#byteSize");
    pub const CATALOG: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dcat#catalog");
    pub const CENTROID: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dcat#centroid");
    pub const COMPRESS_FORMAT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dcat#compressFormat");
    pub const CONTACT_POINT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dcat#contactPoint");
    pub const DATASET: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dcat#dataset");
    pub const DISTRIBUTION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dcat#distribution");
    pub const DOWNLOAD_URL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dcat#downloadURL");
    pub const END_DATE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dcat#endDate");
    pub const ENDPOINT_DESCRIPTION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dcat#endpointDescription");
    pub const ENDPOINT_URL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dcat#endpointURL");
    pub const HAD_ROLE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dcat#hadRole");
    pub const IN_SERIES: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dcat#inSeries");
    pub const KEYWORD: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dcat#keyword");
    pub const LANDING_PAGE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dcat#landingPage");
    pub const MEDIA_TYPE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dcat#mediaType");
    pub const PACKAGE_FORMAT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dcat#packageFormat");
    pub const PREV: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dcat#prev");
    pub const QUALIFIED_RELATION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dcat#qualifiedRelation");
    pub const RECORD: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dcat#record");
    pub const SERVES_DATASET: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dcat#servesDataset");
    pub const SERVICE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dcat#service");
    pub const SPATIAL_RESOLUTION_IN_METERS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dcat#spatialResolutionInMeters");
    pub const START_DATE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dcat#startDate");
    pub const TEMPORAL_RESOLUTION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dcat#temporalResolution");
    pub const THEME: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dcat#theme");
    pub const THEME_TAXONOMY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/dcat#themeTaxonomy");
}

/// [Dublin Core terms](https://www.dublincore.org/specifications/dublin-core/dcmi-terms/).
pub mod dct {
    use oxrdf::NamedNodeRef;

    pub const NAMESPACE: &str = "http://purl.org/dc/terms/";

    pub const LOCATION_CLASS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/Location");
    pub const PERIOD_OF_TIME_CLASS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/PeriodOfTime");

    pub const ACCESS_RIGHTS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/accessRights");
    pub const ACCRUAL_PERIODICITY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/accrualPeriodicity");
    pub const CONFORMS_TO: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/conformsTo");
    pub const CREATOR: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/creator");
    pub const DESCRIPTION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/description");
    pub const FORMAT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/format");
    pub const HAS_PART: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/hasPart");
    pub const IDENTIFIER: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/identifier");
    pub const IS_REFERENCED_BY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/isReferencedBy");
    pub const ISSUED: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/issued");
    pub const LANGUAGE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/language");
    pub const LICENSE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/license");
    pub const MODIFIED: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/modified");
    pub const PUBLISHER: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/publisher");
    pub const RELATION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/relation");
    pub const RIGHTS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/rights");
    pub const SPATIAL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/spatial");
    pub const TEMPORAL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/temporal");
    pub const TITLE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://purl.org/dc/terms/title");
    pub const TYPE: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("http://purl.org/dc/terms/type");
}

/// [FOAF](http://xmlns.com/foaf/spec/) vocabulary.
pub mod foaf {
    use oxrdf::NamedNodeRef;

    pub const NAMESPACE: &str = "http://xmlns.com/foaf/0.1/";

    pub const AGENT_CLASS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://xmlns.com/foaf/0.1/Agent");
    pub const HOMEPAGE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://xmlns.com/foaf/0.1/homepage");
    pub const NAME: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://xmlns.com/foaf/0.1/name");
    pub const PRIMARY_TOPIC: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://xmlns.com/foaf/0.1/primaryTopic");
}

/// [vCard](https://www.w3.org/TR/vcard-rdf/) vocabulary.
pub mod vcard {
    use oxrdf::NamedNodeRef;

    pub const NAMESPACE: &str = "http://www.w3.org/2006/vcard/ns#";

    pub const ORGANIZATION_CLASS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2006/vcard/ns#Organization");
    pub const HAS_EMAIL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2006/vcard/ns#hasEmail");
    pub const HAS_ORGANIZATION_NAME: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2006/vcard/ns#hasOrganizationName");
    pub const HAS_TELEPHONE: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2006/vcard/ns#hasTelephone");
    pub const HAS_URL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2006/vcard/ns#hasURL");
}

/// [ISA Programme Location Core](https://semiceu.github.io/Core-Location-Vocabulary/) vocabulary.
pub mod locn {
    use oxrdf::NamedNodeRef;

    pub const NAMESPACE: &str = "http://www.w3.org/ns/locn#";

    pub const GEOMETRY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/locn#geometry");
}

/// [GeoSPARQL](http://www.opengis.net/ont/geosparql) vocabulary.
pub mod geosparql {
    use oxrdf::NamedNodeRef;

    pub const NAMESPACE: &str = "http://www.opengis.net/ont/geosparql#";

    pub const WKT_LITERAL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.opengis.net/ont/geosparql#wktLiteral");
}

/// [ODRL](https://www.w3.org/TR/odrl-vocab/) vocabulary.
pub mod odrl {
    use oxrdf::NamedNodeRef;

    pub const NAMESPACE: &str = "http://www.w3.org/ns/odrl/2/";

    pub const HAS_POLICY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/odrl/2/hasPolicy");
}

/// [PROV-O](https://www.w3.org/TR/prov-o/) vocabulary.
pub mod prov {
    use oxrdf::NamedNodeRef;

    pub const NAMESPACE: &str = "http://www.w3.org/ns/prov#";

    pub const ATTRIBUTION_CLASS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/prov#Attribution");
    pub const AGENT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/prov#agent");
    pub const QUALIFIED_ATTRIBUTION: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/prov#qualifiedAttribution");
    pub const WAS_GENERATED_BY: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/ns/prov#wasGeneratedBy");
}

/// [OWL](https://www.w3.org/TR/owl2-rdf-based-semantics/) terms.
pub mod owl {
    use oxrdf::NamedNodeRef;

    pub const NAMESPACE: &str = "http://www.w3.org/2002/07/owl#";

    pub const SAME_AS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://www.w3.org/2002/07/owl#sameAs");
}

/// Norwegian DCAT-AP-NO extension terms.
pub mod dcatno {
    use oxrdf::NamedNodeRef;

    pub const NAMESPACE: &str = "https://data.norge.no/vocabulary/dcatno#";

    pub const ACCESS_RIGHTS_COMMENT: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("https://data.norge.no/vocabulary/dcatno#accessRightsComment");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terms_live_in_their_namespace() {
        assert!(dcat::DATASET.as_str().starts_with(dcat::NAMESPACE));
        assert!(dct::TITLE.as_str().starts_with(dct::NAMESPACE));
        assert!(foaf::HOMEPAGE.as_str().starts_with(foaf::NAMESPACE));
        assert!(vcard::HAS_EMAIL.as_str().starts_with(vcard::NAMESPACE));
        assert!(locn::GEOMETRY.as_str().starts_with(locn::NAMESPACE));
        assert!(geosparql::WKT_LITERAL.as_str().starts_with(geosparql::NAMESPACE));
        assert!(odrl::HAS_POLICY.as_str().starts_with(odrl::NAMESPACE));
        assert!(prov::AGENT.as_str().starts_with(prov::NAMESPACE));
        assert!(owl::SAME_AS.as_str().starts_with(owl::NAMESPACE));
        assert!(dcatno::ACCESS_RIGHTS_COMMENT.as_str().starts_with(dcatno::NAMESPACE));
    }

    #[test]
    fn test_class_and_property_differ_by_case() {
        assert_ne!(dcat::CATALOG_CLASS, dcat::CATALOG);
        assert_ne!(dcat::DATASET_CLASS, dcat::DATASET);
    }
}
