//! Example: Exporting a DCAT catalog to RDF formats
//!
//! Builds a small catalog with a dataset, a distribution and a data service,
//! then prints it as Turtle, N-Triples and JSON-LD.
//!
//! Run with:
//! ```bash
//! cargo run --example catalog_export
//! ```

use dcatrs::dcat::rdf::{build_graph, ConversionOptions, RdfFormat};
use dcatrs::dcat::{
    Catalog, Contact, DataService, Dataset, Distribution, LanguageMap, PeriodOfTime, Publisher,
    Resource, Uri,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Create a sample catalog
    let mut catalog = Catalog::with_identifier("http://example.com/catalogs/1")?;
    catalog.core.title =
        LanguageMap::from_pairs([("en", "A dataset catalog"), ("nb", "En datasettkatalog")])?;
    catalog.core.publisher = Some(Publisher::parse("https://example.com/publishers/1")?);

    let mut contact = Contact::new();
    contact.name.insert("en", "Data helpdesk")?;
    contact.set_email("data@example.com")?;
    catalog.core.contact_point = Some(contact);

    let mut dataset = Dataset::with_identifier("http://example.com/datasets/1")?;
    dataset.core.title = LanguageMap::from_pairs([("en", "incomeAPI"), ("nb", "inntektsAPI")])?;
    dataset.core.theme =
        Uri::parse_all(["http://publications.europa.eu/resource/authority/data-theme/ECON"])?;

    let mut period = PeriodOfTime::new();
    period.set_interval("2019-01-01/..")?;
    dataset.temporal.push(period);

    // No identifier: one is minted under the skolem base URL
    let mut distribution = Distribution::new();
    distribution.access_url = Some(Uri::parse("https://api.example.com/income")?);
    distribution.media_types =
        Uri::parse_all(["https://www.iana.org/assignments/media-types/application/json"])?;
    dataset.distributions.push(distribution);
    catalog.datasets.push(dataset);

    let mut service = DataService::with_identifier("http://example.com/services/1")?;
    service.endpoint_url = Some(Uri::parse("https://api.example.com/income")?);
    service.serves_datasets.push(Uri::parse("http://example.com/datasets/1")?);
    catalog.services.push(service);

    // Build once, render in several formats
    let options = ConversionOptions::from_env();
    let graph = build_graph(&catalog, &options)?;

    println!("=== DCAT Catalog to RDF Conversion ===\n");
    println!("Generated {} triples\n", graph.len());

    println!("--- Turtle Format ---");
    println!("{}\n", graph.to_string(RdfFormat::Turtle)?);

    println!("--- N-Triples Format ---");
    println!("{}\n", graph.to_string(RdfFormat::NTriples)?);

    println!("--- JSON-LD Format ---");
    println!("{}\n", graph.to_string(RdfFormat::JsonLd)?);

    // The one-call entry point, with a custom skolem base URL
    println!("--- Minted Under a Custom Base ---");
    let fresh = catalog.clone();
    let options = ConversionOptions::default().with_skolem_base_url("https://data.example.org/");
    let turtle = fresh.to_rdf_with_options("turtle", &options)?;
    println!("{}", String::from_utf8(turtle)?);

    Ok(())
}
