//! RDF support for DCAT catalogs.
//!
//! Walks a resource tree into an [`RdfGraph`] and serializes it. Resources
//! without an identifier get a skolem IRI, minted once per instance.
//!
//! # Example: Catalog to Turtle
//!
//! ```ignore
//! use dcatrs::dcat::rdf::{build_graph, ConversionOptions, RdfFormat};
//!
//! let graph = build_graph(&catalog, &ConversionOptions::default())?;
//! println!("Generated {} triples", graph.len());
//! println!("{}", graph.to_string(RdfFormat::Turtle)?);
//! ```

pub mod convert;
pub mod graph;
pub mod prefixes;
pub mod rdf_io;
pub mod resolver;

// Re-exports
pub use convert::{
    build_graph, to_rdf, to_rdf_with_options, ConversionOptions, GraphBuilder, SKOLEM_BASE_URL_ENV,
};
pub use graph::RdfGraph;
pub use prefixes::PrefixTable;
pub use rdf_io::RdfFormat;
pub use resolver::{IdentifierResolver, Skolemizer, DEFAULT_SKOLEM_BASE_URL, SKOLEM_PATH};
