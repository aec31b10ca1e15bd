//! RDF serialization for RdfGraph.

use std::fmt;
use std::io::Write;
use std::str::FromStr;

use oxrdfio::{JsonLdProfileSet, RdfFormat as OxRdfFormat, RdfSerializer};

use crate::dcat::error::{DcatError, Result};

use super::graph::RdfGraph;

/// Supported RDF serialization formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RdfFormat {
    /// Turtle format (.ttl) - compact and human-readable
    #[default]
    Turtle,
    /// RDF/XML format (.rdf, .xml) - XML serialization
    RdfXml,
    /// JSON-LD format (.jsonld) - JSON-based linked data
    JsonLd,
    /// N-Triples format (.nt) - simple line-based format
    NTriples,
    /// Notation3 (.n3), written as its Turtle subset
    N3,
}

impl RdfFormat {
    /// Convert to the oxrdfio format used to write it.
    fn to_oxrdf_format(self) -> OxRdfFormat {
        match self {
            RdfFormat::Turtle | RdfFormat::N3 => OxRdfFormat::Turtle,
            RdfFormat::RdfXml => OxRdfFormat::RdfXml,
            RdfFormat::JsonLd => OxRdfFormat::JsonLd {
                profile: JsonLdProfileSet::empty(),
            },
            RdfFormat::NTriples => OxRdfFormat::NTriples,
        }
    }

    pub fn media_type(self) -> &'static str {
        match self {
            RdfFormat::Turtle => "text/turtle",
            RdfFormat::RdfXml => "application/rdf+xml",
            RdfFormat::JsonLd => "application/ld+json",
            RdfFormat::NTriples => "application/n-triples",
            RdfFormat::N3 => "text/n3",
        }
    }

    pub fn file_extension(self) -> &'static str {
        match self {
            RdfFormat::Turtle => "ttl",
            RdfFormat::RdfXml => "rdf",
            RdfFormat::JsonLd => "jsonld",
            RdfFormat::NTriples => "nt",
            RdfFormat::N3 => "n3",
        }
    }
}

impl FromStr for RdfFormat {
    type Err = DcatError;

    /// Parses a format name, ignoring case.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "turtle" | "ttl" | "text/turtle" => Ok(RdfFormat::Turtle),
            "xml" | "rdf/xml" | "rdfxml" | "pretty-xml" | "application/rdf+xml" => {
                Ok(RdfFormat::RdfXml)
            }
            "json-ld" | "jsonld" | "application/ld+json" => Ok(RdfFormat::JsonLd),
            "nt" | "ntriples" | "n-triples" | "nt11" | "application/n-triples" => {
                Ok(RdfFormat::NTriples)
            }
            "n3" | "text/n3" => Ok(RdfFormat::N3),
            _ => Err(DcatError::UnsupportedFormat(s.to_string())),
        }
    }
}

impl fmt::Display for RdfFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RdfFormat::Turtle => "turtle",
            RdfFormat::RdfXml => "xml",
            RdfFormat::JsonLd => "json-ld",
            RdfFormat::NTriples => "nt",
            RdfFormat::N3 => "n3",
        };
        f.write_str(name)
    }
}

impl RdfGraph {
    /// Writes the RDF graph to the provided writer in the specified format.
    ///
    /// # Errors
    ///
    /// Returns `DcatError::Io` if the writer fails and
    /// `DcatError::Serialization` if a prefix binding is rejected.
    ///
    /// # Example
    ///
    /// ```ignore
    /// use std::fs::File;
    /// use dcatrs::dcat::rdf::{build_graph, ConversionOptions, RdfFormat};
    ///
    /// let graph = build_graph(&catalog, &ConversionOptions::default())?;
    /// graph.write(File::create("catalog.ttl")?, RdfFormat::Turtle)?;
    /// ```
    pub fn write<W: Write>(&self, writer: W, format: RdfFormat) -> Result<()> {
        log::debug!("Serializing {} triples as {}", self.len(), format);
        let mut serializer = RdfSerializer::from_format(format.to_oxrdf_format());
        for (prefix, namespace) in self.prefixes.iter() {
            serializer = serializer.with_prefix(prefix, namespace).map_err(|e| {
                DcatError::Serialization(format!("Invalid prefix `{}`: {}", prefix, e))
            })?;
        }
        let mut serializer = serializer.for_writer(writer);

        for triple in self.iter() {
            serializer.serialize_triple(triple)?;
        }
        serializer.finish()?;

        Ok(())
    }

    /// Serializes the RDF graph to bytes in the specified format.
    pub fn to_bytes(&self, format: RdfFormat) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.write(&mut buffer, format)?;
        Ok(buffer)
    }

    /// Serializes the RDF graph to a string in the specified format.
    ///
    /// # Errors
    ///
    /// Returns `DcatError::Serialization` if serialization fails or the output
    /// is not valid UTF-8.
    pub fn to_string(&self, format: RdfFormat) -> Result<String> {
        String::from_utf8(self.to_bytes(format)?)
            .map_err(|e| DcatError::Serialization(format!("Invalid UTF-8 in output: {}", e)))
    }
}
