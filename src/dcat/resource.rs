//! The triple-contribution contract shared by every catalog entity.

use std::cell::OnceCell;

use chrono::NaiveDate;
use oxrdf::{NamedNode, NamedNodeRef};

use super::agent::{Agent, Attribution};
use super::contact::Contact;
use super::error::Result;
use super::language::LanguageMap;
use super::rdf::{convert, ConversionOptions, GraphBuilder};
use super::relationship::Relationship;
use super::uri::Uri;
use super::vocab::{dcat, dct, odrl, prov};

/// An entity that contributes triples to an RDF graph.
///
/// Implementors only describe their own properties; the [`GraphBuilder`]
/// resolves the subject URI, emits the `rdf:type` triple from
/// [`Resource::resource_type`] and guards against visiting the same instance
/// twice.
pub trait Resource {
    /// The RDF class of this variant. Fixed per type.
    fn resource_type(&self) -> NamedNodeRef<'static>;

    fn identity(&self) -> &Identity;

    fn identity_mut(&mut self) -> &mut Identity;

    /// Emits this resource's property triples about `subject` and recurses into
    /// the resources it owns.
    fn contribute(&self, subject: &NamedNode, builder: &mut GraphBuilder<'_>);

    /// The explicit identifier, or the URI minted for this instance by an
    /// earlier conversion.
    fn identifier(&self) -> Option<&Uri> {
        self.identity().get()
    }

    /// Sets the identifier, validating it as an absolute URI.
    fn set_identifier(&mut self, identifier: &str) -> Result<()> {
        let uri = Uri::parse(identifier)?;
        self.identity_mut().set(uri);
        Ok(())
    }

    /// Serializes this resource and everything it owns.
    ///
    /// Accepted formats: `turtle` (default), `xml`, `json-ld`, `nt`, `n3`.
    fn to_rdf(&self, format: &str) -> Result<Vec<u8>>
    where
        Self: Sized,
    {
        convert::to_rdf(self, format)
    }

    fn to_rdf_with_options(&self, format: &str, options: &ConversionOptions) -> Result<Vec<u8>>
    where
        Self: Sized,
    {
        convert::to_rdf_with_options(self, format, options)
    }
}

/// Identifier state of a resource.
///
/// Holds the caller-supplied URI, or lazily caches the URI minted for the
/// instance the first time it is resolved. Minting only needs `&self`, so
/// conversion never requires mutable access to the object graph.
#[derive(Debug, Default)]
pub struct Identity {
    explicit: Option<Uri>,
    minted: OnceCell<Uri>,
}

impl Identity {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parse(identifier: &str) -> Result<Self> {
        Ok(Self::from(Uri::parse(identifier)?))
    }

    /// The caller-supplied identifier.
    pub fn explicit(&self) -> Option<&Uri> {
        self.explicit.as_ref()
    }

    /// The identifier minted for this instance, if any.
    pub fn minted(&self) -> Option<&Uri> {
        self.minted.get()
    }

    pub fn get(&self) -> Option<&Uri> {
        self.explicit.as_ref().or_else(|| self.minted.get())
    }

    /// Replaces the identifier. A previously minted URI is discarded.
    pub fn set(&mut self, uri: Uri) {
        self.explicit = Some(uri);
        self.minted = OnceCell::new();
    }

    pub fn clear(&mut self) {
        self.explicit = None;
        self.minted = OnceCell::new();
    }

    pub(crate) fn get_or_mint(&self, mint: impl FnOnce() -> Uri) -> &Uri {
        match &self.explicit {
            Some(uri) => uri,
            None => self.minted.get_or_init(mint),
        }
    }
}

// A clone is a distinct resource and must not share a minted URI.
impl Clone for Identity {
    fn clone(&self) -> Self {
        Self {
            explicit: self.explicit.clone(),
            minted: OnceCell::new(),
        }
    }
}

impl From<Uri> for Identity {
    fn from(uri: Uri) -> Self {
        Self {
            explicit: Some(uri),
            minted: OnceCell::new(),
        }
    }
}

/// The publisher of a resource: a link, or an inline agent description.
#[derive(Debug, Clone)]
pub enum Publisher {
    Uri(Uri),
    Agent(Agent),
}

impl Publisher {
    pub fn parse(uri: &str) -> Result<Self> {
        Ok(Publisher::Uri(Uri::parse(uri)?))
    }
}

impl From<Uri> for Publisher {
    fn from(uri: Uri) -> Self {
        Publisher::Uri(uri)
    }
}

impl From<Agent> for Publisher {
    fn from(agent: Agent) -> Self {
        Publisher::Agent(agent)
    }
}

/// Properties every `dcat:Resource` subclass carries.
///
/// Embedded by [`Catalog`](super::Catalog), [`Dataset`](super::Dataset) and
/// [`DataService`](super::DataService).
#[derive(Debug, Clone, Default)]
pub struct ResourceCore {
    pub title: LanguageMap,
    pub description: LanguageMap,
    pub keyword: LanguageMap,
    pub publisher: Option<Publisher>,
    pub access_rights: Option<Uri>,
    pub conforms_to: Vec<Uri>,
    pub contact_point: Option<Contact>,
    pub creator: Option<Uri>,
    pub release_date: Option<NaiveDate>,
    pub modification_date: Option<NaiveDate>,
    /// Links to language resources, e.g. EU publications office language URIs.
    pub language: Vec<Uri>,
    pub theme: Vec<Uri>,
    /// `dct:type`
    pub type_genre: Option<Uri>,
    pub resource_relation: Vec<Uri>,
    pub qualified_relation: Vec<Relationship>,
    pub landing_page: Vec<Uri>,
    pub qualified_attributions: Vec<Attribution>,
    pub license: Option<Uri>,
    pub rights: Option<Uri>,
    pub has_policy: Option<Uri>,
    pub is_referenced_by: Vec<Uri>,
    pub prev: Option<Uri>,
}

impl ResourceCore {
    pub(crate) fn contribute(&self, subject: &NamedNode, builder: &mut GraphBuilder<'_>) {
        builder.add_language_map(subject, dct::TITLE, &self.title);
        builder.add_language_map(subject, dct::DESCRIPTION, &self.description);
        builder.add_language_map(subject, dcat::KEYWORD, &self.keyword);

        match &self.publisher {
            Some(Publisher::Uri(uri)) => builder.add_uri(subject, dct::PUBLISHER, Some(uri)),
            Some(Publisher::Agent(agent)) => builder.add_resource(subject, dct::PUBLISHER, agent),
            None => {}
        }
        if let Some(contact) = &self.contact_point {
            builder.add_resource(subject, dcat::CONTACT_POINT, contact);
        }

        builder.add_uri(subject, dct::ACCESS_RIGHTS, self.access_rights.as_ref());
        builder.add_uris(subject, dct::CONFORMS_TO, &self.conforms_to);
        builder.add_uri(subject, dct::CREATOR, self.creator.as_ref());
        builder.add_date(subject, dct::ISSUED, self.release_date);
        builder.add_date(subject, dct::MODIFIED, self.modification_date);
        builder.add_uris(subject, dct::LANGUAGE, &self.language);
        builder.add_uris(subject, dcat::THEME, &self.theme);
        builder.add_uri(subject, dct::TYPE, self.type_genre.as_ref());
        builder.add_uris(subject, dct::RELATION, &self.resource_relation);
        builder.add_uris(subject, dcat::LANDING_PAGE, &self.landing_page);
        builder.add_uri(subject, dct::LICENSE, self.license.as_ref());
        builder.add_uri(subject, dct::RIGHTS, self.rights.as_ref());
        builder.add_uri(subject, odrl::HAS_POLICY, self.has_policy.as_ref());
        builder.add_uris(subject, dct::IS_REFERENCED_BY, &self.is_referenced_by);
        builder.add_uri(subject, dcat::PREV, self.prev.as_ref());

        for relationship in &self.qualified_relation {
            builder.add_resource(subject, dcat::QUALIFIED_RELATION, relationship);
        }
        for attribution in &self.qualified_attributions {
            builder.add_resource(subject, prov::QUALIFIED_ATTRIBUTION, attribution);
        }
    }
}
