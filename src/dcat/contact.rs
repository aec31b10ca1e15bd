//! Contact points.

use oxrdf::{NamedNode, NamedNodeRef};

use super::error::Result;
use super::language::LanguageMap;
use super::rdf::GraphBuilder;
use super::resource::{Identity, Resource};
use super::uri::Uri;
use super::vocab::vcard;

/// Contact information for a resource, emitted as a `vcard:Organization`.
///
/// Email and telephone are stored as `mailto:` and `tel:` URIs.
#[derive(Debug, Clone, Default)]
pub struct Contact {
    pub identity: Identity,
    pub name: LanguageMap,
    email: Option<Uri>,
    telephone: Option<Uri>,
    pub url: Option<Uri>,
}

impl Contact {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_identifier(identifier: &str) -> Result<Self> {
        Ok(Self {
            identity: Identity::parse(identifier)?,
            ..Default::default()
        })
    }

    /// The email as a `mailto:` URI.
    pub fn email(&self) -> Option<&Uri> {
        self.email.as_ref()
    }

    /// Sets the email address. A missing `mailto:` scheme is added.
    pub fn set_email(&mut self, email: &str) -> Result<()> {
        let email = email.trim();
        let uri = match email.strip_prefix("mailto:") {
            Some(_) => Uri::parse(email)?,
            None => Uri::parse(&format!("mailto:{}", email))?,
        };
        self.email = Some(uri);
        Ok(())
    }

    /// The telephone number as a `tel:` URI.
    pub fn telephone(&self) -> Option<&Uri> {
        self.telephone.as_ref()
    }

    /// Sets the telephone number. Whitespace is removed and a missing `tel:`
    /// scheme is added.
    pub fn set_telephone(&mut self, telephone: &str) -> Result<()> {
        let number: String = telephone.chars().filter(|c| !c.is_whitespace()).collect();
        let uri = match number.strip_prefix("tel:") {
            Some(_) => Uri::parse(&number)?,
            None => Uri::parse(&format!("tel:{}", number))?,
        };
        self.telephone = Some(uri);
        Ok(())
    }
}

impl Resource for Contact {
    fn resource_type(&self) -> NamedNodeRef<'static> {
        vcard::ORGANIZATION_CLASS
    }

    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn identity_mut(&mut self) -> &mut Identity {
        &mut self.identity
    }

    fn contribute(&self, subject: &NamedNode, builder: &mut GraphBuilder<'_>) {
        builder.add_language_map(subject, vcard::HAS_ORGANIZATION_NAME, &self.name);
        builder.add_uri(subject, vcard::HAS_EMAIL, self.email.as_ref());
        builder.add_uri(subject, vcard::HAS_TELEPHONE, self.telephone.as_ref());
        builder.add_uri(subject, vcard::HAS_URL, self.url.as_ref());
    }
}
