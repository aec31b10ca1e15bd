//! Qualified relations between resources.

use oxrdf::{NamedNode, NamedNodeRef};

use super::error::Result;
use super::rdf::GraphBuilder;
use super::resource::{Identity, Resource};
use super::uri::Uri;
use super::vocab::{dcat, dct};

/// A `dcat:Relationship`: a related resource and the role it plays.
///
/// The owning resource links to it with `dcat:qualifiedRelation`.
#[derive(Debug, Clone, Default)]
pub struct Relationship {
    pub identity: Identity,
    pub relation: Option<Uri>,
    pub had_role: Option<Uri>,
}

impl Relationship {
    pub fn new(relation: &str, had_role: &str) -> Result<Self> {
        Ok(Self {
            identity: Identity::new(),
            relation: Some(Uri::parse(relation)?),
            had_role: Some(Uri::parse(had_role)?),
        })
    }
}

impl Resource for Relationship {
    fn resource_type(&self) -> NamedNodeRef<'static> {
        dcat::RELATIONSHIP_CLASS
    }

    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn identity_mut(&mut self) -> &mut Identity {
        &mut self.identity
    }

    fn contribute(&self, subject: &NamedNode, builder: &mut GraphBuilder<'_>) {
        builder.add_uri(subject, dct::RELATION, self.relation.as_ref());
        builder.add_uri(subject, dcat::HAD_ROLE, self.had_role.as_ref());
    }
}
