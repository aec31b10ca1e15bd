//! Agents and qualified attributions.

use oxrdf::{NamedNode, NamedNodeRef};

use super::error::Result;
use super::language::LanguageMap;
use super::rdf::GraphBuilder;
use super::resource::{Identity, Resource};
use super::uri::Uri;
use super::vocab::{dcat, dct, foaf, owl, prov};

/// A `foaf:Agent`, typically the organization publishing a resource.
#[derive(Debug, Clone, Default)]
pub struct Agent {
    pub identity: Identity,
    pub name: LanguageMap,
    /// Organization number or other local identifier, as a plain literal.
    pub organization_id: Option<String>,
    pub organization_type: Option<Uri>,
    pub same_as: Option<Uri>,
}

impl Agent {
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

impl Resource for Agent {
    fn resource_type(&self) -> NamedNodeRef<'static> {
        foaf::AGENT_CLASS
    }

    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn identity_mut(&mut self) -> &mut Identity {
        &mut self.identity
    }

    fn contribute(&self, subject: &NamedNode, builder: &mut GraphBuilder<'_>) {
        builder.add_language_map(subject, foaf::NAME, &self.name);
        builder.add_literal(subject, dct::IDENTIFIER, self.organization_id.as_deref());
        builder.add_uri(subject, dct::TYPE, self.organization_type.as_ref());
        builder.add_uri(subject, owl::SAME_AS, self.same_as.as_ref());
    }
}

/// A `prov:Attribution`: an agent and the role it played for a resource.
#[derive(Debug, Clone, Default)]
pub struct Attribution {
    pub identity: Identity,
    pub agent: Option<Uri>,
    pub had_role: Option<Uri>,
}

impl Attribution {
    pub fn new(agent: &str, had_role: &str) -> Result<Self> {
        Ok(Self {
            identity: Identity::new(),
            agent: Some(Uri::parse(agent)?),
            had_role: Some(Uri::parse(had_role)?),
        })
    }
}

impl Resource for Attribution {
    fn resource_type(&self) -> NamedNodeRef<'static> {
        prov::ATTRIBUTION_CLASS
    }

    fn identity(&self) -> &Identity {
        &self.identity
    }

    fn identity_mut(&mut self) -> &mut Identity {
        &mut self.identity
    }

    fn contribute(&self, subject: &NamedNode, builder: &mut GraphBuilder<'_>) {
        builder.add_uri(subject, prov::AGENT, self.agent.as_ref());
        builder.add_uri(subject, dcat::HAD_ROLE, self.had_role.as_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dcat::rdf::{build_graph, ConversionOptions};
    use oxrdf::{Literal, Term};

    #[test]
    fn test_agent_triples() {
        let mut agent = Agent::with_identifier("https://example.com/agents/1").unwrap();
        agent.name.insert("nb", "Skatteetaten").unwrap();
        agent.organization_id = Some("974761076".to_string());
        agent.organization_type =
            Some(Uri::parse("https://example.com/organization-types/state").unwrap());
        agent.same_as = Some(
            Uri::parse("https://data.brreg.no/enhetsregisteret/api/enheter/974761076").unwrap(),
        );

        let graph = build_graph(&agent, &ConversionOptions::default()).unwrap();
        let s = "https://example.com/agents/1";

        assert_eq!(graph.triples_for_subject(s).count(), 5);
        let ids: Vec<_> = graph.objects(s, dct::IDENTIFIER.as_str()).collect();
        assert_eq!(ids, vec![&Term::from(Literal::new_simple_literal("974761076"))]);
        assert_eq!(graph.objects(s, owl::SAME_AS.as_str()).count(), 1);
    }

    #[test]
    fn test_attribution_requires_valid_uris() {
        assert!(Attribution::new("https://example.com/agents/1", "not a role").is_err());
        let attribution = Attribution::new(
            "https://example.com/agents/1",
            "http://registry.it.csiro.au/def/isotc211/CI_RoleCode/contributor",
        )
        .unwrap();
        assert!(attribution.identifier().is_none());
    }

    #[test]
    fn test_attribution_gets_minted_node() {
        let attribution =
            Attribution::new("https://example.com/agents/1", "https://example.com/roles/owner")
                .unwrap();
        let graph = build_graph(&attribution, &ConversionOptions::default()).unwrap();

        let subject = attribution.identifier().unwrap().to_string();
        assert!(subject.contains("/.well-known/skolem/"));
        assert_eq!(graph.triples_for_subject(&subject).count(), 3);
    }
}
