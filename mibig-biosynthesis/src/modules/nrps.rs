use serde::{Deserialize, Serialize};

use mibig_core::{ValidationContext, ValidationIssue};

use super::{ModulePayload, validate_domains};
use crate::domain::Domain;

///
/// A type I NRPS module: adenylation, optional condensation, carriers and
/// optional modification domains. Used for both `nrps-type1` and `nrps-type6`.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NrpsTypeI {
    pub a_domain: Domain,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub c_domain: Option<Domain>,
    pub carriers: Vec<Domain>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modification_domains: Vec<Domain>,
}

impl ModulePayload for NrpsTypeI {
    fn domains(&self) -> Vec<&Domain> {
        self.c_domain
            .iter()
            .chain(std::iter::once(&self.a_domain))
            .chain(&self.modification_domains)
            .chain(&self.carriers)
            .collect()
    }

    fn validate(&self, ctx: &ValidationContext<'_>) -> Vec<ValidationIssue> {
        validate_domains("NrpsTypeI", &self.domains(), ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn test_condensation_domain_comes_first() {
        let nrps: NrpsTypeI = serde_json::from_value(json!({
            "a_domain": {"gene": "a", "location": {"from": 1, "to": 2}},
            "c_domain": {"gene": "c", "location": {"from": 1, "to": 2}},
            "carriers": [{"gene": "t", "location": {"from": 1, "to": 2}}],
            "modification_domains": [{"gene": "m", "location": {"from": 1, "to": 2}}]
        }))
        .unwrap();

        let genes: Vec<&str> = nrps.domains().iter().map(|d| d.gene.as_str()).collect();
        assert_eq!(genes, vec!["c", "a", "m", "t"]);
    }

    #[rstest]
    fn test_carriers_are_required() {
        let result = serde_json::from_value::<NrpsTypeI>(json!({
            "a_domain": {"gene": "a", "location": {"from": 1, "to": 2}}
        }));
        assert!(result.is_err());
    }
}
