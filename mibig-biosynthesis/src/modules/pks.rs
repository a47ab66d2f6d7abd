//!
//! Polyketide synthase module layouts.
//!
//! Each layout lists its core domains first, then modification domains, then
//! carriers. Carriers are required for every PKS layout.
//!
use serde::{Deserialize, Serialize};

use mibig_core::{ValidationContext, ValidationIssue};

use super::{ModulePayload, validate_domains};
use crate::domain::Domain;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PksModular {
    pub ks_domain: Domain,
    pub at_domain: Domain,
    pub carriers: Vec<Domain>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modification_domains: Vec<Domain>,
}

impl ModulePayload for PksModular {
    fn domains(&self) -> Vec<&Domain> {
        [&self.ks_domain, &self.at_domain]
            .into_iter()
            .chain(&self.modification_domains)
            .chain(&self.carriers)
            .collect()
    }

    fn validate(&self, ctx: &ValidationContext<'_>) -> Vec<ValidationIssue> {
        validate_domains("PksModular", &self.domains(), ctx)
    }
}

///
/// An iterative PKS module. `iterations` is how often the module is reused and
/// has to be at least one.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PksIterative {
    pub ks_domain: Domain,
    pub at_domain: Domain,
    pub carriers: Vec<Domain>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modification_domains: Vec<Domain>,
    pub iterations: i64,
}

impl ModulePayload for PksIterative {
    fn domains(&self) -> Vec<&Domain> {
        [&self.ks_domain, &self.at_domain]
            .into_iter()
            .chain(&self.modification_domains)
            .chain(&self.carriers)
            .collect()
    }

    fn validate(&self, ctx: &ValidationContext<'_>) -> Vec<ValidationIssue> {
        let mut issues = vec![];
        if self.iterations < 1 {
            issues.push(ValidationIssue::new(
                "PksIterative.iterations",
                "Must be greater than 0",
            ));
        }
        issues.extend(validate_domains("PksIterative", &self.domains(), ctx));
        issues
    }
}

/// Loading module of a cis-AT PKS; no ketosynthase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PksModularStarter {
    pub at_domain: Domain,
    pub carriers: Vec<Domain>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modification_domains: Vec<Domain>,
}

impl ModulePayload for PksModularStarter {
    fn domains(&self) -> Vec<&Domain> {
        std::iter::once(&self.at_domain)
            .chain(&self.modification_domains)
            .chain(&self.carriers)
            .collect()
    }

    fn validate(&self, ctx: &ValidationContext<'_>) -> Vec<ValidationIssue> {
        validate_domains("PksModularStarter", &self.domains(), ctx)
    }
}

/// Trans-AT PKS module; the acyltransferase acts in trans and is not recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PksTransAt {
    pub ks_domain: Domain,
    pub carriers: Vec<Domain>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modification_domains: Vec<Domain>,
}

impl ModulePayload for PksTransAt {
    fn domains(&self) -> Vec<&Domain> {
        std::iter::once(&self.ks_domain)
            .chain(&self.modification_domains)
            .chain(&self.carriers)
            .collect()
    }

    fn validate(&self, ctx: &ValidationContext<'_>) -> Vec<ValidationIssue> {
        validate_domains("PksTransAt", &self.domains(), ctx)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PksTransAtStarter {
    pub carriers: Vec<Domain>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modification_domains: Vec<Domain>,
}

impl ModulePayload for PksTransAtStarter {
    fn domains(&self) -> Vec<&Domain> {
        self.modification_domains
            .iter()
            .chain(&self.carriers)
            .collect()
    }

    fn validate(&self, ctx: &ValidationContext<'_>) -> Vec<ValidationIssue> {
        validate_domains("PksTransAtStarter", &self.domains(), ctx)
    }
}
