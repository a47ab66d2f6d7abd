use serde::{Deserialize, Serialize};

use mibig_core::{Citation, SubstrateEvidence, Validate, ValidationContext, ValidationIssue, validate_all};

///
/// A monomer integrated into the growing chain by a module.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Monomer {
    pub name: String,
    /// SMILES of the monomer as incorporated.
    pub structure: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub evidence: Vec<SubstrateEvidence>,
}

impl Monomer {
    pub fn citations(&self) -> impl Iterator<Item = &Citation> {
        self.evidence.iter().flat_map(|e| e.citations())
    }
}

impl Validate for Monomer {
    fn validate(&self, ctx: &ValidationContext<'_>) -> Vec<ValidationIssue> {
        let mut issues = vec![];
        if self.name.is_empty() {
            issues.push(ValidationIssue::new("Monomer.name", "Missing name"));
        }
        if self.structure.is_empty() {
            issues.push(ValidationIssue::new("Monomer.structure", "Missing structure"));
        }
        issues.extend(validate_all(&self.evidence, ctx));
        issues
    }
}
