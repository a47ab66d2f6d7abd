use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::Result;
use crate::evidence::LocusEvidence;
use crate::models::location::Location;
use crate::utils::{JsonEntity, decode, encode};
use crate::validation::{Validate, ValidationContext, ValidationIssue, validate_all};

///
/// Where a gene cluster sits: a nucleotide accession, the span on it and the
/// evidence tying that span to the compound.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Locus {
    pub accession: String,
    pub location: Location,
    pub evidence: Vec<LocusEvidence>,
}

impl Validate for Locus {
    fn validate(&self, ctx: &ValidationContext<'_>) -> Vec<ValidationIssue> {
        let mut issues = vec![];

        match ctx.record.and_then(|record| record.accession()) {
            Some(accession) => {
                if accession != self.accession {
                    issues.push(ValidationIssue::new(
                        "Locus.accession",
                        format!("Accession mismatch: {} != {}", self.accession, accession),
                    ));
                }
            }
            None => {
                if self.accession.matches('.').count() > 1 && !self.accession.starts_with("MIBIG.")
                {
                    issues.push(ValidationIssue::new(
                        "Locus.accession",
                        format!("Invalid accession {}", self.accession),
                    ));
                }
            }
        }

        issues.extend(self.location.validate(ctx));
        issues.extend(validate_all(&self.evidence, ctx));
        issues
    }
}

impl JsonEntity for Locus {
    fn from_json_unchecked(raw: &Value) -> Result<Self> {
        decode(raw, "Locus")
    }

    fn to_json(&self) -> Result<Value> {
        encode(self)
    }
}
