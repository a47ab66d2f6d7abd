use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::Result;
use crate::utils::{JsonEntity, decode, encode};
use crate::validation::{Validate, ValidationContext, ValidationIssue};

/// Producing organism of a cluster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Taxonomy {
    pub name: String,
    pub ncbi_tax_id: u64,
}

impl Validate for Taxonomy {
    fn validate(&self, ctx: &ValidationContext<'_>) -> Vec<ValidationIssue> {
        let mut issues = vec![];
        let Some(record) = ctx.record else {
            return issues;
        };

        if let Some(organism) = record.organism() {
            if organism != self.name {
                issues.push(ValidationIssue::new(
                    "Taxonomy.name",
                    format!("Name mismatch: {} != {}", self.name, organism),
                ));
            }
        }
        if let Some(tax_id) = record.ncbi_tax_id() {
            if tax_id != self.ncbi_tax_id {
                issues.push(ValidationIssue::new(
                    "Taxonomy.ncbi_tax_id",
                    format!("NCBI Tax ID mismatch: {} != {}", self.ncbi_tax_id, tax_id),
                ));
            }
        }
        issues
    }
}

impl JsonEntity for Taxonomy {
    fn from_json_unchecked(raw: &Value) -> Result<Self> {
        decode(raw, "Taxonomy")
    }

    fn to_json(&self) -> Result<Value> {
        encode(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use crate::record::{Cds, GenomeRecord};
    use crate::validation::QualityLevel;

    #[rstest]
    fn test_raw_shape() {
        let raw = json!({"name": "Streptomyces coelicolor", "ncbiTaxId": 1902});
        let taxonomy = Taxonomy::from_json_unchecked(&raw).unwrap();
        assert_eq!(taxonomy.ncbi_tax_id, 1902);
        assert_eq!(taxonomy.to_json().unwrap(), raw);
    }

    #[rstest]
    fn test_checked_against_record() {
        let record = GenomeRecord::new("AB000001.1", vec![Cds::new(Some("a"), None, None).unwrap()])
            .with_organism("Streptomyces griseus")
            .with_ncbi_tax_id(1911);
        let taxonomy = Taxonomy {
            name: "Streptomyces coelicolor".to_string(),
            ncbi_tax_id: 1902,
        };

        assert!(taxonomy.validate(&ValidationContext::new(QualityLevel::High)).is_empty());

        let ctx = ValidationContext::new(QualityLevel::High).with_record(&record);
        let fields: Vec<String> = taxonomy.validate(&ctx).into_iter().map(|i| i.field).collect();
        assert_eq!(fields, vec!["Taxonomy.name", "Taxonomy.ncbi_tax_id"]);
    }
}
