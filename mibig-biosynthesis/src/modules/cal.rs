use serde::{Deserialize, Serialize};

use mibig_core::{ValidationContext, ValidationIssue};

use super::{ModulePayload, validate_domains};
use crate::domain::Domain;

///
/// Module loaded by a CoA-ligase (CAL) domain.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Cal {
    pub cal: Domain,
    /// Always written, even when empty.
    #[serde(default)]
    pub carriers: Vec<Domain>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modification_domains: Vec<Domain>,
}

impl ModulePayload for Cal {
    fn domains(&self) -> Vec<&Domain> {
        std::iter::once(&self.cal)
            .chain(&self.modification_domains)
            .chain(&self.carriers)
            .collect()
    }

    fn validate(&self, ctx: &ValidationContext<'_>) -> Vec<ValidationIssue> {
        validate_domains("Cal", &self.domains(), ctx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;
    use serde_json::{Value, json};

    use mibig_core::QualityLevel;

    #[fixture]
    fn raw_cal() -> Value {
        json!({
            "cal": {
                "gene": "calA",
                "location": {"from": 1, "to": 520},
                "substrates": [{"name": "3-amino-5-hydroxybenzoic acid"}],
                "evidence": [{"method": "Homology", "references": ["pubmed:11"]}]
            },
            "carriers": []
        })
    }

    #[rstest]
    fn test_empty_carriers_round_trip(raw_cal: Value) {
        let cal: Cal = serde_json::from_value(raw_cal.clone()).unwrap();
        assert!(cal.carriers.is_empty());
        assert_eq!(serde_json::to_value(&cal).unwrap(), raw_cal);
    }

    #[rstest]
    fn test_missing_carriers_default_to_empty(mut raw_cal: Value) {
        raw_cal.as_object_mut().unwrap().remove("carriers");
        let cal: Cal = serde_json::from_value(raw_cal).unwrap();
        assert!(cal.carriers.is_empty());
        assert_eq!(serde_json::to_value(&cal).unwrap()["carriers"], json!([]));
    }

    #[rstest]
    fn test_cal_domain_alone_is_enough(raw_cal: Value) {
        let cal: Cal = serde_json::from_value(raw_cal).unwrap();
        let ctx = ValidationContext::new(QualityLevel::High);
        assert_eq!(cal.domains().len(), 1);
        assert!(ModulePayload::validate(&cal, &ctx).is_empty());
    }
}
