//!
//! Evidence: a documented method plus the citations supporting it.
//!
//! Each vocabulary of methods is its own marker type, so evidence for substrate
//! specificity and evidence for a locus are distinct, non-interchangeable types even
//! though they share one shape and one set of rules.
//!
use std::fmt::Debug;
use std::marker::PhantomData;

use serde::{Deserialize, Serialize};

use crate::citation::{Citation, validate_citation_list};
use crate::validation::{Validate, ValidationContext, ValidationIssue};

///
/// A closed vocabulary of evidence methods.
///
pub trait EvidenceKind {
    /// Name used as the field prefix of reported issues.
    const NAME: &'static str;
    const VALID_METHODS: &'static [&'static str];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound = "", deny_unknown_fields)]
pub struct Evidence<K: EvidenceKind> {
    pub method: String,
    pub references: Vec<Citation>,
    #[serde(skip)]
    kind: PhantomData<K>,
}

impl<K: EvidenceKind> Evidence<K> {
    pub fn new(method: impl Into<String>, references: Vec<Citation>) -> Self {
        Evidence {
            method: method.into(),
            references,
            kind: PhantomData,
        }
    }

    pub fn citations(&self) -> &[Citation] {
        &self.references
    }
}

impl<K: EvidenceKind> Validate for Evidence<K> {
    fn validate(&self, _ctx: &ValidationContext<'_>) -> Vec<ValidationIssue> {
        let mut issues = vec![];
        if !K::VALID_METHODS.contains(&self.method.as_str()) {
            issues.push(ValidationIssue::new(
                format!("{}.method", K::NAME),
                format!("Invalid method: {}", self.method),
            ));
        }
        issues.extend(validate_citation_list(
            &self.references,
            &format!("{}.references", K::NAME),
        ));
        issues
    }
}

/// Methods supporting a substrate specificity or structure claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubstrateMethods {}

impl EvidenceKind for SubstrateMethods {
    const NAME: &'static str = "SubstrateEvidence";
    const VALID_METHODS: &'static [&'static str] = &[
        "Activity assay",
        "ACVS assay",
        "ATP-PPi exchange assay",
        "Enzyme-coupled assay",
        "Feeding study",
        "Heterologous expression",
        "Homology",
        "HPLC",
        "In-vitro experiments",
        "Knock-out studies",
        "Mass spectrometry",
        "NMR",
        "Radio labelling",
        "Sequence-based prediction",
        "Steady-state kinetics",
        "Structure-based inference",
        "X-ray crystallography",
    ];
}

pub type SubstrateEvidence = Evidence<SubstrateMethods>;

/// Methods connecting a locus to the compound it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocusMethods {}

impl EvidenceKind for LocusMethods {
    const NAME: &'static str = "LocusEvidence";
    const VALID_METHODS: &'static [&'static str] = &[
        "Homology-based prediction",
        "Correlation of genomic and metabolomic data",
        "Gene expression correlated with compound production",
        "Knock-out studies",
        "Enzymatic assays",
        "Heterologous expression",
        "In vitro expression",
    ];
}

pub type LocusEvidence = Evidence<LocusMethods>;

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    use crate::validation::QualityLevel;

    #[rstest]
    fn test_valid_method_and_references() {
        let ctx = ValidationContext::new(QualityLevel::High);
        let evidence = SubstrateEvidence::new("NMR", vec!["pubmed:1".parse().unwrap()]);
        assert!(evidence.validate(&ctx).is_empty());
    }

    #[rstest]
    fn test_method_outside_vocabulary() {
        let ctx = ValidationContext::new(QualityLevel::High);
        // a valid locus method is not a valid substrate method
        let evidence = SubstrateEvidence::new("Enzymatic assays", vec![]);
        let issues = evidence.validate(&ctx);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "SubstrateEvidence.method");
        assert!(LocusEvidence::new("Enzymatic assays", vec![]).validate(&ctx).is_empty());
    }

    #[rstest]
    fn test_method_and_citation_issues_are_both_reported() {
        let ctx = ValidationContext::new(QualityLevel::High);
        let evidence = LocusEvidence::new("Guesswork", vec!["pubmed:abc".parse().unwrap()]);
        let fields: Vec<String> = evidence.validate(&ctx).into_iter().map(|i| i.field).collect();
        assert_eq!(fields, vec!["LocusEvidence.method", "LocusEvidence.references"]);
    }

    #[rstest]
    fn test_raw_shape() {
        let raw = json!({"method": "HPLC", "references": ["doi:10.1000/abc"]});
        let evidence: SubstrateEvidence = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(evidence.method, "HPLC");
        assert_eq!(serde_json::to_value(&evidence).unwrap(), raw);
    }

    #[rstest]
    fn test_unknown_keys_are_rejected() {
        let raw = json!({"method": "HPLC", "references": [], "confidence": "high"});
        assert!(serde_json::from_value::<SubstrateEvidence>(raw).is_err());
    }
}
