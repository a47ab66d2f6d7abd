//!
//! Enzymatic domains as carried by module payloads.
//!
//! Domain vocabularies are not modelled here. A domain is located on a gene and may
//! carry substrate claims, the evidence for them and plain references; those
//! citations are what a module's citation index is built from.
//!
//! Keys a domain or substrate does not model (`active`, `precursor_biosynthesis`,
//! `proteinogenic` and the like) are kept in `extra` and written back unchanged.
//!
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use mibig_core::{
    Citation, GeneId, Location, SubstrateEvidence, Validate, ValidationContext, ValidationIssue,
    validate_all, validate_citation_list,
};

/// A substrate a domain is claimed to accept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Substrate {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub structure: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Validate for Substrate {
    fn validate(&self, _ctx: &ValidationContext<'_>) -> Vec<ValidationIssue> {
        if self.name.is_empty() {
            return vec![ValidationIssue::new("Substrate.name", "Missing name")];
        }
        vec![]
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Domain {
    pub gene: GeneId,
    pub location: Location,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtype: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub inactive: Option<bool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub substrates: Vec<Substrate>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub evidence: Vec<SubstrateEvidence>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub references: Vec<Citation>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Domain {
    pub fn new(gene: impl Into<GeneId>, location: Location) -> Self {
        Domain {
            gene: gene.into(),
            location,
            subtype: None,
            inactive: None,
            substrates: vec![],
            evidence: vec![],
            references: vec![],
            extra: Map::new(),
        }
    }

    ///
    /// Every citation this domain carries: its own references followed by the
    /// references of each piece of evidence.
    ///
    pub fn citations(&self) -> impl Iterator<Item = &Citation> {
        self.references
            .iter()
            .chain(self.evidence.iter().flat_map(|e| e.citations()))
    }
}

impl Validate for Domain {
    fn validate(&self, ctx: &ValidationContext<'_>) -> Vec<ValidationIssue> {
        let mut issues = vec![];

        if let Some(subtype) = &self.subtype {
            if subtype.is_empty() {
                issues.push(ValidationIssue::new("Domain.subtype", "Subtype must not be empty"));
            }
        }
        if self.inactive == Some(true) {
            if !self.substrates.is_empty() {
                issues.push(ValidationIssue::new(
                    "Domain.inactive",
                    "Inactive domains cannot have a substrate",
                ));
            }
            if self.evidence.is_empty() {
                issues.push(ValidationIssue::new(
                    "Domain.evidence",
                    "Evidence is required for inactive domains",
                ));
            }
        }
        if !ctx.is_questionable() && !self.substrates.is_empty() && self.evidence.is_empty() {
            issues.push(ValidationIssue::new(
                "Domain.evidence",
                "Substrates without evidence",
            ));
        }

        issues.extend(self.gene.validate(ctx));
        issues.extend(self.location.validate(ctx));
        issues.extend(validate_all(&self.substrates, ctx));
        issues.extend(validate_all(&self.evidence, ctx));
        issues.extend(validate_citation_list(&self.references, "Domain.references"));
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;
    use serde_json::json;

    use mibig_core::QualityLevel;

    #[fixture]
    fn adenylation() -> Domain {
        serde_json::from_value(json!({
            "gene": "nrpA",
            "location": {"from": 100, "to": 520},
            "substrates": [{"name": "L-serine"}],
            "evidence": [{"method": "ATP-PPi exchange assay", "references": ["pubmed:2"]}],
            "references": ["pubmed:1", "pubmed:2"]
        }))
        .unwrap()
    }

    #[rstest]
    fn test_citations_include_evidence(adenylation: Domain) {
        let citations: Vec<String> = adenylation.citations().map(Citation::to_string).collect();
        assert_eq!(citations, vec!["pubmed:1", "pubmed:2", "pubmed:2"]);
    }

    #[rstest]
    fn test_valid_domain(adenylation: Domain) {
        let ctx = ValidationContext::new(QualityLevel::High);
        assert_eq!(adenylation.validate(&ctx), vec![]);
    }

    #[rstest]
    fn test_substrates_without_evidence(mut adenylation: Domain) {
        adenylation.evidence.clear();

        let strict = ValidationContext::new(QualityLevel::Medium);
        let issues = adenylation.validate(&strict);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].message, "Substrates without evidence");

        let relaxed = ValidationContext::new(QualityLevel::Questionable);
        assert!(adenylation.validate(&relaxed).is_empty());
    }

    #[rstest]
    fn test_inactive_with_substrate(mut adenylation: Domain) {
        let ctx = ValidationContext::new(QualityLevel::High);
        adenylation.inactive = Some(true);
        let issues = adenylation.validate(&ctx);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "Domain.inactive");
    }

    #[rstest]
    fn test_nested_issues_are_collected() {
        let ctx = ValidationContext::new(QualityLevel::High);
        let mut domain = Domain::new("bad gene", Location::new(50, 10));
        domain.substrates.push(Substrate {
            name: String::new(),
            structure: None,
            extra: Map::new(),
        });
        domain.references.push("pubmed:abc".parse().unwrap());

        let fields: Vec<String> = domain.validate(&ctx).into_iter().map(|i| i.field).collect();
        assert_eq!(
            fields,
            vec![
                "Domain.evidence",
                "GeneId",
                "Location.to",
                "Substrate.name",
                "Domain.references",
            ]
        );
    }

    #[rstest]
    fn test_minimal_domain_omits_empty_fields() {
        let domain = Domain::new("nrpA", Location::new(1, 300));
        assert_eq!(
            serde_json::to_value(&domain).unwrap(),
            json!({"gene": "nrpA", "location": {"from": 1, "to": 300}})
        );
    }

    #[rstest]
    fn test_unmodelled_keys_round_trip() {
        let raw = json!({
            "gene": "nrpB",
            "location": {"from": 10, "to": 450},
            "active": false,
            "precursor_biosynthesis": ["nrpB"],
            "substrates": [{"name": "L-leucine", "proteinogenic": true}],
            "evidence": [{"method": "Homology", "references": ["pubmed:4"]}]
        });
        let domain: Domain = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(domain.extra.get("active"), Some(&json!(false)));
        assert_eq!(domain.extra.get("precursor_biosynthesis"), Some(&json!(["nrpB"])));
        assert_eq!(domain.inactive, None);
        assert_eq!(domain.substrates[0].extra.get("proteinogenic"), Some(&json!(true)));
        assert_eq!(serde_json::to_value(&domain).unwrap(), raw);
    }

    #[rstest]
    fn test_nested_evidence_stays_closed() {
        let raw = json!({
            "gene": "nrpB",
            "location": {"from": 10, "to": 450},
            "evidence": [{"method": "Homology", "references": [], "score": 3}]
        });
        assert!(serde_json::from_value::<Domain>(raw).is_err());
    }
}
