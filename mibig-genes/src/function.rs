//!
//! Functional annotation of a single gene.
//!
//! The function name and its free-text details are nested under `function`,
//! while evidence and the mutation phenotype sit next to it:
//!
//! ```json
//! {
//!   "function": {"name": "Other", "details": "..."},
//!   "evidence": [{"method": "Knock-out", "references": ["pubmed:1"]}],
//!   "mutation_phenotype": {"phenotype": "...", "references": []}
//! }
//! ```
//!
use std::path::Path;

use anyhow::Result as AnyResult;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use mibig_core::{
    Citation, Evidence, EvidenceKind, JsonEntity, RecordLookup, Result, Validate,
    ValidationContext, ValidationError, ValidationIssue, ValidationSettings, collect_citations,
    decode, encode, load_json_entity, validate_all, validate_citation_list,
};

pub const VALID_FUNCTIONS: &[&str] = &[
    "Activation / processing",
    "Maturation",
    "Precursor",
    "Precursor biosynthesis",
    "Regulation",
    "Resistance/immunity",
    "Scaffold biosynthesis",
    "Tailoring",
    "Transport",
    "Other",
];

/// Methods supporting a gene function claim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionMethods {}

impl EvidenceKind for FunctionMethods {
    const NAME: &'static str = "FunctionEvidence";
    const VALID_METHODS: &'static [&'static str] = &[
        "Other in vivo study",
        "Heterologous expression",
        "Knock-out",
        "Activity assay",
    ];
}

pub type FunctionEvidence = Evidence<FunctionMethods>;

/// What happens when the gene is mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MutationPhenotype {
    pub phenotype: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    pub references: Vec<Citation>,
}

impl Validate for MutationPhenotype {
    fn validate(&self, _ctx: &ValidationContext<'_>) -> Vec<ValidationIssue> {
        let mut issues = vec![];
        if self.phenotype.is_empty() {
            issues.push(ValidationIssue::new(
                "MutationPhenotype.phenotype",
                "Phenotype must be provided",
            ));
        }
        issues.extend(validate_citation_list(
            &self.references,
            "MutationPhenotype.references",
        ));
        issues
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Function {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

///
/// A gene's role in the cluster, the evidence for it and, optionally, the
/// phenotype of a mutant.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneFunction {
    function: Function,
    evidence: Vec<FunctionEvidence>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    mutation_phenotype: Option<MutationPhenotype>,
}

impl GeneFunction {
    pub fn new(
        name: impl Into<String>,
        details: Option<String>,
        evidence: Vec<FunctionEvidence>,
    ) -> Self {
        GeneFunction {
            function: Function {
                name: name.into(),
                details,
            },
            evidence,
            mutation_phenotype: None,
        }
    }

    pub fn with_mutation_phenotype(mut self, phenotype: MutationPhenotype) -> Self {
        self.mutation_phenotype = Some(phenotype);
        self
    }

    pub fn function(&self) -> &str {
        &self.function.name
    }

    pub fn details(&self) -> Option<&str> {
        self.function.details.as_deref()
    }

    pub fn evidence(&self) -> &[FunctionEvidence] {
        &self.evidence
    }

    pub fn mutation_phenotype(&self) -> Option<&MutationPhenotype> {
        self.mutation_phenotype.as_ref()
    }

    /// Sorted, deduplicated citations of the evidence and the mutation phenotype.
    pub fn citations(&self) -> Vec<Citation> {
        collect_citations(
            self.evidence
                .iter()
                .flat_map(|e| e.citations())
                .chain(self.mutation_phenotype.iter().flat_map(|p| &p.references)),
        )
    }

    ///
    /// Construct a gene function the way `settings` asks for.
    ///
    /// Gene functions never consult the genome record; `record` is only passed
    /// on to the validation context.
    ///
    pub fn from_json_with_settings(
        raw: &Value,
        settings: &ValidationSettings,
        record: Option<&dyn RecordLookup>,
    ) -> Result<Self> {
        if !settings.validate {
            warn!("Loading gene function without validation");
            return Self::from_json_unchecked(raw);
        }
        Self::from_json(raw, &settings.context(record))
    }
}

impl Validate for GeneFunction {
    fn validate(&self, ctx: &ValidationContext<'_>) -> Vec<ValidationIssue> {
        let mut issues = vec![];
        let name = self.function.name.as_str();
        if !VALID_FUNCTIONS.contains(&name) {
            issues.push(ValidationIssue::new(
                "GeneFunction.function",
                format!("Invalid function: {name}"),
            ));
        }
        // only "Other" needs explaining; details on other functions are allowed
        if name == "Other" && self.details().is_none_or(str::is_empty) {
            issues.push(ValidationIssue::new(
                "GeneFunction.details",
                "Details must be provided for 'Other' function",
            ));
        }
        issues.extend(validate_all(&self.evidence, ctx));
        if let Some(phenotype) = &self.mutation_phenotype {
            issues.extend(phenotype.validate(ctx));
        }
        issues
    }
}

impl JsonEntity for GeneFunction {
    fn from_json_unchecked(raw: &Value) -> Result<Self> {
        let function: GeneFunction = decode(raw, "GeneFunction")?;
        debug!("Constructed gene function {:?}", function.function.name);
        Ok(function)
    }

    fn to_json(&self) -> Result<Value> {
        encode(self)
    }

    fn from_json(raw: &Value, ctx: &ValidationContext<'_>) -> Result<Self> {
        let function = Self::from_json_unchecked(raw)?;
        let issues = function.validate(ctx);
        if !issues.is_empty() {
            debug!(
                "Gene function {:?} failed validation with {} issue(s)",
                function.function.name,
                issues.len()
            );
            return Err(ValidationError::new(issues).into());
        }
        Ok(function)
    }
}

///
/// Read a gene function from a JSON file and validate it.
///
pub fn load_gene_function_file(path: &Path, ctx: &ValidationContext<'_>) -> AnyResult<GeneFunction> {
    load_json_entity(path, ctx)
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;
    use serde_json::json;

    use mibig_core::{MibigError, QualityLevel};

    #[fixture]
    fn ctx() -> ValidationContext<'static> {
        ValidationContext::new(QualityLevel::High)
    }

    #[fixture]
    fn raw_function() -> Value {
        json!({
            "function": {"name": "Transport"},
            "evidence": [{"method": "Knock-out", "references": ["pubmed:5", "pubmed:4"]}],
            "mutation_phenotype": {"phenotype": "accumulates product", "references": ["pubmed:4"]}
        })
    }

    #[rstest]
    fn test_nested_function_shape(raw_function: Value, ctx: ValidationContext<'static>) {
        let function = GeneFunction::from_json(&raw_function, &ctx).unwrap();
        assert_eq!(function.function(), "Transport");
        assert_eq!(function.details(), None);
        assert_eq!(function.evidence().len(), 1);
        assert_eq!(
            function.mutation_phenotype().map(|p| p.phenotype.as_str()),
            Some("accumulates product")
        );
        assert_eq!(function.to_json().unwrap(), raw_function);
    }

    #[rstest]
    fn test_citations(raw_function: Value) {
        let function = GeneFunction::from_json_unchecked(&raw_function).unwrap();
        let citations: Vec<String> = function.citations().iter().map(Citation::to_string).collect();
        assert_eq!(citations, vec!["pubmed:4", "pubmed:5"]);
    }

    #[rstest]
    #[case("Other", None, 1)]
    #[case("Other", Some(""), 1)]
    #[case("Other", Some("chaperone"), 0)]
    #[case("Tailoring", None, 0)]
    #[case("Tailoring", Some("methylation"), 0)]
    fn test_details_required_for_other(
        ctx: ValidationContext<'static>,
        #[case] name: &str,
        #[case] details: Option<&str>,
        #[case] expected: usize,
    ) {
        let evidence = vec![FunctionEvidence::new("Activity assay", vec![])];
        let function = GeneFunction::new(name, details.map(String::from), evidence);
        let issues = function.validate(&ctx);
        assert_eq!(issues.len(), expected);
        if expected > 0 {
            assert_eq!(issues[0].field, "GeneFunction.details");
        }
    }

    #[rstest]
    fn test_issue_order(ctx: ValidationContext<'static>) {
        let function = GeneFunction::new(
            "Cooking",
            None,
            vec![FunctionEvidence::new("NMR", vec![])],
        )
        .with_mutation_phenotype(MutationPhenotype {
            phenotype: String::new(),
            details: None,
            references: vec!["pubmed:x".parse().unwrap()],
        });

        let fields: Vec<String> = function.validate(&ctx).into_iter().map(|i| i.field).collect();
        assert_eq!(
            fields,
            vec![
                "GeneFunction.function",
                "FunctionEvidence.method",
                "MutationPhenotype.phenotype",
                "MutationPhenotype.references",
            ]
        );
    }

    #[rstest]
    fn test_evidence_is_required(ctx: ValidationContext<'static>) {
        let raw = json!({"function": {"name": "Maturation"}});
        let err = GeneFunction::from_json(&raw, &ctx).unwrap_err();
        assert!(matches!(err, MibigError::Schema { ref field, .. } if field == "GeneFunction"));
    }

    #[rstest]
    #[case::top_level("/evidence_count", json!(1))]
    #[case::function("/function/category", json!("transport"))]
    #[case::evidence("/evidence/0/score", json!(0.9))]
    #[case::phenotype("/mutation_phenotype/severity", json!("mild"))]
    fn test_unknown_keys_are_rejected(
        mut raw_function: Value,
        #[case] pointer: &str,
        #[case] value: Value,
    ) {
        let (parent, key) = pointer.rsplit_once('/').unwrap();
        raw_function
            .pointer_mut(parent)
            .unwrap()
            .as_object_mut()
            .unwrap()
            .insert(key.to_string(), value);
        let err = GeneFunction::from_json_unchecked(&raw_function).unwrap_err();
        assert!(matches!(err, MibigError::Schema { ref field, .. } if field == "GeneFunction"));
    }

    #[rstest]
    fn test_skip_validation(ctx: ValidationContext<'static>) {
        let raw = json!({"function": {"name": "Other"}, "evidence": []});
        let settings = ValidationSettings {
            quality: ctx.quality,
            validate: false,
        };
        assert!(GeneFunction::from_json_with_settings(&raw, &settings, None).is_ok());
        assert!(GeneFunction::from_json(&raw, &ctx).is_err());
    }
}
