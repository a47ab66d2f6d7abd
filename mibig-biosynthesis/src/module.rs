//!
//! The module envelope.
//!
//! A [`Module`] carries the fields every module kind shares plus exactly one
//! payload, selected by the `type` tag. On the wire the payload keys sit at the
//! same level as the envelope keys:
//!
//! ```json
//! {
//!   "type": "pks-trans-at-starter",
//!   "name": "loading",
//!   "genes": ["pksA"],
//!   "active": true,
//!   "carriers": [{"gene": "pksA", "location": {"from": 10, "to": 80}}]
//! }
//! ```
//!
use std::path::Path;

use anyhow::Result as AnyResult;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use mibig_core::{
    Citation, Evidence, EvidenceKind, GeneId, JsonEntity, MibigError, RecordLookup, Result,
    Validate, ValidationContext, ValidationError, ValidationIssue, ValidationSettings,
    collect_citations, decode, encode, load_json_entity, validate_all,
};

use crate::domain::Domain;
use crate::modules::{ModuleInfo, ModuleType};
use crate::monomer::Monomer;

/// Methods supporting a claim of non-canonical module behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NcaMethods {}

impl EvidenceKind for NcaMethods {
    const NAME: &'static str = "NcaEvidence";
    const VALID_METHODS: &'static [&'static str] = &[
        "Sequence-based prediction",
        "Structure-based inference",
        "Activity assay",
    ];
}

pub type NcaEvidence = Evidence<NcaMethods>;

///
/// Deviations from the canonical assembly-line behaviour of a module: it may be
/// used several times, skip elongation, or be skipped altogether.
///
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct NonCanonicalActivity {
    pub evidence: Vec<NcaEvidence>,
    /// How often the module is used; at least one when given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iterations: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub non_elongating: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skipped: Option<bool>,
}

impl Validate for NonCanonicalActivity {
    fn validate(&self, ctx: &ValidationContext<'_>) -> Vec<ValidationIssue> {
        let mut issues = vec![];
        // questionable entries may describe the activity without evidence
        if !ctx.is_questionable() && self.evidence.is_empty() {
            issues.push(ValidationIssue::new(
                "NonCanonicalActivity.evidence",
                "At least one evidence must be provided",
            ));
        }
        if self.iterations.is_some_and(|iterations| iterations < 1) {
            issues.push(ValidationIssue::new(
                "NonCanonicalActivity.iterations",
                "Must be greater than 0",
            ));
        }
        issues.extend(validate_all(&self.evidence, ctx));
        issues
    }
}

/// Envelope keys as they arrive; everything else belongs to the payload.
#[derive(Deserialize)]
struct RawModule {
    name: String,
    genes: Vec<GeneId>,
    active: bool,
    #[serde(default)]
    integrated_monomers: Vec<Monomer>,
    #[serde(default)]
    non_canonical_activity: Option<NonCanonicalActivity>,
    #[serde(default)]
    comment: Option<String>,
    #[serde(flatten)]
    payload: Map<String, Value>,
}

///
/// One biosynthetic module. Built once, either from JSON or from parts, and
/// not changed afterwards.
///
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Module {
    name: String,
    genes: Vec<GeneId>,
    active: bool,
    #[serde(flatten)]
    info: ModuleInfo,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    integrated_monomers: Vec<Monomer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    non_canonical_activity: Option<NonCanonicalActivity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    comment: Option<String>,
}

impl Module {
    ///
    /// Assemble a module from parts. Nothing is checked; call
    /// [`Validate::validated`] before trusting the result.
    ///
    pub fn new(name: impl Into<String>, genes: Vec<GeneId>, active: bool, info: ModuleInfo) -> Self {
        Module {
            name: name.into(),
            genes,
            active,
            info,
            integrated_monomers: vec![],
            non_canonical_activity: None,
            comment: None,
        }
    }

    pub fn with_integrated_monomers(mut self, monomers: Vec<Monomer>) -> Self {
        self.integrated_monomers = monomers;
        self
    }

    pub fn with_non_canonical_activity(mut self, activity: NonCanonicalActivity) -> Self {
        self.non_canonical_activity = Some(activity);
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    pub fn module_type(&self) -> ModuleType {
        self.info.module_type()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn genes(&self) -> &[GeneId] {
        &self.genes
    }

    pub fn active(&self) -> bool {
        self.active
    }

    pub fn info(&self) -> &ModuleInfo {
        &self.info
    }

    pub fn integrated_monomers(&self) -> &[Monomer] {
        &self.integrated_monomers
    }

    pub fn non_canonical_activity(&self) -> Option<&NonCanonicalActivity> {
        self.non_canonical_activity.as_ref()
    }

    pub fn comment(&self) -> Option<&str> {
        self.comment.as_deref()
    }

    ///
    /// Every citation reachable from the integrated monomers and the payload's
    /// domains, deduplicated and sorted.
    ///
    pub fn citations(&self) -> Vec<Citation> {
        let domains = self.info.domains();
        collect_citations(
            self.integrated_monomers
                .iter()
                .flat_map(Monomer::citations)
                .chain(domains.into_iter().flat_map(Domain::citations)),
        )
    }

    ///
    /// Construct a module the way `settings` asks for: validated at the
    /// configured quality level, or taken as-is for trusted reloads.
    ///
    /// # Arguments
    /// - `raw`: the module's JSON tree
    /// - `settings`: quality level and whether to validate at all
    /// - `record`: genome record the module's genes must resolve against, if any
    ///
    pub fn from_json_with_settings(
        raw: &Value,
        settings: &ValidationSettings,
        record: Option<&dyn RecordLookup>,
    ) -> Result<Self> {
        if !settings.validate {
            warn!("Loading module without validation");
            return Self::from_json_unchecked(raw);
        }
        Self::from_json(raw, &settings.context(record))
    }
}

impl Validate for Module {
    /// Own fields first, then the payload, monomers, genes and the
    /// non-canonical activity.
    fn validate(&self, ctx: &ValidationContext<'_>) -> Vec<ValidationIssue> {
        let mut issues = vec![];
        if self.name.is_empty() {
            issues.push(ValidationIssue::new("Module.name", "Missing name"));
        }
        issues.extend(self.info.validate(ctx));
        issues.extend(validate_all(&self.integrated_monomers, ctx));
        issues.extend(validate_all(&self.genes, ctx));
        if let Some(activity) = &self.non_canonical_activity {
            issues.extend(activity.validate(ctx));
        }
        issues
    }
}

impl JsonEntity for Module {
    fn from_json_unchecked(raw: &Value) -> Result<Self> {
        let object = raw
            .as_object()
            .ok_or_else(|| MibigError::schema("Module", "expected an object"))?;
        let tag = object
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| MibigError::schema("Module.type", "missing type tag"))?;
        // an unknown tag fails before any other key is looked at
        let module_type: ModuleType = tag.parse()?;

        let RawModule {
            name,
            genes,
            active,
            integrated_monomers,
            non_canonical_activity,
            comment,
            mut payload,
        } = decode(raw, "Module")?;
        payload.remove("type");
        let info = module_type.parse_payload(&Value::Object(payload))?;

        debug!("Constructed {module_type} module {name:?}");
        Ok(Module {
            name,
            genes,
            active,
            info,
            integrated_monomers,
            non_canonical_activity,
            comment,
        })
    }

    fn to_json(&self) -> Result<Value> {
        encode(self)
    }

    fn from_json(raw: &Value, ctx: &ValidationContext<'_>) -> Result<Self> {
        let module = Self::from_json_unchecked(raw)?;
        let issues = module.validate(ctx);
        if !issues.is_empty() {
            debug!(
                "Module {:?} failed validation with {} issue(s)",
                module.name,
                issues.len()
            );
            return Err(ValidationError::new(issues).into());
        }
        Ok(module)
    }
}

///
/// Read a module from a JSON file and validate it.
///
pub fn load_module_file(path: &Path, ctx: &ValidationContext<'_>) -> AnyResult<Module> {
    load_json_entity(path, ctx)
}
