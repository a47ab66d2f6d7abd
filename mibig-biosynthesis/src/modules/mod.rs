//!
//! Module payloads and the type-tag dispatch table.
//!
//! A module's `type` tag selects exactly one payload shape. [`ModuleType`] is the
//! closed set of tags and [`ModuleType::parse_payload`] is the only place a tag is
//! mapped to a shape; `nrps-type1` and `nrps-type6` share the [`NrpsTypeI`] shape.
//! [`ModuleInfo`] holds the constructed payload, so a payload can never disagree
//! with its tag.
//!
pub mod cal;
pub mod nrps;
pub mod other;
pub mod pks;

use std::fmt::{self, Display};
use std::str::FromStr;

use log::trace;
use serde::Serialize;
use serde_json::Value;

use mibig_core::{MibigError, Result, Validate, ValidationContext, ValidationIssue, decode};

use crate::domain::Domain;

pub use self::cal::Cal;
pub use self::nrps::NrpsTypeI;
pub use self::other::OtherModule;
pub use self::pks::{PksIterative, PksModular, PksModularStarter, PksTransAt, PksTransAtStarter};

///
/// Behaviour every payload shape provides.
///
pub trait ModulePayload {
    /// The domains that carry citations, core domains first, then modification
    /// domains, then carriers.
    fn domains(&self) -> Vec<&Domain>;

    fn validate(&self, ctx: &ValidationContext<'_>) -> Vec<ValidationIssue>;
}

///
/// Rules shared by every domain-carrying payload: there must be at least one
/// domain, and every domain is validated.
///
pub fn validate_domains(
    payload: &str,
    domains: &[&Domain],
    ctx: &ValidationContext<'_>,
) -> Vec<ValidationIssue> {
    let mut issues = vec![];
    if domains.is_empty() {
        issues.push(ValidationIssue::new(
            format!("{payload}.domains"),
            "Modules require at least one domain",
        ));
    }
    for domain in domains {
        issues.extend(domain.validate(ctx));
    }
    issues
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModuleType {
    Cal,
    NrpsType1,
    NrpsType6,
    Other,
    PksIterative,
    PksModular,
    PksTransAt,
    PksModularStarter,
    PksTransAtStarter,
}

impl ModuleType {
    pub const ALL: [ModuleType; 9] = [
        ModuleType::Cal,
        ModuleType::NrpsType1,
        ModuleType::NrpsType6,
        ModuleType::Other,
        ModuleType::PksIterative,
        ModuleType::PksModular,
        ModuleType::PksTransAt,
        ModuleType::PksModularStarter,
        ModuleType::PksTransAtStarter,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModuleType::Cal => "cal",
            ModuleType::NrpsType1 => "nrps-type1",
            ModuleType::NrpsType6 => "nrps-type6",
            ModuleType::Other => "other",
            ModuleType::PksIterative => "pks-iterative",
            ModuleType::PksModular => "pks-modular",
            ModuleType::PksTransAt => "pks-trans-at",
            ModuleType::PksModularStarter => "pks-modular-starter",
            ModuleType::PksTransAtStarter => "pks-trans-at-starter",
        }
    }

    ///
    /// Build the payload for this tag from the payload's own keys.
    ///
    /// # Arguments
    /// - `raw`: a JSON object holding only the payload fields (no envelope keys)
    ///
    pub fn parse_payload(&self, raw: &Value) -> Result<ModuleInfo> {
        trace!("dispatching {} payload", self);
        let field = self.as_str();
        let info = match self {
            ModuleType::Cal => ModuleInfo::Cal(decode(raw, field)?),
            // both NRPS tags describe the same module layout
            ModuleType::NrpsType1 => ModuleInfo::NrpsType1(decode(raw, field)?),
            ModuleType::NrpsType6 => ModuleInfo::NrpsType6(decode(raw, field)?),
            ModuleType::Other => ModuleInfo::Other(decode(raw, field)?),
            ModuleType::PksIterative => ModuleInfo::PksIterative(decode(raw, field)?),
            ModuleType::PksModular => ModuleInfo::PksModular(decode(raw, field)?),
            ModuleType::PksTransAt => ModuleInfo::PksTransAt(decode(raw, field)?),
            ModuleType::PksModularStarter => ModuleInfo::PksModularStarter(decode(raw, field)?),
            ModuleType::PksTransAtStarter => ModuleInfo::PksTransAtStarter(decode(raw, field)?),
        };
        Ok(info)
    }
}

impl FromStr for ModuleType {
    type Err = MibigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        ModuleType::ALL
            .into_iter()
            .find(|module_type| module_type.as_str() == s)
            .ok_or_else(|| MibigError::UnknownVariant(s.to_string()))
    }
}

impl Display for ModuleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

///
/// A constructed payload, one case per module type. Serializes as the payload
/// fields plus the `type` tag.
///
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum ModuleInfo {
    #[serde(rename = "cal")]
    Cal(Cal),
    #[serde(rename = "nrps-type1")]
    NrpsType1(NrpsTypeI),
    #[serde(rename = "nrps-type6")]
    NrpsType6(NrpsTypeI),
    #[serde(rename = "other")]
    Other(OtherModule),
    #[serde(rename = "pks-iterative")]
    PksIterative(PksIterative),
    #[serde(rename = "pks-modular")]
    PksModular(PksModular),
    #[serde(rename = "pks-trans-at")]
    PksTransAt(PksTransAt),
    #[serde(rename = "pks-modular-starter")]
    PksModularStarter(PksModularStarter),
    #[serde(rename = "pks-trans-at-starter")]
    PksTransAtStarter(PksTransAtStarter),
}

impl ModuleInfo {
    pub fn module_type(&self) -> ModuleType {
        match self {
            ModuleInfo::Cal(_) => ModuleType::Cal,
            ModuleInfo::NrpsType1(_) => ModuleType::NrpsType1,
            ModuleInfo::NrpsType6(_) => ModuleType::NrpsType6,
            ModuleInfo::Other(_) => ModuleType::Other,
            ModuleInfo::PksIterative(_) => ModuleType::PksIterative,
            ModuleInfo::PksModular(_) => ModuleType::PksModular,
            ModuleInfo::PksTransAt(_) => ModuleType::PksTransAt,
            ModuleInfo::PksModularStarter(_) => ModuleType::PksModularStarter,
            ModuleInfo::PksTransAtStarter(_) => ModuleType::PksTransAtStarter,
        }
    }

    pub fn payload(&self) -> &dyn ModulePayload {
        match self {
            ModuleInfo::Cal(p) => p,
            ModuleInfo::NrpsType1(p) | ModuleInfo::NrpsType6(p) => p,
            ModuleInfo::Other(p) => p,
            ModuleInfo::PksIterative(p) => p,
            ModuleInfo::PksModular(p) => p,
            ModuleInfo::PksTransAt(p) => p,
            ModuleInfo::PksModularStarter(p) => p,
            ModuleInfo::PksTransAtStarter(p) => p,
        }
    }

    pub fn domains(&self) -> Vec<&Domain> {
        self.payload().domains()
    }

    pub fn validate(&self, ctx: &ValidationContext<'_>) -> Vec<ValidationIssue> {
        self.payload().validate(ctx)
    }
}
