use serde::{Deserialize, Serialize};

use mibig_core::{ValidationContext, ValidationIssue};

use super::ModulePayload;
use crate::domain::Domain;

/// A module that fits none of the other layouts; only its subtype is recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OtherModule {
    pub subtype: String,
}

impl ModulePayload for OtherModule {
    fn domains(&self) -> Vec<&Domain> {
        vec![]
    }

    fn validate(&self, _ctx: &ValidationContext<'_>) -> Vec<ValidationIssue> {
        if self.subtype.is_empty() {
            return vec![ValidationIssue::new("Other.subtype", "Missing subtype")];
        }
        vec![]
    }
}
