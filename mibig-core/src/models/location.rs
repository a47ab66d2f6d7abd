use serde::{Deserialize, Serialize};

use crate::validation::{Validate, ValidationContext, ValidationIssue};

///
/// A span on a sequence, written `{"from": .., "to": ..}`.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub from: u64,
    pub to: u64,
}

impl Location {
    pub fn new(from: u64, to: u64) -> Self {
        Location { from, to }
    }
}

impl Validate for Location {
    fn validate(&self, _ctx: &ValidationContext<'_>) -> Vec<ValidationIssue> {
        if self.to < self.from {
            return vec![ValidationIssue::new(
                "Location.to",
                format!(
                    "Location.to ({}) cannot be smaller than Location.from ({})",
                    self.to, self.from
                ),
            )];
        }
        vec![]
    }
}
