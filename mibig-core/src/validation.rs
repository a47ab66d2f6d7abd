//!
//! Validation plumbing shared by every record type.
//!
//! Validation never stops at the first problem. Each `validate` call returns the
//! complete list of [`ValidationIssue`]s for the object and everything it owns, and
//! parents concatenate the lists of their children. The [`ValidationContext`] is
//! passed explicitly down every call so quality-dependent rules and gene lookups
//! are visible at the call site.
//!
use std::fmt::{self, Debug, Display};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::errors::MibigError;
use crate::record::RecordLookup;

///
/// Coarse confidence level of an annotation entry. Entries flagged as
/// `Questionable` are exempt from some evidence-completeness rules.
///
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum QualityLevel {
    Questionable,
    Medium,
    #[default]
    High,
}

impl QualityLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityLevel::Questionable => "questionable",
            QualityLevel::Medium => "medium",
            QualityLevel::High => "high",
        }
    }

    pub fn is_questionable(&self) -> bool {
        matches!(self, QualityLevel::Questionable)
    }
}

impl FromStr for QualityLevel {
    type Err = MibigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "questionable" => Ok(QualityLevel::Questionable),
            "medium" => Ok(QualityLevel::Medium),
            "high" => Ok(QualityLevel::High),
            other => Err(MibigError::schema(
                "quality",
                format!("invalid quality level {other:?}"),
            )),
        }
    }
}

impl Display for QualityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single business-rule failure: the offending field and a readable message.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationIssue {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// The aggregate of every issue found by a construct-and-validate call.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{} validation issue(s): {}", .issues.len(), join_issues(.issues))]
pub struct ValidationError {
    issues: Vec<ValidationIssue>,
}

fn join_issues(issues: &[ValidationIssue]) -> String {
    issues
        .iter()
        .map(ValidationIssue::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationError {
    pub fn new(issues: Vec<ValidationIssue>) -> Self {
        ValidationError { issues }
    }

    pub fn issues(&self) -> &[ValidationIssue] {
        &self.issues
    }

    pub fn into_issues(self) -> Vec<ValidationIssue> {
        self.issues
    }
}

///
/// Everything a `validate` call may consult besides the object itself.
///
/// The record lookup is optional: without one, gene identifiers are only checked
/// for well-formed syntax, never rejected as unknown.
///
#[derive(Clone, Copy)]
pub struct ValidationContext<'a> {
    pub quality: QualityLevel,
    pub record: Option<&'a dyn RecordLookup>,
}

impl<'a> ValidationContext<'a> {
    pub fn new(quality: QualityLevel) -> Self {
        ValidationContext {
            quality,
            record: None,
        }
    }

    pub fn with_record(self, record: &'a dyn RecordLookup) -> Self {
        ValidationContext {
            record: Some(record),
            ..self
        }
    }

    pub fn is_questionable(&self) -> bool {
        self.quality.is_questionable()
    }
}

impl Debug for ValidationContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidationContext")
            .field("quality", &self.quality)
            .field("record", &self.record.and_then(|r| r.accession()))
            .finish()
    }
}

///
/// Implemented by every record and value object.
///
pub trait Validate {
    /// Collect every issue of this object and its children, in declaration order.
    fn validate(&self, ctx: &ValidationContext<'_>) -> Vec<ValidationIssue>;

    /// Consume the object, returning it only if validation finds nothing.
    fn validated(self, ctx: &ValidationContext<'_>) -> Result<Self, ValidationError>
    where
        Self: Sized,
    {
        let issues = self.validate(ctx);
        if issues.is_empty() {
            Ok(self)
        } else {
            Err(ValidationError::new(issues))
        }
    }
}

/// Concatenate the issues of every item, in order.
pub fn validate_all<'a, T>(
    items: impl IntoIterator<Item = &'a T>,
    ctx: &ValidationContext<'_>,
) -> Vec<ValidationIssue>
where
    T: Validate + 'a,
{
    items
        .into_iter()
        .flat_map(|item| item.validate(ctx))
        .collect()
}
