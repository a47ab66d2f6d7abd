use std::collections::BTreeSet;
use std::fmt::{self, Display};
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::MibigError;
use crate::validation::{Validate, ValidationContext, ValidationIssue};

static VALID_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    [
        ("pubmed", r"^(\d+)$"),
        ("doi", r"^10\.\d{4,9}/[-._;()/:a-zA-Z0-9]+$"),
        ("patent", r"^(.+)$"),
        (
            "url",
            r"^https?://(www\.)?[-a-zA-Z0-9@:%._+~#=]{2,256}\.[a-z]{2,6}\b([-a-zA-Z0-9@:%_+.~#?&/=]*)$",
        ),
    ]
    .into_iter()
    .map(|(database, pattern)| {
        (
            database,
            Regex::new(pattern).expect("citation patterns are valid regular expressions"),
        )
    })
    .collect()
});

///
/// A reference to a literature or database record, written `database:value`
/// in raw input (e.g. `pubmed:12345`, `doi:10.1021/np0000000`).
///
/// Citations order by database first and value second, which is the order used
/// by every citation index.
///
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Citation {
    database: String,
    value: String,
}

impl Citation {
    ///
    /// Build a citation and reject it if the value does not match the database's syntax.
    ///
    pub fn new(database: &str, value: &str) -> Result<Self, MibigError> {
        let citation = Citation {
            database: database.to_string(),
            value: value.to_string(),
        };
        let ctx = ValidationContext::new(Default::default());
        Ok(citation.validated(&ctx)?)
    }

    pub fn database(&self) -> &str {
        &self.database
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn as_string(&self) -> String {
        format!("{}:{}", self.database, self.value)
    }

    fn issues(&self) -> Vec<ValidationIssue> {
        let Some((_, pattern)) = VALID_PATTERNS
            .iter()
            .find(|(database, _)| *database == self.database)
        else {
            return vec![ValidationIssue::new(
                "citation",
                format!("Invalid database type {:?}", self.database),
            )];
        };

        if !pattern.is_match(&self.value) {
            return vec![ValidationIssue::new(
                "citation",
                format!(
                    "Invalid value {:?} for database {:?}",
                    self.value, self.database
                ),
            )];
        }
        vec![]
    }
}

impl Validate for Citation {
    fn validate(&self, _ctx: &ValidationContext<'_>) -> Vec<ValidationIssue> {
        self.issues()
    }
}

///
/// Split `database:value` on the first colon. Syntax of the value is not checked
/// here so malformed citations can still be reported by [`validate_citation_list`].
///
impl FromStr for Citation {
    type Err = MibigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (database, value) = s.split_once(':').ok_or_else(|| {
            MibigError::schema("citation", format!("expected `database:value`, got {s:?}"))
        })?;
        Ok(Citation {
            database: database.to_string(),
            value: value.to_string(),
        })
    }
}

impl TryFrom<String> for Citation {
    type Error = MibigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Citation> for String {
    fn from(citation: Citation) -> Self {
        citation.as_string()
    }
}

impl Display for Citation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

///
/// Validate each citation independently. An empty list is not an issue here;
/// callers decide whether their entity needs supporting references.
///
/// # Arguments
/// - `citations`: the citations to check
/// - `field`: the field name reported on each issue
///
pub fn validate_citation_list(citations: &[Citation], field: &str) -> Vec<ValidationIssue> {
    citations
        .iter()
        .flat_map(Citation::issues)
        .map(|issue| ValidationIssue::new(field, issue.message))
        .collect()
}

///
/// Deduplicate citations and return them in citation order.
///
pub fn collect_citations<'a>(citations: impl IntoIterator<Item = &'a Citation>) -> Vec<Citation> {
    citations
        .into_iter()
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
