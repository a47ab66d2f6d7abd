use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use crate::validation::{Validate, ValidationContext, ValidationIssue};

///
/// Identifier of a gene (locus tag, gene name or protein id) as written in an entry.
///
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GeneId(String);

impl GeneId {
    pub fn new(id: impl Into<String>) -> Self {
        GeneId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Validate for GeneId {
    fn validate(&self, ctx: &ValidationContext<'_>) -> Vec<ValidationIssue> {
        let mut issues = vec![];
        if self.0.is_empty() || self.0.contains([' ', ',']) {
            issues.push(ValidationIssue::new(
                "GeneId",
                format!("Invalid gene id {:?}", self.0),
            ));
        }

        // without a record the identifier can't be resolved, which is not a failure
        if let Some(record) = ctx.record {
            if !record.has_identifier(&self.0) {
                issues.push(ValidationIssue::new(
                    "GeneId",
                    format!("Gene {:?} not found in record", self.0),
                ));
            }
        }
        issues
    }
}

impl From<&str> for GeneId {
    fn from(id: &str) -> Self {
        GeneId::new(id)
    }
}

impl Display for GeneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::record::{Cds, GenomeRecord};
    use crate::validation::QualityLevel;

    #[rstest]
    #[case("abcA", 0)]
    #[case("abc A", 1)]
    #[case("abcA,abcB", 1)]
    #[case("", 1)]
    fn test_syntax(#[case] id: &str, #[case] expected: usize) {
        let ctx = ValidationContext::new(QualityLevel::High);
        assert_eq!(GeneId::from(id).validate(&ctx).len(), expected);
    }

    #[rstest]
    fn test_resolves_against_record() {
        let record = GenomeRecord::new(
            "ACC0001.1",
            vec![Cds::new(Some("LT_0001"), Some("abcA"), None).unwrap()],
        );
        let ctx = ValidationContext::new(QualityLevel::High).with_record(&record);

        assert!(GeneId::from("abcA").validate(&ctx).is_empty());
        assert!(GeneId::from("LT_0001").validate(&ctx).is_empty());

        let issues = GeneId::from("abcZ").validate(&ctx);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].message, r#"Gene "abcZ" not found in record"#);
    }
}
