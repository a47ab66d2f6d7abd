use thiserror::Error;

use crate::validation::ValidationError;

#[derive(Error, Debug)]
pub enum MibigError {
    /// Raw input is missing a required key or has the wrong shape.
    #[error("Malformed input for `{field}`: {message}")]
    Schema { field: String, message: String },

    /// A module type tag that has no entry in the dispatch table.
    #[error("Unknown module type: {0:?}")]
    UnknownVariant(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Can't encode record: {0}")]
    Encode(#[from] serde_json::Error),
}

impl MibigError {
    pub fn schema(field: impl Into<String>, message: impl Into<String>) -> Self {
        MibigError::Schema {
            field: field.into(),
            message: message.into(),
        }
    }

    /// The aggregated issues, if this is a validation failure.
    pub fn issues(&self) -> Option<&[crate::validation::ValidationIssue]> {
        match self {
            MibigError::Validation(err) => Some(err.issues()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, MibigError>;
