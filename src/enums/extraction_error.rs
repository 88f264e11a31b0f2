use thiserror::Error;

/// Why a structured result could not be pulled out of model text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractionError {
    #[error("No JSON found in response")]
    NoJsonFound,

    /// `preview` holds the first characters of the raw text.
    #[error("Malformed JSON in response: {reason}")]
    MalformedJson { preview: String, reason: String },

    #[error("Invalid field '{field}': {reason}")]
    SchemaViolation { field: String, reason: String },
}

impl ExtractionError {
    pub fn schema(field: &str, reason: impl Into<String>) -> Self {
        Self::SchemaViolation {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::NoJsonFound => "no_json_found",
            Self::MalformedJson { .. } => "malformed_json",
            Self::SchemaViolation { .. } => "schema_violation",
        }
    }
}
