use thiserror::Error;
use crate::enums::ai_provider_error::AiProviderError;
use crate::enums::extraction_error::ExtractionError;
use crate::structs::error_body::ErrorBody;

/// Failure of a single analysis request. Every variant is terminal.
#[derive(Debug, Clone, Error)]
pub enum AnalysisError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error("Invalid request payload: {0}")]
    InvalidRequestPayload(String),

    #[error("API key is not configured")]
    MissingCredential,

    /// `body` is already truncated.
    #[error("Upstream service responded with HTTP {status}")]
    UpstreamError { status: u16, body: String },

    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    #[error("{0}")]
    UnexpectedFailure(String),
}

impl AnalysisError {
    pub fn status_code(&self) -> u16 {
        match self {
            Self::MethodNotAllowed => 405,
            Self::InvalidRequestPayload(_) | Self::Extraction(_) => 400,
            Self::MissingCredential | Self::UnexpectedFailure(_) => 500,
            Self::UpstreamError { status, .. } => *status,
        }
    }

    /// Body sent to the caller. Never includes internal type names.
    pub fn to_error_body(&self) -> ErrorBody {
        match self {
            Self::MethodNotAllowed => ErrorBody::new("Method not allowed"),
            Self::InvalidRequestPayload(reason) => ErrorBody::new(reason.clone()),
            Self::MissingCredential => ErrorBody::new("API key is not configured"),
            Self::UpstreamError { status, body } => ErrorBody::new("Upstream service error")
                .with_status(*status)
                .with_details(body.clone()),
            Self::Extraction(ExtractionError::NoJsonFound) => ErrorBody::new("No JSON found in response"),
            Self::Extraction(ExtractionError::MalformedJson { preview, reason }) => {
                ErrorBody::new(format!("Malformed JSON in response: {}", reason)).with_details(preview.clone())
            }
            Self::Extraction(error @ ExtractionError::SchemaViolation { .. }) => ErrorBody::new(error.to_string()),
            Self::UnexpectedFailure(message) => ErrorBody::new(message.clone()),
        }
    }
}

impl From<AiProviderError> for AnalysisError {
    fn from(error: AiProviderError) -> Self {
        match error {
            AiProviderError::Upstream { status, body } => Self::UpstreamError { status, body },
            other => Self::UnexpectedFailure(other.to_string()),
        }
    }
}

/// Application-level failures outside a single request.
#[derive(Debug, Error)]
pub enum DoclyzerError {
    #[error("Configuration file error at '{path}': {reason}")]
    ConfigurationFile { path: String, reason: String },

    #[error("Invalid configuration:\n  - {}", .0.join("\n  - "))]
    ConfigurationInvalid(Vec<String>),

    #[error("Server error: {0}")]
    Server(String),

    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl DoclyzerError {
    pub fn config_file(path: &std::path::Path, reason: impl ToString) -> Self {
        Self::ConfigurationFile {
            path: path.display().to_string(),
            reason: reason.to_string(),
        }
    }
}

pub type DoclyzerResult<T> = Result<T, DoclyzerError>;
