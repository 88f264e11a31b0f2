use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AiProviderError {
    /// The upstream answered with a non-2xx status.
    #[error("Upstream API Error: HTTP {status}: {body}")]
    Upstream { status: u16, body: String },

    #[error("Network Error: {0}")]
    NetworkError(String),

    #[error("Timeout Error: {0}")]
    Timeout(String),

    #[error("Serialization Error: {0}")]
    SerializationError(String),

    /// A 2xx response that carried no candidate text.
    #[error("Empty Response: {0}")]
    EmptyResponse(String),
}

impl From<reqwest::Error> for AiProviderError {
    fn from(error: reqwest::Error) -> Self {
        // The request URL carries the API key.
        let error = error.without_url();
        if error.is_timeout() {
            Self::Timeout(error.to_string())
        } else if error.is_decode() {
            Self::SerializationError(error.to_string())
        } else {
            Self::NetworkError(error.to_string())
        }
    }
}
