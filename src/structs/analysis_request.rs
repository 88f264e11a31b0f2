use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig};
use base64::engine::DecodePaddingMode;
use base64::{alphabet, Engine};
use serde::{Deserialize, Serialize};
use crate::errors::AnalysisError;

/// Accepts standard base64 with or without trailing padding.
const LENIENT_STANDARD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Inbound document submitted for analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisRequest {
    #[serde(default)]
    pub base64_data: String,
    #[serde(default)]
    pub mime_type: String,
}

impl AnalysisRequest {
    pub fn new(base64_data: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            base64_data: base64_data.into(),
            mime_type: mime_type.into(),
        }
    }

    /// Builds a request from raw document bytes.
    pub fn from_bytes(bytes: &[u8], mime_type: impl Into<String>) -> Self {
        Self::new(base64::engine::general_purpose::STANDARD.encode(bytes), mime_type)
    }

    /// Rejects the request before any remote call is made.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.base64_data.trim().is_empty() {
            return Err(AnalysisError::InvalidRequestPayload(
                "Missing required field 'base64Data'".to_string(),
            ));
        }

        if self.mime_type.trim().is_empty() {
            return Err(AnalysisError::InvalidRequestPayload(
                "Missing required field 'mimeType'".to_string(),
            ));
        }

        if !is_media_type(self.mime_type.trim()) {
            return Err(AnalysisError::InvalidRequestPayload(format!(
                "Field 'mimeType' is not a media type: '{}'",
                self.mime_type.trim()
            )));
        }

        let compact: String = self
            .base64_data
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();

        if let Err(e) = LENIENT_STANDARD.decode(compact.as_bytes()) {
            return Err(AnalysisError::InvalidRequestPayload(format!(
                "Field 'base64Data' is not valid base64: {}",
                e
            )));
        }

        Ok(())
    }

    /// Payload with whitespace removed, the form sent upstream.
    pub fn normalized_data(&self) -> String {
        self.base64_data
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect()
    }

    pub fn normalized_mime_type(&self) -> String {
        self.mime_type.trim().to_ascii_lowercase()
    }
}

fn is_media_type(value: &str) -> bool {
    let Some((kind, subtype)) = value.split_once('/') else {
        return false;
    };
    let valid = |part: &str| {
        !part.is_empty()
            && part
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || "!#$&-^_.+".contains(c))
    };
    // Parameters such as "; charset=utf-8" are allowed after the subtype.
    let subtype = subtype.split(';').next().unwrap_or_default().trim();
    valid(kind) && valid(subtype)
}
