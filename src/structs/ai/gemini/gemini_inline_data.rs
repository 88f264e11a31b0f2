use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct GeminiInlineData {
    pub mime_type: String,
    /// Base64 payload, forwarded untouched.
    pub data: String,
}
