use serde::{Deserialize, Serialize};
use crate::structs::ai::gemini::gemini_inline_data::GeminiInlineData;

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(untagged)]
pub enum GeminiPart {
    Text { text: String },
    InlineData { inline_data: GeminiInlineData },
}
