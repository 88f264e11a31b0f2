use serde::{Deserialize, Serialize};
use crate::structs::ai::gemini::gemini_content::GeminiContent;
use crate::structs::ai::gemini::gemini_generation_config::GeminiGenerationConfig;
use crate::structs::ai::gemini::gemini_inline_data::GeminiInlineData;
use crate::structs::ai::gemini::gemini_part::GeminiPart;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GeminiRequest {
    pub contents: Vec<GeminiContent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GeminiGenerationConfig>,
}

impl GeminiRequest {
    /// One user turn: the instruction text followed by the inline document.
    pub fn for_document(
        prompt: &str,
        mime_type: String,
        data: String,
        generation_config: &GeminiGenerationConfig,
    ) -> Self {
        Self {
            contents: vec![GeminiContent {
                parts: vec![
                    GeminiPart::Text {
                        text: prompt.to_string(),
                    },
                    GeminiPart::InlineData {
                        inline_data: GeminiInlineData { mime_type, data },
                    },
                ],
            }],
            generation_config: (!generation_config.is_empty()).then(|| generation_config.clone()),
        }
    }
}
