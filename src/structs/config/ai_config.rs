use serde::{Deserialize, Serialize};
use crate::enums::prompt_language::PromptLanguage;
use crate::helpers::config_helper::ConfigHelper;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct AiConfig {
    #[serde(default = "ConfigHelper::default_base_url")]
    pub base_url: String,

    #[serde(default = "ConfigHelper::default_model")]
    pub model: String,

    /// Name of the environment variable holding the API key.
    #[serde(default = "ConfigHelper::default_api_key_env")]
    pub api_key_env: String,

    #[serde(default)]
    pub prompt_language: PromptLanguage,

    #[serde(default)]
    pub temperature: Option<f32>,

    #[serde(default)]
    pub max_output_tokens: Option<u32>,

    #[serde(default = "ConfigHelper::default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    #[serde(default = "ConfigHelper::default_max_error_body_chars")]
    pub max_error_body_chars: usize,
}

impl Default for AiConfig {
    fn default() -> Self {
        Self {
            base_url: ConfigHelper::default_base_url(),
            model: ConfigHelper::default_model(),
            api_key_env: ConfigHelper::default_api_key_env(),
            prompt_language: PromptLanguage::default(),
            temperature: None,
            max_output_tokens: None,
            request_timeout_secs: ConfigHelper::default_request_timeout_secs(),
            max_error_body_chars: ConfigHelper::default_max_error_body_chars(),
        }
    }
}
