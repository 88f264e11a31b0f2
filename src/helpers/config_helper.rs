use crate::config::constants::{
    DEFAULT_API_KEY_ENV, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, DEFAULT_HOST,
    DEFAULT_MAX_BODY_BYTES, DEFAULT_MAX_ERROR_BODY_CHARS, DEFAULT_PORT,
    DEFAULT_REQUEST_TIMEOUT_SECS,
};

pub struct ConfigHelper;

impl ConfigHelper {
    pub fn default_host() -> String {
        DEFAULT_HOST.to_string()
    }

    pub fn default_port() -> u16 {
        DEFAULT_PORT
    }

    pub fn default_max_body_bytes() -> u64 {
        DEFAULT_MAX_BODY_BYTES
    }

    pub fn default_base_url() -> String {
        DEFAULT_GEMINI_BASE_URL.to_string()
    }

    pub fn default_model() -> String {
        DEFAULT_GEMINI_MODEL.to_string()
    }

    pub fn default_api_key_env() -> String {
        DEFAULT_API_KEY_ENV.to_string()
    }

    pub fn default_request_timeout_secs() -> u64 {
        DEFAULT_REQUEST_TIMEOUT_SECS
    }

    pub fn default_max_error_body_chars() -> usize {
        DEFAULT_MAX_ERROR_BODY_CHARS
    }
}
