use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::errors::{DoclyzerError, DoclyzerResult};
use crate::structs::config::config::Config;

pub const SAMPLE_CONFIG: &str = r#"# Doclyzer configuration

[server]
# Address the HTTP service binds to
host = "127.0.0.1"
port = 3000

# Largest accepted request body in bytes (base64 inflates documents by ~4/3)
max_body_bytes = 20971520

# Origins allowed to call the API from a browser; empty allows any origin
cors_origins = []

[ai]
base_url = "https://generativelanguage.googleapis.com/v1"
model = "gemini-1.5-flash"

# Environment variable that holds the API key
api_key_env = "GEMINI_API_KEY"

# Language of the instruction sent with each document: "russian" or "english"
prompt_language = "russian"

# Optional sampling settings
# temperature = 0.2
# max_output_tokens = 2048

# Total time allowed for one upstream call
request_timeout_secs = 60

# Upstream error bodies are cut to this many characters before being returned
max_error_body_chars = 500
"#;

pub struct ConfigManager;

impl ConfigManager {
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Loads `path` when given, else the default location, else built-in defaults.
    pub fn load(path: Option<&Path>) -> DoclyzerResult<Config> {
        if let Some(path) = path {
            return Self::load_from(path);
        }

        match Self::default_config_path() {
            Some(default_path) if default_path.exists() => Self::load_from(&default_path),
            _ => {
                log::debug!("No configuration file found, using defaults");
                Ok(Config::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> DoclyzerResult<Config> {
        log::info!("📋 Loading config from: {}", path.display());
        let content = fs::read_to_string(path).map_err(|e| DoclyzerError::config_file(path, e))?;
        toml::from_str(&content).map_err(|e| DoclyzerError::config_file(path, e.message()))
    }

    /// Writes the sample file to `path` or the default location.
    pub fn create_sample_config(path: Option<&Path>) -> DoclyzerResult<PathBuf> {
        let config_file_path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::default_config_path().ok_or_else(|| {
                DoclyzerError::config_file(Path::new("~"), "cannot determine home directory")
            })?,
        };

        if config_file_path.exists() {
            return Err(DoclyzerError::config_file(&config_file_path, "file already exists"));
        }

        if let Some(parent) = config_file_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&config_file_path, SAMPLE_CONFIG)?;

        log::info!("✅ Created sample config at: {}", config_file_path.display());
        Ok(config_file_path)
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if config.server.host.trim().is_empty() {
            errors.push("server.host must not be empty".to_string());
        }

        if config.server.port == 0 {
            errors.push("server.port must be greater than zero".to_string());
        }

        if config.server.max_body_bytes == 0 {
            errors.push("server.max_body_bytes must be greater than zero".to_string());
        }

        for origin in &config.server.cors_origins {
            if !(origin.starts_with("http://") || origin.starts_with("https://")) || origin.ends_with('/') {
                errors.push(format!(
                    "server.cors_origins entry '{}' must look like 'https://example.com'",
                    origin
                ));
            }
        }

        if !(config.ai.base_url.starts_with("http://") || config.ai.base_url.starts_with("https://")) {
            errors.push(format!("ai.base_url '{}' must be an http(s) URL", config.ai.base_url));
        }

        if config.ai.model.trim().is_empty() {
            errors.push("ai.model must not be empty".to_string());
        }

        if config.ai.api_key_env.trim().is_empty() {
            errors.push("ai.api_key_env must not be empty".to_string());
        }

        if config.ai.request_timeout_secs == 0 {
            errors.push("ai.request_timeout_secs must be greater than zero".to_string());
        }

        if let Some(temperature) = config.ai.temperature {
            if !(0.0..=2.0).contains(&temperature) {
                errors.push(format!("ai.temperature {} must be between 0.0 and 2.0", temperature));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Reads the API key from the environment variable named in the config.
    pub fn api_key_from_env(config: &Config) -> Option<String> {
        std::env::var(&config.ai.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}
