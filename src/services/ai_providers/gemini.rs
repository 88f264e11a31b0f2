use async_trait::async_trait;
use reqwest::Client;
use crate::config::constants::{timeout_duration_secs, DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL};
use crate::enums::ai_provider_error::AiProviderError;
use crate::structs::ai::gemini::gemini_generation_config::GeminiGenerationConfig;
use crate::structs::ai::gemini::gemini_request::GeminiRequest;
use crate::structs::ai::gemini::gemini_response::GeminiResponse;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::config::ai_config::AiConfig;
use crate::traits::ai_provider::AiProvider;

#[derive(Clone)]
pub struct GeminiProvider {
    base_url: String,
    client: Client,
    model: String,
    generation_config: GeminiGenerationConfig,
}

impl GeminiProvider {
    pub fn new(timeout_secs: u64) -> Result<Self, AiProviderError> {
        let client = Client::builder()
            .timeout(timeout_duration_secs(timeout_secs))
            .build()
            .map_err(|e| AiProviderError::NetworkError(e.to_string()))?;

        Ok(Self {
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            client,
            model: DEFAULT_GEMINI_MODEL.to_string(),
            generation_config: GeminiGenerationConfig::default(),
        })
    }

    pub fn from_config(config: &AiConfig) -> Result<Self, AiProviderError> {
        Ok(Self::new(config.request_timeout_secs)?
            .with_base_url(config.base_url.clone())
            .with_model(config.model.clone())
            .with_generation_config(GeminiGenerationConfig {
                temperature: config.temperature,
                max_output_tokens: config.max_output_tokens,
            }))
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    pub fn with_generation_config(mut self, generation_config: GeminiGenerationConfig) -> Self {
        self.generation_config = generation_config;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    fn get_request(&self, prompt: &str, request: &AnalysisRequest) -> GeminiRequest {
        GeminiRequest::for_document(
            prompt,
            request.normalized_mime_type(),
            request.normalized_data(),
            &self.generation_config,
        )
    }
}

#[async_trait]
impl AiProvider for GeminiProvider {
    async fn generate(
        &self,
        api_key: &str,
        prompt: &str,
        request: &AnalysisRequest,
    ) -> Result<String, AiProviderError> {
        log::debug!("📦 Request model: {}", self.model);

        let response = self
            .client
            .post(self.endpoint())
            .query(&[("key", api_key)])
            .header("Content-Type", "application/json")
            .json(&self.get_request(prompt, request))
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            log::error!("❌ Gemini API Error Response ({}): {}", status, error_text);

            return Err(AiProviderError::Upstream {
                status: status.as_u16(),
                body: error_text,
            });
        }

        let body: GeminiResponse = response.json().await?;

        if let Some(text) = body.first_candidate_text() {
            return Ok(text);
        }

        let reason = body
            .prompt_feedback
            .and_then(|feedback| feedback.block_reason)
            .map(|reason| format!("prompt blocked: {}", reason))
            .or_else(|| {
                body.candidates
                    .first()
                    .and_then(|candidate| candidate.finish_reason.clone())
                    .map(|reason| format!("finish reason: {}", reason))
            })
            .unwrap_or_else(|| "no candidates".to_string());

        Err(AiProviderError::EmptyResponse(format!("No content in response ({})", reason)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::constants::DEFAULT_REQUEST_TIMEOUT_SECS;

    fn default_provider() -> GeminiProvider {
        GeminiProvider::new(DEFAULT_REQUEST_TIMEOUT_SECS).unwrap()
    }

    #[test]
    fn request_body_carries_prompt_and_inline_document() {
        let provider = default_provider();
        let request = AnalysisRequest::new("aGVs\nbG8=", " Application/PDF ");

        let body = serde_json::to_value(provider.get_request("describe", &request)).unwrap();

        assert_eq!(
            body,
            serde_json::json!({
                "contents": [{
                    "parts": [
                        { "text": "describe" },
                        { "inline_data": { "mime_type": "application/pdf", "data": "aGVsbG8=" } }
                    ]
                }]
            })
        );
    }

    #[test]
    fn generation_config_is_sent_only_when_set() {
        let provider = default_provider().with_generation_config(GeminiGenerationConfig {
            temperature: Some(0.0),
            max_output_tokens: Some(1024),
        });
        let body = serde_json::to_value(provider.get_request("p", &AnalysisRequest::new("YQ==", "text/plain"))).unwrap();

        assert_eq!(body["generation_config"]["max_output_tokens"], 1024);
        assert!(body["generation_config"].get("temperature").is_some());

        let plain = serde_json::to_value(default_provider().get_request("p", &AnalysisRequest::new("YQ==", "text/plain"))).unwrap();
        assert!(plain.get("generation_config").is_none());
    }

    #[test]
    fn endpoint_uses_configured_model_and_base_url() {
        let config = AiConfig {
            base_url: "http://127.0.0.1:9999/v1beta/".to_string(),
            model: "gemini-2.0-flash".to_string(),
            ..AiConfig::default()
        };
        let provider = GeminiProvider::from_config(&config).unwrap();

        assert_eq!(provider.endpoint(), "http://127.0.0.1:9999/v1beta/models/gemini-2.0-flash:generateContent");
        assert_eq!(provider.model(), "gemini-2.0-flash");
    }
}
