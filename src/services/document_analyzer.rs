use std::sync::Arc;
use uuid::Uuid;
use crate::config::constants::DEFAULT_MAX_ERROR_BODY_CHARS;
use crate::enums::ai_provider_error::AiProviderError;
use crate::enums::prompt_language::PromptLanguage;
use crate::errors::AnalysisError;
use crate::helpers::text_helper::TextHelper;
use crate::prompts::document_analysis_prompt::document_analysis_prompt;
use crate::services::ai_providers::gemini::GeminiProvider;
use crate::services::response_extractor::ResponseExtractor;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::analysis_result::AnalysisResult;
use crate::structs::config::ai_config::AiConfig;
use crate::traits::ai_provider::AiProvider;

/// Sends one document to the model and turns its answer into an [`AnalysisResult`].
///
/// The credential is handed in once at construction. Each call to
/// [`DocumentAnalyzer::analyze`] makes at most one upstream request and never
/// retries.
pub struct DocumentAnalyzer {
    provider: Arc<dyn AiProvider>,
    api_key: Option<String>,
    prompt_language: PromptLanguage,
    max_error_body_chars: usize,
}

impl DocumentAnalyzer {
    pub fn new(provider: Arc<dyn AiProvider>, api_key: Option<String>) -> Self {
        Self {
            provider,
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            prompt_language: PromptLanguage::default(),
            max_error_body_chars: DEFAULT_MAX_ERROR_BODY_CHARS,
        }
    }

    /// Builds an analyzer backed by Gemini.
    pub fn from_config(config: &AiConfig, api_key: Option<String>) -> Result<Self, AnalysisError> {
        let provider = GeminiProvider::from_config(config)?;

        Ok(Self::new(Arc::new(provider), api_key)
            .with_prompt_language(config.prompt_language)
            .with_max_error_body_chars(config.max_error_body_chars))
    }

    pub fn with_prompt_language(mut self, prompt_language: PromptLanguage) -> Self {
        self.prompt_language = prompt_language;
        self
    }

    pub fn with_max_error_body_chars(mut self, max_error_body_chars: usize) -> Self {
        self.max_error_body_chars = max_error_body_chars;
        self
    }

    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    pub async fn analyze(&self, request: AnalysisRequest) -> Result<AnalysisResult, AnalysisError> {
        request.validate()?;

        let api_key = self.api_key.as_deref().ok_or(AnalysisError::MissingCredential)?;

        let request_id = Uuid::new_v4();
        log::info!(
            "📄 [{}] Analyzing {} document ({} base64 chars)",
            request_id,
            request.normalized_mime_type(),
            request.base64_data.len()
        );

        let prompt = document_analysis_prompt(self.prompt_language);
        let raw_text = self
            .provider
            .generate(api_key, prompt, &request)
            .await
            .map_err(|e| {
                log::error!("❌ [{}] Upstream call failed: {}", request_id, e);
                self.provider_error(e)
            })?;

        log::debug!("[{}] Raw model response: {}", request_id, raw_text);

        let result = ResponseExtractor::extract(&raw_text).map_err(|e| {
            log::warn!("⚠️ [{}] Extraction failed ({}): {}", request_id, e.kind(), e);
            AnalysisError::from(e)
        })?;

        log::info!("✅ [{}] Document analyzed as '{}' ({})", request_id, result.title, result.category);
        Ok(result)
    }

    fn provider_error(&self, error: AiProviderError) -> AnalysisError {
        match error {
            AiProviderError::Upstream { status, body } => AnalysisError::UpstreamError {
                status,
                body: TextHelper::truncate_chars(&body, self.max_error_body_chars),
            },
            other => other.into(),
        }
    }
}
