use async_trait::async_trait;
use crate::enums::ai_provider_error::AiProviderError;
use crate::structs::analysis_request::AnalysisRequest;

/// A remote model that reads a document and answers in free text.
#[async_trait]
pub trait AiProvider: Send + Sync {
    /// Makes exactly one call and returns the model's text.
    async fn generate(
        &self,
        api_key: &str,
        prompt: &str,
        request: &AnalysisRequest,
    ) -> Result<String, AiProviderError>;
}
