pub mod ai_providers;
pub mod document_analyzer;
pub mod response_extractor;
