pub mod ai_provider_error;
pub mod commands;
pub mod document_category;
pub mod document_tag;
pub mod extraction_error;
pub mod prompt_language;
