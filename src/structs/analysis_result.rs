use serde::{Deserialize, Serialize};
use crate::enums::document_category::DocumentCategory;
use crate::enums::document_tag::DocumentTag;

pub const MAX_TITLE_CHARS: usize = 50;

/// Structured summary of an analyzed document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub title: String,
    pub description: String,
    pub category: DocumentCategory,
    pub tags: Vec<DocumentTag>,
    pub actions: Vec<String>,
    pub content: String,
}
