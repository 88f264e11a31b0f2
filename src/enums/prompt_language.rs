use serde::{Deserialize, Serialize};

/// Language of the instruction sent alongside the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptLanguage {
    #[default]
    Russian,
    English,
}
