pub mod document_analysis_prompt;
