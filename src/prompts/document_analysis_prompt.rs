use crate::enums::prompt_language::PromptLanguage;

pub const DOCUMENT_ANALYSIS_PROMPT_RU: &str = r#"Проанализируй этот документ и верни JSON со следующими полями:
- title: краткое название документа (до 50 символов)
- description: краткое описание (1-2 предложения)
- category: выбери одну категорию из: Жилье, Финансы, Работа, Идентификация, Медицина
- tags: массив релевантных тегов из: CAF, CADA, OFPRA, ANEF, France Travail, Credit Mutuel
- actions: массив важной информации (коды, даты, что нужно сделать)
- content: краткое резюме основного содержания
Верни только валидный JSON без дополнительного текста."#;

pub const DOCUMENT_ANALYSIS_PROMPT_EN: &str = r#"Analyze this document and return a JSON object with the following fields:
- title: a short name for the document (at most 50 characters)
- description: a brief description (1-2 sentences)
- category: exactly one of: Housing, Finance, Work, Identification, Medical
- tags: an array of relevant tags chosen only from: CAF, CADA, OFPRA, ANEF, France Travail, Credit Mutuel
- actions: an array of important details (codes, dates, things that must be done)
- content: a short summary of the main content
Return only valid JSON with no additional text and no markdown formatting."#;

pub fn document_analysis_prompt(language: PromptLanguage) -> &'static str {
    match language {
        PromptLanguage::Russian => DOCUMENT_ANALYSIS_PROMPT_RU,
        PromptLanguage::English => DOCUMENT_ANALYSIS_PROMPT_EN,
    }
}
