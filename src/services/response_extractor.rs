use serde_json::{Map, Value};
use crate::config::constants::RAW_PREVIEW_CHARS;
use crate::enums::document_category::DocumentCategory;
use crate::enums::document_tag::DocumentTag;
use crate::enums::extraction_error::ExtractionError;
use crate::helpers::text_helper::TextHelper;
use crate::structs::analysis_result::{AnalysisResult, MAX_TITLE_CHARS};

/// Pulls a validated [`AnalysisResult`] out of free-text model output.
///
/// The object that starts at the first `{` is taken, wherever it sits in the
/// text. Its end is found by counting nesting depth outside string literals,
/// so braces in trailing prose or inside string values do not move the cut.
/// Text around the object (prose, markdown fences, later fragments) is ignored.
pub struct ResponseExtractor;

impl ResponseExtractor {
    pub fn extract(raw_text: &str) -> Result<AnalysisResult, ExtractionError> {
        let candidate = Self::locate_object(raw_text)?;

        let value: Value = serde_json::from_str(candidate)
            .map_err(|e| Self::malformed(raw_text, e.to_string()))?;

        let Value::Object(object) = value else {
            return Err(Self::malformed(raw_text, "top-level value is not an object"));
        };

        Self::validate(&object)
    }

    /// Returns the slice from the first `{` to the brace that closes it.
    pub fn locate_object(raw_text: &str) -> Result<&str, ExtractionError> {
        let start = raw_text.find('{').ok_or(ExtractionError::NoJsonFound)?;
        let tail = &raw_text[start..];

        let mut depth = 0usize;
        let mut in_string = false;
        let mut escaped = false;

        for (offset, ch) in tail.char_indices() {
            if in_string {
                if escaped {
                    escaped = false;
                } else if ch == '\\' {
                    escaped = true;
                } else if ch == '"' {
                    in_string = false;
                }
                continue;
            }

            match ch {
                '"' => in_string = true,
                '{' => depth += 1,
                '}' => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(&tail[..=offset]);
                    }
                }
                _ => {}
            }
        }

        if tail.contains('}') {
            Err(Self::malformed(raw_text, "unbalanced braces"))
        } else {
            Err(ExtractionError::NoJsonFound)
        }
    }

    fn validate(object: &Map<String, Value>) -> Result<AnalysisResult, ExtractionError> {
        let title = Self::required_string(object, "title")?;
        let title_chars = title.chars().count();
        if title_chars > MAX_TITLE_CHARS {
            return Err(ExtractionError::schema(
                "title",
                format!("must be at most {} characters, got {}", MAX_TITLE_CHARS, title_chars),
            ));
        }

        let description = Self::required_string(object, "description")?;

        let category_label = Self::required_string(object, "category")?;
        let category = DocumentCategory::from_label(&category_label).ok_or_else(|| {
            ExtractionError::schema(
                "category",
                format!("'{}' is not one of: {}", category_label, Self::category_list()),
            )
        })?;

        let tags = Self::required_string_array(object, "tags")?
            .into_iter()
            .map(|label| {
                DocumentTag::from_label(&label).ok_or_else(|| {
                    ExtractionError::schema("tags", format!("'{}' is not a known tag", label))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let actions = Self::required_string_array(object, "actions")?;
        let content = Self::required_string(object, "content")?;

        Ok(AnalysisResult {
            title,
            description,
            category,
            tags,
            actions,
            content,
        })
    }

    fn required<'a>(object: &'a Map<String, Value>, field: &str) -> Result<&'a Value, ExtractionError> {
        object
            .get(field)
            .ok_or_else(|| ExtractionError::schema(field, "is missing"))
    }

    fn required_string(object: &Map<String, Value>, field: &str) -> Result<String, ExtractionError> {
        match Self::required(object, field)? {
            Value::String(value) => Ok(value.clone()),
            other => Err(ExtractionError::schema(
                field,
                format!("must be a string, got {}", Self::json_type(other)),
            )),
        }
    }

    fn required_string_array(object: &Map<String, Value>, field: &str) -> Result<Vec<String>, ExtractionError> {
        let Value::Array(items) = Self::required(object, field)? else {
            return Err(ExtractionError::schema(field, "must be an array of strings"));
        };

        items
            .iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::String(value) => Ok(value.clone()),
                other => Err(ExtractionError::schema(
                    field,
                    format!("element {} must be a string, got {}", index, Self::json_type(other)),
                )),
            })
            .collect()
    }

    fn json_type(value: &Value) -> &'static str {
        match value {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    fn category_list() -> String {
        DocumentCategory::ALL
            .iter()
            .map(DocumentCategory::label)
            .collect::<Vec<_>>()
            .join(", ")
    }

    fn malformed(raw_text: &str, reason: impl Into<String>) -> ExtractionError {
        ExtractionError::MalformedJson {
            preview: TextHelper::truncate_chars(raw_text, RAW_PREVIEW_CHARS),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const ID_CARD: &str = r#"{"title":"ID card","description":"d","category":"Идентификация","tags":[],"actions":[],"content":"c"}"#;

    fn id_card() -> AnalysisResult {
        AnalysisResult {
            title: "ID card".to_string(),
            description: "d".to_string(),
            category: DocumentCategory::Identification,
            tags: vec![],
            actions: vec![],
            content: "c".to_string(),
        }
    }

    #[test]
    fn extracts_object_wrapped_in_prose() {
        let raw = format!("Here is the result: {} Thanks.", ID_CARD);
        assert_eq!(ResponseExtractor::extract(&raw).unwrap(), id_card());
    }

    #[test]
    fn extracts_object_inside_markdown_fence() {
        let raw = format!("```json\n{}\n```", ID_CARD);
        assert_eq!(ResponseExtractor::extract(&raw).unwrap(), id_card());
    }

    #[test]
    fn braces_in_trailing_prose_are_ignored() {
        let raw = format!("{}\nNote: fields use the {{name}} convention }}", ID_CARD);
        assert_eq!(ResponseExtractor::extract(&raw).unwrap(), id_card());
    }

    #[test]
    fn braces_and_escaped_quotes_inside_strings_are_ignored() {
        let raw = r#"{"title":"Bill {2024}","description":"say \"}\" twice","category":"Финансы",
            "tags":["CAF","France Travail"],"actions":["pay by {date}"],"content":"x"}"#;

        let result = ResponseExtractor::extract(raw).unwrap();
        assert_eq!(result.title, "Bill {2024}");
        assert_eq!(result.description, "say \"}\" twice");
        assert_eq!(result.tags, vec![DocumentTag::Caf, DocumentTag::FranceTravail]);
        assert_eq!(result.actions, vec!["pay by {date}".to_string()]);
    }

    #[test]
    fn nested_objects_are_kept_whole() {
        let raw = r#"prefix {"title":"t","description":"d","category":"Работа","tags":[],"actions":[],"content":"c","extra":{"a":{"b":1}}} suffix"#;
        assert_eq!(ResponseExtractor::locate_object(raw).unwrap().len(), raw.len() - "prefix ".len() - " suffix".len());
        assert_eq!(ResponseExtractor::extract(raw).unwrap().category, DocumentCategory::Work);
    }

    #[test]
    fn text_without_braces_has_no_json() {
        assert_eq!(
            ResponseExtractor::extract("I could not read this document."),
            Err(ExtractionError::NoJsonFound)
        );
        assert_eq!(ResponseExtractor::extract(""), Err(ExtractionError::NoJsonFound));
    }

    #[test]
    fn opening_brace_without_closing_has_no_json() {
        assert_eq!(
            ResponseExtractor::extract(r#"{"title": "cut off"#),
            Err(ExtractionError::NoJsonFound)
        );
    }

    #[test]
    fn unparseable_slice_is_malformed() {
        let raw = "Result: {title: 'ID card', category: Идентификация} done";

        match ResponseExtractor::extract(raw) {
            Err(ExtractionError::MalformedJson { preview, .. }) => assert_eq!(preview, raw),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn unbalanced_braces_are_malformed() {
        let raw = r#"{"title": {"nested": 1 } and then nothing"#;
        assert!(matches!(
            ResponseExtractor::extract(raw),
            Err(ExtractionError::MalformedJson { reason, .. }) if reason == "unbalanced braces"
        ));
    }

    #[test]
    fn malformed_preview_is_truncated() {
        let raw = format!("{{ broken {} }}", "x".repeat(1_000));

        match ResponseExtractor::extract(&raw) {
            Err(ExtractionError::MalformedJson { preview, .. }) => {
                assert_eq!(preview.chars().count(), RAW_PREVIEW_CHARS + 1);
                assert!(preview.ends_with('…'));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn missing_category_is_a_schema_violation() {
        let raw = r#"{"title":"t","description":"d","tags":[],"actions":[],"content":"c"}"#;
        assert_eq!(
            ResponseExtractor::extract(raw),
            Err(ExtractionError::schema("category", "is missing"))
        );
    }

    #[test]
    fn unknown_category_is_a_schema_violation() {
        let raw = r#"{"title":"t","description":"d","category":"Транспорт","tags":[],"actions":[],"content":"c"}"#;
        assert!(matches!(
            ResponseExtractor::extract(raw),
            Err(ExtractionError::SchemaViolation { field, .. }) if field == "category"
        ));
    }

    #[test]
    fn english_category_is_normalized() {
        let raw = r#"{"title":"t","description":"d","category":"Housing","tags":["CADA"],"actions":[],"content":"c"}"#;
        let result = ResponseExtractor::extract(raw).unwrap();

        assert_eq!(result.category, DocumentCategory::Housing);
        assert!(serde_json::to_string(&result).unwrap().contains("\"Жилье\""));
    }

    #[test]
    fn overlong_title_is_a_schema_violation() {
        let raw = format!(
            r#"{{"title":"{}","description":"d","category":"Работа","tags":[],"actions":[],"content":"c"}}"#,
            "я".repeat(MAX_TITLE_CHARS + 1)
        );
        assert!(matches!(
            ResponseExtractor::extract(&raw),
            Err(ExtractionError::SchemaViolation { field, .. }) if field == "title"
        ));

        let at_limit = raw.replacen(&"я".repeat(MAX_TITLE_CHARS + 1), &"я".repeat(MAX_TITLE_CHARS), 1);
        assert!(ResponseExtractor::extract(&at_limit).is_ok());
    }

    #[test]
    fn unknown_tag_is_a_schema_violation() {
        let raw = r#"{"title":"t","description":"d","category":"Работа","tags":["CAF","URSSAF"],"actions":[],"content":"c"}"#;
        assert!(matches!(
            ResponseExtractor::extract(raw),
            Err(ExtractionError::SchemaViolation { field, reason }) if field == "tags" && reason.contains("URSSAF")
        ));
    }

    #[test]
    fn non_string_action_is_a_schema_violation() {
        let raw = r#"{"title":"t","description":"d","category":"Работа","tags":[],"actions":["call", 42],"content":"c"}"#;
        assert_eq!(
            ResponseExtractor::extract(raw),
            Err(ExtractionError::schema("actions", "element 1 must be a string, got number"))
        );
    }

    #[test]
    fn tags_must_be_an_array() {
        let raw = r#"{"title":"t","description":"d","category":"Работа","tags":"CAF","actions":[],"content":"c"}"#;
        assert!(matches!(
            ResponseExtractor::extract(raw),
            Err(ExtractionError::SchemaViolation { field, .. }) if field == "tags"
        ));
    }

    #[test]
    fn null_content_is_a_schema_violation() {
        let raw = r#"{"title":"t","description":"d","category":"Работа","tags":[],"actions":[],"content":null}"#;
        assert_eq!(
            ResponseExtractor::extract(raw),
            Err(ExtractionError::schema("content", "must be a string, got null"))
        );
    }

    fn arb_result() -> impl Strategy<Value = AnalysisResult> {
        (
            "[a-zA-Z0-9 ]{0,50}",
            ".{0,80}",
            prop::sample::select(DocumentCategory::ALL.to_vec()),
            prop::collection::vec(prop::sample::select(DocumentTag::ALL.to_vec()), 0..4),
            prop::collection::vec(".{0,30}", 0..4),
            ".{0,80}",
        )
            .prop_map(|(title, description, category, tags, actions, content)| AnalysisResult {
                title,
                description,
                category,
                tags,
                actions,
                content,
            })
    }

    proptest! {
        #[test]
        fn any_valid_object_survives_surrounding_prose(
            result in arb_result(),
            prefix in "[^{]{0,40}",
            suffix in ".{0,40}",
        ) {
            let raw = format!("{}{}{}", prefix, serde_json::to_string(&result).unwrap(), suffix);
            prop_assert_eq!(ResponseExtractor::extract(&raw).unwrap(), result);
        }
    }
}
