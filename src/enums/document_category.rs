use std::fmt;
use serde::{Deserialize, Serialize};

/// Fixed set of categories a document can be filed under.
///
/// The canonical labels are the Russian ones; English labels produced by the
/// English prompt are accepted and normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum DocumentCategory {
    #[serde(rename = "Жилье")]
    Housing,
    #[serde(rename = "Финансы")]
    Finance,
    #[serde(rename = "Работа")]
    Work,
    #[serde(rename = "Идентификация")]
    Identification,
    #[serde(rename = "Медицина")]
    Medical,
}

impl DocumentCategory {
    pub const ALL: [Self; 5] = [
        Self::Housing,
        Self::Finance,
        Self::Work,
        Self::Identification,
        Self::Medical,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Housing => "Жилье",
            Self::Finance => "Финансы",
            Self::Work => "Работа",
            Self::Identification => "Идентификация",
            Self::Medical => "Медицина",
        }
    }

    pub fn english_label(&self) -> &'static str {
        match self {
            Self::Housing => "Housing",
            Self::Finance => "Finance",
            Self::Work => "Work",
            Self::Identification => "Identification",
            Self::Medical => "Medical",
        }
    }

    fn aliases(&self) -> &'static [&'static str] {
        match self {
            Self::Housing => &["Жильё", "Housing"],
            Self::Finance => &["Finance", "Finances"],
            Self::Work => &["Work", "Employment"],
            Self::Identification => &["Identification", "Identity"],
            Self::Medical => &["Medical", "Medicine", "Health"],
        }
    }

    /// Matches the canonical label or any alias, ignoring surrounding
    /// whitespace and ASCII case. Deserialization goes through here too.
    pub fn from_label(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL.into_iter().find(|category| {
            category.label() == value
                || category.aliases().iter().any(|alias| alias.eq_ignore_ascii_case(value))
        })
    }
}

impl TryFrom<String> for DocumentCategory {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_label(&value).ok_or_else(|| format!("unknown document category '{}'", value))
    }
}

impl fmt::Display for DocumentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_canonical_label() {
        let json = serde_json::to_string(&DocumentCategory::Identification).unwrap();
        assert_eq!(json, "\"Идентификация\"");
    }

    #[test]
    fn accepts_english_aliases() {
        let category: DocumentCategory = serde_json::from_str("\"Medicine\"").unwrap();
        assert_eq!(category, DocumentCategory::Medical);
        assert_eq!(DocumentCategory::from_label(" housing "), Some(DocumentCategory::Housing));
    }

    #[test]
    fn deserialization_and_lookup_agree_on_every_alias() {
        for category in DocumentCategory::ALL {
            for alias in category.aliases().iter().copied().chain(std::iter::once(category.label())) {
                let json = format!("\"{}\"", alias);
                assert_eq!(serde_json::from_str::<DocumentCategory>(&json).unwrap(), category);
                assert_eq!(DocumentCategory::from_label(alias), Some(category));
            }
        }
    }

    #[test]
    fn housing_accepts_spelling_with_yo() {
        assert_eq!(DocumentCategory::from_label("Жильё"), Some(DocumentCategory::Housing));
        let category: DocumentCategory = serde_json::from_str("\"Жильё\"").unwrap();
        assert_eq!(serde_json::to_string(&category).unwrap(), "\"Жилье\"");
    }

    #[test]
    fn rejects_unknown_labels() {
        assert_eq!(DocumentCategory::from_label("Транспорт"), None);
        assert!(serde_json::from_str::<DocumentCategory>("\"Travel\"").is_err());
    }
}
