use std::fmt;
use serde::{Deserialize, Serialize};

/// Organisations a document can be tagged with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentTag {
    #[serde(rename = "CAF")]
    Caf,
    #[serde(rename = "CADA")]
    Cada,
    #[serde(rename = "OFPRA")]
    Ofpra,
    #[serde(rename = "ANEF")]
    Anef,
    #[serde(rename = "France Travail")]
    FranceTravail,
    #[serde(rename = "Credit Mutuel")]
    CreditMutuel,
}

impl DocumentTag {
    pub const ALL: [Self; 6] = [
        Self::Caf,
        Self::Cada,
        Self::Ofpra,
        Self::Anef,
        Self::FranceTravail,
        Self::CreditMutuel,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Caf => "CAF",
            Self::Cada => "CADA",
            Self::Ofpra => "OFPRA",
            Self::Anef => "ANEF",
            Self::FranceTravail => "France Travail",
            Self::CreditMutuel => "Credit Mutuel",
        }
    }

    pub fn from_label(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|tag| tag.label().eq_ignore_ascii_case(value))
    }
}

impl fmt::Display for DocumentTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
