/// Shared types used across the codebase

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Direction a phrase is being learned in. Partitions a user's phrases
/// into two independent lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PhraseType {
    FrenchToEnglish,
    EnglishToFrench,
}

impl PhraseType {
    pub const ALL: [PhraseType; 2] = [PhraseType::FrenchToEnglish, PhraseType::EnglishToFrench];

    /// Value stored in the `phrase_type` column
    pub fn as_str(&self) -> &'static str {
        match self {
            PhraseType::FrenchToEnglish => "FRENCH_TO_ENGLISH",
            PhraseType::EnglishToFrench => "ENGLISH_TO_FRENCH",
        }
    }

    /// Path segment under `/api/phrases/`
    pub fn route_segment(&self) -> &'static str {
        match self {
            PhraseType::FrenchToEnglish => "french",
            PhraseType::EnglishToFrench => "english",
        }
    }
}

impl std::fmt::Display for PhraseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PhraseType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FRENCH_TO_ENGLISH" => Ok(PhraseType::FrenchToEnglish),
            "ENGLISH_TO_FRENCH" => Ok(PhraseType::EnglishToFrench),
            other => Err(format!("unknown phrase type: {}", other)),
        }
    }
}

/// A stored phrase. `uuid`, `user_uuid` and `phrase_type` never change
/// after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phrase {
    pub uuid: Uuid,
    pub user_uuid: Uuid,
    pub phrase_type: PhraseType,
    pub content: String,
    pub translation: String,
}

/// Number of phrases owned by a user, across both directions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhraseCount {
    pub user_uuid: String,
    pub phrase_count: i64,
}
