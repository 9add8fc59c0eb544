//! Orchestration between a param reader's output and a repository call.
//! Use cases own no I/O; they dispatch to the repository and map rows to
//! response shapes.

pub mod add_phrase;
pub mod show_phrases;
pub mod update_phrase;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::Phrase;

pub use add_phrase::{AddPhraseItem, AddPhraseRequest, AddPhraseUseCase};
pub use show_phrases::{ShowPhrasesRequest, ShowPhrasesUseCase};
pub use update_phrase::{UpdatePhraseRequest, UpdatePhraseUseCase};

/// Wire shape of a single phrase
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhraseResponse {
    pub uuid: Uuid,
    pub content: String,
    pub translation: String,
}

impl From<Phrase> for PhraseResponse {
    fn from(phrase: Phrase) -> Self {
        Self {
            uuid: phrase.uuid,
            content: phrase.content,
            translation: phrase.translation,
        }
    }
}

pub type PhrasesResponse = Vec<PhraseResponse>;
