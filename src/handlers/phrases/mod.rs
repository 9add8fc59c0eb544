//! Phrase endpoints, mounted once per direction under `/api/phrases/<segment>`

pub mod add;
pub mod show;
pub mod update;

use axum::extract::FromRef;
use std::sync::Arc;

use crate::database::PhrasesRepository;
use crate::usecases::{AddPhraseUseCase, ShowPhrasesUseCase, UpdatePhraseUseCase};

// Re-export handler functions for use in routing
pub use add::post as phrases_post;
pub use show::get as phrases_get;
pub use update::put as phrase_put;

/// Use cases for one direction, all sharing the same repository
#[derive(Clone, FromRef)]
pub struct PhraseState {
    pub show: ShowPhrasesUseCase,
    pub add: AddPhraseUseCase,
    pub update: UpdatePhraseUseCase,
}

impl PhraseState {
    pub fn new(repository: Arc<dyn PhrasesRepository>) -> Self {
        Self {
            show: ShowPhrasesUseCase::new(repository.clone()),
            add: AddPhraseUseCase::new(repository.clone()),
            update: UpdatePhraseUseCase::new(repository),
        }
    }
}
