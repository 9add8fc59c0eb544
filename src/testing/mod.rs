//! In-memory stand-ins for the repository traits. They store what they are
//! given, record every call for assertions and can be told to fail.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};
use uuid::Uuid;

use crate::database::{AdminRepository, DatabaseError, PhrasesRepository};
use crate::types::{Phrase, PhraseCount, PhraseType};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddPhraseCall {
    pub content: String,
    pub translation: String,
    pub user_uuid: Uuid,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdatePhraseCall {
    pub content: String,
    pub translation: String,
    pub phrase_uuid: Uuid,
    pub user_uuid: Uuid,
}

#[derive(Default)]
struct PhrasesState {
    phrases: Vec<Phrase>,
    next_uuids: VecDeque<Uuid>,
    list_calls: Vec<Uuid>,
    add_calls: Vec<AddPhraseCall>,
    update_calls: Vec<UpdatePhraseCall>,
    fail_lists: bool,
    fail_adds_from: Option<usize>,
    fail_updates_from: Option<usize>,
}

pub struct InMemoryPhrasesRepository {
    phrase_type: PhraseType,
    state: Mutex<PhrasesState>,
}

fn injected_failure(operation: &str) -> DatabaseError {
    DatabaseError::QueryError(format!("injected {} failure", operation))
}

impl InMemoryPhrasesRepository {
    pub fn new(phrase_type: PhraseType) -> Self {
        Self {
            phrase_type,
            state: Mutex::new(PhrasesState::default()),
        }
    }

    fn state(&self) -> MutexGuard<'_, PhrasesState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Store a phrase as if it had been inserted earlier
    pub fn seed(&self, phrase: Phrase) {
        self.state().phrases.push(phrase);
    }

    /// UUID handed out by the next insert instead of a random one
    pub fn queue_uuid(&self, uuid: Uuid) {
        self.state().next_uuids.push_back(uuid);
    }

    /// Every list call fails from now on
    pub fn fail_lists(&self) {
        self.state().fail_lists = true;
    }

    /// Inserts fail starting with the given zero-based call index
    pub fn fail_adds_from_call(&self, index: usize) {
        self.state().fail_adds_from = Some(index);
    }

    /// Updates fail starting with the given zero-based call index
    pub fn fail_updates_from_call(&self, index: usize) {
        self.state().fail_updates_from = Some(index);
    }

    pub fn stored_phrases(&self) -> Vec<Phrase> {
        self.state().phrases.clone()
    }

    pub fn list_call_count(&self) -> usize {
        self.state().list_calls.len()
    }

    pub fn add_call_count(&self) -> usize {
        self.state().add_calls.len()
    }

    pub fn add_args_for_call(&self, index: usize) -> Option<AddPhraseCall> {
        self.state().add_calls.get(index).cloned()
    }

    pub fn update_call_count(&self) -> usize {
        self.state().update_calls.len()
    }

    pub fn update_args_for_call(&self, index: usize) -> Option<UpdatePhraseCall> {
        self.state().update_calls.get(index).cloned()
    }
}

#[async_trait]
impl PhrasesRepository for InMemoryPhrasesRepository {
    fn phrase_type(&self) -> PhraseType {
        self.phrase_type
    }

    async fn phrases_for_user_with_uuid(&self, user_uuid: Uuid) -> Result<Vec<Phrase>, DatabaseError> {
        let mut state = self.state();
        state.list_calls.push(user_uuid);
        if state.fail_lists {
            return Err(injected_failure("list"));
        }

        Ok(state
            .phrases
            .iter()
            .filter(|p| p.user_uuid == user_uuid && p.phrase_type == self.phrase_type)
            .cloned()
            .collect())
    }

    async fn add_phrase_for_user_with_uuid(
        &self,
        content: &str,
        translation: &str,
        user_uuid: Uuid,
    ) -> Result<Phrase, DatabaseError> {
        let mut state = self.state();
        let call_index = state.add_calls.len();
        state.add_calls.push(AddPhraseCall {
            content: content.to_string(),
            translation: translation.to_string(),
            user_uuid,
        });
        if state.fail_adds_from.is_some_and(|from| call_index >= from) {
            return Err(injected_failure("insert"));
        }

        let phrase = Phrase {
            uuid: state.next_uuids.pop_front().unwrap_or_else(Uuid::new_v4),
            user_uuid,
            phrase_type: self.phrase_type,
            content: content.to_string(),
            translation: translation.to_string(),
        };
        state.phrases.push(phrase.clone());
        Ok(phrase)
    }

    async fn update_phrase_for_user_with_uuid(
        &self,
        content: &str,
        translation: &str,
        phrase_uuid: Uuid,
        user_uuid: Uuid,
    ) -> Result<Phrase, DatabaseError> {
        let mut state = self.state();
        let call_index = state.update_calls.len();
        state.update_calls.push(UpdatePhraseCall {
            content: content.to_string(),
            translation: translation.to_string(),
            phrase_uuid,
            user_uuid,
        });
        if state.fail_updates_from.is_some_and(|from| call_index >= from) {
            return Err(injected_failure("update"));
        }

        // Same semantics as the SQL adapter: no match means nothing changes.
        let phrase_type = self.phrase_type;
        if let Some(stored) = state.phrases.iter_mut().find(|p| {
            p.uuid == phrase_uuid && p.user_uuid == user_uuid && p.phrase_type == phrase_type
        }) {
            stored.content = content.to_string();
            stored.translation = translation.to_string();
        }

        Ok(Phrase {
            uuid: phrase_uuid,
            user_uuid,
            phrase_type,
            content: content.to_string(),
            translation: translation.to_string(),
        })
    }
}

#[derive(Default)]
struct AdminState {
    counts: Vec<PhraseCount>,
    failure: Option<String>,
    calls: usize,
}

#[derive(Default)]
pub struct InMemoryAdminRepository {
    state: Mutex<AdminState>,
}

impl InMemoryAdminRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, AdminState> {
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn returns(&self, counts: Vec<PhraseCount>) {
        self.state().counts = counts;
    }

    pub fn fails_with(&self, message: impl Into<String>) {
        self.state().failure = Some(message.into());
    }

    pub fn call_count(&self) -> usize {
        self.state().calls
    }
}

#[async_trait]
impl AdminRepository for InMemoryAdminRepository {
    async fn phrase_count_by_user_uuid(&self) -> Result<Vec<PhraseCount>, DatabaseError> {
        let mut state = self.state();
        state.calls += 1;
        match &state.failure {
            Some(message) => Err(DatabaseError::QueryError(message.clone())),
            None => Ok(state.counts.clone()),
        }
    }
}
