//! In-memory implementation of both repository traits.
//!
//! Mirrors the PostgreSQL behaviour that matters to callers: generated ids,
//! timestamp stamping, the ownership check on phrases and the restricting
//! foreign key from phrases to characters. On top of that it can be told to
//! fail, and it keeps a journal of every mutating call so tests can assert on
//! the order in which a handler touched storage.

use std::collections::{BTreeMap, HashSet};

use async_trait::async_trait;
use memequotes_core::timestamps;
use memequotes_core::types::DbId;
use tokio::sync::RwLock;

use crate::error::{DbError, DbResult};
use crate::models::character::{Character, CharacterCommand};
use crate::models::phrase::{Phrase, PhraseCommand};
use crate::repositories::{CharacterRepository, PhraseRepository, StoreHealth};

/// A mutating call received by a [`MemoryStore`], recorded before its outcome
/// is known.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mutation {
    SaveCharacter,
    UpdateCharacter(DbId),
    DeleteCharacter(DbId),
    SavePhrase { character_id: DbId },
    DeletePhrase { character_id: DbId, id: DbId },
}

#[derive(Default)]
struct Inner {
    characters: BTreeMap<DbId, Character>,
    phrases: BTreeMap<DbId, Phrase>,
    last_character_id: DbId,
    last_phrase_id: DbId,
    failing_phrase_deletes: HashSet<DbId>,
    failing_character_deletes: HashSet<DbId>,
    unavailable: bool,
    journal: Vec<Mutation>,
}

impl Inner {
    fn check_available(&self) -> DbResult<()> {
        if self.unavailable {
            Err(DbError::Unavailable("in-memory store switched off".into()))
        } else {
            Ok(())
        }
    }

    fn phrase_for(&self, character_id: DbId, id: DbId) -> DbResult<Option<Phrase>> {
        self.phrases
            .get(&id)
            .cloned()
            .map(|p| p.owned_by(character_id))
            .transpose()
    }
}

/// Character and phrase storage held in process memory.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every later delete of phrase `id` fail with a storage error.
    pub async fn fail_phrase_delete(&self, id: DbId) {
        self.inner.write().await.failing_phrase_deletes.insert(id);
    }

    /// Make every later delete of character `id` fail with a storage error.
    pub async fn fail_character_delete(&self, id: DbId) {
        self.inner.write().await.failing_character_deletes.insert(id);
    }

    /// Switch the whole store off (or back on). While off, every operation
    /// fails with [`DbError::Unavailable`].
    pub async fn set_unavailable(&self, unavailable: bool) {
        self.inner.write().await.unavailable = unavailable;
    }

    /// Every mutating call received so far, oldest first.
    pub async fn journal(&self) -> Vec<Mutation> {
        self.inner.read().await.journal.clone()
    }
}

#[async_trait]
impl CharacterRepository for MemoryStore {
    async fn get(&self, id: DbId) -> DbResult<Option<Character>> {
        let inner = self.inner.read().await;
        inner.check_available()?;
        Ok(inner.characters.get(&id).cloned())
    }

    async fn get_all(&self) -> DbResult<Vec<Character>> {
        let inner = self.inner.read().await;
        inner.check_available()?;
        Ok(inner.characters.values().cloned().collect())
    }

    async fn save(&self, cmd: &CharacterCommand) -> DbResult<Character> {
        let mut inner = self.inner.write().await;
        inner.journal.push(Mutation::SaveCharacter);
        inner.check_available()?;

        inner.last_character_id += 1;
        let id = inner.last_character_id;
        let now = timestamps::now();
        let character = Character {
            id,
            name: cmd.name.clone(),
            date_created: now,
            last_updated: now,
        };
        inner.characters.insert(id, character.clone());
        Ok(character)
    }

    async fn update(&self, id: DbId, cmd: &CharacterCommand) -> DbResult<Option<Character>> {
        let mut inner = self.inner.write().await;
        inner.journal.push(Mutation::UpdateCharacter(id));
        inner.check_available()?;

        let Some(character) = inner.characters.get_mut(&id) else {
            return Ok(None);
        };
        character.name = cmd.name.clone();
        character.last_updated = timestamps::touch(character.last_updated);
        Ok(Some(character.clone()))
    }

    async fn delete(&self, id: DbId) -> DbResult<bool> {
        let mut inner = self.inner.write().await;
        inner.journal.push(Mutation::DeleteCharacter(id));
        inner.check_available()?;

        if inner.phrases.values().any(|p| p.character_id == id) {
            return Err(DbError::Constraint("fk_phrases_character".into()));
        }
        if inner.failing_character_deletes.contains(&id) {
            return Err(DbError::Unavailable(format!("delete of character {id} rejected")));
        }
        Ok(inner.characters.remove(&id).is_some())
    }
}

#[async_trait]
impl PhraseRepository for MemoryStore {
    async fn get(&self, character_id: DbId, id: DbId) -> DbResult<Option<Phrase>> {
        let inner = self.inner.read().await;
        inner.check_available()?;
        inner.phrase_for(character_id, id)
    }

    async fn get_all_for_character(&self, character_id: DbId) -> DbResult<Vec<Phrase>> {
        let inner = self.inner.read().await;
        inner.check_available()?;
        Ok(inner
            .phrases
            .values()
            .filter(|p| p.character_id == character_id)
            .cloned()
            .collect())
    }

    async fn save(&self, cmd: &PhraseCommand) -> DbResult<Phrase> {
        let mut inner = self.inner.write().await;
        inner.journal.push(Mutation::SavePhrase {
            character_id: cmd.character_id,
        });
        inner.check_available()?;

        if !inner.characters.contains_key(&cmd.character_id) {
            return Err(DbError::Constraint("fk_phrases_character".into()));
        }
        inner.last_phrase_id += 1;
        let now = timestamps::now();
        let phrase = Phrase {
            id: inner.last_phrase_id,
            character_id: cmd.character_id,
            content: cmd.content.clone(),
            date_created: now,
            last_updated: now,
        };
        inner.phrases.insert(phrase.id, phrase.clone());
        Ok(phrase)
    }

    async fn delete(&self, character_id: DbId, id: DbId) -> DbResult<bool> {
        let mut inner = self.inner.write().await;
        inner.journal.push(Mutation::DeletePhrase { character_id, id });
        inner.check_available()?;

        if inner.phrase_for(character_id, id)?.is_none() {
            return Ok(false);
        }
        if inner.failing_phrase_deletes.contains(&id) {
            return Err(DbError::Unavailable(format!("delete of phrase {id} rejected")));
        }
        Ok(inner.phrases.remove(&id).is_some())
    }
}

#[async_trait]
impl StoreHealth for MemoryStore {
    async fn ping(&self) -> DbResult<()> {
        self.inner.read().await.check_available()
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn character_cmd(name: &str) -> CharacterCommand {
        CharacterCommand { name: name.into() }
    }

    fn phrase_cmd(character_id: DbId, content: &str) -> PhraseCommand {
        PhraseCommand {
            character_id,
            content: content.into(),
        }
    }

    #[tokio::test]
    async fn save_then_get_round_trips() {
        let store = MemoryStore::new();
        let saved = CharacterRepository::save(&store, &character_cmd("Comandante Fort"))
            .await
            .unwrap();

        assert!(saved.id > 0);
        assert_eq!(saved.date_created, saved.last_updated);

        let found = CharacterRepository::get(&store, saved.id).await.unwrap();
        assert_eq!(found, Some(saved));
    }

    #[tokio::test]
    async fn update_missing_character_changes_nothing() {
        let store = MemoryStore::new();
        let saved = CharacterRepository::save(&store, &character_cmd("Fort"))
            .await
            .unwrap();

        let result = store.update(saved.id + 1, &character_cmd("Other")).await.unwrap();

        assert_eq!(result, None);
        assert_eq!(store.get_all().await.unwrap(), vec![saved]);
    }

    #[tokio::test]
    async fn update_renames_and_moves_last_updated_forward() {
        let store = MemoryStore::new();
        let saved = CharacterRepository::save(&store, &character_cmd("Fort"))
            .await
            .unwrap();

        let updated = store
            .update(saved.id, &character_cmd("Ricardo Fort"))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, saved.id);
        assert_eq!(updated.name, "Ricardo Fort");
        assert_eq!(updated.date_created, saved.date_created);
        assert!(updated.last_updated > saved.last_updated);
    }

    #[tokio::test]
    async fn deleting_absent_rows_succeeds() {
        let store = MemoryStore::new();
        assert!(!CharacterRepository::delete(&store, 42).await.unwrap());
        assert!(!PhraseRepository::delete(&store, 1, 42).await.unwrap());
    }

    #[tokio::test]
    async fn saved_characters_get_distinct_increasing_ids() {
        let store = MemoryStore::new();
        let first = CharacterRepository::save(&store, &character_cmd("Fort"))
            .await
            .unwrap();
        let second = CharacterRepository::save(&store, &character_cmd("Fort"))
            .await
            .unwrap();

        assert!(second.id > first.id);
        assert_eq!(store.get_all().await.unwrap(), vec![first, second]);
    }

    #[tokio::test]
    async fn injected_character_delete_failure_keeps_the_row() {
        let store = MemoryStore::new();
        let ch = CharacterRepository::save(&store, &character_cmd("Fort"))
            .await
            .unwrap();
        store.fail_character_delete(ch.id).await;

        assert_matches!(
            CharacterRepository::delete(&store, ch.id).await,
            Err(DbError::Unavailable(_))
        );
        assert!(CharacterRepository::get(&store, ch.id).await.unwrap().is_some());
        assert_eq!(store.journal().await.last(), Some(&Mutation::DeleteCharacter(ch.id)));
    }

    #[tokio::test]
    async fn character_with_phrases_cannot_be_deleted() {
        let store = MemoryStore::new();
        let ch = CharacterRepository::save(&store, &character_cmd("Fort"))
            .await
            .unwrap();
        PhraseRepository::save(&store, &phrase_cmd(ch.id, "basta chicos"))
            .await
            .unwrap();

        assert_matches!(
            CharacterRepository::delete(&store, ch.id).await,
            Err(DbError::Constraint(_))
        );
        assert!(CharacterRepository::get(&store, ch.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn phrase_for_missing_character_is_rejected() {
        let store = MemoryStore::new();
        assert_matches!(
            PhraseRepository::save(&store, &phrase_cmd(9, "maiameeeeee")).await,
            Err(DbError::Constraint(_))
        );
    }

    #[tokio::test]
    async fn phrase_get_distinguishes_absent_from_foreign() {
        let store = MemoryStore::new();
        let owner = CharacterRepository::save(&store, &character_cmd("Owner"))
            .await
            .unwrap();
        let other = CharacterRepository::save(&store, &character_cmd("Other"))
            .await
            .unwrap();
        let phrase = PhraseRepository::save(&store, &phrase_cmd(owner.id, "basta chicos"))
            .await
            .unwrap();

        assert_eq!(
            PhraseRepository::get(&store, owner.id, phrase.id).await.unwrap(),
            Some(phrase.clone())
        );
        assert_matches!(
            PhraseRepository::get(&store, other.id, phrase.id).await,
            Err(DbError::OwnershipMismatch { phrase_id, character_id })
                if phrase_id == phrase.id && character_id == other.id
        );
        assert_eq!(
            PhraseRepository::get(&store, owner.id, phrase.id + 100)
                .await
                .unwrap(),
            None
        );
    }

    #[tokio::test]
    async fn phrase_delete_checks_ownership_first() {
        let store = MemoryStore::new();
        let owner = CharacterRepository::save(&store, &character_cmd("Owner"))
            .await
            .unwrap();
        let phrase = PhraseRepository::save(&store, &phrase_cmd(owner.id, "basta chicos"))
            .await
            .unwrap();

        assert_matches!(
            PhraseRepository::delete(&store, owner.id + 1, phrase.id).await,
            Err(DbError::OwnershipMismatch { .. })
        );
        assert!(PhraseRepository::delete(&store, owner.id, phrase.id)
            .await
            .unwrap());
        assert!(store.get_all_for_character(owner.id).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn injected_phrase_delete_failure_keeps_the_row() {
        let store = MemoryStore::new();
        let owner = CharacterRepository::save(&store, &character_cmd("Owner"))
            .await
            .unwrap();
        let phrase = PhraseRepository::save(&store, &phrase_cmd(owner.id, "basta chicos"))
            .await
            .unwrap();
        store.fail_phrase_delete(phrase.id).await;

        assert_matches!(
            PhraseRepository::delete(&store, owner.id, phrase.id).await,
            Err(DbError::Unavailable(_))
        );
        assert_eq!(store.get_all_for_character(owner.id).await.unwrap(), vec![phrase]);
    }

    #[tokio::test]
    async fn unavailable_store_fails_reads_and_records_writes() {
        let store = MemoryStore::new();
        store.set_unavailable(true).await;

        assert_matches!(store.get_all().await, Err(DbError::Unavailable(_)));
        assert_matches!(store.ping().await, Err(DbError::Unavailable(_)));
        assert_matches!(
            CharacterRepository::save(&store, &character_cmd("Fort")).await,
            Err(DbError::Unavailable(_))
        );
        assert_eq!(store.journal().await, vec![Mutation::SaveCharacter]);
    }
}
