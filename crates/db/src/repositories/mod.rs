//! Repository layer.
//!
//! Each entity has an async repository trait so handlers can be wired to
//! either the PostgreSQL implementation ([`CharacterRepo`], [`PhraseRepo`]) or
//! the in-memory [`MemoryStore`]. Lookups return `Ok(None)` for absent rows;
//! deletes of absent rows succeed without touching anything.

use async_trait::async_trait;
use memequotes_core::types::DbId;

use crate::error::DbResult;
use crate::models::character::{Character, CharacterCommand};
use crate::models::phrase::{Phrase, PhraseCommand};

pub mod character_repo;
pub mod memory;
pub mod phrase_repo;

pub use character_repo::CharacterRepo;
pub use memory::MemoryStore;
pub use phrase_repo::PhraseRepo;

/// Persistence operations for characters.
#[async_trait]
pub trait CharacterRepository: Send + Sync + 'static {
    /// Find a character by id.
    async fn get(&self, id: DbId) -> DbResult<Option<Character>>;

    /// Every character, in storage order.
    async fn get_all(&self) -> DbResult<Vec<Character>>;

    /// Insert a new character, stamping both timestamps with the current time.
    async fn save(&self, cmd: &CharacterCommand) -> DbResult<Character>;

    /// Rename a character and refresh `last_updated`.
    ///
    /// Returns `None` (and changes nothing) if no character has this id.
    async fn update(&self, id: DbId, cmd: &CharacterCommand) -> DbResult<Option<Character>>;

    /// Physically delete a character. Returns `true` if a row was removed.
    ///
    /// Phrases are not touched: the store refuses to delete a character that
    /// still owns any, so callers remove them first.
    async fn delete(&self, id: DbId) -> DbResult<bool>;
}

/// Persistence operations for phrases, always addressed through their owner.
#[async_trait]
pub trait PhraseRepository: Send + Sync + 'static {
    /// Find a phrase by id and check it belongs to `character_id`.
    ///
    /// A phrase owned by another character yields
    /// [`DbError::OwnershipMismatch`](crate::DbError::OwnershipMismatch), not `None`.
    async fn get(&self, character_id: DbId, id: DbId) -> DbResult<Option<Phrase>>;

    /// All phrases owned by `character_id`, ordered by id.
    ///
    /// An empty result does not say whether the character exists.
    async fn get_all_for_character(&self, character_id: DbId) -> DbResult<Vec<Phrase>>;

    /// Insert a new phrase for `cmd.character_id`.
    async fn save(&self, cmd: &PhraseCommand) -> DbResult<Phrase>;

    /// Delete a phrase after resolving it through [`PhraseRepository::get`].
    ///
    /// Returns `true` if a row was removed.
    async fn delete(&self, character_id: DbId, id: DbId) -> DbResult<bool>;
}

/// Liveness probe for whatever backs the repositories.
#[async_trait]
pub trait StoreHealth: Send + Sync + 'static {
    async fn ping(&self) -> DbResult<()>;
}
