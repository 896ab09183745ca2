use std::sync::Arc;

use memequotes_db::repositories::{
    CharacterRepo, CharacterRepository, MemoryStore, PhraseRepo, PhraseRepository, StoreHealth,
};
use memequotes_db::DbPool;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Repositories are injected as trait objects so the same handlers run
/// against PostgreSQL in production and against [`MemoryStore`] in tests.
/// Cheaply cloneable: every field is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub characters: Arc<dyn CharacterRepository>,
    pub phrases: Arc<dyn PhraseRepository>,
    /// Probe used by `/health`.
    pub store_health: Arc<dyn StoreHealth>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// State backed by PostgreSQL repositories sharing one pool.
    pub fn postgres(pool: DbPool, config: ServerConfig) -> Self {
        let characters = Arc::new(CharacterRepo::new(pool.clone()));
        Self {
            characters: characters.clone(),
            phrases: Arc::new(PhraseRepo::new(pool)),
            store_health: characters,
            config: Arc::new(config),
        }
    }

    /// State backed by a single in-memory store.
    pub fn in_memory(store: Arc<MemoryStore>, config: ServerConfig) -> Self {
        Self {
            characters: store.clone(),
            phrases: store.clone(),
            store_health: store,
            config: Arc::new(config),
        }
    }
}
