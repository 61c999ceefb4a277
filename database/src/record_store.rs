//! Append/list persistence over the `games` and `scores` collections.
//!
//! Each collection is one JSON array stored under its key. An append reads the
//! whole array, pushes the new record and writes the whole array back, so the
//! cost of every append grows with the collection's history.
//!
//! The read-modify-write is not atomic at the store level. Two appends to the
//! same key that interleave between the read and the write lose one of the two
//! records, last writer wins. [`RecordStore::new`] closes that window within a
//! process by holding a per-key lock for the whole read-modify-write;
//! [`RecordStore::unsynchronized`] leaves it open. Neither protects against a
//! second process writing the same store.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::Mutex;
use types::{Game, GameId, Score};

use crate::models::{GameRecord, ScoreRecord};
use crate::{KeyValueStore, StorageError};

pub const GAMES_KEY: &str = "games";
pub const SCORES_KEY: &str = "scores";

struct CollectionLocks {
    games: Mutex<()>,
    scores: Mutex<()>,
}

pub struct RecordStore<S> {
    store: S,
    locks: Option<CollectionLocks>,
}

impl<S: KeyValueStore> RecordStore<S> {
    /// Appends to the same collection run one at a time.
    pub fn new(store: S) -> Self {
        Self {
            store,
            locks: Some(CollectionLocks {
                games: Mutex::new(()),
                scores: Mutex::new(()),
            }),
        }
    }

    /// Appends race freely; concurrent appends to one key can drop records.
    pub fn unsynchronized(store: S) -> Self {
        Self { store, locks: None }
    }

    pub async fn append_game(&self, game: &Game) -> Result<(), StorageError> {
        self.append_record(GAMES_KEY, GameRecord::from(game)).await
    }

    pub async fn append_score(&self, score: &Score) -> Result<(), StorageError> {
        self.append_record(SCORES_KEY, ScoreRecord::from(score)).await
    }

    /// All games in write order. A corrupt collection reads as empty.
    pub async fn list_games(&self) -> Result<Vec<Game>, StorageError> {
        let records: Vec<GameRecord> = self.load_collection(GAMES_KEY).await?;
        Ok(records.into_iter().map(Game::from).collect())
    }

    /// All scores in write order. A corrupt collection reads as empty.
    pub async fn list_scores(&self) -> Result<Vec<Score>, StorageError> {
        let records: Vec<ScoreRecord> = self.load_collection(SCORES_KEY).await?;
        Ok(records.into_iter().map(Score::from).collect())
    }

    pub async fn find_game(&self, id: &GameId) -> Result<Option<Game>, StorageError> {
        Ok(self
            .list_games()
            .await?
            .into_iter()
            .find(|game| &game.id == id))
    }

    pub async fn scores_for(&self, id: &GameId) -> Result<Vec<Score>, StorageError> {
        Ok(self
            .list_scores()
            .await?
            .into_iter()
            .filter(|score| &score.game_id == id)
            .collect())
    }

    fn lock_for(&self, key: &str) -> Option<&Mutex<()>> {
        let locks = self.locks.as_ref()?;
        match key {
            GAMES_KEY => Some(&locks.games),
            SCORES_KEY => Some(&locks.scores),
            _ => None,
        }
    }

    async fn append_record<R>(&self, key: &str, record: R) -> Result<(), StorageError>
    where
        R: Serialize + DeserializeOwned,
    {
        let _guard = match self.lock_for(key) {
            Some(lock) => Some(lock.lock().await),
            None => None,
        };

        // a corrupt blob is replaced by a collection holding only the new record
        let mut records: Vec<R> = self.load_collection(key).await?;
        records.push(record);
        let bytes = serde_json::to_vec(&records)?;
        self.store.set(key, bytes).await.map_err(|e| {
            tracing::error!(key, error = %e, "failed to write collection");
            e
        })?;

        tracing::debug!(key, count = records.len(), "appended record");
        Ok(())
    }

    async fn load_collection<R: DeserializeOwned>(&self, key: &str) -> Result<Vec<R>, StorageError> {
        match self.read_collection(key).await {
            Ok(records) => Ok(records),
            Err(StorageError::Corruption { key, source }) => {
                tracing::warn!(key = %key, error = %source, "corrupt collection, treating as empty");
                Ok(Vec::new())
            }
            Err(e) => {
                tracing::error!(key, error = %e, "failed to read collection");
                Err(e)
            }
        }
    }

    /// Strict read: absent key is empty, undecodable bytes are `Corruption`.
    async fn read_collection<R: DeserializeOwned>(&self, key: &str) -> Result<Vec<R>, StorageError> {
        let Some(bytes) = self.store.get(key).await? else {
            return Ok(Vec::new());
        };
        serde_json::from_slice(&bytes).map_err(|source| StorageError::Corruption {
            key: key.to_string(),
            source,
        })
    }
}
