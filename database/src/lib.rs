pub mod config;
pub mod error;
pub mod models;
pub mod record_store;
pub mod stores;

pub use config::{StoreConfig, StoreLocation, STORE_ENV_VAR};
pub use error::StorageError;
pub use models::{GameRecord, ScoreRecord};
pub use record_store::{RecordStore, GAMES_KEY, SCORES_KEY};
pub use stores::{FileStore, KeyValueStore, MemoryStore, NoopStore, SqliteStore};
