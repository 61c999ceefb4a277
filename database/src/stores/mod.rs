pub mod file;
pub mod memory;
pub mod noop;
pub mod sqlite;
pub mod traits;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use noop::NoopStore;
pub use sqlite::SqliteStore;
pub use traits::KeyValueStore;
