// Infrastructure adapters for TreeVec.

pub mod concurrency;
pub mod embedding_store;
pub mod table_loader;

pub use concurrency::init_thread_pool;
pub use embedding_store::{DiskEmbeddingStore, MemoryEmbeddingStore};
pub use table_loader::{load_json_table, load_snapshot, write_snapshot};
