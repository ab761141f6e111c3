use anyhow::{bail, Result};
use dashmap::DashMap;
use sled::Db;

use crate::ports::EmbeddingStore;

// ============================================================================
// MemoryEmbeddingStore - Fast in-memory storage using DashMap
// ============================================================================

/// In-memory embedding table. Concurrent reads are lock-free enough for
/// parallel batch encoding.
pub struct MemoryEmbeddingStore {
    word_size: usize,
    vectors: DashMap<String, Vec<f32>>,
}

impl MemoryEmbeddingStore {
    pub fn new(word_size: usize) -> Self {
        Self {
            word_size,
            vectors: DashMap::new(),
        }
    }

    /// Insert a token vector. Vectors whose width disagrees with the store
    /// dimensionality are rejected at write time.
    pub fn insert(&self, token: String, vector: Vec<f32>) -> Result<()> {
        if vector.len() != self.word_size {
            bail!(
                "vector for {:?} has {} dimensions, store expects {}",
                token,
                vector.len(),
                self.word_size
            );
        }
        self.vectors.insert(token, vector);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Snapshot of all entries, for serialization.
    pub fn entries(&self) -> Vec<(String, Vec<f32>)> {
        self.vectors
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }
}

impl EmbeddingStore for MemoryEmbeddingStore {
    fn vector(&self, key: &str) -> Option<Vec<f32>> {
        self.vectors.get(key).map(|r| r.clone())
    }

    fn vector_size(&self) -> usize {
        self.word_size
    }
}

// ============================================================================
// DiskEmbeddingStore - Scalable disk-based storage using sled
// ============================================================================

const META_WORD_SIZE_KEY: &[u8] = b"word_size";

/// Disk-backed embedding table for vocabularies that do not fit in memory.
/// Values are bincode-serialized `Vec<f32>`.
pub struct DiskEmbeddingStore {
    #[allow(dead_code)]
    db: Db,
    vectors_tree: sled::Tree,
    word_size: usize,
}

impl DiskEmbeddingStore {
    /// Open (or create) a store at `path`. An existing store must have
    /// been created with the same dimensionality.
    pub fn open(path: &str, word_size: usize) -> Result<Self> {
        let db = sled::open(path)?;
        let vectors_tree = db.open_tree("vectors")?;
        let meta_tree = db.open_tree("meta")?;

        match meta_tree.get(META_WORD_SIZE_KEY)? {
            Some(bytes) => {
                let stored: usize = bincode::deserialize(&bytes)?;
                if stored != word_size {
                    bail!(
                        "store at {} was created with word size {}, requested {}",
                        path,
                        stored,
                        word_size
                    );
                }
            }
            None => {
                meta_tree.insert(META_WORD_SIZE_KEY, bincode::serialize(&word_size)?)?;
            }
        }

        Ok(Self {
            db,
            vectors_tree,
            word_size,
        })
    }

    pub fn insert(&self, token: &str, vector: &[f32]) -> Result<()> {
        if vector.len() != self.word_size {
            bail!(
                "vector for {:?} has {} dimensions, store expects {}",
                token,
                vector.len(),
                self.word_size
            );
        }
        let bytes = bincode::serialize(vector)?;
        self.vectors_tree.insert(token.as_bytes(), bytes)?;
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.vectors_tree.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors_tree.is_empty()
    }
}

impl EmbeddingStore for DiskEmbeddingStore {
    fn vector(&self, key: &str) -> Option<Vec<f32>> {
        self.vectors_tree
            .get(key.as_bytes())
            .ok()
            .flatten()
            .and_then(|bytes| bincode::deserialize(&bytes).ok())
    }

    fn vector_size(&self) -> usize {
        self.word_size
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
