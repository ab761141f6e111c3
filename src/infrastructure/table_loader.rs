/// Embedding Table Loaders
///
/// Two on-disk table formats:
/// - JSON: `{ "token": [0.1, ...], ... }` - human-editable, slow to load
/// - snapshot: a bincode blob of `(word_size, entries)`, read through a
///   memory map so large tables avoid a second in-memory copy during
///   deserialization
///
/// Table construction/training is external; these loaders only rebuild a
/// store from a table that already exists.

use std::collections::HashMap;
use std::fs::{self, File};
use std::path::Path;

use anyhow::{Context, Result};
use memmap2::Mmap;

use super::embedding_store::MemoryEmbeddingStore;

/// Load a JSON table into an in-memory store.
///
/// The word size is taken from the first entry; empty tables are refused
/// because the dimensionality would be undefined.
pub fn load_json_table(path: &Path) -> Result<MemoryEmbeddingStore> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read embedding table {}", path.display()))?;
    let raw: HashMap<String, Vec<f32>> =
        serde_json::from_str(&contents).context("Malformed embedding table JSON")?;

    let word_size = raw
        .values()
        .next()
        .map(|v| v.len())
        .context("Embedding table is empty")?;

    let store = MemoryEmbeddingStore::new(word_size);
    for (token, vector) in raw {
        store
            .insert(token.clone(), vector)
            .with_context(|| format!("Inconsistent table entry {:?}", token))?;
    }

    println!(
        "[Table] Loaded {} tokens from {} (word size {})",
        store.len(),
        path.display(),
        word_size
    );
    Ok(store)
}

/// Write a bincode snapshot of `store` to `path`.
pub fn write_snapshot(store: &MemoryEmbeddingStore, path: &Path) -> Result<()> {
    use crate::ports::EmbeddingStore;

    let payload = (store.vector_size(), store.entries());
    let bytes = bincode::serialize(&payload).context("Failed to serialize snapshot")?;
    fs::write(path, bytes)
        .with_context(|| format!("Failed to write snapshot {}", path.display()))?;
    Ok(())
}

/// Load a bincode snapshot through a memory map.
pub fn load_snapshot(path: &Path) -> Result<MemoryEmbeddingStore> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open snapshot {}", path.display()))?;
    // Safety: snapshots are written once and never mutated while mapped.
    let mmap = unsafe { Mmap::map(&file) }
        .with_context(|| format!("Failed to mmap snapshot {}", path.display()))?;

    let (word_size, entries): (usize, Vec<(String, Vec<f32>)>) =
        bincode::deserialize(&mmap[..]).context("Malformed snapshot")?;

    let store = MemoryEmbeddingStore::new(word_size);
    for (token, vector) in entries {
        store
            .insert(token.clone(), vector)
            .with_context(|| format!("Inconsistent snapshot entry {:?}", token))?;
    }

    println!(
        "[Table] Loaded {} tokens from snapshot {} (word size {})",
        store.len(),
        path.display(),
        word_size
    );
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::EmbeddingStore;
    use tempfile::tempdir;

    #[test]
    fn test_json_table_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("table.json");
        fs::write(&path, r#"{"x": [1.0, 2.0], "if": [0.5, 0.25]}"#).unwrap();

        let store = load_json_table(&path).unwrap();
        assert_eq!(store.vector_size(), 2);
        assert_eq!(store.vector("x"), Some(vec![1.0, 2.0]));
        assert_eq!(store.vector("if"), Some(vec![0.5, 0.25]));
        assert!(store.vector("else").is_none());
    }

    #[test]
    fn test_json_table_rejects_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.json");
        fs::write(&path, "{}").unwrap();

        assert!(load_json_table(&path).is_err());
    }

    #[test]
    fn test_json_table_rejects_ragged_rows() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ragged.json");
        fs::write(&path, r#"{"a": [1.0, 2.0], "b": [1.0]}"#).unwrap();

        // One of the two rows disagrees with whichever width is seen
        // first, so loading must fail either way.
        assert!(load_json_table(&path).is_err());
    }

    #[test]
    fn test_snapshot_round_trip_matches_source() {
        let dir = tempdir().unwrap();
        let source = MemoryEmbeddingStore::new(3);
        source.insert("foo".to_string(), vec![1.0, 2.0, 3.0]).unwrap();
        source.insert("bar".to_string(), vec![4.0, 5.0, 6.0]).unwrap();

        let path = dir.path().join("table.bin");
        write_snapshot(&source, &path).unwrap();
        let restored = load_snapshot(&path).unwrap();

        assert_eq!(restored.vector_size(), 3);
        assert_eq!(restored.len(), 2);
        for key in ["foo", "bar", "baz"] {
            assert_eq!(restored.vector(key), source.vector(key));
        }
    }
}
