//! Sequence Encoding
//!
//! Maps a linearized node sequence to a dense numeric matrix through the
//! embedding store, then normalizes the matrix to a fixed number of rows.

use ndarray::{s, Array2};

use crate::domain::tree::{NodeId, SyntaxTree};
use crate::ports::EmbeddingStore;

/// A fixed-shape encoded tree.
///
/// `vectors` always has exactly `max_length` rows; `real_length` counts
/// the rows that came from actual nodes rather than padding.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedSample {
    pub vectors: Array2<f32>,
    pub real_length: usize,
}

/// Map each node in `seq` to its embedding row.
///
/// The lookup key is the node payload when non-empty, the kind tag
/// otherwise. A missing key, or a store handing back a vector whose width
/// disagrees with `vector_size()`, degrades to a zero row. Vocabulary gaps
/// must not abort the pipeline; they become neutral embeddings.
pub fn vectorize(tree: &SyntaxTree, seq: &[NodeId], store: &dyn EmbeddingStore) -> Array2<f32> {
    let word_size = store.vector_size();
    let mut matrix = Array2::zeros((seq.len(), word_size));
    for (row, &id) in seq.iter().enumerate() {
        let node = tree.node(id);
        let key = if node.data.is_empty() {
            node.kind.as_str()
        } else {
            node.data.as_str()
        };
        if let Some(vector) = store.vector(key) {
            if vector.len() == word_size {
                for (col, value) in vector.iter().enumerate() {
                    matrix[[row, col]] = *value;
                }
            }
        }
    }
    matrix
}

/// Normalize `matrix` to exactly `max_length` rows.
///
/// Shorter inputs are zero-padded (real length = input rows), longer ones
/// truncated to the first `max_length` rows (real length = `max_length`).
pub fn pad(matrix: Array2<f32>, max_length: usize, word_size: usize) -> (Array2<f32>, usize) {
    let rows = matrix.nrows();
    let (out, real_length) = if rows < max_length {
        let mut padded = Array2::zeros((max_length, word_size));
        padded.slice_mut(s![..rows, ..]).assign(&matrix);
        (padded, rows)
    } else {
        (matrix.slice(s![..max_length, ..]).to_owned(), max_length)
    };
    // Shape violations here are implementation bugs, not runtime
    // conditions.
    assert_eq!(out.nrows(), max_length);
    assert_eq!(out.ncols(), word_size);
    (out, real_length)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::kind::AstKind;
    use crate::domain::tree::AstNode;
    use std::collections::HashMap;

    struct FixtureStore {
        word_size: usize,
        vectors: HashMap<String, Vec<f32>>,
    }

    impl FixtureStore {
        fn new(word_size: usize, entries: &[(&str, Vec<f32>)]) -> Self {
            Self {
                word_size,
                vectors: entries
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.clone()))
                    .collect(),
            }
        }
    }

    impl EmbeddingStore for FixtureStore {
        fn vector(&self, key: &str) -> Option<Vec<f32>> {
            self.vectors.get(key).cloned()
        }

        fn vector_size(&self) -> usize {
            self.word_size
        }
    }

    fn chain_tree() -> (SyntaxTree, Vec<NodeId>) {
        let mut tree = SyntaxTree::new();
        let root = tree.add_node(AstNode::new("0", "x", AstKind::VarDecl));
        let lit = tree.add_node(AstNode::new("1", "", AstKind::IntegerLiteral));
        tree.attach(root, lit).unwrap();
        (tree, vec![root, lit])
    }

    #[test]
    fn test_vectorize_keys_on_payload_then_kind() {
        let (tree, seq) = chain_tree();
        let store = FixtureStore::new(2, &[
            ("x", vec![1.0, 2.0]),
            ("INTEGER_LITERAL", vec![3.0, 4.0]),
        ]);

        let matrix = vectorize(&tree, &seq, &store);
        assert_eq!(matrix.nrows(), 2);
        assert_eq!(matrix.row(0).to_vec(), vec![1.0, 2.0]);
        assert_eq!(matrix.row(1).to_vec(), vec![3.0, 4.0]);
    }

    #[test]
    fn test_vectorize_missing_key_becomes_zero_row() {
        let (tree, seq) = chain_tree();
        // Neither "x" nor the literal's kind tag is in the vocabulary.
        let store = FixtureStore::new(3, &[]);

        let matrix = vectorize(&tree, &seq, &store);
        assert_eq!(matrix.nrows(), 2);
        assert!(matrix.iter().all(|v| *v == 0.0));
    }

    #[test]
    fn test_vectorize_wrong_width_vector_becomes_zero_row() {
        let (tree, seq) = chain_tree();
        let store = FixtureStore::new(2, &[("x", vec![1.0, 2.0, 3.0])]);

        let matrix = vectorize(&tree, &seq, &store);
        assert_eq!(matrix.row(0).to_vec(), vec![0.0, 0.0]);
    }

    #[test]
    fn test_pad_shorter_input_zero_fills() {
        let matrix = Array2::from_shape_vec((3, 4), vec![1.0; 12]).unwrap();
        let (padded, real_length) = pad(matrix, 5, 4);

        assert_eq!(padded.nrows(), 5);
        assert_eq!(padded.ncols(), 4);
        assert_eq!(real_length, 3);
        assert!(padded.slice(s![3.., ..]).iter().all(|v| *v == 0.0));
        assert!(padded.slice(s![..3, ..]).iter().all(|v| *v == 1.0));
    }

    #[test]
    fn test_pad_longer_input_truncates() {
        let values: Vec<f32> = (0..35).map(|v| v as f32).collect();
        let matrix = Array2::from_shape_vec((7, 5), values).unwrap();
        let (padded, real_length) = pad(matrix.clone(), 5, 5);

        assert_eq!(padded.nrows(), 5);
        assert_eq!(real_length, 5);
        assert_eq!(padded, matrix.slice(s![..5, ..]).to_owned());
    }

    #[test]
    fn test_pad_exact_length_is_identity() {
        let matrix = Array2::from_shape_vec((4, 2), vec![2.0; 8]).unwrap();
        let (padded, real_length) = pad(matrix.clone(), 4, 2);

        assert_eq!(padded, matrix);
        assert_eq!(real_length, 4);
    }

    #[test]
    fn test_pad_empty_input() {
        let matrix = Array2::zeros((0, 3));
        let (padded, real_length) = pad(matrix, 2, 3);

        assert_eq!(padded.nrows(), 2);
        assert_eq!(padded.ncols(), 3);
        assert_eq!(real_length, 0);
    }
}
