// Application usecases for TreeVec.

use rayon::prelude::*;

use crate::domain::anonymize::standardize;
use crate::domain::encode::{pad, vectorize, EncodedSample};
use crate::domain::error::TreeError;
use crate::domain::linearize::tree_to_sequence;
use crate::domain::tree::{SyntaxTree, TraversalOrder};
use crate::ports::EmbeddingStore;

/// The encode usecase: standardize -> linearize -> vectorize -> pad.
pub struct EncodePipeline {
    pub order: TraversalOrder,
    pub max_length: usize,
}

impl EncodePipeline {
    pub fn new(order: TraversalOrder, max_length: usize) -> Self {
        Self { order, max_length }
    }

    /// Encode one tree into a fixed-shape sample.
    ///
    /// The tree is consumed: anonymization rewrites payloads in place and
    /// the tree is discarded after encoding. No state survives the call.
    pub fn encode(
        &self,
        mut tree: SyntaxTree,
        store: &dyn EmbeddingStore,
    ) -> Result<EncodedSample, TreeError> {
        standardize(&mut tree);
        let seq = tree_to_sequence(&tree, tree.root(), self.order)?;
        let matrix = vectorize(&tree, &seq, store);
        let (vectors, real_length) = pad(matrix, self.max_length, store.vector_size());
        Ok(EncodedSample {
            vectors,
            real_length,
        })
    }

    /// Encode a batch of independent trees in parallel.
    ///
    /// Each tree is confined to one worker; no coordination is needed.
    /// Output order matches input order.
    pub fn encode_batch(
        &self,
        trees: Vec<SyntaxTree>,
        store: &dyn EmbeddingStore,
    ) -> Result<Vec<EncodedSample>, TreeError> {
        trees
            .into_par_iter()
            .map(|tree| self.encode(tree, store))
            .collect()
    }
}
