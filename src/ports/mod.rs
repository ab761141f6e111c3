// Ports: capability seams the pipeline depends on.

/// Lookup capability mapping a token to a fixed-size embedding vector.
///
/// The pipeline only ever reads; implementations must be thread-safe for
/// reads (`Send + Sync`) so independent trees can encode concurrently.
/// Lookup failure is expressed as `None`, never as a panic; the encoder
/// degrades missing vocabulary to zero vectors.
pub trait EmbeddingStore: Send + Sync {
    /// The embedding for `key`, if the vocabulary contains it.
    fn vector(&self, key: &str) -> Option<Vec<f32>>;

    /// Dimensionality of every vector in the store.
    fn vector_size(&self) -> usize;
}
