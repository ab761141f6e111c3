// Domain model for TreeVec: the syntax tree, its traversals, and the
// anonymize -> linearize -> encode pipeline stages.

pub mod anonymize;
pub mod encode;
pub mod error;
pub mod kind;
pub mod linearize;
pub mod tree;
