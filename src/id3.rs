//! The ID3 decision tree:
//! entropy-based attribute selection over categorical attributes.

/// Entropy and information gain.
pub mod entropy;
/// Defines the ID3 learner and its builder.
pub mod builder;
/// Defines the classifier produced by `Id3`.
pub mod id3_classifier;
/// Grows the tree.
pub mod id3_algorithm;

/// Defines the inner representations of `Id3Classifier`.
pub mod node;
mod train_node;


pub use builder::{Id3Builder, Id3, Execution};
pub use id3_classifier::Id3Classifier;
pub use id3_algorithm::{build_tree, build_tree_par};
pub use entropy::{entropy, information_gain, best_attribute};
pub use node::{Node, Edge};
