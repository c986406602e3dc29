//! The files in `tree/` directory defines
//! the ID3 tree grower and the learned tree.

/// Defines the builder of `Id3`.
pub mod builder;
/// Defines the ID3 algorithm.
pub mod id3;
/// Defines the tree produced by `Id3`.
pub mod decision_tree;
/// Defines the box-drawing renderer.
pub mod render;

mod node;


pub use builder::Id3Builder;
pub use id3::Id3;
pub use decision_tree::DecisionTree;
pub use node::{Node, ActionLeaf};
pub use render::render;
