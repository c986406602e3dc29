//! Exports the standard types and traits.
//!
pub use crate::sample::{
    Action,
    Attribute,
    Dataset,
    DatasetReader,
    Observation,
    Record,
};


pub use crate::tree::{
    ActionLeaf,
    DecisionTree,
    Id3,
    Id3Builder,
    Node,
};


pub use crate::common::{
    DatasetError,
    LogBase,
};


pub use crate::learner::TreeLearner;
