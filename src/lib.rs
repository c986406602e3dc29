#![warn(missing_docs)]

//!
//! A crate that grows decision trees with the ID3 algorithm.
//!
//! The schema is closed: every record carries four binary attributes
//! and one of four actions.
//! A [`Dataset`] answers entropy / information gain queries
//! and partitions itself on an attribute,
//! and [`Id3`] recursively consumes it into a [`DecisionTree`]
//! whose leaves are probability distributions over actions.
//!
//! ```
//! use id3tree::prelude::*;
//!
//! let dataset = Dataset::new([
//!     Record::new(true,  true,  false, false, Action::Chase),
//!     Record::new(true,  false, false, false, Action::CollectCoin),
//!     Record::new(false, false, false, true,  Action::ChangeRoom),
//! ]);
//! let tree = Id3Builder::new().build().produce(&dataset);
//! println!("{tree}");
//! ```

pub mod common;
pub mod learner;
pub mod logging;
pub mod prelude;
pub mod sample;
pub mod tree;


pub use common::{DatasetError, LogBase, DEFAULT_LOG_BASE};
pub use learner::TreeLearner;
pub use sample::{Action, Attribute, Dataset, DatasetReader, Observation, Record};
pub use tree::{ActionLeaf, DecisionTree, Id3, Id3Builder, Node};
