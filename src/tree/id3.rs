use crate::common::LogBase;
use crate::learner::TreeLearner;
use crate::sample::Dataset;

use super::{
    node::{Node, ActionLeaf},
    decision_tree::DecisionTree,
};

use std::fmt;


/// The ID3 algorithm.
/// Given a [`Dataset`], [`Id3`] grows a [`DecisionTree`]
/// by repeatedly splitting on the attribute
/// with the largest information gain.
///
/// At every node, the following rules are tried in this order;
/// 1. No record reaches the node:
///     a uniformly random leaf over all actions.
/// 2. Every attribute was already tested on the path:
///     a leaf with the empirical action proportions.
/// 3. Every record has the same action:
///     a deterministic leaf for that action.
/// 4. Otherwise, split on [`Dataset::best_criteria`]
///     and grow the `false` and `true` subtrees.
///
/// Since each split consumes one of the four attributes,
/// the grown tree has at most four decision levels.
///
/// [`Id3`] is constructed by [`Id3Builder`](super::Id3Builder).
///
/// # Example
/// ```
/// use id3tree::prelude::*;
///
/// let dataset = Dataset::new([
///     Record::new(false, true,  false, false, Action::Chase),
///     Record::new(true,  false, false, false, Action::CollectCoin),
/// ]);
/// let tree = Id3Builder::new()
///     .build()
///     .produce(&dataset);
///
/// assert_eq!(tree.depth(), 1);
/// println!("{tree}");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Id3 {
    log_base: LogBase,
    parallel: bool,
}


impl Id3 {
    /// Initialize [`Id3`].
    /// This method is called only via `Id3Builder::build`.
    #[inline]
    pub(super) fn new(log_base: LogBase, parallel: bool) -> Self {
        Self { log_base, parallel }
    }


    fn grow(&self, dataset: &Dataset) -> Box<Node> {
        if dataset.is_empty() {
            log::trace!("empty partition, uniform leaf");
            return Box::new(Node::action(ActionLeaf::uniform()));
        }

        if dataset.is_exhausted() {
            log::trace!("no attribute left for {} records", dataset.size());
            let leaf = dataset.randomize_remaining_actions();
            return Box::new(Node::action(leaf));
        }

        if let Some(action) = dataset.shared_action() {
            log::trace!("pure partition of {} records: {action}", dataset.size());
            return Box::new(Node::action(ActionLeaf::deterministic(action)));
        }

        let attribute = dataset.best_criteria_with(self.log_base);
        let falses = dataset.filter(attribute, false);
        let trues = dataset.filter(attribute, true);

        if log::log_enabled!(log::Level::Debug) {
            log::debug!(
                "split on `{attribute}` (gain {:.5}): {} false / {} true",
                dataset.information_gain_with(attribute, self.log_base),
                falses.size(),
                trues.size(),
            );
        }

        let (false_child, true_child) = if self.parallel {
            rayon::join(|| self.grow(&falses), || self.grow(&trues))
        } else {
            (self.grow(&falses), self.grow(&trues))
        };

        Box::new(Node::decision(attribute, false_child, true_child))
    }
}


impl TreeLearner for Id3 {
    type Tree = DecisionTree;


    fn name(&self) -> &str {
        "ID3"
    }


    fn info(&self) -> Option<Vec<(&str, String)>> {
        let info = Vec::from([
            ("Log base", format!("{}", self.log_base)),
            ("Parallel", format!("{}", self.parallel)),
        ]);
        Some(info)
    }


    fn produce(&self, dataset: &Dataset) -> Self::Tree {
        let root = self.grow(dataset);
        let tree = DecisionTree::from(*root);

        log::info!(
            "grew a tree of depth {} with {} leaves from {} records",
            tree.depth(),
            tree.n_leaves(),
            dataset.size(),
        );
        tree
    }
}


impl fmt::Display for Id3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "\
            ----------\n\
            # ID3 Tree Learner\n\n\
            - Log base: {}\n\
            - Parallel: {}\n\
            ----------\
            ",
            self.log_base,
            self.parallel,
        )
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::sample::{Action, Attribute, Record};
    use crate::tree::Id3Builder;

    #[test]
    fn test_exhausted_empty_dataset_is_uniform() {
        // An empty partition wins over an exhausted attribute set.
        let dataset = Dataset::from_parts([], Attribute::ALL);
        let tree = Id3Builder::new().build().produce(&dataset);
        assert_eq!(tree.root(), &Node::action(ActionLeaf::uniform()));
    }

    #[test]
    fn test_pure_partition_is_not_split() {
        let dataset = Dataset::new([
            Record::new(true,  false, true,  false, Action::RoamRoom),
            Record::new(false, true,  false, true,  Action::RoamRoom),
        ]);
        let tree = Id3Builder::new().build().produce(&dataset);
        assert_eq!(
            tree.root(),
            &Node::action(ActionLeaf::deterministic(Action::RoamRoom))
        );
    }

    #[test]
    fn test_info() {
        let learner = Id3Builder::new().parallel(true).build();
        let info = learner.info().unwrap();
        assert_eq!(info[0], ("Log base", "10".to_string()));
        assert_eq!(info[1], ("Parallel", "true".to_string()));
    }

    #[test]
    fn test_builder_uses_default_base() {
        let learner = Id3Builder::new().build();
        let info = learner.info().unwrap();
        assert_eq!(info[0], ("Log base", LogBase::default().to_string()));
    }
}
