//! Defines the inner representation
//! of the learned tree.
use rand::Rng;
use rand::distributions::{Distribution, WeightedIndex};

use std::collections::BTreeMap;

use crate::common::checker::check_distribution;
use crate::sample::{Action, Attribute, Observation};


/// Enumeration of decision nodes and action leaves.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A node that tests one attribute and has two children.
    Decision {
        /// The attribute tested at this node.
        attribute:   Attribute,
        /// The subtree for `attribute == false`.
        false_child: Box<Node>,
        /// The subtree for `attribute == true`.
        true_child:  Box<Node>,
    },
    /// A node that has no child.
    Action(ActionLeaf),
}


impl Node {
    /// Returns a decision node on `attribute`.
    #[inline]
    pub fn decision(
        attribute:   Attribute,
        false_child: Box<Node>,
        true_child:  Box<Node>,
    ) -> Self
    {
        Self::Decision { attribute, false_child, true_child, }
    }


    /// Returns an action leaf.
    #[inline]
    pub fn action(leaf: ActionLeaf) -> Self {
        Self::Action(leaf)
    }


    /// Returns `true` if this node tests an attribute.
    #[inline]
    pub fn is_decision(&self) -> bool {
        matches!(self, Self::Decision { .. })
    }


    /// Returns the tested attribute of a decision node.
    #[inline]
    pub fn attribute(&self) -> Option<Attribute> {
        match self {
            Self::Decision { attribute, .. } => Some(*attribute),
            Self::Action(_) => None,
        }
    }


    /// Returns `(false_child, true_child)` of a decision node.
    #[inline]
    pub fn children(&self) -> Option<(&Node, &Node)> {
        match self {
            Self::Decision { false_child, true_child, .. } => {
                Some((false_child, true_child))
            },
            Self::Action(_) => None,
        }
    }


    /// Returns the leaf of an action node.
    #[inline]
    pub fn leaf(&self) -> Option<&ActionLeaf> {
        match self {
            Self::Decision { .. } => None,
            Self::Action(leaf) => Some(leaf),
        }
    }


    /// Number of decision levels below (and including) this node.
    /// A leaf has depth `0`.
    pub fn depth(&self) -> usize {
        match self {
            Self::Decision { false_child, true_child, .. } => {
                1 + false_child.depth().max(true_child.depth())
            },
            Self::Action(_) => 0,
        }
    }


    /// Number of action leaves in this subtree.
    pub fn n_leaves(&self) -> usize {
        match self {
            Self::Decision { false_child, true_child, .. } => {
                false_child.n_leaves() + true_child.n_leaves()
            },
            Self::Action(_) => 1,
        }
    }


    /// Walks down to the leaf reached by `observation`.
    pub fn leaf_for<O>(&self, observation: &O) -> &ActionLeaf
        where O: Observation + ?Sized,
    {
        match self {
            Self::Decision { attribute, false_child, true_child } => {
                if observation.value(*attribute) {
                    true_child.leaf_for(observation)
                } else {
                    false_child.leaf_for(observation)
                }
            },
            Self::Action(leaf) => leaf,
        }
    }


    pub(crate) fn to_dot_info(&self, id: usize) -> (Vec<String>, usize) {
        match self {
            Self::Decision { attribute, false_child, true_child } => {
                let decision = format!(
                    "\tnode_{id} [ label = \"{attribute} ?\" ];\n",
                );

                let false_id = id + 1;
                let (mut info, true_id) = false_child.to_dot_info(false_id);
                let (mut right, return_id) = true_child.to_dot_info(true_id);

                info.push(decision);
                info.append(&mut right);

                info.push(format!(
                    "\tnode_{id} -- node_{false_id} [ label = \"F\" ];\n",
                ));
                info.push(format!(
                    "\tnode_{id} -- node_{true_id} [ label = \"T\" ];\n",
                ));

                (info, return_id)
            },
            Self::Action(leaf) => {
                let info = format!(
                    "\tnode_{id} [ label = \"{leaf}\", shape = box ];\n",
                );

                (vec![info], id + 1)
            },
        }
    }
}


/// A probability distribution over actions.
/// Only actions with a positive probability are stored.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionLeaf {
    probabilities: BTreeMap<Action, f64>,
    randomized:    bool,
}


impl ActionLeaf {
    /// Every action with probability `0.25`.
    /// Used when no record reaches a node.
    pub fn uniform() -> Self {
        let p = 1f64 / Action::ALL.len() as f64;
        Self::from_proportions(Action::ALL.map(|action| (action, p)))
    }


    /// A single action with probability `1`.
    pub fn deterministic(action: Action) -> Self {
        Self::from_proportions([(action, 1f64)])
    }


    /// Builds a leaf from `(action, proportion)` pairs.
    /// Pairs with a zero proportion are dropped.
    /// The leaf is randomized iff more than one action remains.
    ///
    /// # Panics
    /// Panics if the remaining proportions do not sum to `1`.
    pub fn from_proportions<I>(proportions: I) -> Self
        where I: IntoIterator<Item = (Action, f64)>,
    {
        let probabilities = proportions.into_iter()
            .filter(|&(_, p)| p > 0f64)
            .collect::<BTreeMap<_, _>>();
        check_distribution(probabilities.values());

        let randomized = probabilities.len() > 1;
        Self { probabilities, randomized }
    }


    /// Returns the probability of `action` (`0` if absent).
    #[inline]
    pub fn probability(&self, action: Action) -> f64 {
        self.probabilities.get(&action)
            .copied()
            .unwrap_or(0f64)
    }


    /// Iterates over `(action, probability)` in [`Action::ALL`] order.
    pub fn actions(&self) -> impl Iterator<Item = (Action, f64)> + '_ {
        self.probabilities.iter().map(|(&action, &p)| (action, p))
    }


    /// Number of actions with a positive probability.
    #[inline]
    pub fn len(&self) -> usize {
        self.probabilities.len()
    }


    /// Companion of [`ActionLeaf::len`].
    /// A constructed leaf always holds an action, so this is `false`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.probabilities.is_empty()
    }


    /// Returns `true` if more than one action is possible.
    #[inline]
    pub fn is_randomized(&self) -> bool {
        self.randomized
    }


    /// The action with the largest probability.
    /// Ties go to the action listed first in [`Action::ALL`].
    pub fn most_probable(&self) -> Action {
        let mut best: Option<(Action, f64)> = None;
        for (action, p) in self.actions() {
            if best.map_or(true, |(_, q)| p > q) {
                best = Some((action, p));
            }
        }
        best.map(|(action, _)| action)
            .expect("An action leaf holds at least one action")
    }


    /// Draws an action according to the probabilities of this leaf.
    pub fn sample<R>(&self, rng: &mut R) -> Action
        where R: Rng + ?Sized,
    {
        if !self.randomized {
            return self.most_probable();
        }

        let (actions, weights): (Vec<_>, Vec<_>) = self.actions().unzip();
        let dist = WeightedIndex::new(&weights)
            .expect("Leaf probabilities are positive and sum to one");
        actions[dist.sample(rng)]
    }
}
