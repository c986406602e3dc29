//! Defines the tree produced by `Id3`.
use rand::Rng;

use std::fmt;
use std::fs::File;
use std::io::{self, prelude::*};
use std::path::Path;

use crate::sample::{Action, Dataset, Observation};
use super::node::{Node, ActionLeaf};
use super::render::render;


/// A learned decision tree.
/// This struct is just a wrapper of the root [`Node`].
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionTree {
    root: Node,
}


impl From<Node> for DecisionTree {
    #[inline]
    fn from(root: Node) -> Self {
        Self { root }
    }
}


impl DecisionTree {
    /// Returns the root node.
    #[inline]
    pub fn root(&self) -> &Node {
        &self.root
    }


    /// Number of decision levels. A single leaf has depth `0`.
    #[inline]
    pub fn depth(&self) -> usize {
        self.root.depth()
    }


    /// Number of action leaves.
    #[inline]
    pub fn n_leaves(&self) -> usize {
        self.root.n_leaves()
    }


    /// Number of decision nodes.
    /// A full binary tree has one less decision node than leaves.
    #[inline]
    pub fn n_decisions(&self) -> usize {
        self.n_leaves() - 1
    }


    /// Returns the leaf reached by `observation`.
    #[inline]
    pub fn leaf_for<O>(&self, observation: &O) -> &ActionLeaf
        where O: Observation + ?Sized,
    {
        self.root.leaf_for(observation)
    }


    /// Returns the most probable action for `observation`.
    #[inline]
    pub fn predict<O>(&self, observation: &O) -> Action
        where O: Observation + ?Sized,
    {
        self.leaf_for(observation).most_probable()
    }


    /// Predicts every record of `dataset`.
    pub fn predict_all(&self, dataset: &Dataset) -> Vec<Action> {
        dataset.records()
            .map(|record| self.predict(record))
            .collect()
    }


    /// Fraction of records whose action equals the prediction.
    /// An empty dataset yields `0`.
    pub fn accuracy(&self, dataset: &Dataset) -> f64 {
        if dataset.is_empty() { return 0f64; }

        let hits = dataset.records()
            .filter(|record| self.predict(*record) == record.action())
            .count();
        hits as f64 / dataset.size() as f64
    }


    /// Draws an action for `observation`
    /// from the probabilities of the reached leaf.
    pub fn decide<O, R>(&self, observation: &O, rng: &mut R) -> Action
        where O: Observation + ?Sized,
              R: Rng + ?Sized,
    {
        self.leaf_for(observation).sample(rng)
    }


    /// Returns the box-drawing diagram of this tree.
    #[inline]
    pub fn render(&self) -> String {
        render(&self.root)
    }


    /// Returns this tree in the Graphviz dot language.
    pub fn to_dot(&self) -> String {
        let info = self.root.to_dot_info(0).0;
        format!("graph DecisionTree {{\n{}}}\n", info.concat())
    }


    /// Write the current decision tree to dot file.
    /// Errors are prefixed with the file path.
    pub fn to_dot_file<P>(&self, path: P) -> io::Result<()>
        where P: AsRef<Path>
    {
        let path = path.as_ref();
        File::create(path)
            .and_then(|mut f| f.write_all(self.to_dot().as_bytes()))
            .map_err(|err| {
                io::Error::new(err.kind(), format!("{}: {err}", path.display()))
            })
    }
}


impl fmt::Display for DecisionTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}
