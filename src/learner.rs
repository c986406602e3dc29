//! Provides the `TreeLearner` trait.
use crate::sample::Dataset;


/// A trait that defines the behavor of a tree learner.
/// Given a dataset, a `TreeLearner` produces a tree.
pub trait TreeLearner {
    /// The tree produced by this learner.
    type Tree;


    /// Returns the name of this learner.
    fn name(&self) -> &str;


    /// Returns the parameters of this learner as `(name, value)` pairs.
    /// By default, returns `None`.
    fn info(&self) -> Option<Vec<(&str, String)>> {
        None
    }


    /// Grows a tree from `dataset`.
    fn produce(&self, dataset: &Dataset) -> Self::Tree;
}
