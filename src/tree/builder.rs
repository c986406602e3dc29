use crate::common::LogBase;
use super::id3::Id3;


/// A struct that builds [`Id3`].
/// `Id3Builder` keeps parameters for constructing `Id3`.
///
/// # Example
///
/// ```
/// use id3tree::prelude::*;
///
/// let learner = Id3Builder::new()
///     .log_base(LogBase::Two)
///     .parallel(true)
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct Id3Builder {
    log_base: LogBase,
    parallel: bool,
}


impl Id3Builder {
    /// Construct a new instance of [`Id3Builder`].
    /// By default, [`Id3Builder`] sets the parameters as follows;
    /// ```text
    /// log_base: LogBase::default() == LogBase::Ten,
    /// parallel: false,
    /// ```
    pub fn new() -> Self {
        Self { log_base: LogBase::default(), parallel: false, }
    }


    /// Set the base of the logarithm used in entropy computations.
    /// The grown tree does not depend on this choice.
    #[inline]
    pub fn log_base(mut self, log_base: LogBase) -> Self {
        self.log_base = log_base;
        self
    }


    /// Grow the two subtrees of each decision node in parallel.
    /// Default is `false`.
    #[inline]
    pub fn parallel(mut self, flag: bool) -> Self {
        self.parallel = flag;
        self
    }


    /// Build an [`Id3`].
    /// This method consumes `self`.
    pub fn build(self) -> Id3 {
        Id3::new(self.log_base, self.parallel)
    }
}


impl Default for Id3Builder {
    fn default() -> Self {
        Self::new()
    }
}
