//! Precondition violations of the dataset queries.
use std::error::Error;
use std::fmt;


/// A query was issued against a dataset that cannot answer it.
/// The tree grower never triggers these;
/// they indicate a programming error on the caller's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetError {
    /// The query needs at least one record.
    EmptyDataset,
    /// Every attribute was already used for splitting on this path.
    NoRemainingAttributes,
}


impl fmt::Display for DatasetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDataset => {
                write!(f, "the dataset has no records")
            },
            Self::NoRemainingAttributes => {
                write!(f, "all attributes are already filtered on")
            },
        }
    }
}


impl Error for DatasetError {}
