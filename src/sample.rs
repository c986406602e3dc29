//! Defines the schema, records, and datasets.

/// Defines the attributes and actions.
pub mod attribute;
/// Defines a labeled record.
pub mod record;
/// Defines the dataset abstraction.
pub mod dataset;
/// Defines the reader of behavior logs.
pub mod reader;


pub use attribute::{Attribute, Action};
pub use record::{Record, Observation};
pub use dataset::Dataset;
pub use reader::DatasetReader;
