//! Helpers shared by the integration tests.
#![allow(dead_code)]

use id3tree::prelude::*;


/// The behavior log used across the integration tests.
pub const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/data/behavior.txt");


/// Reads [`FIXTURE`].
pub fn fixture() -> Dataset {
    DatasetReader::new()
        .file(FIXTURE)
        .read()
        .unwrap()
}
