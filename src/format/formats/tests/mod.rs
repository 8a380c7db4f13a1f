//! Unit tests for dataset format implementations.
//!
//! Each test builds a small dataset tree in a temporary folder and reads it
//! back through the parser, checking pairing, geometry and error reporting.

mod msra_td500_tests;

use std::path::Path;

use crate::error::DatasetError;
use crate::format::traits::{DatasetParser, LoadOptions};
use crate::model::Sample;

/// Write `content` to `root/rel`, creating folders.
pub(super) fn write(root: &Path, rel: &str, content: &str) {
    let path = root.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

/// Discover and read every subset with the given parser.
pub(super) fn read_all(
    parser: &dyn DatasetParser,
    root: &Path,
    options: &LoadOptions,
) -> Result<Vec<(String, Vec<Sample>)>, DatasetError> {
    parser
        .discover_subsets(root)?
        .into_iter()
        .map(|source| Ok((source.name.clone(), parser.read_subset(&source, options)?)))
        .collect()
}
