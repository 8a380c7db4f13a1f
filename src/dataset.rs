//! A dataset opened from disk: named subsets of samples.

use std::path::{Path, PathBuf};

use crate::error::DatasetError;
use crate::format::{DatasetFormat, LoadOptions, ParserRegistry};
use crate::model::Sample;

/// One dataset rooted at a folder.
///
/// Subsets keep the format's fixed order (`train`, then `test`). Their
/// membership and sample order do not change after [`Dataset::open`].
#[derive(Debug, Clone)]
pub struct Dataset {
    root: PathBuf,
    format: DatasetFormat,
    subsets: Vec<(String, Vec<Sample>)>,
}

impl Dataset {
    /// Open a dataset, choosing the format from the folder name or layout.
    pub fn open(root: impl AsRef<Path>) -> Result<Self, DatasetError> {
        Self::open_with(root, &LoadOptions::default())
    }

    /// Open a dataset with explicit load options.
    pub fn open_with(root: impl AsRef<Path>, options: &LoadOptions) -> Result<Self, DatasetError> {
        let root = root.as_ref();
        check_root(root)?;
        let format = ParserRegistry::new().detect(root)?;
        Self::open_as(root, format, options)
    }

    /// Open a dataset as a known format.
    pub fn open_as(
        root: impl AsRef<Path>,
        format: DatasetFormat,
        options: &LoadOptions,
    ) -> Result<Self, DatasetError> {
        let root = root.as_ref();
        check_root(root)?;

        let registry = ParserRegistry::new();
        let parser = registry
            .get(format)
            .ok_or_else(|| DatasetError::UnknownFormat {
                root: root.to_path_buf(),
            })?;

        log::info!("Opening {} dataset at {:?}", parser.display_name(), root);

        let mut subsets = Vec::new();
        for source in parser.discover_subsets(root)? {
            let samples = parser.read_subset(&source, options)?;
            log::info!("Subset '{}': {} samples", source.name, samples.len());
            subsets.push((source.name, samples));
        }

        Ok(Self {
            root: root.to_path_buf(),
            format,
            subsets,
        })
    }

    /// Build a dataset from already parsed subsets.
    pub fn from_subsets(
        root: impl Into<PathBuf>,
        format: DatasetFormat,
        subsets: Vec<(String, Vec<Sample>)>,
    ) -> Self {
        Self {
            root: root.into(),
            format,
            subsets,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn format(&self) -> DatasetFormat {
        self.format
    }

    /// Names of the subsets found on disk, including empty ones.
    pub fn subset_names(&self) -> Vec<&str> {
        self.subsets.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// Samples of a subset, if it exists.
    pub fn subset(&self, name: &str) -> Option<&[Sample]> {
        self.subsets
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, samples)| samples.as_slice())
    }

    /// Iterate `(name, samples)` in subset order.
    pub fn subsets(&self) -> impl Iterator<Item = (&str, &[Sample])> {
        self.subsets
            .iter()
            .map(|(name, samples)| (name.as_str(), samples.as_slice()))
    }

    /// Total number of samples over all subsets.
    pub fn len(&self) -> usize {
        self.subsets.iter().map(|(_, s)| s.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Take the subsets out, in order.
    pub fn into_subsets(self) -> Vec<(String, Vec<Sample>)> {
        self.subsets
    }
}

fn check_root(root: &Path) -> Result<(), DatasetError> {
    if root.is_dir() {
        Ok(())
    } else {
        Err(DatasetError::missing_resource(
            root,
            "dataset root folder does not exist",
        ))
    }
}
