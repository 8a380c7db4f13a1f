//! Browsing state over an opened dataset.
//!
//! [`NavigationState`] keeps a circular [`SubsetCursor`] for every non-empty
//! subset and remembers which subset is selected. Each cursor keeps its own
//! position, so switching subsets and back returns to the same sample.

use crate::dataset::Dataset;
use crate::error::DatasetError;
use crate::model::{Annotation, Sample};

/// Circular cursor over one subset's samples.
///
/// The subset is never empty, so `current_index` is always valid.
#[derive(Debug, Clone)]
pub struct SubsetCursor {
    name: String,
    samples: Vec<Sample>,
    current_index: usize,
}

impl SubsetCursor {
    /// Create a cursor at the first sample. Returns `None` for an empty subset.
    pub fn new(name: impl Into<String>, samples: Vec<Sample>) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        Some(Self {
            name: name.into(),
            samples,
            current_index: 0,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Sample> {
        self.samples.get(index)
    }

    /// Advance one sample, wrapping from last to first.
    pub fn next(&mut self) -> &Sample {
        self.current_index = (self.current_index + 1) % self.samples.len();
        &self.samples[self.current_index]
    }

    /// Step back one sample, wrapping from first to last.
    pub fn previous(&mut self) -> &Sample {
        self.current_index = if self.current_index == 0 {
            self.samples.len() - 1
        } else {
            self.current_index - 1
        };
        &self.samples[self.current_index]
    }

    /// Jump to `index`. Out-of-range indices are rejected and the cursor
    /// stays where it was.
    pub fn set_index(&mut self, index: usize) -> Result<(), DatasetError> {
        if index >= self.samples.len() {
            return Err(DatasetError::IndexOutOfRange {
                index,
                len: self.samples.len(),
            });
        }
        self.current_index = index;
        Ok(())
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current(&self) -> &Sample {
        &self.samples[self.current_index]
    }

    pub fn current_mut(&mut self) -> &mut Sample {
        &mut self.samples[self.current_index]
    }

    /// Position string like "3/15".
    pub fn progress(&self) -> String {
        format!("{}/{}", self.current_index + 1, self.samples.len())
    }
}

/// Which subset and sample the viewer is showing.
#[derive(Debug, Clone)]
pub struct NavigationState {
    cursors: Vec<SubsetCursor>,
    current: usize,
}

impl NavigationState {
    /// Wrap a dataset. The first non-empty subset in the dataset's order
    /// (`train` before `test`) is selected.
    pub fn new(dataset: Dataset) -> Result<Self, DatasetError> {
        let root = dataset.root().to_path_buf();
        let cursors: Vec<SubsetCursor> = dataset
            .into_subsets()
            .into_iter()
            .filter_map(|(name, samples)| SubsetCursor::new(name, samples))
            .collect();

        if cursors.is_empty() {
            return Err(DatasetError::EmptyDataset { root });
        }
        log::debug!("Navigation starts in subset '{}'", cursors[0].name());

        Ok(Self {
            cursors,
            current: 0,
        })
    }

    /// Names of the selectable (non-empty) subsets.
    pub fn available_subsets(&self) -> Vec<&str> {
        self.cursors.iter().map(SubsetCursor::name).collect()
    }

    pub fn current_subset_name(&self) -> &str {
        self.cursors[self.current].name()
    }

    /// Select a subset by name.
    pub fn set_current_subset(&mut self, name: &str) -> Result<(), DatasetError> {
        let index = self
            .cursors
            .iter()
            .position(|c| c.name() == name)
            .ok_or_else(|| DatasetError::InvalidSubset {
                name: name.to_string(),
                available: self
                    .available_subsets()
                    .into_iter()
                    .map(String::from)
                    .collect(),
            })?;
        self.current = index;
        log::debug!("Switched to subset '{}'", name);
        Ok(())
    }

    pub fn current_subset(&self) -> &SubsetCursor {
        &self.cursors[self.current]
    }

    pub fn current_subset_mut(&mut self) -> &mut SubsetCursor {
        &mut self.cursors[self.current]
    }

    pub fn subset(&self, name: &str) -> Option<&SubsetCursor> {
        self.cursors.iter().find(|c| c.name() == name)
    }

    pub fn next_sample(&mut self) -> &Sample {
        self.current_subset_mut().next()
    }

    pub fn previous_sample(&mut self) -> &Sample {
        self.current_subset_mut().previous()
    }

    pub fn current_sample(&self) -> &Sample {
        self.current_subset().current()
    }

    pub fn current_sample_mut(&mut self) -> &mut Sample {
        self.current_subset_mut().current_mut()
    }

    pub fn current_index(&self) -> usize {
        self.current_subset().current_index()
    }

    /// Jump within the current subset.
    pub fn set_current_index(&mut self, index: usize) -> Result<(), DatasetError> {
        self.current_subset_mut().set_index(index)
    }

    /// Persist an edited annotation into the current sample.
    pub fn replace_annotation(
        &mut self,
        index: usize,
        annotation: Annotation,
    ) -> Result<Annotation, DatasetError> {
        self.current_sample_mut().replace_at(index, annotation)
    }
}
