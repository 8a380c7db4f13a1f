//! Error types for dataset loading and navigation.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while opening, reading or browsing a dataset.
#[derive(Error, Debug)]
pub enum DatasetError {
    /// Malformed annotation record
    #[error("Parse error in {}: {message}", location(.path, .line))]
    Parse {
        /// File containing the bad record
        path: PathBuf,
        /// 1-based line number, when the format is line oriented
        line: Option<usize>,
        /// Description of the problem
        message: String,
    },

    /// A file or folder the layout requires is absent
    #[error("Missing resource {path:?}: {message}")]
    MissingResource {
        /// Path that was expected to exist
        path: PathBuf,
        /// What the path was needed for
        message: String,
    },

    /// No subset of the dataset contains any sample
    #[error("Dataset at {root:?} has no non-empty subset")]
    EmptyDataset {
        /// Root folder of the dataset
        root: PathBuf,
    },

    /// Requested subset is unknown or empty
    #[error("Invalid subset '{name}', available: {}", .available.join(", "))]
    InvalidSubset {
        /// Requested name
        name: String,
        /// Names that can be selected
        available: Vec<String>,
    },

    /// Cursor index outside the subset
    #[error("Sample index {index} out of range for subset of {len} samples")]
    IndexOutOfRange { index: usize, len: usize },

    /// Annotation index outside the sample's annotation list
    #[error("Annotation index {index} out of range for sample with {len} annotations")]
    AnnotationIndexOutOfRange { index: usize, len: usize },

    /// Folder matched none of the known dataset formats
    #[error("Could not determine dataset format of {root:?}")]
    UnknownFormat {
        /// Folder that was inspected
        root: PathBuf,
    },

    /// I/O error while reading the dataset
    #[error("IO error at {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Sample image does not exist
    #[error("Image not found: {path:?}")]
    ImageNotFound { path: PathBuf },

    /// Sample image exists but could not be decoded
    #[error("Failed to decode image {path:?}: {source}")]
    ImageDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

fn location(path: &Path, line: &Option<usize>) -> String {
    match *line {
        Some(line) => format!("{}:{}", path.display(), line),
        None => path.display().to_string(),
    }
}

impl DatasetError {
    /// Create a parse error for a line-oriented record.
    pub fn parse_line(path: impl Into<PathBuf>, line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            line: Some(line),
            message: message.into(),
        }
    }

    /// Create a parse error without line information.
    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            line: None,
            message: message.into(),
        }
    }

    /// Create a missing resource error.
    pub fn missing_resource(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::MissingResource {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Wrap an I/O error with the path it happened at.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
