//! Trait definitions for dataset format parsers.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::SUBSET_PRIORITY;
use crate::error::DatasetError;
use crate::model::Sample;

/// Dataset families with a parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DatasetFormat {
    Icdar2003,
    MsraTd500,
    StreetViewText,
    Neocr,
}

impl DatasetFormat {
    /// Every supported format.
    pub fn all() -> &'static [DatasetFormat] {
        &[
            DatasetFormat::Icdar2003,
            DatasetFormat::MsraTd500,
            DatasetFormat::StreetViewText,
            DatasetFormat::Neocr,
        ]
    }

    /// Identifier, equal to the folder name the dataset is distributed under.
    pub fn id(&self) -> &'static str {
        match self {
            DatasetFormat::Icdar2003 => "ICDAR2003",
            DatasetFormat::MsraTd500 => "MSRA_TD500",
            DatasetFormat::StreetViewText => "StreetViewText",
            DatasetFormat::Neocr => "NEOCR",
        }
    }

    /// Look a format up by its exact identifier.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|f| f.id() == id)
    }

    /// Guess the format from a dataset folder name.
    ///
    /// Case and punctuation are ignored, so `MSRA-TD500`, `msra_td500` and
    /// `MSRA_TD500_v2` all match.
    pub fn from_folder_name(name: &str) -> Option<Self> {
        let key: String = name
            .chars()
            .filter(char::is_ascii_alphanumeric)
            .map(|c| c.to_ascii_lowercase())
            .collect();

        if key.contains("icdar2003") || key.contains("icdar03") {
            Some(DatasetFormat::Icdar2003)
        } else if key.contains("msratd500") {
            Some(DatasetFormat::MsraTd500)
        } else if key.contains("streetviewtext") || key.starts_with("svt") {
            Some(DatasetFormat::StreetViewText)
        } else if key.contains("neocr") {
            Some(DatasetFormat::Neocr)
        } else {
            None
        }
    }
}

impl fmt::Display for DatasetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// An image file and the annotation file describing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourcePair {
    pub image_path: PathBuf,
    pub annotation_path: PathBuf,
}

/// Where a subset's annotations live on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubsetLayout {
    /// One annotation file per image, sorted by annotation path.
    PerImage(Vec<SourcePair>),
    /// A single annotation file for the whole subset. Image names inside it
    /// are resolved against `image_root`.
    Shared {
        annotation_path: PathBuf,
        image_root: PathBuf,
    },
}

/// A subset found on disk, not yet parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubsetSource {
    pub name: String,
    pub layout: SubsetLayout,
}

/// Trait for dataset format parsers.
///
/// Each dataset family implements this to turn its directory convention and
/// record layout into [`Sample`]s whose annotations are already reduced to
/// axis-aligned boxes.
pub trait DatasetParser: Send + Sync {
    /// Format this parser reads.
    fn format(&self) -> DatasetFormat;

    /// Human-readable name for UI display.
    fn display_name(&self) -> &'static str;

    /// Subset names in selection priority order.
    fn subset_names(&self) -> &'static [&'static str] {
        SUBSET_PRIORITY
    }

    /// Whether `root` looks like this format's layout.
    fn detect(&self, root: &Path) -> bool;

    /// Find the subsets present under `root`. Absent subsets are omitted.
    fn discover_subsets(&self, root: &Path) -> Result<Vec<SubsetSource>, DatasetError>;

    /// Parse every record of a discovered subset.
    ///
    /// A single malformed record or missing image fails the whole subset.
    fn read_subset(
        &self,
        source: &SubsetSource,
        options: &LoadOptions,
    ) -> Result<Vec<Sample>, DatasetError>;
}

/// Unit of the angle field in MSRA-TD500 records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AngleUnit {
    #[default]
    Degrees,
    Radians,
}

impl AngleUnit {
    /// Convert a value in this unit to degrees.
    pub fn to_degrees(self, value: f64) -> f64 {
        match self {
            AngleUnit::Degrees => value,
            AngleUnit::Radians => value.to_degrees(),
        }
    }
}

/// Point rotated boxes are turned about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RotationPivot {
    /// The box's top-left corner before rotation.
    #[default]
    FirstCorner,
    /// The box's center.
    Center,
}

/// Options for reading datasets.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LoadOptions {
    /// Unit of the MSRA-TD500 angle field.
    #[serde(default)]
    pub msra_angle_unit: AngleUnit,

    /// Pivot for rotated boxes (MSRA-TD500 and ICDAR2003).
    #[serde(default)]
    pub rotation_pivot: RotationPivot,

    /// Keep NEOCR objects flagged as deleted.
    #[serde(default)]
    pub keep_deleted_objects: bool,
}

impl LoadOptions {
    /// Create new load options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the MSRA-TD500 angle unit.
    pub fn msra_angle_unit(mut self, unit: AngleUnit) -> Self {
        self.msra_angle_unit = unit;
        self
    }

    /// Set the rotation pivot.
    pub fn rotation_pivot(mut self, pivot: RotationPivot) -> Self {
        self.rotation_pivot = pivot;
        self
    }

    /// Keep or drop NEOCR objects flagged as deleted.
    pub fn keep_deleted_objects(mut self, keep: bool) -> Self {
        self.keep_deleted_objects = keep;
        self
    }
}
