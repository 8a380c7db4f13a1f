//! tdviewer - scene-text-detection dataset model
//!
//! Reads ICDAR2003, MSRA-TD500, StreetViewText and NEOCR datasets into one
//! model of samples and axis-aligned text-region annotations, and keeps the
//! browsing state a viewer/editor needs.
//!
//! ```rust,ignore
//! use tdviewer::{Dataset, NavigationState};
//!
//! let dataset = Dataset::open("/data/MSRA_TD500")?;
//! let mut nav = NavigationState::new(dataset)?;
//! let sample = nav.next_sample();
//! println!("{:?}: {} regions", sample.image_path(), sample.len());
//! ```

pub mod config;
pub mod constants;
mod dataset;
mod error;
pub mod format;
pub mod geometry;
mod model;
mod navigation;

pub use config::{ConfigError, LogLevel, ViewerConfig};
pub use dataset::Dataset;
pub use error::DatasetError;
pub use format::{
    AngleUnit, DatasetFormat, DatasetParser, LoadOptions, ParserRegistry, RotationPivot,
};
pub use geometry::Point;
pub use model::{Annotation, DEFAULT_LABEL, DEFAULT_TEXT, Sample};
pub use navigation::{NavigationState, SubsetCursor};
