//! Dataset format parsers.
//!
//! Each supported scene-text dataset family has a parser implementing
//! [`DatasetParser`]. A parser knows its directory convention and record
//! layout, and reduces every region to the canonical axis-aligned
//! [`Annotation`](crate::model::Annotation) before handing it out.
//!
//! ## Supported Formats
//!
//! - **ICDAR2003**: `words.xml` per subset, rectangles with optional rotation
//! - **MSRA_TD500**: `.gt` file per image, `index difficult x y w h angle`
//! - **StreetViewText**: `train.xml`/`test.xml` at the root, plain rectangles
//! - **NEOCR**: LabelMe-style XML per image, explicit corner points
//!
//! ## Usage
//!
//! ```rust,ignore
//! use tdviewer::format::{LoadOptions, ParserRegistry};
//!
//! let registry = ParserRegistry::new();
//! let format = registry.detect(root)?;
//! let parser = registry.get(format).unwrap();
//! for source in parser.discover_subsets(root)? {
//!     let samples = parser.read_subset(&source, &LoadOptions::default())?;
//! }
//! ```

pub mod formats;
mod registry;
mod traits;

pub use registry::ParserRegistry;
pub use traits::{
    AngleUnit, DatasetFormat, DatasetParser, LoadOptions, RotationPivot, SourcePair,
    SubsetLayout, SubsetSource,
};
