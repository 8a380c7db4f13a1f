//! Canonical text-region annotation.

use serde::{Deserialize, Serialize};

use crate::geometry::{self, Point};

/// Default label for annotations created by hand in the viewer.
pub const DEFAULT_LABEL: &str = "english";

/// Default transcription for annotations created by hand in the viewer.
pub const DEFAULT_TEXT: &str = "text";

/// One labeled text region, reduced to an axis-aligned box in image pixels.
///
/// Whatever the source encoding (rotated `x y w h angle`, explicit corners,
/// plain rectangles), parsers convert to the enclosing box before building
/// an `Annotation`. `x1 <= x2` and `y1 <= y2` always hold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    /// Label or script language (e.g. "english").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Transcribed text of the region.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Region marked hard to read by the source dataset.
    #[serde(default)]
    pub difficult: bool,
    /// Record index stored in the source file, for formats that number records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_index: Option<u32>,
}

impl Annotation {
    /// Create an annotation from two corners, in any order.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            x1: x1.min(x2),
            y1: y1.min(y2),
            x2: x1.max(x2),
            y2: y1.max(y2),
            label: None,
            text: None,
            difficult: false,
            source_index: None,
        }
    }

    /// Create an annotation from the box enclosing a point set.
    pub fn from_points(points: &[Point]) -> Self {
        let (x1, y1, x2, y2) = geometry::enclosing_box(points);
        Self::new(x1, y1, x2, y2)
    }

    /// The row a viewer inserts when the user adds a region by hand.
    pub fn placeholder() -> Self {
        Self::new(0.0, 0.0, 1.0, 1.0)
            .with_label(DEFAULT_LABEL)
            .with_text(DEFAULT_TEXT)
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_difficult(mut self, difficult: bool) -> Self {
        self.difficult = difficult;
        self
    }

    pub fn with_source_index(mut self, index: u32) -> Self {
        self.source_index = Some(index);
        self
    }

    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    /// Box as `(x1, y1, x2, y2)`.
    pub fn xyxy(&self) -> (f64, f64, f64, f64) {
        (self.x1, self.y1, self.x2, self.y2)
    }

    /// Corners in top-left, bottom-left, bottom-right, top-right order.
    pub fn corners(&self) -> [Point; 4] {
        geometry::rectangle_corners(self.x1, self.y1, self.width(), self.height())
    }
}
