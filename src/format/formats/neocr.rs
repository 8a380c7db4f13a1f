//! NEOCR format support.
//!
//! NEOCR uses one LabelMe-style XML file per image, stored next to the image
//! with the same stem. Regions are quadrilaterals given as explicit corner
//! points:
//!
//! ```xml
//! <annotation>
//!   <filename>img_0001.jpg</filename>
//!   <object>
//!     <name>ausfahrt</name>
//!     <deleted>0</deleted>
//!     <text>Ausfahrt</text>
//!     <polygon>
//!       <pt><x>10</x><y>20</y></pt>
//!       <pt><x>110</x><y>25</y></pt>
//!       <pt><x>108</x><y>60</y></pt>
//!       <pt><x>8</x><y>55</y></pt>
//!     </polygon>
//!     <properties><language>german</language></properties>
//!   </object>
//! </annotation>
//! ```
//!
//! The corners are reduced to their enclosing axis-aligned box.

use std::path::Path;

use quick_xml::de::from_str;
use serde::Deserialize;

use crate::error::DatasetError;
use crate::format::formats::common;
use crate::format::traits::{
    DatasetFormat, DatasetParser, LoadOptions, SubsetLayout, SubsetSource,
};
use crate::geometry::Point;
use crate::model::{Annotation, Sample};

/// Annotation file extension.
const XML_EXTENSION: &str = "xml";

/// Fewest corners a region polygon may have.
const MIN_POLYGON_POINTS: usize = 3;

#[derive(Debug, Deserialize)]
struct NeocrAnnotation {
    #[serde(rename = "object", default)]
    objects: Vec<NeocrObject>,
}

#[derive(Debug, Deserialize)]
struct NeocrObject {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    deleted: Option<String>,
    #[serde(default)]
    text: Option<String>,
    polygon: NeocrPolygon,
    #[serde(default)]
    properties: Option<NeocrProperties>,
}

#[derive(Debug, Deserialize)]
struct NeocrPolygon {
    #[serde(rename = "pt", default)]
    points: Vec<NeocrPoint>,
}

#[derive(Debug, Deserialize)]
struct NeocrPoint {
    x: String,
    y: String,
}

#[derive(Debug, Deserialize)]
struct NeocrProperties {
    #[serde(default)]
    language: Option<String>,
}

/// NEOCR parser.
pub struct NeocrFormat;

impl DatasetParser for NeocrFormat {
    fn format(&self) -> DatasetFormat {
        DatasetFormat::Neocr
    }

    fn display_name(&self) -> &'static str {
        "NEOCR"
    }

    fn detect(&self, root: &Path) -> bool {
        common::subset_dirs(root, self.subset_names())
            .iter()
            .any(|(_, dir)| common::dir_has_extension(dir, XML_EXTENSION))
    }

    fn discover_subsets(&self, root: &Path) -> Result<Vec<SubsetSource>, DatasetError> {
        common::subset_dirs(root, self.subset_names())
            .into_iter()
            .map(|(name, dir)| {
                Ok(SubsetSource {
                    name,
                    layout: SubsetLayout::PerImage(common::pair_by_stem(&dir, XML_EXTENSION)?),
                })
            })
            .collect()
    }

    fn read_subset(
        &self,
        source: &SubsetSource,
        options: &LoadOptions,
    ) -> Result<Vec<Sample>, DatasetError> {
        let SubsetLayout::PerImage(pairs) = &source.layout else {
            return Err(DatasetError::parse(
                source.name.as_str(),
                "NEOCR subsets use per-image annotation files",
            ));
        };

        pairs
            .iter()
            .map(|pair| {
                let content = common::read_file(&pair.annotation_path)?;
                let annotations = parse_file(&content, &pair.annotation_path, options)?;
                Ok(Sample::new(&pair.image_path, annotations))
            })
            .collect()
    }
}

/// Parse one NEOCR XML file into annotations, in object order.
pub fn parse_file(
    content: &str,
    path: &Path,
    options: &LoadOptions,
) -> Result<Vec<Annotation>, DatasetError> {
    let doc: NeocrAnnotation =
        from_str(content).map_err(|e| DatasetError::parse(path, format!("invalid XML: {}", e)))?;

    let mut annotations = Vec::with_capacity(doc.objects.len());
    for (idx, object) in doc.objects.iter().enumerate() {
        if object.is_deleted() && !options.keep_deleted_objects {
            log::warn!("Dropping deleted object {} in {:?}", idx + 1, path);
            continue;
        }
        let annotation = object
            .to_annotation()
            .map_err(|msg| DatasetError::parse(path, format!("object {}: {}", idx + 1, msg)))?;
        annotations.push(annotation);
    }
    Ok(annotations)
}

impl NeocrObject {
    fn is_deleted(&self) -> bool {
        self.deleted.as_deref().map(str::trim) == Some("1")
    }

    fn to_annotation(&self) -> Result<Annotation, String> {
        if self.polygon.points.len() < MIN_POLYGON_POINTS {
            return Err(format!(
                "polygon has {} points, expected at least {}",
                self.polygon.points.len(),
                MIN_POLYGON_POINTS
            ));
        }

        let points = self
            .polygon
            .points
            .iter()
            .map(|pt| {
                Ok(Point::new(
                    common::parse_coordinate(&pt.x, "x")?,
                    common::parse_coordinate(&pt.y, "y")?,
                ))
            })
            .collect::<Result<Vec<_>, String>>()?;

        let mut annotation = Annotation::from_points(&points);
        let text = self
            .text
            .as_deref()
            .or(self.name.as_deref())
            .map(str::trim)
            .filter(|t| !t.is_empty());
        if let Some(text) = text {
            annotation = annotation.with_text(text);
        }
        let language = self
            .properties
            .as_ref()
            .and_then(|p| p.language.as_deref())
            .map(str::trim)
            .filter(|l| !l.is_empty());
        if let Some(language) = language {
            annotation = annotation.with_label(language);
        }
        Ok(annotation)
    }
}
