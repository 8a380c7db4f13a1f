//! `<tagset>` XML model shared by ICDAR2003 and StreetViewText.
//!
//! ```xml
//! <tagset>
//!   <image>
//!     <imageName>img/14_03.jpg</imageName>
//!     <lex>LIVING,ROOM,THEATERS</lex>
//!     <taggedRectangles>
//!       <taggedRectangle x="375" y="253" width="236" height="75" rotation="0">
//!         <tag>LIVING</tag>
//!       </taggedRectangle>
//!     </taggedRectangles>
//!   </image>
//! </tagset>
//! ```
//!
//! Coordinates are kept as strings so a bad value can be reported with the
//! rectangle it belongs to.

use std::path::Path;

use quick_xml::de::from_str;
use serde::Deserialize;

use crate::error::DatasetError;
use crate::format::formats::common;
use crate::format::traits::RotationPivot;
use crate::model::Annotation;

#[derive(Debug, Deserialize)]
pub(crate) struct TagSet {
    #[serde(rename = "image", default)]
    pub images: Vec<TagSetImage>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TagSetImage {
    #[serde(rename = "imageName")]
    pub image_name: String,
    /// Comma separated word lexicon (StreetViewText only).
    #[serde(default)]
    pub lex: Option<String>,
    #[serde(rename = "taggedRectangles", default)]
    pub tagged_rectangles: TaggedRectangles,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct TaggedRectangles {
    #[serde(rename = "taggedRectangle", default)]
    pub rectangles: Vec<TaggedRectangle>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TaggedRectangle {
    #[serde(rename = "@x")]
    pub x: String,
    #[serde(rename = "@y")]
    pub y: String,
    #[serde(rename = "@width")]
    pub width: String,
    #[serde(rename = "@height")]
    pub height: String,
    /// Rotation in degrees (ICDAR2003 only).
    #[serde(rename = "@rotation", default)]
    pub rotation: Option<String>,
    #[serde(default)]
    pub tag: Option<String>,
}

/// Parse a `<tagset>` document.
pub(crate) fn parse_tagset(content: &str, path: &Path) -> Result<TagSet, DatasetError> {
    from_str(content).map_err(|e| DatasetError::parse(path, format!("invalid XML: {}", e)))
}

impl TagSetImage {
    /// Lexicon words, trimmed, empty entries removed.
    pub fn lexicon(&self) -> Vec<String> {
        self.lex
            .as_deref()
            .unwrap_or_default()
            .split(',')
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .map(String::from)
            .collect()
    }

    /// Convert all rectangles, naming the failing one on error.
    ///
    /// With `pivot` set, each rectangle's `rotation` attribute is applied
    /// before taking the enclosing box; otherwise it is ignored.
    pub fn annotations(
        &self,
        path: &Path,
        pivot: Option<RotationPivot>,
    ) -> Result<Vec<Annotation>, DatasetError> {
        self.tagged_rectangles
            .rectangles
            .iter()
            .enumerate()
            .map(|(idx, rect)| {
                rect.to_annotation(pivot).map_err(|msg| {
                    DatasetError::parse(
                        path,
                        format!(
                            "image '{}', rectangle {}: {}",
                            self.image_name.trim(),
                            idx + 1,
                            msg
                        ),
                    )
                })
            })
            .collect()
    }
}

impl TaggedRectangle {
    fn to_annotation(&self, pivot: Option<RotationPivot>) -> Result<Annotation, String> {
        let x = common::parse_coordinate(&self.x, "x")?;
        let y = common::parse_coordinate(&self.y, "y")?;
        let w = common::parse_coordinate(&self.width, "width")?;
        let h = common::parse_coordinate(&self.height, "height")?;

        let angle = match (&self.rotation, pivot) {
            (Some(rotation), Some(_)) => common::parse_coordinate(rotation, "rotation")?,
            _ => 0.0,
        };

        let (x1, y1, x2, y2) = match pivot {
            Some(pivot) if angle != 0.0 => common::rotated_box(x, y, w, h, angle, pivot),
            _ => (x, y, x + w, y + h),
        };

        let mut annotation = Annotation::new(x1, y1, x2, y2);
        if let Some(tag) = self.tag.as_deref().map(str::trim) {
            annotation = annotation.with_text(tag);
        }
        Ok(annotation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<tagset>
  <image>
    <imageName>img/14_03.jpg</imageName>
    <address>1234 Main St</address>
    <lex>LIVING, ROOM,,THEATERS</lex>
    <Resolution x="1280" y="880"/>
    <taggedRectangles>
      <taggedRectangle height="75" width="236" x="375" y="253">
        <tag>LIVING</tag>
      </taggedRectangle>
      <taggedRectangle height="10" width="20" x="0" y="0" rotation="90">
        <tag>ROOM</tag>
      </taggedRectangle>
    </taggedRectangles>
  </image>
  <image>
    <imageName>img/15_01.jpg</imageName>
    <taggedRectangles/>
  </image>
</tagset>"#;

    #[test]
    fn test_parse_tagset() {
        let set = parse_tagset(DOC, Path::new("train.xml")).unwrap();
        assert_eq!(set.images.len(), 2);
        assert_eq!(set.images[0].image_name, "img/14_03.jpg");
        assert_eq!(set.images[0].lexicon(), vec!["LIVING", "ROOM", "THEATERS"]);
        assert!(set.images[1].tagged_rectangles.rectangles.is_empty());
        assert!(set.images[1].lexicon().is_empty());
    }

    #[test]
    fn test_annotations_without_rotation() {
        let set = parse_tagset(DOC, Path::new("train.xml")).unwrap();
        let anns = set.images[0].annotations(Path::new("train.xml"), None).unwrap();
        assert_eq!(anns[0].xyxy(), (375.0, 253.0, 611.0, 328.0));
        assert_eq!(anns[0].text.as_deref(), Some("LIVING"));
        assert_eq!(anns[1].xyxy(), (0.0, 0.0, 20.0, 10.0));
    }

    #[test]
    fn test_annotations_with_rotation() {
        let set = parse_tagset(DOC, Path::new("words.xml")).unwrap();
        let anns = set.images[0]
            .annotations(Path::new("words.xml"), Some(RotationPivot::FirstCorner))
            .unwrap();
        let rotated = &anns[1];
        assert!((rotated.width() - 10.0).abs() < 1e-9);
        assert!((rotated.height() - 20.0).abs() < 1e-9);
    }

    #[test]
    fn test_bad_coordinate_names_rectangle() {
        let doc = r#"<tagset><image><imageName>a.jpg</imageName><taggedRectangles>
            <taggedRectangle x="1" y="2" width="wide" height="4"><tag>A</tag></taggedRectangle>
            </taggedRectangles></image></tagset>"#;
        let set = parse_tagset(doc, Path::new("test.xml")).unwrap();
        let err = set.images[0].annotations(Path::new("test.xml"), None).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("rectangle 1"), "{msg}");
        assert!(msg.contains("invalid width 'wide'"), "{msg}");
    }

    #[test]
    fn test_nan_coordinate_is_error() {
        let doc = r#"<tagset><image><imageName>a.jpg</imageName><taggedRectangles>
            <taggedRectangle x="NaN" y="1" width="2" height="3"><tag>A</tag></taggedRectangle>
            </taggedRectangles></image></tagset>"#;
        let set = parse_tagset(doc, Path::new("test.xml")).unwrap();
        let err = set.images[0].annotations(Path::new("test.xml"), None).unwrap_err();
        assert!(err.to_string().contains("non-finite x 'NaN'"), "{err}");
    }

    #[test]
    fn test_malformed_xml() {
        let err = parse_tagset("<tagset><image>", Path::new("test.xml")).unwrap_err();
        assert!(matches!(err, DatasetError::Parse { line: None, .. }));
    }
}
