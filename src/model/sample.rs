//! One image reference plus its annotations.

use std::path::{Path, PathBuf};

use image::RgbImage;

use crate::error::DatasetError;
use crate::model::Annotation;

/// An image and its ground-truth regions.
///
/// The sample references the image by path; pixels are decoded on each
/// [`Sample::load_image`] call and never stored here.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    image_path: PathBuf,
    annotations: Vec<Annotation>,
    lexicon: Vec<String>,
}

impl Sample {
    /// Create a sample. Annotation order is kept as given.
    pub fn new(image_path: impl Into<PathBuf>, annotations: Vec<Annotation>) -> Self {
        Self {
            image_path: image_path.into(),
            annotations,
            lexicon: Vec::new(),
        }
    }

    /// Attach the per-image word lexicon some datasets ship.
    pub fn with_lexicon(mut self, lexicon: Vec<String>) -> Self {
        self.lexicon = lexicon;
        self
    }

    pub fn image_path(&self) -> &Path {
        &self.image_path
    }

    /// Annotations in source record order.
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    pub fn annotation(&self, index: usize) -> Option<&Annotation> {
        self.annotations.get(index)
    }

    pub fn len(&self) -> usize {
        self.annotations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.annotations.is_empty()
    }

    pub fn lexicon(&self) -> &[String] {
        &self.lexicon
    }

    /// Replace the annotation at `index`, returning the previous value.
    pub fn replace_at(
        &mut self,
        index: usize,
        annotation: Annotation,
    ) -> Result<Annotation, DatasetError> {
        let len = self.annotations.len();
        let slot = self
            .annotations
            .get_mut(index)
            .ok_or(DatasetError::AnnotationIndexOutOfRange { index, len })?;
        Ok(std::mem::replace(slot, annotation))
    }

    /// Decode the referenced image as 8-bit RGB.
    pub fn load_image(&self) -> Result<RgbImage, DatasetError> {
        if !self.image_path.is_file() {
            return Err(DatasetError::ImageNotFound {
                path: self.image_path.clone(),
            });
        }
        let img = image::open(&self.image_path).map_err(|source| DatasetError::ImageDecode {
            path: self.image_path.clone(),
            source,
        })?;
        log::debug!(
            "Decoded {:?} ({}x{})",
            self.image_path,
            img.width(),
            img.height()
        );
        Ok(img.to_rgb8())
    }
}
