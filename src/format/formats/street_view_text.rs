//! Street View Text (SVT) format support.
//!
//! The dataset root holds `train.xml` and `test.xml`, one per subset, with
//! images under `img/` referenced relative to the root. Boxes are plain
//! `x y width height` rectangles; each image also lists a word lexicon.

use std::path::Path;

use crate::error::DatasetError;
use crate::format::formats::{common, tagset};
use crate::format::traits::{
    DatasetFormat, DatasetParser, LoadOptions, SubsetLayout, SubsetSource,
};
use crate::model::Sample;

/// Street View Text parser.
pub struct StreetViewTextFormat;

impl DatasetParser for StreetViewTextFormat {
    fn format(&self) -> DatasetFormat {
        DatasetFormat::StreetViewText
    }

    fn display_name(&self) -> &'static str {
        "Street View Text"
    }

    fn detect(&self, root: &Path) -> bool {
        self.subset_names()
            .iter()
            .any(|name| root.join(format!("{}.xml", name)).is_file())
    }

    fn discover_subsets(&self, root: &Path) -> Result<Vec<SubsetSource>, DatasetError> {
        Ok(self
            .subset_names()
            .iter()
            .map(|name| (name, root.join(format!("{}.xml", name))))
            .filter(|(_, path)| path.is_file())
            .map(|(name, annotation_path)| SubsetSource {
                name: name.to_string(),
                layout: SubsetLayout::Shared {
                    annotation_path,
                    image_root: root.to_path_buf(),
                },
            })
            .collect())
    }

    fn read_subset(
        &self,
        source: &SubsetSource,
        _options: &LoadOptions,
    ) -> Result<Vec<Sample>, DatasetError> {
        let SubsetLayout::Shared {
            annotation_path,
            image_root,
        } = &source.layout
        else {
            return Err(DatasetError::parse(
                source.name.as_str(),
                "Street View Text subsets use a shared annotation file",
            ));
        };

        let content = common::read_file(annotation_path)?;
        let mut images = tagset::parse_tagset(&content, annotation_path)?.images;
        images.sort_by(|a, b| a.image_name.trim().cmp(b.image_name.trim()));

        let samples = images
            .iter()
            .map(|image| {
                let image_path =
                    common::resolve_image(image_root, &image.image_name, annotation_path)?;
                let annotations = image.annotations(annotation_path, None)?;
                Ok(Sample::new(image_path, annotations).with_lexicon(image.lexicon()))
            })
            .collect::<Result<Vec<_>, DatasetError>>()?;

        log::debug!("Parsed {} images from {:?}", samples.len(), annotation_path);
        Ok(samples)
    }
}
