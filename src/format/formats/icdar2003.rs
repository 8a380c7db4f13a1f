//! ICDAR 2003 Robust Reading format support.
//!
//! Each subset folder (`train/`, `test/`) carries one `words.xml` (older
//! releases: `locations.xml`) describing every image of the subset, with
//! image names relative to the subset folder. Rectangles may carry a
//! `rotation` attribute in degrees, which is applied about the configured
//! pivot before taking the enclosing box.

use std::path::{Path, PathBuf};

use crate::error::DatasetError;
use crate::format::formats::{common, tagset};
use crate::format::traits::{
    DatasetFormat, DatasetParser, LoadOptions, SubsetLayout, SubsetSource,
};
use crate::model::Sample;

/// Annotation file names, in lookup order.
const ANNOTATION_FILES: &[&str] = &["words.xml", "locations.xml"];

/// ICDAR 2003 parser.
pub struct Icdar2003Format;

impl Icdar2003Format {
    fn annotation_file(dir: &Path) -> Option<PathBuf> {
        ANNOTATION_FILES
            .iter()
            .map(|name| dir.join(name))
            .find(|path| path.is_file())
    }
}

impl DatasetParser for Icdar2003Format {
    fn format(&self) -> DatasetFormat {
        DatasetFormat::Icdar2003
    }

    fn display_name(&self) -> &'static str {
        "ICDAR 2003"
    }

    fn detect(&self, root: &Path) -> bool {
        common::subset_dirs(root, self.subset_names())
            .iter()
            .any(|(_, dir)| Self::annotation_file(dir).is_some())
    }

    fn discover_subsets(&self, root: &Path) -> Result<Vec<SubsetSource>, DatasetError> {
        common::subset_dirs(root, self.subset_names())
            .into_iter()
            .map(|(name, dir)| {
                let annotation_path = Self::annotation_file(&dir).ok_or_else(|| {
                    DatasetError::missing_resource(
                        dir.join(ANNOTATION_FILES[0]),
                        format!("subset '{}' has no annotation file", name),
                    )
                })?;
                Ok(SubsetSource {
                    name,
                    layout: SubsetLayout::Shared {
                        annotation_path,
                        image_root: dir,
                    },
                })
            })
            .collect()
    }

    fn read_subset(
        &self,
        source: &SubsetSource,
        options: &LoadOptions,
    ) -> Result<Vec<Sample>, DatasetError> {
        let SubsetLayout::Shared {
            annotation_path,
            image_root,
        } = &source.layout
        else {
            return Err(DatasetError::parse(
                source.name.as_str(),
                "ICDAR 2003 subsets use a shared annotation file",
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
                let annotations =
                    image.annotations(annotation_path, Some(options.rotation_pivot))?;
                Ok(Sample::new(image_path, annotations))
            })
            .collect::<Result<Vec<_>, DatasetError>>()?;

        log::debug!("Parsed {} images from {:?}", samples.len(), annotation_path);
        Ok(samples)
    }
}
