//! MSRA-TD500 format support.
//!
//! Each subset folder holds `IMG_xxxx.JPG` images next to `IMG_xxxx.gt`
//! annotation files. Every non-blank line of a `.gt` file is one region:
//!
//! ```text
//! index difficult x y w h angle
//! 0 0 1011 1294 600 150 -0.0764
//! ```
//!
//! `(x, y)` is the top-left corner of the unrotated box and `angle` its
//! rotation. The rotated corners are reduced to their enclosing box.
//!
//! Angles are read as degrees unless the `msra_angle_unit` load option says
//! otherwise. The released MSRA-TD500 files, like the record above, store
//! radians and need `AngleUnit::Radians`.

use std::path::Path;

use crate::error::DatasetError;
use crate::format::formats::common;
use crate::format::traits::{
    DatasetFormat, DatasetParser, LoadOptions, SubsetLayout, SubsetSource,
};
use crate::model::{Annotation, Sample};

/// Annotation file extension.
const GT_EXTENSION: &str = "gt";

/// Number of whitespace-separated fields per record.
const RECORD_FIELDS: usize = 7;

/// MSRA-TD500 parser.
pub struct MsraTd500Format;

impl DatasetParser for MsraTd500Format {
    fn format(&self) -> DatasetFormat {
        DatasetFormat::MsraTd500
    }

    fn display_name(&self) -> &'static str {
        "MSRA-TD500"
    }

    fn detect(&self, root: &Path) -> bool {
        common::subset_dirs(root, self.subset_names())
            .iter()
            .any(|(_, dir)| common::dir_has_extension(dir, GT_EXTENSION))
    }

    fn discover_subsets(&self, root: &Path) -> Result<Vec<SubsetSource>, DatasetError> {
        common::subset_dirs(root, self.subset_names())
            .into_iter()
            .map(|(name, dir)| {
                Ok(SubsetSource {
                    name,
                    layout: SubsetLayout::PerImage(common::pair_by_stem(&dir, GT_EXTENSION)?),
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
                "MSRA-TD500 subsets use per-image annotation files",
            ));
        };

        pairs
            .iter()
            .map(|pair| {
                let content = common::read_file(&pair.annotation_path)?;
                let annotations = parse_file(&content, &pair.annotation_path, options)?;
                log::debug!(
                    "Parsed {} regions from {:?}",
                    annotations.len(),
                    pair.annotation_path
                );
                Ok(Sample::new(&pair.image_path, annotations))
            })
            .collect()
    }
}

/// Parse every record of a `.gt` file. Blank lines are skipped.
pub fn parse_file(
    content: &str,
    path: &Path,
    options: &LoadOptions,
) -> Result<Vec<Annotation>, DatasetError> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| {
            parse_record(line, options).map_err(|msg| DatasetError::parse_line(path, idx + 1, msg))
        })
        .collect()
}

/// Parse one `index difficult x y w h angle` record.
pub fn parse_record(raw: &str, options: &LoadOptions) -> Result<Annotation, String> {
    let fields: Vec<&str> = raw.split_whitespace().collect();
    if fields.len() != RECORD_FIELDS {
        return Err(format!(
            "expected {} fields, found {}",
            RECORD_FIELDS,
            fields.len()
        ));
    }

    let index: u32 = common::parse_number(fields[0], "index")?;
    let difficult = common::parse_number::<u8>(fields[1], "difficult")? == 1;
    let x = common::parse_coordinate(fields[2], "x")?;
    let y = common::parse_coordinate(fields[3], "y")?;
    let w = common::parse_coordinate(fields[4], "w")?;
    let h = common::parse_coordinate(fields[5], "h")?;
    let angle = common::parse_coordinate(fields[6], "angle")?;

    let angle = options.msra_angle_unit.to_degrees(angle);
    let (x1, y1, x2, y2) = common::rotated_box(x, y, w, h, angle, options.rotation_pivot);

    Ok(Annotation::new(x1, y1, x2, y2)
        .with_difficult(difficult)
        .with_source_index(index))
}
