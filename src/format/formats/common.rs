//! Shared helpers for the dataset parsers.

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::path::{Path, PathBuf};

use crate::constants::is_image_file;
use crate::error::DatasetError;
use crate::format::traits::{RotationPivot, SourcePair};
use crate::geometry;

/// Read a whole annotation file.
pub fn read_file(path: &Path) -> Result<String, DatasetError> {
    std::fs::read_to_string(path).map_err(|e| DatasetError::io(path, e))
}

/// Sorted list of the regular files directly inside `dir`.
pub fn list_files(dir: &Path) -> Result<Vec<PathBuf>, DatasetError> {
    let entries = std::fs::read_dir(dir).map_err(|e| DatasetError::io(dir, e))?;
    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| DatasetError::io(dir, e))?.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Subset folders of `names` that exist under `root`, in the given order.
pub fn subset_dirs(root: &Path, names: &[&str]) -> Vec<(String, PathBuf)> {
    names
        .iter()
        .map(|name| (name.to_string(), root.join(name)))
        .filter(|(_, dir)| dir.is_dir())
        .collect()
}

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(ext))
}

fn stem(path: &Path) -> Option<&str> {
    path.file_stem().and_then(|s| s.to_str())
}

/// Whether `dir` holds at least one file with extension `ext`.
pub fn dir_has_extension(dir: &Path, ext: &str) -> bool {
    list_files(dir)
        .map(|files| files.iter().any(|p| has_extension(p, ext)))
        .unwrap_or(false)
}

/// Pair every `*.{annotation_ext}` file in `dir` with the image of the same stem.
///
/// Pairs come back sorted by annotation path. An annotation file without an
/// image is an error; images without annotations are only logged.
pub fn pair_by_stem(dir: &Path, annotation_ext: &str) -> Result<Vec<SourcePair>, DatasetError> {
    let files = list_files(dir)?;

    let mut images: BTreeMap<&str, &PathBuf> = BTreeMap::new();
    for path in files.iter().filter(|p| is_image_file(p)) {
        let Some(stem) = stem(path) else { continue };
        match images.entry(stem) {
            Entry::Vacant(entry) => {
                entry.insert(path);
            }
            Entry::Occupied(entry) => {
                log::warn!("Ignoring {:?}, stem already taken by {:?}", path, entry.get());
            }
        }
    }

    let mut pairs = Vec::new();
    for annotation_path in files.iter().filter(|p| has_extension(p, annotation_ext)) {
        let stem = stem(annotation_path).unwrap_or_default();
        let image_path = images.remove(stem).ok_or_else(|| {
            DatasetError::missing_resource(
                dir.join(stem),
                format!("no image file for annotation {:?}", annotation_path),
            )
        })?;
        pairs.push(SourcePair {
            image_path: image_path.clone(),
            annotation_path: annotation_path.clone(),
        });
    }

    for orphan in images.values() {
        log::warn!("Ignoring image without annotation file: {:?}", orphan);
    }

    Ok(pairs)
}

/// Resolve an image name from a shared annotation file, requiring it to exist.
pub fn resolve_image(
    image_root: &Path,
    name: &str,
    annotation_path: &Path,
) -> Result<PathBuf, DatasetError> {
    let path = image_root.join(name.trim());
    if path.is_file() {
        Ok(path)
    } else {
        Err(DatasetError::missing_resource(
            path,
            format!("image referenced by {:?} does not exist", annotation_path),
        ))
    }
}

/// Parse a numeric field, naming it in the error message.
pub fn parse_number<T: std::str::FromStr>(value: &str, field: &str) -> Result<T, String> {
    value
        .trim()
        .parse()
        .map_err(|_| format!("invalid {} '{}'", field, value))
}

/// Parse a coordinate or angle, rejecting NaN and infinities.
pub fn parse_coordinate(value: &str, field: &str) -> Result<f64, String> {
    let number: f64 = parse_number(value, field)?;
    if number.is_finite() {
        Ok(number)
    } else {
        Err(format!("non-finite {} '{}'", field, value))
    }
}

/// Rotate an `x, y, w, h` box by `angle` degrees and return its enclosing box.
pub fn rotated_box(
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    angle: f64,
    pivot: RotationPivot,
) -> (f64, f64, f64, f64) {
    let corners = geometry::rectangle_corners(x, y, width, height);
    let rotated = match pivot {
        RotationPivot::FirstCorner => geometry::rotate_rectangle(&corners, angle),
        RotationPivot::Center => geometry::rotate_rectangle_about_center(&corners, angle),
    };
    geometry::enclosing_box(&rotated)
}
