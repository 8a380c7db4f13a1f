//! Directory and file conventions shared by the dataset parsers

/// Training subset folder/file name
pub const TRAIN_SUBSET: &str = "train";

/// Test subset folder/file name
pub const TEST_SUBSET: &str = "test";

/// Subset names in the order the first non-empty one is selected
pub const SUBSET_PRIORITY: &[&str] = &[TRAIN_SUBSET, TEST_SUBSET];

/// Image extensions recognized when pairing files by stem (compared lowercase)
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "tiff", "tif", "webp"];

/// Check if a path has a supported image extension, ignoring case.
pub fn is_image_file(path: &std::path::Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}
