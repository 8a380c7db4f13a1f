//! Parser registry for selecting a dataset format.

use std::collections::HashMap;
use std::path::Path;

use crate::error::DatasetError;
use crate::format::formats::{
    Icdar2003Format, MsraTd500Format, NeocrFormat, StreetViewTextFormat,
};
use crate::format::traits::{DatasetFormat, DatasetParser};

/// Registry of available dataset parsers.
///
/// All built-in formats are registered on creation. The registry maps a
/// format tag to its parser, so callers never branch on the format.
pub struct ParserRegistry {
    parsers: HashMap<DatasetFormat, Box<dyn DatasetParser>>,
}

impl ParserRegistry {
    /// Create a new registry with all built-in parsers registered.
    pub fn new() -> Self {
        let mut registry = Self {
            parsers: HashMap::new(),
        };

        registry.register(Box::new(Icdar2003Format));
        registry.register(Box::new(MsraTd500Format));
        registry.register(Box::new(StreetViewTextFormat));
        registry.register(Box::new(NeocrFormat));

        registry
    }

    /// Register a parser, replacing any previous one for the same format.
    pub fn register(&mut self, parser: Box<dyn DatasetParser>) {
        self.parsers.insert(parser.format(), parser);
    }

    /// Get the parser for a format.
    pub fn get(&self, format: DatasetFormat) -> Option<&dyn DatasetParser> {
        self.parsers.get(&format).map(|p| p.as_ref())
    }

    /// Registered formats, in [`DatasetFormat::all`] order.
    pub fn formats(&self) -> Vec<DatasetFormat> {
        DatasetFormat::all()
            .iter()
            .copied()
            .filter(|f| self.parsers.contains_key(f))
            .collect()
    }

    /// Determine the format of the dataset rooted at `root`.
    ///
    /// The folder name decides first; when it names no known format the
    /// on-disk layout is probed, in [`DatasetFormat::all`] order.
    pub fn detect(&self, root: &Path) -> Result<DatasetFormat, DatasetError> {
        let by_name = root
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(DatasetFormat::from_folder_name)
            .filter(|f| self.parsers.contains_key(f));
        if let Some(format) = by_name {
            log::debug!("Format {} selected by folder name {:?}", format, root);
            return Ok(format);
        }

        self.formats()
            .into_iter()
            .find(|f| self.get(*f).is_some_and(|p| p.detect(root)))
            .inspect(|f| log::debug!("Format {} detected from layout of {:?}", f, root))
            .ok_or_else(|| DatasetError::UnknownFormat {
                root: root.to_path_buf(),
            })
    }
}

impl Default for ParserRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_parsers() {
        let registry = ParserRegistry::new();
        for format in DatasetFormat::all() {
            let parser = registry.get(*format).unwrap();
            assert_eq!(parser.format(), *format);
            assert_eq!(parser.subset_names(), &["train", "test"]);
        }
        assert_eq!(registry.formats(), DatasetFormat::all());
    }

    #[test]
    fn test_detect_by_folder_name() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("MSRA_TD500");
        std::fs::create_dir(&root).unwrap();

        let registry = ParserRegistry::new();
        assert_eq!(registry.detect(&root).unwrap(), DatasetFormat::MsraTd500);
    }

    #[test]
    fn test_detect_by_layout() {
        let registry = ParserRegistry::new();

        let svt = tempfile::tempdir().unwrap();
        std::fs::write(svt.path().join("test.xml"), "<tagset/>").unwrap();
        assert_eq!(
            registry.detect(svt.path()).unwrap(),
            DatasetFormat::StreetViewText
        );

        let msra = tempfile::tempdir().unwrap();
        std::fs::create_dir(msra.path().join("train")).unwrap();
        std::fs::write(msra.path().join("train/IMG_0001.gt"), "").unwrap();
        assert_eq!(
            registry.detect(msra.path()).unwrap(),
            DatasetFormat::MsraTd500
        );

        let icdar = tempfile::tempdir().unwrap();
        std::fs::create_dir(icdar.path().join("test")).unwrap();
        std::fs::write(icdar.path().join("test/words.xml"), "<tagset/>").unwrap();
        assert_eq!(
            registry.detect(icdar.path()).unwrap(),
            DatasetFormat::Icdar2003
        );

        let neocr = tempfile::tempdir().unwrap();
        std::fs::create_dir(neocr.path().join("train")).unwrap();
        std::fs::write(neocr.path().join("train/img_1.xml"), "<annotation/>").unwrap();
        assert_eq!(registry.detect(neocr.path()).unwrap(), DatasetFormat::Neocr);
    }

    #[test]
    fn test_detect_unknown() {
        let dir = tempfile::tempdir().unwrap();
        let err = ParserRegistry::new().detect(dir.path()).unwrap_err();
        assert!(matches!(err, DatasetError::UnknownFormat { .. }));
    }
}
