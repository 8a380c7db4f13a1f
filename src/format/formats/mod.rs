//! Dataset format implementations.

mod common;
mod icdar2003;
mod msra_td500;
mod neocr;
mod street_view_text;
mod tagset;

#[cfg(test)]
mod tests;

pub use icdar2003::Icdar2003Format;
pub use msra_td500::MsraTd500Format;
pub use neocr::NeocrFormat;
pub use street_view_text::StreetViewTextFormat;

/// Record-level parse functions, for callers that already hold file content.
pub mod records {
    pub use super::msra_td500::{parse_file as parse_msra_file, parse_record as parse_msra_record};
    pub use super::neocr::parse_file as parse_neocr_file;
}
