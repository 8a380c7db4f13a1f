//! Entity model: annotations and samples.

mod annotation;
mod sample;

pub use annotation::{Annotation, DEFAULT_LABEL, DEFAULT_TEXT};
pub use sample::Sample;
