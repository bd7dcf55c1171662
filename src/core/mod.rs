//! Core types: presentation modes and render options

mod mode;
mod options;

pub use mode::{classify, extension, PresentationMode};
pub use options::RenderOptions;
