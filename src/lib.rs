//! look-format - Render file contents by extension
//!
//! This crate picks a presentation mode (text, image, video, audio) from a
//! file name and renders the content into a mount point of a host node tree.
//!
//! ```no_run
//! use look_format::dom::Document;
//! use look_format::Viewer;
//!
//! # async fn demo() -> look_format::Result<()> {
//! let mut doc = Document::new();
//! doc.mount_point("div", "target");
//!
//! let container = Viewer::new()
//!     .render(&mut doc, "#target", "notes.txt", "hello\nworld", None)
//!     .await?;
//! println!("{}", doc.to_html(container));
//! # Ok(())
//! # }
//! ```

pub mod config_file;
pub mod core;
pub mod dom;
pub mod error;
pub mod net;
pub mod render;

pub use crate::core::{classify, extension, PresentationMode, RenderOptions};
pub use crate::error::{LookError, Result};
pub use crate::render::{render, View, Viewer};
