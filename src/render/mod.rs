//! Rendering: file name dispatch and the presentation modes
//!
//! - Text files as numbered lines
//! - Images through an `img` element
//! - Videos and audio through native elements with controls
//!
//! [`render`] classifies the file name, resolves the mount point, optionally
//! fetches the payload and hands off to the matching [`View`].

pub mod common;
pub mod media;
pub mod text;

use log::debug;

use crate::core::{classify, PresentationMode, RenderOptions};
use crate::dom::Host;
use crate::error::{LookError, Result};
use crate::net::{Fetcher, HttpFetcher};

pub use media::{MediaContainer, MediaKind, MediaView};
pub use text::{split_lines, TextContainer, TextView};

/// A presentation mode: builds its container and fills it with content
pub trait View {
    /// Container type with named handles to its parts
    type Container<N: Clone>;

    /// Build the styled, empty container (not yet attached anywhere)
    fn build_container<H: Host>(
        &self,
        host: &mut H,
        options: &RenderOptions,
    ) -> Self::Container<H::Node>;

    /// Build, populate and append a container to `mount`, returning its root
    fn render<H: Host>(
        &self,
        host: &mut H,
        mount: &H::Node,
        payload: &str,
        options: &RenderOptions,
    ) -> H::Node;
}

/// Render `payload` for `file_name` into the element matched by `target`.
///
/// With `readFromNetwork` set, a text payload is treated as an address and
/// replaced by the fetched body first. Image, video and audio payloads are
/// never fetched: they are used as the media `src` whatever `readFromNetwork`
/// says. Fails without touching the host when the target does not resolve or
/// the fetch fails.
pub async fn render<H: Host, F: Fetcher>(
    host: &mut H,
    fetcher: &F,
    target: &str,
    file_name: &str,
    payload: &str,
    options: Option<&RenderOptions>,
) -> Result<H::Node> {
    let default_options = RenderOptions::default();
    let options = options.unwrap_or(&default_options);

    let mode = classify(file_name);
    debug!("rendering {:?} as {} into {}", file_name, mode, target);

    let mount = host
        .query(target)
        .ok_or_else(|| LookError::invalid_target(target))?;

    let fetched;
    let payload = if mode == PresentationMode::Text && options.reads_from_network() {
        fetched = fetcher.fetch_text(payload).await?;
        fetched.as_str()
    } else {
        payload
    };

    let container = match MediaKind::from_mode(mode) {
        None => TextView.render(host, &mount, payload, options),
        Some(kind) => MediaView::new(kind).render(host, &mount, payload, options),
    };
    Ok(container)
}

/// Renderer bundling a fetcher and default options
#[derive(Debug, Clone, Default)]
pub struct Viewer<F = HttpFetcher> {
    fetcher: F,
    defaults: RenderOptions,
}

impl Viewer<HttpFetcher> {
    /// Viewer fetching over HTTP, with no default options
    pub fn new() -> Self {
        Self::with_fetcher(HttpFetcher::new())
    }
}

impl<F: Fetcher> Viewer<F> {
    /// Viewer using a custom fetcher
    pub fn with_fetcher(fetcher: F) -> Self {
        Self {
            fetcher,
            defaults: RenderOptions::default(),
        }
    }

    /// Set options applied to every call; per-call options take precedence.
    ///
    /// `readFromNetwork` is never taken from the defaults: only the options
    /// passed to a call can turn on fetching.
    pub fn with_defaults(mut self, defaults: RenderOptions) -> Self {
        self.defaults = defaults;
        self
    }

    /// Default options used when a call leaves fields unset
    pub fn defaults(&self) -> &RenderOptions {
        &self.defaults
    }

    /// The fetcher used for `readFromNetwork`
    pub fn fetcher(&self) -> &F {
        &self.fetcher
    }

    /// Render with this viewer's fetcher and defaults. See [`render`].
    pub async fn render<H: Host>(
        &self,
        host: &mut H,
        target: &str,
        file_name: &str,
        payload: &str,
        options: Option<&RenderOptions>,
    ) -> Result<H::Node> {
        let mut merged = match options {
            Some(options) => options.merged_over(&self.defaults),
            None => self.defaults.clone(),
        };
        merged.read_from_network = options.and_then(|o| o.read_from_network);
        render(host, &self.fetcher, target, file_name, payload, Some(&merged)).await
    }
}
