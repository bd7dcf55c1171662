//! Image, video and audio views: a single native media element

use super::common::apply_style;
use super::View;
use crate::core::{PresentationMode, RenderOptions};
use crate::dom::Host;

/// Which native media element to build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Video,
    Audio,
}

impl MediaKind {
    /// Media kind for a presentation mode (None for text)
    pub fn from_mode(mode: PresentationMode) -> Option<Self> {
        match mode {
            PresentationMode::Text => None,
            PresentationMode::Image => Some(Self::Image),
            PresentationMode::Video => Some(Self::Video),
            PresentationMode::Audio => Some(Self::Audio),
        }
    }

    /// Element tag name
    pub fn tag(self) -> &'static str {
        match self {
            Self::Image => "img",
            Self::Video => "video",
            Self::Audio => "audio",
        }
    }

    /// Whether the element shows native playback controls
    pub fn has_controls(self) -> bool {
        matches!(self, Self::Video | Self::Audio)
    }
}

/// Built media container
#[derive(Debug, Clone)]
pub struct MediaContainer<N> {
    /// Outer element returned to the caller
    pub root: N,
    /// The `img` / `video` / `audio` element
    pub media: N,
}

impl<N: Clone> MediaContainer<N> {
    /// Build the wrapper and media element and apply options
    pub fn build<H: Host<Node = N>>(
        host: &mut H,
        kind: MediaKind,
        options: &RenderOptions,
    ) -> Self {
        let root = host.create_element("div");
        let media = host.create_element(kind.tag());
        if kind.has_controls() {
            host.set_attribute(&media, "controls", "");
        }
        host.append_child(&root, &media);

        apply_style(host, &root, "margin", options.margin.as_deref());
        apply_style(host, &root, "padding", options.padding.as_deref());
        apply_style(host, &media, "width", options.width.as_deref());
        apply_style(host, &media, "height", options.height.as_deref());

        Self { root, media }
    }

    /// Point the media element at `source`. Nothing is validated.
    pub fn set_source<H: Host<Node = N>>(&self, host: &mut H, source: &str) {
        host.set_attribute(&self.media, "src", source);
    }
}

/// Image, video or audio presentation mode
#[derive(Debug, Clone, Copy)]
pub struct MediaView {
    kind: MediaKind,
}

impl MediaView {
    pub fn new(kind: MediaKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> MediaKind {
        self.kind
    }
}

impl View for MediaView {
    type Container<N: Clone> = MediaContainer<N>;

    fn build_container<H: Host>(
        &self,
        host: &mut H,
        options: &RenderOptions,
    ) -> Self::Container<H::Node> {
        MediaContainer::build(host, self.kind, options)
    }

    fn render<H: Host>(
        &self,
        host: &mut H,
        mount: &H::Node,
        payload: &str,
        options: &RenderOptions,
    ) -> H::Node {
        let container = self.build_container(host, options);
        container.set_source(host, payload);
        host.append_child(mount, &container.root);
        container.root
    }
}
