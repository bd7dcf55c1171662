//! Presentation mode definitions and extension classification

/// Extensions rendered as numbered text lines
const TEXT_EXTENSIONS: &[&str] = &["txt", "log", "md", "cfg", "ini", "json", "xml", "csv", "yaml"];

/// Extensions rendered through an `img` element
const IMAGE_EXTENSIONS: &[&str] = &[
    "jpg", "jpeg", "png", "gif", "bmp", "tiff", "tif", "svg", "webp", "ico",
];

/// Extensions rendered through a `video` element
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "avi", "mov", "mkv", "wmv", "flv", "mpeg"];

/// Extensions rendered through an `audio` element
const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "ogg", "aac"];

/// How a file's content is presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PresentationMode {
    /// Numbered lines of text
    #[default]
    Text,
    /// Native image element
    Image,
    /// Native video element with controls
    Video,
    /// Native audio element with controls
    Audio,
}

impl PresentationMode {
    /// Recognized lowercase extensions for this mode
    pub fn extensions(self) -> &'static [&'static str] {
        match self {
            Self::Text => TEXT_EXTENSIONS,
            Self::Image => IMAGE_EXTENSIONS,
            Self::Video => VIDEO_EXTENSIONS,
            Self::Audio => AUDIO_EXTENSIONS,
        }
    }

    /// Mode name for display and logging
    pub fn name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Video => "video",
            Self::Audio => "audio",
        }
    }
}

impl std::fmt::Display for PresentationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Extract the "extension" of a file name: everything after the last `.`.
///
/// A name without any `.` is returned whole.
pub fn extension(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(idx) => &file_name[idx + 1..],
        None => file_name,
    }
}

/// Classify a file name into a presentation mode (case-insensitive).
///
/// Unrecognized extensions fall back to [`PresentationMode::Text`].
pub fn classify(file_name: &str) -> PresentationMode {
    let ext = extension(file_name).to_lowercase();

    [
        PresentationMode::Image,
        PresentationMode::Video,
        PresentationMode::Audio,
    ]
    .into_iter()
    .find(|mode| mode.extensions().contains(&ext.as_str()))
    .unwrap_or(PresentationMode::Text)
}
