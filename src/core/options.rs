//! Per-call render options
//!
//! Every field is optional. `None` means "apply nothing", so the host's own
//! defaults stay in effect. An explicit empty string is still forwarded to the
//! host, which treats it as clearing the property.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Styling and retrieval options for a single render call
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderOptions {
    /// Outer container margin (CSS value)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<String>,
    /// Outer container padding (CSS value)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub padding: Option<String>,
    /// Font family (text mode)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    /// Font size (text mode)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    /// Width: outer container for text, media element otherwise
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
    /// Height: outer container for text, media element otherwise
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<String>,
    /// Background color (text mode)
    #[serde(alias = "bg", skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    /// Line number column color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_color: Option<String>,
    /// Content column color
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<String>,
    /// Bottom margin applied to every line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin_between_strings: Option<String>,
    /// Show the line number column (default: true)
    #[serde(alias = "numerated", skip_serializing_if = "Option::is_none")]
    pub show_line_numbers: Option<bool>,
    /// Treat the text payload as an address and fetch it (default: false)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub read_from_network: Option<bool>,
}

impl RenderOptions {
    /// Parse options from a JSON object with camelCase keys
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Whether the line number column is visible
    pub fn shows_line_numbers(&self) -> bool {
        self.show_line_numbers.unwrap_or(true)
    }

    /// Whether the payload should be fetched before rendering
    pub fn reads_from_network(&self) -> bool {
        self.read_from_network.unwrap_or(false)
    }

    /// Fill every unset field from `defaults`; fields set here win.
    pub fn merged_over(&self, defaults: &RenderOptions) -> RenderOptions {
        fn pick<T: Clone>(own: &Option<T>, fallback: &Option<T>) -> Option<T> {
            own.as_ref().or(fallback.as_ref()).cloned()
        }

        RenderOptions {
            margin: pick(&self.margin, &defaults.margin),
            padding: pick(&self.padding, &defaults.padding),
            font_family: pick(&self.font_family, &defaults.font_family),
            font_size: pick(&self.font_size, &defaults.font_size),
            width: pick(&self.width, &defaults.width),
            height: pick(&self.height, &defaults.height),
            background_color: pick(&self.background_color, &defaults.background_color),
            number_color: pick(&self.number_color, &defaults.number_color),
            text_color: pick(&self.text_color, &defaults.text_color),
            margin_between_strings: pick(
                &self.margin_between_strings,
                &defaults.margin_between_strings,
            ),
            show_line_numbers: pick(&self.show_line_numbers, &defaults.show_line_numbers),
            read_from_network: pick(&self.read_from_network, &defaults.read_from_network),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = RenderOptions::default();
        assert!(options.shows_line_numbers());
        assert!(!options.reads_from_network());
        assert!(options.margin.is_none());
    }

    #[test]
    fn test_from_json_camel_case() {
        let options = RenderOptions::from_json(
            r##"{
                "fontFamily": "monospace",
                "marginBetweenStrings": "4px",
                "showLineNumbers": false,
                "readFromNetwork": true,
                "backgroundColor": "#222"
            }"##,
        )
        .unwrap();

        assert_eq!(options.font_family.as_deref(), Some("monospace"));
        assert_eq!(options.margin_between_strings.as_deref(), Some("4px"));
        assert_eq!(options.background_color.as_deref(), Some("#222"));
        assert!(!options.shows_line_numbers());
        assert!(options.reads_from_network());
    }

    #[test]
    fn test_bg_alias() {
        let options = RenderOptions::from_json(r#"{"bg": "black"}"#).unwrap();
        assert_eq!(options.background_color.as_deref(), Some("black"));
    }

    #[test]
    fn test_numerated_alias() {
        let options = RenderOptions::from_json(r#"{"numerated": false}"#).unwrap();
        assert_eq!(options.show_line_numbers, Some(false));
        assert!(!options.shows_line_numbers());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let options = RenderOptions::from_json(r#"{"colour": "red", "padding": "2px"}"#).unwrap();
        assert_eq!(options.padding.as_deref(), Some("2px"));
    }

    #[test]
    fn test_invalid_json_is_error() {
        assert!(RenderOptions::from_json("{not json").is_err());
    }

    #[test]
    fn test_serialize_skips_unset() {
        let options = RenderOptions {
            text_color: Some("red".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&options).unwrap();
        assert_eq!(json, r#"{"textColor":"red"}"#);
    }

    #[test]
    fn test_merged_over() {
        let defaults = RenderOptions {
            margin: Some("8px".to_string()),
            font_size: Some("12px".to_string()),
            show_line_numbers: Some(false),
            ..Default::default()
        };
        let own = RenderOptions {
            font_size: Some("14px".to_string()),
            show_line_numbers: Some(true),
            ..Default::default()
        };

        let merged = own.merged_over(&defaults);
        assert_eq!(merged.margin.as_deref(), Some("8px"));
        assert_eq!(merged.font_size.as_deref(), Some("14px"));
        assert!(merged.shows_line_numbers());
        assert!(merged.padding.is_none());
    }

    #[test]
    fn test_explicit_empty_overrides_default() {
        let defaults = RenderOptions {
            margin: Some("8px".to_string()),
            ..Default::default()
        };
        let own = RenderOptions {
            margin: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(own.merged_over(&defaults).margin.as_deref(), Some(""));
    }
}
