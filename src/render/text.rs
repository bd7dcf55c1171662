//! Text view: numbered lines in two side-by-side columns

use super::common::{
    apply_style, styled_div, LINE_COUNT_CLASS, LINE_NUMBER_GAP, RESULT_CONTAINER_CLASS,
    STRINGS_CLASS,
};
use log::trace;

use super::View;
use crate::core::RenderOptions;
use crate::dom::Host;

/// Built text container with a handle to every part that gets populated
#[derive(Debug, Clone)]
pub struct TextContainer<N> {
    /// Outer scrollable element returned to the caller
    pub root: N,
    /// Flex row holding both columns
    pub result: N,
    /// Column of line numbers
    pub line_numbers: N,
    /// Column of line contents
    pub lines: N,
    line_spacing: Option<String>,
}

impl<N: Clone> TextContainer<N> {
    /// Build the styled, still empty container
    pub fn build<H: Host<Node = N>>(host: &mut H, options: &RenderOptions) -> Self {
        let root = styled_div(
            host,
            &[
                ("display", "flex"),
                ("flex-direction", "row"),
                ("overflow", "auto"),
            ],
        );

        let line_numbers = styled_div(
            host,
            &[("width", "fit-content"), ("margin-right", LINE_NUMBER_GAP)],
        );
        host.add_class(&line_numbers, LINE_COUNT_CLASS);

        let lines = host.create_element("div");
        host.add_class(&lines, STRINGS_CLASS);

        let result = styled_div(
            host,
            &[
                ("white-space", "pre"),
                ("display", "flex"),
                ("flex-direction", "row"),
            ],
        );
        host.add_class(&result, RESULT_CONTAINER_CLASS);

        host.append_child(&result, &line_numbers);
        host.append_child(&result, &lines);
        host.append_child(&root, &result);

        let container = Self {
            root,
            result,
            line_numbers,
            lines,
            line_spacing: options.margin_between_strings.clone(),
        };
        container.apply_options(host, options);
        container
    }

    fn apply_options<H: Host<Node = N>>(&self, host: &mut H, options: &RenderOptions) {
        apply_style(host, &self.root, "margin", options.margin.as_deref());
        apply_style(host, &self.root, "padding", options.padding.as_deref());
        apply_style(host, &self.root, "font-family", options.font_family.as_deref());
        apply_style(host, &self.root, "font-size", options.font_size.as_deref());
        apply_style(host, &self.root, "width", options.width.as_deref());
        apply_style(host, &self.root, "height", options.height.as_deref());
        apply_style(
            host,
            &self.root,
            "background-color",
            options.background_color.as_deref(),
        );
        apply_style(host, &self.line_numbers, "color", options.number_color.as_deref());
        apply_style(host, &self.lines, "color", options.text_color.as_deref());

        // Hidden, but the column keeps its space
        if !options.shows_line_numbers() {
            host.set_style(&self.line_numbers, "visibility", "hidden");
        }
    }

    /// Append one numbered line holding `text` as is
    pub fn append_line<H: Host<Node = N>>(&self, host: &mut H, text: &str, number: usize) {
        let line = host.create_element("div");
        host.set_text(&line, text);
        self.append_row(host, line, number);
    }

    /// Append one numbered line holding only a line break
    pub fn append_placeholder<H: Host<Node = N>>(&self, host: &mut H, number: usize) {
        let line = host.create_element("div");
        let br = host.create_element("br");
        host.append_child(&line, &br);
        self.append_row(host, line, number);
    }

    fn append_row<H: Host<Node = N>>(&self, host: &mut H, line: N, number: usize) {
        let count = host.create_element("div");
        host.set_text(&count, &number.to_string());
        host.set_style(&count, "user-select", "none");

        let spacing = self.line_spacing.as_deref();
        apply_style(host, &count, "margin-bottom", spacing);
        apply_style(host, &line, "margin-bottom", spacing);

        host.append_child(&self.line_numbers, &count);
        host.append_child(&self.lines, &line);
    }
}

/// Split text into display lines.
///
/// Splits on `\n` and drops one trailing `\r` per line, so the number of lines
/// is always one more than the number of `\n` characters.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

/// Text presentation mode
#[derive(Debug, Clone, Copy, Default)]
pub struct TextView;

impl View for TextView {
    type Container<N: Clone> = TextContainer<N>;

    fn build_container<H: Host>(
        &self,
        host: &mut H,
        options: &RenderOptions,
    ) -> Self::Container<H::Node> {
        TextContainer::build(host, options)
    }

    fn render<H: Host>(
        &self,
        host: &mut H,
        mount: &H::Node,
        payload: &str,
        options: &RenderOptions,
    ) -> H::Node {
        let container = self.build_container(host, options);

        let lines = split_lines(payload);
        if let [only] = lines.as_slice() {
            // A lone line is kept verbatim, even when empty
            container.append_line(host, only, 1);
        } else {
            for (idx, line) in lines.iter().enumerate() {
                if line.trim().is_empty() {
                    container.append_placeholder(host, idx + 1);
                } else {
                    container.append_line(host, line, idx + 1);
                }
            }
        }
        trace!("text view rendered {} lines", lines.len());

        host.append_child(mount, &container.root);
        container.root
    }
}
