//! Common utilities for container builders

use crate::dom::Host;

/// Class of the flex row holding both text columns
pub const RESULT_CONTAINER_CLASS: &str = "result-container";

/// Class of the line number column
pub const LINE_COUNT_CLASS: &str = "line-count-container";

/// Class of the text content column
pub const STRINGS_CLASS: &str = "strings-container";

/// Gap between the line number column and the text column
pub const LINE_NUMBER_GAP: &str = "10px";

/// Apply an optional style value. `None` leaves the host default untouched.
pub fn apply_style<H: Host>(host: &mut H, node: &H::Node, property: &str, value: Option<&str>) {
    if let Some(value) = value {
        host.set_style(node, property, value);
    }
}

/// Create a `div` with the given style pairs already set
pub fn styled_div<H: Host>(host: &mut H, styles: &[(&str, &str)]) -> H::Node {
    let div = host.create_element("div");
    for (property, value) in styles {
        host.set_style(&div, property, value);
    }
    div
}
