//! Host node tree
//!
//! Renderers never touch a concrete tree directly. They go through [`Host`],
//! the small capability set every rendering environment has to offer.
//! [`Document`] is the in-memory implementation used by default.

mod document;
mod html;

pub use document::{Document, NodeId};

/// Capabilities a rendering environment exposes to the renderers
pub trait Host {
    /// Handle to an element owned by the host
    type Node: Clone;

    /// Create a detached element with the given tag name
    fn create_element(&mut self, tag: &str) -> Self::Node;

    /// Set a style property. An empty value removes the property.
    fn set_style(&mut self, node: &Self::Node, property: &str, value: &str);

    /// Set an attribute, replacing any previous value
    fn set_attribute(&mut self, node: &Self::Node, name: &str, value: &str);

    /// Replace all children of `node` with a single text node
    fn set_text(&mut self, node: &Self::Node, text: &str);

    /// Add a class to the element's class list
    fn add_class(&mut self, node: &Self::Node, class: &str);

    /// Append `child` as the last child of `parent`
    fn append_child(&mut self, parent: &Self::Node, child: &Self::Node);

    /// Find the first attached element matching `selector`
    fn query(&self, selector: &str) -> Option<Self::Node>;
}
