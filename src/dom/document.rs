//! In-memory document implementing [`Host`]

use super::Host;

/// Handle to a node inside a [`Document`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
pub(super) enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone)]
pub(super) struct Element {
    pub tag: String,
    pub attributes: Vec<(String, String)>,
    pub classes: Vec<String>,
    pub style: Vec<(String, String)>,
    pub children: Vec<NodeId>,
}

impl Element {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_lowercase(),
            attributes: Vec::new(),
            classes: Vec::new(),
            style: Vec::new(),
            children: Vec::new(),
        }
    }
}

/// Arena-backed element tree rooted at a `body` element
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    parents: Vec<Option<NodeId>>,
    body: NodeId,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Create an empty document containing only `body`
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::Element(Element::new("body"))],
            parents: vec![None],
            body: NodeId(0),
        }
    }

    /// The root element
    pub fn body(&self) -> NodeId {
        self.body
    }

    /// Create a `tag` element with the given id and attach it to `body`
    pub fn mount_point(&mut self, tag: &str, id: &str) -> NodeId {
        let node = self.create_element(tag);
        self.set_attribute(&node, "id", id);
        let body = self.body;
        self.append_child(&body, &node);
        node
    }

    /// Total number of nodes ever created (elements and text)
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Tag name of an element (None for text nodes)
    pub fn tag(&self, node: NodeId) -> Option<&str> {
        self.element(node).map(|e| e.tag.as_str())
    }

    /// Value of a style property, if set
    pub fn style(&self, node: NodeId, property: &str) -> Option<&str> {
        self.element(node).and_then(|e| lookup(&e.style, property))
    }

    /// Number of style properties set on an element
    pub fn style_count(&self, node: NodeId) -> usize {
        self.element(node).map_or(0, |e| e.style.len())
    }

    /// Value of an attribute, if set
    pub fn attribute(&self, node: NodeId, name: &str) -> Option<&str> {
        self.element(node).and_then(|e| lookup(&e.attributes, name))
    }

    /// Class list of an element
    pub fn classes(&self, node: NodeId) -> &[String] {
        self.element(node)
            .map(|e| e.classes.as_slice())
            .unwrap_or(&[])
    }

    /// Whether an element carries `class`
    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.classes(node).iter().any(|c| c == class)
    }

    /// Child nodes in order
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        self.element(node)
            .map(|e| e.children.as_slice())
            .unwrap_or(&[])
    }

    /// Parent of a node, if attached
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.parents.get(node.0).copied().flatten()
    }

    /// Whether `node` is a text node
    pub fn is_text(&self, node: NodeId) -> bool {
        matches!(self.nodes.get(node.0), Some(Node::Text(_)))
    }

    /// Concatenated text of a node and all its descendants
    pub fn text_content(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(node, &mut out);
        out
    }

    fn collect_text(&self, node: NodeId, out: &mut String) {
        match self.nodes.get(node.0) {
            Some(Node::Text(text)) => out.push_str(text),
            Some(Node::Element(e)) => {
                for child in &e.children {
                    self.collect_text(*child, out);
                }
            }
            None => {}
        }
    }

    pub(super) fn node(&self, node: NodeId) -> Option<&Node> {
        self.nodes.get(node.0)
    }

    fn element(&self, node: NodeId) -> Option<&Element> {
        match self.nodes.get(node.0) {
            Some(Node::Element(e)) => Some(e),
            _ => None,
        }
    }

    fn element_mut(&mut self, node: NodeId) -> Option<&mut Element> {
        match self.nodes.get_mut(node.0) {
            Some(Node::Element(e)) => Some(e),
            _ => None,
        }
    }

    fn push(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        self.parents.push(None);
        NodeId(self.nodes.len() - 1)
    }

    fn detach(&mut self, node: NodeId) {
        if let Some(parent) = self.parent(node) {
            if let Some(e) = self.element_mut(parent) {
                e.children.retain(|c| *c != node);
            }
            self.parents[node.0] = None;
        }
    }

    fn is_ancestor_or_self(&self, candidate: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == candidate {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    fn matches(&self, node: NodeId, selector: &str) -> bool {
        let Some(e) = self.element(node) else {
            return false;
        };
        if let Some(id) = selector.strip_prefix('#') {
            lookup(&e.attributes, "id") == Some(id)
        } else if let Some(class) = selector.strip_prefix('.') {
            e.classes.iter().any(|c| c == class)
        } else {
            e.tag.eq_ignore_ascii_case(selector)
        }
    }

    fn find(&self, node: NodeId, selector: &str) -> Option<NodeId> {
        if self.matches(node, selector) {
            return Some(node);
        }
        self.children(node)
            .iter()
            .find_map(|child| self.find(*child, selector))
    }
}

fn lookup<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

fn upsert(pairs: &mut Vec<(String, String)>, key: &str, value: &str) {
    match pairs.iter_mut().find(|(k, _)| k == key) {
        Some(pair) => pair.1 = value.to_string(),
        None => pairs.push((key.to_string(), value.to_string())),
    }
}

impl Host for Document {
    type Node = NodeId;

    fn create_element(&mut self, tag: &str) -> NodeId {
        self.push(Node::Element(Element::new(tag)))
    }

    fn set_style(&mut self, node: &NodeId, property: &str, value: &str) {
        if let Some(e) = self.element_mut(*node) {
            if value.is_empty() {
                e.style.retain(|(k, _)| k != property);
            } else {
                upsert(&mut e.style, property, value);
            }
        }
    }

    fn set_attribute(&mut self, node: &NodeId, name: &str, value: &str) {
        if let Some(e) = self.element_mut(*node) {
            upsert(&mut e.attributes, name, value);
        }
    }

    fn set_text(&mut self, node: &NodeId, text: &str) {
        let old = match self.element_mut(*node) {
            Some(e) => std::mem::take(&mut e.children),
            None => return,
        };
        for child in old {
            self.parents[child.0] = None;
        }
        if !text.is_empty() {
            let text_node = self.push(Node::Text(text.to_string()));
            self.append_child(node, &text_node);
        }
    }

    fn add_class(&mut self, node: &NodeId, class: &str) {
        if let Some(e) = self.element_mut(*node) {
            if !e.classes.iter().any(|c| c == class) {
                e.classes.push(class.to_string());
            }
        }
    }

    fn append_child(&mut self, parent: &NodeId, child: &NodeId) {
        // An element cannot become its own descendant
        if self.element(*parent).is_none() || self.is_ancestor_or_self(*child, *parent) {
            return;
        }
        self.detach(*child);
        if let Some(e) = self.element_mut(*parent) {
            e.children.push(*child);
        }
        self.parents[child.0] = Some(*parent);
    }

    fn query(&self, selector: &str) -> Option<NodeId> {
        let selector = selector.trim();
        if selector.is_empty() {
            return None;
        }
        self.find(self.body, selector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_document_has_body() {
        let doc = Document::new();
        assert_eq!(doc.tag(doc.body()), Some("body"));
        assert!(doc.children(doc.body()).is_empty());
        assert_eq!(doc.query("body"), Some(doc.body()));
    }

    #[test]
    fn test_query_by_id_class_and_tag() {
        let mut doc = Document::new();
        let target = doc.mount_point("div", "target");
        let span = doc.create_element("span");
        doc.add_class(&span, "note");
        doc.append_child(&target, &span);

        assert_eq!(doc.query("#target"), Some(target));
        assert_eq!(doc.query(".note"), Some(span));
        assert_eq!(doc.query("SPAN"), Some(span));
        assert_eq!(doc.query("#missing"), None);
        assert_eq!(doc.query(""), None);
    }

    #[test]
    fn test_query_skips_detached_elements() {
        let mut doc = Document::new();
        let detached = doc.create_element("div");
        doc.set_attribute(&detached, "id", "floating");
        assert_eq!(doc.query("#floating"), None);
    }

    #[test]
    fn test_query_returns_first_in_document_order() {
        let mut doc = Document::new();
        let first = doc.mount_point("div", "a");
        let second = doc.mount_point("div", "b");
        doc.add_class(&first, "x");
        doc.add_class(&second, "x");
        assert_eq!(doc.query(".x"), Some(first));
    }

    #[test]
    fn test_set_style_and_clear() {
        let mut doc = Document::new();
        let div = doc.create_element("div");
        doc.set_style(&div, "margin", "4px");
        doc.set_style(&div, "padding", "2px");
        doc.set_style(&div, "margin", "8px");
        assert_eq!(doc.style(div, "margin"), Some("8px"));
        assert_eq!(doc.style_count(div), 2);

        doc.set_style(&div, "margin", "");
        assert_eq!(doc.style(div, "margin"), None);
        assert_eq!(doc.style_count(div), 1);
    }

    #[test]
    fn test_set_text_replaces_children() {
        let mut doc = Document::new();
        let div = doc.create_element("div");
        let br = doc.create_element("br");
        doc.append_child(&div, &br);

        doc.set_text(&div, "hello");
        assert_eq!(doc.children(div).len(), 1);
        assert!(doc.is_text(doc.children(div)[0]));
        assert_eq!(doc.text_content(div), "hello");
        assert_eq!(doc.parent(br), None);

        doc.set_text(&div, "");
        assert!(doc.children(div).is_empty());
    }

    #[test]
    fn test_append_child_moves_node() {
        let mut doc = Document::new();
        let a = doc.mount_point("div", "a");
        let b = doc.mount_point("div", "b");
        let child = doc.create_element("p");

        doc.append_child(&a, &child);
        doc.append_child(&b, &child);

        assert!(doc.children(a).is_empty());
        assert_eq!(doc.children(b), &[child]);
        assert_eq!(doc.parent(child), Some(b));
    }

    #[test]
    fn test_append_child_rejects_cycles() {
        let mut doc = Document::new();
        let outer = doc.mount_point("div", "outer");
        let inner = doc.create_element("div");
        doc.append_child(&outer, &inner);

        doc.append_child(&inner, &outer);
        assert_eq!(doc.parent(outer), Some(doc.body()));
        assert!(doc.children(inner).is_empty());
    }

    #[test]
    fn test_add_class_is_deduplicated() {
        let mut doc = Document::new();
        let div = doc.create_element("div");
        doc.add_class(&div, "row");
        doc.add_class(&div, "row");
        assert_eq!(doc.classes(div), &["row".to_string()]);
        assert!(doc.has_class(div, "row"));
    }
}
