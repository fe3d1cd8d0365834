//! Platform-neutral description of DOM output.
//!
//! View and scene functions return [`Node`] trees; the web front-end turns
//! them into real elements. Keeping the description plain data lets the host
//! tests compare two renders with `==`.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Namespace {
    Html,
    Svg,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Element {
    pub ns: Namespace,
    pub tag: &'static str,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(ns: Namespace, tag: &'static str) -> Self {
        Self {
            ns,
            tag,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    #[inline]
    pub fn html(tag: &'static str) -> Self {
        Self::new(Namespace::Html, tag)
    }

    #[inline]
    pub fn svg(tag: &'static str) -> Self {
        Self::new(Namespace::Svg, tag)
    }

    pub fn attr(mut self, name: &'static str, value: impl ToString) -> Self {
        self.attrs.push((name, value.to_string()));
        self
    }

    #[inline]
    pub fn class(self, value: &str) -> Self {
        self.attr("class", value)
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    pub fn children<I>(mut self, nodes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Depth-first search for the element carrying `id`.
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        if self.get_attr("id") == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|c| match c {
            Node::Element(el) => el.find_by_id(id),
            Node::Text(_) => None,
        })
    }

    /// Concatenated text of this element and its descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for c in &self.children {
            match c {
                Node::Text(t) => out.push_str(t),
                Node::Element(el) => out.push_str(&el.text_content()),
            }
        }
        out
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

impl Node {
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }

    /// True when both trees have the same tags, namespaces, attribute names
    /// and child counts, so one can be patched into the other attribute-wise.
    pub fn same_shape(&self, other: &Node) -> bool {
        match (self, other) {
            (Node::Text(_), Node::Text(_)) => true,
            (Node::Element(a), Node::Element(b)) => {
                a.ns == b.ns
                    && a.tag == b.tag
                    && a.attrs.len() == b.attrs.len()
                    && a.attrs.iter().zip(&b.attrs).all(|(x, y)| x.0 == y.0)
                    && a.children.len() == b.children.len()
                    && a.children
                        .iter()
                        .zip(&b.children)
                        .all(|(x, y)| x.same_shape(y))
            }
            _ => false,
        }
    }
}
