//! Presentational node tree.
//!
//! The renderer builds plain data, not a live document: elements carrying a
//! class list, inline styles, attributes, an optional click-handler key and
//! ordered children. Hosts walk the tree (or serialize it) and materialize
//! real elements themselves; [`Node::write_html`] gives an HTML rendition for
//! inspection and tests.

use std::fmt;

/// A node of the presentational tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
    /// An ownerless group of nodes, spliced into its parent.
    Fragment(Vec<Node>),
}

/// An element with classes, styles, attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    pub classes: Vec<String>,
    /// Inline `style` properties in insertion order.
    pub styles: Vec<(String, String)>,
    /// `data-*` and other attributes in insertion order.
    pub attrs: Vec<(String, String)>,
    /// Click-handler key for the host to wire. Rendered as a
    /// `data-on-click` attribute in HTML output.
    pub on_click: Option<String>,
    pub children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Element {
            tag: tag.into(),
            classes: Vec::new(),
            styles: Vec::new(),
            attrs: Vec::new(),
            on_click: None,
            children: Vec::new(),
        }
    }

    /// Adds one class.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Adds every class, in order.
    pub fn classes<I>(mut self, classes: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.classes.extend(classes.into_iter().map(Into::into));
        self
    }

    /// Sets one inline style property.
    pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.styles.push((property.into(), value.into()));
        self
    }

    /// Sets one attribute.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Records a click-handler key for the host to wire.
    pub fn on_click(mut self, handler: impl Into<String>) -> Self {
        self.on_click = Some(handler.into());
        self
    }

    /// Appends one child.
    pub fn child(mut self, node: Node) -> Self {
        self.children.push(node);
        self
    }

    /// Appends an ordered sequence of optional children; `None` entries are
    /// skipped.
    pub fn children<I>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = Option<Node>>,
    {
        self.children.extend(nodes.into_iter().flatten());
        self
    }

    pub fn into_node(self) -> Node {
        Node::Element(self)
    }
}

/// Wraps a string as a text node.
pub fn text(s: impl Into<String>) -> Node {
    Node::Text(s.into())
}

/// Groups an ordered sequence of optional nodes without introducing an
/// element; `None` entries are skipped.
pub fn fragment<I>(nodes: I) -> Node
where
    I: IntoIterator<Item = Option<Node>>,
{
    Node::Fragment(nodes.into_iter().flatten().collect())
}

/// `0x`-prefixed lowercase hex.
pub fn hex(n: u64) -> String {
    format!("{n:#x}")
}

/// Bare lowercase hex, e.g. for single byte values.
pub fn byte_hex(n: u64) -> String {
    format!("{n:x}")
}

impl Node {
    /// Writes the tree as HTML text. Text content and attribute values are
    /// escaped; fragments splice their children into the surrounding output.
    pub fn write_html(&self, out: &mut impl fmt::Write) -> fmt::Result {
        match self {
            Node::Text(s) => write_escaped(out, s),
            Node::Fragment(children) => {
                for child in children {
                    child.write_html(out)?;
                }
                Ok(())
            }
            Node::Element(el) => {
                write!(out, "<{}", el.tag)?;
                if !el.classes.is_empty() {
                    write!(out, " class=\"{}\"", el.classes.join(" "))?;
                }
                if !el.styles.is_empty() {
                    out.write_str(" style=\"")?;
                    for (property, value) in &el.styles {
                        write!(out, "{property}:{value};")?;
                    }
                    out.write_str("\"")?;
                }
                for (name, value) in &el.attrs {
                    write!(out, " {name}=\"")?;
                    write_escaped(out, value)?;
                    out.write_str("\"")?;
                }
                if let Some(handler) = &el.on_click {
                    out.write_str(" data-on-click=\"")?;
                    write_escaped(out, handler)?;
                    out.write_str("\"")?;
                }
                out.write_str(">")?;
                for child in &el.children {
                    child.write_html(out)?;
                }
                write!(out, "</{}>", el.tag)
            }
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_html(f)
    }
}

fn write_escaped(out: &mut impl fmt::Write, s: &str) -> fmt::Result {
    for c in s.chars() {
        match c {
            '&' => out.write_str("&amp;")?,
            '<' => out.write_str("&lt;")?,
            '>' => out.write_str("&gt;")?,
            '"' => out.write_str("&quot;")?,
            _ => out.write_char(c)?,
        }
    }
    Ok(())
}
