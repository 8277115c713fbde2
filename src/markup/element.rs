//! A minimal element tree and its serializer.

use super::format::{escape_markup, IndentWriter};

/// What an [`Element`] holds. An element carries text or child elements,
/// never both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Content {
    #[default]
    Empty,
    Text(String),
    Elements(Vec<Element>),
}

/// A markup element with ordered attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub name: &'static str,
    pub attributes: Vec<(&'static str, String)>,
    pub content: Content,
}

impl Element {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            attributes: Vec::new(),
            content: Content::Empty,
        }
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attributes.push((name, value.into()));
        self
    }

    /// Append a child element. Replaces any text content.
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Elements(children) => children.push(child),
            content => *content = Content::Elements(vec![child]),
        }
        self
    }

    pub fn children(self, children: impl IntoIterator<Item = Element>) -> Self {
        children.into_iter().fold(self, Element::child)
    }

    /// Set the text content. Replaces any child elements.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    fn open_tag(&self) -> String {
        let mut tag = format!("<{}", self.name);
        for (name, value) in &self.attributes {
            tag.push_str(&format!(" {}=\"{}\"", name, escape_markup(value)));
        }
        tag
    }

    /// Serialize this element and its descendants.
    ///
    /// Empty elements self-close, text stays on the element's line, child
    /// elements nest one level deeper.
    pub fn write(&self, w: &mut IndentWriter) {
        let open = self.open_tag();
        match &self.content {
            Content::Empty => w.write_line(&format!("{} />", open)),
            Content::Text(text) => w.write_line(&format!(
                "{}>{}</{}>",
                open,
                escape_markup(text),
                self.name
            )),
            Content::Elements(children) => {
                w.write_line(&format!("{}>", open));
                w.indent();
                for child in children {
                    child.write(w);
                }
                w.dedent();
                w.write_line(&format!("</{}>", self.name));
            }
        }
    }

    /// Serialize to a string.
    pub fn to_markup(&self) -> String {
        let mut w = IndentWriter::new();
        self.write(&mut w);
        w.into_string()
    }
}
