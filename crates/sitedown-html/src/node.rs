//! HTML element tree.
//!
//! An [`HtmlNode`] is either a leaf holding a literal value or an internal
//! node owning its children. A node without a tag renders its content bare,
//! which is how plain text runs sit between tagged siblings.

use sitedown_core::{Result, SitedownError};

/// Elements written as a lone opening tag.
const VOID_ELEMENTS: &[&str] = &["img"];

/// One HTML element or bare text run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlNode {
    /// Tag name; `None` renders the content without a wrapping element
    pub tag: Option<String>,
    /// Literal text of a leaf
    pub value: Option<String>,
    /// Children of an internal node
    pub children: Vec<HtmlNode>,
    /// Attributes in insertion order
    pub attributes: Vec<(String, String)>,
}

impl HtmlNode {
    /// Bare text with no tag.
    pub fn text(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            ..Self::default()
        }
    }

    /// Tagged leaf holding a literal value.
    pub fn leaf(tag: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            value: Some(value.into()),
            ..Self::default()
        }
    }

    /// Tagged element owning `children`.
    pub fn parent(tag: impl Into<String>, children: Vec<HtmlNode>) -> Self {
        Self {
            tag: Some(tag.into()),
            children,
            ..Self::default()
        }
    }

    /// Tagged element with no content, such as `img`.
    pub fn empty(tag: impl Into<String>) -> Self {
        Self {
            tag: Some(tag.into()),
            ..Self::default()
        }
    }

    /// Append an attribute.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Serialize the node and its subtree.
    ///
    /// Values are written verbatim, without escaping. Fails with
    /// `MalformedNode` on a node that has no tag, value or children,
    /// anywhere in the tree.
    pub fn to_html(&self) -> Result<String> {
        let mut out = String::new();
        self.write_html(&mut out)?;
        Ok(out)
    }

    fn write_html(&self, out: &mut String) -> Result<()> {
        let Some(tag) = self.tag.as_deref() else {
            if let Some(value) = &self.value {
                out.push_str(value);
                return Ok(());
            }
            if self.children.is_empty() {
                return Err(SitedownError::MalformedNode);
            }
            return self.write_children(out);
        };

        self.write_open_tag(tag, out);
        if let Some(value) = &self.value {
            out.push_str(value);
        } else if self.children.is_empty() && VOID_ELEMENTS.contains(&tag) {
            return Ok(());
        } else {
            self.write_children(out)?;
        }
        out.push_str("</");
        out.push_str(tag);
        out.push('>');
        Ok(())
    }

    fn write_open_tag(&self, tag: &str, out: &mut String) {
        out.push('<');
        out.push_str(tag);
        for (name, value) in &self.attributes {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            out.push_str(value);
            out.push('"');
        }
        out.push('>');
    }

    fn write_children(&self, out: &mut String) -> Result<()> {
        for child in &self.children {
            child.write_html(out)?;
        }
        Ok(())
    }
}
