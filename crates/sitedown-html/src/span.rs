//! Rendering of inline spans into element nodes.

use sitedown_parser::Span;

use crate::node::HtmlNode;

impl From<Span> for HtmlNode {
    fn from(span: Span) -> Self {
        match span {
            Span::Plain(text) => HtmlNode::text(text),
            Span::Bold(text) => HtmlNode::leaf("b", text),
            Span::Italic(text) => HtmlNode::leaf("i", text),
            Span::Code(text) => HtmlNode::leaf("code", text),
            Span::Link { text, url } => HtmlNode::leaf("a", text).with_attribute("href", url),
            Span::Image { alt, url } => HtmlNode::empty("img")
                .with_attribute("src", url)
                .with_attribute("alt", alt),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(span: Span) -> String {
        HtmlNode::from(span).to_html().unwrap()
    }

    #[test]
    fn test_plain_has_no_tag() {
        let node = HtmlNode::from(Span::Plain("just text".to_string()));
        assert_eq!(node.tag, None);
        assert_eq!(node.value.as_deref(), Some("just text"));
        assert_eq!(render(Span::Plain("just text".to_string())), "just text");
    }

    #[test]
    fn test_formatted_spans() {
        assert_eq!(render(Span::Bold("b".to_string())), "<b>b</b>");
        assert_eq!(render(Span::Italic("i".to_string())), "<i>i</i>");
        assert_eq!(render(Span::Code("x = 1".to_string())), "<code>x = 1</code>");
    }

    #[test]
    fn test_link() {
        let node = HtmlNode::from(Span::Link {
            text: "boot".to_string(),
            url: "https://boot.dev".to_string(),
        });
        assert_eq!(node.attributes, vec![("href".to_string(), "https://boot.dev".to_string())]);
        assert_eq!(node.to_html().unwrap(), r#"<a href="https://boot.dev">boot</a>"#);
    }

    #[test]
    fn test_image() {
        let node = HtmlNode::from(Span::Image {
            alt: "a cat".to_string(),
            url: "/cat.png".to_string(),
        });
        assert_eq!(node.value, None);
        assert_eq!(node.to_html().unwrap(), r#"<img src="/cat.png" alt="a cat">"#);
    }
}
