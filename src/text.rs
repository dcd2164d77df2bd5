// HTML cleanup for free-text description fields.
use ego_tree::iter::Edge;
use scraper::{Html, Node};

// Elements that should break the line in the plain-text rendering.
const BLOCK_ELEMENTS: &[&str] = &[
    "h1", "h2", "h3", "h4", "h5", "h6", "p", "br", "li", "div",
];

/// Strips HTML down to plain prose: block-level tags become line breaks,
/// every other tag is dropped, entities are decoded by the HTML parser, and
/// whitespace is collapsed (runs containing a newline become one newline,
/// other runs one space). Empty input yields an empty string.
pub fn clean_html(input: &str) -> String {
    if input.trim().is_empty() {
        return String::new();
    }

    let fragment = Html::parse_fragment(input);
    let mut raw = String::new();

    for edge in fragment.tree.root().traverse() {
        match edge {
            Edge::Open(node) => match node.value() {
                Node::Text(text) => raw.push_str(&text),
                Node::Element(element) if BLOCK_ELEMENTS.contains(&element.name()) => {
                    raw.push('\n');
                }
                _ => {}
            },
            Edge::Close(node) => {
                if let Node::Element(element) = node.value() {
                    if element.name() != "br" && BLOCK_ELEMENTS.contains(&element.name()) {
                        raw.push('\n');
                    }
                }
            }
        }
    }

    collapse_whitespace(&raw)
}

fn collapse_whitespace(raw: &str) -> String {
    let mut result = String::with_capacity(raw.len());
    let mut pending_space = false;
    let mut pending_newline = false;

    for ch in raw.chars() {
        if ch.is_whitespace() {
            pending_space = true;
            if ch == '\n' {
                pending_newline = true;
            }
        } else {
            if !result.is_empty() {
                if pending_newline {
                    result.push('\n');
                } else if pending_space {
                    result.push(' ');
                }
            }
            pending_space = false;
            pending_newline = false;
            result.push(ch);
        }
    }

    result
}
