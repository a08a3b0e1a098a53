//! Stack-machine reconstruction of a widget tree from a token stream.
//!
//! Every consumer of the interchange contract implements this machine: on a
//! tag token push a pending value; on `(` instantiate the pending tag as a
//! child of the current element and descend; on `=` pop value then name and
//! record an attribute; on `)` pop back to the enclosing element.

use crate::instruction::{TOKEN_ATTR, TOKEN_CLOSE, TOKEN_OPEN};

/// A reconstructed widget-tree node.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Element {
    pub tag: String,
    /// Attributes in emission order.
    pub attrs: Vec<(String, String)>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// First value of the named attribute, if present.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Parses a token stream into the forest of root elements.
///
/// Malformed streams never abort the parse: a `=` without two stacked values,
/// a `(` without a pending tag, or a stray `)` at the root is skipped and the
/// rest of the stream still contributes to the output. Leftover value tokens
/// with no consuming structural token are dropped when their element closes.
pub fn parse_tokens<S: AsRef<str>>(tokens: &[S]) -> Vec<Element> {
    let mut roots = Vec::new();
    // Elements currently open, innermost last. Each carries its own pending
    // value stack so stray values can't leak across nesting levels the way a
    // single shared stack would allow.
    let mut open: Vec<(Element, Vec<String>)> = Vec::new();
    let mut root_values: Vec<String> = Vec::new();

    for token in tokens {
        let trimmed = token.as_ref().trim();
        match trimmed {
            TOKEN_OPEN => {
                let values = open
                    .last_mut()
                    .map(|(_, values)| values)
                    .unwrap_or(&mut root_values);
                match values.pop() {
                    Some(tag) => open.push((Element::new(tag), Vec::new())),
                    None => log::warn!("skipping '(' with no pending tag"),
                }
            }
            TOKEN_CLOSE => match open.pop() {
                Some((element, _)) => match open.last_mut() {
                    Some((parent, _)) => parent.children.push(element),
                    None => roots.push(element),
                },
                None => log::warn!("skipping ')' at stream root"),
            },
            TOKEN_ATTR => {
                let values = open
                    .last_mut()
                    .map(|(_, values)| values)
                    .unwrap_or(&mut root_values);
                let value = values.pop();
                let name = values.pop();
                match (name, value) {
                    (Some(name), Some(value)) => match open.last_mut() {
                        Some((element, _)) => element.attrs.push((name, value)),
                        None => log::warn!("skipping attribute {name:?} outside any element"),
                    },
                    (name, value) => {
                        // Push back whatever survived so a later instruction
                        // isn't starved by this malformed one.
                        log::warn!("skipping '=' without a name/value pair");
                        if let Some(value) = value {
                            values.push(value);
                        } else if let Some(name) = name {
                            values.push(name);
                        }
                    }
                }
            }
            value => {
                let values = open
                    .last_mut()
                    .map(|(_, values)| values)
                    .unwrap_or(&mut root_values);
                values.push(value.to_string());
            }
        }
    }

    // Unbalanced stream: close whatever is still open so partial output
    // survives.
    while let Some((element, _)) = open.pop() {
        match open.last_mut() {
            Some((parent, _)) => parent.children.push(element),
            None => roots.push(element),
        }
    }

    roots
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_nested_elements_with_attrs() {
        let stream = tokens(&[
            "vaadin-horizontal-layout",
            "(",
            "vaadin-button",
            "(",
            "textContent",
            "Save",
            "=",
            ")",
            "vaadin-button",
            "(",
            "textContent",
            "Cancel",
            "=",
            ")",
            ")",
        ]);
        let roots = parse_tokens(&stream);
        assert_eq!(roots.len(), 1);
        let layout = &roots[0];
        assert_eq!(layout.tag, "vaadin-horizontal-layout");
        assert_eq!(layout.children.len(), 2);
        assert_eq!(layout.children[0].attr("textContent"), Some("Save"));
        assert_eq!(layout.children[1].attr("textContent"), Some("Cancel"));
    }

    #[test]
    fn test_stray_attr_token_is_skipped() {
        // "=" with only one stacked value: instruction skipped, element kept.
        let stream = tokens(&["div", "(", "orphan", "=", ")"]);
        let roots = parse_tokens(&stream);
        assert_eq!(roots.len(), 1);
        assert!(roots[0].attrs.is_empty());
    }

    #[test]
    fn test_stray_close_and_open_are_skipped() {
        let stream = tokens(&[")", "(", "div", "(", ")"]);
        let roots = parse_tokens(&stream);
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].tag, "div");
    }

    #[test]
    fn test_unbalanced_stream_keeps_partial_output() {
        let stream = tokens(&["div", "(", "span", "("]);
        let roots = parse_tokens(&stream);
        assert_eq!(roots.len(), 1);
        assert_eq!(roots[0].children.len(), 1);
        assert_eq!(roots[0].children[0].tag, "span");
    }
}
