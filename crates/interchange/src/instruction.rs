//! Tagged instruction form and its flat token encoding.

/// Structural token opening the most recently pushed tag.
pub const TOKEN_OPEN: &str = "(";
/// Structural token closing the current element.
pub const TOKEN_CLOSE: &str = ")";
/// Structural token folding the two preceding value tokens into an attribute.
pub const TOKEN_ATTR: &str = "=";

/// One instruction of the flattened widget tree.
///
/// This is the form passed between the flattener and in-process consumers;
/// [`to_tokens`] produces the string form used as the external interchange
/// contract.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Instruction {
    /// Begin an element with the given tag name.
    Open(String),
    /// Attach an attribute to the innermost open element.
    Attr { name: String, value: String },
    /// End the innermost open element.
    Close,
}

impl Instruction {
    pub fn open(tag: impl Into<String>) -> Self {
        Instruction::Open(tag.into())
    }

    pub fn attr(name: impl Into<String>, value: impl Into<String>) -> Self {
        Instruction::Attr {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Encodes instructions as the flat string-token stream.
///
/// `Open(tag)` becomes `tag "("`, `Attr{name, value}` becomes
/// `name value "="` (value on top, popped first), `Close` becomes `")"`.
pub fn to_tokens(instructions: &[Instruction]) -> Vec<String> {
    let mut tokens = Vec::with_capacity(instructions.len() * 2);
    for instruction in instructions {
        match instruction {
            Instruction::Open(tag) => {
                tokens.push(tag.clone());
                tokens.push(TOKEN_OPEN.to_string());
            }
            Instruction::Attr { name, value } => {
                tokens.push(name.clone());
                tokens.push(value.clone());
                tokens.push(TOKEN_ATTR.to_string());
            }
            Instruction::Close => tokens.push(TOKEN_CLOSE.to_string()),
        }
    }
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_encoding() {
        let instructions = vec![
            Instruction::open("vaadin-button"),
            Instruction::attr("textContent", "Save"),
            Instruction::Close,
        ];
        assert_eq!(
            to_tokens(&instructions),
            vec!["vaadin-button", "(", "textContent", "Save", "=", ")"]
        );
    }
}
