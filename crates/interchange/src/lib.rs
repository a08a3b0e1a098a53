//! Napkin Interchange Format
//!
//! The instruction stream is the sole contract between the classification
//! core and every downstream consumer (code generators, preview renderers).
//! Internally instructions are a tagged enum; externally they flatten to a
//! prefix-notation stream of string tokens:
//!
//! ```text
//! tagName "(" [attrName attrValue "="]* [nested instructions]* ")"
//! ```
//!
//! Read left to right with a stack machine, the stream reconstructs the
//! widget tree including per-node attributes in emission order. Parentheses
//! are balanced in any stream this crate produces; the parser nevertheless
//! tolerates malformed streams by skipping broken instructions, preserving
//! partial output.

mod element;
mod flatten;
mod instruction;

pub use element::{parse_tokens, Element};
pub use flatten::{flatten, flatten_with_rng, grid_layout_transform};
pub use instruction::{to_tokens, Instruction, TOKEN_ATTR, TOKEN_CLOSE, TOKEN_OPEN};

/// Tag of synthesized list-item children (comma-separated labels).
pub const ITEM_TAG: &str = "vaadin-item";
/// Tag of synthesized tab children (pipe-separated labels).
pub const TAB_TAG: &str = "vaadin-tab";
