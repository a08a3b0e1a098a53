//! Depth-first flattening of a containment forest into instructions.
//!
//! For each node the tag is determined first (several heuristics read the
//! already-attached children), then tag-specific structural transforms run on
//! a working copy of the child list (sibling sorts, drag-handle removal,
//! synthesized attributes), and only then does traversal descend. The
//! computation is pure and deterministic apart from the grid placeholder
//! rows, whose randomness is confined to attribute *values* and never affects
//! structure or ordering.

use classify::{tag_for, WidgetTag};
use containment::RectNode;
use node::{markers, Rect};
use rand::Rng;
use serde_json::{json, Value};

use crate::instruction::Instruction;
use crate::{ITEM_TAG, TAB_TAG};

/// Number of placeholder rows synthesized for a sketched grid.
const GRID_PLACEHOLDER_ROWS: usize = 200;

/// Word bank for grid placeholder data.
const IPSUM: &[&str] = &[
    "Lorem",
    "ipsum",
    "dolor",
    "sit",
    "amet,",
    "consectetur",
    "adipiscing",
    "elit,",
    "sed",
    "do",
    "eiusmod",
    "tempor",
    "incididunt",
    "ut",
    "labore",
    "et",
    "dolore",
    "magna",
    "aliqua.",
    "Ut",
    "enim",
    "ad",
    "minim",
    "veniam,",
    "quis",
    "nostrud",
    "exercitation",
    "ullamco",
    "laboris",
    "nisi",
    "ut",
    "aliquip",
    "ex",
    "ea",
    "commodo",
    "consequat.",
    "Duis",
    "aute",
    "irure",
    "dolor",
    "in",
    "reprehenderit",
    "in",
    "voluptate",
    "velit",
    "esse",
    "cillum",
    "dolore",
    "eu",
    "fugiat",
    "nulla",
    "pariatur.",
    "Excepteur",
    "sint",
    "occaecat",
    "cupidatat",
    "non",
    "proident,",
    "sunt",
    "in",
    "culpa",
    "qui",
    "officia",
    "deserunt",
    "mollit",
    "anim",
    "id",
    "est",
    "laborum",
];

/// Flattens a forest into the instruction stream using a fresh RNG for grid
/// placeholder data.
pub fn flatten(forest: &[RectNode]) -> Vec<Instruction> {
    flatten_with_rng(forest, &mut rand::rng())
}

/// Flattens a forest with a caller-supplied RNG.
///
/// With the RNG held fixed, repeated runs over an unchanged forest produce
/// byte-identical token streams.
pub fn flatten_with_rng(forest: &[RectNode], rng: &mut impl Rng) -> Vec<Instruction> {
    let mut out = Vec::new();
    for node in forest {
        emit_node(node, rng, &mut out);
    }
    log::debug!(
        "flattened {} roots into {} instructions",
        forest.len(),
        out.len()
    );
    out
}

fn emit_node(node: &RectNode, rng: &mut impl Rng, out: &mut Vec<Instruction>) {
    let tag = tag_for(node);
    let rect = &node.rect;
    let mut children = node.children.clone();
    let mut synthesized = Vec::new();
    let mut styles = String::new();

    out.push(Instruction::open(tag.as_str()));

    if matches!(tag, WidgetTag::RadioGroup | WidgetTag::CheckboxGroup) {
        // A group taller than it is wide lays its members out vertically.
        if rect.ratio().is_some_and(|ratio| ratio < 1.0) {
            out.push(Instruction::attr("theme", "vertical"));
        }
    }

    match tag {
        WidgetTag::VerticalLayout => {
            children.sort_by(|a, b| a.rect.top.total_cmp(&b.rect.top));
        }
        WidgetTag::HorizontalLayout => {
            children.sort_by(|a, b| a.rect.left.total_cmp(&b.rect.left));
        }
        WidgetTag::GridLayout => {
            styles.push_str(&grid_layout_transform(rect, &mut children));
        }
        WidgetTag::SplitLayout => {
            if let Some(orientation) = split_layout_transform(&mut children) {
                out.push(Instruction::attr("orientation", orientation));
            }
        }
        _ => {}
    }

    // Text rules, skipped for the two widgets whose label is purely a
    // classification marker.
    if !matches!(tag, WidgetTag::RadioButton | WidgetTag::Checkbox) {
        if let Some(text) = rect.text() {
            if tag == WidgetTag::Grid {
                let columns: Vec<&str> = text.split(markers::LIST).collect();
                out.push(Instruction::attr(
                    "columnCaptions",
                    column_captions_json(&columns),
                ));
                out.push(Instruction::attr("items", grid_items_json(&columns, rng)));
            } else if text.contains(markers::LIST) {
                for piece in text.split(markers::LIST) {
                    synthesized.push(Instruction::open(ITEM_TAG));
                    synthesized.push(Instruction::attr("textContent", piece));
                    synthesized.push(Instruction::Close);
                }
            } else if text.contains(markers::TAB) {
                for piece in text.split(markers::TAB) {
                    synthesized.push(Instruction::open(TAB_TAG));
                    synthesized.push(Instruction::attr("textContent", piece));
                    synthesized.push(Instruction::Close);
                }
            } else if text.contains(markers::COMBO) {
                let items: Vec<&str> = text.split(markers::COMBO).collect();
                out.push(Instruction::attr("items", json!(items).to_string()));
            } else {
                out.push(Instruction::attr(
                    "textContent",
                    text.replace(markers::SPAN, ""),
                ));
            }
        }
    }

    if !styles.is_empty() {
        out.push(Instruction::attr("style", styles));
    }
    out.extend(synthesized);

    for child in &children {
        emit_node(child, rng, out);
    }
    out.push(Instruction::Close);
}

/// Grid-layout structural transform: sorts children into snapped-row,
/// left-to-right order and derives the column count from the longest run of
/// non-decreasing left edges. Returns the style fragment to emit.
///
/// Reserved: no heuristic currently classifies a node as `grid-layout`, but
/// the transform is part of the flattening contract.
pub fn grid_layout_transform(parent: &Rect, children: &mut [RectNode]) -> String {
    let mut styles = String::from("display:grid;");
    // Row bucket: top offset snapped down to 50px, weighted far above the
    // left position so rows order before columns.
    let key = |child: &RectNode| {
        let row_offset = child.rect.top - parent.top;
        child.rect.left + (row_offset - row_offset % 50.0) * 8192.0
    };
    children.sort_by(|a, b| key(a).total_cmp(&key(b)));

    let mut column_width = 0u32;
    let mut max_column_width = 0u32;
    let mut previous: Option<&RectNode> = None;
    for child in children.iter() {
        if let Some(previous) = previous {
            if previous.rect.left > child.rect.left {
                max_column_width = max_column_width.max(column_width);
                column_width = 0;
            }
        }
        column_width += 1;
        previous = Some(child);
    }
    max_column_width = max_column_width.max(column_width);

    styles.push_str(&format!(
        "grid-template-columns:repeat({max_column_width}, auto);"
    ));
    styles
}

/// Split-layout structural transform: removes the drag handle (the
/// smallest-area child, first minimal on ties) and derives the orientation.
///
/// The handle's top and bottom corners are tested against the first remaining
/// pane: if one is inside and the other is not, the handle crosses a
/// horizontal boundary and the split is vertical. Returns the orientation
/// attribute value to emit, `None` for the default horizontal orientation.
fn split_layout_transform(children: &mut Vec<RectNode>) -> Option<&'static str> {
    let bounds: Vec<_> = children.iter().map(|c| c.rect.bounds()).collect();
    let handle_ix = napkin_core::smallest_by_area(&bounds)?;
    let handle = children.remove(handle_ix);
    let pane = children.first()?;

    let pane_bounds = pane.rect.bounds();
    let top_inside = pane_bounds.point_inside(handle.rect.left, handle.rect.top);
    let bottom_inside = pane_bounds.point_inside(handle.rect.left, handle.rect.bottom);
    (top_inside != bottom_inside).then_some("vertical")
}

fn column_captions_json(columns: &[&str]) -> String {
    let captions: Vec<Value> = columns
        .iter()
        .map(|column| json!({ "name": column, "path": column }))
        .collect();
    json!(captions).to_string()
}

fn grid_items_json(columns: &[&str], rng: &mut impl Rng) -> String {
    let mut items = Vec::with_capacity(GRID_PLACEHOLDER_ROWS);
    for _ in 0..GRID_PLACEHOLDER_ROWS {
        let mut row = serde_json::Map::new();
        for column in columns {
            let word = IPSUM[rng.random_range(0..IPSUM.len())];
            row.insert((*column).to_string(), json!(word));
        }
        items.push(Value::Object(row));
    }
    json!(items).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn leaf(left: f32, top: f32, right: f32, bottom: f32) -> RectNode {
        RectNode::leaf(Rect::new(left, top, right, bottom))
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_plain_text_field_emits_text_content() {
        let forest = vec![RectNode::leaf(
            Rect::new(0.0, 0.0, 300.0, 40.0).with_text("Full name"),
        )];
        let instructions = flatten_with_rng(&forest, &mut rng());
        assert_eq!(
            instructions,
            vec![
                Instruction::open("vaadin-text-field"),
                Instruction::attr("textContent", "Full name"),
                Instruction::Close,
            ]
        );
    }

    #[test]
    fn test_span_marker_is_stripped_everywhere() {
        let forest = vec![RectNode::leaf(
            Rect::new(0.0, 0.0, 120.0, 30.0).with_text("#a#b"),
        )];
        let instructions = flatten_with_rng(&forest, &mut rng());
        assert_eq!(
            instructions[1],
            Instruction::attr("textContent", "ab"),
        );
    }

    #[test]
    fn test_comma_text_synthesizes_items_in_order() {
        let forest = vec![RectNode::leaf(
            Rect::new(0.0, 0.0, 300.0, 60.0).with_text("a,b,c"),
        )];
        let instructions = flatten_with_rng(&forest, &mut rng());
        assert_eq!(
            instructions,
            vec![
                Instruction::open("vaadin-select"),
                Instruction::open("vaadin-item"),
                Instruction::attr("textContent", "a"),
                Instruction::Close,
                Instruction::open("vaadin-item"),
                Instruction::attr("textContent", "b"),
                Instruction::Close,
                Instruction::open("vaadin-item"),
                Instruction::attr("textContent", "c"),
                Instruction::Close,
                Instruction::Close,
            ]
        );
    }

    #[test]
    fn test_pipe_text_synthesizes_tabs() {
        let forest = vec![RectNode::leaf(
            Rect::new(0.0, 0.0, 400.0, 150.0).with_text("One|Two"),
        )];
        let instructions = flatten_with_rng(&forest, &mut rng());
        assert_eq!(instructions[0], Instruction::open("vaadin-tabs"));
        assert_eq!(instructions[1], Instruction::open("vaadin-tab"));
        assert_eq!(instructions[2], Instruction::attr("textContent", "One"));
    }

    #[test]
    fn test_semicolon_text_becomes_items_attr() {
        let forest = vec![RectNode::leaf(
            Rect::new(0.0, 0.0, 300.0, 60.0).with_text("a;b"),
        )];
        let instructions = flatten_with_rng(&forest, &mut rng());
        assert_eq!(
            instructions,
            vec![
                Instruction::open("vaadin-combo-box"),
                Instruction::attr("items", r#"["a","b"]"#),
                Instruction::Close,
            ]
        );
    }

    #[test]
    fn test_horizontal_layout_sorts_children_left_to_right() {
        // Children supplied right-first; emission must be left-to-right.
        let children = vec![
            leaf(210.0, 10.0, 390.0, 190.0),
            leaf(10.0, 10.0, 190.0, 190.0),
        ];
        let forest = vec![RectNode::with_children(
            Rect::new(0.0, 0.0, 400.0, 200.0),
            children,
        )];
        let instructions = flatten_with_rng(&forest, &mut rng());
        assert_eq!(
            instructions[0],
            Instruction::open("vaadin-horizontal-layout")
        );
        // Both children are leaves classified independently; the left one
        // (a large square -> div) comes first.
        let opens: Vec<_> = instructions
            .iter()
            .filter_map(|i| match i {
                Instruction::Open(tag) => Some(tag.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(opens[0], "vaadin-horizontal-layout");
        assert_eq!(opens.len(), 3);
    }

    #[test]
    fn test_tall_group_gets_vertical_theme() {
        let radios = vec![
            RectNode::leaf(Rect::new(10.0, 10.0, 30.0, 30.0).with_text("o")),
            RectNode::leaf(Rect::new(10.0, 40.0, 30.0, 60.0).with_text("o")),
        ];
        let forest = vec![RectNode::with_children(
            Rect::new(0.0, 0.0, 50.0, 80.0),
            radios,
        )];
        let instructions = flatten_with_rng(&forest, &mut rng());
        assert_eq!(instructions[0], Instruction::open("vaadin-radio-group"));
        assert_eq!(instructions[1], Instruction::attr("theme", "vertical"));
        // Radio children carry no text instruction; "o" is a marker only.
        assert!(!instructions
            .iter()
            .any(|i| matches!(i, Instruction::Attr { name, .. } if name == "textContent")));
    }

    #[test]
    fn test_split_layout_drops_handle_and_detects_vertical() {
        // Two panes stacked vertically, handle straddling the boundary.
        let children = vec![
            leaf(10.0, 10.0, 390.0, 200.0),
            leaf(10.0, 200.0, 390.0, 390.0),
            leaf(180.0, 190.0, 220.0, 210.0),
        ];
        let forest = vec![RectNode::with_children(
            Rect::new(0.0, 0.0, 400.0, 400.0),
            children,
        )];
        let instructions = flatten_with_rng(&forest, &mut rng());
        assert_eq!(instructions[0], Instruction::open("vaadin-split-layout"));
        assert_eq!(instructions[1], Instruction::attr("orientation", "vertical"));
        let opens = instructions
            .iter()
            .filter(|i| matches!(i, Instruction::Open(_)))
            .count();
        // Parent plus the two panes; the handle is gone.
        assert_eq!(opens, 3);
    }

    #[test]
    fn test_grid_emits_captions_and_items() {
        let forest = vec![RectNode::leaf(
            Rect::new(0.0, 0.0, 300.0, 200.0).with_text("name,email"),
        )];
        let instructions = flatten_with_rng(&forest, &mut rng());
        assert_eq!(instructions[0], Instruction::open("unide-grid"));
        let Instruction::Attr { name, value } = &instructions[1] else {
            panic!("expected columnCaptions attr");
        };
        assert_eq!(name, "columnCaptions");
        assert_eq!(
            value,
            r#"[{"name":"name","path":"name"},{"name":"email","path":"email"}]"#
        );

        let Instruction::Attr { name, value } = &instructions[2] else {
            panic!("expected items attr");
        };
        assert_eq!(name, "items");
        let items: serde_json::Value = serde_json::from_str(value).unwrap();
        let rows = items.as_array().unwrap();
        assert_eq!(rows.len(), 200);
        for row in rows {
            let row = row.as_object().unwrap();
            let keys: Vec<_> = row.keys().collect();
            assert_eq!(keys, vec!["name", "email"]);
            assert!(row
                .values()
                .all(|v| IPSUM.contains(&v.as_str().unwrap())));
        }
    }

    #[test]
    fn test_grid_layout_transform_orders_and_counts_columns() {
        let parent = Rect::new(0.0, 0.0, 400.0, 300.0);
        // 2x2 grid drawn out of order.
        let mut children = vec![
            leaf(210.0, 110.0, 390.0, 190.0),
            leaf(10.0, 10.0, 190.0, 90.0),
            leaf(210.0, 10.0, 390.0, 90.0),
            leaf(10.0, 110.0, 190.0, 190.0),
        ];
        let styles = grid_layout_transform(&parent, &mut children);
        assert_eq!(
            styles,
            "display:grid;grid-template-columns:repeat(2, auto);"
        );
        let lefts: Vec<f32> = children.iter().map(|c| c.rect.left).collect();
        let tops: Vec<f32> = children.iter().map(|c| c.rect.top).collect();
        assert_eq!(lefts, vec![10.0, 210.0, 10.0, 210.0]);
        assert_eq!(tops, vec![10.0, 10.0, 110.0, 110.0]);
    }

    #[test]
    fn test_grid_layout_single_row_counts_all_columns() {
        let parent = Rect::new(0.0, 0.0, 700.0, 100.0);
        let mut children = vec![
            leaf(10.0, 10.0, 90.0, 90.0),
            leaf(110.0, 10.0, 190.0, 90.0),
            leaf(210.0, 10.0, 290.0, 90.0),
        ];
        let styles = grid_layout_transform(&parent, &mut children);
        assert!(styles.ends_with("repeat(3, auto);"));
    }

    #[test]
    fn test_structural_output_is_rng_independent() {
        let forest = vec![RectNode::leaf(
            Rect::new(0.0, 0.0, 300.0, 200.0).with_text("name,email"),
        )];
        let a = flatten_with_rng(&forest, &mut StdRng::seed_from_u64(1));
        let b = flatten_with_rng(&forest, &mut StdRng::seed_from_u64(2));
        // Same shape and attribute names; only the items payload differs.
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(&b) {
            match (x, y) {
                (
                    Instruction::Attr { name: nx, .. },
                    Instruction::Attr { name: ny, .. },
                ) => assert_eq!(nx, ny),
                _ => assert_eq!(x, y),
            }
        }
    }
}
