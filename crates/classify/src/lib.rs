//! # Widget Classification
//!
//! Decides what UI widget a sketched rectangle represents. Classification is
//! a fixed, ordered table of (predicate, tag) rules evaluated top to bottom;
//! the first predicate that holds determines the tag and anything left over
//! falls through to a generic `div` container.
//!
//! Order matters because predicates overlap: a small square labeled "x"
//! satisfies both the checkbox rule and the fallback, and a wide rect with a
//! `,` in its label could be a select or a plain text field. Reordering the
//! table changes observable output, so treat it as part of the contract.
//!
//! Several rules (the groups, the layouts, split layout) read a rect's
//! *children*, so classification runs on [`RectNode`]s of an already-built
//! containment forest, never on bare rects.

use containment::RectNode;
use napkin_core::smallest_by_area;
use node::{markers, Rect};
use strum_macros::{Display, EnumIter, IntoStaticStr};

/// The widget kind assigned to a rect.
///
/// String forms are the element tag names carried by the instruction token
/// stream and understood by the code generators.
#[derive(Clone, Copy, Debug, Display, EnumIter, IntoStaticStr, PartialEq, Eq, Hash)]
pub enum WidgetTag {
    #[strum(serialize = "span")]
    Span,
    #[strum(serialize = "vaadin-button")]
    Button,
    #[strum(serialize = "vaadin-radio-button")]
    RadioButton,
    #[strum(serialize = "vaadin-checkbox")]
    Checkbox,
    #[strum(serialize = "vaadin-radio-group")]
    RadioGroup,
    #[strum(serialize = "vaadin-checkbox-group")]
    CheckboxGroup,
    #[strum(serialize = "vaadin-password-field")]
    PasswordField,
    #[strum(serialize = "vaadin-select")]
    Select,
    #[strum(serialize = "vaadin-combo-box")]
    ComboBox,
    #[strum(serialize = "vaadin-date-picker")]
    DatePicker,
    #[strum(serialize = "vaadin-time-picker")]
    TimePicker,
    #[strum(serialize = "vaadin-number-field")]
    NumberField,
    #[strum(serialize = "vaadin-email-field")]
    EmailField,
    #[strum(serialize = "vaadin-tabs")]
    Tabs,
    #[strum(serialize = "vaadin-text-field")]
    TextField,
    #[strum(serialize = "unide-grid")]
    Grid,
    #[strum(serialize = "vaadin-split-layout")]
    SplitLayout,
    #[strum(serialize = "vaadin-vertical-layout")]
    VerticalLayout,
    #[strum(serialize = "vaadin-horizontal-layout")]
    HorizontalLayout,
    /// Reserved: the transform exists but the heuristic is not in the table.
    #[strum(serialize = "grid-layout")]
    GridLayout,
    /// Fallback for anything no rule matched.
    #[strum(serialize = "div")]
    Container,
}

impl WidgetTag {
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Short human-readable name, shown as the live guess while sketching.
    pub fn guess_label(self) -> &'static str {
        match self {
            WidgetTag::Grid => "grid",
            other => {
                let name = other.as_str();
                name.strip_prefix("vaadin-").unwrap_or(name)
            }
        }
    }
}

/// The rule table, in priority order. First match wins.
const HEURISTICS: &[(fn(&RectNode) -> bool, WidgetTag)] = &[
    (is_span, WidgetTag::Span),
    (is_button, WidgetTag::Button),
    (is_radio_button, WidgetTag::RadioButton),
    (is_checkbox, WidgetTag::Checkbox),
    (is_radio_group, WidgetTag::RadioGroup),
    (is_checkbox_group, WidgetTag::CheckboxGroup),
    (is_password_field, WidgetTag::PasswordField),
    (is_select, WidgetTag::Select),
    (is_combo_box, WidgetTag::ComboBox),
    (is_date_picker, WidgetTag::DatePicker),
    (is_time_picker, WidgetTag::TimePicker),
    (is_number_field, WidgetTag::NumberField),
    (is_email_field, WidgetTag::EmailField),
    (is_tabs, WidgetTag::Tabs),
    (is_text_field, WidgetTag::TextField),
    (is_grid, WidgetTag::Grid),
    (is_split_layout, WidgetTag::SplitLayout),
    (is_vertical_layout, WidgetTag::VerticalLayout),
    (is_horizontal_layout, WidgetTag::HorizontalLayout),
];

/// Classifies a node of the containment forest.
pub fn tag_for(node: &RectNode) -> WidgetTag {
    for (predicate, tag) in HEURISTICS {
        if predicate(node) {
            return *tag;
        }
    }
    WidgetTag::Container
}

/// Aspect ratio in (0.7, 1.3). Degenerate rects are never squarish.
fn is_squarish(rect: &Rect) -> bool {
    matches!(rect.ratio(), Some(ratio) if ratio > 0.7 && ratio < 1.3)
}

/// Ratio-family guard: width/height strictly above 2.
///
/// A zero-height rect has no ratio and fails every ratio-based rule, so
/// degenerate geometry always lands on the fallback container.
fn is_wide(rect: &Rect) -> bool {
    matches!(rect.ratio(), Some(ratio) if ratio > 2.0)
}

pub fn is_checkbox(node: &RectNode) -> bool {
    let rect = &node.rect;
    is_squarish(rect)
        && node.is_leaf()
        && rect.width() < 30.0
        && rect.height() < 30.0
        && (rect.text().is_none() || rect.text_contains("x"))
}

pub fn is_radio_button(node: &RectNode) -> bool {
    let rect = &node.rect;
    is_squarish(rect)
        && node.is_leaf()
        && rect.width() < 30.0
        && rect.height() < 30.0
        && rect.text_contains("o")
}

pub fn is_radio_group(node: &RectNode) -> bool {
    !node.children.is_empty() && node.children.iter().all(is_radio_button)
}

pub fn is_checkbox_group(node: &RectNode) -> bool {
    !node.children.is_empty() && node.children.iter().all(is_checkbox)
}

pub fn is_span(node: &RectNode) -> bool {
    let rect = &node.rect;
    is_wide(rect) && rect.height() < 100.0 && rect.text_contains(markers::SPAN)
}

pub fn is_button(node: &RectNode) -> bool {
    let rect = &node.rect;
    is_wide(rect) && rect.width() < 150.0 && rect.height() < 100.0 && node.is_leaf()
}

pub fn is_select(node: &RectNode) -> bool {
    let rect = &node.rect;
    is_wide(rect)
        && rect.width() > 150.0
        && rect.height() < 100.0
        && rect.text_contains(markers::LIST)
}

pub fn is_grid(node: &RectNode) -> bool {
    let rect = &node.rect;
    rect.height() > 100.0 && rect.text_contains(markers::LIST)
}

pub fn is_combo_box(node: &RectNode) -> bool {
    let rect = &node.rect;
    is_wide(rect) && rect.height() < 100.0 && rect.text_contains(markers::COMBO)
}

pub fn is_text_field(node: &RectNode) -> bool {
    let rect = &node.rect;
    is_wide(rect) && rect.width() > 150.0 && rect.height() < 50.0
}

pub fn is_password_field(node: &RectNode) -> bool {
    is_text_field(node) && node.rect.text_contains(markers::PASSWORD)
}

pub fn is_date_picker(node: &RectNode) -> bool {
    is_text_field(node) && node.rect.text_contains(markers::DATE)
}

pub fn is_time_picker(node: &RectNode) -> bool {
    is_text_field(node) && node.rect.text_contains(markers::TIME)
}

pub fn is_number_field(node: &RectNode) -> bool {
    is_text_field(node) && node.rect.text_contains(markers::NUMBER)
}

pub fn is_email_field(node: &RectNode) -> bool {
    is_text_field(node) && node.rect.text_contains(markers::EMAIL)
}

pub fn is_tabs(node: &RectNode) -> bool {
    is_wide(&node.rect) && node.rect.text_contains(markers::TAB)
}

/// Children stack predominantly along the vertical axis: for every pair of
/// children (self-pairs included, trivially) the horizontal spread of left
/// edges stays within the vertical spread of top edges.
pub fn is_vertical_layout(node: &RectNode) -> bool {
    if node.children.len() < 2 {
        return false;
    }
    node.children.iter().all(|outer| {
        node.children.iter().all(|inner| {
            let hdiff = (outer.rect.left - inner.rect.left).abs();
            let vdiff = (outer.rect.top - inner.rect.top).abs();
            hdiff <= vdiff
        })
    })
}

/// Mirror of [`is_vertical_layout`].
pub fn is_horizontal_layout(node: &RectNode) -> bool {
    if node.children.len() < 2 {
        return false;
    }
    node.children.iter().all(|outer| {
        node.children.iter().all(|inner| {
            let hdiff = (outer.rect.left - inner.rect.left).abs();
            let vdiff = (outer.rect.top - inner.rect.top).abs();
            hdiff >= vdiff
        })
    })
}

/// Exactly three children, one of which (the smallest by area, first minimal
/// on ties) acts as the drag handle and must overlap both panes.
pub fn is_split_layout(node: &RectNode) -> bool {
    if node.children.len() != 3 {
        return false;
    }
    let bounds: Vec<_> = node.children.iter().map(|c| c.rect.bounds()).collect();
    let Some(handle_ix) = smallest_by_area(&bounds) else {
        return false;
    };
    let handle = bounds[handle_ix];
    bounds
        .iter()
        .enumerate()
        .filter(|(ix, _)| *ix != handle_ix)
        .all(|(_, pane)| pane.intersects_corners(&handle))
}

/// Reserved heuristic, intentionally absent from the priority table.
pub fn is_grid_layout(node: &RectNode) -> bool {
    node.children.len() > 1
}
