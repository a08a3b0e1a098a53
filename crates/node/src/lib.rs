//! # Rect Data Model
//!
//! This crate defines [`Rect`], the atomic input unit of Napkin: one
//! user-drawn rectangle with its geometry and an optional text label. The
//! label doubles as literal content and as a classification signal through a
//! small vocabulary of embedded markers (see [`markers`]).
//!
//! Rects are plain value holders owned by a single editing session. Parent
//! and child relationships are *not* stored here; they are derived from
//! geometry by the `containment` crate each time a sketch is exported.

use napkin_core::Bounds;
use serde::{Deserialize, Serialize};

/// Text markers recognized inside a rect's label.
///
/// A marker steers classification (for example `*` turns a text field into a
/// password field) and is consumed or stripped during flattening.
pub mod markers {
    /// Marks a label-only rect as a `span`.
    pub const SPAN: &str = "#";
    /// Turns a text field into a password field.
    pub const PASSWORD: &str = "*";
    /// Turns a text field into a date picker.
    pub const DATE: &str = "$date";
    /// Turns a text field into a time picker.
    pub const TIME: &str = "$time";
    /// Turns a text field into a number field.
    pub const NUMBER: &str = "$number";
    /// Turns a text field into an email field.
    pub const EMAIL: &str = "$email";
    /// Separates list items or grid column names.
    pub const LIST: &str = ",";
    /// Separates tab captions.
    pub const TAB: &str = "|";
    /// Separates combo-box items.
    pub const COMBO: &str = ";";
}

/// A user-drawn rectangle.
///
/// Geometry is stored edge-wise, matching how the drawing surface reports a
/// drag (`right >= left` and `bottom >= top` for a forward drag; nothing here
/// enforces it, a backwards drag simply never classifies as anything but a
/// generic container).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    /// Optional user-entered label. Empty strings are treated as absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl Rect {
    pub fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
            text: None,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// The label, if present and non-empty.
    ///
    /// The drawing surface reports an empty string for a rect whose label was
    /// typed and then erased; both cases classify identically.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref().filter(|t| !t.is_empty())
    }

    /// True if the label is present and contains `needle`.
    pub fn text_contains(&self, needle: &str) -> bool {
        self.text().is_some_and(|t| t.contains(needle))
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::from_edges(self.left, self.top, self.right, self.bottom)
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn area(&self) -> f32 {
        self.bounds().area()
    }

    /// Width/height ratio, `None` for degenerate (non-positive height) rects.
    pub fn ratio(&self) -> Option<f32> {
        self.bounds().ratio()
    }

    /// True if this rect lies strictly inside `other`.
    pub fn inside(&self, other: &Rect) -> bool {
        other.bounds().contains(&self.bounds())
    }
}
