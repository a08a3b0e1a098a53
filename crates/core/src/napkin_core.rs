//! Core geometry for Napkin.
//!
//! Everything a sketch works with is an axis-aligned rectangle, so this crate
//! provides a single [`Bounds`] type plus the handful of queries the
//! classification heuristics and the containment-tree builder need.

pub mod bounds;

pub use bounds::{smallest_by_area, Bounds};
