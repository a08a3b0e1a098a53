//! # Containment Forest
//!
//! Derives parent/child structure from pure 2-D geometry: rect A becomes a
//! child of rect B iff A lies strictly inside B and B is the smallest-area
//! rect that strictly contains A. Rects contained by nothing become forest
//! roots.
//!
//! The builder is O(n²) in the rect count. That is deliberate: sketches are
//! manual input measured in tens of rects, and the tie-break (first
//! encountered among equal smallest areas) is observable behavior that an
//! index or sort would perturb. Do not optimize this without revisiting the
//! tie-break contract.

use node::Rect;

/// One node of the containment forest.
///
/// Nodes own their children by value; the forest is rebuilt from scratch on
/// every export, so there is no sharing and no persistent identity.
#[derive(Clone, Debug, PartialEq)]
pub struct RectNode {
    pub rect: Rect,
    pub children: Vec<RectNode>,
}

impl RectNode {
    pub fn leaf(rect: Rect) -> Self {
        Self {
            rect,
            children: Vec::new(),
        }
    }

    pub fn with_children(rect: Rect, children: Vec<RectNode>) -> Self {
        Self { rect, children }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in this subtree, including self.
    pub fn len(&self) -> usize {
        1 + self.children.iter().map(RectNode::len).sum::<usize>()
    }
}

/// Builds the containment forest from a flat rect list.
///
/// For each rect the full list is scanned for the smallest-area rect that
/// strictly contains it; ties go to the first candidate encountered in input
/// order. Children are attached in input order, as are roots, so sibling
/// order in the forest mirrors drawing order.
pub fn build_forest(rects: &[Rect]) -> Vec<RectNode> {
    let parents: Vec<Option<usize>> = (0..rects.len())
        .map(|ix| parent_of(ix, rects))
        .collect();

    let mut child_indices: Vec<Vec<usize>> = vec![Vec::new(); rects.len()];
    let mut roots = Vec::new();
    for (ix, parent) in parents.iter().enumerate() {
        match parent {
            Some(parent_ix) => child_indices[*parent_ix].push(ix),
            None => roots.push(ix),
        }
    }

    let forest: Vec<RectNode> = roots
        .iter()
        .map(|&ix| assemble(ix, rects, &child_indices))
        .collect();
    log::debug!(
        "built containment forest: {} roots from {} rects",
        forest.len(),
        rects.len()
    );
    forest
}

/// Finds the smallest-area rect strictly containing `rects[ix]`.
fn parent_of(ix: usize, rects: &[Rect]) -> Option<usize> {
    let rect = &rects[ix];
    let mut best: Option<(usize, f32)> = None;
    for (candidate_ix, candidate) in rects.iter().enumerate() {
        if candidate_ix == ix || !rect.inside(candidate) {
            continue;
        }
        let area = candidate.area();
        match best {
            Some((_, best_area)) if area >= best_area => {}
            _ => best = Some((candidate_ix, area)),
        }
    }
    best.map(|(candidate_ix, _)| candidate_ix)
}

fn assemble(ix: usize, rects: &[Rect], child_indices: &[Vec<usize>]) -> RectNode {
    let children = child_indices[ix]
        .iter()
        .map(|&child_ix| assemble(child_ix, rects, child_indices))
        .collect();
    RectNode::with_children(rects[ix].clone(), children)
}
