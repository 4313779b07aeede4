//! Directional neighbor search over computed pane rects.

use std::cmp::Ordering;

use trellis_common::{Direction, PaneId, Rect};

use crate::layout::LayoutEngine;
use crate::tree::SplitTree;

struct Candidate {
    id: PaneId,
    primary: f64,
    orthogonal: f64,
    overlaps: bool,
}

impl Candidate {
    fn angle(&self) -> f64 {
        self.orthogonal / self.primary
    }

    fn distance(&self) -> f64 {
        self.primary.hypot(self.orthogonal)
    }
}

/// Pane reached by moving from `current` in `direction`.
///
/// Panes whose center lies strictly on the requested side are considered.
/// Those that also overlap `current` on the orthogonal axis win, nearest
/// first; otherwise the one closest to the direction's axis is chosen.
/// `None` at the edge of the layout.
pub fn neighbor(
    tree: &SplitTree,
    engine: &LayoutEngine,
    viewport: Rect,
    current: PaneId,
    direction: Direction,
) -> Option<PaneId> {
    let rects = engine.compute(tree, viewport);
    let from = rects.iter().find(|(id, _)| *id == current)?.1;
    let (cx, cy) = from.center();

    let candidates: Vec<Candidate> = rects
        .iter()
        .filter(|(id, _)| *id != current)
        .filter_map(|(id, rect)| {
            let (x, y) = rect.center();
            let (dx, dy) = (x - cx, y - cy);
            let (primary, orthogonal, overlaps) = match direction {
                Direction::Left => (-dx, dy.abs(), overlaps_y(&from, rect)),
                Direction::Right => (dx, dy.abs(), overlaps_y(&from, rect)),
                Direction::Up => (-dy, dx.abs(), overlaps_x(&from, rect)),
                Direction::Down => (dy, dx.abs(), overlaps_x(&from, rect)),
            };
            (primary > 0.0).then_some(Candidate {
                id: *id,
                primary,
                orthogonal,
                overlaps,
            })
        })
        .collect();

    let overlapping = candidates
        .iter()
        .filter(|c| c.overlaps)
        .min_by(|a, b| {
            cmp_f64(a.primary, b.primary)
                .then(cmp_f64(a.orthogonal, b.orthogonal))
                .then(a.id.cmp(&b.id))
        });
    if let Some(best) = overlapping {
        return Some(best.id);
    }

    candidates
        .iter()
        .min_by(|a, b| {
            cmp_f64(a.angle(), b.angle())
                .then(cmp_f64(a.distance(), b.distance()))
                .then(a.id.cmp(&b.id))
        })
        .map(|c| c.id)
}

fn overlaps_x(a: &Rect, b: &Rect) -> bool {
    a.x < b.right() && b.x < a.right()
}

fn overlaps_y(a: &Rect, b: &Rect) -> bool {
    a.y < b.bottom() && b.y < a.bottom()
}

fn cmp_f64(a: f64, b: f64) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}
