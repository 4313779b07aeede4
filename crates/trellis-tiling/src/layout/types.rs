//! Layout engine configuration.

use trellis_common::Rect;

/// Turns a split tree and a viewport into per-pane rects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutEngine {
    /// Pixels reserved between the two children of every split.
    pub gutter: u32,
}

impl LayoutEngine {
    pub const DEFAULT_GUTTER: u32 = 1;

    pub fn new(gutter: u32) -> Self {
        Self { gutter }
    }

    /// Divide `bounds` along one axis. `a` gets `floor(extent * ratio)`, one
    /// gutter is skipped and `b` takes what remains.
    pub(crate) fn partition(&self, bounds: Rect, vertical: bool, ratio: f64) -> (Rect, Rect) {
        let gutter = f64::from(self.gutter);
        let extent = if vertical { bounds.width } else { bounds.height };
        let first = (extent * ratio).floor().clamp(0.0, extent);
        let second = (extent - first - gutter).max(0.0);

        if vertical {
            (
                Rect::new(bounds.x, bounds.y, first, bounds.height),
                Rect::new(bounds.x + first + gutter, bounds.y, second, bounds.height),
            )
        } else {
            (
                Rect::new(bounds.x, bounds.y, bounds.width, first),
                Rect::new(bounds.x, bounds.y + first + gutter, bounds.width, second),
            )
        }
    }
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self {
            gutter: Self::DEFAULT_GUTTER,
        }
    }
}
