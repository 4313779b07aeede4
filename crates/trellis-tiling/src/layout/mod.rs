mod calculation;
mod types;

pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{Leaf, Side, SplitDirection, SplitTree};
    use trellis_common::{Direction, PaneId, Rect};

    fn leaf(id: u32) -> Leaf {
        Leaf::new(PaneId(id), "about:blank")
    }

    fn two_pane(direction: SplitDirection) -> SplitTree {
        let mut tree = SplitTree::single(leaf(1));
        tree.insert_split(PaneId(1), leaf(2), direction, Side::After);
        tree
    }

    fn nested() -> SplitTree {
        let mut tree = two_pane(SplitDirection::Vertical);
        tree.insert_split(PaneId(2), leaf(3), SplitDirection::Horizontal, Side::After);
        tree.insert_split(PaneId(1), leaf(4), SplitDirection::Horizontal, Side::Before);
        tree.insert_split(PaneId(3), leaf(5), SplitDirection::Vertical, Side::After);
        tree.resize(PaneId(1), Direction::Right, 0.13);
        tree.resize(PaneId(3), Direction::Up, 0.21);
        tree
    }

    #[test]
    fn empty_tree_yields_nothing() {
        let engine = LayoutEngine::default();
        assert!(engine.compute(&SplitTree::new(), Rect::sized(800.0, 600.0)).is_empty());
    }

    #[test]
    fn single_pane_fills_viewport() {
        let engine = LayoutEngine::default();
        let viewport = Rect::new(0.0, 40.0, 800.0, 600.0);
        let result = engine.compute(&SplitTree::single(leaf(1)), viewport);
        assert_eq!(result, vec![(PaneId(1), viewport)]);
    }

    #[test]
    fn vertical_split_of_1000_by_800() {
        let engine = LayoutEngine::default();
        let result = engine.compute(
            &two_pane(SplitDirection::Vertical),
            Rect::sized(1000.0, 800.0),
        );
        assert_eq!(result.len(), 2);
        assert_eq!(result[0].1, Rect::new(0.0, 0.0, 500.0, 800.0));
        assert_eq!(result[1].1, Rect::new(501.0, 0.0, 499.0, 800.0));
    }

    #[test]
    fn horizontal_split_divides_height() {
        let engine = LayoutEngine::new(0);
        let result = engine.compute(
            &two_pane(SplitDirection::Horizontal),
            Rect::sized(800.0, 601.0),
        );
        assert_eq!(result[0].1, Rect::new(0.0, 0.0, 800.0, 300.0));
        assert_eq!(result[1].1, Rect::new(0.0, 300.0, 800.0, 301.0));
    }

    #[test]
    fn gutters_only_between_panes() {
        let engine = LayoutEngine::new(4);
        let viewport = Rect::sized(1200.0, 900.0);
        for (_, rect) in engine.compute(&nested(), viewport) {
            assert!(rect.x >= 0.0 && rect.y >= 0.0);
            assert!(rect.right() <= viewport.width);
            assert!(rect.bottom() <= viewport.height);
        }
        let result = engine.compute(&two_pane(SplitDirection::Vertical), viewport);
        assert_eq!(result[0].1.x, 0.0);
        assert_eq!(result[1].1.right(), viewport.width);
    }

    #[test]
    fn panes_never_overlap() {
        let engine = LayoutEngine::new(3);
        let rects = engine.compute(&nested(), Rect::sized(1337.0, 911.0));
        assert_eq!(rects.len(), 5);
        for (i, (_, a)) in rects.iter().enumerate() {
            for (_, b) in rects.iter().skip(i + 1) {
                assert!(!a.intersects(b), "{a:?} overlaps {b:?}");
            }
        }
    }

    #[test]
    fn area_is_conserved_minus_gutters() {
        // Every split spends exactly one gutter strip along its cross extent.
        let engine = LayoutEngine::new(0);
        let viewport = Rect::sized(1337.0, 911.0);
        let total: f64 = engine
            .compute(&nested(), viewport)
            .iter()
            .map(|(_, r)| r.area())
            .sum();
        assert_eq!(total, viewport.area());

        let engine = LayoutEngine::new(1);
        let rects = engine.compute(&two_pane(SplitDirection::Vertical), viewport);
        let total: f64 = rects.iter().map(|(_, r)| r.area()).sum();
        assert_eq!(total, viewport.area() - viewport.height);
    }

    #[test]
    fn layout_is_deterministic() {
        let engine = LayoutEngine::default();
        let tree = nested();
        let viewport = Rect::sized(1024.0, 768.0);
        assert_eq!(engine.compute(&tree, viewport), engine.compute(&tree, viewport));
    }

    #[test]
    fn pane_states_carry_leaf_metadata() {
        let mut tree = two_pane(SplitDirection::Vertical);
        tree.update_leaf(PaneId(2), |l| {
            l.title = Some("Docs".into());
            l.background_color = Some("#ffffff".into());
        });
        let states = LayoutEngine::default().pane_states(&tree, Rect::sized(1000.0, 800.0));
        assert_eq!(states.len(), 2);
        assert_eq!(states[1].id, PaneId(2));
        assert_eq!(states[1].title.as_deref(), Some("Docs"));
        assert_eq!(states[1].background_color.as_deref(), Some("#ffffff"));
        assert_eq!(states[1].rect.width, 499.0);
    }

    #[test]
    fn rect_of_finds_pane() {
        let engine = LayoutEngine::default();
        let tree = two_pane(SplitDirection::Vertical);
        let viewport = Rect::sized(1000.0, 800.0);
        assert_eq!(engine.rect_of(&tree, viewport, PaneId(2)).unwrap().x, 501.0);
        assert!(engine.rect_of(&tree, viewport, PaneId(9)).is_none());
    }
}
