mod core;

pub use self::core::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_edges_and_center() {
        let r = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(r.right(), 110.0);
        assert_eq!(r.bottom(), 70.0);
        assert_eq!(r.center(), (60.0, 45.0));
        assert_eq!(r.area(), 5000.0);
    }

    #[test]
    fn rect_sized_is_origin_anchored() {
        let r = Rect::sized(1000.0, 800.0);
        assert_eq!(r, Rect::new(0.0, 0.0, 1000.0, 800.0));
    }

    #[test]
    fn rect_edge_contact_is_not_intersection() {
        let left = Rect::new(0.0, 0.0, 500.0, 800.0);
        let right = Rect::new(500.0, 0.0, 500.0, 800.0);
        assert!(!left.intersects(&right));

        let overlapping = Rect::new(499.0, 0.0, 10.0, 10.0);
        assert!(left.intersects(&overlapping));
    }

    #[test]
    fn rect_serialization() {
        let r = Rect::sized(1920.0, 1080.0);
        let json = serde_json::to_string(&r).unwrap();
        let deserialized: Rect = serde_json::from_str(&json).unwrap();
        assert_eq!(r, deserialized);
    }

    #[test]
    fn pane_id_display() {
        assert_eq!(PaneId(42).to_string(), "pane-42");
    }

    #[test]
    fn pane_id_serializes_as_bare_number() {
        assert_eq!(serde_json::to_string(&PaneId(7)).unwrap(), "7");
        let id: PaneId = serde_json::from_str("12").unwrap();
        assert_eq!(id, PaneId(12));
    }

    #[test]
    fn pane_state_uses_camel_case() {
        let state = PaneState {
            id: PaneId(3),
            url: "https://example.com".into(),
            title: Some("Example".into()),
            rect: Rect::sized(10.0, 10.0),
            favicon: None,
            description: None,
            background_color: Some("rgb(0, 0, 0)".into()),
            text_color: None,
            image: None,
        };
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["backgroundColor"], "rgb(0, 0, 0)");
        assert_eq!(json["id"], 3);
    }

    #[test]
    fn search_state_default_is_unfocused_and_empty() {
        let s = SearchState::default();
        assert!(s.query.is_empty());
        assert!(!s.is_focused);
    }
}
