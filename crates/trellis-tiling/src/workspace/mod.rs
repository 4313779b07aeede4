//! Up to nine independent split trees, one shown at a time.

mod manager;
mod panes;
mod state;
mod types;

pub use manager::WorkspaceManager;
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::recording::{HostCall, RecordingHost};
    use trellis_common::{Direction, PaneId, WorkspaceId};

    const HOME: &str = "https://home.test";

    fn setup() -> (WorkspaceManager, RecordingHost) {
        let mut host = RecordingHost::new();
        let mgr = WorkspaceManager::new(WorkspaceLimits::default(), HOME, &mut host);
        (mgr, host)
    }

    fn active_count(mgr: &WorkspaceManager) -> usize {
        mgr.list().iter().filter(|w| w.is_active).count()
    }

    #[test]
    fn starts_with_one_visible_pane() {
        let (mgr, host) = setup();
        assert_eq!(mgr.len(), 1);
        assert_eq!(mgr.active_pane(), Some(PaneId(1)));
        assert_eq!(host.visible(), vec![PaneId(1)]);
        assert_eq!(mgr.active_tree().unwrap().leaf(PaneId(1)).unwrap().url, HOME);
    }

    #[test]
    fn create_uses_next_free_index_and_stays_hidden() {
        let (mut mgr, mut host) = setup();
        let id = mgr.create_workspace(None, &mut host).unwrap();
        let ws = mgr.get(&id).unwrap();
        assert_eq!(ws.index, 1);
        assert_eq!(ws.name, "Workspace 2");
        assert!(!ws.is_active);
        assert_eq!(host.visible(), vec![PaneId(1)]);
        assert!(host.is_live(PaneId(2)));
    }

    #[test]
    fn create_rejects_taken_index_and_capacity() {
        let (mut mgr, mut host) = setup();
        assert_eq!(
            mgr.create_workspace(Some(0), &mut host),
            Err(WorkspaceError::IndexTaken(0))
        );
        assert_eq!(
            mgr.create_workspace(Some(9), &mut host),
            Err(WorkspaceError::Capacity(9))
        );
        for _ in 1..9 {
            mgr.create_workspace(None, &mut host).unwrap();
        }
        assert_eq!(mgr.len(), 9);
        assert_eq!(
            mgr.create_workspace(None, &mut host),
            Err(WorkspaceError::Capacity(9))
        );
    }

    #[test]
    fn create_with_explicit_index_keeps_slot_order() {
        let (mut mgr, mut host) = setup();
        mgr.create_workspace(Some(5), &mut host).unwrap();
        mgr.create_workspace(Some(2), &mut host).unwrap();
        let indices: Vec<u8> = mgr.list().iter().map(|w| w.index).collect();
        assert_eq!(indices, vec![0, 2, 5]);
    }

    #[test]
    fn switch_detaches_old_and_attaches_new() {
        let (mut mgr, mut host) = setup();
        let first = mgr.active_id().clone();
        let second = mgr.create_workspace(None, &mut host).unwrap();
        host.clear_calls();

        assert!(mgr.switch_to(&second, &mut host));
        assert_eq!(mgr.active_id(), &second);
        assert_eq!(active_count(&mgr), 1);
        assert_eq!(host.visible(), vec![PaneId(2)]);
        assert_eq!(
            host.calls,
            vec![
                HostCall::Preview(PaneId(1)),
                HostCall::Detach(PaneId(1)),
                HostCall::Attach(PaneId(2)),
            ]
        );

        assert!(mgr.switch_to(&first, &mut host));
        assert_eq!(host.visible(), vec![PaneId(1)]);
        assert_eq!(active_count(&mgr), 1);
    }

    #[test]
    fn switch_to_unknown_is_noop() {
        let (mut mgr, mut host) = setup();
        let before = mgr.active_id().clone();
        assert!(!mgr.switch_to(&WorkspaceId::from("missing"), &mut host));
        assert_eq!(mgr.active_id(), &before);
    }

    #[test]
    fn evicted_workspace_restores_with_same_ids() {
        let (mut mgr, mut host) = setup();
        let first = mgr.active_id().clone();
        let split = mgr
            .split_pane(PaneId(1), Direction::Right, Some("https://b.test".into()), &mut host)
            .unwrap();
        let second = mgr.create_workspace(None, &mut host).unwrap();
        mgr.switch_to(&second, &mut host);

        assert!(mgr.evict(&first, &mut host));
        assert!(!host.is_live(PaneId(1)));
        assert!(!host.is_live(split));
        assert!(!mgr.get(&first).unwrap().tree.is_live());
        assert_eq!(mgr.get(&first).unwrap().pane_count(), 2);

        mgr.switch_to(&first, &mut host);
        let tree = mgr.active_tree().unwrap();
        assert_eq!(tree.leaves(), vec![PaneId(1), split]);
        assert_eq!(tree.leaf(split).unwrap().url, "https://b.test");
        assert!(host.is_live(PaneId(1)));
        assert!(host.is_live(split));

        // Fresh ids never collide with restored ones.
        assert!(mgr.allocate_pane_id() > split);
    }

    #[test]
    fn active_workspace_is_never_evicted() {
        let (mut mgr, mut host) = setup();
        let active = mgr.active_id().clone();
        assert!(!mgr.evict(&active, &mut host));
        assert!(!mgr.evict(&WorkspaceId::from("missing"), &mut host));
    }

    #[test]
    fn live_limit_evicts_least_recently_used() {
        let mut host = RecordingHost::new();
        let limits = WorkspaceLimits {
            max_workspaces: 9,
            max_live: 2,
        };
        let mut mgr = WorkspaceManager::new(limits, HOME, &mut host);
        let first = mgr.active_id().clone();
        let second = mgr.create_workspace(None, &mut host).unwrap();
        let third = mgr.create_workspace(None, &mut host).unwrap();

        // Only one hidden workspace may stay live: the older one went.
        assert!(!mgr.get(&second).unwrap().tree.is_live());
        assert!(mgr.get(&third).unwrap().tree.is_live());

        mgr.switch_to(&second, &mut host);
        assert!(mgr.get(&first).unwrap().tree.is_live());
        assert!(!mgr.get(&third).unwrap().tree.is_live());
    }

    #[test]
    fn remove_refuses_last_and_unknown() {
        let (mut mgr, mut host) = setup();
        let only = mgr.active_id().clone();
        assert_eq!(
            mgr.remove_workspace(&only, &mut host),
            Err(WorkspaceError::LastWorkspace)
        );
        let missing = WorkspaceId::from("missing");
        assert_eq!(
            mgr.remove_workspace(&missing, &mut host),
            Err(WorkspaceError::NotFound(missing.clone()))
        );
    }

    #[test]
    fn remove_active_leaves_the_switch_to_the_caller() {
        let (mut mgr, mut host) = setup();
        let first = mgr.active_id().clone();
        let second = mgr.create_workspace(None, &mut host).unwrap();
        let third = mgr.create_workspace(None, &mut host).unwrap();
        mgr.switch_to(&second, &mut host);
        mgr.switch_to(&third, &mut host);

        let removed = mgr.remove_workspace(&third, &mut host).unwrap();
        assert!(removed.was_active);
        assert_eq!(removed.switched_to, None);
        assert_eq!(removed.panes, vec![PaneId(3)]);
        assert!(!host.is_live(PaneId(3)));
        assert_eq!(active_count(&mgr), 0);
        assert!(!host.visible().contains(&PaneId(2)));

        assert_eq!(mgr.most_recent_other(&third), Some(&second));
        assert!(mgr.switch_to(&second, &mut host));
        assert_eq!(mgr.active_id(), &second);
        assert_eq!(active_count(&mgr), 1);
        assert_eq!(host.visible(), vec![PaneId(2)]);
        assert!(mgr.get(&first).is_some());
    }

    #[test]
    fn removed_workspace_does_not_count_against_live_limit() {
        let mut host = RecordingHost::new();
        let limits = WorkspaceLimits {
            max_workspaces: 9,
            max_live: 2,
        };
        let mut mgr = WorkspaceManager::new(limits, HOME, &mut host);
        let first = mgr.active_id().clone();
        let second = mgr.create_workspace(None, &mut host).unwrap();
        let third = mgr.create_workspace(None, &mut host).unwrap();
        mgr.switch_to(&second, &mut host);
        mgr.switch_to(&first, &mut host);
        assert!(mgr.get(&second).unwrap().tree.is_live());
        assert!(!mgr.get(&third).unwrap().tree.is_live());

        mgr.remove_workspace(&first, &mut host).unwrap();
        assert!(mgr.switch_to(&third, &mut host));
        assert!(mgr.get(&second).unwrap().tree.is_live());
        assert!(host.is_live(PaneId(2)));
        assert_eq!(host.visible(), vec![PaneId(3)]);
    }

    #[test]
    fn remove_hidden_keeps_active() {
        let (mut mgr, mut host) = setup();
        let first = mgr.active_id().clone();
        let second = mgr.create_workspace(None, &mut host).unwrap();
        let removed = mgr.remove_workspace(&second, &mut host).unwrap();
        assert!(!removed.was_active);
        assert_eq!(removed.switched_to, None);
        assert_eq!(mgr.active_id(), &first);
    }

    #[test]
    fn split_and_close_in_active_workspace() {
        let (mut mgr, mut host) = setup();
        let new = mgr
            .split_pane(PaneId(1), Direction::Down, None, &mut host)
            .unwrap();
        assert_eq!(mgr.active_tree().unwrap().leaves(), vec![PaneId(1), new]);
        assert_eq!(mgr.active_tree().unwrap().leaf(new).unwrap().url, HOME);
        assert!(mgr.set_active_pane(new));

        assert_eq!(
            mgr.close_pane(new, &mut host),
            PaneClosed::Removed {
                focus: Some(PaneId(1))
            }
        );
        assert_eq!(mgr.active_pane(), Some(PaneId(1)));
        assert!(!host.is_live(new));
        assert_eq!(mgr.close_pane(new, &mut host), PaneClosed::NotFound);
    }

    #[test]
    fn split_unknown_pane_fails() {
        let (mut mgr, mut host) = setup();
        assert_eq!(
            mgr.split_pane(PaneId(42), Direction::Left, None, &mut host),
            None
        );
        assert_eq!(mgr.active_tree().unwrap().len(), 1);
    }

    #[test]
    fn split_rolls_back_when_spawn_fails() {
        let (mut mgr, mut host) = setup();
        host.fail_spawn.insert(PaneId(2));
        assert_eq!(
            mgr.split_pane(PaneId(1), Direction::Right, None, &mut host),
            None
        );
        assert_eq!(mgr.active_tree().unwrap().len(), 1);
    }

    #[test]
    fn closing_only_pane_with_two_workspaces_removes_workspace() {
        let (mut mgr, mut host) = setup();
        let first = mgr.active_id().clone();
        let second = mgr.create_workspace(None, &mut host).unwrap();
        mgr.switch_to(&second, &mut host);

        match mgr.close_pane(PaneId(2), &mut host) {
            PaneClosed::WorkspaceRemoved(removed) => {
                assert_eq!(removed.id, second);
                assert_eq!(removed.switched_to, Some(first.clone()));
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(mgr.len(), 1);
        assert_eq!(mgr.active_id(), &first);
        assert_eq!(host.visible(), vec![PaneId(1)]);
    }

    #[test]
    fn closing_only_pane_of_only_workspace_reports_last() {
        let (mut mgr, mut host) = setup();
        assert_eq!(mgr.close_pane(PaneId(1), &mut host), PaneClosed::LastPane);
        assert_eq!(mgr.active_tree().unwrap().len(), 1);
        assert!(host.is_live(PaneId(1)));
    }

    #[test]
    fn leaf_lookup_spans_hidden_live_workspaces() {
        let (mut mgr, mut host) = setup();
        let other = mgr.create_workspace(None, &mut host).unwrap();
        let hidden_pane = mgr.get(&other).unwrap().active_pane.unwrap();

        mgr.leaf_mut(hidden_pane).unwrap().title = Some("Background".into());
        assert_eq!(
            mgr.leaf(hidden_pane).and_then(|l| l.title.as_deref()),
            Some("Background")
        );
        assert!(mgr.leaf(PaneId(99)).is_none());
    }

    #[test]
    fn audio_flags_scan_live_panes() {
        let (mut mgr, mut host) = setup();
        let id = mgr.active_id().clone();
        assert!(!mgr.is_audible(&id, &host));
        host.audible.insert(PaneId(1));
        host.muted.insert(PaneId(1));
        assert!(mgr.is_audible(&id, &host));
        assert!(mgr.is_muted(&id, &host));

        let infos = mgr.infos(&host);
        assert_eq!(infos.len(), 1);
        assert!(infos[0].is_audible && infos[0].is_active);
        assert_eq!(infos[0].pane_count, 1);
        mgr.rename_workspace(&id, "Research").unwrap();
        assert_eq!(mgr.infos(&host)[0].name, "Research");
    }

    #[test]
    fn state_round_trip_restores_active_with_ids() {
        let (mut mgr, mut host) = setup();
        let split = mgr
            .split_pane(PaneId(1), Direction::Right, Some("https://b.test".into()), &mut host)
            .unwrap();
        mgr.set_active_pane(split);
        let second = mgr.create_workspace(None, &mut host).unwrap();
        let first = mgr.active_id().clone();

        let json = serde_json::to_string(&mgr.to_state()).unwrap();
        assert!(json.contains("activeWorkspaceId"));
        let state: WorkspaceState = serde_json::from_str(&json).unwrap();

        let mut fresh_host = RecordingHost::new();
        let mut restored =
            WorkspaceManager::from_state(state, WorkspaceLimits::default(), HOME, &mut fresh_host);
        assert_eq!(restored.len(), 2);
        assert_eq!(restored.active_id(), &first);
        assert_eq!(restored.active_pane(), Some(split));
        assert_eq!(restored.active_tree().unwrap().leaves(), vec![PaneId(1), split]);
        assert_eq!(fresh_host.visible(), vec![PaneId(1), split]);

        // The hidden workspace stays evicted until shown.
        assert!(!restored.get(&second).unwrap().tree.is_live());
        assert!(restored.allocate_pane_id().0 > 3);
    }

    #[test]
    fn empty_state_starts_fresh() {
        let mut host = RecordingHost::new();
        let mgr = WorkspaceManager::from_state(
            WorkspaceState::default(),
            WorkspaceLimits::default(),
            HOME,
            &mut host,
        );
        assert_eq!(mgr.len(), 1);
        assert_eq!(host.visible().len(), 1);
    }

    #[test]
    fn most_recent_other_follows_access_order() {
        let (mut mgr, mut host) = setup();
        let first = mgr.active_id().clone();
        mgr.create_workspace(None, &mut host).unwrap();
        let third = mgr.create_workspace(None, &mut host).unwrap();
        mgr.switch_to(&third, &mut host);
        mgr.switch_to(&first, &mut host);
        assert_eq!(mgr.most_recent_other(&first), Some(&third));
        assert_eq!(mgr.most_recent_other(&third), Some(&first));
    }
}
