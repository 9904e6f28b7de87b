use std::collections::HashSet;

use proptest::prelude::*;
use window_manager::{
    ComponentKind, OpenWindowRequest, Position, Size, WindowAction, WindowId, WindowManagerStore,
};

const ID_POOL: [&str; 7] = ["w0", "w1", "w2", "w3", "w4", "../up", "__proto__"];
const TAG_POOL: [&str; 5] = ["Explorer", "RpaLab", "Terminal", "BillingApp", "NotAnApp"];

fn window_id() -> impl Strategy<Value = WindowId> {
    prop::sample::select(ID_POOL.to_vec()).prop_map(WindowId::from)
}

fn coordinate() -> impl Strategy<Value = f64> {
    prop_oneof![
        -1.0e6f64..1.0e6,
        Just(f64::NAN),
        Just(f64::INFINITY),
        Just(f64::NEG_INFINITY),
    ]
}

fn action() -> impl Strategy<Value = WindowAction> {
    prop_oneof![
        (
            window_id(),
            prop::sample::select(TAG_POOL.to_vec()),
            prop::option::of((coordinate(), coordinate())),
            prop::option::of((coordinate(), coordinate())),
        )
            .prop_map(|(id, tag, position, size)| {
                let mut request = OpenWindowRequest::from_tag(id.0, "<b>t</b>", tag);
                request.position = position.map(|(x, y)| Position::new(x, y));
                request.size = size.map(|(w, h)| Size::new(w, h));
                WindowAction::Open(request)
            }),
        window_id().prop_map(|window_id| WindowAction::Close { window_id }),
        window_id().prop_map(|window_id| WindowAction::Focus { window_id }),
        window_id().prop_map(|window_id| WindowAction::Minimize { window_id }),
        window_id().prop_map(|window_id| WindowAction::Maximize { window_id }),
        window_id().prop_map(|window_id| WindowAction::Restore { window_id }),
        (window_id(), coordinate(), coordinate()).prop_map(|(window_id, x, y)| {
            WindowAction::Move {
                window_id,
                position: Position::new(x, y),
            }
        }),
        (window_id(), coordinate(), coordinate()).prop_map(|(window_id, w, h)| {
            WindowAction::Resize {
                window_id,
                size: Size::new(w, h),
            }
        }),
    ]
}

fn assert_invariants(store: &WindowManagerStore) -> Result<(), TestCaseError> {
    let config = store.config();
    let windows = store.windows();

    let ids: HashSet<_> = windows.iter().map(|w| &w.id).collect();
    prop_assert_eq!(ids.len(), windows.len(), "duplicate ids");
    let z_indices: HashSet<_> = windows.iter().map(|w| w.z_index).collect();
    prop_assert_eq!(z_indices.len(), windows.len(), "duplicate z-indices");
    prop_assert!(windows.len() <= config.max_windows);

    for window in windows {
        prop_assert!(window.z_index >= 1 && window.z_index < store.next_z_index());
        prop_assert!(ComponentKind::ALL.contains(&window.component));
        for value in [window.position.x, window.position.y] {
            prop_assert!(value >= config.position.min && value <= config.position.max);
        }
        prop_assert!(window.size.width >= config.width.min && window.size.width <= config.width.max);
        prop_assert!(
            window.size.height >= config.height.min && window.size.height <= config.height.max
        );
        prop_assert_eq!(window.previous_position.is_some(), window.is_maximized);
        prop_assert_eq!(window.previous_size.is_some(), window.is_maximized);
        prop_assert!(!window.title.contains('<'));
    }

    if let Some(active) = store.active_window_id() {
        let window = store.window(active);
        prop_assert!(window.is_some(), "active id {} is not live", active);
        prop_assert!(window.map_or(false, |w| !w.is_minimized), "active window is minimized");
    }
    Ok(())
}

proptest! {
    /// Arbitrary operation sequences never break the store invariants.
    #[test]
    fn invariants_hold_after_every_operation(actions in prop::collection::vec(action(), 1..64)) {
        let mut store = WindowManagerStore::new();
        for action in actions {
            store.apply(action);
            assert_invariants(&store)?;
        }
    }

    /// Rejected operations leave the store untouched.
    #[test]
    fn rejected_operations_are_no_ops(actions in prop::collection::vec(action(), 1..64)) {
        let mut store = WindowManagerStore::new();
        for action in actions {
            let before = store.clone();
            let outcome = store.apply(action);
            if !outcome.is_applied() {
                prop_assert_eq!(&store, &before);
            }
        }
    }

    /// Focusing a live window puts it strictly on top.
    #[test]
    fn focus_always_tops_the_stack(count in 1usize..20, pick in any::<prop::sample::Index>()) {
        let mut store = WindowManagerStore::new();
        for n in 0..count {
            store.open(OpenWindowRequest::new(format!("w{n}"), "t", ComponentKind::Terminal));
        }
        let target = WindowId::new(format!("w{}", pick.index(count)));

        store.focus_window(&target);

        let top = store.windows_by_z().last().map(|w| w.id.clone());
        prop_assert_eq!(top, Some(target.clone()));
        prop_assert_eq!(store.active_window_id(), Some(&target));
    }
}
