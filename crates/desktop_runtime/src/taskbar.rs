//! Taskbar view model and click handling.

use serde::{Deserialize, Serialize};
use window_manager::{ComponentKind, WindowAction, WindowId, WindowManagerStore};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskbarEntry {
    pub window_id: WindowId,
    pub title: String,
    pub component: ComponentKind,
    /// Highlighted button: the window is active and visible.
    pub is_active: bool,
    pub is_minimized: bool,
}

/// One taskbar button per open window, in creation order.
pub fn taskbar_entries(store: &WindowManagerStore) -> Vec<TaskbarEntry> {
    let active = store.active_window_id();
    store
        .windows()
        .iter()
        .map(|window| TaskbarEntry {
            window_id: window.id.clone(),
            title: window.title.clone(),
            component: window.component,
            is_active: active == Some(&window.id) && !window.is_minimized,
            is_minimized: window.is_minimized,
        })
        .collect()
}

/// Actions for a click on the taskbar button of `window_id`.
///
/// Minimized windows are restored and raised, the active window is left alone, and any other
/// window is raised.
pub fn taskbar_activation(store: &WindowManagerStore, window_id: &WindowId) -> Vec<WindowAction> {
    let Some(window) = store.window(window_id) else {
        return Vec::new();
    };

    if window.is_minimized {
        vec![
            WindowAction::Restore {
                window_id: window_id.clone(),
            },
            WindowAction::Focus {
                window_id: window_id.clone(),
            },
        ]
    } else if store.active_window_id() == Some(window_id) {
        Vec::new()
    } else {
        vec![WindowAction::Focus {
            window_id: window_id.clone(),
        }]
    }
}
