//! Window title-bar and frame interactions mapped onto store actions.
//!
//! Pointer tracking happens in the draggable surface; it reports finished geometry here as
//! [`ChromeCommand::DragTo`] and [`ChromeCommand::ResizeTo`], which the store clamps.

use window_manager::{Position, Size, WindowAction, WindowId, WindowManagerStore};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ChromeCommand {
    /// Pointer pressed anywhere on the window frame.
    Press,
    Minimize,
    /// Maximize button, which doubles as restore on a maximized window.
    ToggleMaximize,
    Close,
    DragTo(Position),
    ResizeTo(Size),
}

pub fn chrome_actions(
    store: &WindowManagerStore,
    window_id: &WindowId,
    command: ChromeCommand,
) -> Vec<WindowAction> {
    let Some(window) = store.window(window_id) else {
        return Vec::new();
    };
    let window_id = window_id.clone();

    let action = match command {
        ChromeCommand::Press if store.active_window_id() == Some(&window_id) => return Vec::new(),
        ChromeCommand::Press => WindowAction::Focus { window_id },
        ChromeCommand::Minimize => WindowAction::Minimize { window_id },
        ChromeCommand::ToggleMaximize if window.is_maximized => WindowAction::Restore { window_id },
        ChromeCommand::ToggleMaximize => WindowAction::Maximize { window_id },
        ChromeCommand::Close => WindowAction::Close { window_id },
        ChromeCommand::DragTo(position) => WindowAction::Move {
            window_id,
            position,
        },
        ChromeCommand::ResizeTo(size) => WindowAction::Resize { window_id, size },
    };
    vec![action]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use window_manager::{ComponentKind, OpenWindowRequest};

    use super::*;

    fn run(store: &mut WindowManagerStore, id: &WindowId, command: ChromeCommand) {
        for action in chrome_actions(store, id, command) {
            store.apply(action);
        }
    }

    #[test]
    fn press_focuses_only_inactive_windows() {
        let mut store = WindowManagerStore::new();
        store.open(OpenWindowRequest::new("a", "A", ComponentKind::Terminal));
        store.open(OpenWindowRequest::new("b", "B", ComponentKind::Terminal));
        let a = WindowId::from("a");
        let b = WindowId::from("b");

        assert_eq!(chrome_actions(&store, &b, ChromeCommand::Press), Vec::new());
        run(&mut store, &a, ChromeCommand::Press);
        assert_eq!(store.active_window_id(), Some(&a));
    }

    #[test]
    fn maximize_button_toggles() {
        let mut store = WindowManagerStore::new();
        store.open(
            OpenWindowRequest::new("a", "A", ComponentKind::Terminal)
                .with_position(Position::new(120.0, 80.0)),
        );
        let a = WindowId::from("a");

        run(&mut store, &a, ChromeCommand::ToggleMaximize);
        assert!(store.window(&a).map_or(false, |w| w.is_maximized));

        run(&mut store, &a, ChromeCommand::ToggleMaximize);
        let window = store.window(&a).expect("window");
        assert!(!window.is_maximized);
        assert_eq!(window.position, Position::new(120.0, 80.0));
    }

    #[test]
    fn drag_and_resize_reports_are_clamped() {
        let mut store = WindowManagerStore::new();
        store.open(OpenWindowRequest::new("a", "A", ComponentKind::Terminal));
        let a = WindowId::from("a");

        run(&mut store, &a, ChromeCommand::DragTo(Position::new(-30.5, 64.25)));
        run(&mut store, &a, ChromeCommand::ResizeTo(Size::new(50.0, 9000.0)));

        let window = store.window(&a).expect("window");
        assert_eq!(window.position, Position::new(0.0, 64.25));
        assert_eq!(window.size, Size::new(200.0, 2160.0));
    }

    #[test]
    fn stale_window_yields_no_actions() {
        let store = WindowManagerStore::new();
        assert_eq!(
            chrome_actions(&store, &WindowId::from("closed"), ChromeCommand::Close),
            Vec::new()
        );
    }
}
