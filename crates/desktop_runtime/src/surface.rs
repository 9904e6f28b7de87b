//! Desktop surface render plan derived from store state.

use serde::{Deserialize, Serialize};
use window_manager::{ComponentKind, Position, Size, WindowId, WindowManagerStore};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl SurfaceRect {
    pub fn from_geometry(position: Position, size: Size) -> Self {
        Self {
            x: position.x,
            y: position.y,
            width: size.width,
            height: size.height,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceWindow {
    pub window_id: WindowId,
    pub title: String,
    pub component: ComponentKind,
    pub rect: SurfaceRect,
    pub z_index: u64,
    pub is_active: bool,
    pub is_maximized: bool,
}

/// Windows to draw, back to front.
///
/// Minimized windows are left out. Maximized windows fill `viewport`; their stored geometry is
/// only kept for the eventual restore.
pub fn surface_plan(store: &WindowManagerStore, viewport: SurfaceRect) -> Vec<SurfaceWindow> {
    let active = store.active_window_id();
    store
        .windows_by_z()
        .into_iter()
        .filter(|window| !window.is_minimized)
        .map(|window| SurfaceWindow {
            window_id: window.id.clone(),
            title: window.title.clone(),
            component: window.component,
            rect: if window.is_maximized {
                viewport
            } else {
                SurfaceRect::from_geometry(window.position, window.size)
            },
            z_index: window.z_index,
            is_active: active == Some(&window.id),
            is_maximized: window.is_maximized,
        })
        .collect()
}
