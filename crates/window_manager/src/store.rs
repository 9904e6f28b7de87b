//! Window manager store: lifecycle, focus, z-order and geometry transitions.

use crate::config::{ConfigError, WindowManagerConfig};
use crate::error::{Outcome, Rejection};
use crate::model::{ComponentKind, OpenWindowRequest, Position, Size, WindowId, WindowRecord};
use crate::validation::{clamp_position, clamp_size, is_valid_window_id, sanitize_title};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`WindowManagerStore::apply`].
pub enum WindowAction {
    /// Open a new window.
    Open(OpenWindowRequest),
    /// Close a window by id.
    Close {
        /// Window to close.
        window_id: WindowId,
    },
    /// Focus and raise a window.
    Focus {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Minimize a window.
    Minimize {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Maximize a window.
    Maximize {
        /// Window to maximize.
        window_id: WindowId,
    },
    /// Restore a minimized or maximized window.
    Restore {
        /// Window to restore.
        window_id: WindowId,
    },
    /// Move a window's top-left corner.
    Move {
        /// Window being moved.
        window_id: WindowId,
        /// Requested position, clamped before commit.
        position: Position,
    },
    /// Resize a window.
    Resize {
        /// Window being resized.
        window_id: WindowId,
        /// Requested size, clamped before commit.
        size: Size,
    },
}

impl WindowAction {
    /// Short operation name used in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Open(_) => "open",
            Self::Close { .. } => "close",
            Self::Focus { .. } => "focus",
            Self::Minimize { .. } => "minimize",
            Self::Maximize { .. } => "maximize",
            Self::Restore { .. } => "restore",
            Self::Move { .. } => "move",
            Self::Resize { .. } => "resize",
        }
    }
}

/// Sole owner of the open window set, the active window and the z-order counter.
///
/// Every operation validates its input before touching state, so a rejected call leaves the store
/// exactly as it was. Out-of-range geometry is clamped rather than rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowManagerStore {
    windows: Vec<WindowRecord>,
    active_window_id: Option<WindowId>,
    next_z_index: u64,
    config: WindowManagerConfig,
}

impl Default for WindowManagerStore {
    fn default() -> Self {
        Self::from_validated(WindowManagerConfig::default())
    }
}

impl WindowManagerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty store enforcing `config`.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] from [`WindowManagerConfig::validate`]; a config may only
    /// tighten the built-in limits.
    pub fn with_config(config: WindowManagerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_validated(config))
    }

    fn from_validated(config: WindowManagerConfig) -> Self {
        Self {
            windows: Vec::new(),
            active_window_id: None,
            next_z_index: 1,
            config,
        }
    }

    pub fn config(&self) -> &WindowManagerConfig {
        &self.config
    }

    /// Open windows in creation order.
    pub fn windows(&self) -> &[WindowRecord] {
        &self.windows
    }

    pub fn window(&self, window_id: &WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| &w.id == window_id)
    }

    pub fn active_window_id(&self) -> Option<&WindowId> {
        self.active_window_id.as_ref()
    }

    pub fn next_z_index(&self) -> u64 {
        self.next_z_index
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Open windows ordered back to front.
    pub fn windows_by_z(&self) -> Vec<&WindowRecord> {
        let mut windows: Vec<&WindowRecord> = self.windows.iter().collect();
        windows.sort_by_key(|w| w.z_index);
        windows
    }

    /// Applies a [`WindowAction`] by forwarding to the matching operation.
    pub fn apply(&mut self, action: WindowAction) -> Outcome {
        match action {
            WindowAction::Open(request) => self.open(request),
            WindowAction::Close { window_id } => self.close(&window_id),
            WindowAction::Focus { window_id } => self.focus_window(&window_id),
            WindowAction::Minimize { window_id } => self.minimize_window(&window_id),
            WindowAction::Maximize { window_id } => self.maximize_window(&window_id),
            WindowAction::Restore { window_id } => self.restore_window(&window_id),
            WindowAction::Move {
                window_id,
                position,
            } => self.update_window_position(&window_id, position),
            WindowAction::Resize { window_id, size } => self.update_window_size(&window_id, size),
        }
    }

    /// Opens a window and makes it active.
    ///
    /// Checks run in order: id safety, component whitelist, duplicate id, capacity. The first
    /// failing check rejects the request; an existing window with the same id is never
    /// overwritten.
    pub fn open(&mut self, request: OpenWindowRequest) -> Outcome {
        self.open_internal(request).into()
    }

    /// Removes a window. If it was active, focus falls back to the topmost visible window left.
    pub fn close(&mut self, window_id: &WindowId) -> Outcome {
        self.close_internal(window_id).into()
    }

    /// Raises a window above every other window, un-minimizes it and makes it active.
    pub fn focus_window(&mut self, window_id: &WindowId) -> Outcome {
        self.focus_internal(window_id).into()
    }

    /// Hides a window. An active window stops being active.
    ///
    /// Maximize state and the pre-maximize geometry are kept, so a later restore returns the
    /// window to where it was before it was maximized.
    pub fn minimize_window(&mut self, window_id: &WindowId) -> Outcome {
        self.minimize_internal(window_id).into()
    }

    /// Maximizes a window, remembering its geometry for [`WindowManagerStore::restore_window`].
    pub fn maximize_window(&mut self, window_id: &WindowId) -> Outcome {
        self.maximize_internal(window_id).into()
    }

    /// Clears minimized and maximized state, restoring pre-maximize geometry when recorded.
    pub fn restore_window(&mut self, window_id: &WindowId) -> Outcome {
        self.restore_internal(window_id).into()
    }

    pub fn update_window_position(&mut self, window_id: &WindowId, position: Position) -> Outcome {
        let position = clamp_position(position, &self.config);
        self.find_window_mut(window_id)
            .map(|window| window.position = position)
            .into()
    }

    pub fn update_window_size(&mut self, window_id: &WindowId, size: Size) -> Outcome {
        let size = clamp_size(size, &self.config);
        self.find_window_mut(window_id)
            .map(|window| window.size = size)
            .into()
    }

    fn open_internal(&mut self, request: OpenWindowRequest) -> Result<(), Rejection> {
        if !is_valid_window_id(&request.id) {
            return Err(Rejection::InvalidId(request.id));
        }
        let component: ComponentKind = request
            .component
            .parse()
            .map_err(|_| Rejection::ComponentNotAllowed(request.component.clone()))?;
        let window_id = WindowId(request.id);
        if self.window(&window_id).is_some() {
            return Err(Rejection::DuplicateId(window_id));
        }
        if self.windows.len() >= self.config.max_windows {
            return Err(Rejection::CapacityReached {
                limit: self.config.max_windows,
            });
        }

        let (default_position, default_size) = component.default_geometry();
        let record = WindowRecord {
            id: window_id.clone(),
            title: sanitize_title(&request.title),
            component,
            position: clamp_position(request.position.unwrap_or(default_position), &self.config),
            size: clamp_size(request.size.unwrap_or(default_size), &self.config),
            is_minimized: false,
            is_maximized: false,
            z_index: self.issue_z_index(),
            previous_position: None,
            previous_size: None,
        };
        self.windows.push(record);
        self.active_window_id = Some(window_id);
        Ok(())
    }

    fn close_internal(&mut self, window_id: &WindowId) -> Result<(), Rejection> {
        let index = self.position_of(window_id)?;
        self.windows.remove(index);
        if self.active_window_id.as_ref() == Some(window_id) {
            self.active_window_id = self
                .windows
                .iter()
                .filter(|w| !w.is_minimized)
                .max_by_key(|w| w.z_index)
                .map(|w| w.id.clone());
        }
        Ok(())
    }

    fn focus_internal(&mut self, window_id: &WindowId) -> Result<(), Rejection> {
        let index = self.position_of(window_id)?;
        let z_index = self.issue_z_index();
        let window = &mut self.windows[index];
        window.z_index = z_index;
        window.is_minimized = false;
        self.active_window_id = Some(window_id.clone());
        Ok(())
    }

    fn minimize_internal(&mut self, window_id: &WindowId) -> Result<(), Rejection> {
        self.find_window_mut(window_id)?.is_minimized = true;
        if self.active_window_id.as_ref() == Some(window_id) {
            self.active_window_id = None;
        }
        Ok(())
    }

    fn maximize_internal(&mut self, window_id: &WindowId) -> Result<(), Rejection> {
        let window = self.find_window_mut(window_id)?;
        if !window.is_maximized {
            window.previous_position = Some(window.position);
            window.previous_size = Some(window.size);
        }
        window.is_maximized = true;
        window.is_minimized = false;
        Ok(())
    }

    fn restore_internal(&mut self, window_id: &WindowId) -> Result<(), Rejection> {
        let window = self.find_window_mut(window_id)?;
        if let Some(position) = window.previous_position.take() {
            window.position = position;
        }
        if let Some(size) = window.previous_size.take() {
            window.size = size;
        }
        window.is_minimized = false;
        window.is_maximized = false;
        Ok(())
    }

    fn issue_z_index(&mut self) -> u64 {
        let z_index = self.next_z_index;
        self.next_z_index = self.next_z_index.saturating_add(1);
        z_index
    }

    fn position_of(&self, window_id: &WindowId) -> Result<usize, Rejection> {
        self.windows
            .iter()
            .position(|w| &w.id == window_id)
            .ok_or_else(|| Rejection::WindowNotFound(window_id.clone()))
    }

    fn find_window_mut(&mut self, window_id: &WindowId) -> Result<&mut WindowRecord, Rejection> {
        self.windows
            .iter_mut()
            .find(|w| &w.id == window_id)
            .ok_or_else(|| Rejection::WindowNotFound(window_id.clone()))
    }
}
