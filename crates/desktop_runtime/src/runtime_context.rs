//! Runtime provider and context wiring for the window manager.
//!
//! The provider owns one [`WindowManagerStore`] inside a reactive signal and hands a copyable
//! context to the desktop surface, taskbar, start menu and desktop icons. Collaborators never
//! touch window records directly; they dispatch [`WindowAction`] values through the context.
#![allow(clippy::clone_on_copy)]

use leptos::*;
use window_manager::{
    ComponentKind, ConfigError, Outcome, WindowAction, WindowId, WindowManagerConfig,
    WindowManagerStore,
};

use crate::{
    chrome::{chrome_actions, ChromeCommand},
    launch::{launch_request, LaunchSequence},
    surface::{surface_plan, SurfaceRect, SurfaceWindow},
    taskbar::{taskbar_activation, taskbar_entries, TaskbarEntry},
};

#[derive(Clone, Copy)]
/// Leptos context for reading window manager state and dispatching [`WindowAction`] values.
pub struct WindowManagerContext {
    /// Reactive store signal.
    pub store: RwSignal<WindowManagerStore>,
    /// Id source for windows opened from launchers.
    pub launches: StoredValue<LaunchSequence>,
    /// Store dispatch callback.
    pub dispatch: Callback<WindowAction>,
}

impl WindowManagerContext {
    /// Creates the store signal and dispatch callback under the current reactive owner.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] when `config` widens or inverts the built-in limits; no signal
    /// is created in that case.
    pub fn new(config: WindowManagerConfig) -> Result<Self, ConfigError> {
        let store = create_rw_signal(WindowManagerStore::with_config(config)?);
        let launches = store_value(LaunchSequence::new());
        let dispatch = Callback::new(move |action: WindowAction| {
            apply_window_action(store, action);
        });

        Ok(Self {
            store,
            launches,
            dispatch,
        })
    }

    /// Dispatches an action through the context callback.
    pub fn dispatch_action(&self, action: WindowAction) {
        self.dispatch.call(action);
    }

    /// Opens a fresh window of `component`, as the start menu and desktop icons do.
    pub fn launch(&self, component: ComponentKind) {
        if let Some(request) = self
            .launches
            .try_update_value(|launches| launch_request(component, launches))
        {
            self.dispatch_action(WindowAction::Open(request));
        }
    }

    /// Handles a click on the taskbar button of `window_id`.
    pub fn activate_taskbar_entry(&self, window_id: &WindowId) {
        let actions = self
            .store
            .with_untracked(|store| taskbar_activation(store, window_id));
        for action in actions {
            self.dispatch_action(action);
        }
    }

    /// Handles a title-bar or frame interaction on `window_id`.
    pub fn chrome(&self, window_id: &WindowId, command: ChromeCommand) {
        let actions = self
            .store
            .with_untracked(|store| chrome_actions(store, window_id, command));
        for action in actions {
            self.dispatch_action(action);
        }
    }

    /// Tracked taskbar entries.
    pub fn taskbar_entries(&self) -> Vec<TaskbarEntry> {
        self.store.with(taskbar_entries)
    }

    /// Tracked render plan for the desktop surface.
    pub fn surface_plan(&self, viewport: SurfaceRect) -> Vec<SurfaceWindow> {
        self.store.with(|store| surface_plan(store, viewport))
    }
}

/// Applies `action` to the store signal, notifying subscribers only when state changed.
///
/// Rejections are logged and otherwise swallowed; the returned [`Outcome`] reports them to callers
/// that care.
pub fn apply_window_action(store: RwSignal<WindowManagerStore>, action: WindowAction) -> Outcome {
    let name = action.name();
    let mut next = store.get_untracked();
    let outcome = next.apply(action);

    match outcome.rejection() {
        None => store.set(next),
        Some(reason) => logging::warn!("window manager rejected {name}: {reason}"),
    }
    outcome
}

/// Creates a [`WindowManagerContext`] and provides it to descendants of the current owner.
///
/// # Errors
///
/// Returns the [`ConfigError`] from [`WindowManagerContext::new`]; nothing is provided then.
pub fn provide_window_manager(
    config: WindowManagerConfig,
) -> Result<WindowManagerContext, ConfigError> {
    let context = WindowManagerContext::new(config)?;
    provide_context(context.clone());
    Ok(context)
}

#[component]
/// Provides [`WindowManagerContext`] to descendant components.
pub fn WindowManagerProvider(
    /// Store limits; the built-in limits apply when omitted or invalid.
    #[prop(optional)]
    config: Option<WindowManagerConfig>,
    children: Children,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let config = match config.validate() {
        Ok(()) => config,
        Err(err) => {
            logging::warn!("window manager config rejected, using built-in limits: {err}");
            WindowManagerConfig::default()
        }
    };
    if let Err(err) = provide_window_manager(config) {
        logging::error!("window manager unavailable: {err}");
    }
    children().into_view()
}

/// Returns the current [`WindowManagerContext`].
///
/// # Panics
///
/// Panics if called outside [`WindowManagerProvider`].
pub fn use_window_manager() -> WindowManagerContext {
    use_context::<WindowManagerContext>().expect("WindowManagerContext not provided")
}
