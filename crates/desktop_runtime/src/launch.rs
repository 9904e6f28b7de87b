//! Open requests for start-menu, desktop-icon and in-app launches.

use window_manager::{ComponentKind, OpenWindowRequest};

use crate::apps::app_descriptor;

/// Mints per-launch window ids so repeated launches of one app get separate windows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LaunchSequence {
    next: u64,
}

impl LaunchSequence {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `"{slug}-{n}"` and advances the counter.
    pub fn next_window_id(&mut self, slug: &str) -> String {
        self.next = self.next.saturating_add(1);
        format!("{slug}-{}", self.next)
    }
}

/// Builds the open request for launching `component` with its registry title and default geometry.
pub fn launch_request(component: ComponentKind, launches: &mut LaunchSequence) -> OpenWindowRequest {
    let descriptor = app_descriptor(component);
    OpenWindowRequest::new(
        launches.next_window_id(descriptor.slug),
        descriptor.window_title,
        component,
    )
}
