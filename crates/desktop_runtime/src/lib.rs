pub mod apps;
pub mod chrome;
pub mod launch;
pub mod runtime_context;
pub mod surface;
pub mod taskbar;

pub use chrome::ChromeCommand;
pub use runtime_context::{
    apply_window_action, provide_window_manager, use_window_manager, WindowManagerContext,
    WindowManagerProvider,
};
pub use surface::{SurfaceRect, SurfaceWindow};
pub use taskbar::TaskbarEntry;
