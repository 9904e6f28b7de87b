//! Window lifecycle, stacking and geometry store for the desktop shell.

pub mod config;
pub mod error;
pub mod model;
pub mod store;
pub mod validation;

pub use config::{AxisBounds, ConfigError, WindowManagerConfig};
pub use error::{Outcome, Rejection};
pub use model::*;
pub use store::{WindowAction, WindowManagerStore};
