//! UI modules for the terrain viewer.
//!
//! The UI is split into distinct panels:
//! - Top bar: title and status message
//! - Side panel: layer visibility and load status
//! - Central canvas: the 3D viewport
//! - Notifications: modal load-error dialogs

mod canvas;
mod notifications;
mod side_panel;
mod top_bar;

pub use canvas::render_canvas;
pub use notifications::render_notifications;
pub use side_panel::render_side_panel;
pub use top_bar::render_top_bar;
