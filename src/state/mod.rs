//! Application state management.
//!
//! State is organized into logical groupings; scene content itself lives in
//! the scene context, not here.

mod notify;

pub use notify::Notification;

/// Root application state.
pub struct AppState {
    /// Status message displayed in the top bar.
    pub status_message: String,

    /// Whether the terrain load is still in flight.
    pub terrain_loading: bool,

    /// Whether the points load is still in flight.
    pub points_loading: bool,

    /// Pending user-visible error notifications, oldest first.
    pub notifications: Vec<Notification>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            status_message: "Ready".to_string(),
            terrain_loading: false,
            points_loading: false,
            notifications: Vec::new(),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raises a user-visible error notification and mirrors it in the
    /// status bar.
    pub fn notify(&mut self, message: impl Into<String>) {
        let message = message.into();
        self.status_message = message.clone();
        self.notifications.push(Notification::new(message));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_records_exactly_one_notification() {
        let mut state = AppState::new();
        state.notify("Terrain load failed: 404");

        assert_eq!(state.notifications.len(), 1);
        assert_eq!(state.status_message, "Terrain load failed: 404");
    }
}
