//! Event and response payloads for window operations.

use serde::{Deserialize, Serialize};

/// A request to the window backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WindowEvent {
    /// Open a window with the given title.
    NewWindow { title: String },
    /// Ask for the current inner size.
    GetWindowSize,
    /// Close the window, if one is open.
    CloseWindow,
}

/// A reply from the window backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum WindowResponse {
    /// Current inner size in pixels.
    WindowSize { width: f64, height: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_survive_serialization() {
        // These payloads cross a process boundary in a full deployment.
        let event = WindowEvent::NewWindow {
            title: "main".to_string(),
        };
        let json = serde_json::to_string(&event).unwrap();
        assert_eq!(serde_json::from_str::<WindowEvent>(&json).unwrap(), event);
    }
}
