//! The window backend trait and the headless in-memory implementation.

use thiserror::Error;

use crate::event::{WindowEvent, WindowResponse};

/// Failures a window backend can report.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BackendError {
    /// Title validation failed.
    #[error("invalid title: empty string")]
    EmptyTitle,
}

/// Executes window events.
///
/// The seam where a real windowing stack plugs in. Implementations apply
/// one event at a time: query events yield a response, commands yield
/// `None`.
pub trait WindowBackend {
    /// Apply one event.
    fn handle_event(&mut self, event: WindowEvent)
        -> Result<Option<WindowResponse>, BackendError>;
}

/// State of the one window a backend manages.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowState {
    /// Window title.
    pub title: String,
    /// Inner width in pixels.
    pub width: f64,
    /// Inner height in pixels.
    pub height: f64,
}

const DEFAULT_WIDTH: f64 = 800.0;
const DEFAULT_HEIGHT: f64 = 600.0;

/// In-memory backend: tracks window state without touching a display
/// server. Opening while a window exists replaces it; closing is a no-op
/// when nothing is open.
#[derive(Debug, Default)]
pub struct HeadlessBackend {
    window: Option<WindowState>,
}

impl HeadlessBackend {
    /// Create a backend with no window open.
    pub fn new() -> Self {
        Self::default()
    }

    /// The currently open window, if any.
    pub fn window(&self) -> Option<&WindowState> {
        self.window.as_ref()
    }
}

impl WindowBackend for HeadlessBackend {
    fn handle_event(
        &mut self,
        event: WindowEvent,
    ) -> Result<Option<WindowResponse>, BackendError> {
        match event {
            WindowEvent::NewWindow { title } => {
                if title.is_empty() {
                    return Err(BackendError::EmptyTitle);
                }
                tracing::debug!(%title, "opening window");
                self.window = Some(WindowState {
                    title,
                    width: DEFAULT_WIDTH,
                    height: DEFAULT_HEIGHT,
                });
                Ok(None)
            }
            WindowEvent::GetWindowSize => {
                // A missing window reports zero size rather than failing.
                let (width, height) = match &self.window {
                    Some(w) => (w.width, w.height),
                    None => (0.0, 0.0),
                };
                Ok(Some(WindowResponse::WindowSize { width, height }))
            }
            WindowEvent::CloseWindow => {
                if self.window.take().is_some() {
                    tracing::debug!("closing window");
                }
                Ok(None)
            }
        }
    }
}
