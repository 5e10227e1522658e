//! # seam-winops
//!
//! Window operations exposed through the call table: the fan-out side of
//! the boundary. Each exposed operation is the same mechanical shape -
//! read arguments, send a typed event to the window backend, encode the
//! outcome as a boundary result - and every one of them returns to the
//! host through the decoder in `seam-host`.
//!
//! There is no real windowing here. [`WindowBackend`] is the seam where a
//! display-server implementation would plug in; this crate ships
//! [`HeadlessBackend`], an in-memory implementation that tracks window
//! state and nothing else. The event and response types are serde-derived
//! because in a full deployment they cross a process boundary to whatever
//! thread or process owns the event loop.

mod backend;
mod event;
pub mod ops;

pub use backend::{BackendError, HeadlessBackend, WindowBackend, WindowState};
pub use event::{WindowEvent, WindowResponse};
pub use ops::{register_window_ops, WindowHeap, OP_WINDOW_CLOSE, OP_WINDOW_OPEN, OP_WINDOW_SIZE};
