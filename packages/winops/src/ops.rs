//! Entry points wiring window operations into the call table.
//!
//! Every operation here is the mechanical fan-out shape: read arguments,
//! send the event to the backend, encode the outcome. The interesting part
//! of the boundary - deciding what the returned word means - stays in one
//! place, in `seam-host`.

use seam_host::mock::{MockHost, MockValue};
use seam_host::{encode, BoundaryExit, CallTable, DispatchError, EntryPoint, HostHeap};
use seam_word::{BoundaryWord, HostRef};

use crate::backend::WindowBackend;
use crate::event::{WindowEvent, WindowResponse};

/// Externally callable name of the open operation.
pub const OP_WINDOW_OPEN: &str = "window_open";
/// Externally callable name of the size query.
pub const OP_WINDOW_SIZE: &str = "window_size";
/// Externally callable name of the close operation.
pub const OP_WINDOW_CLOSE: &str = "window_close";

/// The extra marshaling window operations need from the host heap, beyond
/// what the result channel itself uses.
pub trait WindowHeap: HostHeap {
    /// The host's unit value, for operations with nothing to return.
    fn unit(&mut self) -> HostRef;

    /// Allocate a host value holding a width/height pair.
    fn intern_size(&mut self, width: f64, height: f64) -> HostRef;
}

impl WindowHeap for MockHost {
    fn unit(&mut self) -> HostRef {
        self.unit_ref()
    }

    fn intern_size(&mut self, width: f64, height: f64) -> HostRef {
        self.alloc(MockValue::Reals(vec![width, height]))
    }
}

/// Register the window operations. Called once at module load, before the
/// table is published.
pub fn register_window_ops<H, B>(table: &mut CallTable<H, B>) -> Result<(), DispatchError>
where
    H: WindowHeap,
    B: WindowBackend,
{
    table.register(EntryPoint {
        name: OP_WINDOW_OPEN,
        arity: 1,
        func: window_open::<H, B>,
    })?;
    table.register(EntryPoint {
        name: OP_WINDOW_SIZE,
        arity: 0,
        func: window_size::<H, B>,
    })?;
    table.register(EntryPoint {
        name: OP_WINDOW_CLOSE,
        arity: 0,
        func: window_close::<H, B>,
    })?;
    Ok(())
}

fn window_open<H: WindowHeap, B: WindowBackend>(
    heap: &mut H,
    backend: &mut B,
    args: &[HostRef],
) -> BoundaryWord {
    let result = open_impl(heap, backend, args);
    encode(heap, result)
}

fn window_size<H: WindowHeap, B: WindowBackend>(
    heap: &mut H,
    backend: &mut B,
    _args: &[HostRef],
) -> BoundaryWord {
    let result = size_impl(heap, backend);
    encode(heap, result)
}

fn window_close<H: WindowHeap, B: WindowBackend>(
    heap: &mut H,
    backend: &mut B,
    _args: &[HostRef],
) -> BoundaryWord {
    let result = close_impl(heap, backend);
    encode(heap, result)
}

fn open_impl<H: WindowHeap, B: WindowBackend>(
    heap: &mut H,
    backend: &mut B,
    args: &[HostRef],
) -> Result<HostRef, BoundaryExit> {
    let title = args
        .first()
        .and_then(|r| heap.text(*r))
        .ok_or_else(|| BoundaryExit::Raise("expected a text title".to_string()))?;
    backend
        .handle_event(WindowEvent::NewWindow { title })
        .map_err(|e| BoundaryExit::Raise(e.to_string()))?;
    Ok(heap.unit())
}

fn size_impl<H: WindowHeap, B: WindowBackend>(
    heap: &mut H,
    backend: &mut B,
) -> Result<HostRef, BoundaryExit> {
    let response = backend
        .handle_event(WindowEvent::GetWindowSize)
        .map_err(|e| BoundaryExit::Raise(e.to_string()))?;
    match response {
        Some(WindowResponse::WindowSize { width, height }) => Ok(heap.intern_size(width, height)),
        other => Err(BoundaryExit::Raise(format!("unexpected response: {other:?}"))),
    }
}

fn close_impl<H: WindowHeap, B: WindowBackend>(
    heap: &mut H,
    backend: &mut B,
) -> Result<HostRef, BoundaryExit> {
    backend
        .handle_event(WindowEvent::CloseWindow)
        .map_err(|e| BoundaryExit::Raise(e.to_string()))?;
    Ok(heap.unit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::HeadlessBackend;
    use seam_host::{Bridge, CallError};

    fn bridge() -> Bridge<MockHost, HeadlessBackend> {
        let mut table = CallTable::new();
        register_window_ops(&mut table).unwrap();
        table.publish().unwrap();
        Bridge::new(MockHost::new(), HeadlessBackend::new(), table)
    }

    #[test]
    fn registered_arities_match_the_calling_convention() {
        // The backend rides in the bridge as native-side state, so no
        // receiver handle is part of any operation's argument list.
        let bridge = bridge();
        let table = bridge.table();
        assert_eq!(table.lookup(OP_WINDOW_OPEN).unwrap().arity, 1);
        assert_eq!(table.lookup(OP_WINDOW_SIZE).unwrap().arity, 0);
        assert_eq!(table.lookup(OP_WINDOW_CLOSE).unwrap().arity, 0);
    }

    #[test]
    fn open_then_query_size() {
        let mut bridge = bridge();
        let title = bridge.heap_mut().intern_text("main");

        let unit = bridge.invoke(OP_WINDOW_OPEN, &[title]).unwrap();
        assert_eq!(unit, bridge.heap().unit_ref());
        assert_eq!(bridge.ctx().window().unwrap().title, "main");

        let size = bridge.invoke(OP_WINDOW_SIZE, &[]).unwrap();
        assert_eq!(
            bridge.heap().get(size),
            Some(&MockValue::Reals(vec![800.0, 600.0]))
        );
    }

    #[test]
    fn empty_title_surfaces_the_exact_validation_message() {
        let mut bridge = bridge();
        let title = bridge.heap_mut().intern_text("");
        assert_eq!(
            bridge.invoke(OP_WINDOW_OPEN, &[title]).unwrap_err(),
            CallError::Native("invalid title: empty string".to_string())
        );
    }

    #[test]
    fn non_text_title_is_rejected() {
        let mut bridge = bridge();
        let not_text = bridge.heap_mut().alloc(MockValue::Reals(vec![3.0]));
        assert_eq!(
            bridge.invoke(OP_WINDOW_OPEN, &[not_text]).unwrap_err(),
            CallError::Native("expected a text title".to_string())
        );
    }

    #[test]
    fn close_returns_unit_and_clears_the_window() {
        let mut bridge = bridge();
        let title = bridge.heap_mut().intern_text("main");
        bridge.invoke(OP_WINDOW_OPEN, &[title]).unwrap();

        let unit = bridge.invoke(OP_WINDOW_CLOSE, &[]).unwrap();
        assert_eq!(unit, bridge.heap().unit_ref());
        assert!(bridge.ctx().window().is_none());
    }

    // Simulates a host interrupt captured while a window call was active:
    // the unwind context rides back as the boundary result.
    fn interrupted_wait(
        heap: &mut MockHost,
        _backend: &mut HeadlessBackend,
        _args: &[HostRef],
    ) -> BoundaryWord {
        let token = heap.begin_unwind();
        encode(heap, Err(BoundaryExit::Unwind(token)))
    }

    #[test]
    fn unwind_crossing_a_window_call_is_resumed_not_raised() {
        let mut table = CallTable::new();
        register_window_ops(&mut table).unwrap();
        table
            .register(EntryPoint {
                name: "window_wait",
                arity: 0,
                func: interrupted_wait,
            })
            .unwrap();
        table.publish().unwrap();
        let mut bridge = Bridge::new(MockHost::new(), HeadlessBackend::new(), table);

        assert_eq!(bridge.call("window_wait", &[]), None);
        assert_eq!(bridge.heap().resumed().len(), 1);
        assert!(bridge.heap().raised().is_empty());
    }

    #[test]
    fn size_without_a_window_is_zero() {
        let mut bridge = bridge();
        let size = bridge.invoke(OP_WINDOW_SIZE, &[]).unwrap();
        assert_eq!(
            bridge.heap().get(size),
            Some(&MockValue::Reals(vec![0.0, 0.0]))
        );
    }
}
