//! End-to-end demo of window operations crossing the call boundary.
//!
//! Builds a call table, publishes it, and drives the headless backend
//! through the bridge the way a host runtime would: every result comes
//! back as a single tagged word and is decoded before the "host" sees it.

use seam_host::mock::MockHost;
use seam_host::{encode, Bridge, BoundaryExit, CallTable, EntryPoint, HostHeap};
use seam_word::{BoundaryWord, HostRef};
use seam_winops::{
    register_window_ops, HeadlessBackend, OP_WINDOW_CLOSE, OP_WINDOW_OPEN, OP_WINDOW_SIZE,
};

// Stands in for an operation that was blocked when the host delivered an
// interrupt: the captured unwind context comes back as the boundary result.
fn window_wait(
    heap: &mut MockHost,
    _backend: &mut HeadlessBackend,
    _args: &[HostRef],
) -> BoundaryWord {
    let token = heap.begin_unwind();
    encode(heap, Err(BoundaryExit::Unwind(token)))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Module load: register the exposed operations, then publish. After
    // publish the table is sealed and nothing else is reachable.
    let mut table = CallTable::new();
    register_window_ops(&mut table)?;
    table.register(EntryPoint {
        name: "window_wait",
        arity: 0,
        func: window_wait,
    })?;
    table.publish()?;

    let mut bridge = Bridge::new(MockHost::new(), HeadlessBackend::new(), table);
    println!(
        "published operations: {:?}",
        bridge.table().names().collect::<Vec<_>>()
    );

    // A successful call: the value handle passes through the decoder
    // unchanged.
    let title = bridge.heap_mut().intern_text("seam demo");
    bridge.invoke(OP_WINDOW_OPEN, &[title])?;
    println!("opened: {:?}", bridge.ctx().window());

    let size = bridge.invoke(OP_WINDOW_SIZE, &[])?;
    println!("window size: {:?}", bridge.heap().get(size));

    // A native validation failure: the error text crosses the boundary as
    // a tagged text payload and is raised on the host side.
    let empty = bridge.heap_mut().intern_text("");
    match bridge.call(OP_WINDOW_OPEN, &[empty]) {
        Some(_) => println!("unexpected success"),
        None => println!("raised on host: {:?}", bridge.heap().raised()),
    }

    // An interrupt captured mid-call: the token is forwarded to the host's
    // unwind machinery, and no error text is ever produced for this path.
    match bridge.call("window_wait", &[]) {
        Some(_) => println!("unexpected value"),
        None => println!("unwind resumed on host: {:?}", bridge.heap().resumed()),
    }

    bridge.invoke(OP_WINDOW_CLOSE, &[])?;
    println!("closed: {:?}", bridge.ctx().window());

    Ok(())
}
