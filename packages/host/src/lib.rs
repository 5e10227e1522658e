//! # seam-host
//!
//! The host-facing half of the boundary between a managed, garbage-collected
//! host runtime and a native library. The native side runs an operation and
//! hands back one [`seam_word::BoundaryWord`]; this crate turns that word
//! into something the host runtime can act on without corrupting either
//! side's invariants.
//!
//! ## The result protocol
//!
//! Every native call produces exactly one boundary word, and that word is
//! decoded exactly once, immediately, by [`decode`]. Three outcomes exist:
//!
//! 1. **Ordinary value** (tag bit clear): the handle goes back to the host
//!    caller unchanged. No side effect.
//! 2. **Error payload** (tag bit set, payload is a host text object): a
//!    native-side failure. The text is surfaced verbatim as a host error at
//!    the boundary call site - no native frame information survives the
//!    crossing, so no deeper attribution is attempted.
//! 3. **Unwind token** (tag bit set, any other payload kind): a host-driven
//!    unwind - an interrupt, a condition, a long jump - was captured while
//!    control was inside the native frame. The token is forwarded to the
//!    host's unwind machinery untouched so cleanup handlers along the host
//!    call chain still run.
//!
//! Confusing cases 2 and 3 is the one unforgivable bug at this layer. An
//! unwind reported as an error skips host-side cleanup and desynchronizes
//! the host's unwind bookkeeping from the actual stack; an error reported as
//! an unwind swallows user-visible error text.
//!
//! Raising an error and resuming an unwind never return control to the
//! native frame. Rather than reproduce that with non-local jumps, both are
//! modeled as the `Err` arm of the call result ([`BoundaryExit`],
//! [`CallError`]) and settled at the outermost frame by [`complete`], which
//! routes each into the matching [`HostRuntime`] primitive.
//!
//! ## Dispatch
//!
//! Operations are exposed by name with a fixed argument count through a
//! [`CallTable`], built once at module load and then published - after
//! publish the table is sealed and nothing outside it is reachable. A
//! [`Bridge`] owns the heap, the native-side state, and the table, and
//! funnels every invocation through the decoder:
//!
//! ```
//! use seam_host::{encode, mock::MockHost, Bridge, CallTable, EntryPoint, HostHeap};
//! use seam_word::{BoundaryWord, HostRef};
//!
//! fn greet(heap: &mut MockHost, _ctx: &mut (), _args: &[HostRef]) -> BoundaryWord {
//!     let handle = heap.intern_text("hello");
//!     encode(heap, Ok(handle))
//! }
//!
//! let mut table = CallTable::new();
//! table.register(EntryPoint { name: "greet", arity: 0, func: greet }).unwrap();
//! table.publish().unwrap();
//!
//! let mut bridge = Bridge::new(MockHost::new(), (), table);
//! let handle = bridge.invoke("greet", &[]).unwrap();
//! assert_eq!(bridge.heap().text(handle).as_deref(), Some("hello"));
//! ```
//!
//! The [`mock`] module ships an in-memory host runtime so embedders can test
//! their native operations without a real host attached.

pub mod bridge;
pub mod decode;
pub mod error;
pub mod heap;
pub mod mock;
pub mod table;

pub use bridge::{complete, Bridge};
pub use decode::{decode, encode, BoundaryExit};
pub use error::{CallError, DispatchError, Result};
pub use heap::{HostHeap, HostRuntime, TaggedPayload, UnwindToken};
pub use table::{CallTable, EntryFn, EntryPoint};
