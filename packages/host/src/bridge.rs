//! Dispatch: invoke a native operation by name and funnel its boundary
//! result through the decoder.

use seam_word::HostRef;

use crate::decode::decode;
use crate::error::{CallError, DispatchError, Result};
use crate::heap::{HostHeap, HostRuntime};
use crate::table::{CallTable, EntryPoint};

/// The call boundary between the host runtime and one native module.
///
/// Owns the host heap, the native-side state, and the published call table.
/// Every exposed operation is invoked through [`Bridge::invoke`], so every
/// boundary result passes through the decoder exactly once, immediately
/// after the native call returns.
pub struct Bridge<H, C> {
    heap: H,
    ctx: C,
    table: CallTable<H, C>,
}

impl<H: HostHeap, C> Bridge<H, C> {
    /// Create a bridge. The table is expected to be published already;
    /// invoking against an unpublished table fails.
    pub fn new(heap: H, ctx: C, table: CallTable<H, C>) -> Self {
        Self { heap, ctx, table }
    }

    /// Invoke an exposed operation by name.
    ///
    /// Looks up the entry, checks the argument count against the registered
    /// arity, runs the native function, and decodes its boundary result.
    /// The call is a single-frame handshake: the native function runs to
    /// completion before this returns.
    pub fn invoke(&mut self, name: &str, args: &[HostRef]) -> Result<HostRef> {
        let EntryPoint { name, arity, func } = *self.table.lookup(name).map_err(|e| {
            tracing::warn!(name, %e, "dispatch failed");
            e
        })?;
        if args.len() != arity {
            return Err(DispatchError::Arity {
                name,
                expected: arity,
                got: args.len(),
            }
            .into());
        }

        let word = func(&mut self.heap, &mut self.ctx, args);
        decode(word, &self.heap).map_err(CallError::from)
    }

    /// The host heap.
    pub fn heap(&self) -> &H {
        &self.heap
    }

    /// Mutable access to the host heap.
    pub fn heap_mut(&mut self) -> &mut H {
        &mut self.heap
    }

    /// The native-side state.
    pub fn ctx(&self) -> &C {
        &self.ctx
    }

    /// Mutable access to the native-side state.
    pub fn ctx_mut(&mut self) -> &mut C {
        &mut self.ctx
    }

    /// The call table.
    pub fn table(&self) -> &CallTable<H, C> {
        &self.table
    }
}

impl<H: HostRuntime, C> Bridge<H, C> {
    /// Invoke an operation and settle the outcome against the host runtime
    /// in one step. Returns the value handle for the success case; the
    /// non-value cases go through [`complete`] and yield nothing.
    pub fn call(&mut self, name: &str, args: &[HostRef]) -> Option<HostRef> {
        let result = self.invoke(name, args);
        complete(&mut self.heap, result)
    }
}

/// Settle a call outcome against the host runtime.
///
/// This is the outermost glue of the boundary: values pass through, native
/// failures (and dispatch failures) are raised as host errors, unwinds are
/// resumed. The two non-value actions transfer control inside the host and
/// yield no value here.
pub fn complete<R: HostRuntime>(rt: &mut R, result: Result<HostRef>) -> Option<HostRef> {
    match result {
        Ok(handle) => Some(handle),
        Err(CallError::Native(message)) => {
            rt.raise(&message);
            None
        }
        Err(CallError::Unwind(token)) => {
            rt.resume_unwind(token);
            None
        }
        Err(CallError::Dispatch(e)) => {
            rt.raise(&e.to_string());
            None
        }
    }
}
