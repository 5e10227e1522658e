//! The boundary result decoder: the single funnel every native call's
//! return value passes through before the host caller sees it.

use seam_word::{BoundaryWord, HostRef, WordKind};

use crate::heap::{HostHeap, TaggedPayload, UnwindToken};

/// A non-value outcome of a native call.
///
/// On the host side, raising an error and resuming an unwind both transfer
/// control and never hand a value back to the native frame. Here they are
/// the `Err` arm of the call result, so `?` propagates them to the glue that
/// owns the host primitives instead of relying on non-local jumps.
#[derive(Debug, PartialEq)]
pub enum BoundaryExit {
    /// A native-side failure. The message surfaces verbatim as a host error
    /// at the boundary call site.
    Raise(String),
    /// A host-driven unwind crossed the native frame. It must be forwarded
    /// to the host's unwind machinery untouched; treating it as an error
    /// would skip host-side cleanup handlers.
    Unwind(UnwindToken),
}

/// Decode one boundary result.
///
/// Classification is total and pure: the tag bit picks value vs. payload,
/// and the payload's runtime kind picks message vs. unwind token. The
/// decoder allocates nothing, frees nothing, and has no failure mode of its
/// own.
pub fn decode<H: HostHeap>(word: BoundaryWord, heap: &H) -> Result<HostRef, BoundaryExit> {
    match word.split() {
        WordKind::Value(handle) => Ok(handle),
        WordKind::Tagged(payload) => match heap.classify(payload) {
            TaggedPayload::Message(message) => {
                tracing::debug!(%message, "native call failed");
                Err(BoundaryExit::Raise(message))
            }
            TaggedPayload::Token(handle) => {
                tracing::debug!("forwarding host unwind through native frame");
                Err(BoundaryExit::Unwind(UnwindToken::new(handle)))
            }
        },
    }
}

/// Encode a native call's outcome as a boundary result.
///
/// The producing side of the protocol; every entry point returns through
/// here. `decode(encode(x))` is the identity for all three cases.
pub fn encode<H: HostHeap>(heap: &mut H, result: Result<HostRef, BoundaryExit>) -> BoundaryWord {
    match result {
        Ok(handle) => BoundaryWord::value(handle),
        Err(BoundaryExit::Raise(message)) => BoundaryWord::tagged(heap.intern_text(&message)),
        Err(BoundaryExit::Unwind(token)) => BoundaryWord::tagged(token.into_ref()),
    }
}
