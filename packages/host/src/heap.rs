//! The slice of the host runtime's object model the boundary depends on.

use seam_word::HostRef;

/// Runtime classification of a tagged payload.
#[derive(Debug, Clone, PartialEq)]
pub enum TaggedPayload {
    /// A host text object; its contents are an error message.
    Message(String),
    /// Any other object kind: an opaque token for an in-progress unwind.
    Token(HostRef),
}

/// What the boundary needs to know about the host heap.
///
/// Deliberately narrow: the result channel reads and creates host text
/// objects, and nothing else. Payload shapes beyond text are the host's
/// business.
pub trait HostHeap {
    /// The contents of `r`, if `r` refers to a host text object.
    fn text(&self, r: HostRef) -> Option<String>;

    /// Allocate a host text object. The returned handle is owned by the
    /// host's normal memory management, like any other handle.
    fn intern_text(&mut self, s: &str) -> HostRef;

    /// Classify a tagged payload by its runtime kind. Total: every handle
    /// is either a text object or an unwind token.
    fn classify(&self, r: HostRef) -> TaggedPayload {
        match self.text(r) {
            Some(message) => TaggedPayload::Message(message),
            None => TaggedPayload::Token(r),
        }
    }
}

/// An in-progress host-runtime unwind, captured while control was inside a
/// native frame.
///
/// Opaque on purpose: the token is forwarded, never interpreted. Whether an
/// interrupt, a condition, or a restart started the unwind is invisible at
/// this layer. The wrapped handle must not refer to a host text object, or
/// the decoder would mistake it for an error message.
#[derive(Debug, PartialEq, Eq)]
pub struct UnwindToken(HostRef);

impl UnwindToken {
    /// Wrap a captured unwind context handle.
    pub fn new(handle: HostRef) -> Self {
        Self(handle)
    }

    /// Surrender the handle, for re-encoding or for the unwind machinery.
    /// The machinery owns its lifecycle from that point.
    pub fn into_ref(self) -> HostRef {
        self.0
    }
}

/// The two host primitives the decoder's non-value cases route into.
///
/// Both transfer control on the host side; neither hands a value back to the
/// frame that invoked the native operation.
pub trait HostRuntime: HostHeap {
    /// Raise a host error at the boundary call site, with `message` as its
    /// display text.
    fn raise(&mut self, message: &str);

    /// Resume an unwind that was already in progress when control entered
    /// the native frame, so host-side cleanup handlers still run.
    fn resume_unwind(&mut self, token: UnwindToken);
}
