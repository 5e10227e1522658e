//! The tagged machine word that crosses the call boundary.

use crate::error::WordError;

/// The discriminant bit. A word with this bit set carries a payload that
/// must not be handed to the host caller as-is.
pub const TAG_MASK: usize = 1;

/// A handle to an object owned by the host runtime's heap.
///
/// The raw value must be 2-aligned so the low bit is free for the boundary
/// tag. Host object pointers satisfy this by construction; [`HostRef::new`]
/// rejects anything that does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HostRef(usize);

impl HostRef {
    /// Wrap a raw handle value, validating alignment.
    pub fn new(raw: usize) -> Result<Self, WordError> {
        if raw & TAG_MASK != 0 {
            return Err(WordError::Misaligned { raw });
        }
        Ok(Self(raw))
    }

    /// The raw handle value. Always 2-aligned.
    pub fn raw(&self) -> usize {
        self.0
    }
}

/// The single word a native call hands back to the host.
///
/// Deliberately neither `Copy` nor `Clone`: a boundary word exists only
/// between the native return and the decoder. [`BoundaryWord::split`]
/// consumes it, so it cannot be stored, aliased, or inspected twice.
#[derive(Debug, PartialEq, Eq)]
pub struct BoundaryWord(usize);

impl BoundaryWord {
    /// Encode an ordinary value. The tag bit stays clear.
    pub fn value(handle: HostRef) -> Self {
        Self(handle.0)
    }

    /// Encode a payload needing special handling - an error message or an
    /// unwind token. Which one is decided by the payload's runtime kind,
    /// not by the word.
    pub fn tagged(handle: HostRef) -> Self {
        Self(handle.0 | TAG_MASK)
    }

    /// Reinterpret a raw word received from the native side.
    pub fn from_raw(raw: usize) -> Self {
        Self(raw)
    }

    /// The raw word, for crossing to the other side.
    pub fn into_raw(self) -> usize {
        self.0
    }

    /// Strip the tag and classify. Consumes the word: a boundary word is
    /// inspected exactly once.
    pub fn split(self) -> WordKind {
        if self.0 & TAG_MASK == 0 {
            WordKind::Value(HostRef(self.0))
        } else {
            WordKind::Tagged(HostRef(self.0 & !TAG_MASK))
        }
    }
}

/// What the tag bit says about a word. Exactly one case holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WordKind {
    /// An ordinary host value; hand it to the caller unchanged.
    Value(HostRef),
    /// A payload needing special handling; the handle has the tag stripped.
    Tagged(HostRef),
}
