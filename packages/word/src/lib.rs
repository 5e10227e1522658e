//! # seam-word
//!
//! The lowest layer of the call boundary: the single machine word a native
//! call hands back to the managed host runtime.
//!
//! The low bit of that word is the discriminant. Clear means the word is an
//! ordinary host value and goes to the caller unchanged. Set means the rest
//! of the word is a handle to a payload that needs special handling before
//! the host caller may proceed - an error message, or a token for a host
//! unwind that was already in progress when control entered the native frame.
//!
//! This crate knows nothing about the host runtime's object model. It only
//! guarantees the bit layout: a [`HostRef`] is a 2-aligned handle, a
//! [`BoundaryWord`] is a handle plus the tag bit, and [`BoundaryWord::split`]
//! consumes the word exactly once. What a tagged payload *means* is decided
//! one layer up, by the payload's own runtime kind.

mod error;
mod word;

pub use error::WordError;
pub use word::{BoundaryWord, HostRef, WordKind, TAG_MASK};
