//! Mock host runtime for boundary tests.
//!
//! An in-memory stand-in for the managed host: an index-based heap plus
//! recording implementations of the error and unwind primitives, so tests
//! can observe exactly what crossed the boundary. Use it to exercise native
//! operations without a real host runtime attached.

use seam_word::HostRef;

use crate::heap::{HostHeap, HostRuntime, UnwindToken};

/// Object kinds the mock heap can hold.
#[derive(Debug, Clone, PartialEq)]
pub enum MockValue {
    /// The unit object. Every heap starts with one at handle zero.
    Nil,
    /// A text object.
    Text(String),
    /// A vector of reals.
    Reals(Vec<f64>),
    /// An opaque unwind context.
    Token,
}

/// An in-memory host runtime.
///
/// Handles are heap indices shifted left one bit, so they are always
/// 2-aligned and the slot is recoverable from the raw value.
#[derive(Debug)]
pub struct MockHost {
    objects: Vec<MockValue>,
    raised: Vec<String>,
    resumed: Vec<HostRef>,
}

impl MockHost {
    /// Create a mock host holding only the unit object.
    pub fn new() -> Self {
        Self {
            objects: vec![MockValue::Nil],
            raised: Vec::new(),
            resumed: Vec::new(),
        }
    }

    /// Allocate an object and hand back its handle.
    pub fn alloc(&mut self, value: MockValue) -> HostRef {
        let idx = self.objects.len();
        self.objects.push(value);
        HostRef::new(idx << 1).expect("shifted index is 2-aligned")
    }

    /// The unit object every mock heap starts with.
    pub fn unit_ref(&self) -> HostRef {
        HostRef::new(0).expect("zero is 2-aligned")
    }

    /// The object behind a handle, if the handle is live.
    pub fn get(&self, r: HostRef) -> Option<&MockValue> {
        self.objects.get(r.raw() >> 1)
    }

    /// Simulate an interrupt delivered while a native call is active: mint
    /// the opaque token the host-side capture would hand to the native
    /// frame.
    pub fn begin_unwind(&mut self) -> UnwindToken {
        let handle = self.alloc(MockValue::Token);
        UnwindToken::new(handle)
    }

    /// Error messages raised so far, oldest first.
    pub fn raised(&self) -> &[String] {
        &self.raised
    }

    /// Handles of the unwind tokens resumed so far.
    pub fn resumed(&self) -> &[HostRef] {
        &self.resumed
    }
}

impl Default for MockHost {
    fn default() -> Self {
        Self::new()
    }
}

impl HostHeap for MockHost {
    fn text(&self, r: HostRef) -> Option<String> {
        match self.get(r) {
            Some(MockValue::Text(s)) => Some(s.clone()),
            _ => None,
        }
    }

    fn intern_text(&mut self, s: &str) -> HostRef {
        self.alloc(MockValue::Text(s.to_string()))
    }
}

impl HostRuntime for MockHost {
    fn raise(&mut self, message: &str) {
        self.raised.push(message.to_string());
    }

    fn resume_unwind(&mut self, token: UnwindToken) {
        self.resumed.push(token.into_ref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_are_aligned_and_recoverable() {
        let mut heap = MockHost::new();
        let a = heap.alloc(MockValue::Text("a".to_string()));
        let b = heap.alloc(MockValue::Reals(vec![1.0]));
        assert_eq!(a.raw() % 2, 0);
        assert_eq!(b.raw() % 2, 0);
        assert_eq!(heap.get(a), Some(&MockValue::Text("a".to_string())));
        assert_eq!(heap.get(b), Some(&MockValue::Reals(vec![1.0])));
    }

    #[test]
    fn unit_ref_is_always_live() {
        let heap = MockHost::new();
        assert_eq!(heap.get(heap.unit_ref()), Some(&MockValue::Nil));
    }

    #[test]
    fn text_probe_only_matches_text() {
        let mut heap = MockHost::new();
        let t = heap.intern_text("hi");
        let r = heap.alloc(MockValue::Reals(vec![2.0]));
        assert_eq!(heap.text(t).as_deref(), Some("hi"));
        assert_eq!(heap.text(r), None);
        assert_eq!(heap.text(heap.unit_ref()), None);
    }

    #[test]
    fn raise_and_resume_are_recorded() {
        let mut host = MockHost::new();
        host.raise("boom");
        let token = host.begin_unwind();
        let handle = token.into_ref();
        host.resume_unwind(UnwindToken::new(handle));
        assert_eq!(host.raised(), ["boom".to_string()]);
        assert_eq!(host.resumed(), [handle]);
    }
}
