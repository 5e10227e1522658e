//! Error type for the word layer.

use thiserror::Error;

/// Errors at the word layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum WordError {
    /// The raw value already has the tag bit set, so it cannot cross the
    /// boundary without being mistaken for a tagged payload.
    #[error("host handle {raw:#x} is not 2-aligned")]
    Misaligned { raw: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn misaligned_display() {
        let e = WordError::Misaligned { raw: 0x2b };
        assert_eq!(format!("{}", e), "host handle 0x2b is not 2-aligned");
    }
}
