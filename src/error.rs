//! Rejection reasons for buffer writes and paste payloads.
//!
//! None of these are fatal. The controller turns a `SlotError` into a silent
//! no-op and a `PasteError` into the visible error flag.

use thiserror::Error;

/// Why a single-slot write was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SlotError {
    #[error("slot {index} is out of range for a {len}-slot code")]
    OutOfRange { index: usize, len: usize },

    #[error("slot input must be at most one character, got {len}")]
    TooLong { len: usize },

    #[error("slot input {0:?} is not a decimal digit")]
    NotADigit(char),
}

/// Why a paste payload was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasteError {
    #[error("pasted code must be exactly {expected} digits, got {found} characters")]
    WrongLength { expected: usize, found: usize },

    #[error("pasted character {found:?} at position {position} is not a decimal digit")]
    NotADigit { position: usize, found: char },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SlotError::OutOfRange { index: 9, len: 6 }.to_string(),
            "slot 9 is out of range for a 6-slot code"
        );
        assert_eq!(
            PasteError::WrongLength { expected: 6, found: 5 }.to_string(),
            "pasted code must be exactly 6 digits, got 5 characters"
        );
        assert_eq!(
            PasteError::NotADigit { position: 2, found: 'a' }.to_string(),
            "pasted character 'a' at position 2 is not a decimal digit"
        );
    }
}
