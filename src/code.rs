//! Validated code shapes.
//!
//! `PastePayload` is the only input `DigitBuffer::set_all` accepts, so a
//! paste is validated as a whole before anything is written. `OtpCode` is
//! what a completed buffer hands to a submitter.

use std::fmt;

use crate::error::PasteError;
use crate::types::{CODE_LENGTH, Digit};

// =============================================================================
// Paste Payload
// =============================================================================

/// Exactly `N` digits taken from one paste action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PastePayload<const N: usize = CODE_LENGTH> {
    digits: [Digit; N],
}

impl<const N: usize> PastePayload<N> {
    /// Validate pasted text against `^[0-9]{N}$`.
    ///
    /// No trimming and no digit extraction: surrounding whitespace, a
    /// trailing newline, or separators all reject the payload.
    pub fn parse(text: &str) -> Result<Self, PasteError> {
        let found = text.chars().count();
        if found != N {
            return Err(PasteError::WrongLength { expected: N, found });
        }

        let mut digits = [Digit::ZERO; N];
        for (position, (slot, ch)) in digits.iter_mut().zip(text.chars()).enumerate() {
            *slot = Digit::from_char(ch).ok_or(PasteError::NotADigit { position, found: ch })?;
        }

        Ok(Self { digits })
    }

    pub fn digits(&self) -> &[Digit; N] {
        &self.digits
    }

    pub fn into_digits(self) -> [Digit; N] {
        self.digits
    }
}

// =============================================================================
// OTP Code
// =============================================================================

/// A complete code, most-significant digit first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OtpCode(String);

impl OtpCode {
    pub fn from_digits(digits: &[Digit]) -> Self {
        Self(digits.iter().map(|d| d.as_char()).collect())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl<const N: usize> From<PastePayload<N>> for OtpCode {
    fn from(payload: PastePayload<N>) -> Self {
        Self::from_digits(payload.digits())
    }
}

impl AsRef<str> for OtpCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OtpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_payload() {
        let payload = PastePayload::<6>::parse("123456").unwrap();
        let values: Vec<u8> = payload.digits().iter().map(|d| d.value()).collect();
        assert_eq!(values, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(OtpCode::from(payload).as_str(), "123456");
    }

    #[test]
    fn test_parse_leading_zeros_kept() {
        let payload = PastePayload::<6>::parse("000120").unwrap();
        assert_eq!(OtpCode::from(payload).as_str(), "000120");
    }

    #[test]
    fn test_parse_wrong_length() {
        assert_eq!(
            PastePayload::<6>::parse("12345"),
            Err(PasteError::WrongLength { expected: 6, found: 5 })
        );
        assert_eq!(
            PastePayload::<6>::parse("1234567"),
            Err(PasteError::WrongLength { expected: 6, found: 7 })
        );
        assert_eq!(
            PastePayload::<6>::parse(""),
            Err(PasteError::WrongLength { expected: 6, found: 0 })
        );
    }

    #[test]
    fn test_parse_rejects_non_digits() {
        assert_eq!(
            PastePayload::<6>::parse("12a456"),
            Err(PasteError::NotADigit { position: 2, found: 'a' })
        );
        assert_eq!(
            PastePayload::<6>::parse("12 456"),
            Err(PasteError::NotADigit { position: 2, found: ' ' })
        );
    }

    #[test]
    fn test_parse_does_not_trim() {
        assert!(PastePayload::<6>::parse(" 123456").is_err());
        assert!(PastePayload::<6>::parse("123456\n").is_err());
        assert!(PastePayload::<6>::parse("123-456").is_err());
    }

    #[test]
    fn test_parse_counts_characters_not_bytes() {
        // Six characters, one of them multi-byte: wrong alphabet, right length
        assert_eq!(
            PastePayload::<6>::parse("12345\u{0661}"),
            Err(PasteError::NotADigit { position: 5, found: '\u{0661}' })
        );
    }

    #[test]
    fn test_other_lengths() {
        assert!(PastePayload::<4>::parse("1234").is_ok());
        assert!(PastePayload::<4>::parse("123456").is_err());
    }

    #[test]
    fn test_code_display() {
        let code = OtpCode::from_digits(&[Digit::ZERO, Digit::from_char('9').unwrap()]);
        assert_eq!(code.to_string(), "09");
        assert_eq!(code.len(), 2);
        assert_eq!(code.as_ref(), "09");
        assert_eq!(code.into_string(), "09".to_string());
    }
}
