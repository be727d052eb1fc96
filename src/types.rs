//! Core types for spark-otp.
//!
//! These types define the foundation the buffer and controller build on.
//! They flow from the controller into the reactive view and define what a
//! presentation layer understands.

use std::fmt;

/// Number of slots in a code. Widgets are generic over the length, this is
/// the default every alias uses.
pub const CODE_LENGTH: usize = 6;

// =============================================================================
// Digit
// =============================================================================

const DIGIT_STR: [&str; 10] = ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"];

/// A single decimal digit `'0'..='9'`.
///
/// Slots hold `Option<Digit>`, so an out-of-alphabet character can never
/// reach the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digit(u8);

impl Digit {
    pub const ZERO: Self = Self(0);

    /// Parse an ASCII decimal digit. Anything else (including other Unicode
    /// digit sets) is rejected.
    pub const fn from_char(ch: char) -> Option<Self> {
        if ch.is_ascii_digit() {
            Some(Self(ch as u8 - b'0'))
        } else {
            None
        }
    }

    /// Create from a numeric value 0-9.
    pub const fn from_value(value: u8) -> Option<Self> {
        if value < 10 { Some(Self(value)) } else { None }
    }

    pub const fn value(self) -> u8 {
        self.0
    }

    pub const fn as_char(self) -> char {
        (b'0' + self.0) as char
    }

    /// The digit as a one-character string, as rendered in its slot.
    pub const fn as_str(self) -> &'static str {
        DIGIT_STR[self.0 as usize]
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<char> for Digit {
    type Error = char;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        Self::from_char(ch).ok_or(ch)
    }
}

// =============================================================================
// Focus Target
// =============================================================================

/// The logical element that should hold keyboard focus.
///
/// The core never touches concrete UI handles; a presentation maps each
/// target onto whatever focusable it renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FocusTarget {
    /// Slot at the given index.
    Slot(usize),
    /// The submit control.
    Submit,
}

impl FocusTarget {
    /// Slot index, if this target is a slot.
    pub fn slot(self) -> Option<usize> {
        match self {
            Self::Slot(index) => Some(index),
            Self::Submit => None,
        }
    }

    pub fn is_submit(self) -> bool {
        matches!(self, Self::Submit)
    }
}

impl Default for FocusTarget {
    fn default() -> Self {
        Self::Slot(0)
    }
}

impl fmt::Display for FocusTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Slot(index) => write!(f, "slot {}", index),
            Self::Submit => write!(f, "submit"),
        }
    }
}

// =============================================================================
// Changes (bitflags)
// =============================================================================

bitflags::bitflags! {
    /// Parts of the render state touched by one event.
    ///
    /// Combine with bitwise OR: `Changes::SLOTS | Changes::SUBMIT`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Changes: u8 {
        const NONE = 0;
        /// Slot contents changed.
        const SLOTS = 1 << 0;
        /// Focus moved (immediately or a deferred move was scheduled).
        const FOCUS = 1 << 1;
        /// Error flag flipped.
        const ERROR = 1 << 2;
        /// Submit-enabled flag flipped.
        const SUBMIT = 1 << 3;
        /// A caret placement was scheduled.
        const CARET = 1 << 4;
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_from_char() {
        assert_eq!(Digit::from_char('0'), Some(Digit::ZERO));
        assert_eq!(Digit::from_char('7').map(Digit::value), Some(7));
        assert_eq!(Digit::from_char('a'), None);
        assert_eq!(Digit::from_char(' '), None);
        // Arabic-Indic digit seven is not accepted
        assert_eq!(Digit::from_char('\u{0667}'), None);
    }

    #[test]
    fn test_digit_rendering() {
        for value in 0..10u8 {
            let digit = Digit::from_value(value).unwrap();
            assert_eq!(digit.as_str(), digit.to_string());
            assert_eq!(digit.as_char().to_digit(10), Some(value as u32));
        }
        assert_eq!(Digit::from_value(10), None);
    }

    #[test]
    fn test_digit_try_from() {
        assert_eq!(Digit::try_from('4').map(Digit::value), Ok(4));
        assert_eq!(Digit::try_from('x'), Err('x'));
    }

    #[test]
    fn test_focus_target() {
        assert_eq!(FocusTarget::default(), FocusTarget::Slot(0));
        assert_eq!(FocusTarget::Slot(3).slot(), Some(3));
        assert_eq!(FocusTarget::Submit.slot(), None);
        assert!(FocusTarget::Submit.is_submit());
        assert_eq!(FocusTarget::Slot(2).to_string(), "slot 2");
    }

    #[test]
    fn test_changes_combine() {
        let changes = Changes::SLOTS | Changes::SUBMIT;
        assert!(changes.contains(Changes::SLOTS));
        assert!(!changes.contains(Changes::ERROR));
        assert_eq!(Changes::default(), Changes::NONE);
        assert!(Changes::default().is_empty());
    }
}
