//! Digit buffer - the fixed-length slot sequence behind the widget.
//!
//! Slots are overwritten, never inserted or removed: the array length is the
//! code length for the buffer's whole life. Every write path validates
//! before it mutates.

use crate::code::{OtpCode, PastePayload};
use crate::error::SlotError;
use crate::types::{CODE_LENGTH, Digit};

/// Parse raw slot input against `^[0-9]?$`.
///
/// The empty string means "clear the slot".
pub fn parse_slot_input(raw: &str) -> Result<Option<Digit>, SlotError> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (None, _) => Ok(None),
        (Some(ch), None) => Digit::from_char(ch).map(Some).ok_or(SlotError::NotADigit(ch)),
        (Some(_), Some(_)) => Err(SlotError::TooLong {
            len: raw.chars().count(),
        }),
    }
}

/// Ordered sequence of `N` slots, each empty or one digit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitBuffer<const N: usize = CODE_LENGTH> {
    slots: [Option<Digit>; N],
}

impl<const N: usize> DigitBuffer<N> {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self { slots: [None; N] }
    }

    /// Number of slots. Always `N`.
    pub const fn len(&self) -> usize {
        N
    }

    /// True when no slot holds a digit.
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Write raw input into one slot.
    ///
    /// Accepts the empty string or exactly one ASCII digit. Anything else is
    /// rejected and the buffer is left untouched.
    pub fn set_slot(&mut self, index: usize, raw: &str) -> Result<(), SlotError> {
        let value = parse_slot_input(raw)?;
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(SlotError::OutOfRange { index, len: N })?;
        *slot = value;
        Ok(())
    }

    /// Replace every slot from a validated paste.
    pub fn set_all(&mut self, payload: PastePayload<N>) {
        for (slot, digit) in self.slots.iter_mut().zip(payload.into_digits()) {
            *slot = Some(digit);
        }
    }

    /// Empty one slot, returning what it held.
    ///
    /// Out-of-range indices are a no-op.
    pub fn clear_slot(&mut self, index: usize) -> Option<Digit> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    /// True iff every slot holds a digit. Recomputed on each call.
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    pub fn slot(&self, index: usize) -> Option<Digit> {
        self.slots.get(index).copied().flatten()
    }

    pub fn slots(&self) -> &[Option<Digit>; N] {
        &self.slots
    }

    /// Text a presentation renders for slot `index`: one digit or empty.
    pub fn slot_text(&self, index: usize) -> &'static str {
        self.slot(index).map(Digit::as_str).unwrap_or("")
    }

    /// The concatenated code, once complete.
    pub fn code(&self) -> Option<OtpCode> {
        if !self.is_complete() {
            return None;
        }
        let digits: Vec<Digit> = self.slots.iter().flatten().copied().collect();
        Some(OtpCode::from_digits(&digits))
    }
}

impl<const N: usize> Default for DigitBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SlotError;

    fn digit(ch: char) -> Digit {
        Digit::from_char(ch).unwrap()
    }

    fn filled(code: &str) -> DigitBuffer {
        let mut buffer: DigitBuffer = DigitBuffer::new();
        buffer.set_all(PastePayload::parse(code).unwrap());
        buffer
    }

    fn texts(buffer: &DigitBuffer) -> Vec<&'static str> {
        (0..buffer.len()).map(|i| buffer.slot_text(i)).collect()
    }

    #[test]
    fn test_new_buffer_is_empty() {
        let buffer: DigitBuffer = DigitBuffer::new();
        assert_eq!(buffer.len(), 6);
        assert!(buffer.is_empty());
        assert!(!buffer.is_complete());
        assert_eq!(buffer.code(), None);
    }

    #[test]
    fn test_parse_slot_input() {
        assert_eq!(parse_slot_input(""), Ok(None));
        assert_eq!(parse_slot_input("5"), Ok(Some(digit('5'))));
        assert_eq!(parse_slot_input("a"), Err(SlotError::NotADigit('a')));
        assert_eq!(parse_slot_input("12"), Err(SlotError::TooLong { len: 2 }));
    }

    #[test]
    fn test_set_slot_accepts_digit() {
        let mut buffer: DigitBuffer = DigitBuffer::new();
        assert!(buffer.set_slot(2, "7").is_ok());
        assert_eq!(buffer.slot(2), Some(digit('7')));
        assert_eq!(texts(&buffer), vec!["", "", "7", "", "", ""]);
    }

    #[test]
    fn test_set_slot_empty_clears() {
        let mut buffer = filled("123456");
        assert!(buffer.set_slot(0, "").is_ok());
        assert_eq!(buffer.slot(0), None);
        assert!(!buffer.is_complete());
    }

    #[test]
    fn test_set_slot_rejects_without_mutation() {
        let mut buffer = filled("123456");
        let before = buffer.clone();

        assert_eq!(buffer.set_slot(1, "x"), Err(SlotError::NotADigit('x')));
        assert_eq!(buffer.set_slot(1, "99"), Err(SlotError::TooLong { len: 2 }));
        assert_eq!(
            buffer.set_slot(6, "1"),
            Err(SlotError::OutOfRange { index: 6, len: 6 })
        );

        assert_eq!(buffer, before);
    }

    #[test]
    fn test_set_slot_idempotent() {
        let mut once: DigitBuffer = DigitBuffer::new();
        once.set_slot(3, "4").unwrap();
        let mut twice = once.clone();
        twice.set_slot(3, "4").unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_set_all_overwrites_every_slot() {
        let mut buffer: DigitBuffer = DigitBuffer::new();
        buffer.set_slot(0, "9").unwrap();
        buffer.set_all(PastePayload::parse("123456").unwrap());
        assert_eq!(texts(&buffer), vec!["1", "2", "3", "4", "5", "6"]);
        assert!(buffer.is_complete());
        assert_eq!(buffer.code().unwrap().as_str(), "123456");
    }

    #[test]
    fn test_clear_slot_keeps_length() {
        let mut buffer = filled("123456");
        assert_eq!(buffer.clear_slot(3), Some(digit('4')));
        assert_eq!(buffer.len(), 6);
        assert_eq!(texts(&buffer), vec!["1", "2", "3", "", "5", "6"]);

        // Clearing again is harmless
        assert_eq!(buffer.clear_slot(3), None);
        assert_eq!(buffer.clear_slot(42), None);
    }

    #[test]
    fn test_completion_recomputed() {
        let mut buffer: DigitBuffer = DigitBuffer::new();
        for (i, ch) in "12345".chars().enumerate() {
            buffer.set_slot(i, &ch.to_string()).unwrap();
            assert!(!buffer.is_complete());
        }
        buffer.set_slot(5, "6").unwrap();
        assert!(buffer.is_complete());
        buffer.clear_slot(0);
        assert!(!buffer.is_complete());
    }

    #[test]
    fn test_clearing_every_slot_empties() {
        let mut buffer = filled("654321");
        for i in 0..buffer.len() {
            buffer.set_slot(i, "").unwrap();
        }
        assert!(buffer.is_empty());
        assert_eq!(buffer.len(), 6);
    }

    #[test]
    fn test_other_length() {
        let mut buffer = DigitBuffer::<4>::new();
        assert_eq!(buffer.len(), 4);
        buffer.set_all(PastePayload::parse("4321").unwrap());
        assert_eq!(buffer.code().unwrap().as_str(), "4321");
        assert!(buffer.set_slot(4, "1").is_err());
    }
}
