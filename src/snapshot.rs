//! Render input - everything a presentation needs to draw the widget.

use crate::types::{CODE_LENGTH, Digit, FocusTarget};

/// Complete widget state at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpSnapshot<const N: usize = CODE_LENGTH> {
    pub slots: [Option<Digit>; N],
    pub submit_enabled: bool,
    pub error_visible: bool,
    pub focus: FocusTarget,
}

impl<const N: usize> OtpSnapshot<N> {
    /// Text for slot `index`: one digit or empty.
    pub fn slot_text(&self, index: usize) -> &'static str {
        self.slots
            .get(index)
            .copied()
            .flatten()
            .map(Digit::as_str)
            .unwrap_or("")
    }

    /// All slot texts in order.
    pub fn slot_texts(&self) -> Vec<&'static str> {
        (0..N).map(|i| self.slot_text(i)).collect()
    }

    /// True if `target` holds focus.
    pub fn is_focused(&self, target: FocusTarget) -> bool {
        self.focus == target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_texts() {
        let mut slots = [None; 6];
        slots[1] = Digit::from_char('4');
        let snapshot = OtpSnapshot {
            slots,
            submit_enabled: false,
            error_visible: false,
            focus: FocusTarget::Slot(1),
        };

        assert_eq!(snapshot.slot_texts(), vec!["", "4", "", "", "", ""]);
        assert_eq!(snapshot.slot_text(99), "");
        assert!(snapshot.is_focused(FocusTarget::Slot(1)));
        assert!(!snapshot.is_focused(FocusTarget::Submit));
    }
}
