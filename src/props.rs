//! Widget properties.
//!
//! Behavior knobs the controller reads, plus the fixed strings a
//! presentation renders around the slots.

use crate::types::FocusTarget;

/// Properties for an OTP entry widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtpProps {
    // =========================================================================
    // Text Display
    // =========================================================================

    /// Character shown in an empty slot.
    pub placeholder: char,

    /// Heading above the slots.
    pub heading: String,

    /// Prompt line under the heading.
    pub prompt: String,

    /// Message shown while the error flag is set.
    pub error_message: String,

    /// Label of the submit control.
    pub submit_label: String,

    // =========================================================================
    // Behavior
    // =========================================================================

    /// Focus target at mount. Out-of-range slots fall back to slot 0.
    pub initial_focus: FocusTarget,

    /// Move to the next slot after a digit is typed.
    pub advance_on_input: bool,
}

impl Default for OtpProps {
    fn default() -> Self {
        Self {
            placeholder: 'X',
            heading: "OTP Verification".to_string(),
            prompt: "Please enter the code we have sent you.".to_string(),
            error_message: "Please enter appropriate code".to_string(),
            submit_label: "Submit".to_string(),
            initial_focus: FocusTarget::Slot(0),
            advance_on_input: true,
        }
    }
}
