//! Keyboard Module - Key event types and slot key classification
//!
//! Keys arrive named the way a host input surface names them ("Backspace",
//! "ArrowLeft", "Tab", ...). The controller only reacts to a handful of
//! them; everything else is left to the host's default handling.
//!
//! # Example
//!
//! ```ignore
//! use spark_otp::state::{KeyboardEvent, Modifiers, SlotKey};
//!
//! let event = KeyboardEvent::with_modifiers("Tab", Modifiers::shift());
//! assert_eq!(SlotKey::classify(&event), SlotKey::ShiftTab);
//! ```

// =============================================================================
// TYPES
// =============================================================================

/// Keyboard modifier state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Create empty modifiers
    pub fn none() -> Self {
        Self::default()
    }

    /// Create modifiers with ctrl
    pub fn ctrl() -> Self {
        Self { ctrl: true, ..Self::default() }
    }

    /// Create modifiers with alt
    pub fn alt() -> Self {
        Self { alt: true, ..Self::default() }
    }

    /// Create modifiers with shift
    pub fn shift() -> Self {
        Self { shift: true, ..Self::default() }
    }

    /// True if a command modifier (ctrl/alt/meta) is held.
    pub fn has_command(&self) -> bool {
        self.ctrl || self.alt || self.meta
    }
}

/// Key event state (press, repeat, release)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeyState {
    #[default]
    Press,
    Repeat,
    Release,
}

/// Keyboard event
#[derive(Clone, Debug, PartialEq)]
pub struct KeyboardEvent {
    /// The key that was pressed (e.g., "1", "Backspace", "ArrowLeft")
    pub key: String,
    /// Modifier keys state
    pub modifiers: Modifiers,
    /// Press/repeat/release state
    pub state: KeyState,
}

impl KeyboardEvent {
    /// Create a simple key press event
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: Modifiers::default(),
            state: KeyState::Press,
        }
    }

    /// Create a key press with modifiers
    pub fn with_modifiers(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
            state: KeyState::Press,
        }
    }

    /// Same key, different state
    pub fn with_state(mut self, state: KeyState) -> Self {
        self.state = state;
        self
    }

    /// Check if this is a press event
    pub fn is_press(&self) -> bool {
        self.state == KeyState::Press
    }

    /// Press and auto-repeat both act; release never does.
    pub fn is_actionable(&self) -> bool {
        self.state != KeyState::Release
    }
}

// =============================================================================
// SLOT KEYS
// =============================================================================

/// Keys a slot reacts to on key-down.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SlotKey {
    /// Backspace or Delete: empty the slot.
    Clear,
    /// ArrowLeft: previous slot.
    Left,
    /// ArrowRight: next slot.
    Right,
    /// Shift+Tab: previous slot, suppressing the host's traversal.
    ShiftTab,
    /// Anything else. Left to the host.
    Other,
}

impl SlotKey {
    /// Classify a key event. Checked in order: clear, shift+tab, arrows.
    pub fn classify(event: &KeyboardEvent) -> Self {
        match event.key.as_str() {
            "Backspace" | "Delete" => Self::Clear,
            "Tab" if event.modifiers.shift => Self::ShiftTab,
            "ArrowLeft" => Self::Left,
            "ArrowRight" => Self::Right,
            _ => Self::Other,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modifiers() {
        assert!(!Modifiers::none().shift);
        assert!(Modifiers::shift().shift);
        assert!(Modifiers::ctrl().has_command());
        assert!(Modifiers::alt().has_command());
        assert!(!Modifiers::shift().has_command());
    }

    #[test]
    fn test_event_states() {
        let press = KeyboardEvent::new("1");
        assert!(press.is_press());
        assert!(press.is_actionable());

        let repeat = KeyboardEvent::new("1").with_state(KeyState::Repeat);
        assert!(!repeat.is_press());
        assert!(repeat.is_actionable());

        let release = KeyboardEvent::new("1").with_state(KeyState::Release);
        assert!(!release.is_actionable());
    }

    #[test]
    fn test_classify_clear_keys() {
        assert_eq!(SlotKey::classify(&KeyboardEvent::new("Backspace")), SlotKey::Clear);
        assert_eq!(SlotKey::classify(&KeyboardEvent::new("Delete")), SlotKey::Clear);
        // Shift does not change clear keys
        assert_eq!(
            SlotKey::classify(&KeyboardEvent::with_modifiers("Backspace", Modifiers::shift())),
            SlotKey::Clear
        );
    }

    #[test]
    fn test_classify_navigation() {
        assert_eq!(SlotKey::classify(&KeyboardEvent::new("ArrowLeft")), SlotKey::Left);
        assert_eq!(SlotKey::classify(&KeyboardEvent::new("ArrowRight")), SlotKey::Right);
        assert_eq!(
            SlotKey::classify(&KeyboardEvent::with_modifiers("Tab", Modifiers::shift())),
            SlotKey::ShiftTab
        );
    }

    #[test]
    fn test_classify_other() {
        assert_eq!(SlotKey::classify(&KeyboardEvent::new("Tab")), SlotKey::Other);
        assert_eq!(SlotKey::classify(&KeyboardEvent::new("ArrowUp")), SlotKey::Other);
        assert_eq!(SlotKey::classify(&KeyboardEvent::new("5")), SlotKey::Other);
        assert_eq!(SlotKey::classify(&KeyboardEvent::new("Enter")), SlotKey::Other);
    }
}
