//! Reactive View - Signals a presentation binds to.
//!
//! The controller publishes its state into these signals after every event.
//! Derived flags are pure functions of the slot signal:
//!
//! ```text
//! controller event → publish(snapshot) → slots/error/focus signals → submitEnabledDerived
//! ```

use spark_signals::{Derived, Signal, derived, signal};

use crate::code::OtpCode;
use crate::snapshot::OtpSnapshot;
use crate::types::{CODE_LENGTH, Digit, FocusTarget};

/// Reactive state of one widget.
///
/// Cloning shares the underlying signals.
#[derive(Clone)]
pub struct OtpView<const N: usize = CODE_LENGTH> {
    slots: Signal<[Option<Digit>; N]>,
    error_visible: Signal<bool>,
    focus: Signal<FocusTarget>,
}

impl<const N: usize> OtpView<N> {
    /// Create a view in the mount state: empty slots, no error.
    pub fn new(focus: FocusTarget) -> Self {
        Self {
            slots: signal([None; N]),
            error_visible: signal(false),
            focus: signal(focus),
        }
    }

    /// Create a view mirroring an existing snapshot.
    pub fn from_snapshot(snapshot: &OtpSnapshot<N>) -> Self {
        Self {
            slots: signal(snapshot.slots),
            error_visible: signal(snapshot.error_visible),
            focus: signal(snapshot.focus),
        }
    }

    /// Push a snapshot into the signals.
    ///
    /// Only signals whose value differs are written, so dependents re-run
    /// only for real changes.
    pub fn publish(&self, snapshot: &OtpSnapshot<N>) {
        if self.slots.get() != snapshot.slots {
            self.slots.set(snapshot.slots);
        }
        if self.error_visible.get() != snapshot.error_visible {
            self.error_visible.set(snapshot.error_visible);
        }
        if self.focus.get() != snapshot.focus {
            self.focus.set(snapshot.focus);
        }
    }

    pub fn slots_signal(&self) -> Signal<[Option<Digit>; N]> {
        self.slots.clone()
    }

    pub fn error_visible_signal(&self) -> Signal<bool> {
        self.error_visible.clone()
    }

    pub fn focus_signal(&self) -> Signal<FocusTarget> {
        self.focus.clone()
    }

    pub fn slots(&self) -> [Option<Digit>; N] {
        self.slots.get()
    }

    pub fn error_visible(&self) -> bool {
        self.error_visible.get()
    }

    pub fn focus(&self) -> FocusTarget {
        self.focus.get()
    }
}

/// Create the submit-enabled derived.
///
/// Re-runs whenever the slots signal changes; true iff every slot holds a
/// digit.
pub fn create_submit_enabled_derived<const N: usize>(
    view: &OtpView<N>,
) -> Derived<bool> {
    let slots = view.slots_signal();

    derived(move || slots.get().iter().all(Option::is_some))
}

/// Create the completed-code derived: `Some(code)` once every slot is filled.
pub fn create_code_derived<const N: usize>(
    view: &OtpView<N>,
) -> Derived<Option<OtpCode>> {
    let slots = view.slots_signal();

    derived(move || {
        let slots = slots.get();
        let digits: Option<Vec<Digit>> = slots.iter().copied().collect();
        digits.map(|d| OtpCode::from_digits(&d))
    })
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(code: &str, error_visible: bool, focus: FocusTarget) -> OtpSnapshot {
        let mut slots = [None; CODE_LENGTH];
        for (slot, ch) in slots.iter_mut().zip(code.chars()) {
            *slot = Digit::from_char(ch);
        }
        OtpSnapshot {
            slots,
            submit_enabled: slots.iter().all(Option::is_some),
            error_visible,
            focus,
        }
    }

    #[test]
    fn test_view_initial_state() {
        let view: OtpView = OtpView::new(FocusTarget::Slot(0));
        assert_eq!(view.slots(), [None; CODE_LENGTH]);
        assert!(!view.error_visible());
        assert_eq!(view.focus(), FocusTarget::Slot(0));
    }

    #[test]
    fn test_publish_updates_signals() {
        let view: OtpView = OtpView::new(FocusTarget::Slot(0));
        view.publish(&snapshot("12", true, FocusTarget::Slot(2)));

        assert_eq!(view.slots()[0], Digit::from_char('1'));
        assert_eq!(view.slots()[2], None);
        assert!(view.error_visible());
        assert_eq!(view.focus(), FocusTarget::Slot(2));
    }

    #[test]
    fn test_submit_enabled_derived_reacts_to_slots() {
        let view: OtpView = OtpView::new(FocusTarget::Slot(0));
        let submit_enabled = create_submit_enabled_derived(&view);

        assert!(!submit_enabled.get());

        view.publish(&snapshot("123456", false, FocusTarget::Slot(5)));
        assert!(submit_enabled.get());

        view.publish(&snapshot("12345", false, FocusTarget::Slot(5)));
        assert!(!submit_enabled.get());
    }

    #[test]
    fn test_code_derived() {
        let view: OtpView = OtpView::new(FocusTarget::Slot(0));
        let code = create_code_derived(&view);

        assert_eq!(code.get(), None);

        view.publish(&snapshot("908172", false, FocusTarget::Submit));
        assert_eq!(code.get().map(OtpCode::into_string), Some("908172".to_string()));
    }

    #[test]
    fn test_clones_share_signals() {
        let view: OtpView = OtpView::new(FocusTarget::Slot(0));
        let other = view.clone();
        view.publish(&snapshot("", true, FocusTarget::Slot(0)));
        assert!(other.error_visible());
    }

    #[test]
    fn test_from_snapshot() {
        let snap = snapshot("123", false, FocusTarget::Slot(3));
        let view = OtpView::from_snapshot(&snap);
        assert_eq!(view.slots(), snap.slots);
        assert_eq!(view.focus(), FocusTarget::Slot(3));
    }
}
