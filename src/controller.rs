//! Input controller - raw widget events in, buffer mutations and focus out.
//!
//! The controller owns the digit buffer, the focused target and the error
//! flag. Each handler processes one event to completion and reports what it
//! touched in an [`EventOutcome`]. Submit-enabled and the completion refocus
//! are reconciled synchronously at the end of every handler.
//!
//! # Transitions
//!
//! | Event                    | Effect                               | Focus                 |
//! |--------------------------|--------------------------------------|-----------------------|
//! | edit slot i, `^[0-9]?$`  | write slot i                         | i+1 after a digit     |
//! | Backspace/Delete at i    | clear slot i                         | unchanged             |
//! | ArrowLeft / ArrowRight   | none                                 | i-1 / i+1 if in range |
//! | Shift+Tab at i > 0       | suppress host traversal              | i-1                   |
//! | paste `^[0-9]{N}$`       | replace every slot, clear error      | unchanged             |
//! | paste anything else      | set error, buffer untouched          | unchanged             |
//! | focus gained on i        | caret to end of slot i (deferred)    | i                     |
//! | buffer becomes complete  | clear error                          | submit (deferred)     |
//! | write while complete     | clear error                          | unchanged             |

use std::marker::PhantomData;

use tracing::{debug, info, trace};

use crate::buffer::DigitBuffer;
use crate::code::{OtpCode, PastePayload};
use crate::pipeline::OtpView;
use crate::props::OtpProps;
use crate::snapshot::OtpSnapshot;
use crate::state::{CaretRequest, FocusScheduler, KeyboardEvent, SlotKey};
use crate::types::{CODE_LENGTH, Changes, Digit, FocusTarget};

// =============================================================================
// Events and Outcomes
// =============================================================================

/// A raw event forwarded by the presentation.
#[derive(Debug, Clone, PartialEq)]
pub enum OtpEvent {
    /// The content of slot `slot` was edited to `text`.
    Edit { slot: usize, text: String },
    /// A key went down while slot `slot` had focus.
    Key { slot: usize, event: KeyboardEvent },
    /// `text` was pasted while slot `slot` had focus.
    Paste { slot: usize, text: String },
    /// Slot `slot` gained focus.
    Focus { slot: usize },
}

/// What one event did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EventOutcome {
    /// Render state touched by the event.
    pub changes: Changes,
    /// Focus move the presentation should apply right away.
    pub focus: Option<FocusTarget>,
    /// The host's default handling for this event must be suppressed.
    pub prevent_default: bool,
}

impl EventOutcome {
    /// True when the event changed nothing and asked for nothing.
    pub fn is_noop(&self) -> bool {
        self.changes.is_empty() && self.focus.is_none() && !self.prevent_default
    }
}

// =============================================================================
// Submission
// =============================================================================

/// Receives a completed code, e.g. a verification client.
pub trait CodeSubmitter {
    type Error;

    fn submit(&mut self, code: &OtpCode) -> Result<(), Self::Error>;
}

impl<F, E> CodeSubmitter for F
where
    F: FnMut(&OtpCode) -> Result<(), E>,
{
    type Error = E;

    fn submit(&mut self, code: &OtpCode) -> Result<(), E> {
        self(code)
    }
}

/// Proof that the buffer is complete.
///
/// Only [`InputController::submit_guard`] creates one, and it refuses while
/// any slot is empty, so an incomplete code can never be submitted. The
/// guard borrows the controller, which keeps the buffer frozen until it is
/// used or dropped.
#[derive(Debug)]
pub struct SubmitGuard<'a> {
    code: OtpCode,
    _controller: PhantomData<&'a ()>,
}

impl SubmitGuard<'_> {
    pub fn code(&self) -> &OtpCode {
        &self.code
    }

    /// Hand the code to `submitter`. Returns the code on success.
    pub fn submit<S: CodeSubmitter>(self, submitter: &mut S) -> Result<OtpCode, S::Error> {
        info!(len = self.code.len(), "submitting code");
        submitter.submit(&self.code)?;
        Ok(self.code)
    }
}

// =============================================================================
// Controller
// =============================================================================

/// State machine behind one OTP widget.
pub struct InputController<const N: usize = CODE_LENGTH> {
    buffer: DigitBuffer<N>,
    focus: FocusTarget,
    error_visible: bool,
    /// Completion as of the last reconcile; the refocus fires on its rising edge.
    was_complete: bool,
    advance_on_input: bool,
    scheduler: FocusScheduler,
    view: Option<OtpView<N>>,
}

impl<const N: usize> InputController<N> {
    /// Create a controller with default props.
    pub fn new() -> Self {
        Self::with_props(&OtpProps::default())
    }

    /// Create a controller in the mount state: empty buffer, no error.
    ///
    /// A submit `initial_focus` is not honored (the control starts
    /// disabled), nor is an out-of-range slot; both fall back to slot 0.
    pub fn with_props(props: &OtpProps) -> Self {
        const { assert!(N > 0, "an OTP widget needs at least one slot") };

        let focus = match props.initial_focus {
            FocusTarget::Slot(index) if index < N => FocusTarget::Slot(index),
            _ => FocusTarget::Slot(0),
        };

        Self {
            buffer: DigitBuffer::new(),
            focus,
            error_visible: false,
            was_complete: false,
            advance_on_input: props.advance_on_input,
            scheduler: FocusScheduler::new(),
            view: None,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn buffer(&self) -> &DigitBuffer<N> {
        &self.buffer
    }

    pub fn focus(&self) -> FocusTarget {
        self.focus
    }

    pub fn error_visible(&self) -> bool {
        self.error_visible
    }

    /// Derived from the buffer on every call.
    pub fn submit_enabled(&self) -> bool {
        self.buffer.is_complete()
    }

    pub fn snapshot(&self) -> OtpSnapshot<N> {
        OtpSnapshot {
            slots: *self.buffer.slots(),
            submit_enabled: self.submit_enabled(),
            error_visible: self.error_visible,
            focus: self.focus,
        }
    }

    /// Create (or return) the reactive view this controller publishes to.
    pub fn bind_view(&mut self) -> OtpView<N> {
        if let Some(view) = &self.view {
            return view.clone();
        }
        let view = OtpView::from_snapshot(&self.snapshot());
        self.view = Some(view.clone());
        view
    }

    // =========================================================================
    // Event Handling
    // =========================================================================

    /// Dispatch one raw event.
    pub fn handle(&mut self, event: OtpEvent) -> EventOutcome {
        match event {
            OtpEvent::Edit { slot, text } => self.edit(slot, &text),
            OtpEvent::Key { slot, event } => self.key_down(slot, &event),
            OtpEvent::Paste { slot, text } => self.paste(slot, &text),
            OtpEvent::Focus { slot } => self.focus_gained(slot),
        }
    }

    /// Slot `slot` was edited to `text`.
    ///
    /// Input that is not empty-or-one-digit is dropped silently.
    pub fn edit(&mut self, slot: usize, text: &str) -> EventOutcome {
        let previous = self.buffer.slot(slot);
        if let Err(err) = self.buffer.set_slot(slot, text) {
            trace!(slot, %err, "rejected slot input");
            return EventOutcome::default();
        }

        let mut outcome = EventOutcome::default();
        if self.buffer.slot(slot) != previous {
            outcome.changes |= Changes::SLOTS;
        }
        if !text.is_empty() && self.advance_on_input && slot + 1 < N {
            self.move_focus(FocusTarget::Slot(slot + 1), &mut outcome);
        }

        self.reconcile(true, &mut outcome);
        self.finish(outcome)
    }

    /// A key went down in slot `slot`.
    pub fn key_down(&mut self, slot: usize, event: &KeyboardEvent) -> EventOutcome {
        if slot >= N || !event.is_actionable() {
            return EventOutcome::default();
        }

        let mut outcome = EventOutcome::default();
        match SlotKey::classify(event) {
            SlotKey::Clear => {
                if self.buffer.clear_slot(slot).is_some() {
                    outcome.changes |= Changes::SLOTS;
                }
            }
            SlotKey::ShiftTab if slot > 0 => {
                outcome.prevent_default = true;
                self.move_focus(FocusTarget::Slot(slot - 1), &mut outcome);
            }
            SlotKey::Left if slot > 0 => {
                self.move_focus(FocusTarget::Slot(slot - 1), &mut outcome);
            }
            SlotKey::Right if slot + 1 < N => {
                self.move_focus(FocusTarget::Slot(slot + 1), &mut outcome);
            }
            _ => {}
        }

        let mutated = outcome.changes.contains(Changes::SLOTS);
        self.reconcile(mutated, &mut outcome);
        self.finish(outcome)
    }

    /// `text` was pasted into slot `slot`.
    ///
    /// All or nothing: exactly `N` ASCII digits replace the whole buffer,
    /// anything else only raises the error flag. Focus stays put either way.
    pub fn paste(&mut self, slot: usize, text: &str) -> EventOutcome {
        if slot >= N {
            return EventOutcome::default();
        }

        let mut outcome = EventOutcome {
            prevent_default: true,
            ..Default::default()
        };

        let accepted = match PastePayload::<N>::parse(text) {
            Ok(payload) => {
                debug!(slot, "accepted paste");
                let before = *self.buffer.slots();
                self.buffer.set_all(payload);
                if *self.buffer.slots() != before {
                    outcome.changes |= Changes::SLOTS;
                }
                self.set_error(false, &mut outcome);
                true
            }
            Err(err) => {
                debug!(slot, %err, "rejected paste");
                self.set_error(true, &mut outcome);
                false
            }
        };

        self.reconcile(accepted, &mut outcome);
        self.finish(outcome)
    }

    /// Slot `slot` gained focus. The caret goes to the end of its content on
    /// the next cycle.
    pub fn focus_gained(&mut self, slot: usize) -> EventOutcome {
        if slot >= N {
            return EventOutcome::default();
        }

        let mut outcome = EventOutcome::default();
        if self.focus != FocusTarget::Slot(slot) {
            self.focus = FocusTarget::Slot(slot);
            outcome.changes |= Changes::FOCUS;
        }
        self.scheduler.schedule_caret(CaretRequest {
            slot,
            offset: self.buffer.slot_text(slot).len(),
        });
        outcome.changes |= Changes::CARET;

        self.finish(outcome)
    }

    /// The submit control gained focus. Refused while it is disabled.
    pub fn focus_submit(&mut self) -> bool {
        if !self.submit_enabled() {
            return false;
        }
        if self.focus != FocusTarget::Submit {
            self.focus = FocusTarget::Submit;
            self.publish();
        }
        true
    }

    // =========================================================================
    // Deferred Instructions
    // =========================================================================

    /// Pending focus move, without consuming it.
    pub fn scheduled_focus(&self) -> Option<FocusTarget> {
        self.scheduler.pending_focus()
    }

    /// Drain the pending focus move for this presentation cycle.
    ///
    /// A move to the submit control never outlives completion: it is
    /// cancelled as soon as the code becomes incomplete again.
    pub fn take_scheduled_focus(&mut self) -> Option<FocusTarget> {
        let target = self.scheduler.take_focus()?;
        if self.focus != target {
            self.focus = target;
            self.publish();
        }
        Some(target)
    }

    /// Drain the pending caret placement for this presentation cycle.
    pub fn take_caret_request(&mut self) -> Option<CaretRequest> {
        self.scheduler.take_caret()
    }

    // =========================================================================
    // Submission
    // =========================================================================

    /// A guard for submitting the code, only while every slot is filled.
    pub fn submit_guard(&self) -> Option<SubmitGuard<'_>> {
        self.buffer.code().map(|code| SubmitGuard {
            code,
            _controller: PhantomData,
        })
    }

    /// Digit in slot `index`, if any.
    pub fn slot(&self, index: usize) -> Option<Digit> {
        self.buffer.slot(index)
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn move_focus(&mut self, target: FocusTarget, outcome: &mut EventOutcome) {
        trace!(from = %self.focus, to = %target, "moving focus");
        if self.focus != target {
            self.focus = target;
            outcome.changes |= Changes::FOCUS;
        }
        outcome.focus = Some(target);
    }

    fn set_error(&mut self, visible: bool, outcome: &mut EventOutcome) {
        if self.error_visible != visible {
            self.error_visible = visible;
            outcome.changes |= Changes::ERROR;
        }
    }

    /// Re-derive submit state after an event.
    ///
    /// Any accepted write that leaves the buffer complete clears the error; a
    /// rejected paste never does. Only the rising edge of completion
    /// schedules a focus move to the submit control, so that happens once
    /// per transition, not once per event while complete.
    fn reconcile(&mut self, accepted_write: bool, outcome: &mut EventOutcome) {
        let complete = self.buffer.is_complete();
        if complete && accepted_write {
            self.set_error(false, outcome);
        }
        if complete == self.was_complete {
            return;
        }

        outcome.changes |= Changes::SUBMIT;
        if complete {
            debug!("code complete, scheduling focus on submit");
            self.scheduler.schedule_focus(FocusTarget::Submit);
            outcome.changes |= Changes::FOCUS;
        } else if self.scheduler.pending_focus() == Some(FocusTarget::Submit) {
            trace!("code incomplete again, cancelling focus on submit");
            self.scheduler.cancel_focus();
        }
        self.was_complete = complete;
    }

    fn finish(&self, outcome: EventOutcome) -> EventOutcome {
        if !outcome.changes.is_empty() {
            self.publish();
        }
        outcome
    }

    fn publish(&self) {
        if let Some(view) = &self.view {
            view.publish(&self.snapshot());
        }
    }
}

impl<const N: usize> Default for InputController<N> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// TESTS
// =============================================================================
