//! Focus System - Deferred focus and caret instructions
//!
//! Some focus moves cannot happen in the step that decides them: the submit
//! control only becomes focusable once the presentation has re-rendered it
//! as enabled, and a caret can only be placed after the host has finished
//! its own focus handling. Those moves are parked here until the
//! presentation's next cycle drains them.
//!
//! Each kind of instruction has a single pending slot. Scheduling again
//! overwrites; nothing is queued.

use crate::types::FocusTarget;

/// Place the caret at `offset` inside slot `slot`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaretRequest {
    pub slot: usize,
    pub offset: usize,
}

/// Pending focus/caret instructions for the next presentation cycle.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FocusScheduler {
    focus: Option<FocusTarget>,
    caret: Option<CaretRequest>,
}

impl FocusScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule a focus move, replacing any pending one.
    pub fn schedule_focus(&mut self, target: FocusTarget) {
        self.focus = Some(target);
    }

    /// Schedule a caret placement, replacing any pending one.
    pub fn schedule_caret(&mut self, request: CaretRequest) {
        self.caret = Some(request);
    }

    pub fn pending_focus(&self) -> Option<FocusTarget> {
        self.focus
    }

    pub fn take_focus(&mut self) -> Option<FocusTarget> {
        self.focus.take()
    }

    pub fn take_caret(&mut self) -> Option<CaretRequest> {
        self.caret.take()
    }

    /// Drop a pending focus move, returning it.
    pub fn cancel_focus(&mut self) -> Option<FocusTarget> {
        self.focus.take()
    }
}

// =============================================================================
// TESTS
// =============================================================================
