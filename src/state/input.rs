//! Input Module - Terminal event conversion and routing
//!
//! Bridges crossterm's event system with the OTP controller. A terminal has
//! no DOM doing default focus traversal or text editing for us, so this
//! module plays the host's part: it turns typed characters into slot edits,
//! performs plain Tab traversal, and forwards bracketed paste.
//!
//! # API
//!
//! - `convert_key_event` - Convert crossterm KeyEvent to our KeyboardEvent
//! - `poll_event` - Non-blocking event check with timeout
//! - `route_event` - Feed one terminal event into a controller
//! - `begin_frame` - Apply deferred focus before drawing
//! - `enable_paste` / `disable_paste` - Control bracketed paste
//!
//! # Example
//!
//! ```ignore
//! use spark_otp::state::input::{begin_frame, poll_event, route_event, TerminalAction};
//! use std::time::Duration;
//!
//! loop {
//!     begin_frame(&mut controller);
//!     // draw controller.snapshot() ...
//!     if let Some(event) = poll_event(Duration::from_millis(16))? {
//!         match route_event(&mut controller, event) {
//!             TerminalAction::Submit => break,
//!             TerminalAction::Quit => return Ok(()),
//!             TerminalAction::Continue => {}
//!         }
//!     }
//! }
//! ```

use crossterm::event::{
    DisableBracketedPaste, EnableBracketedPaste, Event as CrosstermEvent, KeyCode,
    KeyEvent as CrosstermKeyEvent, KeyEventKind, KeyModifiers, poll, read,
};
use crossterm::execute;
use std::io::stdout;
use std::time::Duration;
use tracing::trace;

use super::focus::CaretRequest;
use super::keyboard::{KeyState, KeyboardEvent, Modifiers};
use crate::controller::{EventOutcome, InputController};
use crate::types::FocusTarget;

// =============================================================================
// ROUTING RESULT
// =============================================================================

/// What the terminal loop should do after an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalAction {
    /// Keep going; redraw if needed.
    Continue,
    /// The enabled submit control was activated.
    Submit,
    /// The user asked to leave (Esc or Ctrl+C).
    Quit,
}

// =============================================================================
// KEY EVENT CONVERSION
// =============================================================================

/// Convert crossterm KeyEvent to our KeyboardEvent
pub fn convert_key_event(event: CrosstermKeyEvent) -> KeyboardEvent {
    let mut modifiers = convert_modifiers(event.modifiers);

    let key = match event.code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => {
            modifiers.shift = true;
            "Tab".to_string()
        }
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Esc => "Escape".to_string(),
        KeyCode::Up => "ArrowUp".to_string(),
        KeyCode::Down => "ArrowDown".to_string(),
        KeyCode::Left => "ArrowLeft".to_string(),
        KeyCode::Right => "ArrowRight".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        _ => String::new(),
    };

    let state = match event.kind {
        KeyEventKind::Press => KeyState::Press,
        KeyEventKind::Repeat => KeyState::Repeat,
        KeyEventKind::Release => KeyState::Release,
    };

    KeyboardEvent {
        key,
        modifiers,
        state,
    }
}

/// Convert crossterm KeyModifiers to our Modifiers
fn convert_modifiers(mods: KeyModifiers) -> Modifiers {
    Modifiers {
        ctrl: mods.contains(KeyModifiers::CONTROL),
        alt: mods.contains(KeyModifiers::ALT),
        shift: mods.contains(KeyModifiers::SHIFT),
        meta: mods.intersects(KeyModifiers::META | KeyModifiers::SUPER),
    }
}

// =============================================================================
// EVENT POLLING
// =============================================================================

/// Poll for an event with timeout.
/// Returns None if no event within timeout.
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<CrosstermEvent>> {
    if poll(timeout)? {
        Ok(Some(read()?))
    } else {
        Ok(None)
    }
}

// =============================================================================
// EVENT ROUTING
// =============================================================================

/// Feed one terminal event into the controller.
pub fn route_event<const N: usize>(
    controller: &mut InputController<N>,
    event: CrosstermEvent,
) -> TerminalAction {
    match event {
        CrosstermEvent::Key(key) => route_key(controller, key),
        CrosstermEvent::Paste(text) => {
            // Paste only lands in a slot; the submit control ignores it
            if let FocusTarget::Slot(slot) = controller.focus() {
                let outcome = controller.paste(slot, &text);
                apply_outcome(controller, outcome);
            }
            TerminalAction::Continue
        }
        _ => TerminalAction::Continue,
    }
}

fn route_key<const N: usize>(
    controller: &mut InputController<N>,
    key: CrosstermKeyEvent,
) -> TerminalAction {
    if key.kind == KeyEventKind::Release {
        return TerminalAction::Continue;
    }
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if key.code == KeyCode::Esc || (ctrl && key.code == KeyCode::Char('c')) {
        return TerminalAction::Quit;
    }

    match controller.focus() {
        FocusTarget::Slot(slot) => route_slot_key(controller, slot, key),
        FocusTarget::Submit => route_submit_key(controller, key),
    }
}

fn route_slot_key<const N: usize>(
    controller: &mut InputController<N>,
    slot: usize,
    key: CrosstermKeyEvent,
) -> TerminalAction {
    let command = key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);

    match key.code {
        // Typing replaces the slot content, the way a one-character field does
        KeyCode::Char(c) if !command => {
            let outcome = controller.edit(slot, c.encode_utf8(&mut [0; 4]));
            apply_outcome(controller, outcome);
        }
        KeyCode::Tab if !key.modifiers.contains(KeyModifiers::SHIFT) => {
            tab_forward(controller, slot);
        }
        KeyCode::Enter if controller.submit_enabled() => return TerminalAction::Submit,
        _ => {
            let event = convert_key_event(key);
            let outcome = controller.key_down(slot, &event);
            apply_outcome(controller, outcome);
        }
    }
    TerminalAction::Continue
}

fn route_submit_key<const N: usize>(
    controller: &mut InputController<N>,
    key: CrosstermKeyEvent,
) -> TerminalAction {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') if controller.submit_enabled() => {
            TerminalAction::Submit
        }
        KeyCode::BackTab => {
            controller.focus_gained(N - 1);
            TerminalAction::Continue
        }
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => {
            controller.focus_gained(N - 1);
            TerminalAction::Continue
        }
        // Plain Tab has nowhere further to go
        _ => TerminalAction::Continue,
    }
}

/// Plain Tab: next slot, then the submit control if it is enabled.
fn tab_forward<const N: usize>(controller: &mut InputController<N>, slot: usize) {
    if slot + 1 < N {
        controller.focus_gained(slot + 1);
    } else if !controller.focus_submit() {
        trace!("submit disabled, tab stays on last slot");
    }
}

/// An immediate focus move also fires the slot's focus-gained handling,
/// as a host focusing an element would.
fn apply_outcome<const N: usize>(controller: &mut InputController<N>, outcome: EventOutcome) {
    if let Some(FocusTarget::Slot(slot)) = outcome.focus {
        controller.focus_gained(slot);
    }
}

/// Start of a presentation cycle: apply the deferred focus move, then
/// return where the caret should go.
pub fn begin_frame<const N: usize>(controller: &mut InputController<N>) -> Option<CaretRequest> {
    if let Some(FocusTarget::Slot(slot)) = controller.take_scheduled_focus() {
        controller.focus_gained(slot);
    }
    controller.take_caret_request()
}

// =============================================================================
// BRACKETED PASTE
// =============================================================================

/// Enable bracketed paste, so a paste arrives as one event.
pub fn enable_paste() -> std::io::Result<()> {
    execute!(stdout(), EnableBracketedPaste)
}

/// Disable bracketed paste.
pub fn disable_paste() -> std::io::Result<()> {
    execute!(stdout(), DisableBracketedPaste)
}

// =============================================================================
// TESTS
// =============================================================================
