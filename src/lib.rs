//! # spark-otp
//!
//! One-time-passcode entry widget core for Rust.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for
//! the reactive view a presentation binds to.
//!
//! ## Architecture
//!
//! A fixed-length row of single-digit slots plus a submit control. The core
//! decides, for every keystroke, paste or focus event, what the slots hold,
//! where focus goes, and whether the code may be submitted. Rendering and
//! verifying the code are left to the host.
//!
//! ```text
//! raw event → InputController → DigitBuffer → reconcile → OtpView signals → render
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Core types (Digit, FocusTarget, Changes)
//! - [`buffer`] - The digit buffer
//! - [`controller`] - Event handling, focus decisions, submission
//! - [`pipeline`] - Reactive view and deriveds
//! - [`state`] - Keyboard types, deferred focus, terminal binding

pub mod buffer;
pub mod code;
pub mod controller;
pub mod error;
pub mod pipeline;
pub mod props;
pub mod snapshot;
pub mod state;
pub mod types;

// Re-export commonly used items
pub use types::*;

pub use buffer::{DigitBuffer, parse_slot_input};
pub use code::{OtpCode, PastePayload};
pub use controller::{CodeSubmitter, EventOutcome, InputController, OtpEvent, SubmitGuard};
pub use error::{PasteError, SlotError};
pub use pipeline::{OtpView, create_code_derived, create_submit_enabled_derived};
pub use props::OtpProps;
pub use snapshot::OtpSnapshot;

pub use state::{
    // Keyboard
    KeyState, KeyboardEvent, Modifiers, SlotKey,
    // Focus
    CaretRequest, FocusScheduler,
};

/// Controller for the default code length.
pub type OtpController = InputController<CODE_LENGTH>;

/// Buffer for the default code length.
pub type OtpBuffer = DigitBuffer<CODE_LENGTH>;
