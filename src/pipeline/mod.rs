//! Reactive Pipeline
//!
//! Connects the controller's state to a presentation through signals.
//!
//! # Pipeline Architecture
//!
//! ```text
//! InputController → OtpSnapshot → OtpView signals → submitEnabledDerived / codeDerived
//! ```
//!
//! ## Key Design Principles
//!
//! - **Pure Deriveds**: submit-enabled and the completed code are pure
//!   functions of the slot signal
//! - **Explicit Publish**: the controller writes signals once per event, there
//!   is no effect watching the buffer

pub mod view;

// Re-exports
pub use view::{OtpView, create_code_derived, create_submit_enabled_derived};
