//! State Module - Interaction state around the controller
//!
//! - **Keyboard** - Event types, slot key classification
//! - **Focus** - Deferred focus and caret instructions
//! - **Input** - Terminal (crossterm) event conversion and routing

mod focus;
mod keyboard;
pub mod input;

pub use focus::*;
pub use keyboard::*;
