//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::InputEvent`] and provides
//! a non-blocking [`TerminalInput`] source for the simulation loop.

pub mod map;
pub mod source;

pub use star_cartographer_core as core;
pub use star_cartographer_types as types;

pub use map::{handle_key_event, should_quit};
pub use source::TerminalInput;
