//! Terminal rendering layer.
//!
//! A small, game-oriented rendering layer for the star field. It renders
//! into a simple framebuffer that is flushed to the terminal with `crossterm`,
//! rather than going through a widget toolkit.
//!
//! Goals:
//! - Keep `core` deterministic and free of terminal I/O
//! - Redraw only the cells that changed between frames
//! - Give the player marker its own color as the topmost layer

pub mod fb;
pub mod renderer;
pub mod star_view;

pub use star_cartographer_core as core;
pub use star_cartographer_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalDisplay, TerminalRenderer};
pub use star_view::{StarView, Viewport, STATUS_ROWS};
