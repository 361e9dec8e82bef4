//! Star Cartographer (workspace facade crate).
//!
//! Re-exports the member crates under `star_cartographer::{core,input,term,types}`
//! and hosts the pieces of the binary that are worth testing without a
//! terminal: CLI/config resolution, logging setup and the run loop.

pub mod app;
pub mod cli;
pub mod logging;

pub use star_cartographer_core as core;
pub use star_cartographer_input as input;
pub use star_cartographer_term as term;
pub use star_cartographer_types as types;
