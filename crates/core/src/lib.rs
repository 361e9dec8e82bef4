//! Star field core - pure, deterministic, and testable
//!
//! This crate contains the transform and projection pipeline behind the
//! terminal star field. It has **no dependencies** on terminal I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical star fields
//! - **Testable**: Every stage is a plain function over value types
//! - **Portable**: Frames can be consumed by any [`DisplaySink`]
//! - **Fast**: Rendering into a reused [`Frame`] does not allocate
//!
//! # Module Structure
//!
//! - [`rotation`]: Euler-angle rotation matrices and rigid rotation of points
//! - [`field`]: The star set, its rotation center and nearest-star lookup
//! - [`player`]: The tracked point and its depth-dependent marker
//! - [`projection`]: Perspective projection with aspect correction and clamping
//! - [`raster`]: Symbol selection, overdraw policy, marker overlay
//! - [`simulation`]: Event handling, per-frame pipeline, status lines
//! - [`catalog`]: Cosmetic star names, classes and physical attributes
//! - [`config`]: Construction-time parameters
//!
//! # Pipeline
//!
//! ```text
//! InputEvent -> pending angles -> RotationMatrix (Rz * Ry * Rx)
//!            -> rotate stars + player about the origin
//!            -> Projector (perspective divide, clamp)
//!            -> Rasterizer (iteration-order overdraw, marker on top)
//!            -> Frame + Status -> DisplaySink
//! ```
//!
//! # Example
//!
//! ```
//! use star_cartographer_core::{Simulation, StarFieldConfig};
//! use star_cartographer_types::{Axis, InputEvent};
//!
//! let config = StarFieldConfig {
//!     num_stars: 20,
//!     seed: Some(42),
//!     ..StarFieldConfig::default()
//! };
//! let mut sim = Simulation::new(&config).unwrap();
//!
//! sim.apply(InputEvent::rotate(Axis::Y, 0.1));
//! sim.update();
//! let frame = sim.render().unwrap();
//! assert_eq!(frame.grid.width(), 128);
//! sim.clear_rotation();
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod field;
pub mod player;
pub mod projection;
pub mod raster;
pub mod rotation;
pub mod simulation;

pub use star_cartographer_types as types;

// Re-export commonly used types for convenience
pub use catalog::{StarClass, StarInfo};
pub use config::StarFieldConfig;
pub use error::{FieldError, FieldResult};
pub use field::{Star, StarField};
pub use player::TrackedPoint;
pub use projection::{project, Projection, Projector};
pub use raster::{star_symbol, Frame, Grid, MarkerCell, OverdrawPolicy, Rasterizer};
pub use rotation::{rotate, rotate_point, RotationMatrix};
pub use simulation::{DisplaySink, InputSource, PendingRotation, Simulation, Status};
