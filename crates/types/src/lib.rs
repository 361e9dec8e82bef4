//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (transform pipeline, terminal rendering, input mapping).
//!
//! # Coordinate System
//!
//! Right-handed, rotation center fixed at the origin:
//!
//! - **x**: grows to the right on screen
//! - **y**: grows downward on screen (row index)
//! - **z**: depth, grows away from the viewer
//!
//! # Projection Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEPTH_EPSILON` | 0.1 | Floor applied to z before the perspective divide |
//! | `ASPECT_RATIO` | 2.0 | Horizontal stretch for tall terminal glyphs |
//! | `ROTATION_STEP` | 0.1 | Radians per rotation key press |
//! | `FRAME_DELAY_MS` | 50 | Pause after each rendered frame |
//!
//! # Symbols
//!
//! Stars are drawn by normalized distance (`distance / (field_size * sqrt(3))`):
//!
//! | Normalized distance | Symbol |
//! |---------------------|--------|
//! | < 0.10 | `*` |
//! | < 0.25 | `•` |
//! | < 0.50 | `·` |
//! | >= 0.50 | `.` |
//!
//! The tracked point (player marker) is drawn by its raw z:
//!
//! | z | Symbol |
//! |---|--------|
//! | > 10 | `.` |
//! | > -10 | `•` |
//! | <= -10 | `▲` |
//!
//! # Examples
//!
//! ```
//! use star_cartographer_types::{Axis, InputEvent, StarSymbol, MarkerSymbol, Vec3};
//!
//! let p = Vec3::new(3.0, 4.0, 0.0);
//! assert_eq!(p.norm(), 5.0);
//!
//! assert_eq!(StarSymbol::from_normalized(0.05), StarSymbol::Bright);
//! assert_eq!(StarSymbol::from_normalized(0.10).as_char(), '•');
//!
//! assert_eq!(MarkerSymbol::from_depth(15.0).as_char(), '.');
//! assert_eq!(MarkerSymbol::from_depth(-15.0).as_char(), '▲');
//!
//! let ev = InputEvent::rotate(Axis::Y, 0.1);
//! assert!(matches!(ev, InputEvent::RotateDelta { axis: Axis::Y, .. }));
//! ```

use std::ops::{Add, AddAssign, Mul, Neg, Sub};

/// Depth floor applied before the perspective divide.
pub const DEPTH_EPSILON: f64 = 0.1;

/// Terminal glyphs are roughly twice as tall as they are wide.
pub const ASPECT_RATIO: f64 = 2.0;

/// Rotation applied per key press, in radians.
pub const ROTATION_STEP: f64 = 0.1;

/// Player translation per key press.
pub const MOVE_STEP: f64 = 1.0;

/// Fixed pause after each rendered frame (ms).
pub const FRAME_DELAY_MS: u64 = 50;

/// Default grid width in cells.
pub const DEFAULT_WIDTH: u16 = 128;

/// Default grid height in cells.
pub const DEFAULT_HEIGHT: u16 = 64;

/// Default number of generated stars.
pub const DEFAULT_NUM_STARS: usize = 150;

/// Default perspective strength.
pub const DEFAULT_FOV: f64 = 120.0;

/// Default cube half-extent for star placement.
pub const DEFAULT_FIELD_SIZE: f64 = 30.0;

/// Blank grid cell.
pub const BLANK: char = ' ';

/// Normalized-distance upper bounds for the star symbol buckets.
pub const STAR_THRESHOLDS: [f64; 3] = [0.10, 0.25, 0.50];

/// Raw-z lower bounds for the marker symbol buckets.
pub const MARKER_FAR_Z: f64 = 10.0;
pub const MARKER_NEAR_Z: f64 = -10.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cartographer_parity_defaults() {
        assert_eq!(DEPTH_EPSILON, 0.1);
        assert_eq!(ASPECT_RATIO, 2.0);
        assert_eq!(ROTATION_STEP, 0.1);
        assert_eq!(FRAME_DELAY_MS, 50);
        assert_eq!(DEFAULT_WIDTH, 128);
        assert_eq!(DEFAULT_HEIGHT, 64);
        assert_eq!(DEFAULT_NUM_STARS, 150);
        assert_eq!(DEFAULT_FOV, 120.0);
        assert_eq!(DEFAULT_FIELD_SIZE, 30.0);
    }

    #[test]
    fn test_vec3_arithmetic() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(0.5, -1.0, 2.0);
        assert_eq!(a + b, Vec3::new(1.5, 1.0, 5.0));
        assert_eq!(a - b, Vec3::new(0.5, 3.0, 1.0));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(-a, Vec3::new(-1.0, -2.0, -3.0));
        assert_eq!(Vec3::new(2.0, 3.0, 6.0).norm(), 7.0);
        assert_eq!(a.distance(a), 0.0);
    }

    #[test]
    fn test_star_symbol_thresholds_are_strict() {
        assert_eq!(StarSymbol::from_normalized(0.0), StarSymbol::Bright);
        assert_eq!(StarSymbol::from_normalized(0.0999), StarSymbol::Bright);
        assert_eq!(StarSymbol::from_normalized(0.10), StarSymbol::Near);
        assert_eq!(StarSymbol::from_normalized(0.25), StarSymbol::Mid);
        assert_eq!(StarSymbol::from_normalized(0.50), StarSymbol::Far);
        assert_eq!(StarSymbol::from_normalized(3.0), StarSymbol::Far);
    }

    #[test]
    fn test_marker_symbol_thresholds() {
        assert_eq!(MarkerSymbol::from_depth(10.5).as_char(), '.');
        assert_eq!(MarkerSymbol::from_depth(10.0).as_char(), '•');
        assert_eq!(MarkerSymbol::from_depth(0.0).as_char(), '•');
        assert_eq!(MarkerSymbol::from_depth(-9.9).as_char(), '•');
        assert_eq!(MarkerSymbol::from_depth(-10.0).as_char(), '▲');
    }

    #[test]
    fn test_axis_round_trip() {
        for axis in [Axis::X, Axis::Y, Axis::Z] {
            assert_eq!(Axis::from_str(axis.as_str()), Some(axis));
        }
        assert_eq!(Axis::from_str("W"), None);
    }
}

/// A point or direction in 3D space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const ZERO: Vec3 = Vec3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn dot(self, other: Vec3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Euclidean length.
    pub fn norm(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// Euclidean distance to `other`.
    pub fn distance(self, other: Vec3) -> f64 {
        (self - other).norm()
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }
}

impl Add for Vec3 {
    type Output = Vec3;

    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Vec3) {
        *self = *self + rhs;
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vec3 {
    type Output = Vec3;

    fn mul(self, rhs: f64) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

/// Rotation axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
    Z,
}

impl Axis {
    /// Parse an axis name (case-insensitive).
    ///
    /// # Examples
    ///
    /// ```
    /// use star_cartographer_types::Axis;
    ///
    /// assert_eq!(Axis::from_str("x"), Some(Axis::X));
    /// assert_eq!(Axis::from_str("Z"), Some(Axis::Z));
    /// assert_eq!(Axis::from_str("w"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "x" => Some(Axis::X),
            "y" => Some(Axis::Y),
            "z" => Some(Axis::Z),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }
}

/// Discrete input events driving the simulation.
///
/// Produced by the input layer and consumed by the simulation loop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Add `delta` radians to the pending rotation about `axis`
    RotateDelta { axis: Axis, delta: f64 },
    /// Move the tracked point by the given offset
    Translate { dx: f64, dy: f64, dz: f64 },
    /// Present a fresh frame without changing state (terminal resized)
    Redraw,
}

impl InputEvent {
    pub fn rotate(axis: Axis, delta: f64) -> Self {
        InputEvent::RotateDelta { axis, delta }
    }

    pub fn translate(dx: f64, dy: f64, dz: f64) -> Self {
        InputEvent::Translate { dx, dy, dz }
    }
}

/// Star glyphs, ordered nearest to farthest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StarSymbol {
    /// `*`
    Bright,
    /// `•`
    Near,
    /// `·`
    Mid,
    /// `.`
    Far,
}

impl StarSymbol {
    /// Pick a symbol for a normalized distance.
    ///
    /// Bucket bounds are strict: a value exactly on a bound falls into the
    /// farther bucket.
    pub fn from_normalized(d: f64) -> Self {
        if d < STAR_THRESHOLDS[0] {
            StarSymbol::Bright
        } else if d < STAR_THRESHOLDS[1] {
            StarSymbol::Near
        } else if d < STAR_THRESHOLDS[2] {
            StarSymbol::Mid
        } else {
            StarSymbol::Far
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            StarSymbol::Bright => '*',
            StarSymbol::Near => '•',
            StarSymbol::Mid => '·',
            StarSymbol::Far => '.',
        }
    }
}

/// Player marker glyphs by depth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MarkerSymbol {
    /// `.` when z > 10
    Distant,
    /// `•` when -10 < z <= 10
    Level,
    /// `▲` when z <= -10
    Close,
}

impl MarkerSymbol {
    pub fn from_depth(z: f64) -> Self {
        if z > MARKER_FAR_Z {
            MarkerSymbol::Distant
        } else if z > MARKER_NEAR_Z {
            MarkerSymbol::Level
        } else {
            MarkerSymbol::Close
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            MarkerSymbol::Distant => '.',
            MarkerSymbol::Level => '•',
            MarkerSymbol::Close => '▲',
        }
    }
}
