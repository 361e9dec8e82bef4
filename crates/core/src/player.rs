//! The tracked point (player ship).

use crate::rotation::{rotate_point, RotationMatrix};
use crate::types::{MarkerSymbol, Vec3};

/// A single point that rotates with the field and also moves on its own.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackedPoint {
    pub position: Vec3,
}

impl TrackedPoint {
    pub fn new(position: Vec3) -> Self {
        Self { position }
    }

    pub fn translate(&mut self, offset: Vec3) {
        self.position += offset;
    }

    /// Same rotation rule as the star field.
    pub fn rotate(&mut self, matrix: &RotationMatrix, center: Vec3) {
        self.position = rotate_point(self.position, matrix, center);
    }

    pub fn marker(&self) -> MarkerSymbol {
        MarkerSymbol::from_depth(self.position.z)
    }
}
