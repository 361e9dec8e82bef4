//! Perspective projection onto the character grid.
//!
//! Points outside the view volume are not culled. They clamp onto the
//! border cells, so every projection lands on a valid cell.

use crate::config::validate_view;
use crate::error::FieldResult;
use crate::types::{Vec3, ASPECT_RATIO, DEPTH_EPSILON};

/// A projected point: grid cell plus the distance used for symbol choice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    pub x: u16,
    pub y: u16,
    /// Distance of the unclamped point from the origin.
    pub depth: f64,
}

/// Grid geometry and perspective strength.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projector {
    width: u16,
    height: u16,
    fov: f64,
}

impl Projector {
    pub fn new(width: u16, height: u16, fov: f64) -> FieldResult<Self> {
        validate_view(width, height, fov)?;
        Ok(Self { width, height, fov })
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn fov(&self) -> f64 {
        self.fov
    }

    /// Scale factor `fov / (fov + z)` with z floored to [`DEPTH_EPSILON`].
    pub fn perspective(&self, z: f64) -> f64 {
        let z = z.max(DEPTH_EPSILON);
        self.fov / (self.fov + z)
    }

    pub fn project(&self, point: Vec3) -> Projection {
        let perspective = self.perspective(point.z);
        let sx = (point.x * perspective * ASPECT_RATIO + f64::from(self.width) / 2.0).round();
        let sy = (point.y * perspective + f64::from(self.height) / 2.0).round();

        Projection {
            x: clamp_cell(sx, self.width),
            y: clamp_cell(sy, self.height),
            depth: point.norm(),
        }
    }
}

/// One-shot projection for callers without a [`Projector`].
pub fn project(point: Vec3, width: u16, height: u16, fov: f64) -> FieldResult<Projection> {
    Ok(Projector::new(width, height, fov)?.project(point))
}

#[inline]
fn clamp_cell(v: f64, len: u16) -> u16 {
    let max = f64::from(len - 1);
    if v.is_nan() {
        return 0;
    }
    v.clamp(0.0, max) as u16
}
