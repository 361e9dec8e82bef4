//! Rotation matrices and rigid rotation of point sets.
//!
//! Matrices are rebuilt from Euler angles every frame, so no
//! re-orthonormalization is needed and angles may grow without bound.

use std::ops::Mul;

use crate::types::Vec3;

/// Row-major 3x3 rotation matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationMatrix([[f64; 3]; 3]);

impl RotationMatrix {
    pub const IDENTITY: RotationMatrix =
        RotationMatrix([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]]);

    pub fn rows(&self) -> &[[f64; 3]; 3] {
        &self.0
    }

    pub fn about_x(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self([[1.0, 0.0, 0.0], [0.0, c, -s], [0.0, s, c]])
    }

    pub fn about_y(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self([[c, 0.0, s], [0.0, 1.0, 0.0], [-s, 0.0, c]])
    }

    pub fn about_z(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self([[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Combined rotation `Rz(az) * Ry(ay) * Rx(ax)`.
    ///
    /// x is applied first and z last. The three rotations do not commute, so
    /// this order is part of the contract.
    pub fn from_euler(ax: f64, ay: f64, az: f64) -> Self {
        Self::about_z(az) * (Self::about_y(ay) * Self::about_x(ax))
    }

    pub fn transpose(&self) -> Self {
        let m = &self.0;
        Self([
            [m[0][0], m[1][0], m[2][0]],
            [m[0][1], m[1][1], m[2][1]],
            [m[0][2], m[1][2], m[2][2]],
        ])
    }

    pub fn apply(&self, v: Vec3) -> Vec3 {
        let m = &self.0;
        Vec3::new(
            m[0][0] * v.x + m[0][1] * v.y + m[0][2] * v.z,
            m[1][0] * v.x + m[1][1] * v.y + m[1][2] * v.z,
            m[2][0] * v.x + m[2][1] * v.y + m[2][2] * v.z,
        )
    }
}

impl Default for RotationMatrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for RotationMatrix {
    type Output = RotationMatrix;

    fn mul(self, rhs: RotationMatrix) -> RotationMatrix {
        let a = &self.0;
        let b = &rhs.0;
        let mut out = [[0.0; 3]; 3];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = a[i][0] * b[0][j] + a[i][1] * b[1][j] + a[i][2] * b[2][j];
            }
        }
        RotationMatrix(out)
    }
}

/// Rotate a single point about `center`.
#[inline]
pub fn rotate_point(point: Vec3, matrix: &RotationMatrix, center: Vec3) -> Vec3 {
    matrix.apply(point - center) + center
}

/// Rotate every point in place about `center`.
///
/// Stars and the tracked point both go through here so they stay locked to
/// the same pivot.
pub fn rotate<'a, I>(points: I, matrix: &RotationMatrix, center: Vec3)
where
    I: IntoIterator<Item = &'a mut Vec3>,
{
    for p in points {
        *p = rotate_point(*p, matrix, center);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPS: f64 = 1e-9;

    fn approx(a: Vec3, b: Vec3) -> bool {
        (a - b).norm() < EPS
    }

    fn approx_matrix(a: &RotationMatrix, b: &RotationMatrix) -> bool {
        a.rows()
            .iter()
            .flatten()
            .zip(b.rows().iter().flatten())
            .all(|(x, y)| (x - y).abs() < EPS)
    }

    #[test]
    fn test_zero_angles_give_identity() {
        assert_eq!(RotationMatrix::from_euler(0.0, 0.0, 0.0), RotationMatrix::IDENTITY);
    }

    #[test]
    fn test_quarter_turns_follow_right_hand_rule() {
        let x = Vec3::new(1.0, 0.0, 0.0);
        let y = Vec3::new(0.0, 1.0, 0.0);
        let z = Vec3::new(0.0, 0.0, 1.0);

        assert!(approx(RotationMatrix::about_z(FRAC_PI_2).apply(x), y));
        assert!(approx(RotationMatrix::about_x(FRAC_PI_2).apply(y), z));
        assert!(approx(RotationMatrix::about_y(FRAC_PI_2).apply(z), x));
    }

    #[test]
    fn test_euler_order_is_z_y_x() {
        let (ax, ay, az) = (0.3, -1.1, 2.4);
        let expected = RotationMatrix::about_z(az)
            * RotationMatrix::about_y(ay)
            * RotationMatrix::about_x(ax);
        assert!(approx_matrix(&RotationMatrix::from_euler(ax, ay, az), &expected));

        let reversed = RotationMatrix::about_x(ax)
            * RotationMatrix::about_y(ay)
            * RotationMatrix::about_z(az);
        assert!(!approx_matrix(&RotationMatrix::from_euler(ax, ay, az), &reversed));
    }

    #[test]
    fn test_matrix_is_orthogonal() {
        let m = RotationMatrix::from_euler(0.7, 1.9, -3.2);
        assert!(approx_matrix(&(m * m.transpose()), &RotationMatrix::IDENTITY));
    }

    #[test]
    fn test_large_angles_stay_orthogonal() {
        let m = RotationMatrix::from_euler(1.0e4, -3.3e3, 7.7e5);
        let p = Vec3::new(4.0, -2.0, 9.0);
        assert!((m.apply(p).norm() - p.norm()).abs() < 1e-6);
    }

    #[test]
    fn test_rotate_about_center_keeps_center_fixed() {
        let center = Vec3::new(2.0, -1.0, 5.0);
        let m = RotationMatrix::from_euler(0.4, 0.5, 0.6);
        assert!(approx(rotate_point(center, &m, center), center));
    }

    #[test]
    fn test_rotate_mutates_in_place() {
        let mut pts = vec![Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 2.0, 0.0)];
        rotate(pts.iter_mut(), &RotationMatrix::about_z(PI), Vec3::ZERO);
        assert!(approx(pts[0], Vec3::new(-1.0, 0.0, 0.0)));
        assert!(approx(pts[1], Vec3::new(0.0, -2.0, 0.0)));
    }
}
