//! Star field: the rotatable point cloud.

use log::{debug, info, warn};
use rand::Rng;

use crate::catalog::StarInfo;
use crate::error::{FieldError, FieldResult};
use crate::rotation::{self, RotationMatrix};
use crate::types::Vec3;

/// A single star. Only `position` takes part in the transform pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Star {
    pub position: Vec3,
    pub info: StarInfo,
}

/// Fixed-size set of stars rotating about the origin.
#[derive(Debug, Clone)]
pub struct StarField {
    stars: Vec<Star>,
    center: Vec3,
    field_size: f64,
}

impl StarField {
    /// Sample `num_stars` positions uniformly inside `[-field_size, field_size]^3`.
    pub fn generate<R: Rng + ?Sized>(
        num_stars: usize,
        field_size: f64,
        rng: &mut R,
    ) -> FieldResult<Self> {
        check_field_size(field_size)?;
        if num_stars == 0 {
            warn!("star field generated with zero stars");
        }

        let stars = (0..num_stars)
            .map(|_| {
                let position = Vec3::new(
                    rng.gen_range(-field_size..=field_size),
                    rng.gen_range(-field_size..=field_size),
                    rng.gen_range(-field_size..=field_size),
                );
                Star {
                    position,
                    info: StarInfo::generate(&mut *rng),
                }
            })
            .collect::<Vec<_>>();

        info!(
            "generated star field: {} stars, field_size {}",
            stars.len(),
            field_size
        );
        Ok(Self {
            stars,
            center: Vec3::ZERO,
            field_size,
        })
    }

    /// Build a field from explicit stars.
    pub fn from_stars(stars: Vec<Star>, field_size: f64) -> FieldResult<Self> {
        check_field_size(field_size)?;
        Ok(Self {
            stars,
            center: Vec3::ZERO,
            field_size,
        })
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    /// Rotation pivot. Always the origin.
    pub fn center(&self) -> Vec3 {
        self.center
    }

    pub fn field_size(&self) -> f64 {
        self.field_size
    }

    /// Rotate every star about the field center.
    pub fn rotate(&mut self, matrix: &RotationMatrix) {
        rotation::rotate(
            self.stars.iter_mut().map(|s| &mut s.position),
            matrix,
            self.center,
        );
    }

    /// Nearest star to `point` and its distance. Ties keep the first star.
    pub fn nearest_to(&self, point: Vec3) -> Option<(&Star, f64)> {
        let mut best: Option<(&Star, f64)> = None;
        for star in &self.stars {
            let d = star.position.distance(point);
            match best {
                Some((_, best_d)) if d >= best_d => {}
                _ => best = Some((star, d)),
            }
        }
        if let Some((star, d)) = best {
            debug!("nearest star {} at {:.2}", star.info.name, d);
        }
        best
    }
}

fn check_field_size(field_size: f64) -> FieldResult<()> {
    if field_size.is_finite() && field_size > 0.0 {
        Ok(())
    } else {
        Err(FieldError::invalid_configuration(format!(
            "field_size must be a finite value > 0, got {}",
            field_size
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StarClass;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn star_at(x: f64, y: f64, z: f64) -> Star {
        Star {
            position: Vec3::new(x, y, z),
            info: StarInfo {
                name: format!("test {} {} {}", x, y, z),
                class: StarClass::RedDwarf,
                temperature: 3000,
                size: 1.0,
                age: 1.0,
            },
        }
    }

    #[test]
    fn test_generated_positions_stay_inside_cube() {
        let mut rng = StdRng::seed_from_u64(1);
        let field = StarField::generate(400, 30.0, &mut rng).unwrap();
        assert_eq!(field.len(), 400);
        for star in field.stars() {
            for c in star.position.to_array() {
                assert!((-30.0..=30.0).contains(&c));
            }
        }
    }

    #[test]
    fn test_seeded_fields_are_identical() {
        let a = StarField::generate(50, 10.0, &mut StdRng::seed_from_u64(3)).unwrap();
        let b = StarField::generate(50, 10.0, &mut StdRng::seed_from_u64(3)).unwrap();
        assert_eq!(a.stars(), b.stars());
    }

    #[test]
    fn test_rejects_bad_field_size() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(StarField::generate(5, -1.0, &mut rng).is_err());
        assert!(StarField::from_stars(Vec::new(), 0.0).is_err());
    }

    #[test]
    fn test_center_is_origin() {
        let field = StarField::from_stars(vec![star_at(1.0, 2.0, 3.0)], 30.0).unwrap();
        assert_eq!(field.center(), Vec3::ZERO);
    }

    #[test]
    fn test_nearest_picks_minimum_distance() {
        let field = StarField::from_stars(
            vec![star_at(10.0, 0.0, 0.0), star_at(0.0, 2.0, 0.0), star_at(0.0, 0.0, -5.0)],
            30.0,
        )
        .unwrap();
        let (star, d) = field.nearest_to(Vec3::ZERO).unwrap();
        assert_eq!(star.position, Vec3::new(0.0, 2.0, 0.0));
        assert_eq!(d, 2.0);
    }

    #[test]
    fn test_nearest_tie_keeps_first() {
        let field = StarField::from_stars(
            vec![star_at(1.0, 0.0, 0.0), star_at(-1.0, 0.0, 0.0)],
            30.0,
        )
        .unwrap();
        let (star, _) = field.nearest_to(Vec3::ZERO).unwrap();
        assert_eq!(star.position.x, 1.0);
    }

    #[test]
    fn test_nearest_on_empty_field_is_none() {
        let field = StarField::from_stars(Vec::new(), 30.0).unwrap();
        assert!(field.nearest_to(Vec3::ZERO).is_none());
    }
}
