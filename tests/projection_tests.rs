use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use star_cartographer::core::{project, FieldError, Projector};
use star_cartographer::types::Vec3;

#[test]
fn test_projection_is_always_in_bounds() {
    let mut rng = StdRng::seed_from_u64(77);
    for _ in 0..5000 {
        let width: u16 = rng.gen_range(1..300);
        let height: u16 = rng.gen_range(1..150);
        let fov: f64 = rng.gen_range(0.001..1000.0);
        let scale = 10f64.powi(rng.gen_range(0..7));
        let point = Vec3::new(
            rng.gen_range(-1.0..1.0) * scale,
            rng.gen_range(-1.0..1.0) * scale,
            rng.gen_range(-1.0..1.0) * scale,
        );

        let p = project(point, width, height, fov).unwrap();
        assert!(p.x < width, "x={} width={} point={:?}", p.x, width, point);
        assert!(p.y < height, "y={} height={} point={:?}", p.y, height, point);
    }
}

#[test]
fn test_non_positive_depth_projects_like_epsilon() {
    let proj = Projector::new(128, 64, 120.0).unwrap();
    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..500 {
        let x = rng.gen_range(-40.0..40.0);
        let y = rng.gen_range(-40.0..40.0);
        let z = rng.gen_range(-100.0..=0.0);
        let a = proj.project(Vec3::new(x, y, z));
        let b = proj.project(Vec3::new(x, y, 0.1));
        assert_eq!((a.x, a.y), (b.x, b.y));
    }
}

#[test]
fn test_star_at_origin_hits_center() {
    let p = project(Vec3::ZERO, 128, 64, 120.0).unwrap();
    assert_eq!((p.x, p.y), (64, 32));
    assert_eq!(p.depth, 0.0);
}

#[test]
fn test_overflow_clamps_to_right_edge() {
    let p = project(Vec3::new(1000.0, 0.0, 0.1), 128, 64, 1.0).unwrap();
    assert_eq!(p.x, 127);
    assert_eq!(p.y, 32);
}

#[test]
fn test_perspective_shrinks_with_depth() {
    let proj = Projector::new(200, 100, 10.0).unwrap();
    let near = proj.project(Vec3::new(20.0, 0.0, 1.0));
    let far = proj.project(Vec3::new(20.0, 0.0, 50.0));
    assert!(near.x > far.x);
    assert!(far.x > 100);
}

#[test]
fn test_smaller_fov_exaggerates_perspective() {
    let strong = Projector::new(200, 100, 5.0).unwrap();
    let flat = Projector::new(200, 100, 500.0).unwrap();
    let point = Vec3::new(10.0, 0.0, 20.0);
    assert!(strong.project(point).x < flat.project(point).x);
}

#[test]
fn test_invalid_parameters_are_configuration_errors() {
    for (w, h, fov) in [(0, 10, 1.0), (10, 0, 1.0), (10, 10, 0.0), (10, 10, -5.0)] {
        assert!(matches!(
            project(Vec3::ZERO, w, h, fov),
            Err(FieldError::InvalidConfiguration { .. })
        ));
    }
}
