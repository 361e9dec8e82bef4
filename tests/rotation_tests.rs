use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use star_cartographer::core::{rotate, rotate_point, RotationMatrix, Star, StarField, StarInfo};
use star_cartographer::types::Vec3;

const TOL: f64 = 1e-9;

fn random_vec(rng: &mut StdRng, extent: f64) -> Vec3 {
    Vec3::new(
        rng.gen_range(-extent..extent),
        rng.gen_range(-extent..extent),
        rng.gen_range(-extent..extent),
    )
}

#[test]
fn test_rotation_preserves_distance_from_center() {
    let mut rng = StdRng::seed_from_u64(2024);
    for _ in 0..1000 {
        let p = random_vec(&mut rng, 100.0);
        let center = random_vec(&mut rng, 20.0);
        let m = RotationMatrix::from_euler(
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-10.0..10.0),
        );
        let rotated = rotate_point(p, &m, center);
        let before = (p - center).norm();
        let after = (rotated - center).norm();
        assert!(
            (before - after).abs() < TOL * before.max(1.0),
            "p={:?} center={:?} before={} after={}",
            p,
            center,
            before,
            after
        );
    }
}

#[test]
fn test_zero_rotation_is_identity() {
    let mut rng = StdRng::seed_from_u64(7);
    let m = RotationMatrix::from_euler(0.0, 0.0, 0.0);
    for _ in 0..200 {
        let p = random_vec(&mut rng, 50.0);
        let c = random_vec(&mut rng, 50.0);
        let q = rotate_point(p, &m, c);
        assert!((q - p).norm() < TOL, "p={:?} q={:?}", p, q);
    }
}

#[test]
fn test_half_turn_about_y_twice_restores_field() {
    let mut rng = StdRng::seed_from_u64(31);
    let mut field = StarField::generate(150, 30.0, &mut rng).unwrap();
    let original: Vec<Vec3> = field.stars().iter().map(|s| s.position).collect();

    let half_turn = RotationMatrix::from_euler(0.0, std::f64::consts::PI, 0.0);
    field.rotate(&half_turn);
    field.rotate(&half_turn);

    for (star, before) in field.stars().iter().zip(&original) {
        assert!((star.position - *before).norm() < 1e-9);
    }
}

#[test]
fn test_many_small_steps_keep_radius() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut points: Vec<Vec3> = (0..50).map(|_| random_vec(&mut rng, 30.0)).collect();
    let radii: Vec<f64> = points.iter().map(|p| p.norm()).collect();

    let step = RotationMatrix::from_euler(0.1, -0.1, 0.1);
    for _ in 0..10_000 {
        rotate(points.iter_mut(), &step, Vec3::ZERO);
    }

    for (p, r) in points.iter().zip(&radii) {
        assert!((p.norm() - r).abs() < 1e-6);
    }
}

#[test]
fn test_stars_and_player_share_the_pivot() {
    let info = StarInfo::generate(&mut StdRng::seed_from_u64(1));
    let shared = Vec3::new(4.0, -2.0, 7.0);
    let mut field = StarField::from_stars(
        vec![Star {
            position: shared,
            info,
        }],
        30.0,
    )
    .unwrap();
    let mut player = star_cartographer::core::TrackedPoint::new(shared);

    let m = RotationMatrix::from_euler(0.3, 1.2, -0.7);
    field.rotate(&m);
    player.rotate(&m, field.center());

    assert_eq!(field.stars()[0].position, player.position);
}
