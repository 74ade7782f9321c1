use crate::types::{Direction, Point3};
use glam::Vec3;
use rand::Rng;
use rand_distr::StandardNormal;

/// Magnitude below which [`unit`] gives up and returns its input.
pub const DEGENERATE_LENGTH: f32 = 1e-9;

/// Scales `v` to unit length.
///
/// Vectors shorter than [`DEGENERATE_LENGTH`] are returned unchanged, so
/// the result may be zero or non-unit. Growth loops rely on this to stay
/// total instead of dividing by a near-zero norm.
pub fn unit(v: Vec3) -> Direction {
    let n = v.length();
    if n < DEGENERATE_LENGTH { v } else { v / n }
}

/// Draws three independent standard-normal components, x then y then z.
pub fn standard_normal3(rng: &mut impl Rng) -> Vec3 {
    let x: f32 = rng.sample(StandardNormal);
    let y: f32 = rng.sample(StandardNormal);
    let z: f32 = rng.sample(StandardNormal);
    Vec3::new(x, y, z)
}

/// Returns `true` if every coordinate is finite.
#[inline]
pub fn is_finite_point(p: Point3) -> bool {
    p.is_finite()
}

/// `count` values evenly spaced over `[min, max]`, both ends included.
///
/// A single value sits at `min`; zero values yield an empty vector.
pub fn linspace(min: f32, max: f32, count: usize) -> Vec<f32> {
    match count {
        0 => Vec::new(),
        1 => vec![min],
        _ => {
            let span = (max - min) / (count - 1) as f32;
            (0..count)
                .map(|i| if i == count - 1 { max } else { min + span * i as f32 })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn unit_scales_to_unit_length() {
        let v = unit(Vec3::new(3.0, 4.0, 12.0));
        assert!((v.length() - 1.0).abs() < 1e-6);
        assert!((v.x - 3.0 / 13.0).abs() < 1e-6);
    }

    #[test]
    fn unit_returns_random_vectors_at_unit_length() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let r = standard_normal3(&mut rng);
            if r.length() > DEGENERATE_LENGTH {
                assert!((unit(r).length() - 1.0).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn unit_leaves_degenerate_vectors_untouched() {
        assert_eq!(unit(Vec3::ZERO), Vec3::ZERO);

        let tiny = Vec3::new(1e-10, 0.0, 0.0);
        assert_eq!(unit(tiny), tiny);
    }

    #[test]
    fn standard_normal3_is_reproducible_for_a_seed() {
        let mut a = StdRng::seed_from_u64(5);
        let mut b = StdRng::seed_from_u64(5);
        assert_eq!(standard_normal3(&mut a), standard_normal3(&mut b));
    }

    #[test]
    fn is_finite_point_rejects_nan_and_infinity() {
        assert!(is_finite_point(Vec3::new(1.0, -2.0, 3.0)));
        assert!(!is_finite_point(Vec3::new(f32::NAN, 0.0, 0.0)));
        assert!(!is_finite_point(Vec3::new(0.0, f32::INFINITY, 0.0)));
    }

    #[test]
    fn linspace_includes_both_ends() {
        let ys = linspace(140.0, 320.0, 7);
        assert_eq!(ys.len(), 7);
        assert_eq!(ys[0], 140.0);
        assert_eq!(ys[6], 320.0);
        for w in ys.windows(2) {
            assert!((w[1] - w[0] - 30.0).abs() < 1e-4);
        }
    }

    #[test]
    fn linspace_degenerate_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(2.0, 9.0, 1), vec![2.0]);
    }
}
