use crate::{
    config::BranchParams,
    noise,
    types::{Direction, Point3, Polyline, Seed},
    vector::unit,
};
use rand::Rng;

/// Grows one branch and collects the seeds it sheds along the way.
///
/// The walk is the same as [`crate::trunk::grow_trunk`] but with
/// [`noise::isotropic`] steering. After each step a uniform draw below
/// `params.branch_prob` emits a [`Seed`] at the new position, heading off
/// the current heading by `params.seed_jitter`, with a budget of
/// `floor(steps * params.seed_budget_fraction)`. The budget is taken from
/// the original `steps`, not from what is left of the walk.
///
/// ### Parameters
/// - `start` - Attachment point; first point of the returned polyline.
/// - `direction` - Initial heading, normalized before use.
/// - `steps` - Number of steps to take.
/// - `params` - Step length, noise and spawning settings.
/// - `rng` - Generator, consumed per step as: heading noise, spawn
///   draw, then seed direction noise if a seed was emitted.
///
/// ### Returns
/// The polyline (`steps + 1` points) and the seeds in emission order.
pub fn grow_branch(
    start: Point3,
    direction: Direction,
    steps: usize,
    params: &BranchParams,
    rng: &mut impl Rng,
) -> (Polyline, Vec<Seed>) {
    let mut pts = Vec::with_capacity(steps + 1);
    pts.push(start);
    let mut seeds = Vec::new();

    let remaining_steps = (steps as f32 * params.seed_budget_fraction) as usize;

    let mut pos = start;
    let mut d = unit(direction);
    for _ in 0..steps {
        d = noise::isotropic(d, params.angle_std, rng);
        pos += params.step * d;
        pts.push(pos);

        if rng.random::<f32>() < params.branch_prob {
            seeds.push(Seed {
                origin: pos,
                direction: noise::isotropic(d, params.seed_jitter, rng),
                remaining_steps,
            });
        }
    }

    (pts, seeds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn branch_has_steps_plus_one_points_starting_at_start() {
        let mut rng = StdRng::seed_from_u64(1);
        let start = Vec3::new(1.0, 2.0, 3.0);

        let (pts, _) = grow_branch(start, Vec3::Z, 60, &BranchParams::default(), &mut rng);

        assert_eq!(pts.len(), 61);
        assert_eq!(pts[0], start);
    }

    #[test]
    fn zero_steps_yield_only_the_start_point() {
        let mut rng = StdRng::seed_from_u64(2);
        let (pts, seeds) = grow_branch(Vec3::ONE, Vec3::X, 0, &BranchParams::default(), &mut rng);
        assert_eq!(pts, vec![Vec3::ONE]);
        assert!(seeds.is_empty());
    }

    #[test]
    fn certain_spawning_emits_a_seed_at_every_step() {
        let mut rng = StdRng::seed_from_u64(3);
        let params = BranchParams {
            branch_prob: 1.0,
            ..BranchParams::default()
        };

        let (pts, seeds) = grow_branch(Vec3::ZERO, Vec3::Y, 20, &params, &mut rng);

        assert_eq!(seeds.len(), 20);
        for (i, seed) in seeds.iter().enumerate() {
            assert_eq!(seed.origin, pts[i + 1]);
            assert_eq!(seed.remaining_steps, 11);
            assert!((seed.direction.length() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn zero_probability_never_spawns() {
        let mut rng = StdRng::seed_from_u64(4);
        let params = BranchParams {
            branch_prob: 0.0,
            ..BranchParams::default()
        };

        let (_, seeds) = grow_branch(Vec3::ZERO, Vec3::Y, 500, &params, &mut rng);

        assert!(seeds.is_empty());
    }

    #[test]
    fn seed_budget_is_strictly_smaller_than_parent() {
        let mut rng = StdRng::seed_from_u64(5);
        let params = BranchParams {
            branch_prob: 0.5,
            ..BranchParams::default()
        };

        for steps in [1, 5, 9, 90] {
            let (_, seeds) = grow_branch(Vec3::ZERO, Vec3::X, steps, &params, &mut rng);
            for seed in seeds {
                assert_eq!(seed.remaining_steps, (steps as f32 * 0.55) as usize);
                assert!(seed.remaining_steps < steps);
            }
        }
    }

    #[test]
    fn same_seed_reproduces_branch_and_seeds() {
        let params = BranchParams::default();
        let mut a = StdRng::seed_from_u64(6);
        let mut b = StdRng::seed_from_u64(6);

        let first = grow_branch(Vec3::ZERO, Vec3::X, 80, &params, &mut a);
        let second = grow_branch(Vec3::ZERO, Vec3::X, 80, &params, &mut b);

        assert_eq!(first, second);
    }
}
