//! Composition patterns that assemble whole neurons.
//!
//! Each pattern validates its configuration, then drives the growers with
//! its own starting conditions:
//! 1. [`dense_tree`] — many subtrees from one origin.
//! 2. [`pyramidal`] — a long trunk with a distal tuft plus basal branches.
//! 3. [`bundle`] — roughly parallel trunks from evenly spaced starts.
//! 4. [`prunable_tree`] — a tree paired with its soma, meant to be cut
//!    down with [`crate::prune::prune`].
//!
//! All draws come from the caller's generator in call order, so the same
//! generator state and configuration always give the same geometry.

use crate::{
    config::{BundleConfig, DenseConfig, PruningConfig, PyramidalConfig},
    error::{GrowthError, check_point},
    geometry::NeuronGeometry,
    tree::expand_branch,
    trunk::grow_trunk,
    types::Point3,
    vector::{linspace, standard_normal3, unit},
};
use glam::Vec3;
use rand::Rng;
use rand_distr::StandardNormal;

/// Grows `cfg.branch_count` independent subtrees from `origin`.
///
/// Each subtree starts in a uniformly random direction (a normalized
/// standard-normal draw), so together they form one dense, roughly
/// isotropic arbor.
///
/// ### Parameters
/// - `origin` - Shared root of all subtrees; reported as the only anchor.
/// - `cfg` - Subtree count, step budget, depth and expansion settings.
/// - `rng` - Generator for all directions and growth.
///
/// ### Returns
/// The concatenated subtrees, or a [`GrowthError`] if `origin` or `cfg`
/// is invalid.
pub fn dense_tree(
    origin: Point3,
    cfg: &DenseConfig,
    rng: &mut impl Rng,
) -> Result<NeuronGeometry, GrowthError> {
    check_point(origin)?;
    cfg.validate()?;

    let mut segs = Vec::new();
    for _ in 0..cfg.branch_count {
        let dir = unit(standard_normal3(rng));
        segs.extend(expand_branch(origin, dir, cfg.steps, cfg.depth, &cfg.expand, rng));
    }

    log::debug!(
        "[DENSE] {} subtrees -> {} polylines",
        cfg.branch_count,
        segs.len()
    );
    Ok(NeuronGeometry::new(segs, vec![origin]))
}

/// Grows a pyramidal form: trunk, apical tuft and basal branches.
///
/// 1. A trunk of `cfg.trunk_steps` steps along `cfg.trunk_heading`.
/// 2. For every `cfg.tuft_stride`-th point among the last
///    `cfg.tuft_window` trunk points, a subtree heading along the trunk
///    heading plus `cfg.tuft_jitter` noise.
/// 3. `cfg.basal_count` subtrees from `origin` heading
///    `[n, cfg.basal_drop, n]` (normal draws for x and z), i.e. sideways
///    and away from the trunk.
///
/// The trunk is the first polyline, then the tuft, then the basal
/// subtrees. `origin` is the only anchor.
pub fn pyramidal(
    origin: Point3,
    cfg: &PyramidalConfig,
    rng: &mut impl Rng,
) -> Result<NeuronGeometry, GrowthError> {
    check_point(origin)?;
    cfg.validate()?;

    let trunk = grow_trunk(origin, cfg.trunk_heading, cfg.trunk_steps, &cfg.trunk, rng);

    // Tuft points are taken from the distal end of the trunk.
    let first = trunk.len().saturating_sub(cfg.tuft_window);
    let tuft_points: Vec<Point3> = trunk[first..]
        .iter()
        .step_by(cfg.tuft_stride)
        .copied()
        .collect();

    let mut segs = vec![trunk];
    for p in &tuft_points {
        let dir = unit(cfg.trunk_heading + cfg.tuft_jitter * standard_normal3(rng));
        segs.extend(expand_branch(
            *p,
            dir,
            cfg.tuft_steps,
            cfg.tuft_depth,
            &cfg.expand,
            rng,
        ));
    }
    let tuft_end = segs.len();

    for _ in 0..cfg.basal_count {
        let x: f32 = rng.sample(StandardNormal);
        let z: f32 = rng.sample(StandardNormal);
        let dir = unit(Vec3::new(x, cfg.basal_drop, z));
        segs.extend(expand_branch(
            origin,
            dir,
            cfg.basal_steps,
            cfg.basal_depth,
            &cfg.expand,
            rng,
        ));
    }

    log::debug!(
        "[PYRAMIDAL] tuft {} points -> {} polylines, basal {} -> {} polylines",
        tuft_points.len(),
        tuft_end - 1,
        cfg.basal_count,
        segs.len() - tuft_end
    );
    Ok(NeuronGeometry::new(segs, vec![origin]))
}

/// Grows `cfg.count` roughly parallel trunks.
///
/// Trunk `i` starts at `(cfg.x, y_i, cfg.z)` where the `y_i` are evenly
/// spaced over `[cfg.y_min, cfg.y_max]`. Its heading is `cfg.heading`
/// with independent normal jitter on y (`cfg.lateral_jitter`) and z
/// (`cfg.vertical_jitter`), normalized.
///
/// ### Returns
/// One polyline per trunk, with the starting points as anchors in the
/// same order.
pub fn bundle(cfg: &BundleConfig, rng: &mut impl Rng) -> Result<NeuronGeometry, GrowthError> {
    cfg.validate()?;

    let mut cables = Vec::with_capacity(cfg.count);
    let mut somas = Vec::with_capacity(cfg.count);
    for y in linspace(cfg.y_min, cfg.y_max, cfg.count) {
        let soma = Vec3::new(cfg.x, y, cfg.z);
        somas.push(soma);

        let lateral: f32 = rng.sample(StandardNormal);
        let vertical: f32 = rng.sample(StandardNormal);
        let dir = unit(
            cfg.heading
                + Vec3::new(
                    0.0,
                    cfg.lateral_jitter * lateral,
                    cfg.vertical_jitter * vertical,
                ),
        );

        cables.push(grow_trunk(soma, dir, cfg.steps, &cfg.trunk, rng));
    }

    log::debug!("[BUNDLE] {} trunks of {} steps", cables.len(), cfg.steps);
    Ok(NeuronGeometry::new(cables, somas))
}

/// Grows `cfg.branch_count` subtrees from `cfg.origin`, anchored at that
/// origin, for comparison against a pruned copy.
pub fn prunable_tree(
    cfg: &PruningConfig,
    rng: &mut impl Rng,
) -> Result<NeuronGeometry, GrowthError> {
    cfg.validate()?;

    let mut segs = Vec::new();
    for _ in 0..cfg.branch_count {
        let dir = unit(standard_normal3(rng));
        segs.extend(expand_branch(
            cfg.origin,
            dir,
            cfg.steps,
            cfg.depth,
            &cfg.expand,
            rng,
        ));
    }

    log::debug!(
        "[PRUNABLE] {} subtrees -> {} polylines",
        cfg.branch_count,
        segs.len()
    );
    Ok(NeuronGeometry::new(segs, vec![cfg.origin]))
}
