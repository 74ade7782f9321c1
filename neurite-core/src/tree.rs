use crate::{
    branch::grow_branch,
    config::ExpandParams,
    noise,
    types::{BranchTree, Direction, Point3},
};
use rand::Rng;

/// Grows a depth-limited dendritic subtree rooted at `start`.
///
/// Returns nothing when `depth` is zero or `steps` is below
/// `params.min_steps`; a terminated call never leaves a stub behind.
/// Otherwise one branch is grown with `params.branch`, and at most
/// `params.max_children` of its seeds (the earliest ones) are expanded one
/// level shallower. Each followed seed gets `params.entry_jitter` of extra
/// isotropic noise on top of the jitter already in its direction.
///
/// The branch's own polyline comes first, followed by each child subtree
/// in seed order (depth-first). With the default fan-out of two the
/// result holds at most `2^depth - 1` polylines.
pub fn expand_branch(
    start: Point3,
    direction: Direction,
    steps: usize,
    depth: usize,
    params: &ExpandParams,
    rng: &mut impl Rng,
) -> BranchTree {
    if depth == 0 || steps < params.min_steps {
        return Vec::new();
    }

    let (pts, seeds) = grow_branch(start, direction, steps, &params.branch, rng);
    log::trace!(
        "[EXPAND] depth {}: {} steps, {} seeds ({} followed)",
        depth,
        steps,
        seeds.len(),
        seeds.len().min(params.max_children)
    );

    let mut segs = vec![pts];
    for seed in seeds.into_iter().take(params.max_children) {
        let dir = noise::isotropic(seed.direction, params.entry_jitter, rng);
        segs.extend(expand_branch(
            seed.origin,
            dir,
            seed.remaining_steps,
            depth - 1,
            params,
            rng,
        ));
    }
    segs
}
