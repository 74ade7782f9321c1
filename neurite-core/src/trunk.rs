use crate::{
    config::TrunkParams,
    noise,
    types::{Direction, Point3, Polyline},
    vector::unit,
};
use rand::Rng;

/// Grows a single unbranched path by a persistent random walk.
///
/// Each step applies [`noise::transverse`] to the heading and advances by
/// `params.step` along it. The start point is always emitted, so the
/// result holds `steps + 1` points.
pub fn grow_trunk(
    start: Point3,
    direction: Direction,
    steps: usize,
    params: &TrunkParams,
    rng: &mut impl Rng,
) -> Polyline {
    let mut pts = Vec::with_capacity(steps + 1);
    pts.push(start);

    let mut pos = start;
    let mut d = unit(direction);
    for _ in 0..steps {
        d = noise::transverse(d, params.sigma, rng);
        pos += params.step * d;
        pts.push(pos);
    }
    pts
}
