//! Heading perturbation for the growers.
//!
//! Both variants draw one standard-normal triple from the supplied
//! generator and return a re-normalized heading. They differ only in
//! whether the forward component of the draw is removed first.

use crate::{
    types::Direction,
    vector::{standard_normal3, unit},
};
use rand::Rng;

/// Perturbs `d` within the plane orthogonal to it.
///
/// The draw `r` has its component along `d` projected out before being
/// scaled by `sigma`, so the heading wobbles sideways but never loses
/// forward progress. Used by [`crate::trunk::grow_trunk`].
///
/// ### Parameters
/// - `d` - Current heading, expected to be unit length.
/// - `sigma` - Wobble magnitude. `0.0` returns `d` re-normalized.
/// - `rng` - Generator; exactly three normal draws are consumed.
///
/// ### Returns
/// The new heading.
pub fn transverse(d: Direction, sigma: f32, rng: &mut impl Rng) -> Direction {
    let mut r = standard_normal3(rng);
    r -= r.dot(d) * d;
    unit(d + sigma * r)
}

/// Perturbs `d` in all directions with magnitude `angle_std`.
///
/// Unlike [`transverse`] nothing is projected out, so large magnitudes can
/// turn the heading backwards. Branches keep this asymmetry for their more
/// tortuous look.
pub fn isotropic(d: Direction, angle_std: f32, rng: &mut impl Rng) -> Direction {
    unit(d + angle_std * standard_normal3(rng))
}
