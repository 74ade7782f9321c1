use crate::types::Polyline;

/// Keeps the first `floor(len * keep_fraction)` polylines.
///
/// Whole polylines are dropped from the end; kept ones are cloned in their
/// original order and the input is left untouched. Fractions above one
/// keep everything, while negative or NaN fractions keep nothing.
pub fn prune(segs: &[Polyline], keep_fraction: f32) -> Vec<Polyline> {
    let n = (segs.len() as f32 * keep_fraction) as usize;
    let kept = segs[..n.min(segs.len())].to_vec();
    log::debug!("[PRUNE] kept {} of {} polylines", kept.len(), segs.len());
    kept
}
