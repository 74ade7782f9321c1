use glam::Vec3;

/// A point in 3-D space.
pub type Point3 = Vec3;

/// A growth heading. Unit length by convention; [`crate::vector::unit`]
/// leaves near-zero vectors untouched, so this is not enforced.
pub type Direction = Vec3;

/// One continuous unbranched growth path, attachment point first and tip
/// last. Always holds at least one point.
pub type Polyline = Vec<Point3>;

/// All polylines produced by one [`crate::tree::expand_branch`] call.
pub type BranchTree = Vec<Polyline>;

/// A deferred branch start emitted mid-growth by
/// [`crate::branch::grow_branch`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Seed {
    pub origin: Point3,
    pub direction: Direction,
    pub remaining_steps: usize,
}
