use crate::types::{Point3, Polyline};
use glam::Vec3;

/// The generator's output: polylines for drawing plus optional anchor
/// points (somas, trunk starts) for markers.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NeuronGeometry {
    pub polylines: Vec<Polyline>,
    pub anchors: Vec<Point3>,
}

impl NeuronGeometry {
    pub fn new(polylines: Vec<Polyline>, anchors: Vec<Point3>) -> Self {
        Self { polylines, anchors }
    }

    /// Appends another geometry's polylines and anchors after this one's.
    pub fn extend(&mut self, other: NeuronGeometry) {
        self.polylines.extend(other.polylines);
        self.anchors.extend(other.anchors);
    }

    pub fn len(&self) -> usize {
        self.polylines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polylines.is_empty()
    }

    pub fn point_count(&self) -> usize {
        point_count(&self.polylines)
    }

    /// Axis-aligned bounds over all polyline points and anchors, or `None`
    /// if there are no points at all.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        self.polylines
            .iter()
            .flatten()
            .chain(self.anchors.iter())
            .fold(None, |acc, &p| match acc {
                None => Some((p, p)),
                Some((min, max)) => Some((min.min(p), max.max(p))),
            })
    }
}

/// Total number of points across `segs`.
pub fn point_count(segs: &[Polyline]) -> usize {
    segs.iter().map(Vec::len).sum()
}

/// The point at index `len / 2`, or `None` for an empty polyline.
pub fn polyline_midpoint(pts: &Polyline) -> Option<Point3> {
    pts.get(pts.len() / 2).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(n: usize) -> Polyline {
        (0..n).map(|i| Vec3::new(i as f32, 0.0, 0.0)).collect()
    }

    #[test]
    fn point_count_sums_all_polylines() {
        let geo = NeuronGeometry::new(vec![line(3), line(1), line(5)], Vec::new());
        assert_eq!(geo.len(), 3);
        assert_eq!(geo.point_count(), 9);
    }

    #[test]
    fn bounds_cover_points_and_anchors() {
        let geo = NeuronGeometry::new(
            vec![vec![Vec3::new(1.0, 2.0, 3.0), Vec3::new(-1.0, 5.0, 0.0)]],
            vec![Vec3::new(0.0, -4.0, 9.0)],
        );
        assert_eq!(
            geo.bounds(),
            Some((Vec3::new(-1.0, -4.0, 0.0), Vec3::new(1.0, 5.0, 9.0)))
        );
    }

    #[test]
    fn empty_geometry_has_no_bounds() {
        let geo = NeuronGeometry::default();
        assert!(geo.is_empty());
        assert_eq!(geo.bounds(), None);
    }

    #[test]
    fn extend_appends_in_order() {
        let mut a = NeuronGeometry::new(vec![line(2)], vec![Vec3::ZERO]);
        let b = NeuronGeometry::new(vec![line(4)], vec![Vec3::ONE]);
        a.extend(b);
        assert_eq!(a.polylines, vec![line(2), line(4)]);
        assert_eq!(a.anchors, vec![Vec3::ZERO, Vec3::ONE]);
    }

    #[test]
    fn midpoint_uses_lower_middle_index() {
        assert_eq!(polyline_midpoint(&line(96)), Some(Vec3::new(48.0, 0.0, 0.0)));
        assert_eq!(polyline_midpoint(&line(5)), Some(Vec3::new(2.0, 0.0, 0.0)));
        assert_eq!(polyline_midpoint(&Vec::new()), None);
    }
}
