use std::collections::HashSet;

use crate::geometry::IntersectionSet;
use crate::math::intersect_2d::segment_intersection;
use crate::math::polygon_2d::point_in_polygon;
use crate::math::{Aabb2, Edge2, Point2, PointKey, EPSILON};

/// Decides whether two short point sequences overlap, recording the points
/// that witness it into `out`.
///
/// Each sequence is read as the closed polygon of its points, which stands
/// in for the convex hull of a short, near-convex stretch of curve. This is
/// an approximation, not a general hull-overlap test.
///
/// Checks, in order:
///
/// 1. Disjoint bounding boxes: no overlap.
/// 2. Two segments (both sequences have 2 points): if they intersect,
///    endpoints included, the crossing point is recorded.
/// 3. The first point of `curve2` inside the polygon of `curve1` is recorded.
/// 4. Vertex coincidence: every point present, by exact value, in both
///    sequences is recorded. This catches the boundary contact that ray
///    casting misses at shared vertices.
///
/// The first check that finds overlap ends the evaluation.
pub fn overlaps(curve1: &[Point2], curve2: &[Point2], out: &mut IntersectionSet) -> bool {
    let (Some(b1), Some(b2)) = (Aabb2::from_points(curve1), Aabb2::from_points(curve2)) else {
        return false;
    };
    // Each segment may reach EPSILON * extent past its box in the segment
    // test; the two reaches add up.
    let tol = EPSILON * (1.0 + b1.extent() + b2.extent());
    if !b1.intersects(&b2, tol) {
        return false;
    }

    if let ([a0, a1], [c0, c1]) = (curve1, curve2) {
        let a = Edge2::new(*a0, *a1);
        let c = Edge2::new(*c0, *c1);
        if let Some(p) = segment_intersection(&a, &c, true) {
            tracing::trace!(x = p.x, y = p.y, "segment crossing");
            out.insert(p);
            return true;
        }
    }

    if let Some(v) = curve2.iter().find(|v| point_in_polygon(curve1, v)) {
        out.insert(*v);
        return true;
    }

    record_shared_vertices(curve1, curve2, out)
}

/// Records every point of `curve2` that is also a point of `curve1`.
/// Returns `true` if there was at least one.
fn record_shared_vertices(curve1: &[Point2], curve2: &[Point2], out: &mut IntersectionSet) -> bool {
    let keys: HashSet<PointKey> = curve1.iter().map(PointKey::exact).collect();
    let mut found = false;
    for v in curve2 {
        if keys.contains(&PointKey::exact(v)) {
            out.insert(*v);
            found = true;
        }
    }
    found
}
