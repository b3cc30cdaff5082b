use super::intersect_2d::{segments_intersect, Edge2};
use super::{Point2, Vector2, EPSILON};

/// Offset from the rightmost polygon vertex to the ray-casting probe.
///
/// The `y` nudge keeps the probe ray off horizontal polygon edges.
pub const PROBE_OFFSET: Vector2 = Vector2::new(1.0, 0.01);

/// Three-way relation between a point and a closed polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointClass {
    /// Strictly inside by the parity rule.
    Inside,
    /// Within [`EPSILON`] of a polygon edge.
    OnEdge,
    /// Outside the polygon.
    Outside,
}

/// Iterates the closed edges of a polygon, last vertex wrapping to the first.
fn polygon_edges(polygon: &[Point2]) -> impl Iterator<Item = Edge2> + '_ {
    let n = polygon.len();
    (0..n).map(move |i| Edge2::new(polygon[i], polygon[(i + 1) % n]))
}

/// Returns `true` if `point` is inside `polygon` by ray-casting parity.
///
/// The polygon is an ordered closed loop (either winding). The probe is
/// placed at the rightmost vertex plus [`PROBE_OFFSET`]. Points exactly on an
/// edge, or rays that graze a vertex, may be misclassified; use
/// [`classify_point`] when the boundary matters.
#[must_use]
pub fn point_in_polygon(polygon: &[Point2], point: &Point2) -> bool {
    point_in_polygon_with_probe(polygon, point, &PROBE_OFFSET)
}

/// [`point_in_polygon`] with an explicit probe offset from the rightmost
/// vertex. `offset.x` must be positive for the probe to stay outside.
#[must_use]
pub fn point_in_polygon_with_probe(polygon: &[Point2], point: &Point2, offset: &Vector2) -> bool {
    let Some(rightmost) = polygon
        .iter()
        .copied()
        .reduce(|best, p| if p.x > best.x { p } else { best })
    else {
        return false;
    };

    let ray = Edge2::new(*point, rightmost + *offset);
    let crossings = polygon_edges(polygon)
        .filter(|edge| segments_intersect(&ray, edge, true))
        .count();

    crossings % 2 == 1
}

/// Distance from `point` to the segment `edge`.
fn distance_to_edge(point: &Point2, edge: &Edge2) -> f64 {
    let d = edge.p2 - edge.p1;
    let len_sq = d.norm_squared();
    if len_sq < EPSILON * EPSILON {
        return (point - edge.p1).norm();
    }
    let t = ((point - edge.p1).dot(&d) / len_sq).clamp(0.0, 1.0);
    (point - (edge.p1 + d * t)).norm()
}

/// Classifies `point` against `polygon`, separating the boundary case that
/// [`point_in_polygon`] folds into inside or outside.
#[must_use]
pub fn classify_point(polygon: &[Point2], point: &Point2) -> PointClass {
    if polygon_edges(polygon).any(|edge| distance_to_edge(point, &edge) <= EPSILON) {
        PointClass::OnEdge
    } else if point_in_polygon(polygon, point) {
        PointClass::Inside
    } else {
        PointClass::Outside
    }
}
