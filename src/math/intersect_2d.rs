use super::{Point2, EPSILON};

/// A directed segment between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge2 {
    /// Start point.
    pub p1: Point2,
    /// End point.
    pub p2: Point2,
}

impl Edge2 {
    /// Creates a new edge from `p1` to `p2`.
    #[must_use]
    pub fn new(p1: Point2, p2: Point2) -> Self {
        Self { p1, p2 }
    }
}

/// Segment parameters `(u_a, u_b)` of the crossing of the lines through `a`
/// and `b`, or `None` when the lines are parallel within [`EPSILON`].
fn crossing_params(a: &Edge2, b: &Edge2) -> Option<(f64, f64)> {
    let denom = (b.p2.y - b.p1.y) * (a.p2.x - a.p1.x) - (b.p2.x - b.p1.x) * (a.p2.y - a.p1.y);
    if denom.abs() < EPSILON {
        return None;
    }
    let u_a = ((b.p2.x - b.p1.x) * (a.p1.y - b.p1.y) - (b.p2.y - b.p1.y) * (a.p1.x - b.p1.x))
        / denom;
    let u_b = ((a.p2.x - a.p1.x) * (a.p1.y - b.p1.y) - (a.p2.y - a.p1.y) * (a.p1.x - b.p1.x))
        / denom;
    Some((u_a, u_b))
}

fn params_in_range(u_a: f64, u_b: f64, include_endpoints: bool) -> bool {
    if include_endpoints {
        let zero = -EPSILON;
        let one = 1.0 + EPSILON;
        (zero..=one).contains(&u_a) && (zero..=one).contains(&u_b)
    } else {
        let zero = EPSILON;
        let one = 1.0 - EPSILON;
        u_a > zero && u_a < one && u_b > zero && u_b < one
    }
}

/// Returns `true` if segments `a` and `b` intersect.
///
/// With `include_endpoints` the parameter window is `[0, 1]` widened by
/// [`EPSILON`]; without it the window is `(0, 1)` narrowed by [`EPSILON`].
/// Parallel and collinear segments never intersect, even when they overlap.
#[must_use]
pub fn segments_intersect(a: &Edge2, b: &Edge2, include_endpoints: bool) -> bool {
    crossing_params(a, b).is_some_and(|(u_a, u_b)| params_in_range(u_a, u_b, include_endpoints))
}

/// Coordinate of the crossing of the lines through `a` and `b`.
///
/// Only meaningful when [`segments_intersect`] holds. Returns `None` for
/// parallel segments instead of a non-finite point.
#[must_use]
pub fn segment_intersection_point(a: &Edge2, b: &Edge2) -> Option<Point2> {
    crossing_params(a, b).map(|(u_a, _)| a.p1 + (a.p2 - a.p1) * u_a)
}

/// Bounded segment-segment intersection: the crossing point if the segments
/// intersect under the same rules as [`segments_intersect`].
#[must_use]
pub fn segment_intersection(a: &Edge2, b: &Edge2, include_endpoints: bool) -> Option<Point2> {
    let (u_a, u_b) = crossing_params(a, b)?;
    params_in_range(u_a, u_b, include_endpoints).then(|| a.p1 + (a.p2 - a.p1) * u_a)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn edge(x1: f64, y1: f64, x2: f64, y2: f64) -> Edge2 {
        Edge2::new(Point2::new(x1, y1), Point2::new(x2, y2))
    }

    #[test]
    fn crossing_diagonals() {
        let a = edge(0.0, 0.0, 1.0, 1.0);
        let b = edge(0.0, 1.0, 1.0, 0.0);
        assert!(segments_intersect(&a, &b, true));
        assert!(segments_intersect(&a, &b, false));
        let p = segment_intersection_point(&a, &b).unwrap();
        assert_relative_eq!(p, Point2::new(0.5, 0.5), epsilon = 1e-12);
    }

    #[test]
    fn disjoint_segments() {
        let a = edge(0.0, 0.0, 1.0, 0.0);
        let b = edge(3.0, 1.0, 3.0, 2.0);
        assert!(!segments_intersect(&a, &b, true));
        assert!(segment_intersection(&a, &b, true).is_none());
        // The supporting lines still cross.
        let p = segment_intersection_point(&a, &b).unwrap();
        assert_relative_eq!(p, Point2::new(3.0, 0.0), epsilon = 1e-12);
    }

    #[test]
    fn shared_endpoint_depends_on_flag() {
        let a = edge(0.0, 0.0, 1.0, 1.0);
        let b = edge(1.0, 1.0, 2.0, 0.0);
        assert!(segments_intersect(&a, &b, true));
        assert!(!segments_intersect(&a, &b, false));
        let p = segment_intersection(&a, &b, true).unwrap();
        assert_relative_eq!(p, Point2::new(1.0, 1.0), epsilon = 1e-12);
    }

    #[test]
    fn t_junction_within_tolerance() {
        let a = edge(0.0, 0.0, 2.0, 0.0);
        let b = edge(1.0, 1.0, 1.0, 0.0);
        assert!(segments_intersect(&a, &b, true));
        assert!(!segments_intersect(&a, &b, false));
    }

    #[test]
    fn parallel_segments_never_intersect() {
        let a = edge(0.0, 0.0, 1.0, 0.0);
        let b = edge(0.0, 1.0, 1.0, 1.0);
        assert!(!segments_intersect(&a, &b, true));
        assert!(segment_intersection_point(&a, &b).is_none());
    }

    #[test]
    fn collinear_overlap_is_not_reported() {
        let a = edge(0.0, 0.0, 2.0, 0.0);
        let b = edge(1.0, 0.0, 3.0, 0.0);
        assert!(!segments_intersect(&a, &b, true));
        assert!(segment_intersection(&a, &b, true).is_none());
    }

    #[test]
    fn near_parallel_below_epsilon() {
        // denom = 1e-6 * 1.0, below EPSILON.
        let a = edge(0.0, 0.0, 1.0, 0.0);
        let b = edge(0.0, -0.5, 1.0, -0.5 + 1e-6);
        assert!(!segments_intersect(&a, &b, true));
    }
}
