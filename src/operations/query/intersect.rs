use crate::error::{GeometryError, OperationError, Result};
use crate::geometry::IntersectionSet;
use crate::math::Point2;

use super::overlap::overlaps;

/// Counters collected during one subdivision search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Number of overlap evaluations.
    pub overlap_tests: usize,
    /// Branches cut because their ranges did not overlap.
    pub pruned: usize,
    /// Deepest recursion level reached; the root call is level 0.
    pub max_depth: usize,
}

/// Inclusive index range `[left, right]` with `left <= right`.
#[derive(Debug, Clone, Copy)]
struct IndexRange {
    left: usize,
    right: usize,
}

impl IndexRange {
    fn is_single(self) -> bool {
        self.left == self.right
    }

    /// Splits at `mid = left + (right - left) / 2` into `[left, mid]` and
    /// `[mid + 1, right]`; the second half is absent for a single index.
    fn halves(self) -> (Self, Option<Self>) {
        let mid = self.left + (self.right - self.left) / 2;
        let first = Self {
            left: self.left,
            right: mid,
        };
        let second = (mid < self.right).then_some(Self {
            left: mid + 1,
            right: self.right,
        });
        (first, second)
    }

    fn slice(self, points: &[Point2]) -> &[Point2] {
        &points[self.left..=self.right]
    }
}

struct Subdivision<'a> {
    seq1: &'a [Point2],
    seq2: &'a [Point2],
    out: &'a mut IntersectionSet,
    stats: SearchStats,
}

impl Subdivision<'_> {
    fn search(&mut self, r1: IndexRange, r2: IndexRange, depth: usize) {
        self.stats.overlap_tests += 1;
        self.stats.max_depth = self.stats.max_depth.max(depth);

        if !overlaps(r1.slice(self.seq1), r2.slice(self.seq2), self.out) {
            self.stats.pruned += 1;
            return;
        }
        // Two single points cannot be narrowed further.
        if r1.is_single() && r2.is_single() {
            return;
        }

        let (a1, b1) = r1.halves();
        let (a2, b2) = r2.halves();
        for h1 in [Some(a1), b1].into_iter().flatten() {
            for h2 in [Some(a2), b2].into_iter().flatten() {
                self.search(h1, h2, depth + 1);
            }
        }
    }
}

fn check_range(points: &[Point2], left: usize, right: usize) -> Result<IndexRange> {
    if points.len() < 2 {
        return Err(OperationError::InvalidInput(format!(
            "at least 2 points are required per curve, got {}",
            points.len()
        ))
        .into());
    }
    if left > right || right >= points.len() {
        return Err(GeometryError::InvalidRange {
            left,
            right,
            len: points.len(),
        }
        .into());
    }
    Ok(IndexRange { left, right })
}

/// Finds the intersections of the sub-polylines `seq1[left1..=right1]` and
/// `seq2[left2..=right2]` by recursive subdivision, adding them to `out`.
///
/// A pair of ranges is discarded as soon as [`overlaps`] rejects it.
/// Otherwise both ranges are halved and all four pairings of halves are
/// searched. A branch ends when both ranges are down to a single index.
///
/// # Errors
///
/// - `OperationError::InvalidInput` if either sequence has fewer than 2 points
/// - `GeometryError::InvalidRange` if a range is reversed or out of bounds
pub fn intersect(
    seq1: &[Point2],
    left1: usize,
    right1: usize,
    seq2: &[Point2],
    left2: usize,
    right2: usize,
    out: &mut IntersectionSet,
) -> Result<SearchStats> {
    let r1 = check_range(seq1, left1, right1)?;
    let r2 = check_range(seq2, left2, right2)?;

    let found_before = out.len();
    tracing::debug!(
        range1 = ?(left1, right1),
        range2 = ?(left2, right2),
        "subdivision search started"
    );

    let mut search = Subdivision {
        seq1,
        seq2,
        out: &mut *out,
        stats: SearchStats::default(),
    };
    search.search(r1, r2, 0);
    let stats = search.stats;

    tracing::debug!(
        found = out.len() - found_before,
        overlap_tests = stats.overlap_tests,
        pruned = stats.pruned,
        max_depth = stats.max_depth,
        "subdivision search finished"
    );
    Ok(stats)
}

/// Intersects two sampled curves over their full index ranges.
#[derive(Debug)]
pub struct CurveCurveIntersect {
    curve_a: Vec<Point2>,
    curve_b: Vec<Point2>,
}

impl CurveCurveIntersect {
    /// Creates a new `CurveCurveIntersect` query over two polylines.
    #[must_use]
    pub fn new(curve_a: Vec<Point2>, curve_b: Vec<Point2>) -> Self {
        Self { curve_a, curve_b }
    }

    /// Executes the query, returning the deduplicated intersection points.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if either polyline has fewer
    /// than 2 points.
    pub fn execute(&self) -> Result<IntersectionSet> {
        let mut out = IntersectionSet::new();
        self.execute_into(&mut out)?;
        Ok(out)
    }

    /// Executes the query, adding the points to `out` and returning the
    /// search counters.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::InvalidInput` if either polyline has fewer
    /// than 2 points.
    pub fn execute_into(&self, out: &mut IntersectionSet) -> Result<SearchStats> {
        intersect(
            &self.curve_a,
            0,
            self.curve_a.len().saturating_sub(1),
            &self.curve_b,
            0,
            self.curve_b.len().saturating_sub(1),
            out,
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::QuadsectError;

    #[allow(clippy::cast_precision_loss)]
    fn hump(samples: usize) -> Vec<Point2> {
        (0..=samples)
            .map(|k| {
                let x = 2.0 * k as f64 / samples as f64;
                Point2::new(x, 2.0 * x - x * x)
            })
            .collect()
    }

    #[test]
    fn disjoint_segments_give_empty_set() {
        let a = vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)];
        let b = vec![Point2::new(0.0, 5.0), Point2::new(1.0, 5.0)];
        let set = CurveCurveIntersect::new(a, b).execute().unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn crossing_segments() {
        let a = vec![Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)];
        let b = vec![Point2::new(0.0, 1.0), Point2::new(1.0, 0.0)];
        let set = CurveCurveIntersect::new(a, b).execute().unwrap();
        assert_eq!(set.len(), 1);
        assert!(set.contains(&Point2::new(0.5, 0.5)));
    }

    #[test]
    fn identical_sequences_report_every_point() {
        let seq = hump(16);
        let set = CurveCurveIntersect::new(seq.clone(), seq.clone())
            .execute()
            .unwrap();
        for p in &seq {
            assert!(set.contains(p), "missing {p:?}");
        }
    }

    #[test]
    fn search_is_idempotent() {
        let a = hump(40);
        let b: Vec<Point2> = a.iter().map(|p| Point2::new(p.x, 1.5 - p.y)).collect();
        let query = CurveCurveIntersect::new(a, b);
        let first = query.execute().unwrap();
        let second = query.execute().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn sub_range_search() {
        let a = vec![
            Point2::new(10.0, 10.0),
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 1.0),
        ];
        let b = vec![Point2::new(0.0, 1.0), Point2::new(1.0, 0.0)];
        let mut out = IntersectionSet::new();
        let stats = intersect(&a, 1, 2, &b, 0, 1, &mut out).unwrap();
        assert!(out.contains(&Point2::new(0.5, 0.5)));
        assert!(stats.overlap_tests >= 1);
    }

    #[test]
    fn pruned_branches_are_counted() {
        let a = vec![Point2::new(0.0, 0.0), Point2::new(1.0, 0.0)];
        let b = vec![Point2::new(0.0, 5.0), Point2::new(1.0, 5.0)];
        let mut out = IntersectionSet::new();
        let stats = intersect(&a, 0, 1, &b, 0, 1, &mut out).unwrap();
        assert_eq!(
            stats,
            SearchStats {
                overlap_tests: 1,
                pruned: 1,
                max_depth: 0,
            }
        );
    }

    #[test]
    fn rejects_short_sequences() {
        let one = vec![Point2::new(0.0, 0.0)];
        let two = vec![Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)];
        let err = CurveCurveIntersect::new(one, two.clone()).execute().unwrap_err();
        assert!(matches!(err, QuadsectError::Operation(OperationError::InvalidInput(_))));
        assert!(CurveCurveIntersect::new(two, Vec::new()).execute().is_err());
    }

    #[test]
    fn rejects_bad_ranges() {
        let seq = hump(4);
        let mut out = IntersectionSet::new();
        let err = intersect(&seq, 3, 1, &seq, 0, 4, &mut out).unwrap_err();
        assert!(matches!(
            err,
            QuadsectError::Geometry(GeometryError::InvalidRange {
                left: 3,
                right: 1,
                len: 5
            })
        ));
        assert!(intersect(&seq, 0, 5, &seq, 0, 4, &mut out).is_err());
        assert!(out.is_empty());
    }
}
