use crate::error::Result;
use crate::geometry::{IntersectionSet, QuadraticBezier};
use crate::tessellation::{SampleCurve, SampleParams};

use super::intersect::CurveCurveIntersect;

/// Intersects two quadratic Bezier curves.
///
/// Both curves are sampled with the same [`SampleParams`] and the resulting
/// polylines are searched with [`CurveCurveIntersect`]. The answer is only
/// as fine as the sampling step.
#[derive(Debug)]
pub struct BezierBezierIntersect {
    curve_a: QuadraticBezier,
    curve_b: QuadraticBezier,
    params: SampleParams,
}

impl BezierBezierIntersect {
    /// Creates a new `BezierBezierIntersect` query.
    #[must_use]
    pub fn new(curve_a: QuadraticBezier, curve_b: QuadraticBezier, params: SampleParams) -> Self {
        Self {
            curve_a,
            curve_b,
            params,
        }
    }

    /// Executes the query, returning the deduplicated intersection points.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ParameterOutOfRange` if the sampling step is
    /// not in `(0, 1]`.
    pub fn execute(&self) -> Result<IntersectionSet> {
        let a = SampleCurve::new(self.curve_a, self.params).execute()?;
        let b = SampleCurve::new(self.curve_b, self.params).execute()?;
        CurveCurveIntersect::new(a.points, b.points).execute()
    }
}
