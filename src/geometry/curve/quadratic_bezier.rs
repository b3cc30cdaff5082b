use crate::error::{GeometryError, Result};
use crate::math::{Point2, Vector2, EPSILON};

use super::{Curve, CurveDomain};

/// A quadratic Bezier curve.
///
/// `P(t) = (1-t)^2 p0 + 2(1-t)t p1 + t^2 p2` for `t` in `[0, 1]`. The curve
/// lies inside the triangle of its control points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticBezier {
    /// Start point.
    pub p0: Point2,
    /// Control point.
    pub p1: Point2,
    /// End point.
    pub p2: Point2,
}

impl QuadraticBezier {
    /// Creates a curve from its three control points.
    #[must_use]
    pub fn new(p0: Point2, p1: Point2, p2: Point2) -> Self {
        Self { p0, p1, p2 }
    }

    /// Builds a curve from a control point list.
    ///
    /// Returns `None` for fewer than 3 points. Extra points beyond the third
    /// are ignored, since only degree 2 is supported.
    #[must_use]
    pub fn from_control_points(points: &[Point2]) -> Option<Self> {
        match points {
            [p0, p1, p2] => Some(Self::new(*p0, *p1, *p2)),
            [p0, p1, p2, ..] => {
                tracing::warn!(
                    count = points.len(),
                    "only 3 control points are used for a quadratic curve; truncating"
                );
                Some(Self::new(*p0, *p1, *p2))
            }
            _ => {
                tracing::warn!(count = points.len(), "a quadratic curve needs 3 control points");
                None
            }
        }
    }

    /// Control points in order.
    #[must_use]
    pub fn control_points(&self) -> [Point2; 3] {
        [self.p0, self.p1, self.p2]
    }

    /// Evaluates without a domain check.
    #[must_use]
    pub(crate) fn point_at(&self, t: f64) -> Point2 {
        let u = 1.0 - t;
        let a = u * u;
        let b = 2.0 * u * t;
        let c = t * t;
        Point2::new(
            a * self.p0.x + b * self.p1.x + c * self.p2.x,
            a * self.p0.y + b * self.p1.y + c * self.p2.y,
        )
    }

    fn check_param(&self, t: f64) -> Result<()> {
        let domain = self.domain();
        if domain.contains(t) {
            Ok(())
        } else {
            Err(GeometryError::ParameterOutOfRange {
                parameter: "t",
                value: t,
                min: domain.t_min,
                max: domain.t_max,
            }
            .into())
        }
    }
}

impl Curve for QuadraticBezier {
    fn evaluate(&self, t: f64) -> Result<Point2> {
        self.check_param(t)?;
        Ok(self.point_at(t))
    }

    fn tangent(&self, t: f64) -> Result<Vector2> {
        self.check_param(t)?;
        let d = (self.p1 - self.p0) * (2.0 * (1.0 - t)) + (self.p2 - self.p1) * (2.0 * t);
        if d.norm() < EPSILON {
            return Err(GeometryError::Degenerate(format!("zero tangent at t = {t}")).into());
        }
        Ok(d)
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, 1.0)
    }

    fn is_closed(&self) -> bool {
        false
    }
}
