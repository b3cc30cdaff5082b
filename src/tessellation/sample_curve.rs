use crate::error::{GeometryError, Result};
use crate::geometry::QuadraticBezier;
use crate::math::Point2;

use super::{Polyline, SampleParams};

/// Steps closer than this to the end of the domain are merged into `t = 1`.
const END_SLACK: f64 = 1e-4;

/// Samples a quadratic curve at a fixed parametric step.
#[derive(Debug)]
pub struct SampleCurve {
    curve: QuadraticBezier,
    params: SampleParams,
}

impl SampleCurve {
    /// Creates a new `SampleCurve` operation.
    #[must_use]
    pub fn new(curve: QuadraticBezier, params: SampleParams) -> Self {
        Self { curve, params }
    }

    /// Executes the sampling.
    ///
    /// Samples are taken at `t = k * step` and the last one is always at
    /// exactly `t = 1`, so the polyline spans the whole curve.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::ParameterOutOfRange` if `step` is not in `(0, 1]`.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    pub fn execute(&self) -> Result<Polyline> {
        let step = self.params.step;
        if !(step > 0.0 && step <= 1.0) {
            return Err(GeometryError::ParameterOutOfRange {
                parameter: "step",
                value: step,
                min: 0.0,
                max: 1.0,
            }
            .into());
        }

        // step is in (0, 1], so the count is finite and at least 1.
        let segments = ((1.0 - END_SLACK) / step).ceil().max(1.0) as usize;
        let points = (0..=segments)
            .map(|k| self.curve.point_at((k as f64 * step).min(1.0)))
            .collect();

        Ok(Polyline { points })
    }
}

/// Samples the curve given by raw control points.
///
/// Fewer than 3 control points yield an empty sequence; extra points past
/// the third are ignored.
///
/// # Errors
///
/// Returns `GeometryError::ParameterOutOfRange` if `params.step` is not in `(0, 1]`.
pub fn sample_control_points(points: &[Point2], params: SampleParams) -> Result<Vec<Point2>> {
    match QuadraticBezier::from_control_points(points) {
        Some(curve) => Ok(SampleCurve::new(curve, params).execute()?.points),
        None => Ok(Vec::new()),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    fn hump() -> QuadraticBezier {
        QuadraticBezier::new(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 2.0),
            Point2::new(2.0, 0.0),
        )
    }

    #[test]
    fn default_step_gives_101_samples() {
        let line = SampleCurve::new(hump(), SampleParams::default()).execute().unwrap();
        assert_eq!(line.points.len(), 101);
        assert_eq!(line.points[0], Point2::new(0.0, 0.0));
        assert_eq!(line.points[50], Point2::new(1.0, 1.0));
        assert_relative_eq!(line.points[100], Point2::new(2.0, 0.0));
    }

    #[test]
    fn uneven_step_ends_at_one() {
        let line = SampleCurve::new(hump(), SampleParams::with_step(0.3))
            .execute()
            .unwrap();
        // t = 0, 0.3, 0.6, 0.9, 1.0
        assert_eq!(line.points.len(), 5);
        assert_eq!(*line.points.last().unwrap(), Point2::new(2.0, 0.0));
    }

    #[test]
    fn whole_domain_step() {
        let line = SampleCurve::new(hump(), SampleParams::with_step(1.0))
            .execute()
            .unwrap();
        assert_eq!(line.points, vec![Point2::new(0.0, 0.0), Point2::new(2.0, 0.0)]);
    }

    #[test]
    fn invalid_step_is_rejected() {
        for step in [0.0, -0.1, 1.5, f64::NAN] {
            let result = SampleCurve::new(hump(), SampleParams::with_step(step)).execute();
            assert!(result.is_err(), "step {step}");
        }
    }

    #[test]
    fn control_point_contract() {
        let pts = [
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 2.0),
            Point2::new(2.0, 0.0),
            Point2::new(5.0, 5.0),
        ];
        let full = sample_control_points(&pts, SampleParams::default()).unwrap();
        let three = sample_control_points(&pts[..3], SampleParams::default()).unwrap();
        assert_eq!(full, three);
        assert!(sample_control_points(&pts[..2], SampleParams::default())
            .unwrap()
            .is_empty());
    }
}
