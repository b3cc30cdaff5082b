mod sample_curve;

pub use sample_curve::{sample_control_points, SampleCurve};

use crate::math::Point2;

/// Parameters controlling curve sampling.
#[derive(Debug, Clone, Copy)]
pub struct SampleParams {
    /// Parametric increment between consecutive samples, in `(0, 1]`.
    pub step: f64,
}

impl Default for SampleParams {
    fn default() -> Self {
        Self { step: 0.01 }
    }
}

impl SampleParams {
    /// Parameters with the given step.
    #[must_use]
    pub fn with_step(step: f64) -> Self {
        Self { step }
    }
}

/// A polyline approximation of a curve.
#[derive(Debug, Clone, Default)]
pub struct Polyline {
    /// The ordered vertices of the polyline.
    pub points: Vec<Point2>,
}
