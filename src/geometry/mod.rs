pub mod curve;
pub mod intersection_set;

pub use curve::{Curve, CurveDomain, QuadraticBezier};
pub use intersection_set::IntersectionSet;
