mod bezier_intersect;
mod intersect;
mod overlap;

pub use bezier_intersect::BezierBezierIntersect;
pub use intersect::{intersect, CurveCurveIntersect, SearchStats};
pub use overlap::overlaps;
