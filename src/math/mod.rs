pub mod bbox_2d;
pub mod intersect_2d;
pub mod point_key;
pub mod polygon_2d;

pub use bbox_2d::Aabb2;
pub use intersect_2d::Edge2;
pub use point_key::PointKey;
pub use polygon_2d::PointClass;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Fixed tolerance of the segment intersection and point-polygon predicates.
///
/// Governs both parallel detection and endpoint inclusion. Not configurable.
pub const EPSILON: f64 = 1e-5;
