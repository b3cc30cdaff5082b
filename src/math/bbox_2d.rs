use super::Point2;

/// An axis-aligned bounding box in the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb2 {
    /// Minimum corner of the bounding box.
    pub min: Point2,
    /// Maximum corner of the bounding box.
    pub max: Point2,
}

impl Aabb2 {
    /// Bounding box of `points`, or `None` if there are none.
    #[must_use]
    pub fn from_points(points: &[Point2]) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut bbox = Self {
            min: *first,
            max: *first,
        };
        for p in rest {
            bbox.min.x = bbox.min.x.min(p.x);
            bbox.min.y = bbox.min.y.min(p.y);
            bbox.max.x = bbox.max.x.max(p.x);
            bbox.max.y = bbox.max.y.max(p.y);
        }
        Some(bbox)
    }

    /// Larger of the width and height.
    #[must_use]
    pub fn extent(&self) -> f64 {
        (self.max.x - self.min.x).max(self.max.y - self.min.y)
    }

    /// Returns `true` if the boxes overlap once each is widened by `tol`.
    /// Touching boxes overlap.
    #[must_use]
    pub fn intersects(&self, other: &Self, tol: f64) -> bool {
        self.min.x <= other.max.x + tol
            && other.min.x <= self.max.x + tol
            && self.min.y <= other.max.y + tol
            && other.min.y <= self.max.y + tol
    }
}
