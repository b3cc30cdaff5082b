use std::collections::hash_map::{Entry, HashMap};

use crate::math::{Point2, PointKey, EPSILON};

/// Deduplicating accumulator of intersection points.
///
/// Points are keyed by [`PointKey`]: on a grid of cell size `quantum`
/// (default [`EPSILON`]) or, for [`IntersectionSet::exact`], by exact value.
/// The first point inserted into a cell is the one kept. Two points merge
/// only when they round to the same cell, so arbitrarily close points on
/// opposite sides of a cell boundary stay separate.
#[derive(Debug, Clone)]
pub struct IntersectionSet {
    quantum: f64,
    points: HashMap<PointKey, Point2>,
}

impl Default for IntersectionSet {
    fn default() -> Self {
        Self::new()
    }
}

impl IntersectionSet {
    /// Creates an empty set deduplicating on the [`EPSILON`] grid.
    #[must_use]
    pub fn new() -> Self {
        Self::with_quantum(EPSILON)
    }

    /// Creates an empty set deduplicating by exact coordinate equality.
    #[must_use]
    pub fn exact() -> Self {
        Self::with_quantum(0.0)
    }

    /// Creates an empty set deduplicating on a grid of cell size `quantum`.
    #[must_use]
    pub fn with_quantum(quantum: f64) -> Self {
        Self {
            quantum,
            points: HashMap::new(),
        }
    }

    /// Grid cell size; zero for exact deduplication.
    #[must_use]
    pub fn quantum(&self) -> f64 {
        self.quantum
    }

    fn key(&self, p: &Point2) -> PointKey {
        PointKey::quantized(p, self.quantum)
    }

    /// Inserts `p`; returns `false` if an equal point was already present.
    pub fn insert(&mut self, p: Point2) -> bool {
        match self.points.entry(self.key(&p)) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(p);
                true
            }
        }
    }

    /// Returns `true` if a point equal to `p` under this set's key is present.
    #[must_use]
    pub fn contains(&self, p: &Point2) -> bool {
        self.points.contains_key(&self.key(p))
    }

    /// Number of distinct points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns `true` if no points were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Iterates the points in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &Point2> {
        self.points.values()
    }

    /// Moves every point of `other` into `self`, re-keying under this set's
    /// quantum.
    pub fn merge(&mut self, other: Self) {
        self.extend(other.points.into_values());
    }

    /// Consumes the set into a vector sorted by `x`, then `y`.
    #[must_use]
    pub fn into_sorted_vec(self) -> Vec<Point2> {
        let mut points: Vec<Point2> = self.points.into_values().collect();
        points.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
        points
    }
}

impl Extend<Point2> for IntersectionSet {
    fn extend<I: IntoIterator<Item = Point2>>(&mut self, iter: I) {
        for p in iter {
            self.insert(p);
        }
    }
}

impl FromIterator<Point2> for IntersectionSet {
    fn from_iter<I: IntoIterator<Item = Point2>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl PartialEq for IntersectionSet {
    /// Order-independent equality of the recorded keys.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.points.keys().all(|k| other.points.contains_key(k))
    }
}
