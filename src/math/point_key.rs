use super::Point2;

/// Hashable stand-in for a [`Point2`].
///
/// `f64` coordinates have no `Eq`/`Hash`, so sets of points key on this
/// instead. `Exact` compares bit patterns; `Grid` compares coordinates
/// rounded to a fixed quantum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointKey {
    /// Bit-exact coordinates, with `-0.0` folded into `0.0`.
    Exact(u64, u64),
    /// Grid cell of the coordinates at some quantum.
    Grid(i64, i64),
}

impl PointKey {
    /// Exact-value key: two points share a key iff their coordinates are equal.
    #[must_use]
    pub fn exact(p: &Point2) -> Self {
        // `-0.0 + 0.0 == +0.0`
        Self::Exact((p.x + 0.0).to_bits(), (p.y + 0.0).to_bits())
    }

    /// Key on the grid of cell size `quantum`.
    ///
    /// Falls back to [`PointKey::exact`] for a non-positive quantum and for
    /// points whose cell index is not finite or does not fit in `i64`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn quantized(p: &Point2, quantum: f64) -> Self {
        if quantum <= 0.0 || !quantum.is_finite() {
            return Self::exact(p);
        }
        let cx = (p.x / quantum).round();
        let cy = (p.y / quantum).round();
        // i64::MAX as f64 rounds up to 2^63, itself out of range.
        let limit = i64::MAX as f64;
        if !(cx.abs() < limit && cy.abs() < limit) {
            return Self::exact(p);
        }
        Self::Grid(cx as i64, cy as i64)
    }
}
