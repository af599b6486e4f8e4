//! Query value types for repository filters.

/// Half-open discount filter: `discount > min` (strict) and `discount <= max`
/// (inclusive). An absent bound is unbounded, never a sentinel extreme.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct DiscountRange {
    min: Option<f64>,
    max: Option<f64>,
}

impl DiscountRange {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }

    /// Matches every present discount.
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn min(&self) -> Option<f64> {
        self.min
    }

    pub fn max(&self) -> Option<f64> {
        self.max
    }

    pub fn contains(&self, discount: f64) -> bool {
        self.min.is_none_or(|min| discount > min) && self.max.is_none_or(|max| discount <= max)
    }
}
