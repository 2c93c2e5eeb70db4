//! Percentage value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ValidationError;

/// A whole-number percentage between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Percentage(u8);

impl Percentage {
    /// Zero percent.
    pub const ZERO: Self = Self(0);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(100);

    /// Creates a new Percentage, clamping to valid range.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Creates a Percentage, returning error if out of range.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if value > 100 {
            return Err(ValidationError::out_of_range(
                "percentage",
                0,
                100,
                value as i32,
            ));
        }
        Ok(Self(value))
    }

    /// Rounds `numerator / denominator` to a whole percentage.
    ///
    /// # Panics
    /// Panics when `denominator` is zero. Ratios are always taken against
    /// fixed non-empty collections, so a zero denominator is a caller bug.
    pub fn from_ratio(numerator: usize, denominator: usize) -> Self {
        assert!(
            denominator > 0,
            "percentage ratio requires a non-zero denominator"
        );
        let pct = (numerator as f64 / denominator as f64 * 100.0).round() as u8;
        Self(pct.min(100))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the value as a fraction (0.0 to 1.0).
    pub fn as_fraction(&self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl Default for Percentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_valid_values() {
        assert_eq!(Percentage::new(0).value(), 0);
        assert_eq!(Percentage::new(70).value(), 70);
        assert_eq!(Percentage::new(100).value(), 100);
    }

    #[test]
    fn new_clamps_to_100() {
        assert_eq!(Percentage::new(101).value(), 100);
        assert_eq!(Percentage::new(255).value(), 100);
    }

    #[test]
    fn try_new_rejects_over_100() {
        let result = Percentage::try_new(130);
        match result {
            Err(ValidationError::OutOfRange { field, actual, .. }) => {
                assert_eq!(field, "percentage");
                assert_eq!(actual, 130);
            }
            _ => panic!("Expected OutOfRange error"),
        }
    }

    #[test]
    fn from_ratio_rounds_to_nearest() {
        // 7 of 12 guideline points -> 58.33% -> 58
        assert_eq!(Percentage::from_ratio(7, 12).value(), 58);
        // 5 of 12 -> 41.67% -> 42
        assert_eq!(Percentage::from_ratio(5, 12).value(), 42);
        assert_eq!(Percentage::from_ratio(0, 12), Percentage::ZERO);
        assert_eq!(Percentage::from_ratio(12, 12), Percentage::HUNDRED);
    }

    #[test]
    #[should_panic(expected = "non-zero denominator")]
    fn from_ratio_panics_on_zero_denominator() {
        let _ = Percentage::from_ratio(1, 0);
    }

    #[test]
    fn as_fraction_converts_correctly() {
        assert!((Percentage::new(50).as_fraction() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn displays_with_percent_sign() {
        assert_eq!(format!("{}", Percentage::new(34)), "34%");
    }

    #[test]
    fn serializes_transparently() {
        let json = serde_json::to_string(&Percentage::new(42)).unwrap();
        assert_eq!(json, "42");
    }
}
