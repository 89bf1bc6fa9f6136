use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::ModelFactory;

/// A univariate uniform prior on `[lo, hi]`.
///
/// Bounds given in reverse order are swapped rather than rejected, so
/// `lo <= hi` holds for every constructed value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "UniformBounds")]
pub struct UniformPrior {
    #[serde(with = "crate::priors::serde_helpers::float")]
    lo: f64,
    #[serde(with = "crate::priors::serde_helpers::float")]
    hi: f64,
}

impl UniformPrior {
    /// Creates a new uniform prior, swapping `lo` and `hi` if `hi < lo`.
    pub fn new(lo: f64, hi: f64) -> Self {
        if hi < lo {
            log::debug!("Swapping reversed uniform bounds [{lo}, {hi}]");
            return Self { lo: hi, hi: lo };
        }
        Self { lo, hi }
    }

    pub fn lo(&self) -> f64 {
        self.lo
    }

    pub fn hi(&self) -> f64 {
        self.hi
    }

    /// Builds the uniform model over `[lo, hi]`.
    pub fn to_model<F: ModelFactory>(&self, factory: &F) -> Result<F::Uniform, F::Error> {
        factory.uniform_model(self.lo, self.hi)
    }
}

impl fmt::Display for UniformPrior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UniformPrior on [{}, {}]", self.lo, self.hi)
    }
}

/// Restored bounds are passed through [`UniformPrior::new`] so that a payload
/// with reversed bounds still yields `lo <= hi`.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct UniformBounds {
    #[serde(with = "crate::priors::serde_helpers::float")]
    lo: f64,
    #[serde(with = "crate::priors::serde_helpers::float")]
    hi: f64,
}

impl From<UniformBounds> for UniformPrior {
    fn from(bounds: UniformBounds) -> Self {
        UniformPrior::new(bounds.lo, bounds.hi)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_ordered_bounds() {
        let prior = UniformPrior::new(-1.0, 4.0);
        assert_eq!(prior.lo(), -1.0);
        assert_eq!(prior.hi(), 4.0);
    }

    #[test]
    fn test_reversed_bounds_are_swapped() {
        let prior = UniformPrior::new(5.0, 2.0);
        assert_eq!(prior.lo(), 2.0);
        assert_eq!(prior.hi(), 5.0);
    }

    #[test]
    fn test_equal_bounds() {
        let prior = UniformPrior::new(3.0, 3.0);
        assert_eq!(prior.lo(), prior.hi());
    }

    #[test]
    fn test_serde_round_trip() {
        let prior = UniformPrior::new(0.5, 1.5);
        let json = serde_json::to_string(&prior).unwrap();
        assert_eq!(json, r#"{"lo":0.5,"hi":1.5}"#);

        let restored: UniformPrior = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, prior);
    }

    #[test]
    fn test_restore_swaps_reversed_bounds() {
        let restored: UniformPrior = serde_json::from_str(r#"{"lo":9.0,"hi":1.0}"#).unwrap();
        assert_eq!(restored, UniformPrior::new(1.0, 9.0));
    }

    #[test]
    fn test_serde_round_trip_infinite_bounds() {
        let prior = UniformPrior::new(f64::NEG_INFINITY, f64::INFINITY);
        let json = serde_json::to_string(&prior).unwrap();
        assert_eq!(json, r#"{"lo":"-inf","hi":"inf"}"#);

        let restored: UniformPrior = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, prior);
    }

    #[test]
    fn test_serde_round_trip_nan_bound() {
        let prior = UniformPrior::new(f64::NAN, 0.0);
        let json = serde_json::to_string(&prior).unwrap();
        assert_eq!(json, r#"{"lo":"NaN","hi":0.0}"#);

        let restored: UniformPrior = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.lo().to_bits(), prior.lo().to_bits());
        assert_eq!(restored.hi(), 0.0);
    }

    #[test]
    fn test_display() {
        let prior = UniformPrior::new(5.0, 2.0);
        assert_eq!(prior.to_string(), "UniformPrior on [2, 5]");
    }
}
