//! Threshold pairs and the ratio coefficients derived from them.
//!
//! The ICL7665 trips when its input divider output reaches the reference
//! voltage `v_ref`. With a three-resistor divider `a` (bottom), `b`, `c`
//! (top) the two switching thresholds are
//!
//! ```text
//! v_low  = v_ref * (1 + b / a)
//! v_high = v_ref * (1 + (b + c) / a)
//! ```

use crate::error::{CalcError, Result};

/// A pair of switching thresholds, stored sorted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub low: f64,
    pub high: f64,
}

impl Thresholds {
    /// Create a threshold pair from two voltages in any order.
    pub fn new(first: f64, second: f64) -> Result<Self> {
        for v in [first, second] {
            if !v.is_finite() || v <= 0.0 {
                return Err(CalcError::invalid_threshold(format!(
                    "threshold must be a positive voltage, got {}",
                    v
                )));
            }
        }
        Ok(Self {
            low: first.min(second),
            high: first.max(second),
        })
    }

    /// Thresholds produced by divider resistors `(a, b, c)`.
    pub fn from_resistors(a: f64, b: f64, c: f64, v_ref: f64) -> Self {
        Self {
            low: v_ref * (1.0 + b / a),
            high: v_ref * (1.0 + (b + c) / a),
        }
    }

    /// Relative deviation `(low, high)` of `self` from `requested`.
    pub fn deviation_from(&self, requested: &Thresholds) -> (f64, f64) {
        (
            self.low / requested.low - 1.0,
            self.high / requested.high - 1.0,
        )
    }
}

/// Dimensionless divider coefficients `(a, b, c)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatioTarget {
    a: f64,
    b: f64,
    c: f64,
}

impl RatioTarget {
    /// Create a target from raw coefficients.
    ///
    /// `a` must be positive, `b` and `c` non-negative, all finite.
    pub fn new(a: f64, b: f64, c: f64) -> Result<Self> {
        if !a.is_finite() || a <= 0.0 {
            return Err(CalcError::invalid_coefficients(format!(
                "a must be positive, got {}",
                a
            )));
        }
        if !b.is_finite() || b < 0.0 || !c.is_finite() || c < 0.0 {
            return Err(CalcError::invalid_coefficients(format!(
                "b and c must be non-negative, got b = {}, c = {}",
                b, c
            )));
        }
        Ok(Self { a, b, c })
    }

    /// Derive coefficients (with `a = 1`) for a threshold pair.
    pub fn from_thresholds(thresholds: &Thresholds, v_ref: f64) -> Result<Self> {
        if !v_ref.is_finite() || v_ref <= 0.0 {
            return Err(CalcError::invalid_threshold(format!(
                "reference voltage must be positive, got {}",
                v_ref
            )));
        }
        if thresholds.low < v_ref {
            return Err(CalcError::invalid_threshold(format!(
                "threshold {} V is below the reference voltage {} V",
                thresholds.low, v_ref
            )));
        }
        let b = thresholds.low / v_ref - 1.0;
        let c = thresholds.high / v_ref - 1.0 - b;
        Self::new(1.0, b, c.max(0.0))
    }

    pub fn a(&self) -> f64 {
        self.a
    }

    pub fn b(&self) -> f64 {
        self.b
    }

    pub fn c(&self) -> f64 {
        self.c
    }

    /// Target for `S[j] / S[i]`.
    pub fn lower_ratio(&self) -> f64 {
        self.b / self.a
    }

    /// Target for `(S[j] + S[k]) / S[i]`.
    pub fn sum_ratio(&self) -> f64 {
        (self.b + self.c) / self.a
    }

    /// Thresholds these coefficients would produce.
    pub fn thresholds(&self, v_ref: f64) -> Thresholds {
        Thresholds::from_resistors(self.a, self.b, self.c, v_ref)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_V_REF;
    use approx::assert_relative_eq;

    #[test]
    fn test_thresholds_sorted() {
        let t = Thresholds::new(3.0, 2.0).unwrap();
        assert_eq!((t.low, t.high), (2.0, 3.0));
    }

    #[test]
    fn test_thresholds_reject_non_positive() {
        assert!(Thresholds::new(0.0, 2.0).is_err());
        assert!(Thresholds::new(-1.0, 2.0).is_err());
        assert!(Thresholds::new(f64::NAN, 2.0).is_err());
    }

    #[test]
    fn test_coefficients_from_thresholds() {
        let t = Thresholds::new(2.0, 3.0).unwrap();
        let r = RatioTarget::from_thresholds(&t, DEFAULT_V_REF).unwrap();
        assert_eq!(r.a(), 1.0);
        assert_relative_eq!(r.b(), 2.0 / 1.3 - 1.0, epsilon = 1e-12);
        assert_relative_eq!(r.c(), 3.0 / 1.3 - 2.0 / 1.3, epsilon = 1e-12);
    }

    #[test]
    fn test_round_trip() {
        let t = Thresholds::new(4.5, 2.7).unwrap();
        let back = RatioTarget::from_thresholds(&t, DEFAULT_V_REF)
            .unwrap()
            .thresholds(DEFAULT_V_REF);
        assert_relative_eq!(back.low, 2.7, epsilon = 1e-12);
        assert_relative_eq!(back.high, 4.5, epsilon = 1e-12);
    }

    #[test]
    fn test_threshold_at_reference_gives_zero_b() {
        let t = Thresholds::new(DEFAULT_V_REF, 3.0).unwrap();
        let r = RatioTarget::from_thresholds(&t, DEFAULT_V_REF).unwrap();
        assert_eq!(r.b(), 0.0);
        assert_eq!(r.lower_ratio(), 0.0);
    }

    #[test]
    fn test_equal_thresholds_give_zero_c() {
        let t = Thresholds::new(2.0, 2.0).unwrap();
        let r = RatioTarget::from_thresholds(&t, DEFAULT_V_REF).unwrap();
        assert_eq!(r.c(), 0.0);
        assert_eq!(r.lower_ratio(), r.sum_ratio());
    }

    #[test]
    fn test_threshold_below_reference_rejected() {
        let t = Thresholds::new(1.0, 3.0).unwrap();
        assert!(matches!(
            RatioTarget::from_thresholds(&t, DEFAULT_V_REF),
            Err(CalcError::InvalidThreshold { .. })
        ));
        assert!(RatioTarget::from_thresholds(&t, 0.0).is_err());
    }

    #[test]
    fn test_invalid_coefficients() {
        assert!(RatioTarget::new(0.0, 1.0, 1.0).is_err());
        assert!(RatioTarget::new(1.0, -0.5, 1.0).is_err());
        assert!(RatioTarget::new(1.0, 0.5, f64::INFINITY).is_err());
        assert!(RatioTarget::new(2.0, 0.5, 0.5).is_ok());
    }

    #[test]
    fn test_deviation_from() {
        let requested = Thresholds::new(2.0, 3.0).unwrap();
        let actual = Thresholds {
            low: 2.2,
            high: 2.7,
        };
        let (low, high) = actual.deviation_from(&requested);
        assert_relative_eq!(low, 0.1, epsilon = 1e-12);
        assert_relative_eq!(high, -0.1, epsilon = 1e-12);
    }
}
