//! Preferred value series as a virtual, decade-spanning array.
//!
//! A [`Series`] never materializes its values. Index `i` addresses
//! `multiplier[i / l] * factor[i % l]` where `l` is the number of factors in
//! one decade, so two indices that differ by `l` differ by exactly one decade.
//!
//! ```
//! use circuit_calc::series::Series;
//!
//! let e24 = Series::new(24).unwrap();
//! assert_eq!(e24.len(), 24 * 7);
//! assert_eq!(e24.value_at(24 + 16).unwrap(), 47.0);
//! ```

mod tables;

pub use tables::{factors_for, SUPPORTED};

use crate::error::{CalcError, Result};

/// Default number of decade multipliers (10^0 up to 10^6).
pub const DEFAULT_DECADES: usize = 7;

/// Largest decade count whose values stay finite after rounding.
pub const MAX_DECADES: usize = 300;

/// Decimal places kept by [`Series::value_at`].
const VALUE_DECIMALS: i32 = 3;

/// An immutable preferred value series spanning several decades.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// One decade of factors in [1, 10), ascending, starting at 1.0
    factors: Vec<f64>,
    /// Decade multipliers (powers of ten, ascending)
    multipliers: Vec<f64>,
}

impl Series {
    /// Create a standard E-series with `count` factors per decade.
    pub fn new(count: usize) -> Result<Self> {
        Self::with_decades(count, DEFAULT_DECADES)
    }

    /// Create a standard E-series spanning `decades` decades.
    pub fn with_decades(count: usize, decades: usize) -> Result<Self> {
        let factors =
            factors_for(count).ok_or_else(|| CalcError::unsupported_series(count, SUPPORTED))?;
        Self::from_factors(factors, decades)
    }

    /// Create a series from a custom factor table.
    ///
    /// The table must be non-empty, start at 1.0, increase strictly and stay
    /// below 10.
    pub fn from_factors(factors: Vec<f64>, decades: usize) -> Result<Self> {
        if factors.is_empty() {
            return Err(CalcError::invalid_factors("factor table is empty"));
        }
        if factors[0] != 1.0 {
            return Err(CalcError::invalid_factors(format!(
                "first factor must be 1.0, got {}",
                factors[0]
            )));
        }
        if let Some(w) = factors.windows(2).find(|w| !(w[0] < w[1])) {
            return Err(CalcError::invalid_factors(format!(
                "factors must increase strictly ({} is followed by {})",
                w[0], w[1]
            )));
        }
        if let Some(f) = factors.iter().find(|f| !f.is_finite() || **f >= 10.0) {
            return Err(CalcError::invalid_factors(format!(
                "factor {} is outside [1, 10)",
                f
            )));
        }
        if decades == 0 || decades > MAX_DECADES {
            return Err(CalcError::invalid_factors(format!(
                "decade count must be between 1 and {}, got {}",
                MAX_DECADES, decades
            )));
        }

        let multipliers = (0..decades as i32).map(|d| 10f64.powi(d)).collect();
        Ok(Self {
            factors,
            multipliers,
        })
    }

    /// Factor counts that [`Series::new`] accepts.
    pub fn supported() -> &'static [usize] {
        SUPPORTED
    }

    /// Total number of addressable indices.
    pub fn len(&self) -> usize {
        self.factors.len() * self.multipliers.len()
    }

    /// Always false for a constructed series.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of factors in one decade (the decade stride of the index space).
    pub fn factor_count(&self) -> usize {
        self.factors.len()
    }

    /// Number of decades the series spans.
    pub fn decades(&self) -> usize {
        self.multipliers.len()
    }

    /// The factors of one decade.
    pub fn factors(&self) -> &[f64] {
        &self.factors
    }

    /// Conventional name, e.g. `E24`.
    pub fn name(&self) -> String {
        format!("E{}", self.factor_count())
    }

    /// Get the value at `index`.
    pub fn value_at(&self, index: usize) -> Result<f64> {
        if index >= self.len() {
            return Err(CalcError::IndexOutOfRange {
                index,
                len: self.len(),
            });
        }
        Ok(self.value(index))
    }

    /// Unchecked lookup for callers that already bound `index` by `len()`.
    pub(crate) fn value(&self, index: usize) -> f64 {
        debug_assert!(index < self.len(), "series index {} out of range", index);
        let l = self.factor_count();
        let raw = self.multipliers[index / l] * self.factors[index % l];
        let scale = 10f64.powi(VALUE_DECIMALS);
        (raw * scale).round() / scale
    }

    /// Iterate over all values in index order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len()).map(move |i| self.value(i))
    }
}

/// Parse a series selector such as `E24`, `e12` or `96`.
pub fn parse_series_name(name: &str) -> Result<usize> {
    let trimmed = name.trim();
    let digits = trimmed
        .strip_prefix('E')
        .or_else(|| trimmed.strip_prefix('e'))
        .unwrap_or(trimmed);
    let count: usize = digits.parse().map_err(|_| CalcError::UnknownSeriesName {
        name: name.to_string(),
    })?;
    if !SUPPORTED.contains(&count) {
        return Err(CalcError::unsupported_series(count, SUPPORTED));
    }
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_length_and_stride() {
        let s = Series::new(24).unwrap();
        assert_eq!(s.len(), 168);
        assert_eq!(s.factor_count(), 24);
        assert_eq!(s.decades(), 7);
        assert_eq!(s.name(), "E24");
    }

    #[test]
    fn test_first_value() {
        for &count in Series::supported() {
            let s = Series::new(count).unwrap();
            assert_eq!(s.value_at(0).unwrap(), s.multipliers[0] * s.factors[0]);
        }
    }

    #[test]
    fn test_values_strictly_increase() {
        for &count in Series::supported() {
            let s = Series::new(count).unwrap();
            let values: Vec<f64> = s.values().collect();
            assert_eq!(values.len(), s.len());
            assert!(values.windows(2).all(|w| w[0] < w[1]), "E{}", count);
        }
    }

    #[test]
    fn test_decade_stride_scales_by_ten() {
        let s = Series::new(12).unwrap();
        let l = s.factor_count();
        for i in 0..s.len() - l {
            assert_relative_eq!(
                s.value_at(i + l).unwrap(),
                10.0 * s.value_at(i).unwrap(),
                max_relative = 1e-9
            );
        }
    }

    #[test]
    fn test_value_lookup() {
        let s = Series::new(3).unwrap();
        assert_eq!(s.value_at(2).unwrap(), 4.7);
        assert_eq!(s.value_at(4).unwrap(), 22.0);
        assert_eq!(s.value_at(20).unwrap(), 4_700_000.0);
    }

    #[test]
    fn test_index_out_of_range() {
        let s = Series::new(3).unwrap();
        assert_eq!(
            s.value_at(21),
            Err(CalcError::IndexOutOfRange { index: 21, len: 21 })
        );
    }

    #[test]
    fn test_unsupported_series() {
        assert!(matches!(
            Series::new(10),
            Err(CalcError::UnsupportedSeries { count: 10, .. })
        ));
    }

    #[test]
    fn test_custom_factors_validation() {
        assert!(Series::from_factors(vec![1.0, 2.0, 5.0], 3).is_ok());
        assert!(Series::from_factors(vec![], 3).is_err());
        assert!(Series::from_factors(vec![1.5, 2.0], 3).is_err());
        assert!(Series::from_factors(vec![1.0, 2.0, 2.0], 3).is_err());
        assert!(Series::from_factors(vec![1.0, 12.0], 3).is_err());
        assert!(Series::from_factors(vec![1.0, 2.0], 0).is_err());
    }

    #[test]
    fn test_decade_count_bounded() {
        let top = Series::with_decades(3, MAX_DECADES).unwrap();
        assert!(top.value_at(top.len() - 1).unwrap().is_finite());
        for decades in [MAX_DECADES + 1, 400, usize::MAX] {
            assert!(matches!(
                Series::with_decades(3, decades),
                Err(CalcError::InvalidFactors { .. })
            ));
        }
    }

    #[test]
    fn test_parse_series_name() {
        assert_eq!(parse_series_name("E24").unwrap(), 24);
        assert_eq!(parse_series_name("e6").unwrap(), 6);
        assert_eq!(parse_series_name("192").unwrap(), 192);
        assert!(matches!(
            parse_series_name("E5"),
            Err(CalcError::UnsupportedSeries { .. })
        ));
        assert!(matches!(
            parse_series_name("X24"),
            Err(CalcError::UnknownSeriesName { .. })
        ));
    }
}
