//! Matcher configuration.

use crate::error::{CalcError, Result};
use crate::series::Series;

use super::{Triplet, DEFAULT_LOWER_WEIGHT};

/// How candidates are placed among equivalent decades.
///
/// Shifting all three indices by one decade leaves every ratio unchanged, so
/// each candidate has a family of equally good placements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecadePolicy {
    /// Move candidates to the highest decade that still fits the series
    #[default]
    PreferHighest,
    /// Leave candidates in the decade where the search found them
    Keep,
}

impl DecadePolicy {
    /// Shift `indices` up by whole decades according to the policy.
    pub fn lift<const N: usize>(&self, series: &Series, mut indices: [usize; N]) -> [usize; N] {
        if *self == DecadePolicy::Keep {
            return indices;
        }
        let l = series.factor_count();
        let top = indices.iter().copied().max().unwrap_or(0);
        let room = series.len().saturating_sub(top + 1) / l;
        for idx in indices.iter_mut() {
            *idx += room * l;
        }
        indices
    }

    /// Shift a triplet according to the policy.
    pub fn lift_triplet(&self, series: &Series, t: Triplet) -> Triplet {
        let [i, j, k] = self.lift(series, [t.i, t.j, t.k]);
        Triplet::new(i, j, k)
    }
}

/// Configuration for the ratio matcher.
#[derive(Debug, Clone)]
pub struct MatcherConfig {
    /// Weight of the lower-threshold ratio deviation in the scoring metric.
    pub lower_weight: f64,
    /// Placement of candidates among equivalent decades.
    pub decade_policy: DecadePolicy,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            lower_weight: DEFAULT_LOWER_WEIGHT,
            decade_policy: DecadePolicy::default(),
        }
    }
}

impl MatcherConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the weight of the lower-threshold deviation.
    ///
    /// A weight of 1.0 treats both thresholds equally; larger values favour
    /// an accurate lower threshold.
    pub fn with_lower_weight(mut self, lower_weight: f64) -> Self {
        self.lower_weight = lower_weight;
        self
    }

    /// Set the decade placement policy.
    pub fn with_decade_policy(mut self, decade_policy: DecadePolicy) -> Self {
        self.decade_policy = decade_policy;
        self
    }

    /// Check the settings before a search uses them.
    ///
    /// The lower weight must be finite and non-negative.
    pub fn validate(&self) -> Result<()> {
        if !self.lower_weight.is_finite() || self.lower_weight < 0.0 {
            return Err(CalcError::invalid_config(format!(
                "lower weight must be a non-negative number, got {}",
                self.lower_weight
            )));
        }
        Ok(())
    }
}
