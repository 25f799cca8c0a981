//! Ratio matching engine.
//!
//! Given coefficients `(a, b, c)` the matcher searches a [`Series`] for
//! triplets `(i, j, k)` such that
//!
//! ```text
//! S[j] / S[i]          ≈ b / a        (lower ratio)
//! (S[j] + S[k]) / S[i] ≈ (b + c) / a  (sum ratio)
//! ```
//!
//! ## Search
//!
//! A full scan of `len^3` triplets is wasteful since the series spans many
//! decades. The search runs in two cooperating phases instead:
//!
//! 1. **Log-domain selection.** Each ratio is resolved against a table of
//!    intra-decade log-ratios plus an integer decade count. The lower ratio
//!    yields one or two `(i, j)` seeds bracketing the target, the sum ratio
//!    yields a map from `i` to the first `k` above the target.
//! 2. **Refinement.** Seeds are completed with the `k` values just below and
//!    just above the sum ratio. Sum candidates are walked along the
//!    break-even line, and the best-scoring triplet of each deviation sign
//!    quadrant is kept.
//!
//! The union of both phases is returned. No triplet is guaranteed to be the
//! global optimum.

mod config;
mod quadrant;
mod refine;
mod selection;
mod triplet;

pub use config::{DecadePolicy, MatcherConfig};
pub use quadrant::{relative_deviation, weighted_deviation, QuadrantBest, Scored};
pub use triplet::Triplet;

use std::collections::BTreeSet;

use crate::divider::RatioTarget;
use crate::series::Series;

use refine::{refine_seed, scan_sum_candidate, ScanTarget};
use selection::LogTable;

/// Default weight of the lower-threshold deviation relative to the sum deviation.
pub const DEFAULT_LOWER_WEIGHT: f64 = 10.0;

/// Searches a series for triplets approximating a [`RatioTarget`].
#[derive(Debug, Clone, Default)]
pub struct RatioMatcher {
    config: MatcherConfig,
}

impl RatioMatcher {
    /// Create a matcher with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a matcher with custom configuration.
    pub fn with_config(config: MatcherConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Find a small set of triplets whose ratios approximate `target`.
    ///
    /// The result is never empty for a non-empty series.
    pub fn find_best_triplets(&self, series: &Series, target: &RatioTarget) -> BTreeSet<Triplet> {
        let policy = self.config.decade_policy;
        let lower_ratio = target.lower_ratio();
        let sum_ratio = target.sum_ratio();
        let table = LogTable::new(series);

        let mut results = BTreeSet::new();

        for seed in table.lower_seeds(lower_ratio) {
            for triplet in refine_seed(series, sum_ratio, seed) {
                results.insert(policy.lift_triplet(series, triplet));
            }
        }
        log::debug!("{}: {} triplets from lower seeds", series.name(), results.len());

        let scan = ScanTarget {
            lower_ratio,
            sum_ratio,
            lower_weight: self.config.lower_weight,
        };
        let mut best = QuadrantBest::new();
        for (i, k) in table.sum_candidates(sum_ratio) {
            let [i, k] = policy.lift(series, [i, k]);
            scan_sum_candidate(series, &scan, (i, k), &mut best);
        }
        results.extend(best.candidates().map(|c| c.triplet));

        log::debug!("{}: {} triplets in total", series.name(), results.len());
        results
    }
}

/// Find triplets with the default matcher configuration.
pub fn find_best_triplets(series: &Series, target: &RatioTarget) -> BTreeSet<Triplet> {
    RatioMatcher::new().find_best_triplets(series, target)
}
