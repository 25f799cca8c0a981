//! Local refinement of first-pass candidates.
//!
//! The log-domain pass resolves each ratio on its own. Hitting the combined
//! ratio needs `j` and `k` chosen together, which is done here by short
//! linear scans over the series.

use crate::series::Series;

use super::quadrant::{relative_deviation, weighted_deviation, QuadrantBest};
use super::Triplet;

/// Closest `k` from below and from above for a fixed `(i, j)` seed.
///
/// `i` and `j` advance together one decade at a time. Higher decades leave
/// more room below `S[i]`, so `k` can be resolved more finely there. Ties
/// keep the earliest (lowest decade) candidate.
pub(crate) fn refine_seed(series: &Series, sum_ratio: f64, seed: (usize, usize)) -> Vec<Triplet> {
    let len = series.len();
    let l = series.factor_count();
    let (mut i, mut j) = seed;

    let mut below: Option<(f64, Triplet)> = None;
    let mut above: Option<(f64, Triplet)> = None;

    while i < len && j < len {
        let numerator = series.value(i);
        let fixed = series.value(j);
        for k in 0..len {
            let ratio = (fixed + series.value(k)) / numerator;
            let delta = ratio - sum_ratio;

            if delta >= 0.0 && above.map_or(true, |(best, _)| delta < best) {
                above = Some((delta, Triplet::new(i, j, k)));
            }
            if delta <= 0.0 && below.map_or(true, |(best, _)| delta > best) {
                below = Some((delta, Triplet::new(i, j, k)));
            }
            // Values ascend with k, nothing further can come closer
            if ratio > sum_ratio {
                break;
            }
        }
        i += l;
        j += l;
    }

    [below, above]
        .into_iter()
        .flatten()
        .map(|(_, triplet)| triplet)
        .collect()
}

/// Targets and weighting shared by every combined-ratio scan.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ScanTarget {
    pub lower_ratio: f64,
    pub sum_ratio: f64,
    pub lower_weight: f64,
}

/// Walk `j` up and `k` down from an `(i, k)` start, scoring every visited
/// triplet into `best`.
///
/// `k` starts just above the combined ratio. Whenever the combined ratio
/// overshoots `k` steps down, otherwise `j` steps up, so the walk follows
/// the break-even line of `S[j] + S[k] = sum_ratio * S[i]`.
pub(crate) fn scan_sum_candidate(
    series: &Series,
    target: &ScanTarget,
    start: (usize, usize),
    best: &mut QuadrantBest,
) {
    let len = series.len();
    let (i, mut k) = start;
    let denominator = series.value(i);
    let mut j = 0;

    while j < len {
        let lower = series.value(j) / denominator;
        let sum = (series.value(j) + series.value(k)) / denominator;

        let dev_sum = relative_deviation(sum, target.sum_ratio);
        let dev_lower = relative_deviation(lower, target.lower_ratio);
        let weight = weighted_deviation(dev_sum, dev_lower, target.lower_weight);
        let triplet = Triplet::new(i, j, k);
        if best.offer(dev_sum, dev_lower, weight, triplet) {
            log::trace!("quadrant candidate {} (weight {:.3e})", triplet, weight);
        }

        if sum > target.sum_ratio {
            if k == 0 {
                break;
            }
            k -= 1;
        } else {
            j += 1;
        }
    }
}
