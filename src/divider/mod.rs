//! Threshold divider calculations.
//!
//! This module sits between user-facing voltages and the ratio matcher:
//! it turns a [`Thresholds`] pair into a [`RatioTarget`], runs the matcher
//! and resolves the resulting triplets into [`Solution`]s.

mod solution;
mod target;

pub use solution::Solution;
pub use target::{RatioTarget, Thresholds};

use crate::error::Result;
use crate::matcher::RatioMatcher;
use crate::series::Series;

/// Match `thresholds` against `series`.
///
/// Solutions are sorted by their reconstructed upper threshold.
pub fn match_thresholds(
    series: &Series,
    thresholds: &Thresholds,
    v_ref: f64,
    matcher: &RatioMatcher,
) -> Result<Vec<Solution>> {
    matcher.config().validate()?;
    let target = RatioTarget::from_thresholds(thresholds, v_ref)?;
    log::debug!(
        "{}: a = {}, b = {:.6}, c = {:.6}",
        series.name(),
        target.a(),
        target.b(),
        target.c()
    );

    let mut solutions = matcher
        .find_best_triplets(series, &target)
        .into_iter()
        .map(|t| Solution::resolve(series, t, v_ref))
        .collect::<Result<Vec<_>>>()?;
    solutions.sort_by(|x, y| x.thresholds.high.total_cmp(&y.thresholds.high));

    log::info!("{}: {} solutions", series.name(), solutions.len());
    Ok(solutions)
}
