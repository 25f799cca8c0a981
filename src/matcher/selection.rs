//! Logarithmic first-pass selection.
//!
//! In log10 space a value ratio becomes a difference, and shifting an index
//! by one decade adds exactly 1. Every ratio the series can express is
//! therefore `baseline(p, q) + d` where `baseline` is the log-ratio of two
//! factor positions inside one decade and `d` is an integer decade count.
//! Resolving a target ratio reduces to picking `d = round(target - baseline)`
//! and comparing the fractional residuals of all `l * l` baselines.

use std::collections::BTreeMap;

use crate::series::Series;

/// Log-ratio of two factor positions within one decade.
#[derive(Debug, Clone, Copy)]
struct Baseline {
    p: usize,
    q: usize,
    log_ratio: f64,
}

/// A baseline resolved against a target: `log_ratio + decades + residual == target`.
#[derive(Debug, Clone, Copy)]
struct Bracket {
    residual: f64,
    decades: i64,
    p: usize,
    q: usize,
}

/// Precomputed baselines for every ordered pair of factor positions.
#[derive(Debug, Clone)]
pub(crate) struct LogTable {
    baselines: Vec<Baseline>,
    factor_count: usize,
    len: usize,
}

impl LogTable {
    pub fn new(series: &Series) -> Self {
        let logs: Vec<f64> = series.factors().iter().map(|f| f.log10()).collect();
        let baselines = (0..logs.len())
            .flat_map(|p| (0..logs.len()).map(move |q| (p, q)))
            .map(|(p, q)| Baseline {
                p,
                q,
                log_ratio: logs[q] - logs[p],
            })
            .collect();
        Self {
            baselines,
            factor_count: series.factor_count(),
            len: series.len(),
        }
    }

    /// Place a `(numerator, denominator)` factor pair `decades` apart.
    ///
    /// A positive count raises the numerator, a negative one raises the
    /// denominator, so the returned `(i, j)` realises `10^(baseline + decades)`
    /// as `S[j] / S[i]`.
    ///
    /// The shift saturates at the last decade of the series. A ratio beyond
    /// the series span is then approximated by the most extreme pair it holds.
    fn place(&self, p: usize, q: usize, decades: i64) -> (usize, usize) {
        let shift = |base: usize| {
            let room = (self.len - 1 - base) / self.factor_count;
            let wanted = usize::try_from(decades.unsigned_abs()).unwrap_or(usize::MAX);
            if wanted > room {
                log::trace!("decade shift {} clamped to {}", decades, room);
            }
            wanted.min(room) * self.factor_count
        };
        if decades >= 0 {
            (p, q + shift(q))
        } else {
            (p + shift(p), q)
        }
    }

    /// Seed pairs `(i, j)` with `S[j] / S[i]` closest to `ratio`.
    ///
    /// The closest pair from below and the closest pair from above are kept
    /// separately, giving one or two seeds. A zero ratio seeds the smallest
    /// step the series offers.
    pub fn lower_seeds(&self, ratio: f64) -> Vec<(usize, usize)> {
        if ratio <= 0.0 {
            return vec![(self.len - 1, 0)];
        }
        let target = ratio.log10();

        let mut below: Option<Bracket> = None;
        let mut above: Option<Bracket> = None;
        for b in &self.baselines {
            let remaining = target - b.log_ratio;
            let decades = remaining.round_ties_even();
            let residual = remaining - decades;
            let candidate = Bracket {
                residual,
                decades: decades as i64,
                p: b.p,
                q: b.q,
            };

            // residual >= 0: achieved ratio at or below the target
            if residual >= 0.0 && below.map_or(true, |best| residual < best.residual) {
                below = Some(candidate);
            }
            if residual <= 0.0 && above.map_or(true, |best| residual > best.residual) {
                above = Some(candidate);
            }
        }

        let mut seeds: Vec<(usize, usize)> = [above, below]
            .into_iter()
            .flatten()
            .map(|b| {
                let (p, q) = if b.p == b.q { (0, 0) } else { (b.p, b.q) };
                self.place(p, q, b.decades)
            })
            .collect();
        // An exact hit is both the closest pair from below and from above
        seeds.dedup();
        log::debug!("lower ratio {:.6}: seeds {:?}", ratio, seeds);
        seeds
    }

    /// Combined-ratio candidates keyed by `i`.
    ///
    /// For each reachable `i` the value is the first `k` whose ratio
    /// `S[k] / S[i]` is expected to exceed `ratio`, capped at the last index.
    pub fn sum_candidates(&self, ratio: f64) -> BTreeMap<usize, usize> {
        let mut candidates = BTreeMap::new();
        if ratio <= 0.0 {
            return candidates;
        }
        let target = ratio.log10();

        for b in &self.baselines {
            let decades = (target - b.log_ratio).round_ties_even();
            if decades + b.log_ratio > target {
                continue;
            }
            let (i, k) = self.place(b.p, b.q, decades as i64);
            let next = (k + 1).min(self.len - 1);
            candidates
                .entry(i)
                .and_modify(|best: &mut usize| *best = (*best).max(next))
                .or_insert(next);
        }
        log::debug!(
            "sum ratio {:.6}: {} candidate denominators",
            ratio,
            candidates.len()
        );
        candidates
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn e3() -> Series {
        Series::new(3).unwrap()
    }

    #[test]
    fn test_table_covers_all_pairs() {
        let table = LogTable::new(&Series::new(12).unwrap());
        assert_eq!(table.baselines.len(), 144);
        assert!(table
            .baselines
            .iter()
            .all(|b| b.log_ratio > -1.0 && b.log_ratio < 1.0));
    }

    #[test]
    fn test_place_moves_denominator_for_negative_decades() {
        let table = LogTable::new(&e3());
        assert_eq!(table.place(0, 2, 2), (0, 8));
        assert_eq!(table.place(0, 2, -1), (3, 2));
        assert_eq!(table.place(1, 0, 0), (1, 0));
    }

    #[test]
    fn test_place_saturates_at_series_end() {
        let table = LogTable::new(&e3()); // len 21
        assert_eq!(table.place(0, 2, -10), (18, 2));
        assert_eq!(table.place(2, 1, -7), (20, 1));
        assert_eq!(table.place(0, 2, 10), (0, 20));
        assert_eq!(table.place(1, 0, i64::MIN), (19, 0));
    }

    #[test]
    fn test_power_of_ten_seeds_equal_factors_at_zero() {
        let s = e3();
        let l = s.factor_count();
        let table = LogTable::new(&s);
        let seeds = table.lower_seeds(100.0);
        assert_eq!(seeds, vec![(0, 2 * l)]);
        assert!(!seeds.iter().any(|&(i, j)| i == j && i > 0));
    }

    #[test]
    fn test_tiny_ratio_seeds_stay_in_range() {
        let s = Series::new(12).unwrap();
        let table = LogTable::new(&s);
        let seeds = table.lower_seeds(1e-9);
        assert!(!seeds.is_empty());
        for (i, j) in seeds {
            assert!(i < s.len() && j < s.len(), "({}, {})", i, j);
        }

        let candidates = table.sum_candidates(2e-9);
        assert!(!candidates.is_empty());
        for (&i, &k) in &candidates {
            assert!(i < s.len() && k < s.len());
        }
    }

    #[test]
    fn test_lower_seeds_bracket_target() {
        let s = e3();
        let table = LogTable::new(&s);
        let ratio = 2.0 / 1.3 - 1.0;
        let seeds = table.lower_seeds(ratio);
        assert!(!seeds.is_empty() && seeds.len() <= 2);

        // 4.7 / 10 is the closest E3 ratio below 0.538
        assert!(seeds.contains(&(3, 2)));
        for (i, j) in seeds {
            assert!(i < s.len() && j < s.len());
        }
    }

    #[test]
    fn test_lower_seeds_exact_ratio() {
        let s = e3();
        let table = LogTable::new(&s);
        let seeds = table.lower_seeds(22.0);
        assert!(seeds.contains(&(0, 4)));
        let (i, j) = (0, 4);
        assert_relative_eq!(
            s.value_at(j).unwrap() / s.value_at(i).unwrap(),
            22.0,
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_zero_ratio_seeds_smallest_step() {
        let s = e3();
        let table = LogTable::new(&s);
        assert_eq!(table.lower_seeds(0.0), vec![(s.len() - 1, 0)]);
    }

    #[test]
    fn test_sum_candidates_reach_above_target() {
        let s = e3();
        let table = LogTable::new(&s);
        let ratio = 3.0 / 1.3 - 1.0;
        let candidates = table.sum_candidates(ratio);
        assert!(!candidates.is_empty());
        for (&i, &k) in &candidates {
            assert!(i < s.len() && k < s.len());
        }
        // 2.2 / 1.0 exceeds 1.31 while 1.0 / 1.0 does not
        assert_eq!(candidates.get(&0), Some(&1));
    }

    #[test]
    fn test_sum_candidates_empty_for_zero_ratio() {
        let table = LogTable::new(&e3());
        assert!(table.sum_candidates(0.0).is_empty());
    }
}
