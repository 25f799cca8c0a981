//! Candidate scoring and per-quadrant bookkeeping.
//!
//! Candidates from the combined-ratio scan are classified by the signs of
//! their two deviations. Keeping the best candidate of each quadrant retains
//! a small set that brackets the target from every side.

use super::Triplet;

/// Relative deviation of `actual` from `target`.
///
/// A zero target has no relative scale; the absolute value is used instead.
pub fn relative_deviation(actual: f64, target: f64) -> f64 {
    if target == 0.0 {
        actual
    } else {
        actual / target - 1.0
    }
}

/// Combined score of the two relative deviations (lower is better).
pub fn weighted_deviation(dev_sum: f64, dev_lower: f64, lower_weight: f64) -> f64 {
    let weighted = dev_lower * lower_weight;
    weighted * weighted + dev_sum * dev_sum
}

/// A scored candidate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scored {
    pub weight: f64,
    pub triplet: Triplet,
}

/// Best candidate per sign quadrant of `(dev_sum, dev_lower)`.
#[derive(Debug, Clone, Default)]
pub struct QuadrantBest {
    slots: [Option<Scored>; 4],
}

impl QuadrantBest {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(dev_sum: f64, dev_lower: f64) -> usize {
        (((dev_sum < 0.0) as usize) << 1) | ((dev_lower < 0.0) as usize)
    }

    /// Offer a candidate; it replaces the quadrant's incumbent only when
    /// strictly better.
    pub fn offer(&mut self, dev_sum: f64, dev_lower: f64, weight: f64, triplet: Triplet) -> bool {
        let slot = &mut self.slots[Self::slot(dev_sum, dev_lower)];
        if slot.is_some_and(|best| best.weight <= weight) {
            return false;
        }
        *slot = Some(Scored { weight, triplet });
        true
    }

    /// Retained candidates in quadrant order.
    pub fn candidates(&self) -> impl Iterator<Item = &Scored> {
        self.slots.iter().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_relative_deviation() {
        assert_relative_eq!(relative_deviation(1.1, 1.0), 0.1, epsilon = 1e-12);
        assert_relative_eq!(relative_deviation(0.9, 1.0), -0.1, epsilon = 1e-12);
        assert_eq!(relative_deviation(0.25, 0.0), 0.25);
    }

    #[test]
    fn test_lower_deviation_weighs_more() {
        let lower_off = weighted_deviation(0.0, 0.01, 10.0);
        let sum_off = weighted_deviation(0.01, 0.0, 10.0);
        assert!(lower_off > sum_off);
        assert_relative_eq!(lower_off, 0.01, epsilon = 1e-12);
        assert_relative_eq!(sum_off, 0.0001, epsilon = 1e-12);
    }

    #[test]
    fn test_keeps_best_per_quadrant() {
        let mut q = QuadrantBest::new();
        assert!(q.offer(0.1, 0.1, 2.0, Triplet::new(0, 0, 0)));
        assert!(q.offer(0.1, 0.1, 1.0, Triplet::new(1, 1, 1)));
        assert!(!q.offer(0.1, 0.1, 1.5, Triplet::new(2, 2, 2)));
        assert!(q.offer(-0.1, 0.1, 3.0, Triplet::new(3, 3, 3)));

        let kept: Vec<Triplet> = q.candidates().map(|s| s.triplet).collect();
        assert_eq!(kept, vec![Triplet::new(1, 1, 1), Triplet::new(3, 3, 3)]);
    }

    #[test]
    fn test_ties_keep_first() {
        let mut q = QuadrantBest::new();
        q.offer(-0.1, -0.1, 1.0, Triplet::new(4, 5, 6));
        assert!(!q.offer(-0.2, -0.2, 1.0, Triplet::new(7, 8, 9)));
        assert_eq!(q.candidates().next().unwrap().triplet, Triplet::new(4, 5, 6));
    }
}
