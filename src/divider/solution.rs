//! Resolved matcher results.

use std::fmt;

use crate::error::Result;
use crate::matcher::Triplet;
use crate::series::Series;
use crate::units::format_si;

use super::Thresholds;

/// A triplet resolved to resistor values and the thresholds they produce.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub triplet: Triplet,
    /// Resistor values `[a, b, c]` in ohms
    pub resistors: [f64; 3],
    /// Thresholds reconstructed from the resistor values
    pub thresholds: Thresholds,
}

impl Solution {
    /// Resolve `triplet` against `series`.
    pub fn resolve(series: &Series, triplet: Triplet, v_ref: f64) -> Result<Self> {
        let resistors = triplet.values(series)?;
        let [a, b, c] = resistors;
        Ok(Self {
            triplet,
            resistors,
            thresholds: Thresholds::from_resistors(a, b, c, v_ref),
        })
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = self.resistors;
        write!(
            f,
            "Resistors: {:>6} {:>6} {:>6}  Voltages: {:.3} {:.3}",
            format_si(a),
            format_si(b),
            format_si(c),
            self.thresholds.high,
            self.thresholds.low
        )
    }
}
