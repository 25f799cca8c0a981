//! # Circuit Calc
//!
//! Standard resistor series matching for threshold voltage dividers.
//!
//! The ICL7665 under/over-voltage detector compares a divided input against
//! an internal reference. Two switching thresholds need a three-resistor
//! divider whose ratios can only be approximated with preferred (E-series)
//! values. This library finds good approximations without enumerating every
//! combination.
//!
//! This library provides:
//! - Virtual, decade-spanning preferred value series (E3 to E192)
//! - A two-phase ratio matcher working in the logarithmic domain
//! - Conversion between threshold voltages and divider coefficients
//!
//! ## Architecture
//!
//! - [`series`] - Preferred value series as an index-addressed virtual array
//! - [`matcher`] - Ratio search over a series
//! - [`divider`] - Threshold/coefficient conversion and resolved solutions
//! - [`units`] - Engineering notation parsing and formatting
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! icl7665 2.0 3.0 -s E12 -s E24
//! ```
//!
//! ### Library
//!
//! ```
//! use circuit_calc::{divider, RatioMatcher, Series, Thresholds, DEFAULT_V_REF};
//!
//! let series = Series::new(24).unwrap();
//! let thresholds = Thresholds::new(3.0, 2.0).unwrap();
//! let solutions =
//!     divider::match_thresholds(&series, &thresholds, DEFAULT_V_REF, &RatioMatcher::new())
//!         .unwrap();
//! assert!(!solutions.is_empty());
//! ```
//!
//! ### WASM
//!
//! ```javascript
//! import { match_thresholds } from 'circuit_calc';
//!
//! const flat = match_thresholds(2.0, 3.0, 24);
//! ```

pub mod divider;
pub mod error;
pub mod matcher;
pub mod series;
pub mod units;

// Re-export main types for convenience
pub use divider::{RatioTarget, Solution, Thresholds};
pub use error::{CalcError, Result};
pub use matcher::{find_best_triplets, MatcherConfig, RatioMatcher, Triplet};
pub use series::Series;

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

#[cfg(feature = "wasm")]
pub use wasm::match_thresholds as wasm_match_thresholds;

/// Reference voltage of the ICL7665 comparators in volts
pub const DEFAULT_V_REF: f64 = 1.3;

/// Series used when none is requested
pub const DEFAULT_SERIES: usize = 24;
