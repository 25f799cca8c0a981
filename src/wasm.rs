//! WASM bindings for Circuit Calc.
//!
//! This module provides JavaScript-friendly bindings for a browser-based
//! divider calculator.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { match_thresholds } from 'circuit_calc';
//!
//! await init();
//!
//! // [a, b, c, v_high, v_low, a, b, c, v_high, v_low, ...]
//! const flat = match_thresholds(2.0, 3.0, 24);
//! for (let n = 0; n < flat.length; n += 5) {
//!   console.log(flat.slice(n, n + 5));
//! }
//! ```

use wasm_bindgen::prelude::*;

use crate::divider::{self, Thresholds};
use crate::matcher::{MatcherConfig, RatioMatcher, DEFAULT_LOWER_WEIGHT};
use crate::series::Series;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Match two switching voltages against an E-series with default settings.
///
/// # Arguments
/// * `first`, `second` - Switching voltages in volts (any order)
/// * `series` - Factors per decade (3, 6, 12, 24, 48, 96 or 192)
///
/// # Returns
/// Solutions flattened as groups of five numbers
/// `[a, b, c, v_high, v_low]`, sorted by `v_high`.
#[wasm_bindgen]
pub fn match_thresholds(first: f64, second: f64, series: usize) -> Result<Vec<f64>, JsValue> {
    match_thresholds_with_config(first, second, series, crate::DEFAULT_V_REF, DEFAULT_LOWER_WEIGHT)
}

/// Match two switching voltages with a custom reference voltage and weighting.
///
/// # Arguments
/// * `v_ref` - Comparator reference voltage (default: 1.3)
/// * `lower_weight` - Weight of the lower threshold deviation (default: 10)
#[wasm_bindgen]
pub fn match_thresholds_with_config(
    first: f64,
    second: f64,
    series: usize,
    v_ref: f64,
    lower_weight: f64,
) -> Result<Vec<f64>, JsValue> {
    let series = Series::new(series).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let thresholds =
        Thresholds::new(first, second).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let matcher =
        RatioMatcher::with_config(MatcherConfig::new().with_lower_weight(lower_weight));

    let solutions = divider::match_thresholds(&series, &thresholds, v_ref, &matcher)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    Ok(solutions
        .iter()
        .flat_map(|s| {
            let [a, b, c] = s.resistors;
            [a, b, c, s.thresholds.high, s.thresholds.low]
        })
        .collect())
}

/// Get the supported series sizes.
#[wasm_bindgen]
pub fn supported_series() -> Vec<u32> {
    Series::supported().iter().map(|&n| n as u32).collect()
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
