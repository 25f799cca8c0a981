//! Engineering notation for component values and voltages.

use crate::error::{CalcError, Result};

/// SI prefixes used when formatting, largest first.
const PREFIXES: &[(f64, &str)] = &[(1e9, "G"), (1e6, "M"), (1e3, "k")];

/// Parse a value with an optional SI suffix and unit, e.g. `2.5`, `2500m`,
/// `4.7k` or `3.3V`.
pub fn parse_value(text: &str) -> Result<f64> {
    let invalid = || CalcError::InvalidValue {
        text: text.to_string(),
    };

    let trimmed = text.trim();
    let body = trimmed
        .strip_suffix(['V', 'v', 'Ω', 'R'])
        .unwrap_or(trimmed);
    if body.is_empty() {
        return Err(invalid());
    }

    let (num_str, multiplier) = match body.chars().last() {
        Some(last) => {
            let mult = match last {
                'p' => 1e-12,
                'n' => 1e-9,
                'u' | 'µ' => 1e-6,
                'm' => 1e-3,
                'k' | 'K' => 1e3,
                'M' => 1e6,
                'G' => 1e9,
                _ => 1.0,
            };
            if mult != 1.0 {
                (&body[..body.len() - last.len_utf8()], mult)
            } else {
                (body, 1.0)
            }
        }
        None => (body, 1.0),
    };

    num_str
        .parse::<f64>()
        .map(|v| v * multiplier)
        .map_err(|_| invalid())
}

/// Format a value with an SI prefix, e.g. `4700.0` as `4.7k`.
pub fn format_si(value: f64) -> String {
    for &(scale, prefix) in PREFIXES {
        if value.abs() >= scale {
            return format!("{}{}", trim_decimals(value / scale), prefix);
        }
    }
    trim_decimals(value)
}

fn trim_decimals(value: f64) -> String {
    let text = format!("{:.3}", value);
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}
