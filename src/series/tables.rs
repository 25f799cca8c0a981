//! Preferred value factor tables (IEC 60063 E-series).

/// Factor counts with a known table, in ascending order.
pub const SUPPORTED: &[usize] = &[3, 6, 12, 24, 48, 96, 192];

/// E3 factors.
pub const E3: &[f64] = &[1.0, 2.2, 4.7];

/// E6 factors.
pub const E6: &[f64] = &[1.0, 1.5, 2.2, 3.3, 4.7, 6.8];

/// E12 factors.
pub const E12: &[f64] = &[1.0, 1.2, 1.5, 1.8, 2.2, 2.7, 3.3, 3.9, 4.7, 5.6, 6.8, 8.2];

/// E24 factors.
pub const E24: &[f64] = &[
    1.0, 1.1, 1.2, 1.3, 1.5, 1.6, 1.8, 2.0, 2.2, 2.4, 2.7, 3.0, 3.3, 3.6, 3.9, 4.3, 4.7, 5.1,
    5.6, 6.2, 6.8, 7.5, 8.2, 9.1,
];

/// Get the factor table for a series with `count` factors per decade.
///
/// E48 and above are generated geometrically as `10^(x/count)` rounded to
/// two decimals.
pub fn factors_for(count: usize) -> Option<Vec<f64>> {
    match count {
        3 => Some(E3.to_vec()),
        6 => Some(E6.to_vec()),
        12 => Some(E12.to_vec()),
        24 => Some(E24.to_vec()),
        48 | 96 | 192 => Some(geometric(count)),
        _ => None,
    }
}

fn geometric(count: usize) -> Vec<f64> {
    (0..count)
        .map(|x| {
            let f = 10f64.powf(x as f64 / count as f64);
            (f * 100.0).round() / 100.0
        })
        .collect()
}
