//! Simple Moving Average (SMA).
//!
//! Trailing mean over a fixed window; first valid value at index window-1.
//! Applied here to the RSI series, so NaN inputs are expected — every
//! window containing a NaN produces NaN.

/// Compute the trailing SMA over a value series.
pub fn sma(values: &[f64], window: usize) -> Vec<f64> {
    assert!(window >= 1, "SMA window must be >= 1");

    let n = values.len();
    let mut result = vec![f64::NAN; n];

    if n < window {
        return result;
    }

    for i in (window - 1)..n {
        let slice = &values[(i + 1 - window)..=i];
        if slice.iter().any(|v| v.is_nan()) {
            continue;
        }
        result[i] = slice.iter().sum::<f64>() / window as f64;
    }

    result
}
