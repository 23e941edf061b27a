//! Trailing-window statistics.
//!
//! Entries with fewer than `window` samples of history are `None` —
//! downstream order selection treats "no estimate yet" differently
//! from a computed zero, so a sentinel number is not enough.

/// Trailing rolling mean: `out[i]` = mean of `xs[i-W+1..=i]`,
/// `None` for `i < W-1`. Single pass with a running sum.
pub fn rolling_mean(xs: &[f64], window: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; xs.len()];
    if window == 0 || window > xs.len() {
        return out;
    }

    let mut sum = 0.0f64;
    for i in 0..xs.len() {
        sum += xs[i];
        if i >= window {
            sum -= xs[i - window];
        }
        if i + 1 >= window {
            out[i] = Some(sum / window as f64);
        }
    }
    out
}

/// Trailing rolling variance (unbiased, divide by W-1) over the same
/// windows as [`rolling_mean`]. Two-pass per window: the exact zero on
/// constant stretches matters for polynomial-order selection.
pub fn rolling_variance(xs: &[f64], window: usize) -> Vec<Option<f64>> {
    let mut out = vec![None; xs.len()];
    if window < 2 || window > xs.len() {
        return out;
    }

    for i in (window - 1)..xs.len() {
        let win = &xs[i + 1 - window..=i];
        let mean = win.iter().copied().sum::<f64>() / window as f64;
        let ss: f64 = win.iter().map(|x| (x - mean) * (x - mean)).sum();
        out[i] = Some(ss / (window - 1) as f64);
    }
    out
}
