//! Adaptive Savitzky-Golay smoothing.
//!
//! The polynomial order is picked per sample from the local (trailing)
//! variance: order 5 above 2.0, order 3 above 1.0, order 1 otherwise.
//! Calm signal gets the higher order, noisy signal the lower one —
//! that direction is intentional, do not flip the comparisons.

use log::warn;
use nalgebra::{DMatrix, DVector};

use crate::stats::rolling_variance;

/// Ordered (lower bound, order) bands, checked top-down.
const ORDER_BANDS: &[(f64, usize)] = &[(2.0, 5), (1.0, 3)];

/// Lowest band; also the fallback while there is no variance estimate.
const ORDER_DEFAULT: usize = 1;

/// Map a variance estimate to a polynomial order. `None` (insufficient
/// history) falls back to the lowest order, not to an error.
pub fn select_polyorder(variance: Option<f64>) -> usize {
    match variance {
        Some(v) => ORDER_BANDS
            .iter()
            .find(|(bound, _)| v > *bound)
            .map(|&(_, order)| order)
            .unwrap_or(ORDER_DEFAULT),
        None => ORDER_DEFAULT,
    }
}

/// Smooth `series` with a centered window of `window_length` samples
/// (odd), refitting a local polynomial whose order follows the local
/// variance. Output has the input's length; the `window_length / 2`
/// samples at each edge are left at 0.0 and never filtered.
pub fn adaptive_savgol_filter(series: &[f64], window_length: usize) -> Vec<f64> {
    debug_assert!(window_length % 2 == 1, "window_length must be odd");

    let mut filtered = vec![0.0f64; series.len()];
    if window_length > series.len() {
        // Degrades to an all-zero-edge output instead of failing.
        warn!(
            "savgol window ({}) exceeds series length ({}), nothing smoothed",
            window_length,
            series.len()
        );
        return filtered;
    }

    let variances = rolling_variance(series, window_length);
    let half = window_length / 2;

    for i in half..series.len() - half {
        let order = select_polyorder(variances[i]);
        let win = &series[i - half..i - half + window_length];
        if let Some(v) = polyfit_center(win, order) {
            filtered[i] = v;
        }
    }
    filtered
}

/// Least-squares polynomial fit over one window, evaluated at the
/// window center. Abscissae are centered (−half..=half) so the fitted
/// center value is the constant coefficient.
///
/// Normal equations solved with QR, SVD as fallback for the
/// rank-deficient case. `order` must stay below the window length;
/// that holds for every band with the default window of 31.
fn polyfit_center(window: &[f64], order: usize) -> Option<f64> {
    let n = window.len();
    let n_coeffs = order + 1;
    if n_coeffs > n {
        return None;
    }

    let half = (n / 2) as f64;
    let design = DMatrix::from_fn(n, n_coeffs, |r, c| (r as f64 - half).powi(c as i32));
    let y = DVector::from_column_slice(window);

    let xtx = design.transpose() * &design;
    let xty = design.transpose() * y;

    let coeffs = match xtx.clone().qr().solve(&xty) {
        Some(c) => c,
        None => xtx.svd(true, true).solve(&xty, f64::EPSILON * 100.0).ok()?,
    };
    Some(coeffs[0])
}
