use crate::stats::rolling_mean;
use crate::types::NP_WINDOW;

/// Normalized Power:
/// 1) 30-sample trailing mean of power
/// 2) ^4-mean over the defined entries
/// 3) fourth root
///
/// Returns `None` when the series is too short for a single full
/// window. Used both on the raw watts and on the adaptive-Savgol
/// output; the two results are independent scalars.
pub fn normalized_power(watts: &[f64]) -> Option<f64> {
    let smooth = rolling_mean(watts, NP_WINDOW);

    let mut fourth_power_avg = 0.0f64;
    let mut n = 0usize;
    for v in smooth.iter().flatten() {
        fourth_power_avg += v.powi(4);
        n += 1;
    }
    if n == 0 {
        return None;
    }
    fourth_power_avg /= n as f64;

    Some(fourth_power_avg.powf(0.25))
}
