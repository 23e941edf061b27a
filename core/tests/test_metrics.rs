use powertrace_core::metrics::normalized_power;
use powertrace_core::savgol::adaptive_savgol_filter;

#[test]
fn constant_forty_samples_gives_exactly_the_constant() {
    // Rolling mean is undefined for 0..=28, equals 100 for 29..=39;
    // all 4th powers are equal, so the 4th root returns 100.
    let watts = vec![100.0; 40];
    let np = normalized_power(&watts).unwrap();
    assert!((np - 100.0).abs() < 1e-9, "np = {np}");
}

#[test]
fn too_short_series_has_no_normalized_power() {
    let watts = vec![250.0; 29];
    assert_eq!(normalized_power(&watts), None);
}

#[test]
fn exactly_one_window_is_enough() {
    let watts = vec![180.0; 30];
    let np = normalized_power(&watts).unwrap();
    assert!((np - 180.0).abs() < 1e-9);
}

#[test]
fn periodic_series_reduces_to_the_windowed_mean() {
    // Period 30 aligned with the window: every rolling mean equals
    // the mean over one period, so NP collapses to that mean.
    let period: Vec<f64> = (0..30).map(|i| 100.0 + (i % 5) as f64).collect();
    let watts: Vec<f64> = period.iter().copied().cycle().take(120).collect();
    let period_mean = period.iter().sum::<f64>() / period.len() as f64;

    let np = normalized_power(&watts).unwrap();
    assert!((np - period_mean).abs() < 1e-9, "np = {np}");
}

#[test]
fn surges_raise_np_above_the_average() {
    // 4th-power weighting: a spiky ride scores higher than its plain
    // average power.
    let mut watts = vec![150.0; 300];
    for chunk in watts.chunks_mut(60) {
        for w in &mut chunk[..10] {
            *w = 450.0;
        }
    }
    let avg = watts.iter().sum::<f64>() / watts.len() as f64;
    let np = normalized_power(&watts).unwrap();
    assert!(np > avg, "np {np} should exceed avg {avg}");
}

#[test]
fn np_over_savgol_output_of_constant_series() {
    // The smoothed series keeps 15 zero samples per edge; rolling
    // means over those mixed windows are still defined, so the result
    // is a positive scalar below the plateau level.
    let watts = vec![200.0; 120];
    let smoothed = adaptive_savgol_filter(&watts, 31);
    let np = normalized_power(&smoothed).unwrap();
    assert!(np > 0.0 && np < 200.0 + 1e-9, "np = {np}");
}
