use powertrace_core::report::{np_line, render_chart};
use powertrace_core::types::PowerSeries;

#[test]
fn np_lines_match_the_console_format() {
    assert_eq!(
        np_line("Media Móvil", 213.456),
        "Potencia Normalizada (Media Móvil): 213.46 W"
    );
    assert_eq!(
        np_line("Savitzky-Golay Adaptativo", 200.0),
        "Potencia Normalizada (Savitzky-Golay Adaptativo): 200.00 W"
    );
}

#[test]
fn empty_series_is_rejected_before_drawing() {
    let series = PowerSeries::default();
    let err = render_chart("unused.png", &series, &[], &[], 0.0, 0.0).unwrap_err();
    assert!(err.to_string().contains("empty series"));
}
