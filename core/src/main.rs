use anyhow::Context;
use log::debug;

use powertrace_core::{
    adaptive_savgol_filter, load_power_series, normalized_power, np_line, render_chart,
    rolling_mean, NP_WINDOW, SAVGOL_WINDOW,
};

const INPUT_PATH: &str = "HIMdata1.csv";
const CHART_PATH: &str = "HIMdata1.png";

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries only the two result lines.
    env_logger::init();

    let series = load_power_series(INPUT_PATH)?;

    let w_smooth = rolling_mean(&series.w, NP_WINDOW);
    let w_savgol = adaptive_savgol_filter(&series.w, SAVGOL_WINDOW);
    debug!("smoothed {} samples", series.len());

    let np_ma = normalized_power(&series.w)
        .with_context(|| format!("series shorter than the {NP_WINDOW}-sample window"))?;
    let np_sg = normalized_power(&w_savgol)
        .with_context(|| format!("series shorter than the {NP_WINDOW}-sample window"))?;

    render_chart(CHART_PATH, &series, &w_smooth, &w_savgol, np_ma, np_sg)?;

    println!("{}", np_line("Media Móvil", np_ma));
    println!("{}", np_line("Savitzky-Golay Adaptativo", np_sg));
    Ok(())
}
