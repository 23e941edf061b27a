//! Terminal sink of the pipeline: one PNG chart overlaying the raw
//! trace, both smoothed variants and the two normalized-power
//! thresholds, plus the two formatted console lines.

use std::path::Path;

use anyhow::bail;
use log::info;
use plotters::prelude::*;

use crate::types::PowerSeries;

const RAW_COLOR: RGBColor = RGBColor(30, 119, 180);
const SMOOTH_COLOR: RGBColor = RGBColor(255, 127, 14);
const SAVGOL_COLOR: RGBColor = RGBColor(44, 160, 44);
const NP_MA_COLOR: RGBColor = RGBColor(214, 39, 40);
const NP_SG_COLOR: RGBColor = RGBColor(128, 0, 128);

/// Exact console/legend line for one normalized-power result.
pub fn np_line(method: &str, value: f64) -> String {
    format!("Potencia Normalizada ({method}): {value:.2} W")
}

/// Render the summary chart. `smooth` keeps its undefined prefix
/// (those points are simply not drawn); `savgol` is drawn in full,
/// zero edges included.
pub fn render_chart(
    path: impl AsRef<Path>,
    series: &PowerSeries,
    smooth: &[Option<f64>],
    savgol: &[f64],
    np_ma: f64,
    np_sg: f64,
) -> anyhow::Result<()> {
    if series.is_empty() {
        bail!("nothing to plot: empty series");
    }
    let path = path.as_ref();

    let x_min = series.s.iter().copied().fold(f64::INFINITY, f64::min);
    let x_max = series.s.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let y_max = series
        .w
        .iter()
        .copied()
        .chain([np_ma, np_sg])
        .fold(0.0f64, f64::max);

    let area = BitMapBackend::new(path, (1280, 760)).into_drawing_area();
    area.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&area)
        .margin(25)
        .caption(
            "Datos Originales, Suavizado, Filtro Savitzky-Golay Adaptativo y Potencia Normalizada",
            ("sans-serif", 22),
        )
        .set_label_area_size(LabelAreaPosition::Left, 60)
        .set_label_area_size(LabelAreaPosition::Bottom, 40)
        .build_cartesian_2d(x_min..x_max, 0.0..y_max * 1.1)?;

    chart
        .configure_mesh()
        .x_desc("Tiempo (s)")
        .y_desc("Watts")
        .draw()?;

    chart
        .draw_series(LineSeries::new(
            series.s.iter().copied().zip(series.w.iter().copied()),
            &RAW_COLOR,
        ))?
        .label("Datos originales")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 30, y)], RAW_COLOR));

    chart
        .draw_series(LineSeries::new(
            series
                .s
                .iter()
                .zip(smooth.iter())
                .filter_map(|(&x, v)| v.map(|y| (x, y))),
            &SMOOTH_COLOR,
        ))?
        .label("Suavizado ventana 30 muestras")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 30, y)], SMOOTH_COLOR));

    chart
        .draw_series(LineSeries::new(
            series.s.iter().copied().zip(savgol.iter().copied()),
            &SAVGOL_COLOR,
        ))?
        .label("Filtro Savitzky-Golay Adaptativo")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 30, y)], SAVGOL_COLOR));

    // Horizontal reference lines for the two scalars.
    for (np, color, method) in [
        (np_ma, NP_MA_COLOR, "Media Móvil"),
        (np_sg, NP_SG_COLOR, "Savitzky-Golay Adaptativo"),
    ] {
        chart
            .draw_series(LineSeries::new([(x_min, np), (x_max, np)], &color))?
            .label(np_line(method, np))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 30, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.7))
        .border_style(BLACK.mix(0.3))
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    area.present()?;
    info!("chart written to {}", path.display());
    Ok(())
}
