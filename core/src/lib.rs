pub mod loader;
pub mod metrics;
pub mod report;
pub mod savgol;
pub mod stats;
pub mod types;

pub use loader::{load_power_series, SeriesError};
pub use metrics::normalized_power;
pub use report::{np_line, render_chart};
pub use savgol::{adaptive_savgol_filter, select_polyorder};
pub use stats::{rolling_mean, rolling_variance};
pub use types::{PowerSeries, Sample, NP_WINDOW, SAVGOL_WINDOW};
