use serde::{Deserialize, Serialize};

/// Rolling-mean window (samples) used for normalized power.
pub const NP_WINDOW: usize = 30;

/// Window length (samples, odd) for the adaptive Savitzky-Golay filter.
pub const SAVGOL_WINDOW: usize = 31;

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Sample {
    pub s: f64, // time/distance axis (sec)
    pub w: f64, // watts
}

/// Column view of one loaded trace. `s` and `w` have equal length,
/// order follows the file.
#[derive(Debug, Clone, Default)]
pub struct PowerSeries {
    pub s: Vec<f64>,
    pub w: Vec<f64>,
}

impl PowerSeries {
    pub fn len(&self) -> usize {
        self.w.len()
    }

    pub fn is_empty(&self) -> bool {
        self.w.is_empty()
    }

    pub fn push(&mut self, sample: Sample) {
        self.s.push(sample.s);
        self.w.push(sample.w);
    }
}
