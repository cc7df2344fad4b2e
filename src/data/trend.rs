//! Trend direction derived from recent window history.

use super::window::RollingWindow;

/// Directional classification of a metric's recent movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Rising,
    Falling,
    Stable,
    /// Fewer than two usable readings.
    InsufficientData,
}

impl Trend {
    /// Arrow symbol for display.
    pub fn symbol(&self) -> &'static str {
        match self {
            Trend::Rising => "↗",
            Trend::Falling => "↘",
            Trend::Stable => "─",
            Trend::InsufficientData => "·",
        }
    }
}

/// Tuning for trend computation.
#[derive(Debug, Clone, Copy)]
pub struct TrendConfig {
    /// Number of recent samples averaged on each side of the comparison.
    pub window: usize,
    /// Relative epsilon: fraction of the larger compared magnitude below
    /// which a difference counts as stable.
    pub rel_epsilon: f64,
    /// Absolute epsilon floor, so near-zero values don't flap.
    pub min_epsilon: f64,
}

impl Default for TrendConfig {
    fn default() -> Self {
        Self {
            window: 3,
            rel_epsilon: 0.005,
            min_epsilon: 0.05,
        }
    }
}

/// Compute the trend of a window.
///
/// Compares the mean of the most recent `k` non-missing values against the
/// mean of the `k` before them (`k = config.window`, clamped to what the
/// history offers). With fewer than `2k` non-missing values it degrades to
/// comparing the latest value against the previous one; with fewer than two
/// it reports [`Trend::InsufficientData`]. Missing samples are skipped, not
/// treated as zero, and timestamps never enter the computation: only sample
/// order matters.
pub fn trend_of(window: &RollingWindow, config: &TrendConfig) -> Trend {
    let values: Vec<f64> = window.snapshot().filter_map(|s| s.value).collect();
    let k = config.window.max(1);

    let (recent, prior) = if values.len() >= 2 * k {
        let tail = &values[values.len() - 2 * k..];
        (mean(&tail[k..]), mean(&tail[..k]))
    } else if values.len() >= 2 {
        (values[values.len() - 1], values[values.len() - 2])
    } else {
        return Trend::InsufficientData;
    };

    let epsilon = config.min_epsilon.max(config.rel_epsilon * recent.abs().max(prior.abs()));
    let delta = recent - prior;
    if delta > epsilon {
        Trend::Rising
    } else if delta < -epsilon {
        Trend::Falling
    } else {
        Trend::Stable
    }
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}
