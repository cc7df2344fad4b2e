//! Per-station metric tracking and snapshot composition.
//!
//! [`StationState`] is the single integration point between the data source
//! side (which pushes readings in) and the renderer side (which consumes
//! [`MetricSnapshot`]s). Ingest and snapshot both run on the TUI thread, so
//! a render never observes a window mid-eviction.

use chrono::{DateTime, Local};

use super::bands::{ColorBand, ThresholdConfig};
use super::sample::{Metric, MetricSample};
use super::sparkline::{self, SparkStyle};
use super::trend::{trend_of, Trend, TrendConfig};
use super::window::RollingWindow;
use super::ConfigError;
use crate::source::Observation;

/// Tuning knobs for a station's tracking, fixed at construction.
#[derive(Debug, Clone, Copy)]
pub struct StationConfig {
    /// Samples retained per metric.
    pub capacity: usize,
    /// Sparkline glyph budget.
    pub sparkline_width: usize,
    pub trend: TrendConfig,
}

impl Default for StationConfig {
    fn default() -> Self {
        Self {
            capacity: 60,
            sparkline_width: 25,
            trend: TrendConfig::default(),
        }
    }
}

/// Render-ready derived state for one metric at one instant.
///
/// Recomputed fresh on every call to [`StationState::snapshot_all`]; plain
/// data with no drawing primitives, so any renderer can consume it.
#[derive(Debug, Clone)]
pub struct MetricSnapshot {
    pub metric: Metric,
    pub value: Option<f64>,
    pub band: ColorBand,
    pub trend: Trend,
    pub sparkline: String,
    pub range_label: String,
}

/// Rolling history for every tracked metric of one station.
pub struct StationState {
    config: StationConfig,
    thresholds: ThresholdConfig,
    windows: Vec<(Metric, RollingWindow)>,
}

impl StationState {
    /// Create empty windows for all tracked metrics.
    ///
    /// Fails fast on invalid configuration (zero capacity).
    pub fn new(config: StationConfig, thresholds: ThresholdConfig) -> Result<Self, ConfigError> {
        let windows = Metric::ALL
            .iter()
            .map(|&metric| Ok((metric, RollingWindow::new(config.capacity)?)))
            .collect::<Result<Vec<_>, ConfigError>>()?;
        Ok(Self {
            config,
            thresholds,
            windows,
        })
    }

    /// Push one reading (or an explicit missing marker) for a named metric.
    ///
    /// An unknown metric name means the data source is violating its
    /// contract; it is rejected before any window is touched.
    pub fn ingest(
        &mut self,
        name: &str,
        value: Option<f64>,
        at: DateTime<Local>,
    ) -> Result<(), ConfigError> {
        let metric = Metric::from_name(name)?;
        self.window_mut(metric).push(MetricSample::new(at, value));
        Ok(())
    }

    /// Push all tracked readings of one observation with its timestamp.
    pub fn ingest_observation(&mut self, obs: &Observation) {
        for metric in Metric::ALL {
            let value = obs.tracked_value(metric);
            self.window_mut(metric).push(MetricSample::new(obs.at, value));
        }
    }

    /// Compose classification, trend, and sparkline per metric, in the
    /// declared display order.
    pub fn snapshot_all(&self) -> Vec<MetricSnapshot> {
        self.windows
            .iter()
            .map(|(metric, window)| {
                let value = window.latest().and_then(|s| s.value);
                let (sparkline, range_label) = sparkline::render(
                    window,
                    self.config.sparkline_width,
                    &SparkStyle::for_metric(*metric),
                );
                MetricSnapshot {
                    metric: *metric,
                    value,
                    band: self.thresholds.classify(*metric, value),
                    trend: trend_of(window, &self.config.trend),
                    sparkline,
                    range_label,
                }
            })
            .collect()
    }

    /// Number of readings currently held (all windows fill in lockstep).
    pub fn reading_count(&self) -> usize {
        self.windows.first().map_or(0, |(_, w)| w.len())
    }

    pub fn window(&self, metric: Metric) -> &RollingWindow {
        &self.windows.iter().find(|(m, _)| *m == metric).expect("tracked metric").1
    }

    fn window_mut(&mut self, metric: Metric) -> &mut RollingWindow {
        &mut self.windows.iter_mut().find(|(m, _)| *m == metric).expect("tracked metric").1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station() -> StationState {
        StationState::new(StationConfig::default(), ThresholdConfig::default()).unwrap()
    }

    fn observation(temp: f64) -> Observation {
        Observation {
            at: Local::now(),
            temperature: Some(temp),
            feels_like: Some(temp - 2.0),
            humidity: Some(45.0),
            wind_speed: Some(5.0),
            pressure: Some(29.95),
            ..Observation::empty(Local::now())
        }
    }

    #[test]
    fn test_zero_capacity_fails_fast() {
        let config = StationConfig {
            capacity: 0,
            ..StationConfig::default()
        };
        assert!(StationState::new(config, ThresholdConfig::default()).is_err());
    }

    #[test]
    fn test_ingest_by_name() {
        let mut station = station();
        station.ingest("temperature", Some(70.0), Local::now()).unwrap();
        assert_eq!(station.window(Metric::Temperature).len(), 1);
        assert_eq!(station.window(Metric::Humidity).len(), 0);
    }

    #[test]
    fn test_unknown_metric_rejected_without_side_effects() {
        let mut station = station();
        station.ingest("temperature", Some(70.0), Local::now()).unwrap();

        let err = station.ingest("solar_radiation", Some(1.0), Local::now());
        assert!(err.is_err());
        for metric in Metric::ALL {
            let expected = if metric == Metric::Temperature { 1 } else { 0 };
            assert_eq!(station.window(metric).len(), expected);
        }
    }

    #[test]
    fn test_snapshot_order_matches_declaration() {
        let mut station = station();
        station.ingest_observation(&observation(70.0));
        let metrics: Vec<Metric> = station.snapshot_all().iter().map(|s| s.metric).collect();
        assert_eq!(metrics, Metric::ALL.to_vec());
    }

    #[test]
    fn test_snapshot_composes_band_trend_and_sparkline() {
        let mut station = station();
        for temp in [70.0, 72.0, 74.0, 76.0, 78.0] {
            station.ingest_observation(&observation(temp));
        }

        let snapshots = station.snapshot_all();
        let temp = &snapshots[0];
        assert_eq!(temp.value, Some(78.0));
        assert_eq!(temp.band, ColorBand::Yellow);
        assert_eq!(temp.trend, Trend::Rising);
        assert_eq!(temp.sparkline.chars().count(), 5);
        assert_eq!(temp.range_label, "70-78°F");

        let humidity = &snapshots[2];
        assert_eq!(humidity.band, ColorBand::Green);
        assert_eq!(humidity.trend, Trend::Stable);
    }

    #[test]
    fn test_missing_reading_propagates_unknown_band() {
        let mut station = station();
        let mut obs = observation(70.0);
        obs.wind_speed = None;
        station.ingest_observation(&obs);

        let snapshots = station.snapshot_all();
        let wind = snapshots.iter().find(|s| s.metric == Metric::WindSpeed).unwrap();
        assert_eq!(wind.value, None);
        assert_eq!(wind.band, ColorBand::Unknown);
        assert_eq!(wind.sparkline, "·");
        assert_eq!(wind.range_label, "");
    }

    #[test]
    fn test_reading_count_tracks_window_fill() {
        let mut station = station();
        assert_eq!(station.reading_count(), 0);
        for temp in [70.0, 71.0, 72.0] {
            station.ingest_observation(&observation(temp));
        }
        assert_eq!(station.reading_count(), 3);
    }
}
