//! Tracked metrics and individual readings.

use chrono::{DateTime, Local};

use super::ConfigError;

/// A weather metric tracked with full history (window, trend, sparkline).
///
/// The variant order here is the display order of the dashboard, and the
/// order in which [`StationState::snapshot_all`](super::StationState::snapshot_all)
/// yields snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    Temperature,
    FeelsLike,
    Humidity,
    WindSpeed,
    Pressure,
}

impl Metric {
    /// All tracked metrics, in display order.
    pub const ALL: [Metric; 5] = [
        Metric::Temperature,
        Metric::FeelsLike,
        Metric::Humidity,
        Metric::WindSpeed,
        Metric::Pressure,
    ];

    /// Resolve a data-source metric name.
    ///
    /// Unknown names are a contract violation by the data source, reported
    /// as a fail-fast configuration error.
    pub fn from_name(name: &str) -> Result<Self, ConfigError> {
        match name {
            "temperature" => Ok(Metric::Temperature),
            "feels_like" => Ok(Metric::FeelsLike),
            "humidity" => Ok(Metric::Humidity),
            "wind_speed" => Ok(Metric::WindSpeed),
            "pressure" => Ok(Metric::Pressure),
            other => Err(ConfigError::UnknownMetric(other.to_string())),
        }
    }

    /// Canonical name, matching what [`from_name`](Self::from_name) accepts.
    pub fn name(&self) -> &'static str {
        match self {
            Metric::Temperature => "temperature",
            Metric::FeelsLike => "feels_like",
            Metric::Humidity => "humidity",
            Metric::WindSpeed => "wind_speed",
            Metric::Pressure => "pressure",
        }
    }

    /// Label used in the dashboard table.
    pub fn label(&self) -> &'static str {
        match self {
            Metric::Temperature => "Temperature",
            Metric::FeelsLike => "Feels Like",
            Metric::Humidity => "Humidity",
            Metric::WindSpeed => "Wind Speed",
            Metric::Pressure => "Pressure",
        }
    }

    /// Unit suffix for display and range labels.
    pub fn unit(&self) -> &'static str {
        match self {
            Metric::Temperature | Metric::FeelsLike => "°F",
            Metric::Humidity => "%",
            Metric::WindSpeed => " mph",
            Metric::Pressure => " inHg",
        }
    }

    /// Decimal places at which this metric is naturally read.
    pub fn precision(&self) -> usize {
        match self {
            Metric::Temperature | Metric::FeelsLike | Metric::WindSpeed => 1,
            Metric::Humidity => 0,
            Metric::Pressure => 2,
        }
    }

    /// Format a current value for display, e.g. `70.3°F` or `N/A`.
    pub fn format_value(&self, value: Option<f64>) -> String {
        match value {
            Some(v) => format!("{:.*}{}", self.precision(), v, self.unit()),
            None => "N/A".to_string(),
        }
    }
}

/// One reading of one metric at one point in time.
///
/// `value` is `None` when the station or API omitted the field; a missing
/// reading still occupies its time slot in the window so sparklines stay
/// aligned with elapsed ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MetricSample {
    pub at: DateTime<Local>,
    pub value: Option<f64>,
}

impl MetricSample {
    pub fn new(at: DateTime<Local>, value: Option<f64>) -> Self {
        Self { at, value }
    }

    pub fn is_missing(&self) -> bool {
        self.value.is_none()
    }
}
