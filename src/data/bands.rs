//! Color-band classification of metric values.
//!
//! Each metric partitions the real line into ordered bands; a reading falls
//! into exactly one. The band is a display color category, not a judgement
//! the core acts on.

use std::collections::HashMap;

use super::sample::Metric;
use super::ConfigError;

/// Discrete color category a value falls into under configured thresholds.
///
/// Named after the terminal colors the dashboard renders them with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorBand {
    Blue,
    Cyan,
    Green,
    Yellow,
    Red,
    /// A missing reading. Never produced for a numeric value.
    Unknown,
}

/// One band of a metric's threshold table: values up to and including
/// `upper` (when finite) belong to `band`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandSpec {
    pub upper: f64,
    pub band: ColorBand,
}

impl BandSpec {
    pub fn new(upper: f64, band: ColorBand) -> Self {
        Self { upper, band }
    }
}

/// Per-metric ordered band tables covering the whole real line.
///
/// Immutable after construction; built once at startup and passed into
/// [`StationState`](super::StationState). The boundary rule is canonical:
/// a value equal to an upper bound belongs to the lower band, so 32.0°F
/// classifies as Blue under the default table.
#[derive(Debug, Clone)]
pub struct ThresholdConfig {
    tables: HashMap<Metric, Vec<BandSpec>>,
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        let temperature = vec![
            BandSpec::new(32.0, ColorBand::Blue),
            BandSpec::new(50.0, ColorBand::Cyan),
            BandSpec::new(75.0, ColorBand::Green),
            BandSpec::new(90.0, ColorBand::Yellow),
            BandSpec::new(f64::INFINITY, ColorBand::Red),
        ];
        let humidity = vec![
            BandSpec::new(30.0, ColorBand::Yellow),
            BandSpec::new(70.0, ColorBand::Green),
            BandSpec::new(f64::INFINITY, ColorBand::Cyan),
        ];
        let wind = vec![
            BandSpec::new(10.0, ColorBand::Green),
            BandSpec::new(25.0, ColorBand::Yellow),
            BandSpec::new(f64::INFINITY, ColorBand::Red),
        ];
        let pressure = vec![
            BandSpec::new(29.80, ColorBand::Yellow),
            BandSpec::new(30.20, ColorBand::Green),
            BandSpec::new(f64::INFINITY, ColorBand::Cyan),
        ];

        let mut tables = HashMap::new();
        tables.insert(Metric::Temperature, temperature.clone());
        tables.insert(Metric::FeelsLike, temperature);
        tables.insert(Metric::Humidity, humidity);
        tables.insert(Metric::WindSpeed, wind);
        tables.insert(Metric::Pressure, pressure);

        // The default tables are valid by construction.
        Self { tables }
    }
}

impl ThresholdConfig {
    /// Build a config from explicit per-metric tables.
    ///
    /// Every tracked metric needs a table; each table must have strictly
    /// increasing upper bounds and end in an unbounded band, so the bands
    /// partition the real line with no gap and no overlap.
    pub fn new(tables: HashMap<Metric, Vec<BandSpec>>) -> Result<Self, ConfigError> {
        for metric in Metric::ALL {
            let table = tables
                .get(&metric)
                .ok_or_else(|| ConfigError::MissingThresholds(metric.name()))?;
            Self::validate_table(metric, table)?;
        }
        Ok(Self { tables })
    }

    fn validate_table(metric: Metric, table: &[BandSpec]) -> Result<(), ConfigError> {
        let Some(last) = table.last() else {
            return Err(ConfigError::MalformedThresholds {
                metric: metric.name(),
                reason: "empty band table".to_string(),
            });
        };
        if last.upper != f64::INFINITY {
            return Err(ConfigError::MalformedThresholds {
                metric: metric.name(),
                reason: "final band must be unbounded".to_string(),
            });
        }
        for pair in table.windows(2) {
            if !pair[0].upper.is_finite() {
                return Err(ConfigError::MalformedThresholds {
                    metric: metric.name(),
                    reason: "interior bound must be finite".to_string(),
                });
            }
            if pair[1].upper <= pair[0].upper {
                return Err(ConfigError::MalformedThresholds {
                    metric: metric.name(),
                    reason: format!(
                        "bounds must be strictly increasing ({} then {})",
                        pair[0].upper, pair[1].upper
                    ),
                });
            }
        }
        Ok(())
    }

    /// Classify a reading into its color band.
    ///
    /// Total over the reals for every metric; a missing reading maps to
    /// [`ColorBand::Unknown`], never to a numeric band.
    pub fn classify(&self, metric: Metric, value: Option<f64>) -> ColorBand {
        let Some(value) = value else {
            return ColorBand::Unknown;
        };
        let table = &self.tables[&metric];
        table
            .iter()
            .find(|spec| value <= spec.upper)
            .map(|spec| spec.band)
            // Unreachable for validated tables: the last bound is +inf.
            .unwrap_or(ColorBand::Unknown)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temperature_bands() {
        let config = ThresholdConfig::default();
        let cases = [
            (-10.0, ColorBand::Blue),
            (32.0, ColorBand::Blue), // boundary belongs to the lower band
            (32.1, ColorBand::Cyan),
            (50.0, ColorBand::Cyan),
            (70.0, ColorBand::Green),
            (76.0, ColorBand::Yellow),
            (90.0, ColorBand::Yellow),
            (95.0, ColorBand::Red),
        ];
        for (value, band) in cases {
            assert_eq!(
                config.classify(Metric::Temperature, Some(value)),
                band,
                "temperature {value}"
            );
        }
    }

    #[test]
    fn test_humidity_and_wind_bands() {
        let config = ThresholdConfig::default();
        assert_eq!(config.classify(Metric::Humidity, Some(20.0)), ColorBand::Yellow);
        assert_eq!(config.classify(Metric::Humidity, Some(55.0)), ColorBand::Green);
        assert_eq!(config.classify(Metric::Humidity, Some(85.0)), ColorBand::Cyan);
        assert_eq!(config.classify(Metric::WindSpeed, Some(5.0)), ColorBand::Green);
        assert_eq!(config.classify(Metric::WindSpeed, Some(15.0)), ColorBand::Yellow);
        assert_eq!(config.classify(Metric::WindSpeed, Some(30.0)), ColorBand::Red);
    }

    #[test]
    fn test_missing_value_is_unknown() {
        let config = ThresholdConfig::default();
        for metric in Metric::ALL {
            assert_eq!(config.classify(metric, None), ColorBand::Unknown);
        }
    }

    #[test]
    fn test_boundary_is_deterministic() {
        let config = ThresholdConfig::default();
        for _ in 0..10 {
            assert_eq!(config.classify(Metric::Temperature, Some(32.0)), ColorBand::Blue);
        }
    }

    #[test]
    fn test_classification_is_total() {
        let config = ThresholdConfig::default();
        for value in [f64::MIN, -1e9, 0.0, 1e9, f64::MAX] {
            assert_ne!(config.classify(Metric::Pressure, Some(value)), ColorBand::Unknown);
        }
    }

    #[test]
    fn test_rejects_empty_table() {
        let mut tables: HashMap<Metric, Vec<BandSpec>> = HashMap::new();
        for metric in Metric::ALL {
            tables.insert(metric, vec![BandSpec::new(f64::INFINITY, ColorBand::Green)]);
        }
        tables.insert(Metric::Humidity, Vec::new());
        assert!(ThresholdConfig::new(tables).is_err());
    }

    #[test]
    fn test_rejects_non_increasing_bounds() {
        let mut tables: HashMap<Metric, Vec<BandSpec>> = HashMap::new();
        for metric in Metric::ALL {
            tables.insert(metric, vec![BandSpec::new(f64::INFINITY, ColorBand::Green)]);
        }
        tables.insert(
            Metric::WindSpeed,
            vec![
                BandSpec::new(25.0, ColorBand::Yellow),
                BandSpec::new(10.0, ColorBand::Green),
                BandSpec::new(f64::INFINITY, ColorBand::Red),
            ],
        );
        assert!(ThresholdConfig::new(tables).is_err());
    }

    #[test]
    fn test_rejects_bounded_final_band() {
        let mut tables: HashMap<Metric, Vec<BandSpec>> = HashMap::new();
        for metric in Metric::ALL {
            tables.insert(metric, vec![BandSpec::new(f64::INFINITY, ColorBand::Green)]);
        }
        tables.insert(Metric::Pressure, vec![BandSpec::new(30.0, ColorBand::Green)]);
        assert!(ThresholdConfig::new(tables).is_err());
    }

    #[test]
    fn test_rejects_missing_metric_table() {
        let tables: HashMap<Metric, Vec<BandSpec>> = HashMap::new();
        assert!(ThresholdConfig::new(tables).is_err());
    }
}
