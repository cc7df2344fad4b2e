//! Metric tracking and derived display data.
//!
//! This module is the stateful heart of the dashboard: it ingests readings
//! into bounded per-metric windows and derives everything the renderer
//! shows from them.
//!
//! ## Submodules
//!
//! - [`sample`]: tracked [`Metric`]s and individual [`MetricSample`]s
//! - [`window`]: the bounded FIFO [`RollingWindow`]
//! - [`bands`]: color-band classification under a [`ThresholdConfig`]
//! - [`trend`]: trend direction from recent history
//! - [`sparkline`]: glyph-string rendering with range labels
//! - [`station`]: [`StationState`] orchestration and [`MetricSnapshot`]s
//!
//! ## Data flow
//!
//! ```text
//! Observation (from a source)
//!        │
//!        ▼
//! StationState::ingest_observation()   one RollingWindow per metric
//!        │
//!        ▼
//! StationState::snapshot_all()         classify + trend + sparkline
//!        │
//!        ▼
//! Vec<MetricSnapshot>                  consumed by the ui module
//! ```

pub mod bands;
pub mod sample;
pub mod sparkline;
pub mod station;
pub mod trend;
pub mod window;

pub use bands::{BandSpec, ColorBand, ThresholdConfig};
pub use sample::{Metric, MetricSample};
pub use station::{MetricSnapshot, StationConfig, StationState};
pub use trend::{trend_of, Trend, TrendConfig};
pub use window::RollingWindow;

use thiserror::Error;

/// Fatal configuration errors, surfaced at construction or at the ingest
/// boundary. Never raised for missing or degenerate data.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The data source delivered a metric name this station does not track.
    #[error("unknown metric name: {0}")]
    UnknownMetric(String),

    /// Window capacity must be at least one sample.
    #[error("window capacity must be positive")]
    InvalidCapacity,

    /// A metric has no threshold table at all.
    #[error("no threshold table for metric: {0}")]
    MissingThresholds(&'static str),

    /// A threshold table does not partition the real line.
    #[error("malformed threshold table for {metric}: {reason}")]
    MalformedThresholds {
        metric: &'static str,
        reason: String,
    },
}
