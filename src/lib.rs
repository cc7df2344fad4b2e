// Library crate: public API items may not be used by the binary
#![allow(unused)]

//! # pwsmon
//!
//! An htop-style terminal monitor for Weather Underground personal weather
//! stations (PWS).
//!
//! The crate polls a station on a fixed interval and renders a live
//! single-column dashboard: current readings color-coded by configurable
//! threshold bands, a trend arrow per metric, and a compact sparkline over
//! a bounded rolling history.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        Application                           │
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐    ┌──────────┐ │
//! │  │  app    │───▶│   data   │───▶│   ui    │───▶│ Terminal │ │
//! │  │ (state) │    │(tracking)│    │(render) │    │          │ │
//! │  └────┬────┘    └──────────┘    └─────────┘    └──────────┘ │
//! │       │                                                      │
//! │       ▼                                                      │
//! │  ┌─────────┐                                                 │
//! │  │ source  │◀── HttpSource | FileSource | ChannelSource     │
//! │  │ (input) │                                                 │
//! │  └─────────┘                                                 │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`app`]**: application state wiring a source to a station tracker
//! - **[`source`]**: data source abstraction ([`DataSource`] trait) with
//!   implementations for live API polling, file replay, and channel input
//! - **[`data`]**: the tracking core - per-metric rolling windows, color
//!   band classification, trend analysis, and sparkline rendering
//! - **[`ui`]**: terminal rendering using ratatui
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Live monitoring (API key via flag or PWS_API_KEY)
//! pwsmon KCOHOTSU8 --api-key $KEY
//!
//! # Replay a captured observation file
//! pwsmon --file observation.json
//! ```
//!
//! ### As a library with a file source
//!
//! ```
//! use pwsmon::{App, FileSource, StationConfig, StationState, ThresholdConfig};
//! use std::time::Duration;
//!
//! let station = StationState::new(StationConfig::default(), ThresholdConfig::default())
//!     .expect("default config is valid");
//! let source = Box::new(FileSource::new("observation.json"));
//! let app = App::new(source, station, "replay".to_string(), Duration::from_secs(60));
//! ```
//!
//! ### As a library with a channel source (for embedding)
//!
//! ```
//! use pwsmon::{App, ChannelSource, StationConfig, StationState, ThresholdConfig};
//! use std::time::Duration;
//!
//! let (tx, source) = ChannelSource::create("backyard sensor");
//! let station = StationState::new(StationConfig::default(), ThresholdConfig::default())
//!     .expect("default config is valid");
//! let app = App::new(Box::new(source), station, "local".to_string(), Duration::from_secs(60));
//! ```

pub mod app;
pub mod data;
pub mod events;
pub mod source;
pub mod ui;

// Re-export main types for convenience
pub use app::App;
pub use data::{
    BandSpec, ColorBand, ConfigError, Metric, MetricSample, MetricSnapshot, RollingWindow,
    StationConfig, StationState, ThresholdConfig, Trend, TrendConfig,
};
pub use source::{ChannelSource, DataSource, FileSource, HttpSource, Observation};
