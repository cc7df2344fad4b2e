//! Data source abstraction for receiving station observations.
//!
//! The tracking core never performs network or disk I/O itself and never
//! sees a transport error: sources absorb fetch failures into an error
//! string for the status bar and simply deliver nothing that tick. Retry
//! policy (re-fetching on the next interval) lives here, not in the core.

mod channel;
mod file;
mod http;
mod observation;

pub use channel::ChannelSource;
pub use file::FileSource;
pub use http::HttpSource;
pub use observation::{ImperialReadings, Observation, PwsObservation, PwsResponse};

use std::fmt::Debug;

/// Trait for receiving observations from various backends.
///
/// Implementations exist for live HTTP polling, file replay, and in-memory
/// channels (for embedding the dashboard in another program).
///
/// # Example
///
/// ```
/// use pwsmon::{DataSource, FileSource};
///
/// let mut source = FileSource::new("observation.json");
/// if let Some(obs) = source.poll() {
///     println!("temperature: {:?}", obs.temperature);
/// }
/// ```
pub trait DataSource: Send + Debug {
    /// Poll for a new observation.
    ///
    /// Returns `Some(observation)` when new data is available, `None`
    /// otherwise. Must be non-blocking.
    fn poll(&mut self) -> Option<Observation>;

    /// Human-readable description of the source, shown in the status bar.
    fn description(&self) -> &str;

    /// The error from the most recent fetch attempt, if it failed.
    fn error(&self) -> Option<&str>;
}
