//! Channel-based data source.
//!
//! Receives observations via a tokio watch channel. This is the embedding
//! path: a host program that already has weather readings (its own fetcher,
//! a sensor, a test harness) pushes them in and reuses the dashboard core.

use tokio::sync::watch;

use super::{DataSource, Observation};

/// A data source fed by a watch channel.
///
/// # Example
///
/// ```
/// use pwsmon::ChannelSource;
///
/// let (tx, source) = ChannelSource::create("backyard sensor");
/// ```
#[derive(Debug)]
pub struct ChannelSource {
    receiver: watch::Receiver<Option<Observation>>,
    description: String,
}

impl ChannelSource {
    /// Wrap the receiving end of an existing watch channel.
    pub fn new(receiver: watch::Receiver<Option<Observation>>, source_description: &str) -> Self {
        Self {
            receiver,
            description: format!("channel: {source_description}"),
        }
    }

    /// Create a channel pair: the sender pushes observations, the source
    /// plugs into the dashboard.
    pub fn create(source_description: &str) -> (watch::Sender<Option<Observation>>, Self) {
        let (tx, rx) = watch::channel(None);
        let source = Self::new(rx, source_description);
        (tx, source)
    }
}

impl DataSource for ChannelSource {
    fn poll(&mut self) -> Option<Observation> {
        if self.receiver.has_changed().unwrap_or(false) {
            self.receiver.borrow_and_update().clone()
        } else {
            None
        }
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn error(&self) -> Option<&str> {
        // Delivery failures are the producer's concern; a dropped sender
        // simply means no further observations arrive.
        None
    }
}
