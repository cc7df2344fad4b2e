//! Bounded per-metric reading history.

use std::collections::VecDeque;

use super::sample::MetricSample;
use super::ConfigError;

/// Fixed-capacity, insertion-ordered buffer of [`MetricSample`]s.
///
/// Oldest samples are evicted first once the capacity is reached. Samples
/// are never reordered or mutated after insertion, so insertion order is
/// chronological order.
#[derive(Debug, Clone)]
pub struct RollingWindow {
    capacity: usize,
    samples: VecDeque<MetricSample>,
}

impl RollingWindow {
    /// Create an empty window. Zero capacity is a configuration error.
    pub fn new(capacity: usize) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::InvalidCapacity);
        }
        Ok(Self {
            capacity,
            samples: VecDeque::with_capacity(capacity),
        })
    }

    /// Append a sample, evicting the oldest one if the window is full.
    ///
    /// Missing-value samples are pushed like any other: they occupy a time
    /// slot so sparklines stay aligned with elapsed ticks.
    pub fn push(&mut self, sample: MetricSample) {
        self.samples.push_back(sample);
        if self.samples.len() > self.capacity {
            self.samples.pop_front();
        }
    }

    /// Read-only view of the current samples, oldest first.
    pub fn snapshot(&self) -> impl Iterator<Item = &MetricSample> {
        self.samples.iter()
    }

    /// The most recent sample, or `None` if no data has arrived yet.
    pub fn latest(&self) -> Option<&MetricSample> {
        self.samples.back()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop all samples. Not exercised in normal operation; exists so an
    /// embedding application can restart tracking without rebuilding state.
    pub fn reset(&mut self) {
        self.samples.clear();
    }
}
