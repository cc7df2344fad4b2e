//! Live HTTP polling source for the Weather Underground PWS API.
//!
//! A background tokio task fetches the current observation on a fixed
//! interval and forwards it over a channel; `poll()` drains that channel
//! without blocking. Fetch failures become the source error string and the
//! next interval retries; the core never sees a transport error.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc;

use super::{DataSource, Observation, PwsResponse};

const API_URL: &str = "https://api.weather.com/v2/pws/observations/current";
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
     (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// A data source that polls the PWS API in the background.
#[derive(Debug)]
pub struct HttpSource {
    receiver: mpsc::Receiver<Observation>,
    description: String,
    /// Written by the fetch task, copied into `cached_error` on poll.
    last_error: Arc<Mutex<Option<String>>>,
    cached_error: Option<String>,
}

impl HttpSource {
    /// Spawn the polling task on the given runtime.
    ///
    /// The task fetches immediately, then every `interval`, until the
    /// source is dropped.
    pub fn spawn(handle: &Handle, station_id: &str, api_key: &str, interval: Duration) -> Self {
        let (tx, rx) = mpsc::channel(4);
        let last_error = Arc::new(Mutex::new(None));
        let error_handle = last_error.clone();
        let station = station_id.to_string();
        let key = api_key.to_string();

        handle.spawn(async move {
            let client = reqwest::Client::builder()
                .user_agent(USER_AGENT)
                .timeout(FETCH_TIMEOUT)
                .build();
            let client = match client {
                Ok(client) => client,
                Err(e) => {
                    *error_handle.lock().unwrap() = Some(format!("HTTP client setup failed: {e}"));
                    return;
                }
            };

            let mut ticker = tokio::time::interval(interval);
            loop {
                ticker.tick().await;
                match fetch_observation(&client, &station, &key).await {
                    Ok(obs) => {
                        *error_handle.lock().unwrap() = None;
                        if tx.send(obs).await.is_err() {
                            // Receiver dropped; the TUI is gone.
                            break;
                        }
                    }
                    Err(message) => {
                        *error_handle.lock().unwrap() = Some(message);
                    }
                }
            }
        });

        Self {
            receiver: rx,
            description: format!("station: {station_id}"),
            last_error,
            cached_error: None,
        }
    }
}

/// Fetch and flatten the current observation for one station.
///
/// All failure modes collapse into a display string; the distinctions the
/// original tool drew (empty body vs. bad JSON vs. no observations) are
/// preserved in the wording.
async fn fetch_observation(
    client: &reqwest::Client,
    station_id: &str,
    api_key: &str,
) -> Result<Observation, String> {
    let response = client
        .get(API_URL)
        .query(&[
            ("stationId", station_id),
            ("format", "json"),
            ("units", "e"),
            ("apiKey", api_key),
        ])
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| format!("Network request failed: {e}"))?;

    let body = response
        .text()
        .await
        .map_err(|e| format!("Network request failed: {e}"))?;
    if body.is_empty() {
        return Err("Received an empty response from the server; verify API key or station status"
            .to_string());
    }

    let parsed: PwsResponse = serde_json::from_str(&body)
        .map_err(|_| "Invalid response format; check API key and station ID".to_string())?;

    match parsed.observations.first() {
        Some(raw) => Ok(Observation::from_pws(raw)),
        None => Err(format!("No observation data found for '{station_id}'")),
    }
}

impl DataSource for HttpSource {
    fn poll(&mut self) -> Option<Observation> {
        self.cached_error = self.last_error.lock().unwrap().clone();

        // Drain to the most recent observation; intermediate ones only
        // matter if the TUI fell behind the fetch cadence.
        let mut latest = None;
        while let Ok(obs) = self.receiver.try_recv() {
            latest = Some(obs);
        }
        latest
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn error(&self) -> Option<&str> {
        self.cached_error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;

    fn source_with_queue(capacity: usize) -> (mpsc::Sender<Observation>, HttpSource) {
        let (tx, rx) = mpsc::channel(capacity);
        let source = HttpSource {
            receiver: rx,
            description: "station: KTEST0".to_string(),
            last_error: Arc::new(Mutex::new(None)),
            cached_error: None,
        };
        (tx, source)
    }

    #[test]
    fn test_poll_drains_to_latest_observation() {
        let (tx, mut source) = source_with_queue(4);

        let mut first = Observation::empty(Local::now());
        first.temperature = Some(60.0);
        let mut second = Observation::empty(Local::now());
        second.temperature = Some(61.0);
        tx.try_send(first).unwrap();
        tx.try_send(second).unwrap();

        let obs = source.poll().unwrap();
        assert_eq!(obs.temperature, Some(61.0));
        assert!(source.poll().is_none());
    }

    #[test]
    fn test_poll_surfaces_fetch_errors() {
        let (_tx, mut source) = source_with_queue(4);
        assert!(source.error().is_none());

        *source.last_error.lock().unwrap() = Some("Network request failed: timeout".to_string());
        assert!(source.poll().is_none());
        assert_eq!(source.error(), Some("Network request failed: timeout"));

        *source.last_error.lock().unwrap() = None;
        let _ = source.poll();
        assert!(source.error().is_none());
    }
}
