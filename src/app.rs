//! Application state: the data source, the station tracker, and the
//! error/help surface the UI reads from.

use std::time::Duration;

use chrono::{DateTime, Local};

use crate::data::StationState;
use crate::source::{DataSource, Observation};
use crate::ui::Theme;

/// Main application state.
pub struct App {
    pub running: bool,
    pub show_help: bool,

    // Data source
    source: Box<dyn DataSource>,
    pub station: StationState,
    /// The most recently ingested observation, kept for the
    /// current-conditions extras the windows don't track.
    pub latest: Option<Observation>,
    pub last_update: Option<DateTime<Local>>,
    pub load_error: Option<String>,

    // Display context
    pub station_id: String,
    pub refresh_interval: Duration,
    pub theme: Theme,
}

impl App {
    pub fn new(
        source: Box<dyn DataSource>,
        station: StationState,
        station_id: String,
        refresh_interval: Duration,
    ) -> Self {
        Self {
            running: true,
            show_help: false,
            source,
            station,
            latest: None,
            last_update: None,
            load_error: None,
            station_id,
            refresh_interval,
            theme: Theme::auto_detect(),
        }
    }

    /// Returns a description of the current data source.
    pub fn source_description(&self) -> &str {
        self.source.description()
    }

    /// Poll the data source and ingest anything new.
    ///
    /// Returns true if a new observation was ingested. Ingest and render
    /// both run on this thread, so a render never sees a half-updated
    /// window.
    pub fn reload_data(&mut self) -> bool {
        if let Some(obs) = self.source.poll() {
            self.station.ingest_observation(&obs);
            self.latest = Some(obs);
            self.last_update = Some(Local::now());
            self.load_error = None;
            true
        } else {
            // Keep showing the last data; surface the source's complaint.
            self.load_error = self.source.error().map(str::to_string);
            false
        }
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{StationConfig, ThresholdConfig};
    use crate::source::ChannelSource;

    fn app_with_channel() -> (tokio::sync::watch::Sender<Option<Observation>>, App) {
        let (tx, source) = ChannelSource::create("test");
        let station =
            StationState::new(StationConfig::default(), ThresholdConfig::default()).unwrap();
        let app = App::new(
            Box::new(source),
            station,
            "KTEST0".to_string(),
            Duration::from_secs(60),
        );
        (tx, app)
    }

    #[test]
    fn test_reload_ingests_new_observation() {
        let (tx, mut app) = app_with_channel();
        assert!(!app.reload_data());
        assert_eq!(app.station.reading_count(), 0);

        let mut obs = Observation::empty(Local::now());
        obs.temperature = Some(70.0);
        tx.send(Some(obs)).unwrap();

        assert!(app.reload_data());
        assert_eq!(app.station.reading_count(), 1);
        assert!(app.last_update.is_some());
        assert!(app.load_error.is_none());
        assert_eq!(app.latest.as_ref().unwrap().temperature, Some(70.0));
    }

    #[test]
    fn test_quit_and_help_toggle() {
        let (_tx, mut app) = app_with_channel();
        assert!(app.running);
        app.toggle_help();
        assert!(app.show_help);
        app.toggle_help();
        assert!(!app.show_help);
        app.quit();
        assert!(!app.running);
    }
}
