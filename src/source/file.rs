//! File-based data source.
//!
//! Polls a JSON file for observations. Useful for replaying captured API
//! responses, demos without an API key, and tests. The file may hold either
//! a full API response (`{"observations": [...]}`) or a single observation
//! object; the source tracks the file's modification time and only yields
//! data when it changes.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use super::{DataSource, Observation, PwsObservation, PwsResponse};

#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    description: String,
    last_error: Option<String>,
    last_modified: Option<SystemTime>,
}

impl FileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let description = format!("file: {}", path.display());
        Self {
            path,
            description,
            last_error: None,
            last_modified: None,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn modified_time(&self) -> Option<SystemTime> {
        fs::metadata(&self.path).ok()?.modified().ok()
    }

    fn read_file(&mut self) -> Option<Observation> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                self.last_error = Some(format!("Read error: {e}"));
                return None;
            }
        };

        // Accept a full response envelope or a bare observation.
        let raw = match serde_json::from_str::<PwsResponse>(&content) {
            Ok(response) => match response.observations.into_iter().next() {
                Some(raw) => raw,
                None => {
                    self.last_error = Some("No observation data in file".to_string());
                    return None;
                }
            },
            Err(_) => match serde_json::from_str::<PwsObservation>(&content) {
                Ok(raw) => raw,
                Err(e) => {
                    self.last_error = Some(format!("Parse error: {e}"));
                    return None;
                }
            },
        };

        self.last_error = None;
        Some(Observation::from_pws(&raw))
    }
}

impl DataSource for FileSource {
    fn poll(&mut self) -> Option<Observation> {
        let current_modified = self.modified_time();

        let file_changed = match (&self.last_modified, &current_modified) {
            (None, _) => true,        // First poll, always read
            (Some(_), None) => false, // File disappeared, keep last state
            (Some(last), Some(current)) => current > last,
        };

        if file_changed {
            if let Some(obs) = self.read_file() {
                self.last_modified = current_modified;
                return Some(obs);
            }
        }

        None
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn sample_json() -> &'static str {
        r#"{
            "observations": [{
                "epoch": 1700000000,
                "humidity": 45,
                "imperial": {
                    "temp": 70.3,
                    "heatIndex": 69.0,
                    "windSpeed": 4.5,
                    "pressure": 29.95
                }
            }]
        }"#
    }

    #[test]
    fn test_file_source_new() {
        let source = FileSource::new("/tmp/observation.json");
        assert_eq!(source.path(), Path::new("/tmp/observation.json"));
        assert_eq!(source.description(), "file: /tmp/observation.json");
        assert!(source.error().is_none());
    }

    #[test]
    fn test_poll_reads_response_envelope() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", sample_json()).unwrap();

        let mut source = FileSource::new(file.path());

        let obs = source.poll().expect("first poll yields data");
        assert_eq!(obs.temperature, Some(70.3));
        assert_eq!(obs.humidity, Some(45.0));

        // Unchanged file yields nothing on the next poll.
        assert!(source.poll().is_none());
    }

    #[test]
    fn test_poll_reads_bare_observation() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"{{ "epoch": 1700000000, "imperial": {{ "temp": 55.0 }} }}"#
        )
        .unwrap();

        let mut source = FileSource::new(file.path());
        let obs = source.poll().expect("bare observation parses");
        assert_eq!(obs.temperature, Some(55.0));
        assert_eq!(obs.humidity, None);
    }

    #[test]
    fn test_missing_file_sets_error() {
        let mut source = FileSource::new("/nonexistent/path/observation.json");
        assert!(source.poll().is_none());
        assert!(source.error().unwrap().contains("Read error"));
    }

    #[test]
    fn test_invalid_json_sets_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not valid json").unwrap();

        let mut source = FileSource::new(file.path());
        assert!(source.poll().is_none());
        assert!(source.error().unwrap().contains("Parse error"));
    }

    #[test]
    fn test_empty_observation_list_sets_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{ "observations": [] }}"#).unwrap();

        let mut source = FileSource::new(file.path());
        assert!(source.poll().is_none());
        assert!(source.error().unwrap().contains("No observation data"));
    }
}
