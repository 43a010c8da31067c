use anyhow::Context;
use log::debug;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::Write,
    path::Path,
};

/// The default for `Settings::api_url`.
const API_URL_DEFAULT: &str = "https://larder.io/api/1";

/// The default for `Settings::max_workers`.
const MAX_WORKERS_DEFAULT: usize = 8;

/// The default for `Settings::request_timeout`.
const REQUEST_TIMEOUT_DEFAULT: u64 = 60_000;

/// The default for `Settings::request_throttling`.
const REQUEST_THROTTLING_DEFAULT: u64 = 1_000;

/// The default for `Settings::max_idle_connections_per_host`.
const MAX_IDLE_CONNECTIONS_PER_HOST: usize = 10;

/// The default for `Settings::idle_connections_timeout`.
const IDLE_CONNECTIONS_TIMEOUT: u64 = 5_000;

/// Describes the settings used in larder-backup.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct Settings {
    /// The base url of the Larder API.
    pub api_url: String,
    /// The number of workers processing folders in a backup run.
    pub max_workers: usize,
    /// The request timeout in milliseconds.
    pub request_timeout: u64,
    /// The throttling between consecutive paginated requests in milliseconds.
    pub request_throttling: u64,
    /// The maximum number of idle connections allowed in the connection pool.
    pub max_idle_connections_per_host: usize,
    /// The timeout for idle connections to be kept alive in milliseconds.
    pub idle_connections_timeout: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: API_URL_DEFAULT.to_owned(),
            max_workers: MAX_WORKERS_DEFAULT,
            request_timeout: REQUEST_TIMEOUT_DEFAULT,
            request_throttling: REQUEST_THROTTLING_DEFAULT,
            max_idle_connections_per_host: MAX_IDLE_CONNECTIONS_PER_HOST,
            idle_connections_timeout: IDLE_CONNECTIONS_TIMEOUT,
        }
    }
}

impl Settings {
    pub fn init(settings_path: &Path) -> Result<Settings, anyhow::Error> {
        if settings_path.exists() {
            debug!("Reading settings file at {}", settings_path.display());
            Settings::read(settings_path)
        } else {
            debug!("Create settings file at {}", settings_path.display());
            let settings = Settings::default();
            settings.write(settings_path)?;
            Ok(settings)
        }
    }

    pub fn read(settings_path: &Path) -> Result<Settings, anyhow::Error> {
        let buf = crate::utils::read_file(settings_path)
            .context("Can't read `settings.json` file")?;
        let settings = serde_json::from_slice(&buf)?;
        Ok(settings)
    }

    pub fn write(&self, settings_path: &Path) -> Result<(), anyhow::Error> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;

        let mut settings_file = File::create(settings_path).context(format!(
            "Can't create `settings.json` file: {}",
            settings_path.display()
        ))?;
        settings_file.write_all(&buf)?;
        settings_file.flush()?;

        Ok(())
    }

    pub fn set_max_workers(&mut self, max_workers: usize) {
        debug!("Set `max_workers` to {max_workers}");
        self.max_workers = max_workers;
    }

    pub fn set_request_timeout(&mut self, request_timeout: u64) {
        debug!("Set `request_timeout` to {request_timeout}");
        self.request_timeout = request_timeout;
    }

    pub fn set_request_throttling(&mut self, request_throttling: u64) {
        debug!("Set `request_throttling` to {request_throttling}");
        self.request_throttling = request_throttling;
    }

    pub fn set_max_idle_connections_per_host(&mut self, max_idle_connections_per_host: usize) {
        debug!("Set `max_idle_connections_per_host` to {max_idle_connections_per_host}");
        self.max_idle_connections_per_host = max_idle_connections_per_host;
    }

    pub fn set_idle_connections_timeout(&mut self, idle_connections_timeout: u64) {
        debug!("Set `idle_connections_timeout` to {idle_connections_timeout}");
        self.idle_connections_timeout = idle_connections_timeout;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_init_creates_default_settings() {
        let temp_dir = tempdir().unwrap();
        let settings_path = temp_dir.path().join("settings.json");

        let settings = Settings::init(&settings_path).unwrap();
        assert!(settings_path.exists());
        assert_eq!(settings, Settings::default());

        // A second init reads the file written by the first one.
        let settings = Settings::init(&settings_path).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_write_and_read() {
        let temp_dir = tempdir().unwrap();
        let settings_path = temp_dir.path().join("settings.json");
        let mut settings = Settings::default();
        settings.set_max_workers(4);
        settings.set_request_throttling(500);

        settings.write(&settings_path).unwrap();
        let read_settings = Settings::read(&settings_path).unwrap();

        assert_eq!(read_settings, settings);
        assert_eq!(read_settings.max_workers, 4);
        assert_eq!(read_settings.request_throttling, 500);
    }
}
