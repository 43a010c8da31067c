use crate::Settings;
use anyhow::{anyhow, Context};
use log::{debug, trace};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

const CONFIG_DIR: &str = "larder";
const SETTINGS_FILE: &str = "settings.json";

/// A configuration for running larder-backup.
#[derive(Debug, PartialEq, Default)]
pub struct Config {
    /// The path of the settings file.
    pub settings_path: PathBuf,
    /// The configured settings.
    pub settings: Settings,
}

impl Config {
    fn new(settings_path: &Path, settings: Settings) -> Self {
        Self {
            settings_path: settings_path.to_owned(),
            settings,
        }
    }

    pub fn init() -> Result<Config, anyhow::Error> {
        let config_path = if let Ok(larder_home) = env::var("LARDER_HOME") {
            PathBuf::from(larder_home)
        } else if let Some(config_path) = dirs::config_dir() {
            config_path.join(CONFIG_DIR)
        } else {
            return Err(anyhow!("HOME environment variable not set"));
        };
        let settings_path = config_path.join(SETTINGS_FILE);

        if !config_path.exists() {
            debug!("Create config at {}", config_path.display());
            fs::create_dir_all(&config_path).context(format!(
                "Can't create config directory: {}",
                config_path.display()
            ))?;
        }

        let settings = Settings::init(&settings_path)?;

        debug!("Reading config from {}", settings_path.display());

        let config = Config::new(&settings_path, settings);

        trace!("Config: {:#?}", config);

        Ok(config)
    }
}
