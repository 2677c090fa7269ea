use crate::storage::{self, StorageManager};
use homedir::my_home;
use serde::{Deserialize, Serialize};

const CONFIG_FILE: &str = "config.yaml";

const DEFAULT_PAGE_SIZE: usize = 10;
const DEFAULT_MAX_PAGE_SIZE: usize = 100;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("io error: {0}")]
    IO(#[from] std::io::Error),

    #[error("config is malformed: {0}")]
    Yaml(#[from] serde_yml::Error),

    #[error("config file is not valid utf8")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("invalid config: {0}")]
    Invalid(String),

    #[error("couldnt find home dir")]
    NoHomeDir,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Results per page when the caller doesn't ask for a size
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Upper bound for requested page sizes
    #[serde(default = "default_max_page_size")]
    pub max_page_size: usize,

    /// Dataset used when `--data` is not given. Built-in sample jobs when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_path: Option<String>,

    #[serde(skip_serializing, skip_deserializing)]
    base_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
            data_path: None,
            base_path: String::new(),
        }
    }
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_max_page_size() -> usize {
    DEFAULT_MAX_PAGE_SIZE
}

/// `$TS_BASE_PATH`, or `~/.local/share/talent-search`.
pub fn base_path() -> Result<String, ConfigError> {
    if let Ok(path) = std::env::var("TS_BASE_PATH") {
        return Ok(path);
    }
    let home = my_home()
        .map_err(|_| ConfigError::NoHomeDir)?
        .ok_or(ConfigError::NoHomeDir)?;
    Ok(format!("{}/.local/share/talent-search", home.to_string_lossy()))
}

impl Config {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::Invalid("page_size must be greater than 0".into()));
        }
        if self.max_page_size < self.page_size {
            return Err(ConfigError::Invalid(format!(
                "max_page_size ({}) must not be smaller than page_size ({})",
                self.max_page_size, self.page_size
            )));
        }
        Ok(())
    }

    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(&base_path()?)
    }

    pub fn load_with(base_path: &str) -> Result<Self, ConfigError> {
        let store = storage::BackendLocal::new(base_path)?;

        // create new if does not exist
        if !store.exists(CONFIG_FILE) {
            log::info!("Creating default config at {base_path}/{CONFIG_FILE}");
            store.write(CONFIG_FILE, serde_yml::to_string(&Self::default())?.as_bytes())?;
        }

        let config_str = String::from_utf8(store.read(CONFIG_FILE)?)?;
        let mut config: Self = serde_yml::from_str(&config_str)?;

        config.base_path = base_path.to_string();

        config.validate()?;

        // resave in case config version needs an upgrade
        if config_str != serde_yml::to_string(&config)? {
            config.save()?;
        }

        Ok(config)
    }

    pub fn save(&self) -> Result<(), ConfigError> {
        let store = storage::BackendLocal::new(&self.base_path)?;

        let config_str = serde_yml::to_string(&self)?;
        store.write(CONFIG_FILE, config_str.as_bytes())?;
        Ok(())
    }

    /// Requested size, or the default, capped at `max_page_size`.
    pub fn effective_page_size(&self, requested: Option<usize>) -> usize {
        requested
            .unwrap_or(self.page_size)
            .clamp(1, self.max_page_size)
    }
}
