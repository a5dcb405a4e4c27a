use std::path::Path;
use std::time::Duration;

use anyhow::{bail, Context};
use homedir::my_home;
use serde::{Deserialize, Serialize};

const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the fact-checking service
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Request timeout in seconds. Unset means wait as long as the
    /// service needs; transcribing a whole video can take minutes.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    #[serde(skip_serializing, skip_deserializing)]
    base_path: String,
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            request_timeout_secs: None,
            base_path: String::new(),
        }
    }
}

fn default_base_path() -> anyhow::Result<String> {
    if let Ok(base_path) = std::env::var("CLAIMCHECK_BASE_PATH") {
        return Ok(base_path);
    }

    let home = my_home()
        .context("couldnt resolve home dir")?
        .context("couldnt resolve home dir")?;

    Ok(format!("{}/.config/claimcheck", home.to_string_lossy()))
}

impl Config {
    fn validate(&self) -> anyhow::Result<()> {
        url::Url::parse(&self.api_url)
            .with_context(|| format!("api_url {:?} is not a valid URL", self.api_url))?;

        if self.request_timeout_secs == Some(0) {
            bail!("request_timeout_secs must be greater than 0");
        }

        Ok(())
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    pub fn load() -> anyhow::Result<Self> {
        let mut config = Self::load_with(&default_base_path()?)?;

        // CLAIMCHECK_API_URL wins over the config file
        if let Ok(addr) = std::env::var("CLAIMCHECK_API_URL") {
            config.api_url = addr;
            config.validate()?;
        }

        Ok(config)
    }

    pub fn load_with(base_path: &str) -> anyhow::Result<Self> {
        let config_path = Path::new(base_path).join("config.yaml");

        // create new if does not exist
        if !config_path.exists() {
            log::info!("creating new config at {}", config_path.display());
            std::fs::create_dir_all(base_path).context("couldnt create config dir")?;
            std::fs::write(&config_path, serde_yml::to_string(&Self::default())?)
                .context("couldnt write config")?;
        }

        let config_str = std::fs::read_to_string(&config_path).context("couldnt read config")?;
        let mut config: Self = serde_yml::from_str(&config_str).context("config is malformed")?;

        config.base_path = base_path.to_string();

        config.validate()?;

        // resave in case config version needs an upgrade
        if config_str != serde_yml::to_string(&config)? {
            config.save()?;
        }

        Ok(config)
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Path::new(&self.base_path).join("config.yaml");

        std::fs::write(config_path, serde_yml::to_string(&self)?)
            .context("couldnt write config")?;

        Ok(())
    }
}
