use std::path::PathBuf;

use anyhow::Context;
use serde::{Deserialize, de::DeserializeOwned};

pub const HANDOUTS_LISTING_URL: &str = "https://achievecentre.com/resources/printable-handouts/";

const ENV_PREFIX: &str = "HANDOUT_";

fn default_user_agent() -> String {
    "Mozilla/5.0".to_string()
}

fn default_open_export() -> bool {
    true
}

/// The `HANDOUT_*` env vars, all optional.
#[derive(Debug, Deserialize)]
pub struct ScrapingEnv {
    #[serde(default = "default_user_agent")]
    user_agent: String,
    #[serde(default)]
    output_dir: Option<String>,
    #[serde(default = "default_open_export")]
    open_export: bool,
}

#[derive(Debug)]
pub struct ScrapingConfig {
    pub user_agent: String,
    // None means the user's documents directory.
    pub output_dir: Option<PathBuf>,
    pub open_export: bool,
}

impl ScrapingConfig {
    pub fn new() -> anyhow::Result<Self> {
        let scraping_env = ScrapingEnv::load_from_env()?;
        Ok(Self::from(scraping_env))
    }

    pub fn listing_url(&self) -> &'static str {
        HANDOUTS_LISTING_URL
    }
}

impl From<ScrapingEnv> for ScrapingConfig {
    fn from(env: ScrapingEnv) -> Self {
        Self {
            user_agent: env.user_agent,
            output_dir: env
                .output_dir
                .filter(|dir| !dir.trim().is_empty())
                .map(PathBuf::from),
            open_export: env.open_export,
        }
    }
}

// Extension trait.
pub trait LoadFromEnv: DeserializeOwned {
    fn load_from_env() -> anyhow::Result<Self> {
        // Don't throw an error if .env file doesn't exist.
        let _ = dotenv::dotenv();
        let config = envy::prefixed(ENV_PREFIX)
            .from_env::<Self>()
            .context("failed to load env variables into config struct")?;
        Ok(config)
    }
}

impl<T: DeserializeOwned> LoadFromEnv for T {}
