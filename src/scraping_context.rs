use crate::{config::ScrapingConfig, requests::RequestClient};

pub struct ScrapingContext {
    pub scraping_config: ScrapingConfig,
    pub request_client: RequestClient,
}

impl ScrapingContext {
    pub fn new() -> anyhow::Result<Self> {
        let scraping_config = ScrapingConfig::new()?;
        Self::with_config(scraping_config)
    }

    pub fn with_config(scraping_config: ScrapingConfig) -> anyhow::Result<Self> {
        let request_client = RequestClient::new(&scraping_config.user_agent)?;
        Ok(ScrapingContext {
            scraping_config,
            request_client,
        })
    }
}
