use reqwest::{Client, ClientBuilder, Response, StatusCode};

/// Anything that can hand back the HTML of a page, or nothing if it can't.
#[allow(async_fn_in_trait)]
pub trait PageSource {
    async fn fetch_page(&self, url: &str) -> Option<String>;
}

pub struct RequestClient {
    client: Client,
}

impl RequestClient {
    pub fn new(user_agent: &str) -> anyhow::Result<Self> {
        let client = ClientBuilder::new().user_agent(user_agent).build()?;
        Ok(Self { client })
    }

    pub async fn fetch_url_response(&self, url: &str) -> anyhow::Result<Response> {
        let response = self.client.get(url).send().await?;
        Ok(response)
    }

    /// Body of `url`, but only for a 200 response.
    pub async fn fetch_url_body(&self, url: &str) -> anyhow::Result<Option<String>> {
        let response = self.fetch_url_response(url).await?;
        if response.status() != StatusCode::OK {
            log::debug!("{url} answered {}", response.status());
            return Ok(None);
        }
        let body = response.text().await?;
        Ok(Some(body))
    }
}

impl PageSource for RequestClient {
    async fn fetch_page(&self, url: &str) -> Option<String> {
        match self.fetch_url_body(url).await {
            Ok(body) => body,
            Err(e) => {
                log::warn!("request to {url} failed: {e}");
                None
            }
        }
    }
}
