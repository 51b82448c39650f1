use std::future::Future;

use reqwest::{header, Client};

use crate::error::ScrapeError;

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/115.0.0.0 Safari/537.36";

/// Source of raw page text for the walker.
pub trait PageFetcher {
    fn get_html_from_url(&self, url: &str) -> impl Future<Output = Result<String, ScrapeError>>;
}

#[derive(Debug, Clone)]
pub struct DoubanClient {
    client: Client,
}

impl DoubanClient {
    pub fn new(user_agent: &str) -> Result<Self, ScrapeError> {
        let user_agent = header::HeaderValue::from_str(user_agent).unwrap_or_else(|e| {
            log::warn!("Invalid user agent {:?} ({}), using default", user_agent, e);
            header::HeaderValue::from_static(DEFAULT_USER_AGENT)
        });

        let client = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(ScrapeError::Client)?;

        Ok(Self { client })
    }
}

impl PageFetcher for DoubanClient {
    async fn get_html_from_url(&self, url: &str) -> Result<String, ScrapeError> {
        log::info!("Getting HTML for url: {}", url);
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| ScrapeError::Network {
                url: url.to_string(),
                source,
            })?;

        if !resp.status().is_success() {
            return Err(ScrapeError::Status {
                url: url.to_string(),
                status: resp.status(),
            });
        }

        resp.text().await.map_err(|source| ScrapeError::Network {
            url: url.to_string(),
            source,
        })
    }
}
