use std::path::PathBuf;

use crate::clients::douban_client::DEFAULT_USER_AGENT;

pub const DEFAULT_BASE_URL: &str = "https://movie.douban.com/top250";
pub const DEFAULT_TOTAL: usize = 100;
pub const DEFAULT_PAGE_SIZE: usize = 25;
pub const DEFAULT_DB_PATH: &str = "douban_top100.sqlite";
pub const DEFAULT_LOG_FILE: &str = "douban_top100_search.log";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeConfig {
    pub base_url: String,
    pub total: usize,
    pub page_size: usize,
    pub user_agent: String,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            total: DEFAULT_TOTAL,
            page_size: DEFAULT_PAGE_SIZE,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ScrapeConfig {
    /// One url per page, `start` increasing by the page size until `total` is covered.
    pub fn page_urls(&self) -> Vec<String> {
        (0..self.total)
            .step_by(self.page_size.max(1))
            .map(|start| format!("{}?start={}", self.base_url, start))
            .collect()
    }
}

/// Everything a full run needs. `None` paths switch the matching stage off.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub scrape: ScrapeConfig,
    pub db_path: Option<PathBuf>,
    pub csv_path: Option<PathBuf>,
    pub render_charts: bool,
    pub chart_dir: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            scrape: ScrapeConfig::default(),
            db_path: Some(PathBuf::from(DEFAULT_DB_PATH)),
            csv_path: None,
            render_charts: true,
            chart_dir: None,
        }
    }
}
