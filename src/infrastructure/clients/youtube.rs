use crate::domain::PageSource;
use crate::error::Result;
use async_trait::async_trait;
use reqwest::header::{ACCEPT_LANGUAGE, USER_AGENT};
use reqwest::Client;
use tracing::{debug, info};

pub const YOUTUBE_BASE_URL: &str = "https://www.youtube.com";
pub const BOT_USER_AGENT: &str = "Mozilla/5.0 (compatible; PortfolioBot/1.0)";
const PAGE_LANGUAGE: &str = "en-US,en;q=0.9";

/// Fetches server-rendered watch pages. The bot user agent and a fixed
/// language keep the markup stable enough for the extractors.
pub struct YoutubeClient {
    client: Client,
    base_url: String,
}

impl YoutubeClient {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        info!("Created new YouTube client for {base_url}");
        Self { client, base_url }
    }

    pub fn watch_url(&self) -> String {
        format!("{}/watch", self.base_url)
    }
}

#[async_trait]
impl PageSource for YoutubeClient {
    async fn fetch_watch_page(&self, video_id: &str) -> Result<Option<String>> {
        let response = self
            .client
            .get(self.watch_url())
            .query(&[("v", video_id)])
            .header(USER_AGENT, BOT_USER_AGENT)
            .header(ACCEPT_LANGUAGE, PAGE_LANGUAGE)
            .send()
            .await?;

        if !response.status().is_success() {
            debug!("Watch page for {video_id} returned {}", response.status());
            return Ok(None);
        }

        Ok(Some(response.text().await?))
    }
}
