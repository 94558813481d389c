use crate::domain::{ViewCountMap, ViewsEndpoint};
use crate::error::{Result, ViewsError};
use async_trait::async_trait;
use reqwest::Client;

pub const VIEWS_PATH: &str = "/api/youtube-views";

/// Client for a deployed `/api/youtube-views` endpoint.
pub struct ViewsApiClient {
    client: Client,
    endpoint: String,
}

impl ViewsApiClient {
    pub fn new(client: Client, site_url: &str) -> Self {
        let site_url = site_url.trim_end_matches('/');
        let endpoint = if site_url.ends_with(VIEWS_PATH) {
            site_url.to_string()
        } else {
            format!("{site_url}{VIEWS_PATH}")
        };

        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ViewsEndpoint for ViewsApiClient {
    async fn fetch_view_counts(&self) -> Result<ViewCountMap> {
        let response = self.client.get(&self.endpoint).send().await?;
        if !response.status().is_success() {
            return Err(ViewsError::Status(response.status().as_u16()));
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_views_path_to_site_url() {
        let client = ViewsApiClient::new(Client::new(), "https://example.com/");
        assert_eq!(client.endpoint(), "https://example.com/api/youtube-views");
    }

    #[test]
    fn keeps_full_endpoint_url() {
        let client = ViewsApiClient::new(Client::new(), "http://127.0.0.1:8000/api/youtube-views");
        assert_eq!(client.endpoint(), "http://127.0.0.1:8000/api/youtube-views");
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_an_error() {
        let client = ViewsApiClient::new(Client::new(), "http://127.0.0.1:9");
        assert!(client.fetch_view_counts().await.is_err());
    }
}
