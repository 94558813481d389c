use crate::domain::{PageSource, VideoId, ViewCount, ViewCountMap, ViewsEndpoint};
use crate::error::Result;
use crate::infrastructure::{extract_view_count, ViewCountExtractor};
use async_trait::async_trait;
use futures::future::join_all;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// Scrapes every configured video concurrently and never fails as a whole:
/// anything that goes wrong for one video resolves that video to zero.
pub struct ViewCountService {
    source: Arc<dyn PageSource>,
    extractors: Vec<Box<dyn ViewCountExtractor>>,
    video_ids: Vec<VideoId>,
    fetch_timeout: Duration,
}

impl ViewCountService {
    /// `extractors` are tried in order for every page, first match wins.
    /// A page that takes longer than `fetch_timeout` counts as a failure.
    pub fn new(
        source: Arc<dyn PageSource>,
        video_ids: Vec<VideoId>,
        extractors: Vec<Box<dyn ViewCountExtractor>>,
        fetch_timeout: Duration,
    ) -> Self {
        info!(
            "Created view count service for {} videos with {} extractors",
            video_ids.len(),
            extractors.len()
        );
        Self {
            source,
            extractors,
            video_ids,
            fetch_timeout,
        }
    }

    pub async fn fetch_all(&self) -> ViewCountMap {
        let resolved = join_all(self.video_ids.iter().map(|id| self.resolve(id))).await;
        let views: ViewCountMap = resolved.into_iter().collect();

        debug!(
            "Resolved views for {} videos, {} non-zero",
            views.len(),
            views.values().filter(|&&count| count > 0).count()
        );
        views
    }

    async fn resolve(&self, video_id: &VideoId) -> (VideoId, ViewCount) {
        let count = match self.fetch_count(video_id).await {
            Ok(Some(count)) => count,
            Ok(None) => {
                debug!("No view count found for {video_id}");
                0
            }
            Err(e) => {
                warn!("Failed to fetch views for {video_id}: {e}");
                0
            }
        };

        (video_id.clone(), count)
    }

    async fn fetch_count(&self, video_id: &str) -> Result<Option<ViewCount>> {
        let page = timeout(self.fetch_timeout, self.source.fetch_watch_page(video_id)).await??;
        let Some(body) = page else {
            return Ok(None);
        };

        Ok(extract_view_count(&body, &self.extractors))
    }
}

#[async_trait]
impl ViewsEndpoint for ViewCountService {
    async fn fetch_view_counts(&self) -> Result<ViewCountMap> {
        Ok(self.fetch_all().await)
    }
}
