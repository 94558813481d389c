use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;

/// Opaque video token, used both as a map key and as the `v` query parameter.
pub type VideoId = String;

/// Zero doubles as "unknown": a failed fetch and a real zero look the same.
pub type ViewCount = u64;

pub type ViewCountMap = HashMap<VideoId, ViewCount>;

/// Source of raw watch-page HTML for a video.
#[async_trait]
pub trait PageSource: Send + Sync {
    /// `Ok(None)` when the upstream answered with a non-success status.
    async fn fetch_watch_page(&self, video_id: &str) -> Result<Option<String>>;
}

/// Anything that can hand back a full view count map, local or remote.
#[async_trait]
pub trait ViewsEndpoint: Send + Sync {
    async fn fetch_view_counts(&self) -> Result<ViewCountMap>;
}
