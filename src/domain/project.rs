use super::views::{VideoId, ViewCount, ViewCountMap};
use serde::{Deserialize, Serialize};

pub const TOP_BADGE: &str = "🔥 Most Viewed";
pub const POPULAR_BADGE: &str = "⭐ Popular";

/// A single portfolio project as curated in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEntry {
    pub id: u32,
    pub title: String,
    pub subtitle: String,
    pub tag: String,
    pub badge: String,
    /// Thumbnail basename without extension; WebP and PNG variants must both exist.
    pub image: String,
    pub youtube_id: VideoId,
}

impl ProjectEntry {
    /// Views for this project, zero when the video is missing from the map.
    pub fn views_in(&self, views: &ViewCountMap) -> ViewCount {
        views.get(&self.youtube_id).copied().unwrap_or(0)
    }

    pub fn image_path(&self, path_prefix: &str, extension: &str) -> String {
        format!(
            "{path_prefix}images/projects/project{}/{}.{extension}",
            self.id, self.image
        )
    }

    pub fn page_path(&self, path_prefix: &str) -> String {
        format!("{path_prefix}projects/project{}.html", self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedProjectEntry {
    pub project: ProjectEntry,
    pub rank: usize,
    pub views: ViewCount,
}

impl RankedProjectEntry {
    pub fn badge(&self) -> &'static str {
        if self.rank == 0 {
            TOP_BADGE
        } else {
            POPULAR_BADGE
        }
    }
}

/// What a rendered card needs: the project and the badge to show on it.
#[derive(Debug, Clone, Copy)]
pub struct Card<'a> {
    pub project: &'a ProjectEntry,
    pub badge: &'a str,
}

impl<'a> From<&'a ProjectEntry> for Card<'a> {
    fn from(project: &'a ProjectEntry) -> Self {
        Self {
            badge: &project.badge,
            project,
        }
    }
}

impl<'a> From<&'a RankedProjectEntry> for Card<'a> {
    fn from(ranked: &'a RankedProjectEntry) -> Self {
        Self {
            project: &ranked.project,
            badge: ranked.badge(),
        }
    }
}
