use crate::domain::{ProjectEntry, RankedProjectEntry, ViewCountMap};
use std::cmp::Reverse;

/// Orders projects by descending views and keeps the first `limit`
/// (zero keeps all). The sort is stable, so equal counts stay in catalog
/// order, and projects missing from the map count as zero.
pub fn rank_by_views(
    projects: &[ProjectEntry],
    views: &ViewCountMap,
    limit: usize,
) -> Vec<RankedProjectEntry> {
    let mut sorted: Vec<&ProjectEntry> = projects.iter().collect();
    sorted.sort_by_key(|project| Reverse(project.views_in(views)));

    let limit = if limit == 0 { sorted.len() } else { limit };

    sorted
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(rank, project)| RankedProjectEntry {
            views: project.views_in(views),
            project: project.clone(),
            rank,
        })
        .collect()
}

/// False when no project in the catalog has a known view count, which is
/// what an upstream outage looks like from here.
pub fn has_ranking_data(projects: &[ProjectEntry], views: &ViewCountMap) -> bool {
    projects.iter().any(|project| project.views_in(views) > 0)
}
