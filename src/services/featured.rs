use crate::domain::{Card, Catalog, Container, FadeInObserver, ViewsEndpoint};
use crate::services::ranking::{has_ranking_data, rank_by_views};
use crate::services::rendering::render_project_grid;
use std::sync::Arc;
use tracing::{debug, info};

pub const DEFAULT_FEATURED_LIMIT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeaturedOutcome {
    /// The grid was re-rendered in popularity order.
    Ranked,
    /// The placeholder render in catalog order was left in place.
    DefaultOrder,
}

/// Fills project grids, first in catalog order and then, if view counts
/// arrive, by popularity.
pub struct FeaturedService {
    catalog: Arc<Catalog>,
    endpoint: Arc<dyn ViewsEndpoint>,
    path_prefix: String,
    observer: Option<Arc<dyn FadeInObserver>>,
}

impl FeaturedService {
    pub fn new(
        catalog: Arc<Catalog>,
        endpoint: Arc<dyn ViewsEndpoint>,
        path_prefix: impl Into<String>,
        observer: Option<Arc<dyn FadeInObserver>>,
    ) -> Self {
        Self {
            catalog,
            endpoint,
            path_prefix: path_prefix.into(),
            observer,
        }
    }

    /// Catalog-order grid of the newest `limit` projects (zero for all).
    pub fn render_default(&self, container: &mut dyn Container, limit: usize) {
        render_project_grid(
            container,
            self.catalog.default_order(limit).iter().map(Card::from),
            &self.path_prefix,
            self.observer.as_deref(),
        );
    }

    /// Renders the placeholder immediately, then swaps in the most viewed
    /// projects. Any failure to get view counts keeps the placeholder.
    pub async fn render_featured(
        &self,
        container: &mut dyn Container,
        limit: usize,
    ) -> FeaturedOutcome {
        self.render_default(container, limit);

        let views = match self.endpoint.fetch_view_counts().await {
            Ok(views) => views,
            Err(e) => {
                info!("Featured by views: using default order ({e})");
                return FeaturedOutcome::DefaultOrder;
            }
        };

        let projects = self.catalog.projects();
        if !has_ranking_data(projects, &views) {
            info!("Featured by views: no view counts available, using default order");
            return FeaturedOutcome::DefaultOrder;
        }

        let ranked = rank_by_views(projects, &views, limit);
        for entry in &ranked {
            debug!(
                "#{} project {} with {} views",
                entry.rank + 1,
                entry.project.id,
                entry.views
            );
        }
        render_project_grid(
            container,
            ranked.iter().map(Card::from),
            &self.path_prefix,
            self.observer.as_deref(),
        );

        FeaturedOutcome::Ranked
    }
}
