use crate::config::cli::Args;
use crate::domain::Catalog;
use crate::error::Result;
use crate::infrastructure::BOT_USER_AGENT;
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

pub(crate) mod cli;

pub struct Config {
    pub args: Args,
    pub catalog: Arc<Catalog>,
    pub http_client: Client,
}

impl Config {
    pub fn new(args: Args) -> Result<Self> {
        let catalog = match &args.catalog_file {
            Some(path) => Catalog::load(path)?,
            None => Catalog::builtin(),
        };

        let http_client = Client::builder()
            .timeout(Duration::from_secs(args.request_timeout_secs))
            .user_agent(BOT_USER_AGENT)
            .build()?;

        info!(
            "Using catalog with {} projects and {} videos",
            catalog.project_count(),
            catalog.video_ids().len()
        );

        Ok(Self {
            args,
            catalog: Arc::new(catalog),
            http_client,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn builtin_catalog_without_file() {
        let config = Config::new(Args::try_parse_from(["portfolio-views"]).unwrap()).unwrap();
        assert_eq!(config.catalog.project_count(), 10);
    }

    #[test]
    fn missing_catalog_file_is_an_io_error() {
        let args = Args::try_parse_from([
            "portfolio-views",
            "--catalog-file",
            "/nonexistent/catalog.json",
        ])
        .unwrap();

        assert!(matches!(
            Config::new(args),
            Err(crate::error::ViewsError::Io(_))
        ));
    }
}
