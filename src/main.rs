#[macro_use]
extern crate rocket;

use crate::config::cli::{Args, Commands};
use crate::config::Config;
use crate::domain::{Container, ViewsEndpoint};
use crate::error::Result;
use crate::infrastructure::{default_extractors, HtmlContainer, ViewsApiClient, YoutubeClient};
use crate::services::{FeaturedOutcome, FeaturedService, ViewCountService};
use clap::Parser;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod domain;
mod error;
mod infrastructure;
mod server;
mod services;

const DEFAULT_ADDRESS: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let config = Config::new(args)?;

    match &config.args.command {
        None => server::serve(view_count_service(&config), DEFAULT_ADDRESS, DEFAULT_PORT).await?,
        Some(Commands::Serve { address, port }) => {
            server::serve(view_count_service(&config), address, *port).await?
        }
        Some(Commands::Views) => print_views(&config).await?,
        Some(Commands::Featured {
            limit,
            endpoint,
            path_prefix,
            container_id,
            output,
        }) => {
            let endpoint: Arc<dyn ViewsEndpoint> = match endpoint {
                Some(url) => {
                    let client = ViewsApiClient::new(config.http_client.clone(), url);
                    info!("Fetching view counts from {}", client.endpoint());
                    Arc::new(client)
                }
                None => Arc::new(view_count_service(&config)),
            };
            let featured =
                FeaturedService::new(config.catalog.clone(), endpoint, path_prefix, None);

            let mut container = HtmlContainer::new(container_id);
            match featured.render_featured(&mut container, *limit).await {
                FeaturedOutcome::Ranked => info!(
                    "Rendered featured grid #{} by views in {} passes",
                    container.id(),
                    container.renders()
                ),
                FeaturedOutcome::DefaultOrder => {
                    info!("Rendered featured grid #{} in catalog order", container.id())
                }
            }

            write_output(output.as_ref(), container.into_html()).await?;
        }
        Some(Commands::Stats { path_prefix }) => {
            println!("Projects: {}", config.catalog.project_count());
            for path in config.catalog.image_paths(path_prefix) {
                println!("{path}");
            }
        }
    }

    Ok(())
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn view_count_service(config: &Config) -> ViewCountService {
    let youtube = YoutubeClient::new(config.http_client.clone(), &config.args.youtube_base_url);
    ViewCountService::new(
        Arc::new(youtube),
        config.catalog.video_ids().to_vec(),
        default_extractors(),
        Duration::from_secs(config.args.request_timeout_secs),
    )
}

async fn print_views(config: &Config) -> Result<()> {
    let views: BTreeMap<_, _> = view_count_service(config)
        .fetch_all()
        .await
        .into_iter()
        .collect();

    println!("{}", serde_json::to_string_pretty(&views)?);
    Ok(())
}

async fn write_output(output: Option<&PathBuf>, html: String) -> Result<()> {
    match output {
        Some(path) => {
            tokio::fs::write(path, html).await?;
            info!("Saved featured grid to {}", path.display());
        }
        None => println!("{html}"),
    }
    Ok(())
}
