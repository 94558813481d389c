use crate::infrastructure::YOUTUBE_BASE_URL;
use crate::services::DEFAULT_FEATURED_LIMIT;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Project catalog JSON file (built-in catalog when omitted)
    #[arg(long, global = true, env = "PORTFOLIO_CATALOG")]
    pub catalog_file: Option<PathBuf>,

    /// Base URL of the video host whose watch pages are scraped
    #[arg(long, global = true, default_value = YOUTUBE_BASE_URL)]
    pub youtube_base_url: String,

    /// Timeout for every outbound HTTP request, in seconds
    #[arg(long, global = true, default_value_t = 30)]
    pub request_timeout_secs: u64,

    /// Log level (error, warn, info, debug, trace); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "info")]
    pub log_level: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve GET /api/youtube-views (the default)
    Serve {
        #[arg(long, env = "PORTFOLIO_ADDRESS", default_value = "127.0.0.1")]
        address: String,

        #[arg(long, env = "PORTFOLIO_PORT", default_value_t = 8000)]
        port: u16,
    },
    /// Scrape every configured video once and print the view count map
    Views,
    /// Render the featured grid ordered by views
    Featured {
        /// Number of cards to render
        #[arg(long, default_value_t = DEFAULT_FEATURED_LIMIT)]
        limit: usize,

        /// Site serving /api/youtube-views; scrapes in-process when omitted
        #[arg(long)]
        endpoint: Option<String>,

        /// Prefix for image and project page links, e.g. "../"
        #[arg(long, default_value = "")]
        path_prefix: String,

        /// Id of the grid container
        #[arg(long, default_value = "featured-projects")]
        container_id: String,

        /// Write the grid HTML here instead of stdout
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print the project count and hero collage image paths
    Stats {
        #[arg(long, default_value = "")]
        path_prefix: String,
    },
}
