mod clients;
mod extractors;
mod html_container;

pub use clients::{
    views_api::ViewsApiClient,
    youtube::{YoutubeClient, BOT_USER_AGENT, YOUTUBE_BASE_URL},
};
pub use extractors::{default_extractors, extract_view_count, ViewCountExtractor};
pub use html_container::HtmlContainer;
