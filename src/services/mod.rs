pub(crate) mod featured;
pub(crate) mod ranking;
pub(crate) mod rendering;
pub(crate) mod view_counts;

pub use featured::{FeaturedOutcome, FeaturedService, DEFAULT_FEATURED_LIMIT};
pub use view_counts::ViewCountService;
