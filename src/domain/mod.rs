mod catalog;
mod container;
pub(crate) mod project;
mod views;

pub use catalog::Catalog;
pub use container::{Container, FadeInObserver};
pub use project::{Card, ProjectEntry, RankedProjectEntry};
pub use views::{PageSource, VideoId, ViewCount, ViewCountMap, ViewsEndpoint};
