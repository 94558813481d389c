pub(crate) mod views_api;
pub(crate) mod youtube;
