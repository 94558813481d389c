use super::ViewCountExtractor;
use once_cell::sync::Lazy;
use regex::Regex;

pub struct MetaTagExtractor;

static REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"itemprop="interactionCount"\s+content="([0-9]+)""#).unwrap());

impl ViewCountExtractor for MetaTagExtractor {
    fn name(&self) -> &'static str {
        "meta interactionCount"
    }

    fn extract(&self, body: &str) -> Option<u64> {
        REGEX.captures(body)?.get(1)?.as_str().parse().ok()
    }
}
