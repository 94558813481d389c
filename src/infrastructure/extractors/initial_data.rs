use super::ViewCountExtractor;
use once_cell::sync::Lazy;
use regex::Regex;

/// Human-formatted `"1,234 views"` from the embedded page data.
pub struct InitialDataExtractor;

static REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#""viewCount"\s*:\s*\{\s*"simpleText"\s*:\s*"([0-9,]+)\s+views?""#).unwrap()
});

impl ViewCountExtractor for InitialDataExtractor {
    fn name(&self) -> &'static str {
        "page data simpleText"
    }

    fn extract(&self, body: &str) -> Option<u64> {
        let grouped = REGEX.captures(body)?.get(1)?.as_str();
        grouped.replace(',', "").parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_grouping_commas() {
        let body = r#""viewCount":{"simpleText":"12,345 views"}"#;
        assert_eq!(InitialDataExtractor.extract(body), Some(12345));
    }

    #[test]
    fn accepts_singular_view() {
        let body = r#""viewCount": { "simpleText": "1 view"}"#;
        assert_eq!(InitialDataExtractor.extract(body), Some(1));
    }

    #[test]
    fn rejects_abbreviated_counts() {
        let body = r#""viewCount":{"simpleText":"1.2M views"}"#;
        assert_eq!(InitialDataExtractor.extract(body), None);
    }

    #[test]
    fn ignores_fullwidth_digits() {
        let body = r#""viewCount":{"simpleText":"１２ views"} "viewCount":{"simpleText":"7 views"}"#;
        assert_eq!(InitialDataExtractor.extract(body), Some(7));
    }
}
