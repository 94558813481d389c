use super::ViewCountExtractor;
use once_cell::sync::Lazy;
use regex::Regex;

/// Quoted `"viewCount": "123"` as found in the JSON-LD block.
pub struct JsonLdExtractor;

static REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""viewCount"\s*:\s*"([0-9]+)""#).unwrap());

impl ViewCountExtractor for JsonLdExtractor {
    fn name(&self) -> &'static str {
        "structured data viewCount"
    }

    fn extract(&self, body: &str) -> Option<u64> {
        REGEX.captures(body)?.get(1)?.as_str().parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_quoted_count() {
        assert_eq!(JsonLdExtractor.extract(r#""viewCount" : "31337""#), Some(31337));
    }

    #[test]
    fn skips_unquoted_numbers() {
        assert_eq!(JsonLdExtractor.extract(r#""viewCount": 31337"#), None);
    }

    #[test]
    fn only_ascii_digits_count() {
        let body = r#""viewCount":"١٢٣" "viewCount":"123""#;
        assert_eq!(JsonLdExtractor.extract(body), Some(123));
    }
}
