use tracing::debug;

pub(crate) mod initial_data;
pub(crate) mod json_ld;
pub(crate) mod meta_tag;

/// One way of pulling a view count out of a watch page body.
pub trait ViewCountExtractor: Send + Sync {
    fn name(&self) -> &'static str;
    fn extract(&self, body: &str) -> Option<u64>;
}

/// Strategies in priority order; the first one that matches wins.
pub fn default_extractors() -> Vec<Box<dyn ViewCountExtractor>> {
    vec![
        Box::new(meta_tag::MetaTagExtractor),
        Box::new(json_ld::JsonLdExtractor),
        Box::new(initial_data::InitialDataExtractor),
    ]
}

pub fn extract_view_count(body: &str, extractors: &[Box<dyn ViewCountExtractor>]) -> Option<u64> {
    extractors.iter().find_map(|extractor| {
        let count = extractor.extract(body)?;
        debug!("{} matched {count} views", extractor.name());
        Some(count)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_THREE: &str = r#"
        <meta itemprop="interactionCount" content="48213">
        <script type="application/ld+json">{"viewCount": "99999"}</script>
        <script>var ytInitialData = {"viewCount":{"simpleText":"1,234 views"}};</script>
    "#;

    #[test]
    fn meta_tag_wins_over_other_strategies() {
        assert_eq!(extract_view_count(ALL_THREE, &default_extractors()), Some(48213));
    }

    #[test]
    fn non_ascii_digits_do_not_demote_the_meta_tag() {
        let body = r#"
            <meta itemprop="interactionCount" content="٤٨">
            <meta itemprop="interactionCount" content="48213">
            {"viewCount":"7"}
        "#;
        assert_eq!(extract_view_count(body, &default_extractors()), Some(48213));
    }

    #[test]
    fn structured_data_beats_page_data() {
        let body = r#"{"viewCount": "777"} {"viewCount":{"simpleText":"1,234 views"}}"#;
        assert_eq!(extract_view_count(body, &default_extractors()), Some(777));
    }

    #[test]
    fn falls_through_to_human_formatted_count() {
        let body = r#"ytInitialData = {"viewCount": {"simpleText": "12,345 views"}}"#;
        assert_eq!(extract_view_count(body, &default_extractors()), Some(12345));
    }

    #[test]
    fn no_match_yields_none() {
        assert_eq!(
            extract_view_count("<html>nothing here</html>", &default_extractors()),
            None
        );
    }

    #[test]
    fn custom_order_is_honoured() {
        let reversed: Vec<Box<dyn ViewCountExtractor>> = vec![
            Box::new(initial_data::InitialDataExtractor),
            Box::new(meta_tag::MetaTagExtractor),
        ];
        assert_eq!(extract_view_count(ALL_THREE, &reversed), Some(1234));
    }
}
