use crate::domain::{Card, Container, FadeInObserver};

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            c => escaped.push(c),
        }
    }
    escaped
}

/// Renders one project card. `visible` adds the class the fade-in
/// observer would otherwise set once the card scrolls into view.
pub fn render_project_card(card: Card<'_>, path_prefix: &str, visible: bool) -> String {
    let project = card.project;
    let title = escape_html(&project.title);
    let fade_class = if visible { "fade-in visible" } else { "fade-in" };

    format!(
        r#"
        <div class="project-card {fade_class}">
            <div class="card-image">
                <picture>
                    <source srcset="{webp}" type="image/webp">
                    <img src="{png}" alt="{title}" loading="lazy">
                </picture>
                <span class="project-badge">{badge}</span>
                <span class="project-tag">{tag}</span>
            </div>
            <div class="card-content">
                <h3>{title}</h3>
                <p>{subtitle}</p>
                <a href="{page}" class="card-link">View Details →</a>
            </div>
        </div>"#,
        webp = escape_html(&project.image_path(path_prefix, "webp")),
        png = escape_html(&project.image_path(path_prefix, "png")),
        badge = escape_html(card.badge),
        tag = escape_html(&project.tag),
        subtitle = escape_html(&project.subtitle),
        page = escape_html(&project.page_path(path_prefix)),
    )
}

/// Replaces the container contents with `cards` in one step, then registers
/// each new card with the fade-in observer. Without an observer the cards
/// are rendered already visible.
pub fn render_project_grid<'a>(
    container: &mut dyn Container,
    cards: impl IntoIterator<Item = Card<'a>>,
    path_prefix: &str,
    observer: Option<&dyn FadeInObserver>,
) {
    let visible = observer.is_none();
    let rendered: Vec<String> = cards
        .into_iter()
        .map(|card| render_project_card(card, path_prefix, visible))
        .collect();
    let count = rendered.len();

    container.replace_contents(rendered.concat());

    if let Some(observer) = observer {
        for index in 0..count {
            observer.observe(container.id(), index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ProjectEntry;
    use crate::infrastructure::HtmlContainer;
    use std::sync::Mutex;

    fn project() -> ProjectEntry {
        ProjectEntry {
            id: 9,
            title: "Rosalina (Global Club Mix)".to_string(),
            subtitle: "Guilt & <redemption>".to_string(),
            tag: "Cultural Drama".to_string(),
            badge: "Featured".to_string(),
            image: "image9".to_string(),
            youtube_id: "6Kkd3FxtHhM".to_string(),
        }
    }

    #[derive(Default)]
    struct RecordingObserver {
        seen: Mutex<Vec<(String, usize)>>,
    }

    impl FadeInObserver for RecordingObserver {
        fn observe(&self, container_id: &str, card_index: usize) {
            self.seen
                .lock()
                .unwrap()
                .push((container_id.to_string(), card_index));
        }
    }

    #[test]
    fn card_links_images_and_page() {
        let p = project();
        let html = render_project_card(Card::from(&p), "../", false);

        assert!(html.contains(r#"srcset="../images/projects/project9/image9.webp""#));
        assert!(html.contains(r#"src="../images/projects/project9/image9.png""#));
        assert!(html.contains(r#"href="../projects/project9.html""#));
        assert!(html.contains(r#"<span class="project-badge">Featured</span>"#));
        assert!(html.contains(r#"class="project-card fade-in">"#));
    }

    #[test]
    fn card_text_is_escaped() {
        let p = project();
        let html = render_project_card(Card::from(&p), "", true);

        assert!(html.contains("<p>Guilt &amp; &lt;redemption&gt;</p>"));
        assert!(html.contains("fade-in visible"));
    }

    #[test]
    fn grid_without_observer_renders_visible_cards() {
        let p = project();
        let mut container = HtmlContainer::new("grid");
        render_project_grid(&mut container, [Card::from(&p), Card::from(&p)], "", None);

        assert_eq!(container.contents().matches("project-card fade-in visible").count(), 2);
        assert_eq!(container.renders(), 1);
    }

    #[test]
    fn grid_registers_cards_with_observer() {
        let p = project();
        let observer = RecordingObserver::default();
        let mut container = HtmlContainer::new("grid");
        render_project_grid(
            &mut container,
            [Card::from(&p), Card::from(&p)],
            "",
            Some(&observer),
        );

        assert!(!container.contents().contains("visible"));
        assert_eq!(
            *observer.seen.lock().unwrap(),
            vec![("grid".to_string(), 0), ("grid".to_string(), 1)]
        );
    }
}
