use crate::domain::Container;

/// In-memory render target. Stands in for the page's grid element when
/// the featured grid is baked ahead of time.
#[derive(Debug, Default, Clone)]
pub struct HtmlContainer {
    id: String,
    html: String,
    renders: usize,
}

impl HtmlContainer {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// How many times the contents have been replaced.
    pub fn renders(&self) -> usize {
        self.renders
    }

    pub fn into_html(self) -> String {
        self.html
    }
}

impl Container for HtmlContainer {
    fn id(&self) -> &str {
        &self.id
    }

    fn contents(&self) -> &str {
        &self.html
    }

    fn replace_contents(&mut self, html: String) {
        self.html = html;
        self.renders += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replace_overwrites_previous_contents() {
        let mut container = HtmlContainer::new("featured-grid");
        container.replace_contents("<div>first</div>".to_string());
        container.replace_contents("<div>second</div>".to_string());

        assert_eq!(container.id(), "featured-grid");
        assert_eq!(container.contents(), "<div>second</div>");
        assert_eq!(container.renders(), 2);
        assert_eq!(container.into_html(), "<div>second</div>");
    }
}
