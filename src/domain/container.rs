/// A render target for project cards, addressed by id.
///
/// Every render replaces the whole contents in one call, so a second render
/// can never leave cards from the first one behind.
pub trait Container {
    fn id(&self) -> &str;
    fn contents(&self) -> &str;
    fn replace_contents(&mut self, html: String);
}

/// Shared fade-in mechanism that freshly injected cards register with.
pub trait FadeInObserver: Send + Sync {
    fn observe(&self, container_id: &str, card_index: usize);
}
