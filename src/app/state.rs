use super::indicator::CopyIndicator;
use super::pane::Pane;
use crate::docs::{ApiReference, CodeBlock, Endpoint, GuideStep, Resource};
use crate::ui::theme::Theme;
use anyhow::Result;
use std::time::{Duration, Instant};
use tracing::warn;

/// How long a copy-failure message stays in the status bar.
const ERROR_TTL: Duration = Duration::from_millis(4000);

pub struct AppState {
    pub reference: ApiReference,
    pub tab: usize,
    cursors: Vec<usize>,
    pub pane: Pane,
    pub show_help: bool,
    pub should_quit: bool,
    pub theme: Theme,
    pub copy_indicator: CopyIndicator,
    status_error: Option<(String, Instant)>,
}

impl AppState {
    pub fn new(reference: ApiReference, theme: Theme, copy_feedback: Duration) -> Self {
        let tab_count = reference.resources.len() + 1;
        Self {
            reference,
            tab: 0,
            cursors: vec![0; tab_count],
            pane: Pane::Response,
            show_help: false,
            should_quit: false,
            theme,
            copy_indicator: CopyIndicator::new(copy_feedback),
            status_error: None,
        }
    }

    pub fn tab_count(&self) -> usize {
        self.reference.resources.len() + 1
    }

    pub fn tab_title(&self, tab: usize) -> &str {
        match self.reference.resources.get(tab) {
            Some(resource) => &resource.name,
            None => "Guide",
        }
    }

    /// The resource shown on the current tab, or None on the Guide tab.
    pub fn current_resource(&self) -> Option<&Resource> {
        self.reference.resources.get(self.tab)
    }

    pub fn cursor(&self) -> usize {
        self.cursors[self.tab]
    }

    fn current_len(&self) -> usize {
        match self.current_resource() {
            Some(resource) => resource.endpoints.len(),
            None => self.reference.guide.len(),
        }
    }

    pub fn selected_endpoint(&self) -> Option<&Endpoint> {
        self.current_resource()?.endpoints.get(self.cursor())
    }

    pub fn selected_guide_step(&self) -> Option<&GuideStep> {
        if self.current_resource().is_some() {
            return None;
        }
        self.reference.guide.get(self.cursor())
    }

    /// The code block the detail pane is showing right now. On a resource
    /// tab the Request pane falls back to the response when the endpoint
    /// has no request body.
    pub fn visible_block(&self) -> Option<&CodeBlock> {
        if let Some(step) = self.selected_guide_step() {
            return Some(&step.block);
        }
        let endpoint = self.selected_endpoint()?;
        match self.pane {
            Pane::Request => Some(endpoint.request.as_ref().unwrap_or(&endpoint.response)),
            Pane::Response => Some(&endpoint.response),
        }
    }

    pub fn next_tab(&mut self) {
        self.tab = (self.tab + 1) % self.tab_count();
    }

    pub fn prev_tab(&mut self) {
        self.tab = (self.tab + self.tab_count() - 1) % self.tab_count();
    }

    pub fn set_tab(&mut self, tab: usize) {
        if tab < self.tab_count() {
            self.tab = tab;
        }
    }

    pub fn move_cursor_up(&mut self) {
        let cursor = &mut self.cursors[self.tab];
        *cursor = cursor.saturating_sub(1);
    }

    pub fn move_cursor_down(&mut self) {
        let len = self.current_len();
        let cursor = &mut self.cursors[self.tab];
        if len > 0 && *cursor < len - 1 {
            *cursor += 1;
        }
    }

    pub fn move_cursor_first(&mut self) {
        self.cursors[self.tab] = 0;
    }

    pub fn move_cursor_last(&mut self) {
        self.cursors[self.tab] = self.current_len().saturating_sub(1);
    }

    pub fn toggle_pane(&mut self) {
        // Only meaningful when the selected endpoint has a request body
        if self.selected_endpoint().is_some_and(|ep| ep.request.is_some()) {
            self.pane = self.pane.toggle();
        }
    }

    /// Fold a clipboard-write outcome into UI state: success lights the
    /// "copied" marker for `token`, failure leaves the marker alone and
    /// puts a transient error in the status bar.
    pub fn record_copy_result(&mut self, token: &str, result: Result<()>) {
        match result {
            Ok(()) => self.copy_indicator.activate(token),
            Err(err) => {
                warn!(token, error = %err, "clipboard write failed");
                self.status_error = Some((format!("Copy failed: {err:#}"), Instant::now()));
            }
        }
    }

    pub fn status_error(&self) -> Option<&str> {
        self.status_error.as_ref().map(|(msg, _)| msg.as_str())
    }

    /// Per-iteration housekeeping for transient state.
    pub fn tick(&mut self) {
        self.copy_indicator.clear_expired();
        let error_expired = self
            .status_error
            .as_ref()
            .is_some_and(|(_, since)| since.elapsed() >= ERROR_TTL);
        if error_expired {
            self.status_error = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use pretty_assertions::assert_eq;

    fn state() -> AppState {
        AppState::new(
            ApiReference::builtin(),
            Theme::default(),
            Duration::from_millis(2000),
        )
    }

    #[test]
    fn test_tabs_wrap_around() {
        let mut state = state();
        assert_eq!(state.tab_title(state.tab), "Products");
        state.prev_tab();
        assert_eq!(state.tab_title(state.tab), "Guide");
        state.next_tab();
        assert_eq!(state.tab_title(state.tab), "Products");
    }

    #[test]
    fn test_cursor_is_per_tab_and_clamped() {
        let mut state = state();
        state.move_cursor_up();
        assert_eq!(state.cursor(), 0);
        state.move_cursor_last();
        assert_eq!(state.cursor(), 4);
        state.move_cursor_down();
        assert_eq!(state.cursor(), 4);

        state.next_tab();
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn test_visible_block_follows_pane() {
        let mut state = state();
        // GET /products has no request body; Request pane falls back
        state.pane = Pane::Request;
        assert_eq!(state.visible_block().unwrap().id, "get-products-response");

        state.move_cursor_down();
        state.move_cursor_down(); // POST /products
        assert_eq!(state.visible_block().unwrap().id, "post-products-request");
        state.pane = Pane::Response;
        assert_eq!(state.visible_block().unwrap().id, "post-products-response");
    }

    #[test]
    fn test_toggle_pane_requires_request_body() {
        let mut state = state();
        state.toggle_pane(); // GET /products: no request body
        assert_eq!(state.pane, Pane::Response);

        state.move_cursor_down();
        state.move_cursor_down(); // POST /products
        state.toggle_pane();
        assert_eq!(state.pane, Pane::Request);
    }

    #[test]
    fn test_guide_tab_shows_step_blocks() {
        let mut state = state();
        state.set_tab(3);
        assert!(state.current_resource().is_none());
        assert_eq!(state.visible_block().unwrap().id, "start-server");
        state.move_cursor_down();
        assert_eq!(state.visible_block().unwrap().id, "first-request");
    }

    #[test]
    fn test_successful_copy_activates_indicator() {
        let mut state = state();
        state.record_copy_result("get-products-response", Ok(()));
        assert!(state.copy_indicator.is_active("get-products-response"));
        assert_eq!(state.status_error(), None);
    }

    #[test]
    fn test_failed_copy_reports_error_without_activating() {
        let mut state = state();
        state.record_copy_result("get-products-response", Err(anyhow!("no display")));
        assert_eq!(state.copy_indicator.active_token(), None);
        assert!(state.status_error().unwrap().contains("no display"));
    }

    #[test]
    fn test_failed_copy_leaves_previous_activation_untouched() {
        let mut state = state();
        state.record_copy_result("token-a", Ok(()));
        state.record_copy_result("token-b", Err(anyhow!("denied")));
        assert!(state.copy_indicator.is_active("token-a"));
    }
}
