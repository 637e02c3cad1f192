//! View navigation: the active page and the sidebar collapse flag.
//!
//! Owned exclusively by the top-level shell; mutated only through the named
//! transitions here. Nothing is persisted across process restarts.

use crate::logging::{json_log, log, obj, v_bool, v_str, Domain, Level};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Dashboard,
    Analysis,
    Analytics,
    Risk,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Dashboard, Page::Analysis, Page::Analytics, Page::Risk];

    pub fn from_id(id: &str) -> Option<Page> {
        match id {
            "dashboard" => Some(Page::Dashboard),
            "analysis" => Some(Page::Analysis),
            "analytics" => Some(Page::Analytics),
            "risk" => Some(Page::Risk),
            _ => None,
        }
    }

    /// Parse with the default-panel fallback, for boundary inputs like the
    /// START_PAGE env value.
    pub fn from_id_or_default(id: &str) -> Page {
        Page::from_id(id).unwrap_or(Page::Dashboard)
    }

    pub fn id(&self) -> &'static str {
        match self {
            Page::Dashboard => "dashboard",
            Page::Analysis => "analysis",
            Page::Analytics => "analytics",
            Page::Risk => "risk",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Analysis => "Analysis",
            Page::Analytics => "Analytics",
            Page::Risk => "Risk Assessment",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct NavState {
    pub active_page: Page,
    pub sidebar_expanded: bool,
}

impl NavState {
    pub fn new(starting_page: Page) -> Self {
        Self { active_page: starting_page, sidebar_expanded: true }
    }

    pub fn navigate(&mut self, page: Page) {
        let prev = self.active_page;
        self.active_page = page;
        json_log(
            Domain::Nav,
            "navigate",
            obj(&[("prev", v_str(prev.id())), ("page", v_str(page.id()))]),
        );
    }

    /// Raw id from the event surface. Unknown ids leave the active page
    /// unchanged.
    pub fn navigate_id(&mut self, id: &str) {
        match Page::from_id(id) {
            Some(page) => self.navigate(page),
            None => log(
                Level::Warn,
                Domain::Nav,
                "unknown_page",
                obj(&[("id", v_str(id)), ("active", v_str(self.active_page.id()))]),
            ),
        }
    }

    pub fn toggle_sidebar(&mut self) -> bool {
        self.sidebar_expanded = !self.sidebar_expanded;
        json_log(
            Domain::Nav,
            "sidebar",
            obj(&[("expanded", v_bool(self.sidebar_expanded))]),
        );
        self.sidebar_expanded
    }
}

impl Default for NavState {
    fn default() -> Self {
        Self::new(Page::Dashboard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_state_is_dashboard_with_sidebar_open() {
        let nav = NavState::default();
        assert_eq!(nav.active_page, Page::Dashboard);
        assert!(nav.sidebar_expanded);
    }

    #[test]
    fn page_ids_round_trip() {
        for page in Page::ALL {
            assert_eq!(Page::from_id(page.id()), Some(page));
        }
    }

    #[test]
    fn unknown_id_falls_back_to_default_at_parse_boundary() {
        assert_eq!(Page::from_id_or_default("settings"), Page::Dashboard);
        assert_eq!(Page::from_id_or_default("risk"), Page::Risk);
    }

    #[test]
    fn navigate_id_ignores_unknown_pages() {
        let mut nav = NavState::default();
        nav.navigate(Page::Risk);
        nav.navigate_id("reports");
        assert_eq!(nav.active_page, Page::Risk, "unknown id must not move the page");
    }

    #[test]
    fn navigation_leaves_sidebar_alone() {
        let mut nav = NavState::default();
        let before = nav.sidebar_expanded;
        nav.navigate_id("risk");
        nav.navigate_id("analytics");
        assert_eq!(nav.active_page, Page::Analytics);
        assert_eq!(nav.sidebar_expanded, before);
    }

    #[test]
    fn toggle_flips_and_reports() {
        let mut nav = NavState::default();
        assert!(!nav.toggle_sidebar());
        assert!(nav.toggle_sidebar());
    }
}
