//! The top-level dashboard shell: sole owner of navigation state and the
//! analysis session, and the surface UI events land on.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;

use crate::analysis::{FraudAnalyzer, SimulatedAnalyzer};
use crate::config::Config;
use crate::logging::{json_log, obj, v_str, Domain};
use crate::model::UploadSelection;
use crate::nav::{NavState, Page};
use crate::panels::{panel_for, PanelData};
use crate::report;
use crate::session::{AnalysisSession, RunState};

pub struct DashboardShell {
    cfg: Config,
    nav: NavState,
    session: AnalysisSession,
}

impl DashboardShell {
    pub fn new(cfg: Config, analyzer: Arc<dyn FraudAnalyzer>) -> Self {
        let starting_page = Page::from_id_or_default(&cfg.starting_page);
        let session = AnalysisSession::new(analyzer, Duration::from_millis(cfg.analysis_delay_ms));
        Self { cfg, nav: NavState::new(starting_page), session }
    }

    /// Shell wired to the stub analyzer, seeded from config.
    pub fn with_simulated(cfg: Config) -> Self {
        let analyzer = Arc::new(SimulatedAnalyzer::new(cfg.seed));
        Self::new(cfg, analyzer)
    }

    pub fn nav(&self) -> &NavState {
        &self.nav
    }

    pub fn session(&self) -> &AnalysisSession {
        &self.session
    }

    // === UI event surface ===

    pub fn on_nav_click(&mut self, page_id: &str) {
        self.nav.navigate_id(page_id);
    }

    pub fn on_sidebar_toggle(&mut self) -> bool {
        self.nav.toggle_sidebar()
    }

    pub fn on_file_picked<P: AsRef<Path>>(&mut self, path: P) {
        self.session.select_file(UploadSelection::from_path(path));
    }

    /// Drive the in-flight analysis run to completion.
    pub async fn await_analysis(&mut self) -> RunState {
        self.session.await_run().await
    }

    /// Payload for whatever page is active.
    pub fn render(&self) -> PanelData {
        let payload = panel_for(self.nav.active_page, &self.session);
        json_log(
            Domain::Panel,
            "render",
            obj(&[("page", v_str(self.nav.active_page.id()))]),
        );
        payload
    }

    pub fn export_report(&self) -> Result<PathBuf> {
        report::export_report(&self.session, &self.cfg)
    }
}
