//! Panel payloads: the plain data handed to the visualization collaborator.
//!
//! The core promises numeric ranges of [0,100] for chart values and nothing
//! about drawing. Each page maps to exactly one payload; unknown pages cannot
//! reach here (ids are parsed at the nav boundary).

use serde::Serialize;

use crate::demo;
use crate::model::{AggregatedResult, FraudCategory, IndicatorSample};
use crate::nav::Page;
use crate::risk::RiskLevel;
use crate::session::AnalysisSession;

// =============================================================================
// Chart primitives
// =============================================================================

/// Radar chart input: one spoke per indicator, values in [0,100).
#[derive(Debug, Clone, Serialize)]
pub struct RadarSeries {
    pub title: &'static str,
    pub points: Vec<IndicatorSample>,
}

/// The overall-risk dial.
#[derive(Debug, Clone, Serialize)]
pub struct GaugeValue {
    pub label: &'static str,
    pub value: f64,
}

/// One row of the findings list under the analysis charts.
#[derive(Debug, Clone, Serialize)]
pub struct Finding {
    pub category: &'static str,
    pub level: RiskLevel,
    pub advisory: &'static str,
    pub color: &'static str,
}

pub fn findings(result: &AggregatedResult) -> Vec<Finding> {
    FraudCategory::ALL
        .iter()
        .map(|&category| {
            let level = RiskLevel::of(result.category(category).score);
            Finding {
                category: category.title(),
                level,
                advisory: level.advisory(),
                color: level.color(),
            }
        })
        .collect()
}

// =============================================================================
// Per-page payloads
// =============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct CategoryPanel {
    pub category: &'static str,
    pub score: f64,
    pub level: RiskLevel,
    pub radar: RadarSeries,
    pub details: std::collections::BTreeMap<String, u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisPanel {
    pub loading: bool,
    pub error: Option<String>,
    pub selected_file: Option<String>,
    pub overall: Option<GaugeValue>,
    pub categories: Vec<CategoryPanel>,
    pub findings: Vec<Finding>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardPanel {
    pub total_cases: u32,
    pub total_cases_change: &'static str,
    pub trends: Vec<demo::TrendRow>,
    pub recent_cases: Vec<demo::CaseRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsPanel {
    pub claims_distribution: Vec<demo::FraudTypeSummary>,
    pub monthly: Vec<demo::TrendRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RiskMatrixRow {
    pub fraud_type: &'static str,
    pub change: &'static str,
    pub progress: f64,
    pub tier: RiskLevel,
}

#[derive(Debug, Clone, Serialize)]
pub struct RiskPanel {
    pub rows: Vec<RiskMatrixRow>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "panel", rename_all = "snake_case")]
pub enum PanelData {
    Dashboard(DashboardPanel),
    Analysis(AnalysisPanel),
    Analytics(AnalyticsPanel),
    Risk(RiskPanel),
}

// =============================================================================
// Builders
// =============================================================================

pub fn analysis_panel(session: &AnalysisSession) -> AnalysisPanel {
    let result = session.result();
    AnalysisPanel {
        loading: session.is_loading(),
        error: session.error_message().map(str::to_string),
        selected_file: session.selected_file().map(|u| u.file_name.clone()),
        overall: result.map(|r| GaugeValue { label: "Risk Score", value: r.overall_risk }),
        categories: result
            .map(|r| {
                FraudCategory::ALL
                    .iter()
                    .map(|&category| {
                        let cat = r.category(category);
                        CategoryPanel {
                            category: category.title(),
                            score: cat.score,
                            level: RiskLevel::of(cat.score),
                            radar: RadarSeries { title: category.title(), points: cat.indicators.clone() },
                            details: cat.details.clone(),
                        }
                    })
                    .collect()
            })
            .unwrap_or_default(),
        findings: result.map(findings).unwrap_or_default(),
    }
}

pub fn dashboard_panel() -> DashboardPanel {
    DashboardPanel {
        total_cases: 1247,
        total_cases_change: "+2.5% from last month",
        trends: demo::trend_rows(),
        recent_cases: demo::recent_cases(),
    }
}

pub fn analytics_panel() -> AnalyticsPanel {
    AnalyticsPanel {
        claims_distribution: demo::fraud_type_summaries(),
        monthly: demo::trend_rows(),
    }
}

pub fn risk_panel() -> RiskPanel {
    RiskPanel {
        rows: demo::fraud_type_summaries()
            .into_iter()
            .map(|summary| RiskMatrixRow {
                fraud_type: summary.fraud_type,
                change: summary.change,
                // Counts top out around 40/month; scale to a 0-100 bar.
                progress: summary.count as f64 / 0.4,
                tier: summary.risk,
            })
            .collect(),
    }
}

/// Total mapping from page to payload.
pub fn panel_for(page: Page, session: &AnalysisSession) -> PanelData {
    match page {
        Page::Dashboard => PanelData::Dashboard(dashboard_panel()),
        Page::Analysis => PanelData::Analysis(analysis_panel(session)),
        Page::Analytics => PanelData::Analytics(analytics_panel()),
        Page::Risk => PanelData::Risk(risk_panel()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::SimulatedAnalyzer;
    use crate::model::UploadSelection;
    use std::sync::Arc;
    use std::time::Duration;

    fn idle_session() -> AnalysisSession {
        AnalysisSession::new(Arc::new(SimulatedAnalyzer::new(Some(9))), Duration::from_millis(1))
    }

    #[test]
    fn analysis_panel_before_any_run_is_empty() {
        let panel = analysis_panel(&idle_session());
        assert!(!panel.loading);
        assert!(panel.error.is_none());
        assert!(panel.overall.is_none());
        assert!(panel.categories.is_empty());
        assert!(panel.findings.is_empty());
    }

    #[tokio::test]
    async fn analysis_panel_reflects_completed_run() {
        let mut session = idle_session();
        session.select_file(UploadSelection::from_path("book.xlsx"));
        session.await_run().await;

        let panel = analysis_panel(&session);
        assert!(!panel.loading);
        assert_eq!(panel.selected_file.as_deref(), Some("book.xlsx"));
        assert_eq!(panel.categories.len(), 4);
        assert_eq!(panel.findings.len(), 4);
        let overall = panel.overall.expect("completed run must feed the gauge");
        assert!((0.0..100.0).contains(&overall.value));
        for cat in &panel.categories {
            assert_eq!(cat.radar.points.len(), 5);
        }
    }

    #[test]
    fn risk_panel_progress_is_percent_scaled() {
        let panel = risk_panel();
        assert_eq!(panel.rows[0].progress, 32.0 / 0.4);
        assert!(panel.rows.iter().all(|r| r.progress <= 100.0));
    }

    #[test]
    fn every_page_has_a_panel() {
        let session = idle_session();
        for page in Page::ALL {
            let payload = panel_for(page, &session);
            let json = serde_json::to_value(&payload).expect("panel must serialize");
            assert!(json.get("panel").is_some(), "{:?} payload must be tagged", page);
        }
    }
}
