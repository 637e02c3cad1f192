//! Analysis report export: a completed run serialized to JSON, stamped with
//! the config hash so the numbers can be traced to the run that produced them.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use serde::Serialize;

use crate::config::Config;
use crate::logging::{json_log, obj, v_str, Domain};
use crate::model::{AggregatedResult, FraudCategory};
use crate::risk::RiskLevel;
use crate::session::AnalysisSession;

#[derive(Debug, Clone, Serialize)]
pub struct ReportCategory {
    pub category: &'static str,
    pub score: f64,
    pub level: RiskLevel,
    pub advisory: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalysisReport {
    pub exported_at: String,
    pub config_hash: String,
    pub file_name: Option<String>,
    pub overall_level: RiskLevel,
    pub categories: Vec<ReportCategory>,
    pub result: AggregatedResult,
}

pub fn build_report(session: &AnalysisSession, cfg: &Config) -> Result<AnalysisReport> {
    let Some(result) = session.result() else {
        bail!("no completed analysis to export");
    };
    Ok(AnalysisReport {
        exported_at: crate::logging::ts_now(),
        config_hash: cfg.config_hash(),
        file_name: session.selected_file().map(|u| u.file_name.clone()),
        overall_level: RiskLevel::of(result.overall_risk),
        categories: FraudCategory::ALL
            .iter()
            .map(|&category| {
                let score = result.category(category).score;
                let level = RiskLevel::of(score);
                ReportCategory {
                    category: category.title(),
                    score,
                    level,
                    advisory: level.advisory(),
                }
            })
            .collect(),
        result: result.clone(),
    })
}

/// Write the report to `cfg.report_path` as pretty JSON, creating parent
/// directories as needed. Errors when no completed result exists.
pub fn export_report(session: &AnalysisSession, cfg: &Config) -> Result<PathBuf> {
    let report = build_report(session, cfg)?;
    let path = PathBuf::from(&cfg.report_path);
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating report dir {}", parent.display()))?;
        }
    }
    let body = serde_json::to_string_pretty(&report).context("serializing report")?;
    fs::write(&path, body).with_context(|| format!("writing report to {}", path.display()))?;
    json_log(
        Domain::Report,
        "exported",
        obj(&[
            ("path", v_str(&path.to_string_lossy())),
            ("config_hash", v_str(&report.config_hash)),
        ]),
    );
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::SimulatedAnalyzer;
    use crate::model::UploadSelection;
    use std::sync::Arc;
    use std::time::Duration;

    fn cfg(report_path: &str) -> Config {
        Config {
            analysis_delay_ms: 1,
            seed: Some(3),
            report_path: report_path.to_string(),
            starting_page: "dashboard".to_string(),
        }
    }

    #[test]
    fn export_refuses_without_a_result() {
        let session = AnalysisSession::new(
            Arc::new(SimulatedAnalyzer::new(Some(3))),
            Duration::from_millis(1),
        );
        let err = build_report(&session, &cfg("/tmp/unused.json")).unwrap_err();
        assert!(err.to_string().contains("no completed analysis"));
    }

    #[tokio::test]
    async fn report_carries_hash_and_per_category_levels() {
        let mut session = AnalysisSession::new(
            Arc::new(SimulatedAnalyzer::new(Some(3))),
            Duration::from_millis(1),
        );
        session.select_file(UploadSelection::from_path("claims.csv"));
        session.await_run().await;

        let cfg = cfg("/tmp/unused.json");
        let report = build_report(&session, &cfg).unwrap();
        assert_eq!(report.config_hash, cfg.config_hash());
        assert_eq!(report.file_name.as_deref(), Some("claims.csv"));
        assert_eq!(report.categories.len(), 4);
        for cat in &report.categories {
            assert_eq!(cat.level, RiskLevel::of(cat.score));
        }
    }
}
