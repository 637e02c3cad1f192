//! Shell-level flows: navigation, panel dispatch, and report export.

use fraudshield::config::Config;
use fraudshield::nav::Page;
use fraudshield::panels::PanelData;
use fraudshield::session::RunState;
use fraudshield::shell::DashboardShell;

fn test_config(report_path: &str) -> Config {
    Config {
        analysis_delay_ms: 1,
        seed: Some(99),
        report_path: report_path.to_string(),
        starting_page: "dashboard".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Navigation flows
// ---------------------------------------------------------------------------
#[test]
fn navigation_sequence_lands_on_last_page() {
    let mut shell = DashboardShell::with_simulated(test_config("/tmp/unused.json"));
    let sidebar_before = shell.nav().sidebar_expanded;

    shell.on_nav_click("risk");
    shell.on_nav_click("analytics");

    assert_eq!(shell.nav().active_page, Page::Analytics);
    assert_eq!(shell.nav().sidebar_expanded, sidebar_before, "navigation must not touch the sidebar");
}

#[test]
fn unknown_page_id_is_ignored() {
    let mut shell = DashboardShell::with_simulated(test_config("/tmp/unused.json"));
    shell.on_nav_click("analysis");
    shell.on_nav_click("not-a-page");
    assert_eq!(shell.nav().active_page, Page::Analysis);
}

#[test]
fn sidebar_toggle_round_trips() {
    let mut shell = DashboardShell::with_simulated(test_config("/tmp/unused.json"));
    assert!(!shell.on_sidebar_toggle());
    assert!(shell.on_sidebar_toggle());
}

// ---------------------------------------------------------------------------
// Panel dispatch
// ---------------------------------------------------------------------------
#[test]
fn each_page_renders_its_panel_variant() {
    let mut shell = DashboardShell::with_simulated(test_config("/tmp/unused.json"));

    shell.on_nav_click("dashboard");
    assert!(matches!(shell.render(), PanelData::Dashboard(_)));
    shell.on_nav_click("analysis");
    assert!(matches!(shell.render(), PanelData::Analysis(_)));
    shell.on_nav_click("analytics");
    assert!(matches!(shell.render(), PanelData::Analytics(_)));
    shell.on_nav_click("risk");
    assert!(matches!(shell.render(), PanelData::Risk(_)));
}

#[tokio::test]
async fn loading_then_results_flow_through_analysis_panel() {
    let mut shell = DashboardShell::with_simulated(test_config("/tmp/unused.json"));
    shell.on_nav_click("analysis");

    shell.on_file_picked("/uploads/q2_claims.csv");
    match shell.render() {
        PanelData::Analysis(panel) => {
            assert!(panel.loading, "panel must show the loading state while running");
            assert!(panel.error.is_none());
            assert_eq!(panel.selected_file.as_deref(), Some("q2_claims.csv"));
        }
        other => panic!("expected analysis panel, got {:?}", other),
    }

    assert_eq!(shell.await_analysis().await, RunState::Completed);
    match shell.render() {
        PanelData::Analysis(panel) => {
            assert!(!panel.loading);
            assert_eq!(panel.categories.len(), 4);
            assert_eq!(panel.findings.len(), 4);
            for finding in &panel.findings {
                assert!(!finding.advisory.is_empty());
            }
        }
        other => panic!("expected analysis panel, got {:?}", other),
    }
}

// ---------------------------------------------------------------------------
// Report export round-trip
// ---------------------------------------------------------------------------
#[tokio::test]
async fn exported_report_round_trips_with_config_hash() {
    let dir = tempfile::tempdir().expect("tempdir");
    let report_path = dir.path().join("report.json");
    let cfg = test_config(&report_path.to_string_lossy());
    let expected_hash = cfg.config_hash();

    let mut shell = DashboardShell::with_simulated(cfg);
    shell.on_file_picked("claims.csv");
    assert_eq!(shell.await_analysis().await, RunState::Completed);

    let written = shell.export_report().expect("export should succeed");
    assert_eq!(written, report_path);

    let body = std::fs::read_to_string(&written).expect("report file readable");
    let parsed: serde_json::Value = serde_json::from_str(&body).expect("report is valid JSON");
    assert_eq!(parsed["config_hash"].as_str(), Some(expected_hash.as_str()));
    assert_eq!(parsed["file_name"].as_str(), Some("claims.csv"));
    assert_eq!(parsed["categories"].as_array().map(|a| a.len()), Some(4));
    let overall = parsed["result"]["overall_risk"].as_f64().expect("overall risk present");
    assert!((0.0..100.0).contains(&overall));
}

#[test]
fn export_without_result_errors() {
    let shell = DashboardShell::with_simulated(test_config("/tmp/unused-report.json"));
    assert!(shell.export_report().is_err(), "no completed run, nothing to export");
}
