use anyhow::Result;

use fraudshield::config::Config;
use fraudshield::logging::{json_log, obj, v_num, v_str, Domain};
use fraudshield::session::RunState;
use fraudshield::shell::DashboardShell;

#[tokio::main]
async fn main() -> Result<()> {
    let cfg = Config::from_env();
    json_log(
        Domain::System,
        "startup",
        obj(&[
            ("config_hash", v_str(&cfg.config_hash())),
            ("analysis_delay_ms", v_num(cfg.analysis_delay_ms as f64)),
            ("starting_page", v_str(&cfg.starting_page)),
        ]),
    );

    let upload = std::env::args().nth(1).unwrap_or_else(|| "sample_claims.csv".to_string());
    let mut shell = DashboardShell::with_simulated(cfg);

    // Scripted session: the same event sequence a user would produce.
    emit_panel(&shell);

    shell.on_nav_click("analysis");
    shell.on_file_picked(&upload);
    emit_panel(&shell); // loading view

    let state = shell.await_analysis().await;
    emit_panel(&shell);
    if state == RunState::Failed {
        json_log(
            Domain::System,
            "analysis_failed",
            obj(&[("error", v_str(shell.session().error_message().unwrap_or_default()))]),
        );
    }

    for page in ["analytics", "risk"] {
        shell.on_nav_click(page);
        emit_panel(&shell);
    }

    if shell.session().result().is_some() {
        let path = shell.export_report()?;
        json_log(
            Domain::System,
            "report_written",
            obj(&[("path", v_str(&path.to_string_lossy()))]),
        );
    }

    Ok(())
}

fn emit_panel(shell: &DashboardShell) {
    let payload = shell.render();
    let data = serde_json::to_value(&payload).unwrap_or_default();
    json_log(
        Domain::Panel,
        "payload",
        obj(&[
            ("page", v_str(shell.nav().active_page.id())),
            ("payload", data),
        ]),
    );
}
