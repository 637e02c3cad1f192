//! Analysis run lifecycle: Idle → Running → {Completed, Failed}.
//!
//! The session owns the run state machine. A run is spawned onto its own task
//! so the artificial delay never blocks other UI events; the session applies
//! the outcome when the owner drives `await_run`. Selecting a new file while
//! a run is in flight aborts the superseded task, and a per-run sequence
//! token guards outcome application, so at most one active run ever
//! contributes its result.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tokio::task::JoinHandle;
use tokio::time::sleep;

use crate::analysis::FraudAnalyzer;
use crate::logging::{json_log, log, obj, v_bool, v_num, v_str, Domain, Level};
use crate::model::{AggregatedResult, UploadSelection};

/// Fixed user-facing message for any Running-phase failure.
pub const ANALYSIS_FAILED_MSG: &str = "Error analyzing file. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running,
    Completed,
    Failed,
}

impl RunState {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunState::Idle => "idle",
            RunState::Running => "running",
            RunState::Completed => "completed",
            RunState::Failed => "failed",
        }
    }
}

struct InflightRun {
    seq: u64,
    handle: JoinHandle<Result<AggregatedResult>>,
}

pub struct AnalysisSession {
    analyzer: Arc<dyn FraudAnalyzer>,
    delay: Duration,
    state: RunState,
    result: Option<AggregatedResult>,
    error: Option<String>,
    upload: Option<UploadSelection>,
    run_seq: u64,
    inflight: Option<InflightRun>,
}

impl AnalysisSession {
    pub fn new(analyzer: Arc<dyn FraudAnalyzer>, delay: Duration) -> Self {
        Self {
            analyzer,
            delay,
            state: RunState::Idle,
            result: None,
            error: None,
            upload: None,
            run_seq: 0,
            inflight: None,
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        self.state == RunState::Running
    }

    pub fn result(&self) -> Option<&AggregatedResult> {
        self.result.as_ref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn selected_file(&self) -> Option<&UploadSelection> {
        self.upload.as_ref()
    }

    /// File-picker event: start a fresh run. Any in-flight run is aborted and
    /// its (never-applied) outcome discarded. The previous result is kept for
    /// display continuity until the new run replaces it.
    pub fn select_file(&mut self, upload: UploadSelection) {
        if let Some(superseded) = self.inflight.take() {
            superseded.handle.abort();
            json_log(
                Domain::Session,
                "run_superseded",
                obj(&[
                    ("seq", v_num(superseded.seq as f64)),
                    ("by_seq", v_num((self.run_seq + 1) as f64)),
                ]),
            );
        }

        self.run_seq += 1;
        let seq = self.run_seq;
        let prev = self.state;
        self.state = RunState::Running;
        self.error = None;
        self.upload = Some(upload.clone());

        json_log(
            Domain::Session,
            "state",
            obj(&[
                ("prev_state", v_str(prev.as_str())),
                ("new_state", v_str(self.state.as_str())),
                ("evidence", v_str("file_selected")),
                ("file", v_str(&upload.file_name)),
                ("seq", v_num(seq as f64)),
            ]),
        );

        let analyzer = Arc::clone(&self.analyzer);
        let delay = self.delay;
        let handle = tokio::spawn(async move {
            // Stands in for the real computation; the only suspension point.
            sleep(delay).await;
            analyzer.analyze(&upload).await
        });
        self.inflight = Some(InflightRun { seq, handle });
    }

    /// Drive the in-flight run to its outcome and apply it. Returns the state
    /// after application. No-op when nothing is in flight.
    pub async fn await_run(&mut self) -> RunState {
        let Some(run) = self.inflight.take() else {
            return self.state;
        };

        let outcome = run.handle.await;
        if run.seq != self.run_seq {
            // A newer selection owns the session now; this outcome is dead.
            json_log(
                Domain::Session,
                "run_discarded",
                obj(&[("seq", v_num(run.seq as f64)), ("current", v_num(self.run_seq as f64))]),
            );
            return self.state;
        }

        match outcome {
            Ok(Ok(result)) => {
                self.result = Some(result);
                self.transition(RunState::Completed, "analysis_complete");
            }
            Ok(Err(err)) => {
                log(
                    Level::Error,
                    Domain::Session,
                    "analysis_error",
                    obj(&[("seq", v_num(run.seq as f64)), ("error", v_str(&format!("{err:#}")))]),
                );
                self.error = Some(ANALYSIS_FAILED_MSG.to_string());
                self.transition(RunState::Failed, "analysis_error");
            }
            Err(join_err) if join_err.is_cancelled() => {
                // Aborted between the seq check and here; nothing to apply.
            }
            Err(join_err) => {
                log(
                    Level::Error,
                    Domain::Session,
                    "analysis_panicked",
                    obj(&[("seq", v_num(run.seq as f64)), ("error", v_str(&join_err.to_string()))]),
                );
                self.error = Some(ANALYSIS_FAILED_MSG.to_string());
                self.transition(RunState::Failed, "run_panicked");
            }
        }
        self.state
    }

    fn transition(&mut self, next: RunState, evidence: &str) {
        let prev = self.state;
        self.state = next;
        json_log(
            Domain::Session,
            "state",
            obj(&[
                ("prev_state", v_str(prev.as_str())),
                ("new_state", v_str(next.as_str())),
                ("evidence", v_str(evidence)),
                ("has_result", v_bool(self.result.is_some())),
            ]),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::SimulatedAnalyzer;

    fn session(delay_ms: u64) -> AnalysisSession {
        AnalysisSession::new(
            Arc::new(SimulatedAnalyzer::new(Some(5))),
            Duration::from_millis(delay_ms),
        )
    }

    #[test]
    fn starts_idle_with_nothing_selected() {
        let s = session(1);
        assert_eq!(s.state(), RunState::Idle);
        assert!(s.result().is_none());
        assert!(s.error_message().is_none());
        assert!(s.selected_file().is_none());
        assert!(!s.is_loading());
    }

    #[tokio::test]
    async fn select_enters_running_with_no_result_yet() {
        let mut s = session(50);
        s.select_file(UploadSelection::from_path("claims.csv"));
        assert_eq!(s.state(), RunState::Running);
        assert!(s.is_loading());
        assert!(s.result().is_none(), "first run must not expose a result while running");
        assert_eq!(s.selected_file().unwrap().file_name, "claims.csv");
    }

    #[tokio::test]
    async fn run_completes_and_clears_loading() {
        let mut s = session(1);
        s.select_file(UploadSelection::from_path("claims.csv"));
        let state = s.await_run().await;
        assert_eq!(state, RunState::Completed);
        assert!(!s.is_loading());
        assert!(s.error_message().is_none(), "completed runs carry no error");
        let result = s.result().expect("completed run must store a result");
        assert!((0.0..100.0).contains(&result.overall_risk));
    }

    #[tokio::test]
    async fn await_without_run_is_a_no_op() {
        let mut s = session(1);
        assert_eq!(s.await_run().await, RunState::Idle);
    }
}
