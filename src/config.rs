use serde::Serialize;
use sha2::{Digest, Sha256};

#[derive(Clone, Serialize)]
pub struct Config {
    /// Artificial Running-phase delay in ms, standing in for real computation.
    pub analysis_delay_ms: u64,
    /// Fixed RNG seed for deterministic replay. None = entropy-seeded.
    pub seed: Option<u64>,
    pub report_path: String,
    pub starting_page: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            analysis_delay_ms: std::env::var("ANALYSIS_DELAY_MS").ok().and_then(|v| v.parse().ok()).unwrap_or(2000),
            seed: std::env::var("SEED").ok().and_then(|v| v.parse().ok()),
            report_path: std::env::var("REPORT_PATH").unwrap_or_else(|_| "./out/fraud_report.json".to_string()),
            starting_page: std::env::var("START_PAGE").unwrap_or_else(|_| "dashboard".to_string()),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }

    /// SHA256 over the canonical JSON form. Exported reports carry this so a
    /// result can be traced back to the exact configuration that produced it.
    pub fn config_hash(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.to_json().as_bytes());
        hex::encode(hasher.finalize())
    }
}
