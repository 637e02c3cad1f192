//! Risk-level presentation: pure derivation from numeric scores, no state.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Threshold a score: < 30 Low, < 70 Medium, otherwise High.
    /// Boundary values land upward: 30 is Medium, 70 is High.
    pub fn of(score: f64) -> RiskLevel {
        if score < 30.0 {
            RiskLevel::Low
        } else if score < 70.0 {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }

    /// Contractual display message, not styling.
    pub fn advisory(&self) -> &'static str {
        match self {
            RiskLevel::High => "High risk detected. Immediate review recommended.",
            RiskLevel::Medium => "Medium risk detected. Further investigation suggested.",
            RiskLevel::Low => "Low risk detected. Standard processing recommended.",
        }
    }

    /// Display hint for the chart collaborator.
    pub fn color(&self) -> &'static str {
        match self {
            RiskLevel::Low => "green",
            RiskLevel::Medium => "yellow",
            RiskLevel::High => "red",
        }
    }
}
