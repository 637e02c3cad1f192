//! Static demo datasets behind the dashboard, analytics, and risk panels.
//! Stand-ins until a case store exists; panels consume them as plain rows.

use serde::Serialize;

use crate::risk::RiskLevel;

#[derive(Debug, Clone, Serialize)]
pub struct TrendRow {
    pub month: &'static str,
    pub fraud_cases: u32,
    pub legitimate_cases: u32,
    pub approved: u32,
    pub rejected: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct FraudTypeSummary {
    pub fraud_type: &'static str,
    pub count: u32,
    pub risk: RiskLevel,
    pub change: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct CaseRow {
    pub id: &'static str,
    pub fraud_type: &'static str,
    pub amount: &'static str,
    pub date: &'static str,
    pub status: &'static str,
}

pub fn trend_rows() -> Vec<TrendRow> {
    vec![
        TrendRow { month: "Jan", fraud_cases: 65, legitimate_cases: 890, approved: 780, rejected: 175 },
        TrendRow { month: "Feb", fraud_cases: 78, legitimate_cases: 920, approved: 810, rejected: 188 },
        TrendRow { month: "Mar", fraud_cases: 89, legitimate_cases: 950, approved: 840, rejected: 199 },
        TrendRow { month: "Apr", fraud_cases: 72, legitimate_cases: 880, approved: 790, rejected: 162 },
    ]
}

pub fn fraud_type_summaries() -> Vec<FraudTypeSummary> {
    vec![
        FraudTypeSummary { fraud_type: "Identity Theft", count: 32, risk: RiskLevel::High, change: "+12%" },
        FraudTypeSummary { fraud_type: "Premium Fraud", count: 28, risk: RiskLevel::Medium, change: "-5%" },
        FraudTypeSummary { fraud_type: "Claim Inflation", count: 18, risk: RiskLevel::Low, change: "+8%" },
        FraudTypeSummary { fraud_type: "Document Forgery", count: 11, risk: RiskLevel::High, change: "+15%" },
    ]
}

pub fn recent_cases() -> Vec<CaseRow> {
    vec![
        CaseRow { id: "001", fraud_type: "Identity Theft", amount: "$12,450", date: "2024-03-15", status: "High Risk" },
        CaseRow { id: "002", fraud_type: "Premium Fraud", amount: "$8,900", date: "2024-03-14", status: "Medium Risk" },
        CaseRow { id: "003", fraud_type: "Claim Inflation", amount: "$15,600", date: "2024-03-13", status: "Low Risk" },
    ]
}
