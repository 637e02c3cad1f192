//! Core data model: fraud categories, per-category results, the aggregated
//! result one analysis run produces, and the upload selection that triggers it.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FraudCategory {
    PremiumFraud,
    DocumentForgery,
    IdentityFraud,
    ClaimsFraud,
}

impl FraudCategory {
    pub const ALL: [FraudCategory; 4] = [
        FraudCategory::PremiumFraud,
        FraudCategory::DocumentForgery,
        FraudCategory::IdentityFraud,
        FraudCategory::ClaimsFraud,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            FraudCategory::PremiumFraud => "premium_fraud",
            FraudCategory::DocumentForgery => "document_forgery",
            FraudCategory::IdentityFraud => "identity_fraud",
            FraudCategory::ClaimsFraud => "claims_fraud",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            FraudCategory::PremiumFraud => "Premium Fraud",
            FraudCategory::DocumentForgery => "Document Forgery",
            FraudCategory::IdentityFraud => "Identity Fraud",
            FraudCategory::ClaimsFraud => "Claims Fraud",
        }
    }
}

/// One named sub-metric of a category's radar breakdown. Value in [0,100).
#[derive(Debug, Clone, Serialize)]
pub struct IndicatorSample {
    pub name: &'static str,
    pub value: f64,
}

/// Score plus radar breakdown plus the category's counter pair.
///
/// Invariant: `indicators` has exactly the category's canonical labels, in
/// canonical order.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryResult {
    pub score: f64,
    pub indicators: Vec<IndicatorSample>,
    pub details: BTreeMap<String, u32>,
}

/// Everything one completed run produced. Immutable once built; the next run
/// replaces it wholesale.
#[derive(Debug, Clone, Serialize)]
pub struct AggregatedResult {
    pub premium_fraud: CategoryResult,
    pub document_forgery: CategoryResult,
    pub identity_fraud: CategoryResult,
    pub claims_fraud: CategoryResult,
    pub overall_risk: f64,
    pub analyzed_at: String,
}

impl AggregatedResult {
    pub fn category(&self, category: FraudCategory) -> &CategoryResult {
        match category {
            FraudCategory::PremiumFraud => &self.premium_fraud,
            FraudCategory::DocumentForgery => &self.document_forgery,
            FraudCategory::IdentityFraud => &self.identity_fraud,
            FraudCategory::ClaimsFraud => &self.claims_fraud,
        }
    }
}

/// The user's picked file. Only the reference and display name are kept;
/// file bytes are never read by this core.
#[derive(Debug, Clone, Serialize)]
pub struct UploadSelection {
    pub path: PathBuf,
    pub file_name: String,
}

impl UploadSelection {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Self { path, file_name }
    }
}
