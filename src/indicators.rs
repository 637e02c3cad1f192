//! Indicator generation: canonical label sets per fraud category and the
//! uniform sampler that fills them.
//!
//! Values are placeholders drawn uniformly over [0,100); a real scoring
//! backend replaces the draws, not the label contract.

use rand::Rng;

use crate::model::{FraudCategory, IndicatorSample};

// =============================================================================
// Canonical label sets
// =============================================================================

pub const PREMIUM_LABELS: [&str; 5] = [
    "Payment Irregularities",
    "Policy Changes",
    "Claims History",
    "Risk Rating",
    "Premium Patterns",
];

pub const DOCUMENT_LABELS: [&str; 5] = [
    "Document Consistency",
    "Digital Signatures",
    "Metadata Analysis",
    "Template Matching",
    "Historical Verification",
];

pub const IDENTITY_LABELS: [&str; 5] = [
    "Identity Verification",
    "Contact Information",
    "Social Validation",
    "Device Analysis",
    "Behavioral Patterns",
];

pub const CLAIMS_LABELS: [&str; 5] = [
    "Claim Frequency",
    "Amount Patterns",
    "Documentation Quality",
    "Time Analysis",
    "Related Claims",
];

pub fn labels_for(category: FraudCategory) -> &'static [&'static str] {
    match category {
        FraudCategory::PremiumFraud => &PREMIUM_LABELS,
        FraudCategory::DocumentForgery => &DOCUMENT_LABELS,
        FraudCategory::IdentityFraud => &IDENTITY_LABELS,
        FraudCategory::ClaimsFraud => &CLAIMS_LABELS,
    }
}

// =============================================================================
// Sampler
// =============================================================================

/// One sample per label, same order as the label slice. Each value is an
/// independent uniform draw over [0,100). An empty label slice yields an
/// empty vec.
pub fn indicator_samples<R: Rng>(rng: &mut R, labels: &[&'static str]) -> Vec<IndicatorSample> {
    labels
        .iter()
        .map(|&name| IndicatorSample {
            name,
            value: rng.gen_range(0.0..100.0),
        })
        .collect()
}
