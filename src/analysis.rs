//! The analysis function set and the analyzer seam.
//!
//! Each category function is pure random generation: uploaded file content is
//! never consumed. The `FraudAnalyzer` trait is the replacement point for a
//! genuine scoring backend; the session and presentation layers never know
//! which implementation is behind it.

use std::collections::BTreeMap;

use anyhow::Result;
use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::indicators::{indicator_samples, labels_for};
use crate::logging::{self, obj, v_num, v_str, Domain};
use crate::model::{AggregatedResult, CategoryResult, FraudCategory, UploadSelection};

// =============================================================================
// Per-category analysis functions
// =============================================================================

fn category_result<R: Rng>(
    rng: &mut R,
    category: FraudCategory,
    counters: [(&str, u32); 2],
) -> CategoryResult {
    let score = rng.gen_range(0.0..100.0);
    let indicators = indicator_samples(rng, labels_for(category));
    let mut details = BTreeMap::new();
    for (name, bound) in counters {
        details.insert(name.to_string(), rng.gen_range(0..bound));
    }
    CategoryResult { score, indicators, details }
}

pub fn analyze_premium_fraud<R: Rng>(rng: &mut R) -> CategoryResult {
    category_result(
        rng,
        FraudCategory::PremiumFraud,
        [("high_risk_patterns", 10), ("suspicious_transactions", 20)],
    )
}

pub fn analyze_document_forgery<R: Rng>(rng: &mut R) -> CategoryResult {
    category_result(
        rng,
        FraudCategory::DocumentForgery,
        [("inconsistencies", 8), ("suspicious_patterns", 15)],
    )
}

pub fn analyze_identity_fraud<R: Rng>(rng: &mut R) -> CategoryResult {
    category_result(
        rng,
        FraudCategory::IdentityFraud,
        [("suspicious_matches", 12), ("verification_fails", 18)],
    )
}

pub fn analyze_claims_fraud<R: Rng>(rng: &mut R) -> CategoryResult {
    category_result(
        rng,
        FraudCategory::ClaimsFraud,
        [("unusual_patterns", 15), ("high_risk_indicators", 25)],
    )
}

// =============================================================================
// Analyzer seam
// =============================================================================

#[async_trait]
pub trait FraudAnalyzer: Send + Sync {
    async fn analyze(&self, upload: &UploadSelection) -> Result<AggregatedResult>;
}

/// Stub analyzer: uniform draws with no relation to the uploaded file.
/// With a fixed seed every run is reproducible, which keeps replay and
/// regression tests deterministic.
pub struct SimulatedAnalyzer {
    pub seed: Option<u64>,
}

impl SimulatedAnalyzer {
    pub fn new(seed: Option<u64>) -> Self {
        Self { seed }
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

#[async_trait]
impl FraudAnalyzer for SimulatedAnalyzer {
    async fn analyze(&self, upload: &UploadSelection) -> Result<AggregatedResult> {
        let mut rng = self.rng();
        let result = AggregatedResult {
            premium_fraud: analyze_premium_fraud(&mut rng),
            document_forgery: analyze_document_forgery(&mut rng),
            identity_fraud: analyze_identity_fraud(&mut rng),
            claims_fraud: analyze_claims_fraud(&mut rng),
            overall_risk: rng.gen_range(0.0..100.0),
            analyzed_at: logging::ts_now(),
        };
        logging::json_log(
            Domain::Analysis,
            "aggregated",
            obj(&[
                ("file", v_str(&upload.file_name)),
                ("overall_risk", v_num(result.overall_risk)),
                ("premium", v_num(result.premium_fraud.score)),
                ("document", v_num(result.document_forgery.score)),
                ("identity", v_num(result.identity_fraud.score)),
                ("claims", v_num(result.claims_fraud.score)),
            ]),
        );
        Ok(result)
    }
}
