//! clinicast-scoring
//!
//! Early-warning score definitions. Pure rule tables with no state or I/O.
//! Each standard maps a vitals snapshot to per-factor points, a total,
//! and a risk tier with the response it calls for.

pub mod error;
pub mod scoring;
pub mod standards;

use std::collections::BTreeMap;

use clinicast_core::models::score::{ClinicalScore, RiskTier, VitalsSnapshot};
use scoring::Factor;

/// Trait implemented by each early-warning scoring standard.
pub trait EarlyWarningStandard: Send + Sync {
    /// Unique identifier (e.g., "news2", "mews").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "NEWS2").
    fn name(&self) -> &str;

    /// The factors this standard scores, in display order.
    fn factors(&self) -> &[Factor];

    /// Points per factor id for one snapshot.
    fn component_scores(&self, vitals: &VitalsSnapshot) -> BTreeMap<String, u32>;

    /// Tier for a total and its components.
    fn risk_tier(&self, total: u32, components: &BTreeMap<String, u32>) -> RiskTier;

    /// `(recommended_response, monitoring_frequency)` for a tier.
    fn response(&self, tier: RiskTier) -> (&'static str, &'static str);

    /// Score a snapshot.
    fn score(&self, vitals: &VitalsSnapshot) -> ClinicalScore {
        let component_scores = self.component_scores(vitals);
        let total_score = component_scores.values().sum();
        let risk_tier = self.risk_tier(total_score, &component_scores);
        let (response, frequency) = self.response(risk_tier);

        ClinicalScore {
            standard: self.id().to_string(),
            total_score,
            risk_tier,
            component_scores,
            recommended_response: response.to_string(),
            monitoring_frequency: frequency.to_string(),
        }
    }

    /// Format a score as a short structured summary for handover notes.
    fn to_structured_summary(&self, score: &ClinicalScore) -> String {
        let mut output = format!(
            "## {} {} ({:?})\n\n",
            self.name(),
            score.total_score,
            score.risk_tier
        );
        for factor in self.factors() {
            if let Some(points) = score.component_scores.get(&factor.id) {
                output.push_str(&format!("- {}: {}\n", factor.name, points));
            }
        }
        output.push_str(&format!(
            "\n{} Monitoring: {}.\n",
            score.recommended_response, score.monitoring_frequency
        ));
        output
    }
}

/// Return all registered standards.
pub fn all_standards() -> Vec<Box<dyn EarlyWarningStandard>> {
    vec![
        Box::new(standards::news2::News2),
        Box::new(standards::mews::Mews),
    ]
}

/// Look up a standard by ID.
pub fn get_standard(id: &str) -> Option<Box<dyn EarlyWarningStandard>> {
    all_standards().into_iter().find(|s| s.id() == id)
}
