//! Fit classification — two deliberately divergent policies behind one trait.
//!
//! `AggregateScorePolicy` buckets the normalized 0-10 overall score;
//! `PercentageMatchPolicy` operates on raw required/preferred match
//! percentages with its own thresholds. The two shipped side by side in the
//! product and are NOT interchangeable: callers pick one per request and the
//! thresholds must never be unified.

use serde::{Deserialize, Serialize};

use crate::models::candidate::Candidate;

// ────────────────────────────────────────────────────────────────────────────
// Inputs and output (shared across both policies)
// ────────────────────────────────────────────────────────────────────────────

/// The derived numbers a policy may consult. Copied out of a candidate so
/// policies stay pure functions over plain values.
#[derive(Debug, Clone, Copy)]
pub struct FitSignals {
    pub overall: f64,
    pub required_pct: f64,
    pub preferred_pct: f64,
}

impl FitSignals {
    pub fn of(candidate: &Candidate) -> Self {
        Self {
            overall: candidate.stats.overall_score,
            required_pct: candidate.skills.required_match_pct,
            preferred_pct: candidate.skills.preferred_match_pct,
        }
    }
}

/// One classification bucket: a stable tag for filtering, a display label,
/// a color category for the UI, and a human-readable description.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FitClassification {
    pub tag: &'static str,
    pub label: &'static str,
    pub color: &'static str,
    pub description: String,
}

/// Which policy a request wants. Defaults to the aggregate bucketing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyChoice {
    #[default]
    Aggregate,
    Percentage,
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// A fit classification policy. Total over all inputs, stateless,
/// recomputed per request.
pub trait FitPolicy: Send + Sync {
    fn name(&self) -> &'static str;
    fn classify(&self, signals: FitSignals) -> FitClassification;
}

// ────────────────────────────────────────────────────────────────────────────
// AggregateScorePolicy — buckets the 0-10 overall score
// ────────────────────────────────────────────────────────────────────────────

/// Buckets: overall ≥ 8 → great, ≥ 6.5 → good, below → average.
/// Both boundaries are inclusive.
pub struct AggregateScorePolicy;

impl FitPolicy for AggregateScorePolicy {
    fn name(&self) -> &'static str {
        "aggregate"
    }

    fn classify(&self, signals: FitSignals) -> FitClassification {
        let overall = signals.overall;
        if overall >= 8.0 {
            FitClassification {
                tag: "great",
                label: "Great Fit",
                color: "green",
                description: format!(
                    "Strong code quality and skill alignment ({overall:.1}/10)"
                ),
            }
        } else if overall >= 6.5 {
            FitClassification {
                tag: "good",
                label: "Good Fit",
                color: "blue",
                description: format!("Solid overall fit ({overall:.1}/10)"),
            }
        } else {
            FitClassification {
                tag: "average",
                label: "Average Fit",
                color: "gray",
                description: format!("Limited overall fit ({overall:.1}/10)"),
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// PercentageMatchPolicy — thresholds on raw match percentages
// ────────────────────────────────────────────────────────────────────────────

/// Buckets: required ≥ 85% AND preferred ≥ 50% → great, required ≥ 70% →
/// good, below → not a fit. Ignores the aggregate score entirely.
pub struct PercentageMatchPolicy;

impl FitPolicy for PercentageMatchPolicy {
    fn name(&self) -> &'static str {
        "percentage"
    }

    fn classify(&self, signals: FitSignals) -> FitClassification {
        let required = signals.required_pct;
        if required >= 85.0 && signals.preferred_pct >= 50.0 {
            FitClassification {
                tag: "great",
                label: "Great Fit",
                color: "green",
                description: format!("Covers {required:.1}% of required skills"),
            }
        } else if required >= 70.0 {
            FitClassification {
                tag: "good",
                label: "Good Fit",
                color: "blue",
                description: format!("Covers {required:.1}% of required skills"),
            }
        } else {
            FitClassification {
                tag: "not_a_fit",
                label: "Not a Fit",
                color: "red",
                description: format!("Covers only {required:.1}% of required skills"),
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
