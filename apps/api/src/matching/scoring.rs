#![allow(dead_code)]

use crate::models::candidate::ProjectShowcase;

/// Weights folding skill coverage and code quality into one fit number.
/// `required`/`preferred` split the skill score; `code_quality`/`skills`
/// split the overall score.
#[derive(Debug, Clone, Copy)]
pub struct FitWeights {
    pub required: f64,
    pub preferred: f64,
    pub code_quality: f64,
    pub skills: f64,
}

pub const DEFAULT_WEIGHTS: FitWeights = FitWeights {
    required: 0.7,
    preferred: 0.3,
    code_quality: 0.6,
    skills: 0.4,
};

impl FitWeights {
    pub fn skill_sum(&self) -> f64 {
        self.required + self.preferred
    }

    pub fn overall_sum(&self) -> f64 {
        self.code_quality + self.skills
    }
}

/// A project counts toward the code-quality average only when it carries at
/// least one highlight and at least one technology tag.
pub fn project_qualifies(project: &ProjectShowcase) -> bool {
    !project.highlights.is_empty() && !project.tags.is_empty()
}

/// Arithmetic mean of qualifying project scores; 0 when none qualify.
pub fn average_code_quality(projects: &[ProjectShowcase]) -> f64 {
    let mut sum = 0.0;
    let mut count = 0usize;
    for project in projects.iter().filter(|p| project_qualifies(p)) {
        sum += project.quality_score;
        count += 1;
    }
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Weighted skill score on a 0-100 scale. A job with no skills in a category
/// contributes a 0 ratio for that category.
pub fn skill_score(
    matched_required: usize,
    total_required: usize,
    matched_preferred: usize,
    total_preferred: usize,
) -> f64 {
    let required_ratio = ratio(matched_required, total_required);
    let preferred_ratio = ratio(matched_preferred, total_preferred);
    DEFAULT_WEIGHTS.required * required_ratio * 100.0
        + DEFAULT_WEIGHTS.preferred * preferred_ratio * 100.0
}

/// Normalized 0-10 composite of code quality and skill score.
pub fn overall_score(code_quality: f64, skill_score: f64) -> f64 {
    (DEFAULT_WEIGHTS.code_quality * code_quality + DEFAULT_WEIGHTS.skills * skill_score) / 10.0
}

fn ratio(matched: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        matched as f64 / total as f64
    }
}
