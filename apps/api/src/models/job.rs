use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryRange {
    pub min: u32,
    pub max: u32,
    pub currency: String,
}

/// A job posting as seen by the browsing pipeline. Immutable per request;
/// the skill lists drive all downstream match derivation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Job {
    pub id: Uuid,
    pub title: String,
    pub employment_type: String,
    pub location_mode: String,
    pub salary: SalaryRange,
    pub required_skills: Vec<String>,
    pub preferred_skills: Vec<String>,
}
