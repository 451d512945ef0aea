//! Wire DTOs for backend payloads. Field names follow the backend's JSON;
//! conversion into domain types happens at the assembler boundary.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::models::candidate::CandidateStatus;
use crate::models::job::{Job, SalaryRange};

#[derive(Debug, Clone, Deserialize)]
pub struct CompanyRecord {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JobRecord {
    pub id: Uuid,
    pub title: String,
    pub employment_type: String,
    pub location_mode: String,
    pub salary_min: u32,
    pub salary_max: u32,
    pub salary_currency: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub preferred_skills: Vec<String>,
}

impl JobRecord {
    pub fn into_job(self) -> Job {
        Job {
            id: self.id,
            title: self.title,
            employment_type: self.employment_type,
            location_mode: self.location_mode,
            salary: SalaryRange {
                min: self.salary_min,
                max: self.salary_max,
                currency: self.salary_currency,
            },
            required_skills: self.required_skills,
            preferred_skills: self.preferred_skills,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApplicantRecord {
    pub name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub github_username: Option<String>,
    #[serde(default)]
    pub portfolio_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppliedJobRecord {
    pub title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssignmentRecord {
    #[serde(default)]
    pub submitted: bool,
    #[serde(default)]
    pub submitted_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub deadline: Option<DateTime<Utc>>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub docs_url: Option<String>,
    #[serde(default)]
    pub repo_url: Option<String>,
    #[serde(default)]
    pub file_id: Option<String>,
}

/// One row of the job's application list, with nested applicant/job data.
#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationRecord {
    pub id: Uuid,
    pub status: CandidateStatus,
    pub applied_at: DateTime<Utc>,
    pub applicant: ApplicantRecord,
    pub job: AppliedJobRecord,
    #[serde(default)]
    pub assignment: Option<AssignmentRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillCategory {
    Language,
    Framework,
    Database,
    Tool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SkillTagRecord {
    pub name: String,
    pub category: SkillCategory,
    #[serde(default)]
    pub matched: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectRecord {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub repo_url: Option<String>,
    #[serde(default)]
    pub live_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default)]
    pub quality_score: f64,
}

/// Enriched per-application detail: GitHub-derived skill tags, qualifying
/// projects, and activity counters.
#[derive(Debug, Clone, Deserialize)]
pub struct ApplicationDetail {
    #[serde(default)]
    pub skills: Vec<SkillTagRecord>,
    #[serde(default)]
    pub projects: Vec<ProjectRecord>,
    #[serde(default)]
    pub commit_count: u32,
    #[serde(default)]
    pub contribution_count: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FileDownload {
    pub url: String,
}
