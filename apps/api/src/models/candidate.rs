use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of an application, advanced by the recruiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CandidateStatus {
    New,
    Shortlisted,
    Interviewing,
    Offered,
    Rejected,
}

/// Take-home assignment state for one application. `artifact_url` is empty
/// when no file was uploaded or its download metadata could not be fetched.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    pub submitted: bool,
    pub submitted_at: Option<DateTime<Utc>>,
    pub deadline: Option<DateTime<Utc>>,
    pub live_url: Option<String>,
    pub docs_url: Option<String>,
    pub repo_url: Option<String>,
    pub artifact_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillProfile {
    pub required_matched: Vec<String>,
    pub required_missing: Vec<String>,
    pub required_match_pct: f64,
    pub preferred_matched: Vec<String>,
    pub preferred_match_pct: f64,
    pub languages: Vec<String>,
    pub frameworks: Vec<String>,
    pub databases: Vec<String>,
    pub tools: Vec<String>,
}

/// A candidate project. Only projects with at least one highlight and one
/// tag count toward the code-quality average.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectShowcase {
    pub name: String,
    pub description: String,
    pub repo_url: Option<String>,
    pub live_url: Option<String>,
    pub tags: Vec<String>,
    pub highlights: Vec<String>,
    pub quality_score: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateStats {
    pub commit_count: u32,
    pub contribution_count: u32,
    pub code_quality: f64,
    pub overall_score: f64,
}

/// A fully assembled candidate record. Built from scratch on every job
/// selection; every derived field is a pure function of the job and the
/// raw backend data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub id: Uuid,
    pub name: String,
    pub avatar_url: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub github_username: Option<String>,
    pub portfolio_url: Option<String>,
    pub job_title: String,
    pub status: CandidateStatus,
    pub applied_at: DateTime<Utc>,
    pub assignment: Assignment,
    pub skills: SkillProfile,
    pub stats: CandidateStats,
    pub projects: Vec<ProjectShowcase>,
}
