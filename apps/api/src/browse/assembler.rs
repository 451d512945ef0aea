//! Candidate assembler: fetches a job's applications, enriches each one
//! concurrently, and folds the results into scored domain candidates.
//!
//! Failure contract: the top-level application-list fetch is the only error
//! this module surfaces. A failed per-candidate enrichment drops that
//! candidate alone (logged at warn); a failed file-metadata fetch degrades
//! to an empty artifact URL. Nothing is retried.

use std::sync::Arc;

use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::ats::wire::{ApplicationDetail, ApplicationRecord, SkillCategory};
use crate::ats::{AtsBackend, BackendError};
use crate::matching::scoring::{average_code_quality, overall_score, skill_score};
use crate::matching::skills::{match_skills, TaggedSkill};
use crate::models::candidate::{
    Assignment, Candidate, CandidateStats, ProjectShowcase, SkillProfile,
};
use crate::models::job::Job;

/// The assembled batch plus how many applications were dropped on the way.
#[derive(Debug)]
pub struct AssemblyOutcome {
    pub candidates: Vec<Candidate>,
    pub dropped: usize,
}

pub struct CandidateAssembler {
    backend: Arc<dyn AtsBackend>,
}

impl CandidateAssembler {
    pub fn new(backend: Arc<dyn AtsBackend>) -> Self {
        Self { backend }
    }

    /// Fetches and folds every application for `job`. Completion order of
    /// the per-candidate tasks is not preserved; callers sort the result.
    /// A cancelled batch aborts outstanding fetches and returns what has
    /// been assembled so far.
    pub async fn assemble(
        &self,
        token: &str,
        company_id: Uuid,
        job: &Job,
        cancel: &CancellationToken,
    ) -> Result<AssemblyOutcome, BackendError> {
        let applications = self
            .backend
            .fetch_applications(token, company_id, job.id)
            .await?;
        let total = applications.len();

        if cancel.is_cancelled() {
            debug!("assembly cancelled before enrichment of {total} applications");
            return Ok(AssemblyOutcome {
                candidates: vec![],
                dropped: total,
            });
        }

        let mut tasks = JoinSet::new();
        for application in applications {
            let backend = Arc::clone(&self.backend);
            let token = token.to_string();
            let job = job.clone();
            tasks.spawn(async move { enrich(backend, token, company_id, job, application).await });
        }

        let mut candidates = Vec::with_capacity(total);
        loop {
            tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    tasks.abort_all();
                    debug!(
                        "assembly cancelled with {} of {total} candidates built",
                        candidates.len()
                    );
                    break;
                }
                next = tasks.join_next() => match next {
                    None => break,
                    Some(Ok(Ok(candidate))) => candidates.push(candidate),
                    Some(Ok(Err(e))) => warn!("dropping candidate after enrichment failure: {e}"),
                    Some(Err(e)) => warn!("dropping candidate after task failure: {e}"),
                }
            }
        }

        Ok(AssemblyOutcome {
            dropped: total - candidates.len(),
            candidates,
        })
    }
}

/// One candidate's enrichment chain: detail fetch, optional file metadata,
/// then the pure fold.
async fn enrich(
    backend: Arc<dyn AtsBackend>,
    token: String,
    company_id: Uuid,
    job: Job,
    application: ApplicationRecord,
) -> Result<Candidate, BackendError> {
    let file_id = application
        .assignment
        .as_ref()
        .and_then(|a| a.file_id.clone());

    let detail_fetch = backend.fetch_application_detail(&token, company_id, job.id, application.id);
    let artifact_fetch = async {
        let Some(file_id) = file_id.as_deref() else {
            return String::new();
        };
        match backend
            .fetch_file_url(&token, company_id, job.id, application.id, file_id)
            .await
        {
            Ok(file) => file.url,
            Err(e) => {
                warn!(
                    "file metadata unavailable for application {}: {e}",
                    application.id
                );
                String::new()
            }
        }
    };

    let (detail, artifact_url) = tokio::join!(detail_fetch, artifact_fetch);
    Ok(build_candidate(&job, application, detail?, artifact_url))
}

/// Folds raw backend records into a scored domain candidate. Pure.
pub fn build_candidate(
    job: &Job,
    application: ApplicationRecord,
    detail: ApplicationDetail,
    artifact_url: String,
) -> Candidate {
    let tagged: Vec<TaggedSkill> = detail
        .skills
        .iter()
        .map(|s| TaggedSkill {
            name: s.name.clone(),
            matched: s.matched,
        })
        .collect();
    let required = match_skills(&tagged, &job.required_skills);
    let preferred = match_skills(&tagged, &job.preferred_skills);

    let names_in = |category: SkillCategory| -> Vec<String> {
        detail
            .skills
            .iter()
            .filter(|s| s.category == category)
            .map(|s| s.name.clone())
            .collect()
    };
    let skills = SkillProfile {
        required_matched: required.matched.clone(),
        required_missing: required.missing.clone(),
        required_match_pct: required.percentage,
        preferred_matched: preferred.matched.clone(),
        preferred_match_pct: preferred.percentage,
        languages: names_in(SkillCategory::Language),
        frameworks: names_in(SkillCategory::Framework),
        databases: names_in(SkillCategory::Database),
        tools: names_in(SkillCategory::Tool),
    };

    let projects: Vec<ProjectShowcase> = detail
        .projects
        .into_iter()
        .map(|p| ProjectShowcase {
            name: p.name,
            description: p.description,
            repo_url: p.repo_url,
            live_url: p.live_url,
            tags: p.tags,
            highlights: p.highlights,
            quality_score: p.quality_score,
        })
        .collect();

    let code_quality = average_code_quality(&projects);
    let skill = skill_score(
        required.matched.len(),
        job.required_skills.len(),
        preferred.matched.len(),
        job.preferred_skills.len(),
    );
    let overall = overall_score(code_quality, skill);

    let assignment = match application.assignment {
        Some(a) => Assignment {
            submitted: a.submitted,
            submitted_at: a.submitted_at,
            deadline: a.deadline,
            live_url: a.live_url,
            docs_url: a.docs_url,
            repo_url: a.repo_url,
            artifact_url,
        },
        None => Assignment {
            submitted: false,
            submitted_at: None,
            deadline: None,
            live_url: None,
            docs_url: None,
            repo_url: None,
            artifact_url,
        },
    };

    Candidate {
        id: application.id,
        name: application.applicant.name,
        avatar_url: application.applicant.avatar_url,
        email: application.applicant.email,
        phone: application.applicant.phone,
        github_username: application.applicant.github_username,
        portfolio_url: application.applicant.portfolio_url,
        job_title: application.job.title,
        status: application.status,
        applied_at: application.applied_at,
        assignment,
        skills,
        stats: CandidateStats {
            commit_count: detail.commit_count,
            contribution_count: detail.contribution_count,
            code_quality,
            overall_score: overall,
        },
        projects,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ats::wire::{
        ApplicantRecord, AppliedJobRecord, AssignmentRecord, CompanyRecord, FileDownload,
        JobRecord, ProjectRecord, SkillTagRecord,
    };
    use crate::models::candidate::CandidateStatus;
    use crate::models::job::SalaryRange;
    use async_trait::async_trait;
    use chrono::Utc;

    fn api_error() -> BackendError {
        BackendError::Api {
            status: 500,
            message: "boom".to_string(),
        }
    }

    fn test_job() -> Job {
        Job {
            id: Uuid::new_v4(),
            title: "Backend Engineer".to_string(),
            employment_type: "full_time".to_string(),
            location_mode: "remote".to_string(),
            salary: SalaryRange {
                min: 80_000,
                max: 120_000,
                currency: "USD".to_string(),
            },
            required_skills: vec!["Rust".to_string(), "Go".to_string()],
            preferred_skills: vec!["Docker".to_string()],
        }
    }

    fn application(file_id: Option<&str>) -> ApplicationRecord {
        ApplicationRecord {
            id: Uuid::new_v4(),
            status: CandidateStatus::New,
            applied_at: Utc::now(),
            applicant: ApplicantRecord {
                name: "Ada Example".to_string(),
                avatar_url: None,
                email: Some("ada@example.com".to_string()),
                phone: None,
                github_username: Some("ada-ex".to_string()),
                portfolio_url: None,
            },
            job: AppliedJobRecord {
                title: "Backend Engineer".to_string(),
            },
            assignment: file_id.map(|id| AssignmentRecord {
                submitted: true,
                submitted_at: Some(Utc::now()),
                deadline: None,
                live_url: None,
                docs_url: None,
                repo_url: None,
                file_id: Some(id.to_string()),
            }),
        }
    }

    fn detail() -> ApplicationDetail {
        ApplicationDetail {
            skills: vec![
                SkillTagRecord {
                    name: "Rust".to_string(),
                    category: SkillCategory::Language,
                    matched: true,
                },
                SkillTagRecord {
                    name: "Docker".to_string(),
                    category: SkillCategory::Tool,
                    matched: true,
                },
            ],
            projects: vec![ProjectRecord {
                name: "raft-kv".to_string(),
                description: "Distributed KV store".to_string(),
                repo_url: None,
                live_url: None,
                tags: vec!["rust".to_string()],
                highlights: vec!["handles partitions".to_string()],
                quality_score: 90.0,
            }],
            commit_count: 400,
            contribution_count: 120,
        }
    }

    struct StubBackend {
        applications: Vec<ApplicationRecord>,
        fail_list: bool,
        fail_detail_for: Vec<Uuid>,
        fail_files: bool,
    }

    impl StubBackend {
        fn with_applications(applications: Vec<ApplicationRecord>) -> Self {
            Self {
                applications,
                fail_list: false,
                fail_detail_for: vec![],
                fail_files: false,
            }
        }
    }

    #[async_trait]
    impl AtsBackend for StubBackend {
        async fn fetch_company(&self, _token: &str) -> Result<CompanyRecord, BackendError> {
            Err(api_error())
        }

        async fn fetch_jobs(
            &self,
            _token: &str,
            _company_id: Uuid,
        ) -> Result<Vec<JobRecord>, BackendError> {
            Err(api_error())
        }

        async fn fetch_applications(
            &self,
            _token: &str,
            _company_id: Uuid,
            _job_id: Uuid,
        ) -> Result<Vec<ApplicationRecord>, BackendError> {
            if self.fail_list {
                return Err(api_error());
            }
            Ok(self.applications.clone())
        }

        async fn fetch_application_detail(
            &self,
            _token: &str,
            _company_id: Uuid,
            _job_id: Uuid,
            application_id: Uuid,
        ) -> Result<ApplicationDetail, BackendError> {
            if self.fail_detail_for.contains(&application_id) {
                return Err(api_error());
            }
            Ok(detail())
        }

        async fn fetch_file_url(
            &self,
            _token: &str,
            _company_id: Uuid,
            _job_id: Uuid,
            _application_id: Uuid,
            file_id: &str,
        ) -> Result<FileDownload, BackendError> {
            if self.fail_files {
                return Err(api_error());
            }
            Ok(FileDownload {
                url: format!("https://files.example.com/{file_id}"),
            })
        }
    }

    fn assembler(stub: StubBackend) -> CandidateAssembler {
        CandidateAssembler::new(Arc::new(stub))
    }

    #[tokio::test]
    async fn test_assembles_all_applications() {
        let apps = vec![application(None), application(Some("f-1"))];
        let outcome = assembler(StubBackend::with_applications(apps))
            .assemble("token", Uuid::new_v4(), &test_job(), &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(outcome.candidates.len(), 2);
        assert_eq!(outcome.dropped, 0);
    }

    #[tokio::test]
    async fn test_one_enrichment_failure_drops_that_candidate_only() {
        let apps = vec![application(None), application(None), application(None)];
        let failing = apps[1].id;
        let mut stub = StubBackend::with_applications(apps);
        stub.fail_detail_for.push(failing);

        let outcome = assembler(stub)
            .assemble("token", Uuid::new_v4(), &test_job(), &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(outcome.candidates.len(), 2);
        assert_eq!(outcome.dropped, 1);
        assert!(outcome.candidates.iter().all(|c| c.id != failing));
    }

    #[tokio::test]
    async fn test_top_level_list_failure_is_surfaced() {
        let mut stub = StubBackend::with_applications(vec![application(None)]);
        stub.fail_list = true;

        let result = assembler(stub)
            .assemble("token", Uuid::new_v4(), &test_job(), &CancellationToken::new())
            .await;

        assert!(matches!(result, Err(BackendError::Api { status: 500, .. })));
    }

    #[tokio::test]
    async fn test_file_metadata_failure_degrades_to_empty_url() {
        let mut stub = StubBackend::with_applications(vec![application(Some("f-9"))]);
        stub.fail_files = true;

        let outcome = assembler(stub)
            .assemble("token", Uuid::new_v4(), &test_job(), &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(outcome.candidates.len(), 1);
        assert_eq!(outcome.candidates[0].assignment.artifact_url, "");
    }

    #[tokio::test]
    async fn test_file_url_is_resolved_when_present() {
        let outcome = assembler(StubBackend::with_applications(vec![application(Some("f-9"))]))
            .assemble("token", Uuid::new_v4(), &test_job(), &CancellationToken::new())
            .await
            .unwrap();

        assert_eq!(
            outcome.candidates[0].assignment.artifact_url,
            "https://files.example.com/f-9"
        );
    }

    #[tokio::test]
    async fn test_cancelled_batch_returns_without_enrichment() {
        let cancel = CancellationToken::new();
        cancel.cancel();

        let outcome = assembler(StubBackend::with_applications(vec![
            application(None),
            application(None),
        ]))
        .assemble("token", Uuid::new_v4(), &test_job(), &cancel)
        .await
        .unwrap();

        assert!(outcome.candidates.is_empty());
        assert_eq!(outcome.dropped, 2);
    }

    #[test]
    fn test_build_candidate_derives_scores() {
        let job = test_job();
        let candidate = build_candidate(&job, application(None), detail(), String::new());

        // Required: Rust matched out of [Rust, Go]; preferred: Docker matched.
        assert_eq!(candidate.skills.required_matched, vec!["Rust"]);
        assert_eq!(candidate.skills.required_missing, vec!["Go"]);
        assert!((candidate.skills.required_match_pct - 50.0).abs() < 1e-9);
        assert!((candidate.skills.preferred_match_pct - 100.0).abs() < 1e-9);

        // skill_score = 0.7*50 + 0.3*100 = 65; overall = (0.6*90 + 0.4*65)/10 = 8.0
        assert!((candidate.stats.code_quality - 90.0).abs() < 1e-9);
        assert!((candidate.stats.overall_score - 8.0).abs() < 1e-9);
        assert_eq!(candidate.stats.commit_count, 400);
        assert_eq!(candidate.skills.languages, vec!["Rust"]);
        assert_eq!(candidate.skills.tools, vec!["Docker"]);
    }

    #[test]
    fn test_build_candidate_without_assignment() {
        let job = test_job();
        let candidate = build_candidate(&job, application(None), detail(), String::new());

        assert!(!candidate.assignment.submitted);
        assert!(candidate.assignment.submitted_at.is_none());
        assert_eq!(candidate.assignment.artifact_url, "");
    }
}
