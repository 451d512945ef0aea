use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap},
    Json,
};
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::browse::assembler::CandidateAssembler;
use crate::browse::ordering::{filter_candidates, sort_candidates, FilterSelection, SortSelection};
use crate::browse::RankedCandidate;
use crate::errors::AppError;
use crate::matching::fit::{FitSignals, PolicyChoice};
use crate::models::candidate::CandidateStatus;
use crate::models::job::Job;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct CandidateQuery {
    /// Comma-separated sort tokens in selection order.
    pub sort: Option<String>,
    /// Fit classification tag to filter on.
    pub fit: Option<String>,
    /// Lifecycle status to filter on.
    pub status: Option<CandidateStatus>,
    #[serde(default)]
    pub policy: PolicyChoice,
}

#[derive(Serialize)]
pub struct JobListResponse {
    pub jobs: Vec<Job>,
    pub phone_directory: bool,
}

#[derive(Serialize)]
pub struct CandidateListResponse {
    pub candidates: Vec<RankedCandidate>,
    pub assembled: usize,
    pub dropped: usize,
}

/// GET /api/v1/jobs
pub async fn handle_list_jobs(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<JobListResponse>, AppError> {
    let token = auth_token(&headers)?;
    let company = state.backend.fetch_company(token).await?;
    tracing::debug!("resolved company {} ({})", company.name, company.id);
    let jobs: Vec<Job> = state
        .backend
        .fetch_jobs(token, company.id)
        .await?
        .into_iter()
        .map(|record| record.into_job())
        .collect();
    let phone_directory = state.directory.has_phone_numbers(company.id).await;

    Ok(Json(JobListResponse {
        jobs,
        phone_directory,
    }))
}

/// GET /api/v1/jobs/:job_id/candidates
pub async fn handle_list_candidates(
    State(state): State<AppState>,
    Path(job_id): Path<Uuid>,
    Query(params): Query<CandidateQuery>,
    headers: HeaderMap,
) -> Result<Json<CandidateListResponse>, AppError> {
    let token = auth_token(&headers)?;
    let company = state.backend.fetch_company(token).await?;
    let job = state
        .backend
        .fetch_jobs(token, company.id)
        .await?
        .into_iter()
        .find(|record| record.id == job_id)
        .ok_or_else(|| AppError::NotFound(format!("Job {job_id} not found")))?
        .into_job();

    let assembler = CandidateAssembler::new(Arc::clone(&state.backend));
    let cancel = CancellationToken::new();
    let outcome = assembler.assemble(token, company.id, &job, &cancel).await?;
    let assembled = outcome.candidates.len();

    let policy = state.policies.select(params.policy);
    tracing::debug!(
        "classifying {assembled} candidates with the {} policy",
        policy.name()
    );
    let mut ranked: Vec<RankedCandidate> = outcome
        .candidates
        .into_iter()
        .map(|candidate| {
            let fit = policy.classify(FitSignals::of(&candidate));
            RankedCandidate { candidate, fit }
        })
        .collect();

    let selection = params
        .sort
        .as_deref()
        .map(SortSelection::from_param)
        .unwrap_or_default();
    sort_candidates(&mut ranked, &selection);

    let mut filters = FilterSelection::default();
    if let Some(tag) = &params.fit {
        filters.toggle_fit(tag);
    }
    if let Some(status) = params.status {
        filters.toggle_status(status);
    }
    let candidates = filter_candidates(ranked, &filters);

    Ok(Json(CandidateListResponse {
        candidates,
        assembled,
        dropped: outcome.dropped,
    }))
}

/// The raw stored token, forwarded verbatim — the backend expects no
/// bearer prefix.
fn auth_token(headers: &HeaderMap) -> Result<&str, AppError> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .ok_or(AppError::Unauthorized)
}
