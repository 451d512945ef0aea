/// ATS backend client — the single point of entry for all upstream hiring
/// backend calls.
///
/// ARCHITECTURAL RULE: no other module may talk to the backend directly.
/// Everything the pipeline knows about candidates arrives through here.
///
/// The raw stored token goes into the `Authorization` header verbatim; the
/// backend does not expect a bearer prefix. Requests are never retried —
/// failure handling is the caller's contract (drop, degrade, or surface).
use async_trait::async_trait;
use reqwest::{header, Client};
use serde::de::DeserializeOwned;
use thiserror::Error;
use uuid::Uuid;

pub mod wire;

use self::wire::{
    ApplicationDetail, ApplicationRecord, CompanyRecord, FileDownload, JobRecord,
};

const CLIENT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Error)]
pub enum BackendError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("backend returned {status}: {message}")]
    Api { status: u16, message: String },
}

/// The upstream hiring backend. Behind a trait so the assembler and its
/// tests can run against an in-memory implementation.
#[async_trait]
pub trait AtsBackend: Send + Sync {
    async fn fetch_company(&self, token: &str) -> Result<CompanyRecord, BackendError>;

    async fn fetch_jobs(
        &self,
        token: &str,
        company_id: Uuid,
    ) -> Result<Vec<JobRecord>, BackendError>;

    async fn fetch_applications(
        &self,
        token: &str,
        company_id: Uuid,
        job_id: Uuid,
    ) -> Result<Vec<ApplicationRecord>, BackendError>;

    async fn fetch_application_detail(
        &self,
        token: &str,
        company_id: Uuid,
        job_id: Uuid,
        application_id: Uuid,
    ) -> Result<ApplicationDetail, BackendError>;

    async fn fetch_file_url(
        &self,
        token: &str,
        company_id: Uuid,
        job_id: Uuid,
        application_id: Uuid,
        file_id: &str,
    ) -> Result<FileDownload, BackendError>;
}

/// Reqwest-backed implementation against the real backend.
#[derive(Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(CLIENT_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        token: &str,
        path: &str,
    ) -> Result<T, BackendError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .header(header::AUTHORIZATION, token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(BackendError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}

#[async_trait]
impl AtsBackend for HttpBackend {
    async fn fetch_company(&self, token: &str) -> Result<CompanyRecord, BackendError> {
        self.get_json(token, "/company").await
    }

    async fn fetch_jobs(
        &self,
        token: &str,
        company_id: Uuid,
    ) -> Result<Vec<JobRecord>, BackendError> {
        self.get_json(token, &format!("/company/{company_id}/job"))
            .await
    }

    async fn fetch_applications(
        &self,
        token: &str,
        company_id: Uuid,
        job_id: Uuid,
    ) -> Result<Vec<ApplicationRecord>, BackendError> {
        self.get_json(
            token,
            &format!("/company/{company_id}/job/{job_id}/application"),
        )
        .await
    }

    async fn fetch_application_detail(
        &self,
        token: &str,
        company_id: Uuid,
        job_id: Uuid,
        application_id: Uuid,
    ) -> Result<ApplicationDetail, BackendError> {
        self.get_json(
            token,
            &format!("/company/{company_id}/job/{job_id}/application/{application_id}"),
        )
        .await
    }

    async fn fetch_file_url(
        &self,
        token: &str,
        company_id: Uuid,
        job_id: Uuid,
        application_id: Uuid,
        file_id: &str,
    ) -> Result<FileDownload, BackendError> {
        self.get_json(
            token,
            &format!(
                "/company/{company_id}/job/{job_id}/application/{application_id}/files/{file_id}"
            ),
        )
        .await
    }
}
