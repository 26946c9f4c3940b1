//! Adzuna job-search client. Results are passed through to the caller
//! unchanged — this service adds no interpretation of the upstream payload.

pub mod handlers;

use serde_json::Value;
use thiserror::Error;

const ADZUNA_API_URL: &str = "https://api.adzuna.com";

#[derive(Debug, Error)]
pub enum JobSearchError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Upstream error (status {status}): {message}")]
    Upstream { status: u16, message: String },
}

/// Thin client for the Adzuna search endpoint. Credentials are query
/// parameters, per the Adzuna API contract.
#[derive(Clone)]
pub struct JobSearchClient {
    client: reqwest::Client,
    base_url: String,
    app_id: String,
    app_key: String,
}

impl JobSearchClient {
    pub fn new(app_id: String, app_key: String) -> Self {
        Self::with_base_url(ADZUNA_API_URL.to_string(), app_id, app_key)
    }

    /// Base URL override for tests.
    pub fn with_base_url(base_url: String, app_id: String, app_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            app_id,
            app_key,
        }
    }

    /// Searches US job postings for `job_title`, optionally narrowed to
    /// `location`. Returns Adzuna's JSON body as-is.
    pub async fn search(&self, job_title: &str, location: &str) -> Result<Value, JobSearchError> {
        let url = format!("{}/v1/api/jobs/us/search/1", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("app_id", self.app_id.as_str()),
                ("app_key", self.app_key.as_str()),
                ("what", job_title),
                ("where", location),
                ("content-type", "application/json"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(JobSearchError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}
