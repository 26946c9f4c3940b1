//! Axum route handler for job search.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct JobDetailsQuery {
    #[serde(rename = "jobTitle")]
    pub job_title: Option<String>,
    pub location: Option<String>,
}

/// GET /api/job-details?jobTitle=<..>&location=<..>
///
/// Passthrough of the Adzuna search response. `jobTitle` is validated before
/// any upstream call is made.
pub async fn handle_job_details(
    State(state): State<AppState>,
    Query(query): Query<JobDetailsQuery>,
) -> Result<Json<Value>, AppError> {
    let job_title = query
        .job_title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::Validation("Job title is required".to_string()))?;

    let location = query.location.as_deref().unwrap_or("").trim();

    let data = state
        .jobs
        .search(job_title, location)
        .await
        .map_err(|e| {
            tracing::error!("Error fetching job details: {e}");
            AppError::UpstreamApi("Failed to fetch job details".to_string())
        })?;

    Ok(Json(data))
}
