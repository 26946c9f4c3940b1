//! Axum route handlers for résumé parsing and answer evaluation.

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use uuid::Uuid;

use crate::errors::{AppError, ResumeError};
use crate::interview::session::InterviewSession;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct EvaluateAnswerRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
    /// Session from a previous parse-resume call. Optional: without it the
    /// evaluation runs context-free.
    pub session_id: Option<Uuid>,
}

#[derive(Debug, Serialize)]
pub struct EvaluateAnswerResponse {
    pub feedback: String,
}

/// POST /api/parse-resume
///
/// Multipart upload, field `resume`, `.pdf` only (case-insensitive). Creates
/// a fresh session, parses the résumé, generates questions, and returns
/// `{session_id, resume_data, questions}`. A parse failure still returns the
/// generic fallback questions so the caller can proceed. The upload is staged
/// in a named temp file that is removed on every exit path (drop-based).
pub async fn handle_parse_resume(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Response, AppError> {
    let mut upload: Option<(String, Vec<u8>)> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() == Some("resume") {
            let filename = field.file_name().unwrap_or_default().to_string();
            let data = field
                .bytes()
                .await
                .map_err(|_| AppError::Validation("Invalid file".to_string()))?;
            upload = Some((filename, data.to_vec()));
            break;
        }
    }

    let Some((filename, data)) = upload else {
        return Err(AppError::Validation("No file uploaded".to_string()));
    };
    if filename.is_empty() {
        return Err(AppError::Validation("No selected file".to_string()));
    }
    if !filename.to_ascii_lowercase().ends_with(".pdf") {
        return Err(AppError::Validation("Invalid file type".to_string()));
    }

    // NamedTempFile deletes on drop, which covers success, parse failure, and
    // every `?` return below.
    let temp = tempfile::Builder::new()
        .suffix(".pdf")
        .tempfile()
        .map_err(|e| AppError::Internal(e.into()))?;
    tokio::fs::write(temp.path(), &data)
        .await
        .map_err(|e| AppError::Internal(e.into()))?;

    let (session_id, session) = state.sessions.create().await;
    let mut session = session.lock().await;

    match session.parse_resume(temp.path(), state.llm.as_ref()).await {
        Ok(resume_data) => {
            let questions = session.generate_questions(state.llm.as_ref()).await;
            Ok((
                StatusCode::OK,
                Json(json!({
                    "session_id": session_id,
                    "resume_data": resume_data,
                    "questions": questions,
                })),
            )
                .into_response())
        }
        Err(err) => {
            tracing::warn!("Resume parsing failed: {err}");
            // Still hand back usable questions so the user is not blocked.
            let questions = session.generate_questions(state.llm.as_ref()).await;
            let mut body = json!({
                "session_id": session_id,
                "error": err.to_string(),
                "questions": questions,
            });
            if let ResumeError::Parse { raw, .. } = &err {
                body["raw_response"] = json!(raw);
            }
            Ok((StatusCode::BAD_REQUEST, Json(body)).into_response())
        }
    }
}

/// POST /api/evaluate-answer
///
/// Evaluates one free-form answer to one question. The question is not
/// required to come from the generated list. 400 if either field is missing
/// or blank.
pub async fn handle_evaluate_answer(
    State(state): State<AppState>,
    Json(request): Json<EvaluateAnswerRequest>,
) -> Result<Json<EvaluateAnswerResponse>, AppError> {
    let question = request
        .question
        .as_deref()
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .ok_or_else(|| AppError::Validation("Missing question or answer".to_string()))?;
    let answer = request
        .answer
        .as_deref()
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .ok_or_else(|| AppError::Validation("Missing question or answer".to_string()))?;

    let session = match request.session_id {
        Some(id) => state.sessions.get(id).await,
        None => None,
    };

    let feedback = match session {
        Some(session) => {
            session
                .lock()
                .await
                .evaluate_answer(question, answer, state.llm.as_ref())
                .await
        }
        // Unknown or absent session: evaluate without candidate context.
        None => {
            InterviewSession::default()
                .evaluate_answer(question, answer, state.llm.as_ref())
                .await
        }
    }
    .map_err(|e| AppError::Llm(e.to_string()))?;

    Ok(Json(EvaluateAnswerResponse { feedback }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::ScriptedLlm;
    use crate::pdf::testing::minimal_pdf;

    const EXTRACTION_REPLY: &str =
        r#"{"skills": ["Rust"], "experience": [{"company": "Acme"}], "education": []}"#;

    // The upload is staged in a NamedTempFile whose Drop removes it; these
    // tests pin that the file is gone after a parse attempt, on both the
    // failure and the success path.

    #[tokio::test]
    async fn test_temp_file_removed_after_parse_failure() {
        let llm = ScriptedLlm::failing();
        let mut session = InterviewSession::default();

        let temp = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        tokio::fs::write(temp.path(), b"garbage, not a pdf")
            .await
            .unwrap();
        let path = temp.path().to_path_buf();

        assert!(session.parse_resume(&path, &llm).await.is_err());
        assert!(path.exists());
        drop(temp);
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_temp_file_removed_after_parse_success() {
        let llm = ScriptedLlm::replying(&[EXTRACTION_REPLY]);
        let mut session = InterviewSession::default();

        let temp = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        tokio::fs::write(temp.path(), minimal_pdf("Rust engineer at Acme since 2019"))
            .await
            .unwrap();
        let path = temp.path().to_path_buf();

        assert!(session.parse_resume(&path, &llm).await.is_ok());
        assert!(session.resume_data.is_some());
        drop(temp);
        assert!(!path.exists());
    }
}
