//! Per-session interview state and the store that isolates sessions.
//!
//! Each logical user gets their own `InterviewSession`, looked up by id, so
//! concurrent callers never interleave each other's résumé data or question
//! lists. Operations on one session serialize on its own mutex; distinct
//! sessions proceed independently.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use serde_json::{json, Value};
use tokio::sync::{Mutex, RwLock};
use uuid::Uuid;

use crate::errors::ResumeError;
use crate::interview::{extraction, prompts, questions};
use crate::llm_client::{LlmError, LlmInvoke};
use crate::pdf;

/// State for one interview-preparation session.
#[derive(Debug, Default)]
pub struct InterviewSession {
    /// Structured résumé data from the last successful parse. Always a JSON
    /// object; downstream reads treat missing fields as empty.
    pub resume_data: Option<Value>,
    /// Ordered questions from the last generation (personalized or generic).
    pub questions: Vec<String>,
    /// Stored for a future one-question-at-a-time flow; nothing reads it yet.
    pub current_question_index: usize,
}

impl InterviewSession {
    /// Clears résumé data, question list, and index.
    pub fn reset(&mut self) {
        self.resume_data = None;
        self.questions.clear();
        self.current_question_index = 0;
    }

    /// Parses the résumé PDF at `path`: extract text, prompt the model,
    /// extract the JSON object from its reply. On success the object becomes
    /// the session's résumé data and is returned; every failure is a typed
    /// `ResumeError` the façade maps to a usable fallback response.
    pub async fn parse_resume(
        &mut self,
        path: &Path,
        llm: &dyn LlmInvoke,
    ) -> Result<Value, ResumeError> {
        let resume_text = pdf::extract_resume_text(path)?;
        let prompt = prompts::extraction_prompt(&resume_text);
        let reply = llm.invoke(&prompt).await?;
        let data = extraction::extract_json_object(&reply)?;

        self.resume_data = Some(data.clone());
        Ok(data)
    }

    /// Generates interview questions from the current résumé data, storing
    /// and returning the list. With no résumé data — or when generation or
    /// cleaning comes up empty — the generic fallback set is used, so the
    /// caller always gets a non-empty list.
    pub async fn generate_questions(&mut self, llm: &dyn LlmInvoke) -> Vec<String> {
        let Some(data) = &self.resume_data else {
            self.questions = questions::generic_questions();
            return self.questions.clone();
        };

        let skills = data.get("skills").cloned().unwrap_or_else(|| json!([]));
        let experience = data.get("experience").cloned().unwrap_or_else(|| json!([]));
        let education = data.get("education").cloned().unwrap_or_else(|| json!([]));

        let prompt = prompts::question_prompt(
            &skills.to_string(),
            &experience.to_string(),
            &education.to_string(),
        );

        let cleaned = match llm.invoke(&prompt).await {
            Ok(reply) => questions::clean_question_lines(&reply),
            Err(e) => {
                tracing::warn!("Question generation failed, using generic set: {e}");
                Vec::new()
            }
        };

        self.questions = if cleaned.is_empty() {
            questions::generic_questions()
        } else {
            cleaned
        };
        self.questions.clone()
    }

    /// Evaluates one answer to one question, returning the model's critique
    /// text verbatim. When résumé data exists, a candidate-background block
    /// is included in the prompt; otherwise the evaluation is context-free.
    pub async fn evaluate_answer(
        &self,
        question: &str,
        answer: &str,
        llm: &dyn LlmInvoke,
    ) -> Result<String, LlmError> {
        let context = self
            .resume_data
            .as_ref()
            .map(candidate_context_block)
            .unwrap_or_default();

        let prompt = prompts::evaluation_prompt(&context, question, answer);
        llm.invoke(&prompt).await
    }
}

/// Builds the candidate-background block from résumé data. The `skills`
/// field may be a plain list or an object with a `technical` sub-list;
/// missing fields render as empty lists.
fn candidate_context_block(data: &Value) -> String {
    let skills = data.get("skills").cloned().unwrap_or_else(|| json!([]));
    let experience_count = data
        .get("experience")
        .and_then(Value::as_array)
        .map_or(0, Vec::len);
    let technical = data
        .get("skills")
        .and_then(|s| s.get("technical"))
        .cloned()
        .unwrap_or_else(|| json!([]));

    prompts::candidate_context(&skills.to_string(), experience_count, &technical.to_string())
}

/// Session registry. The map lock is held only to look up or insert; the
/// per-session mutex is what serializes operations, so one session's slow
/// LLM call never blocks another session.
#[derive(Clone, Default)]
pub struct SessionStore {
    inner: Arc<RwLock<HashMap<Uuid, Arc<Mutex<InterviewSession>>>>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a fresh session and returns its id and handle.
    pub async fn create(&self) -> (Uuid, Arc<Mutex<InterviewSession>>) {
        let id = Uuid::new_v4();
        let session = Arc::new(Mutex::new(InterviewSession::default()));
        self.inner.write().await.insert(id, session.clone());
        (id, session)
    }

    pub async fn get(&self, id: Uuid) -> Option<Arc<Mutex<InterviewSession>>> {
        self.inner.read().await.get(&id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::ScriptedLlm;

    const EXTRACTION_REPLY: &str = r#"{
        "skills": {"technical": ["Rust", "PostgreSQL"], "soft": ["mentoring"]},
        "experience": [{"company": "Acme"}, {"company": "Globex"}],
        "education": [{"degree": "BSc Computer Science"}]
    }"#;

    const QUESTION_REPLY: &str = "Q: How did you use Rust at Acme?\n\
        Question: Describe a schema migration you led at Globex.\n\
        What did your BSc teach you that you still use daily?\n";

    #[tokio::test]
    async fn test_generate_questions_without_resume_is_generic() {
        let llm = ScriptedLlm::failing();
        let mut session = InterviewSession::default();

        let generated = session.generate_questions(&llm).await;

        assert_eq!(generated, questions::generic_questions());
        // No résumé data means no LLM round-trip at all.
        assert!(llm.prompts().is_empty());
    }

    #[tokio::test]
    async fn test_reset_then_generate_is_generic() {
        let llm = ScriptedLlm::failing();
        let mut session = InterviewSession {
            resume_data: Some(serde_json::json!({"skills": ["Rust"]})),
            questions: vec!["leftover".to_string()],
            current_question_index: 2,
        };

        session.reset();
        assert!(session.resume_data.is_none());
        assert!(session.questions.is_empty());
        assert_eq!(session.current_question_index, 0);

        let generated = session.generate_questions(&llm).await;
        assert_eq!(generated, questions::generic_questions());
    }

    #[tokio::test]
    async fn test_parse_failure_then_generate_falls_back() {
        // Model replies with prose instead of JSON.
        let llm = ScriptedLlm::replying(&["Sorry, I cannot parse that resume."]);
        let mut session = InterviewSession::default();

        let mut file = tempfile::Builder::new().suffix(".pdf").tempfile().unwrap();
        std::io::Write::write_all(&mut file, b"not a pdf").unwrap();

        let err = session.parse_resume(file.path(), &llm).await.unwrap_err();
        // Extraction fails before the model is even consulted for garbage
        // bytes; either way no résumé data is stored.
        assert!(matches!(
            err,
            ResumeError::Extraction(_) | ResumeError::Parse { .. }
        ));
        assert!(session.resume_data.is_none());

        let generated = session.generate_questions(&llm).await;
        assert_eq!(generated, questions::generic_questions());
    }

    #[tokio::test]
    async fn test_unparseable_reply_keeps_raw_text() {
        let raw_reply = "Here are the details you asked for, in plain prose.";
        let err = extraction::extract_json_object(raw_reply).unwrap_err();
        match err {
            ResumeError::Parse { raw, .. } => assert_eq!(raw, raw_reply),
            other => panic!("expected Parse, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_personalized_questions_are_cleaned() {
        let llm = ScriptedLlm::replying(&[QUESTION_REPLY]);
        let mut session = InterviewSession {
            resume_data: Some(serde_json::from_str(EXTRACTION_REPLY).unwrap()),
            ..Default::default()
        };

        let generated = session.generate_questions(&llm).await;

        assert!(!generated.is_empty());
        for q in &generated {
            assert!(q.len() > 10, "noise line survived: {q:?}");
            assert!(!q.starts_with("Q: "));
            assert!(!q.starts_with("Question: "));
        }
        assert_eq!(generated, session.questions);

        // The prompt carried the résumé fields, not the fallback path.
        let prompts = llm.prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("Rust"));
        assert!(prompts[0].contains("BSc Computer Science"));
    }

    #[tokio::test]
    async fn test_empty_generation_reply_falls_back() {
        // Reply is all noise lines; cleaning leaves nothing.
        let llm = ScriptedLlm::replying(&["Questions:\n1.\n2.\n"]);
        let mut session = InterviewSession {
            resume_data: Some(serde_json::from_str(EXTRACTION_REPLY).unwrap()),
            ..Default::default()
        };

        let generated = session.generate_questions(&llm).await;
        assert_eq!(generated, questions::generic_questions());
    }

    #[tokio::test]
    async fn test_evaluate_without_resume_omits_context() {
        let llm = ScriptedLlm::replying(&["Solid answer with room to grow."]);
        let session = InterviewSession::default();

        let feedback = session
            .evaluate_answer("Why Rust?", "Memory safety without GC.", &llm)
            .await
            .unwrap();

        assert!(!feedback.is_empty());
        let prompts = llm.prompts();
        assert!(!prompts[0].contains("Candidate Background"));
        assert!(prompts[0].contains("Question: Why Rust?"));
    }

    #[tokio::test]
    async fn test_evaluate_with_resume_includes_context() {
        let llm = ScriptedLlm::replying(&["Good grounding in real experience."]);
        let session = InterviewSession {
            resume_data: Some(serde_json::from_str(EXTRACTION_REPLY).unwrap()),
            ..Default::default()
        };

        let feedback = session
            .evaluate_answer("Tell me about Acme.", "I built the billing system.", &llm)
            .await
            .unwrap();

        assert!(!feedback.is_empty());
        let prompts = llm.prompts();
        assert!(prompts[0].contains("Candidate Background"));
        // Two experience entries -> "2 years" in the context block.
        assert!(prompts[0].contains("Experience Level: 2 years"));
        assert!(prompts[0].contains("PostgreSQL"));
    }

    #[tokio::test]
    async fn test_sessions_are_isolated() {
        let store = SessionStore::new();
        let (id_a, session_a) = store.create().await;
        let (id_b, session_b) = store.create().await;
        assert_ne!(id_a, id_b);

        session_a.lock().await.resume_data = Some(serde_json::json!({"skills": ["Rust"]}));
        assert!(session_b.lock().await.resume_data.is_none());

        let looked_up = store.get(id_a).await.unwrap();
        assert!(looked_up.lock().await.resume_data.is_some());
        assert!(store.get(Uuid::new_v4()).await.is_none());
    }
}
