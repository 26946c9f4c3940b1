//! Extracts the structured résumé object from a raw model reply.
//!
//! Models frequently wrap JSON in markdown code fences despite instructions
//! not to; the parser accepts either a bare object or a fenced one. A raw and
//! a fenced rendition of the same object must parse identically.

use serde_json::Value;

use crate::errors::ResumeError;

/// Locates and parses a single JSON object in `raw`.
///
/// On parse failure the original reply text travels with the error so the
/// caller can surface it for diagnostics. A reply that parses but is not an
/// object (a scalar or a list) is rejected as `InvalidShape`.
pub fn extract_json_object(raw: &str) -> Result<Value, ResumeError> {
    let candidate = strip_json_fences(raw);

    let value: Value = serde_json::from_str(candidate).map_err(|source| ResumeError::Parse {
        source,
        raw: raw.to_string(),
    })?;

    if !value.is_object() {
        return Err(ResumeError::InvalidShape);
    }

    Ok(value)
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
/// A ```json fence is honored anywhere in the reply, since models often
/// preface it with prose.
fn strip_json_fences(text: &str) -> &str {
    if let Some(inner) = fenced_json_block(text) {
        return inner;
    }
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

/// Content of the first ```json ... ``` block, wherever it sits in the text.
fn fenced_json_block(text: &str) -> Option<&str> {
    let start = text.find("```json")? + "```json".len();
    let rest = &text[start..];
    let end = rest.find("```")?;
    Some(rest[..end].trim())
}
