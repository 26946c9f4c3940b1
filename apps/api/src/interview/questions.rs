//! Question post-processing and the generic fallback set.
//!
//! Cleaning free-form model output is a line-oriented heuristic, and is kept
//! deliberately explicit: split on line breaks, trim, drop short noise lines,
//! strip question labels. Tests pin the exact thresholds.

/// Lines whose trimmed length is at or below this are treated as noise
/// (numbering, headers, blank separators) and dropped.
const MIN_QUESTION_LEN: usize = 10;

/// The fixed generic interview questions used whenever personalized
/// generation is unavailable or fails.
pub const GENERIC_QUESTIONS: [&str; 5] = [
    "Tell me about yourself and your professional background.",
    "What are your key strengths and areas of expertise?",
    "Describe a challenging project you've worked on and how you overcame obstacles.",
    "Where do you see yourself professionally in the next 5 years?",
    "What motivates you in your career?",
];

pub fn generic_questions() -> Vec<String> {
    GENERIC_QUESTIONS.iter().map(|q| q.to_string()).collect()
}

/// Cleans the model's multi-line question reply into an ordered question list.
/// May return an empty list; the caller decides whether to fall back.
pub fn clean_question_lines(reply: &str) -> Vec<String> {
    reply
        .lines()
        .filter_map(|line| {
            let line = line.trim();
            if line.len() <= MIN_QUESTION_LEN {
                return None;
            }
            let line = line.strip_prefix("Q: ").unwrap_or(line);
            let line = line.strip_prefix("Question: ").unwrap_or(line);
            Some(line.to_string())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_lines_are_dropped() {
        // Exactly 10 chars is dropped, 11 survives.
        let reply = "1234567890\n12345678901\n";
        assert_eq!(clean_question_lines(reply), vec!["12345678901".to_string()]);
    }

    #[test]
    fn test_labels_are_stripped() {
        let reply = "Q: How do you handle production incidents?\n\
                     Question: What drew you to systems programming?";
        let cleaned = clean_question_lines(reply);
        assert_eq!(
            cleaned,
            vec![
                "How do you handle production incidents?".to_string(),
                "What drew you to systems programming?".to_string(),
            ]
        );
    }

    #[test]
    fn test_blank_and_header_lines_are_dropped() {
        let reply = "Questions:\n\n  \nDescribe a project where you used Rust in production.";
        let cleaned = clean_question_lines(reply);
        assert_eq!(cleaned.len(), 1);
        assert!(cleaned[0].starts_with("Describe a project"));
    }

    #[test]
    fn test_order_is_preserved() {
        let reply = "First, tell me about your last role.\nSecond, what was your biggest challenge?";
        let cleaned = clean_question_lines(reply);
        assert!(cleaned[0].starts_with("First"));
        assert!(cleaned[1].starts_with("Second"));
    }

    #[test]
    fn test_generic_fallback_is_five_questions() {
        let generic = generic_questions();
        assert_eq!(generic.len(), 5);
        assert_eq!(generic[0], "Tell me about yourself and your professional background.");
        assert_eq!(generic[4], "What motivates you in your career?");
    }
}
