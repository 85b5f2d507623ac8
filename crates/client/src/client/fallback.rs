//! Literal values returned by the swallow-path adapters when the backend fails.

use nexus_types::FounderRemark;
use std::fmt::Display;

pub const QUICK_RECAP: &str = "";
pub const DEEP_DIVE: &str = "Nexus depth limit reached.";
pub const FOUNDER_REMARK: &str = "Focus on application.";
pub const FOUNDER_QUOTE: &str = "Synthesis is the only path.";
pub const ASSESSMENT_QUESTIONS: [&str; 5] = [
    "What is your primary motivation?",
    "How do you handle pressure?",
    "What is your legacy?",
    "What is success?",
    "Which tech excites you?",
];
pub const PERSONA_CHAT: &str = "The future self node is temporarily offline.";
pub const MISSION_IMAGE: &str = "";

pub fn founder_remark() -> FounderRemark {
    FounderRemark {
        remark: FOUNDER_REMARK.to_string(),
        quote: FOUNDER_QUOTE.to_string(),
    }
}

pub fn assessment_questions() -> Vec<String> {
    ASSESSMENT_QUESTIONS.iter().map(|q| q.to_string()).collect()
}

/// Logs the failure under `label` and substitutes the fallback.
pub(crate) fn or_fallback<T, E: Display>(
    result: Result<T, E>,
    label: &str,
    fallback: impl FnOnce() -> T,
) -> T {
    result.unwrap_or_else(|e| {
        tracing::error!("{}: {}", label, e);
        fallback()
    })
}

/// Logs the failure under `label` and hands it back untouched.
pub(crate) fn log_and_raise<T, E: Display>(result: Result<T, E>, label: &str) -> Result<T, E> {
    result.inspect_err(|e| tracing::error!("{}: {}", label, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_or_fallback_passes_success_through() {
        let value = or_fallback(Ok::<_, String>(7), "Test", || 0);
        assert_eq!(value, 7);
    }

    #[test]
    fn test_or_fallback_substitutes() {
        let value = or_fallback(Err::<i32, _>("boom"), "Test", || 42);
        assert_eq!(value, 42);
    }

    #[test]
    fn test_log_and_raise_keeps_error() {
        let result = log_and_raise(Err::<i32, _>("boom"), "Test");
        assert_eq!(result, Err("boom"));
    }
}
