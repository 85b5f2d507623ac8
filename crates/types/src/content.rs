use serde::{Deserialize, Serialize};

/// Free-form profile the caller collects before persona generation.
/// The backend owns its shape, so it travels as raw JSON.
pub type UserDetails = serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

/// One turn of a chat history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    role: ChatRole,
    text: String,
}

impl ChatMessage {
    pub fn new(role: ChatRole, text: &str) -> Self {
        Self {
            role,
            text: text.to_string(),
        }
    }

    pub fn user(text: &str) -> Self {
        Self::new(ChatRole::User, text)
    }

    pub fn model(text: &str) -> Self {
        Self::new(ChatRole::Model, text)
    }

    pub fn role(&self) -> ChatRole {
        self.role
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QaPair {
    pub question: String,
    pub answer: String,
}

impl QaPair {
    pub fn new(question: &str, answer: &str) -> Self {
        Self {
            question: question.to_string(),
            answer: answer.to_string(),
        }
    }
}

/// Scenario difficulty. Scenario generation defaults to `Medium`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

/// Which flow a founder remark comments on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum RemarkKind {
    Ocean,
    Scenario,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_wire_names() {
        assert_eq!(serde_json::to_string(&Difficulty::default()).unwrap(), r#""MEDIUM""#);
        assert_eq!(serde_json::to_string(&Difficulty::Hard).unwrap(), r#""HARD""#);
        let easy: Difficulty = serde_json::from_str(r#""EASY""#).unwrap();
        assert_eq!(easy, Difficulty::Easy);
    }

    #[test]
    fn test_remark_kind_wire_names() {
        assert_eq!(serde_json::to_string(&RemarkKind::Ocean).unwrap(), r#""OCEAN""#);
        assert_eq!(serde_json::to_string(&RemarkKind::Scenario).unwrap(), r#""SCENARIO""#);
    }

    #[test]
    fn test_chat_message_serialize() {
        let json = serde_json::to_string(&ChatMessage::user("hello")).unwrap();
        assert_eq!(json, r#"{"role":"user","text":"hello"}"#);
    }
}
