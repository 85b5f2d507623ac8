use crate::action::Action;
use crate::content::{ChatMessage, Difficulty, QaPair, RemarkKind, UserDetails};
use serde::{Deserialize, Serialize};

/// Ocean queries run at this difficulty unless told otherwise.
pub const DEFAULT_OCEAN_DIFFICULTY: &str = "Standard";
/// Speech is synthesised in this language unless told otherwise.
pub const DEFAULT_SPEECH_LANGUAGE: &str = "English";

/// A request envelope. Serialises as `{"action": "<name>", "payload": {...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", content = "payload", rename_all = "camelCase")]
pub enum RpcRequest {
    GenerateQuickRecap(QuickRecapPayload),
    TranslateEngineResult(TranslatePayload),
    GenerateScenario(ScenarioPayload),
    EngineOceanQuery(OceanQueryPayload),
    DeepDiveQuery(DeepDivePayload),
    GenerateSpeech(SpeechPayload),
    GenerateFounderRemark(FounderRemarkPayload),
    GlobalChatResponse(GlobalChatPayload),
    GenerateAssessmentQuestions(AssessmentQuestionsPayload),
    GenerateBeYouPersona(BeYouPersonaPayload),
    ChatWithPersona(PersonaChatPayload),
    GenerateMissionImage(MissionImagePayload),
}

impl RpcRequest {
    pub fn action(&self) -> Action {
        match self {
            RpcRequest::GenerateQuickRecap(_) => Action::GenerateQuickRecap,
            RpcRequest::TranslateEngineResult(_) => Action::TranslateEngineResult,
            RpcRequest::GenerateScenario(_) => Action::GenerateScenario,
            RpcRequest::EngineOceanQuery(_) => Action::EngineOceanQuery,
            RpcRequest::DeepDiveQuery(_) => Action::DeepDiveQuery,
            RpcRequest::GenerateSpeech(_) => Action::GenerateSpeech,
            RpcRequest::GenerateFounderRemark(_) => Action::GenerateFounderRemark,
            RpcRequest::GlobalChatResponse(_) => Action::GlobalChatResponse,
            RpcRequest::GenerateAssessmentQuestions(_) => Action::GenerateAssessmentQuestions,
            RpcRequest::GenerateBeYouPersona(_) => Action::GenerateBeYouPersona,
            RpcRequest::ChatWithPersona(_) => Action::ChatWithPersona,
            RpcRequest::GenerateMissionImage(_) => Action::GenerateMissionImage,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickRecapPayload {
    pub past_topic: String,
    pub current_topic: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslatePayload {
    pub humanized: String,
    pub summary: String,
    pub target_language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deep_dive: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioPayload {
    pub topic: String,
    pub grade: String,
    pub difficulty: Difficulty,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OceanQueryPayload {
    pub query: String,
    pub grade: String,
    pub marks: String,
    pub difficulty: String,
    pub is_syllabus_mode: bool,
}

impl OceanQueryPayload {
    pub fn new(query: &str, grade: &str, marks: &str) -> Self {
        Self {
            query: query.to_string(),
            grade: grade.to_string(),
            marks: marks.to_string(),
            difficulty: DEFAULT_OCEAN_DIFFICULTY.to_string(),
            is_syllabus_mode: false,
        }
    }

    pub fn with_difficulty(mut self, difficulty: &str) -> Self {
        self.difficulty = difficulty.to_string();
        self
    }

    pub fn with_syllabus_mode(mut self, is_syllabus_mode: bool) -> Self {
        self.is_syllabus_mode = is_syllabus_mode;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeepDivePayload {
    pub original_query: String,
    pub context: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeechPayload {
    pub text: String,
    pub target_language: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FounderRemarkPayload {
    pub content: String,
    #[serde(rename = "type")]
    pub kind: RemarkKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlobalChatPayload {
    pub message: String,
    pub history: Vec<ChatMessage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentQuestionsPayload {
    pub details: UserDetails,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeYouPersonaPayload {
    pub details: UserDetails,
    pub qa_pairs: Vec<QaPair>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonaChatPayload {
    pub system_instruction: String,
    pub history: Vec<ChatMessage>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionImagePayload {
    pub prompt: String,
}
