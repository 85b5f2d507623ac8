use std::fmt;

/// The closed set of verbs understood by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    GenerateQuickRecap,
    TranslateEngineResult,
    GenerateScenario,
    EngineOceanQuery,
    DeepDiveQuery,
    GenerateSpeech,
    GenerateFounderRemark,
    GlobalChatResponse,
    GenerateAssessmentQuestions,
    GenerateBeYouPersona,
    ChatWithPersona,
    GenerateMissionImage,
}

impl Action {
    /// The name carried in the `action` field of the request envelope.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::GenerateQuickRecap => "generateQuickRecap",
            Action::TranslateEngineResult => "translateEngineResult",
            Action::GenerateScenario => "generateScenario",
            Action::EngineOceanQuery => "engineOceanQuery",
            Action::DeepDiveQuery => "deepDiveQuery",
            Action::GenerateSpeech => "generateSpeech",
            Action::GenerateFounderRemark => "generateFounderRemark",
            Action::GlobalChatResponse => "globalChatResponse",
            Action::GenerateAssessmentQuestions => "generateAssessmentQuestions",
            Action::GenerateBeYouPersona => "generateBeYouPersona",
            Action::ChatWithPersona => "chatWithPersona",
            Action::GenerateMissionImage => "generateMissionImage",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_name_matches_as_str() {
        let actions = [
            Action::GenerateQuickRecap,
            Action::TranslateEngineResult,
            Action::GenerateScenario,
            Action::EngineOceanQuery,
            Action::DeepDiveQuery,
            Action::GenerateSpeech,
            Action::GenerateFounderRemark,
            Action::GlobalChatResponse,
            Action::GenerateAssessmentQuestions,
            Action::GenerateBeYouPersona,
            Action::ChatWithPersona,
            Action::GenerateMissionImage,
        ];
        for action in actions {
            let json = serde_json::to_string(&action).unwrap();
            assert_eq!(json, format!("\"{}\"", action.as_str()));
            assert_eq!(serde_json::from_str::<Action>(&json).unwrap(), action);
            assert_eq!(action.to_string(), action.as_str());
        }
    }

    #[test]
    fn test_unknown_action_is_rejected() {
        assert!(serde_json::from_str::<Action>("\"summonDragon\"").is_err());
    }
}
