use serde::{Deserialize, Serialize};

/// Response envelope `{"result": ...}`. A missing `result` reads as its default (`null` for JSON).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RpcResponse<T = serde_json::Value> {
    #[serde(default)]
    pub result: T,
}

/// Opaque results whose shape belongs to the backend.
pub type ScenarioResponse = serde_json::Value;
pub type OceanQueryResult = serde_json::Value;
pub type GlobalChatReply = serde_json::Value;
pub type BeYouPersonaResponse = serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslatedResult {
    pub humanized: String,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deep_dive: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FounderRemark {
    pub remark: String,
    pub quote: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_result_is_null() {
        let resp: RpcResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.result.is_null());
    }

    #[test]
    fn test_translated_result_without_deep_dive() {
        let json = r#"{"humanized":"Bonjour","summary":"Résumé"}"#;
        let result: TranslatedResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.humanized, "Bonjour");
        assert_eq!(result.deep_dive, None);
    }
}
