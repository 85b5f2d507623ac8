use crate::error::{RpcError, SpeechError};
use nexus_native_utils::{AudioBuffer, decode_speech, shared_context};
use nexus_types::audio::{SPEECH_CHANNELS, SPEECH_PCM16_SAMPLE_RATE};
use nexus_types::request::{
    AssessmentQuestionsPayload, BeYouPersonaPayload, DEFAULT_SPEECH_LANGUAGE, DeepDivePayload,
    FounderRemarkPayload, GlobalChatPayload, MissionImagePayload, OceanQueryPayload,
    PersonaChatPayload, QuickRecapPayload, ScenarioPayload, SpeechPayload, TranslatePayload,
};
use nexus_types::{
    BeYouPersonaResponse, ChatMessage, Difficulty, FounderRemark, GlobalChatReply,
    OceanQueryResult, QaPair, RemarkKind, RpcRequest, ScenarioResponse, TranslatedResult,
    UserDetails,
};
use serde::de::DeserializeOwned;

pub(crate) mod config;
mod consts;
pub mod fallback;
pub(crate) mod transport;

use fallback::{log_and_raise, or_fallback};
use transport::{HttpTransport, RpcTransport};

/// Typed front for the backend's action endpoint.
///
/// Adapters either swallow failures and return a fixed fallback (see
/// [`fallback`]) or hand the [`RpcError`] back to the caller.
pub struct NexusClient<T: RpcTransport = HttpTransport> {
    transport: T,
}

impl NexusClient<HttpTransport> {
    pub fn new(config: config::Config) -> Self {
        Self::with_transport(HttpTransport::new(&config))
    }
}

impl<T: RpcTransport> NexusClient<T> {
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    async fn call<R: DeserializeOwned>(&self, request: RpcRequest) -> Result<R, RpcError> {
        let result = self.transport.call(request).await?;
        Ok(serde_json::from_value(result)?)
    }

    pub async fn generate_quick_recap(&self, past_topic: &str, current_topic: &str) -> String {
        let request = RpcRequest::GenerateQuickRecap(QuickRecapPayload {
            past_topic: past_topic.to_string(),
            current_topic: current_topic.to_string(),
        });
        or_fallback(self.call(request).await, "Quick Recap Error", || {
            fallback::QUICK_RECAP.to_string()
        })
    }

    /// On failure the untranslated input comes back as-is.
    pub async fn translate_engine_result(
        &self,
        humanized: &str,
        summary: &str,
        target_language: &str,
        deep_dive: Option<&str>,
    ) -> TranslatedResult {
        let request = RpcRequest::TranslateEngineResult(TranslatePayload {
            humanized: humanized.to_string(),
            summary: summary.to_string(),
            target_language: target_language.to_string(),
            deep_dive: deep_dive.map(str::to_string),
        });
        or_fallback(self.call(request).await, "Translation Error", || {
            TranslatedResult {
                humanized: humanized.to_string(),
                summary: summary.to_string(),
                deep_dive: deep_dive.map(str::to_string),
            }
        })
    }

    pub async fn generate_scenario(
        &self,
        topic: &str,
        grade: &str,
        difficulty: Option<Difficulty>,
    ) -> Result<ScenarioResponse, RpcError> {
        let request = RpcRequest::GenerateScenario(ScenarioPayload {
            topic: topic.to_string(),
            grade: grade.to_string(),
            difficulty: difficulty.unwrap_or_default(),
        });
        log_and_raise(self.call(request).await, "Scenario Gen Error")
    }

    pub async fn engine_ocean_query(
        &self,
        query: OceanQueryPayload,
    ) -> Result<OceanQueryResult, RpcError> {
        let request = RpcRequest::EngineOceanQuery(query);
        log_and_raise(self.call(request).await, "Ocean Query Error")
    }

    pub async fn deep_dive_query(&self, original_query: &str, context: &str) -> String {
        let request = RpcRequest::DeepDiveQuery(DeepDivePayload {
            original_query: original_query.to_string(),
            context: context.to_string(),
        });
        or_fallback(self.call(request).await, "Deep Dive Error", || {
            fallback::DEEP_DIVE.to_string()
        })
    }

    /// Synthesises `text` and decodes it into a 24 kHz mono buffer from the
    /// shared playback context. Any failure yields `None`.
    pub async fn generate_speech(
        &self,
        text: &str,
        target_language: Option<&str>,
    ) -> Option<AudioBuffer> {
        or_fallback(
            self.try_generate_speech(text, target_language).await,
            "Speech Gen Error",
            || None,
        )
    }

    /// Same as [`generate_speech`](Self::generate_speech) but reports why no
    /// buffer was produced. Blank text and an empty audio result are `Ok(None)`.
    pub async fn try_generate_speech(
        &self,
        text: &str,
        target_language: Option<&str>,
    ) -> Result<Option<AudioBuffer>, SpeechError> {
        if text.trim().is_empty() {
            return Ok(None);
        }
        let request = RpcRequest::GenerateSpeech(SpeechPayload {
            text: text.to_string(),
            target_language: target_language
                .unwrap_or(DEFAULT_SPEECH_LANGUAGE)
                .to_string(),
        });
        let audio: Option<String> = self.call(request).await?;
        let Some(audio) = audio.filter(|a| !a.is_empty()) else {
            return Ok(None);
        };

        let buffer = decode_speech(
            &audio,
            shared_context(),
            SPEECH_PCM16_SAMPLE_RATE,
            SPEECH_CHANNELS,
        )?;
        Ok(Some(buffer))
    }

    pub async fn generate_founder_remark(&self, content: &str, kind: RemarkKind) -> FounderRemark {
        let request = RpcRequest::GenerateFounderRemark(FounderRemarkPayload {
            content: content.to_string(),
            kind,
        });
        or_fallback(
            self.call(request).await,
            "Founder Remark Error",
            fallback::founder_remark,
        )
    }

    /// Failures propagate without logging.
    pub async fn global_chat_response(
        &self,
        message: &str,
        history: &[ChatMessage],
    ) -> Result<GlobalChatReply, RpcError> {
        let request = RpcRequest::GlobalChatResponse(GlobalChatPayload {
            message: message.to_string(),
            history: history.to_vec(),
        });
        self.call(request).await
    }

    pub async fn generate_assessment_questions(&self, details: &UserDetails) -> Vec<String> {
        let request = RpcRequest::GenerateAssessmentQuestions(AssessmentQuestionsPayload {
            details: details.clone(),
        });
        or_fallback(
            self.call(request).await,
            "Assessment Questions Error",
            fallback::assessment_questions,
        )
    }

    pub async fn generate_be_you_persona(
        &self,
        details: &UserDetails,
        qa_pairs: &[QaPair],
    ) -> Result<BeYouPersonaResponse, RpcError> {
        let request = RpcRequest::GenerateBeYouPersona(BeYouPersonaPayload {
            details: details.clone(),
            qa_pairs: qa_pairs.to_vec(),
        });
        log_and_raise(self.call(request).await, "BeYou Persona Gen Error")
    }

    pub async fn chat_with_persona(
        &self,
        system_instruction: &str,
        history: &[ChatMessage],
        message: &str,
    ) -> String {
        let request = RpcRequest::ChatWithPersona(PersonaChatPayload {
            system_instruction: system_instruction.to_string(),
            history: history.to_vec(),
            message: message.to_string(),
        });
        or_fallback(self.call(request).await, "Persona Chat Error", || {
            fallback::PERSONA_CHAT.to_string()
        })
    }

    pub async fn generate_mission_image(&self, prompt: &str) -> String {
        let request = RpcRequest::GenerateMissionImage(MissionImagePayload {
            prompt: prompt.to_string(),
        });
        or_fallback(self.call(request).await, "Mission Image Gen Error", || {
            fallback::MISSION_IMAGE.to_string()
        })
    }
}
