//! Wire types for the `{action, payload}` / `{result}` envelope.
pub mod action;
pub mod audio;
pub mod content;
pub mod request;
pub mod response;

//re-export types for easier access
pub use action::Action;
pub use content::{ChatMessage, ChatRole, Difficulty, QaPair, RemarkKind, UserDetails};
pub use request::RpcRequest;
pub use response::{
    BeYouPersonaResponse, FounderRemark, GlobalChatReply, OceanQueryResult, RpcResponse,
    ScenarioResponse, TranslatedResult,
};
