//! API request and response types

use crate::dispatch::{ConversationState, DispatchResult, Flow};
use serde::{Deserialize, Serialize};

/// One chat turn from the client. Both fields may be absent or null on the
/// first turn.
#[derive(Debug, Default, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub state: Option<ConversationState>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub reply: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub buttons: Vec<String>,
    pub state: ConversationState,
}

impl From<DispatchResult> for ChatResponse {
    fn from(result: DispatchResult) -> Self {
        Self {
            reply: result.reply,
            buttons: result.choices,
            state: result.next_state,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub flow: Flow,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub details: String,
}

impl ErrorResponse {
    /// Shown to users regardless of cause
    pub const GENERIC: &'static str = "처리 중 오류가 발생했습니다.";

    pub fn new(details: impl Into<String>) -> Self {
        Self {
            error: Self::GENERIC.to_string(),
            details: details.into(),
        }
    }
}
