use axum::{http::StatusCode, Json};

use crate::domain::a003_assistant_chat;
use crate::shared::llm;
use contracts::domain::a003_assistant_chat::aggregate::{
    AssistantReplyRequest, AssistantReplyResponse,
};

/// POST /api/a003-assistant-chat/reply
pub async fn reply(
    Json(payload): Json<AssistantReplyRequest>,
) -> Result<Json<AssistantReplyResponse>, StatusCode> {
    if !payload.history.iter().any(|msg| msg.is_user()) {
        tracing::warn!("Assistant request without a user message rejected");
        return Err(StatusCode::BAD_REQUEST);
    }

    let provider = llm::get_provider();
    let response = a003_assistant_chat::service::reply(provider.as_ref(), payload).await;
    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a003_assistant_chat::aggregate::PROVIDER_ERROR_FALLBACK;

    fn parse(body: &str) -> AssistantReplyRequest {
        serde_json::from_str(body).unwrap()
    }

    #[tokio::test]
    async fn test_history_without_user_message_is_rejected() {
        let payload = parse(r#"{"history":[{"role":"model","text":"CRAIK ASSISTANT ONLINE."}]}"#);
        let result = reply(Json(payload)).await;
        assert_eq!(result.err(), Some(StatusCode::BAD_REQUEST));
    }

    #[tokio::test]
    async fn test_without_provider_returns_fallback_text() {
        let payload = parse(r#"{"history":[{"role":"user","text":"Is a 32A MCB fine for a cooker?"}]}"#);
        let Json(response) = reply(Json(payload)).await.unwrap();
        assert_eq!(response.text, PROVIDER_ERROR_FALLBACK);
    }
}
