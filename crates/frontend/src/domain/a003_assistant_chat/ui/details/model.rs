use crate::shared::api_utils::api_url;
use contracts::domain::a003_assistant_chat::aggregate::{
    AssistantReplyRequest, AssistantReplyResponse, ChatMessage,
};
use gloo_net::http::Request;

const REPLY_PATH: &str = "/api/a003-assistant-chat/reply";

/// Отправить историю диалога и получить ответ ассистента
pub async fn fetch_reply(history: Vec<ChatMessage>) -> Result<AssistantReplyResponse, String> {
    let body = AssistantReplyRequest { history };

    let response = Request::post(&api_url(REPLY_PATH))
        .json(&body)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .json::<AssistantReplyResponse>()
        .await
        .map_err(|e| e.to_string())
}
