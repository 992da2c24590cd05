use crate::shared::llm::types::{ChatMessage, ChatRole as LlmRole, LlmProvider};
use contracts::domain::a003_assistant_chat::aggregate::{
    AssistantReplyRequest, AssistantReplyResponse, ChatRole, EMPTY_REPLY_FALLBACK,
    PROVIDER_ERROR_FALLBACK, SYSTEM_INSTRUCTION,
};

/// Преобразовать историю терминала в формат провайдера (с системной инструкцией)
pub fn build_llm_messages(request: &AssistantReplyRequest) -> Vec<ChatMessage> {
    let mut llm_messages = Vec::with_capacity(request.history.len() + 1);
    llm_messages.push(ChatMessage::system(SYSTEM_INSTRUCTION));

    for msg in &request.history {
        llm_messages.push(ChatMessage {
            role: match msg.role {
                ChatRole::User => LlmRole::User,
                ChatRole::Model => LlmRole::Assistant,
            },
            content: msg.text.clone(),
        });
    }

    llm_messages
}

/// Получить ответ ассистента
///
/// Ошибки провайдера не пробрасываются: пользователь всегда получает текст,
/// в худшем случае fallback с телефоном компании.
pub async fn reply(
    provider: &dyn LlmProvider,
    request: AssistantReplyRequest,
) -> AssistantReplyResponse {
    let messages = build_llm_messages(&request);
    tracing::debug!(
        "Assistant request: {} history messages via {}",
        request.history.len(),
        provider.provider_name()
    );

    let text = match provider.chat_completion(messages).await {
        Ok(response) if response.content.trim().is_empty() => {
            tracing::warn!(
                "Assistant returned an empty reply (model: {}, finish_reason: {:?})",
                response.model,
                response.finish_reason
            );
            EMPTY_REPLY_FALLBACK.to_string()
        }
        Ok(response) => {
            tracing::info!(
                "Assistant reply: {} chars, tokens: {:?}",
                response.content.len(),
                response.tokens_used
            );
            response.content
        }
        Err(e) => {
            tracing::error!("Assistant provider error: {}", e);
            PROVIDER_ERROR_FALLBACK.to_string()
        }
    };

    AssistantReplyResponse { text }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::llm::types::{LlmError, LlmResponse, UnconfiguredProvider};
    use async_trait::async_trait;
    use contracts::domain::a003_assistant_chat::aggregate::{ChatMessage as UiMessage, GREETING};
    use std::sync::Mutex;

    /// Провайдер для тестов: отдаёт заданный ответ и запоминает запрос
    struct FakeProvider {
        reply: Result<String, String>,
        seen: Mutex<Vec<ChatMessage>>,
    }

    impl FakeProvider {
        fn answering(text: &str) -> Self {
            Self {
                reply: Ok(text.to_string()),
                seen: Mutex::new(Vec::new()),
            }
        }

        fn failing(error: &str) -> Self {
            Self {
                reply: Err(error.to_string()),
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl LlmProvider for FakeProvider {
        async fn chat_completion(
            &self,
            messages: Vec<ChatMessage>,
        ) -> Result<LlmResponse, LlmError> {
            *self.seen.lock().unwrap() = messages;
            match &self.reply {
                Ok(text) => Ok(LlmResponse {
                    content: text.clone(),
                    tokens_used: Some(42),
                    model: "fake".into(),
                    finish_reason: Some("Stop".into()),
                }),
                Err(e) => Err(LlmError::ApiError(e.clone())),
            }
        }

        fn provider_name(&self) -> &str {
            "fake"
        }
    }

    fn request(user_text: &str) -> AssistantReplyRequest {
        AssistantReplyRequest {
            history: vec![UiMessage::model(GREETING), UiMessage::user(user_text)],
        }
    }

    #[test]
    fn test_build_llm_messages_maps_roles() {
        let messages = build_llm_messages(&request("RCD trips at night"));
        assert_eq!(messages.len(), 3);
        assert_eq!(messages[0].role, LlmRole::System);
        assert_eq!(messages[0].content, SYSTEM_INSTRUCTION);
        assert_eq!(messages[1].role, LlmRole::Assistant);
        assert_eq!(messages[2].role, LlmRole::User);
        assert_eq!(messages[2].content, "RCD trips at night");
    }

    #[tokio::test]
    async fn test_reply_passes_model_text_through() {
        let provider = FakeProvider::answering("Switch off at the consumer unit.");
        let response = reply(&provider, request("Burning smell")).await;
        assert_eq!(response.text, "Switch off at the consumer unit.");

        let seen = provider.seen.lock().unwrap();
        assert_eq!(seen.len(), 3);
        assert_eq!(seen[2].content, "Burning smell");
    }

    #[tokio::test]
    async fn test_empty_reply_uses_fallback() {
        let provider = FakeProvider::answering("   ");
        let response = reply(&provider, request("hello")).await;
        assert_eq!(response.text, EMPTY_REPLY_FALLBACK);
    }

    #[tokio::test]
    async fn test_provider_error_uses_fallback() {
        let provider = FakeProvider::failing("503 upstream");
        let response = reply(&provider, request("hello")).await;
        assert_eq!(response.text, PROVIDER_ERROR_FALLBACK);
    }

    #[tokio::test]
    async fn test_unconfigured_provider_uses_fallback() {
        let provider = UnconfiguredProvider {
            reason: "API_KEY is not set".into(),
        };
        let response = reply(&provider, request("hello")).await;
        assert_eq!(response.text, PROVIDER_ERROR_FALLBACK);
    }
}
