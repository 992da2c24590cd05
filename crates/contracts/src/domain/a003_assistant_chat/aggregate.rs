use serde::{Deserialize, Serialize};

/// Первое сообщение терминала ассистента
pub const GREETING: &str = "TERMINAL ACTIVE. I am the Craik Electrical Field Assistant. Provide a technical query or describe a fault for diagnostic support.";

/// Показывается, когда relay недоступен или ответил ошибкой
pub const DISCONNECTED_FALLBACK: &str = "FATAL ERROR: AI CO-PROCESSOR DISCONNECTED.";

/// Модель вернула пустой ответ
pub const EMPTY_REPLY_FALLBACK: &str = "I'm sorry, I'm having trouble connecting right now. Please call Stuart directly for immediate assistance.";

/// Ошибка провайдера модели
pub const PROVIDER_ERROR_FALLBACK: &str = "I apologize, but I encountered an error. Please contact Craik Electrical Ltd. directly at 07748 317766 for advice.";

/// Системная инструкция ассистента
pub const SYSTEM_INSTRUCTION: &str = r#"You are the AI Assistant for "Craik Electrical Ltd.", a professional NICEIC-approved electrical contractor based in Montrose, Scotland.
Your goal is to provide helpful, safe, and preliminary electrical advice to potential customers.

IMPORTANT SAFETY RULES:
1. ALWAYS prioritize safety. If a situation sounds dangerous (smoke, sparks, wet electricity, exposed wires), tell the user to IMMEDIATELY turn off the power at the main switch and call a professional.
2. NEVER give instructions that would require an unqualified person to open electrical panels or handle live wires.
3. Remind users that for any permanent installation or repair, they should hire a qualified electrician like Stuart Craik.
4. Mention that Craik Electrical Ltd. provides free estimates and can be reached at 07748 317766.

Keep your tone professional, friendly, and local to Montrose."#;

/// Роль сообщения в чате
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

/// Сообщение чата
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            text: text.into(),
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Model,
            text: text.into(),
        }
    }

    pub fn is_user(&self) -> bool {
        self.role == ChatRole::User
    }
}

/// Запрос к relay: вся история диалога
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantReplyRequest {
    pub history: Vec<ChatMessage>,
}

/// Ответ relay: текст ответа модели (или fallback)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistantReplyResponse {
    pub text: String,
}

/// Транскрипт терминала ассистента
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    pub messages: Vec<ChatMessage>,
}

impl Default for Transcript {
    fn default() -> Self {
        Self::new()
    }
}

impl Transcript {
    pub fn new() -> Self {
        Self {
            messages: vec![ChatMessage::model(GREETING)],
        }
    }

    /// Можно ли отправить: непустой ввод и нет запроса в полёте
    pub fn can_submit(input: &str, is_loading: bool) -> bool {
        !input.trim().is_empty() && !is_loading
    }

    /// Добавить сообщение пользователя и вернуть историю для отправки
    pub fn push_user(&mut self, text: impl Into<String>) -> Vec<ChatMessage> {
        self.messages.push(ChatMessage::user(text));
        self.messages.clone()
    }

    pub fn push_reply(&mut self, text: impl Into<String>) {
        self.messages.push(ChatMessage::model(text));
    }

    pub fn push_failure(&mut self) {
        self.push_reply(DISCONNECTED_FALLBACK);
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_starts_with_greeting() {
        let t = Transcript::new();
        assert_eq!(t.len(), 1);
        assert_eq!(t.messages[0].role, ChatRole::Model);
        assert_eq!(t.messages[0].text, GREETING);
    }

    #[test]
    fn test_can_submit() {
        assert!(Transcript::can_submit("RCD keeps tripping", false));
        assert!(!Transcript::can_submit("   ", false));
        assert!(!Transcript::can_submit("RCD keeps tripping", true));
    }

    #[test]
    fn test_push_user_returns_full_history() {
        let mut t = Transcript::new();
        let history = t.push_user("Sparks from socket");
        assert_eq!(history.len(), 2);
        assert!(history[1].is_user());

        t.push_reply("Turn off the power at the main switch.");
        t.push_user("Done");
        t.push_failure();
        assert_eq!(t.len(), 5);
        assert_eq!(t.messages[4].text, DISCONNECTED_FALLBACK);
    }

    #[test]
    fn test_push_user_keeps_raw_text() {
        let mut t = Transcript::new();
        let raw = "  Sparks from socket \n";
        assert!(Transcript::can_submit(raw, false));
        let history = t.push_user(raw);
        assert_eq!(history[1].text, raw);
    }

    #[test]
    fn test_wire_format() {
        let req = AssistantReplyRequest {
            history: vec![ChatMessage::model(GREETING), ChatMessage::user("hi")],
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["history"][0]["role"], "model");
        assert_eq!(json["history"][1]["role"], "user");
        assert_eq!(json["history"][1]["text"], "hi");

        let parsed: AssistantReplyResponse =
            serde_json::from_str(r#"{"text":"ok"}"#).unwrap();
        assert_eq!(parsed.text, "ok");
    }

    #[test]
    fn test_company_phone_in_texts() {
        use crate::shared::branding::CONTACT_PHONE;
        assert!(PROVIDER_ERROR_FALLBACK.contains(CONTACT_PHONE));
        assert!(SYSTEM_INSTRUCTION.contains(CONTACT_PHONE));
    }
}
