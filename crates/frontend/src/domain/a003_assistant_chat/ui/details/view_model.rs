use super::model;
use contracts::domain::a003_assistant_chat::aggregate::Transcript;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy)]
pub struct AssistantChatViewModel {
    pub transcript: RwSignal<Transcript>,
    pub input: RwSignal<String>,
    pub is_loading: RwSignal<bool>,
}

impl AssistantChatViewModel {
    pub fn new() -> Self {
        Self {
            transcript: RwSignal::new(Transcript::new()),
            input: RwSignal::new(String::new()),
            is_loading: RwSignal::new(false),
        }
    }

    pub fn can_submit(&self) -> bool {
        Transcript::can_submit(&self.input.get(), self.is_loading.get())
    }

    /// Отправить ввод: сообщение сразу попадает в транскрипт, ответ дописывается позже
    pub fn send_command(&self) {
        let text = self.input.get_untracked();
        if !Transcript::can_submit(&text, self.is_loading.get_untracked()) {
            return;
        }

        let history = self
            .transcript
            .try_update(|t| t.push_user(text))
            .unwrap_or_default();
        self.input.set(String::new());
        self.is_loading.set(true);

        let transcript = self.transcript;
        let is_loading = self.is_loading;
        spawn_local(async move {
            let result = model::fetch_reply(history).await;
            // Экран могли покинуть, пока шёл запрос
            let _ = transcript.try_update(|t| match result {
                Ok(reply) => t.push_reply(reply.text),
                Err(e) => {
                    log::error!("assistant relay failed: {}", e);
                    t.push_failure();
                }
            });
            is_loading.try_set(false);
        });
    }
}

impl Default for AssistantChatViewModel {
    fn default() -> Self {
        Self::new()
    }
}
