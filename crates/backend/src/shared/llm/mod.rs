pub mod openai_provider;
pub mod types;

pub use types::*;

use crate::shared::config::AssistantConfig;
use once_cell::sync::OnceCell;
use openai_provider::OpenAiProvider;
use std::sync::Arc;

static PROVIDER: OnceCell<Arc<dyn LlmProvider>> = OnceCell::new();

/// Создать провайдера ассистента по конфигурации (однократно при старте)
pub fn initialize_provider(config: &AssistantConfig) -> anyhow::Result<()> {
    let provider: Arc<dyn LlmProvider> = match config.api_key() {
        Some(api_key) => {
            tracing::info!(
                "Assistant provider: {} at {}",
                config.model,
                config.api_endpoint
            );
            Arc::new(OpenAiProvider::new_with_endpoint(
                config.api_endpoint.clone(),
                api_key,
                config.model.clone(),
                config.temperature,
                config.max_tokens,
            ))
        }
        None => {
            tracing::warn!(
                "Environment variable {} is not set; assistant replies will use the fallback text",
                config.api_key_env
            );
            Arc::new(UnconfiguredProvider {
                reason: format!("{} is not set", config.api_key_env),
            })
        }
    };

    PROVIDER
        .set(provider)
        .map_err(|_| anyhow::anyhow!("Assistant provider already initialized"))
}

/// Провайдер, созданный при старте
pub fn get_provider() -> Arc<dyn LlmProvider> {
    PROVIDER
        .get()
        .cloned()
        .unwrap_or_else(|| {
            Arc::new(UnconfiguredProvider {
                reason: "provider was not initialized".into(),
            })
        })
}
