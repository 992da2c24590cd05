use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    pub assistant: AssistantConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// Каталог собранного frontend (trunk build)
    pub static_dir: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            static_dir: "dist".into(),
        }
    }
}

/// Параметры hosted-модели ассистента (OpenAI-совместимый endpoint)
#[derive(Debug, Deserialize, Clone)]
pub struct AssistantConfig {
    pub api_endpoint: String,
    pub model: String,
    pub temperature: f64,
    pub max_tokens: i32,
    /// Имя переменной окружения с API ключом
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

fn default_api_key_env() -> String {
    "API_KEY".into()
}

impl AssistantConfig {
    /// API ключ из окружения; пустое значение считается отсутствующим
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 3000
static_dir = "dist"

[assistant]
api_endpoint = "https://generativelanguage.googleapis.com/v1beta/openai"
model = "gemini-3-flash-preview"
temperature = 0.7
max_tokens = 2048
api_key_env = "API_KEY"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                return parse_config(&contents);
            } else {
                tracing::warn!("config.toml not found at: {}", config_path.display());
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    parse_config(DEFAULT_CONFIG)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let config: Config = toml::from_str(contents)?;
    if !(0.0..=2.0).contains(&config.assistant.temperature) {
        anyhow::bail!(
            "assistant.temperature must be within 0.0..=2.0, got {}",
            config.assistant.temperature
        );
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_loads() {
        let config = parse_config(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.static_dir, "dist");
        assert_eq!(config.assistant.model, "gemini-3-flash-preview");
        assert_eq!(config.assistant.temperature, 0.7);
        assert_eq!(config.assistant.api_key_env, "API_KEY");
    }

    #[test]
    fn test_server_section_is_optional() {
        let config = parse_config(
            r#"
            [assistant]
            api_endpoint = "http://localhost:11434/v1"
            model = "llama3"
            temperature = 0.2
            max_tokens = 512
            "#,
        )
        .unwrap();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.assistant.api_key_env, "API_KEY");
    }

    #[test]
    fn test_rejects_out_of_range_temperature() {
        let result = parse_config(
            r#"
            [assistant]
            api_endpoint = "x"
            model = "y"
            temperature = 3.5
            max_tokens = 1
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_api_key_env_is_none() {
        let mut config = parse_config(DEFAULT_CONFIG).unwrap().assistant;
        config.api_key_env = "CRAIK_TEST_KEY_THAT_IS_NEVER_SET".into();
        assert_eq!(config.api_key(), None);
    }
}
