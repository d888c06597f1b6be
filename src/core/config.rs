use anyhow::{Result, anyhow};
use std::env;

pub const DEFAULT_WELCOME_MESSAGE: &str =
    "Welcome! I'm your AI companion. How can I assist you today?";

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub api_hostname: String,
    pub api_key: String,
    pub model: String,
    pub transcript_path: String,
    pub welcome_message: String,
}

impl AppConfig {
    /// Build the config from the process environment. The API key is
    /// required and the process must not start a session without it.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("COMPANION_API_KEY")
            .map_err(|_| anyhow!("Missing required env var COMPANION_API_KEY"))?;
        let api_hostname = env::var("COMPANION_LLM_HOST")
            .unwrap_or_else(|_| "https://api.openai.com".to_string());
        let model =
            env::var("COMPANION_LLM_MODEL").unwrap_or_else(|_| "gemini-2.0-flash".to_string());
        let transcript_path = env::var("COMPANION_TRANSCRIPT_PATH")
            .unwrap_or_else(|_| "chat_history.json".to_string());
        let welcome_message = env::var("COMPANION_WELCOME_MESSAGE")
            .unwrap_or_else(|_| DEFAULT_WELCOME_MESSAGE.to_string());

        Ok(Self {
            api_hostname,
            api_key,
            model,
            transcript_path,
            welcome_message,
        })
    }
}
