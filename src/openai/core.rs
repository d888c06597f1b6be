use std::time::Duration;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use thiserror::Error;

#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq)]
pub enum Role {
    #[serde(rename = "user")]
    User,
    #[serde(rename = "assistant")]
    Assistant,
}

/// A single transcript entry. Immutable once created; ordering in the
/// transcript is conversation order and is replayed to the API verbatim.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: &str) -> Self {
        Message {
            role,
            content: content.to_string(),
        }
    }
}

/// Failure categories for a completion call. All categories render
/// identically to the user; the distinction exists so callers can
/// differentiate handling later without changing the external contract.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("network error: {0}")]
    Network(String),
    #[error("authorization failed: {0}")]
    Auth(String),
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    #[error("empty response from model")]
    EmptyReply,
}

/// Requests the next chat completion for the full transcript and returns
/// the reply text. Stateless; the entire history is sent on every call
/// with no truncation or windowing.
pub async fn completion(
    messages: &[Message],
    api_hostname: &str,
    api_key: &str,
    model: &str,
) -> Result<String, CompletionError> {
    let payload = json!({
        "model": model,
        "messages": messages,
    });
    let url = format!("{}/v1/chat/completions", api_hostname.trim_end_matches("/"));
    let response = reqwest::Client::new()
        .post(url)
        .bearer_auth(api_key)
        .header("Content-Type", "application/json")
        .timeout(Duration::from_secs(60 * 10))
        .json(&payload)
        .send()
        .await
        .map_err(|e| CompletionError::Network(e.to_string()))?;

    let status = response.status();
    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        let body = response.text().await.unwrap_or_default();
        return Err(CompletionError::Auth(format!("{}: {}", status, body)));
    }
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(CompletionError::Network(format!("{}: {}", status, body)));
    }

    let resp: Value = response
        .json()
        .await
        .map_err(|e| CompletionError::MalformedResponse(e.to_string()))?;

    let reply = resp["choices"][0]["message"]["content"]
        .as_str()
        .ok_or_else(|| {
            CompletionError::MalformedResponse(format!("no reply text in response: {}", resp))
        })?;

    if reply.trim().is_empty() {
        return Err(CompletionError::EmptyReply);
    }

    Ok(reply.to_string())
}
