//! Minimal Groq chat-completions client (OpenAI-compatible API).
//!
//! We only call chat/completions once per request and read back the text of
//! the first choice. Calls are instrumented and log model name, latency,
//! and token usage (not contents).
//!
//! NOTE: We never log the API key and we keep payload truncations short.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::error::ApiError;

#[derive(Clone)]
pub struct Groq {
  pub client: reqwest::Client,
  pub api_key: String,
  pub base_url: String,
  pub model: String,
}

impl Groq {
  /// Construct the client if we find GROQ_API_KEY; otherwise return None.
  pub fn from_env() -> Option<Self> {
    let api_key = std::env::var("GROQ_API_KEY").ok()?;
    let base_url = std::env::var("GROQ_BASE_URL")
      .unwrap_or_else(|_| "https://api.groq.com/openai/v1".into());
    let model = std::env::var("GROQ_MODEL").unwrap_or_else(|_| "llama3-70b-8192".into());

    // No explicit timeout: a slow upstream call fails the request whenever
    // the transport gives up. No retries either way.
    let client = reqwest::Client::new();

    Some(Self { client, api_key, base_url, model })
  }

  /// Single-turn chat completion. Sends exactly one user-role message and
  /// returns the raw text of the first choice.
  #[instrument(level = "info", skip(self, prompt), fields(model = %self.model, prompt_len = prompt.len()))]
  pub async fn chat(
    &self,
    prompt: &str,
    temperature: f32,
    max_tokens: Option<u32>,
  ) -> Result<String, ApiError> {
    let url = format!("{}/chat/completions", self.base_url);
    let req = ChatCompletionRequest {
      model: self.model.clone(),
      messages: vec![ChatMessageReq { role: "user".into(), content: prompt.into() }],
      temperature,
      max_tokens,
    };

    let start = std::time::Instant::now();
    let res = self
      .client
      .post(&url)
      .header(USER_AGENT, "mcquiz-backend/0.1")
      .header(CONTENT_TYPE, "application/json")
      .header(AUTHORIZATION, format!("Bearer {}", self.api_key))
      .json(&req)
      .send()
      .await
      .map_err(|e| ApiError::UpstreamCallFailed(e.to_string()))?;

    if !res.status().is_success() {
      let status = res.status();
      let body = res.text().await.unwrap_or_default();
      let msg = extract_groq_error(&body).unwrap_or(body);
      return Err(ApiError::UpstreamCallFailed(format!("Groq HTTP {}: {}", status, msg)));
    }

    let body: ChatCompletionResponse = res
      .json()
      .await
      .map_err(|e| ApiError::UpstreamCallFailed(e.to_string()))?;
    if let Some(usage) = &body.usage {
      info!(prompt_tokens = ?usage.prompt_tokens, completion_tokens = ?usage.completion_tokens, total_tokens = ?usage.total_tokens, "Groq usage");
    }

    let text = body
      .choices
      .into_iter()
      .next()
      .and_then(|c| c.message.content)
      .ok_or_else(|| ApiError::UpstreamCallFailed("completion response contained no choices".into()))?;

    info!(elapsed = ?start.elapsed(), reply_len = text.len(), "Groq reply received");
    Ok(text.trim().to_string())
  }
}

// --- Chat DTOs ---

#[derive(Serialize)]
struct ChatCompletionRequest {
  model: String,
  messages: Vec<ChatMessageReq>,
  temperature: f32,
  #[serde(skip_serializing_if = "Option::is_none")]
  max_tokens: Option<u32>,
}
#[derive(Serialize)]
struct ChatMessageReq {
  role: String,
  content: String,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
  choices: Vec<ChatChoice>,
  #[serde(default)]
  usage: Option<Usage>,
}
#[derive(Deserialize)]
struct ChatChoice {
  message: ChatMessageResp,
}
#[derive(Deserialize)]
struct ChatMessageResp {
  content: Option<String>,
}
#[derive(Deserialize)]
struct Usage {
  #[serde(default)]
  prompt_tokens: Option<u32>,
  #[serde(default)]
  completion_tokens: Option<u32>,
  #[serde(default)]
  total_tokens: Option<u32>,
}

/// Try to extract a clean error message from a Groq error body.
fn extract_groq_error(body: &str) -> Option<String> {
  #[derive(Deserialize)]
  struct EWrap {
    error: EObj,
  }
  #[derive(Deserialize)]
  struct EObj {
    message: String,
  }
  match serde_json::from_str::<EWrap>(body) {
    Ok(w) => Some(w.error.message),
    Err(_) => None,
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn extract_groq_error_reads_the_standard_shape() {
    let body = r#"{"error":{"message":"Invalid API Key","type":"invalid_request_error"}}"#;
    assert_eq!(extract_groq_error(body), Some("Invalid API Key".into()));
  }

  #[test]
  fn extract_groq_error_ignores_other_bodies() {
    assert_eq!(extract_groq_error("service unavailable"), None);
    assert_eq!(extract_groq_error(r#"{"detail":"nope"}"#), None);
  }

  #[test]
  fn request_body_serializes_the_single_user_message() {
    let req = ChatCompletionRequest {
      model: "llama3-70b-8192".into(),
      messages: vec![ChatMessageReq { role: "user".into(), content: "hello".into() }],
      temperature: 0.7,
      max_tokens: None,
    };
    let json = serde_json::to_value(&req).unwrap();
    assert_eq!(json["model"], "llama3-70b-8192");
    assert_eq!(json["messages"].as_array().unwrap().len(), 1);
    assert_eq!(json["messages"][0]["role"], "user");
    // max_tokens is omitted entirely when unset.
    assert!(json.get("max_tokens").is_none());
  }
}
