//! Ollama chat API 연동
//!
//! `POST /api/chat` 에 `format: "json"`, `stream: false` 로 요청하고
//! `message.content` 를 그대로 돌려준다.

use crate::config::Config;
use crate::error::{AppError, Result};
use exhibit_recon_common::prompts::{build_system_prompt, build_user_prompt, few_shot_examples};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

#[derive(Serialize)]
struct ChatOptions {
    num_ctx: u32,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    options: ChatOptions,
    format: &'static str,
    messages: &'a [ChatMessage],
    stream: bool,
}

#[derive(Deserialize, Default)]
struct ChatResponse {
    #[serde(default)]
    message: Option<ChatMessage>,
}

/// 추출 요청 메시지 구성 (system → few-shot → 본문)
pub fn build_messages(text: &str) -> Vec<ChatMessage> {
    let mut messages = vec![ChatMessage::new(Role::System, build_system_prompt())];

    for (user, assistant) in few_shot_examples() {
        messages.push(ChatMessage::new(Role::User, user));
        messages.push(ChatMessage::new(Role::Assistant, assistant));
    }

    messages.push(ChatMessage::new(Role::User, build_user_prompt(text)));
    messages
}

pub struct OllamaClient {
    http: reqwest::Client,
    url: String,
    model: String,
    num_ctx: u32,
    temperature: f32,
}

impl OllamaClient {
    pub fn from_config(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;

        Ok(Self {
            http,
            url: config.ollama_url.clone(),
            model: config.model.clone(),
            num_ctx: config.num_ctx,
            temperature: config.temperature,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn num_ctx(&self) -> u32 {
        self.num_ctx
    }

    /// 채팅 요청을 보내고 응답 본문을 돌려준다
    pub async fn chat(&self, messages: &[ChatMessage]) -> Result<String> {
        let request = ChatRequest {
            model: &self.model,
            options: ChatOptions {
                num_ctx: self.num_ctx,
                temperature: self.temperature,
            },
            format: "json",
            messages,
            stream: false,
        };

        let started = Instant::now();
        let response = self.http.post(&self.url).json(&request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Http(format!("{} {}: {}", status, self.url, body.trim())));
        }

        let body: ChatResponse = response.json().await?;
        let content = body
            .message
            .map(|m| m.content.trim().to_string())
            .unwrap_or_default();

        tracing::debug!(
            model = %self.model,
            elapsed_ms = started.elapsed().as_millis() as u64,
            response_chars = content.chars().count(),
            "ollama chat completed"
        );

        Ok(content)
    }
}
