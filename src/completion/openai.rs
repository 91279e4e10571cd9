//! OpenAI Chat Completions 兼容接口实现

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, warn};

use super::{CompletionClient, CompletionRequest};
use crate::config::CompletionConfig;
use crate::errors::{EduTutorError, Result};

const CHAT_COMPLETIONS_PATH: &str = "/chat/completions";

#[derive(Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    endpoint: String,
}

impl OpenAiClient {
    pub fn new(config: &CompletionConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()
            .map_err(|e| EduTutorError::configuration(format!("HTTP 客户端初始化失败: {e}")))?;

        if config.api_key.is_empty() {
            warn!("Completion API key is not configured; tutor and feedback requests will fail");
        }

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            endpoint: Self::build_endpoint(&config.base_url),
        })
    }

    fn build_endpoint(base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), CHAT_COMPLETIONS_PATH)
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, request: CompletionRequest) -> Result<String> {
        if self.api_key.is_empty() {
            return Err(EduTutorError::configuration(
                "OpenAI API key not configured",
            ));
        }

        debug!(
            "Sending completion request: model={}, messages={}",
            request.model,
            request.messages.len()
        );

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| EduTutorError::upstream(format!("Completion API request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read completion API error body".to_string());
            return Err(map_http_error(status, &body));
        }

        let parsed: ChatCompletionResponse = response.json().await.map_err(|e| {
            EduTutorError::upstream(format!("Failed to parse completion API response: {e}"))
        })?;

        extract_text_response(parsed)
    }
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

fn extract_text_response(response: ChatCompletionResponse) -> Result<String> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .ok_or_else(|| EduTutorError::upstream("Completion API returned no content"))
}

fn map_http_error(status: StatusCode, body: &str) -> EduTutorError {
    let message = serde_json::from_str::<ErrorResponse>(body)
        .map(|wrapper| wrapper.error.message)
        .unwrap_or_else(|_| body.to_string());

    EduTutorError::upstream(format!(
        "Completion API returned {}: {}",
        status.as_u16(),
        message
    ))
}
