//! 补全服务（LLM）网关
//!
//! 一次请求对应一次同步的 HTTP 往返，不做重试。
//! 编排层只依赖 `CompletionClient` trait，API Key 在构造时注入。

pub mod openai;
#[cfg(test)]
pub mod scripted;

use std::sync::Arc;

use serde::Serialize;

use crate::config::CompletionConfig;
use crate::errors::Result;

pub use openai::OpenAiClient;

/// 补全消息角色
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CompletionRole {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CompletionMessage {
    pub role: CompletionRole,
    pub content: String,
}

impl CompletionMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: CompletionRole::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: CompletionRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: CompletionRole::Assistant,
            content: content.into(),
        }
    }
}

/// 一次补全调用的完整参数
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<CompletionMessage>,
    pub max_tokens: u32,
    pub temperature: f32,
}

#[async_trait::async_trait]
pub trait CompletionClient: Send + Sync {
    /// 返回第一个候选回复的文本
    async fn complete(&self, request: CompletionRequest) -> Result<String>;
}

pub fn create_completion_client(config: &CompletionConfig) -> Result<Arc<dyn CompletionClient>> {
    let client = OpenAiClient::new(config)?;
    Ok(Arc::new(client))
}
