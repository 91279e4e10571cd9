use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::JsonMap;

// 消息角色
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export, export_to = "../frontend/src/types/generated/chat.ts")]
pub enum ChatRole {
    User,
    Assistant,
}

// 会话中的单条消息
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/chat.ts")]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
            timestamp: chrono::Utc::now(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
            timestamp: chrono::Utc::now(),
        }
    }
}

// 会话状态
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/chat.ts")]
pub enum SessionStatus {
    Active,    // 进行中，可被续接
    Completed, // 已结束
    Archived,  // 已归档
}

impl SessionStatus {
    pub const ACTIVE: &'static str = "active";
    pub const COMPLETED: &'static str = "completed";
    pub const ARCHIVED: &'static str = "archived";
}

impl<'de> Deserialize<'de> for SessionStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的会话状态: '{s}'. 支持的状态: active, completed, archived"
            ))
        })
    }
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionStatus::Active => write!(f, "{}", SessionStatus::ACTIVE),
            SessionStatus::Completed => write!(f, "{}", SessionStatus::COMPLETED),
            SessionStatus::Archived => write!(f, "{}", SessionStatus::ARCHIVED),
        }
    }
}

impl std::str::FromStr for SessionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            SessionStatus::ACTIVE => Ok(SessionStatus::Active),
            SessionStatus::COMPLETED => Ok(SessionStatus::Completed),
            SessionStatus::ARCHIVED => Ok(SessionStatus::Archived),
            _ => Err(format!("Invalid session status: {s}")),
        }
    }
}

// 辅导会话，按 (学生, 科目) 续接
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/chat.ts")]
pub struct ChatSession {
    pub id: String,
    pub student_id: String,
    pub subject: String,
    pub session_title: Option<String>,
    // 只追加、保持顺序
    pub messages: Vec<ChatMessage>,
    #[ts(type = "Record<string, unknown>")]
    pub context_data: JsonMap,
    pub session_status: SessionStatus,
    // 每次写入消息递增，用于乐观并发控制
    pub version: i64,
    pub last_message_at: chrono::DateTime<chrono::Utc>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
