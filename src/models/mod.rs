pub mod assessments;
pub mod assignments;
pub mod chat_sessions;
pub mod common;
pub mod students;
pub mod tutor;

pub use common::response::ErrorResponse;

use std::collections::HashMap;

/// 自由结构的键值数据（学习偏好、会话上下文等）
pub type JsonMap = HashMap<String, serde_json::Value>;

#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
