use serde::Deserialize;

use crate::models::JsonMap;

// 创建会话
#[derive(Debug, Clone)]
pub struct CreateChatSessionRequest {
    pub student_id: String,
    pub subject: String,
    pub session_title: Option<String>,
    pub context_data: JsonMap,
}

impl CreateChatSessionRequest {
    pub fn for_subject(student_id: &str, subject: &str, context_data: JsonMap) -> Self {
        Self {
            student_id: student_id.to_string(),
            subject: subject.to_string(),
            session_title: Some(format!("{subject} Help Session")),
            context_data,
        }
    }
}

// GET /ai-tutor/sessions/active 查询参数
#[derive(Debug, Clone, Deserialize)]
pub struct ActiveSessionQuery {
    pub subject: String,
}
