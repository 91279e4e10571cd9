use serde::Deserialize;
use ts_rs::TS;

use crate::models::JsonMap;

// POST /ai-tutor 请求体
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/tutor.ts")]
pub struct TutorRequest {
    pub message: String,
    pub subject: String,
    pub session_id: Option<String>,
    pub student_id: String,
    // 新建会话时写入 context_data
    #[ts(type = "Record<string, unknown> | null")]
    pub context: Option<JsonMap>,
}
