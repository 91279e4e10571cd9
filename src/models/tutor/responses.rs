use serde::{Deserialize, Serialize};
use ts_rs::TS;

// POST /ai-tutor 响应体
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/tutor.ts")]
pub struct TutorResponse {
    pub response: String,
    pub session_id: String,
}
