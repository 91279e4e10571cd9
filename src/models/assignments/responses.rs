use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::entities::Assignment;

// 模型返回的结构化批改结果
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentFeedback {
    pub grade: f64,
    pub feedback: String,
    pub strengths: Vec<String>,
    pub improvements: Vec<String>,
    pub encouragement: String,
}

// POST /assignment-feedback 响应体
// 写库失败时 assignment 为 null，但仍返回批改结果
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentFeedbackResponse {
    pub assignment: Option<Assignment>,
    pub feedback: AssignmentFeedback,
}
