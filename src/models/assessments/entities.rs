use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 测评结果
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assessment.ts")]
pub struct Assessment {
    pub id: String,
    pub student_id: String,
    pub subject: String,
    pub assessment_type: String,
    pub score: f64,
    pub max_score: f64,
    // 答错的知识点
    pub weak_areas: Vec<String>,
    pub strong_areas: Vec<String>,
    pub recommendations: Vec<String>,
    // 用时（秒）
    pub time_taken: Option<i64>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
