use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::JsonMap;

// 每个账号唯一对应一个学生档案
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/student.ts")]
pub struct Student {
    // 唯一 ID
    pub id: String,
    // 账号 ID（认证服务签发的 sub）
    pub user_id: String,
    // 姓名
    pub full_name: String,
    // 年级
    pub grade_level: String,
    // 学习科目
    pub subjects: Vec<String>,
    // 头像
    pub profile_picture: Option<String>,
    // 时区
    pub timezone: String,
    // 学习目标
    pub learning_goals: Vec<String>,
    // 学习偏好
    #[ts(type = "Record<string, unknown>")]
    pub study_preferences: JsonMap,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
