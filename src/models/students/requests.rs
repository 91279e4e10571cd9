use serde::Deserialize;

use crate::models::JsonMap;

pub const DEFAULT_FULL_NAME: &str = "Student";
pub const DEFAULT_GRADE_LEVEL: &str = "9th Grade";
pub const DEFAULT_TIMEZONE: &str = "UTC";

// 创建学生档案请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateStudentRequest {
    pub user_id: String,
    pub full_name: String,
    pub grade_level: String,
    pub subjects: Vec<String>,
    pub timezone: String,
    pub learning_goals: Vec<String>,
    pub study_preferences: JsonMap,
}

impl CreateStudentRequest {
    /// 首次访问时自动创建的默认档案
    pub fn with_defaults(user_id: impl Into<String>, full_name: Option<String>) -> Self {
        Self {
            user_id: user_id.into(),
            full_name: full_name
                .filter(|name| !name.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_FULL_NAME.to_string()),
            grade_level: DEFAULT_GRADE_LEVEL.to_string(),
            subjects: vec!["Mathematics".to_string(), "Science".to_string()],
            timezone: DEFAULT_TIMEZONE.to_string(),
            learning_goals: Vec::new(),
            study_preferences: JsonMap::new(),
        }
    }
}
