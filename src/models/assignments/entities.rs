use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 作业状态
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub enum AssignmentStatus {
    Pending,   // 待提交
    Submitted, // 已提交
    Graded,    // 已批改
    Completed, // 已完成
}

impl AssignmentStatus {
    pub const PENDING: &'static str = "pending";
    pub const SUBMITTED: &'static str = "submitted";
    pub const GRADED: &'static str = "graded";
    pub const COMPLETED: &'static str = "completed";
}

impl<'de> Deserialize<'de> for AssignmentStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的作业状态: '{s}'. 支持的状态: pending, submitted, graded, completed"
            ))
        })
    }
}

impl std::fmt::Display for AssignmentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssignmentStatus::Pending => write!(f, "{}", AssignmentStatus::PENDING),
            AssignmentStatus::Submitted => write!(f, "{}", AssignmentStatus::SUBMITTED),
            AssignmentStatus::Graded => write!(f, "{}", AssignmentStatus::GRADED),
            AssignmentStatus::Completed => write!(f, "{}", AssignmentStatus::COMPLETED),
        }
    }
}

impl std::str::FromStr for AssignmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            AssignmentStatus::PENDING => Ok(AssignmentStatus::Pending),
            AssignmentStatus::SUBMITTED => Ok(AssignmentStatus::Submitted),
            AssignmentStatus::GRADED => Ok(AssignmentStatus::Graded),
            AssignmentStatus::COMPLETED => Ok(AssignmentStatus::Completed),
            _ => Err(format!("Invalid assignment status: {s}")),
        }
    }
}

// 作业
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct Assignment {
    // 唯一 ID
    pub id: String,
    // 所属学生 ID
    pub student_id: String,
    // 标题
    pub title: String,
    // 科目
    pub subject: String,
    // 作业要求
    pub description: String,
    // 学生提交内容
    pub submission_text: Option<String>,
    // AI 批改反馈，与 grade 一同写入
    pub ai_feedback: Option<String>,
    // 教师反馈
    pub teacher_feedback: Option<String>,
    // 分数，与 ai_feedback 一同写入
    pub grade: Option<f64>,
    // 满分
    pub max_grade: f64,
    // 状态
    pub status: AssignmentStatus,
    // 截止时间
    pub due_date: Option<chrono::DateTime<chrono::Utc>>,
    pub submitted_at: Option<chrono::DateTime<chrono::Utc>>,
    pub graded_at: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
