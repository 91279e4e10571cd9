use serde::Deserialize;
use ts_rs::TS;

pub const DEFAULT_MAX_GRADE: f64 = 100.0;

// 创建作业
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAssignmentRequest {
    pub student_id: String,
    pub title: String,
    pub subject: String,
    pub description: String,
    pub max_grade: Option<f64>,
    pub due_date: Option<chrono::DateTime<chrono::Utc>>,
}

// POST /assignments 请求体，学生由令牌确定
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct NewAssignmentRequest {
    pub title: String,
    pub subject: String,
    pub description: String,
    pub max_grade: Option<f64>,
    pub due_date: Option<chrono::DateTime<chrono::Utc>>,
}

impl NewAssignmentRequest {
    pub fn for_student(self, student_id: &str) -> CreateAssignmentRequest {
        CreateAssignmentRequest {
            student_id: student_id.to_string(),
            title: self.title,
            subject: self.subject,
            description: self.description,
            max_grade: self.max_grade,
            due_date: self.due_date,
        }
    }
}

// POST /assignment-feedback 请求体
#[derive(Debug, Clone, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentFeedbackRequest {
    pub assignment_id: String,
    pub submission: String,
}

// 批改完成后一次性写入的字段
#[derive(Debug, Clone)]
pub struct GradeAssignmentUpdate {
    pub submission_text: String,
    pub ai_feedback: String,
    pub grade: f64,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
    pub graded_at: chrono::DateTime<chrono::Utc>,
}
