use serde::Deserialize;
use ts_rs::TS;

#[derive(Debug, Clone, Deserialize)]
pub struct CreateAssessmentRequest {
    pub student_id: String,
    pub subject: String,
    pub assessment_type: String,
    pub score: f64,
    pub max_score: f64,
    #[serde(default)]
    pub weak_areas: Vec<String>,
    #[serde(default)]
    pub strong_areas: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    pub time_taken: Option<i64>,
}

// POST /assessments 请求体，学生由令牌确定
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assessment.ts")]
pub struct NewAssessmentRequest {
    pub subject: String,
    pub assessment_type: String,
    pub score: f64,
    pub max_score: f64,
    #[serde(default)]
    pub weak_areas: Vec<String>,
    #[serde(default)]
    pub strong_areas: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
    pub time_taken: Option<i64>,
}

impl NewAssessmentRequest {
    pub fn for_student(self, student_id: &str) -> CreateAssessmentRequest {
        CreateAssessmentRequest {
            student_id: student_id.to_string(),
            subject: self.subject,
            assessment_type: self.assessment_type,
            score: self.score,
            max_score: self.max_score,
            weak_areas: self.weak_areas,
            strong_areas: self.strong_areas,
            recommendations: self.recommendations,
            time_taken: self.time_taken,
        }
    }
}
