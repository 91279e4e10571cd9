use tracing::info;

use super::AssessmentService;
use crate::errors::{EduTutorError, Result};
use crate::models::assessments::{entities::Assessment, requests::NewAssessmentRequest};
use crate::services::students::resolve_student;
use crate::utils::jwt::BearerClaims;

pub async fn record_assessment(
    service: &AssessmentService,
    claims: &BearerClaims,
    req: NewAssessmentRequest,
) -> Result<Assessment> {
    if req.subject.trim().is_empty() {
        return Err(EduTutorError::validation("科目不能为空"));
    }
    let in_range = req.max_score > 0.0 && (0.0..=req.max_score).contains(&req.score);
    if !in_range {
        return Err(EduTutorError::validation(format!(
            "分数 {} 不在 0 到 {} 之间",
            req.score, req.max_score
        )));
    }

    let student = resolve_student(service.storage.as_ref(), claims).await?;
    let assessment = service
        .storage
        .create_assessment(req.for_student(&student.id))
        .await?;
    info!(
        "Assessment {} recorded for student {} ({})",
        assessment.id, student.id, assessment.subject
    );
    Ok(assessment)
}
