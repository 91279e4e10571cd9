use tracing::info;

use super::AssignmentService;
use crate::errors::{EduTutorError, Result};
use crate::models::assignments::{entities::Assignment, requests::NewAssignmentRequest};
use crate::services::students::resolve_student;
use crate::utils::jwt::BearerClaims;

pub async fn create_assignment(
    service: &AssignmentService,
    claims: &BearerClaims,
    req: NewAssignmentRequest,
) -> Result<Assignment> {
    if req.title.trim().is_empty() || req.description.trim().is_empty() {
        return Err(EduTutorError::validation("作业标题和要求不能为空"));
    }
    if req.max_grade.is_some_and(|max| max <= 0.0) {
        return Err(EduTutorError::validation("满分必须大于 0"));
    }

    let student = resolve_student(service.storage.as_ref(), claims).await?;
    let assignment = service
        .storage
        .create_assignment(req.for_student(&student.id))
        .await?;
    info!(
        "Assignment {} created for student {}",
        assignment.id, student.id
    );
    Ok(assignment)
}
