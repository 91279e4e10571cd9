use super::AssignmentService;
use crate::errors::Result;
use crate::models::assignments::entities::Assignment;
use crate::services::students::resolve_student;
use crate::utils::jwt::BearerClaims;

pub async fn list_assignments(
    service: &AssignmentService,
    claims: &BearerClaims,
) -> Result<Vec<Assignment>> {
    let student = resolve_student(service.storage.as_ref(), claims).await?;
    service
        .storage
        .list_assignments_by_student(&student.id)
        .await
}
