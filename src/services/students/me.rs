use tracing::debug;

use super::StudentService;
use crate::errors::Result;
use crate::models::students::{entities::Student, requests::CreateStudentRequest};
use crate::storage::Storage;
use crate::utils::jwt::BearerClaims;

pub async fn current_student(service: &StudentService, claims: &BearerClaims) -> Result<Student> {
    resolve_student(service.storage.as_ref(), claims).await
}

/// 令牌账号对应的学生档案，作业、测评与会话查询共用
pub(crate) async fn resolve_student(
    storage: &dyn Storage,
    claims: &BearerClaims,
) -> Result<Student> {
    let student = storage
        .get_or_create_student(CreateStudentRequest::with_defaults(
            claims.sub.as_str(),
            claims.full_name(),
        ))
        .await?;
    debug!("Resolved student {} for account {}", student.id, claims.sub);
    Ok(student)
}
