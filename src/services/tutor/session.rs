use tracing::info;

use super::TutorService;
use crate::errors::{EduTutorError, Result};
use crate::models::chat_sessions::entities::{ChatSession, SessionStatus};
use crate::services::students::resolve_student;
use crate::utils::jwt::BearerClaims;

/// 当前账号在该科目下可续接的会话
pub async fn active_session(
    service: &TutorService,
    claims: &BearerClaims,
    subject: &str,
) -> Result<Option<ChatSession>> {
    let student = resolve_student(service.storage.as_ref(), claims).await?;
    service
        .storage
        .find_active_chat_session(&student.id, subject)
        .await
}

/// 只允许会话所属账号结束会话
pub async fn complete_session(
    service: &TutorService,
    user_id: &str,
    session_id: &str,
) -> Result<ChatSession> {
    let storage = &service.storage;
    let not_found = || EduTutorError::not_found(format!("会话不存在: {session_id}"));

    let session = storage
        .get_chat_session_by_id(session_id)
        .await?
        .ok_or_else(not_found)?;

    let owned = storage
        .get_student_by_id(&session.student_id)
        .await?
        .is_some_and(|student| student.user_id == user_id);
    if !owned {
        return Err(not_found());
    }

    let session = storage
        .update_chat_session_status(session_id, SessionStatus::Completed)
        .await?
        .ok_or_else(not_found)?;
    info!("Chat session {} marked as completed", session.id);
    Ok(session)
}
